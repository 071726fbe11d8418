use tracing::warn;
use web_sys::window;

/// Blocking browser alert. Outside a browser the message only goes to the log.
pub fn alert(message: &str) {
    let shown = window()
        .map(|w| w.alert_with_message(message).is_ok())
        .unwrap_or(false);
    if !shown {
        warn!(alert = message, "alert could not be shown");
    }
}
