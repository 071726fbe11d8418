use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:9010/api/feedback/submit";

/// How long the success banner stays up.
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub notice_duration: Duration,
}

impl Config {
    /// `FEEDBACK_ENDPOINT` is read when the wasm bundle is built, not at runtime.
    pub fn from_build_env() -> Self {
        let endpoint = option_env!("FEEDBACK_ENDPOINT")
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT);
        Config {
            endpoint: endpoint.to_string(),
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            notice_duration: NOTICE_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.endpoint, "http://localhost:9010/api/feedback/submit");
        assert_eq!(config.notice_duration, Duration::from_secs(5));
    }

    #[test]
    fn build_env_keeps_notice_duration() {
        assert_eq!(Config::from_build_env().notice_duration, NOTICE_DURATION);
    }
}
