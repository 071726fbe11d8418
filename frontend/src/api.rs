// fetch wrappers (WASM / browser)
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Headers, RequestInit, Response};

use crate::error::ApiError;
use crate::feedback::{FeedbackPayload, FeedbackTransport, ServerReply};

/// POSTs `body` as JSON and returns the response with its body text, whatever
/// the status. The caller decides what a non-2xx status means.
pub async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<(Response, String), ApiError> {
    let window = window().ok_or(ApiError::NoWindow)?;
    let headers = Headers::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    headers
        .append("Content-Type", "application/json")
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&serde_json::to_string(body)?));

    let resp = JsFuture::from(window.fetch_with_str_and_init(url, &opts))
        .await
        .map_err(|e| ApiError::Fetch(format!("{:?}", e)))?;
    let response: Response = resp
        .dyn_into()
        .map_err(|_| ApiError::Fetch("not a response".into()))?;

    let text = response.text().map_err(|e| ApiError::Body(format!("{:?}", e)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| ApiError::Body(format!("{:?}", e)))?;
    let s = text.as_string().ok_or_else(|| ApiError::Body("no string".into()))?;
    Ok((response, s))
}

/// The browser's `fetch`, pointed at one endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpTransport { endpoint: endpoint.into() }
    }
}

impl FeedbackTransport for HttpTransport {
    async fn send(&self, payload: &FeedbackPayload) -> Result<ServerReply, ApiError> {
        let (response, text) = post_json(&self.endpoint, payload).await?;
        ServerReply::decode(response.ok(), response.status(), &text)
    }
}
