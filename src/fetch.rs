use crate::content::{check_status, decode_payload, ContentPayload, HydrationError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// GET the content document and decode it.
///
/// The request is bound to `signal`, so aborting the owning controller
/// rejects the pending future with a `Request` error.
pub async fn fetch_content(
    url: &str,
    signal: Option<&web::AbortSignal>,
) -> Result<ContentPayload, HydrationError> {
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::SameOrigin);
    opts.set_signal(signal);

    let request = web::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| HydrationError::Request(format!("{:?}", e)))?;

    let window = web::window().ok_or_else(|| HydrationError::Request("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| HydrationError::Request(format!("{:?}", e)))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|_| HydrationError::Request("response is not a Response".into()))?;

    check_status(resp.status())?;

    let text_promise = resp
        .text()
        .map_err(|e| HydrationError::Body(format!("{:?}", e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| HydrationError::Body(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| HydrationError::Body("body is not text".into()))?;

    decode_payload(&body)
}

/// Abort controller for one in-flight request; aborts on drop.
pub struct InFlight {
    controller: web::AbortController,
}

impl InFlight {
    pub fn new() -> Option<Self> {
        match web::AbortController::new() {
            Ok(controller) => Some(Self { controller }),
            Err(e) => {
                log::warn!("[hydrate] AbortController unavailable: {:?}", e);
                None
            }
        }
    }

    pub fn signal(&self) -> web::AbortSignal {
        self.controller.signal()
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.controller.abort();
    }
}
