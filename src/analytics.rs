use wasm_bindgen::prelude::*;

// Funnel events reported to umami.
pub const EVENT_PREVIEW_GENERATED: &str = "preview-generated";
pub const EVENT_PAYWALL_OPENED: &str = "paywall-opened";
pub const EVENT_PAYMENT_COMPLETED: &str = "payment-completed";
pub const EVENT_REPORT_DOWNLOADED: &str = "report-downloaded";
pub const EVENT_CONTACT_SUBMITTED: &str = "contact-submitted";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

/// Record a custom event. Silently a no-op when the umami script is not
/// loaded (adblockers commonly strip it).
pub fn track_event(event: &str) {
    let loaded = js_sys::eval("typeof umami !== 'undefined'")
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if loaded {
        umami_track(event);
    }
}
