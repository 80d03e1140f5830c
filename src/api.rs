//! HTTP client for the ClimateLens backend.
//!
//! Thin typed wrappers over the browser `fetch` API. Every call is a single
//! attempt: no retries, no backoff, no timeout configuration. Failures come
//! back as [`ApiError`] and are turned into generic toast copy by the pages.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, HtmlAnchorElement, Request, RequestInit, Response, Url};

use crate::config::backend_url;

/// Severity bucket used for both the overall rating and individual risks.
///
/// The wire format is the variant name, verbatim. The set is closed: an
/// unknown level in a response is a decode error, not a silent fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    Moderate,
    High,
}

impl RiskLevel {
    /// CSS class carrying the level's display color.
    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "level-low",
            RiskLevel::Medium => "level-medium",
            RiskLevel::Moderate => "level-moderate",
            RiskLevel::High => "level-high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One scored risk category (e.g. "Flood Risk"), value in percent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskItem {
    pub name: String,
    pub value: u8,
    pub level: RiskLevel,
}

/// The free risk summary shown before payment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimatePreview {
    pub address: String,
    pub overall_risk: RiskLevel,
    pub risks: Vec<RiskItem>,
    pub summary: String,
}

/// Contact-form payload. Transient: sent once and discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Pre-flight check: every field must be non-blank before we post.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("browser fetch environment unavailable")]
    NoWindow,

    #[error("request failed to send: {0}")]
    Transport(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    fn transport(err: JsValue) -> Self {
        ApiError::Transport(format!("{err:?}"))
    }
}

/// Fetch the risk preview for an address via `POST /report/preview`.
pub async fn fetch_preview(address: &str) -> Result<ClimatePreview, ApiError> {
    #[derive(Serialize)]
    struct AddressRequest<'a> {
        address: &'a str,
    }

    let request = post_json("/report/preview", &AddressRequest { address })?;
    let response = send(request).await?;
    let body = read_text(response).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Post a contact-form submission via `POST /contact`.
///
/// The backend's success payload carries nothing we render, so it is
/// discarded; only the status matters.
pub async fn submit_contact_form(form: &ContactForm) -> Result<(), ApiError> {
    let request = post_json("/contact", form)?;
    send(request).await?;
    Ok(())
}

/// Fetch the full report PDF via `GET /report/download` and hand it to the
/// browser as a file save.
///
/// The body is wrapped in an object URL and "clicked" through a temporary
/// anchor, the only portable way to trigger a download from WASM.
pub async fn download_full_report(address: &str) -> Result<(), ApiError> {
    let encoded: String = js_sys::encode_uri_component(address).into();
    let url = format!("{}/report/download?address={encoded}", backend_url());

    let opts = RequestInit::new();
    let request = Request::new_with_str_and_init(&url, &opts).map_err(ApiError::transport)?;
    let response = send(request).await?;

    let blob: Blob = JsFuture::from(response.blob().map_err(ApiError::transport)?)
        .await
        .map_err(ApiError::transport)?
        .dyn_into()
        .map_err(ApiError::transport)?;

    save_blob(&blob, &report_filename(address)).map_err(ApiError::transport)
}

/// Filename offered for a downloaded report: whitespace runs collapse to
/// dashes, lowercased.
pub fn report_filename(address: &str) -> String {
    let slug = address
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("climate-risk-report-{slug}.pdf")
}

fn post_json<T: Serialize>(path: &str, payload: &T) -> Result<Request, ApiError> {
    let body = serde_json::to_string(payload)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let url = format!("{}{path}", backend_url());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(ApiError::transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(ApiError::transport)?;
    Ok(request)
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::transport)?;
    let response: Response = value.dyn_into().map_err(ApiError::transport)?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn read_text(response: Response) -> Result<String, ApiError> {
    let text = JsFuture::from(response.text().map_err(ApiError::transport)?)
        .await
        .map_err(ApiError::transport)?;
    Ok(text.as_string().unwrap_or_default())
}

fn save_blob(blob: &Blob, filename: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let object_url = Url::create_object_url_with_blob(blob)?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&object_url);
    anchor.set_download(filename);

    // Firefox ignores clicks on detached anchors.
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&object_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_wire_format_parses() {
        let body = r#"{
            "address": "123 Main St",
            "overallRisk": "Moderate",
            "summary": "Based on our analysis of 123 Main St, this location shows moderate climate risks.",
            "risks": [
                {"name": "Flood Risk", "value": 20, "level": "High"},
                {"name": "Air Quality", "value": 20, "level": "Moderate"},
                {"name": "Heat Risk", "value": 20, "level": "Medium"},
                {"name": "Wildfire Hazard", "value": 20, "level": "Low"},
                {"name": "Wind Damage", "value": 20, "level": "Medium"}
            ]
        }"#;

        let preview: ClimatePreview = serde_json::from_str(body).unwrap();
        assert_eq!(preview.address, "123 Main St");
        assert_eq!(preview.overall_risk, RiskLevel::Moderate);
        assert_eq!(preview.risks.len(), 5);
        assert_eq!(preview.risks[0].name, "Flood Risk");
        assert_eq!(preview.risks[0].level, RiskLevel::High);
        assert_eq!(preview.risks[3].level, RiskLevel::Low);
    }

    #[test]
    fn unknown_risk_level_is_a_decode_error() {
        let result: Result<RiskLevel, _> = serde_json::from_str("\"Severe\"");
        assert!(result.is_err());
    }

    #[test]
    fn address_request_uses_expected_field_name() {
        // The backend deserializes `{"address": ...}` exactly.
        #[derive(Serialize)]
        struct AddressRequest<'a> {
            address: &'a str,
        }
        let json = serde_json::to_string(&AddressRequest { address: "5 Elm Ave" }).unwrap();
        assert_eq!(json, r#"{"address":"5 Elm Ave"}"#);
    }

    #[test]
    fn contact_form_serializes_flat_fields() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
        };
        let json = serde_json::to_string(&form).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Ada","email":"ada@example.com","message":"Hi"}"#
        );
    }

    #[test]
    fn contact_form_completeness_requires_every_field() {
        let mut form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there".into(),
        };
        assert!(form.is_complete());

        form.message = "   ".into();
        assert!(!form.is_complete());

        form.message = "Hello there".into();
        form.email = String::new();
        assert!(!form.is_complete());
    }

    #[test]
    fn report_filename_collapses_whitespace_and_lowercases() {
        assert_eq!(
            report_filename("123 Main St"),
            "climate-risk-report-123-main-st.pdf"
        );
        assert_eq!(
            report_filename("42  Oak   Lane"),
            "climate-risk-report-42-oak-lane.pdf"
        );
    }

    #[test]
    fn risk_level_display_matches_wire_name() {
        for (level, expected) in [
            (RiskLevel::Low, "Low"),
            (RiskLevel::Medium, "Medium"),
            (RiskLevel::Moderate, "Moderate"),
            (RiskLevel::High, "High"),
        ] {
            assert_eq!(level.to_string(), expected);
            assert_eq!(serde_json::to_string(&level).unwrap(), format!("\"{expected}\""));
        }
    }
}
