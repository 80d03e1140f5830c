//! Report workflow: preview phases, download gating, and the cosmetic
//! download progress feed.
//!
//! Everything here is plain state with no DOM or signal dependencies; the
//! Report page owns a [`ReportFlow`] inside a signal and forwards user
//! actions to it.

use crate::api::ClimatePreview;

/// Milliseconds between advances of the download status feed.
pub const DOWNLOAD_STAGE_MILLIS: u64 = 1500;

/// Status strings shown after the initial "fetching" message, in order.
const DOWNLOAD_STAGES: [&str; 4] = [
    "Using intelligent GPT-5 AI...",
    "Forming the perfect report...",
    "Almost there...",
    "Finalizing report...",
];

/// Where the Report page currently is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportPhase {
    Idle,
    LoadingPreview,
    PreviewReady,
    Downloading,
}

/// Raised when a submitted address is empty or whitespace-only. Checked
/// before any request goes out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlankAddress;

/// Outcome of a download request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadGate {
    /// No preview on screen; nothing to download.
    NoPreview,
    /// The paid flag is not set: open the paywall, state unchanged.
    PaymentRequired,
    /// Entitled; the flow has moved to [`ReportPhase::Downloading`].
    Started,
}

/// Trim a raw address, rejecting blank input.
pub fn normalized_address(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The preview/download state machine.
///
/// Phases: `Idle → LoadingPreview → PreviewReady → (Idle | Downloading →
/// PreviewReady)`. The held preview always reflects the most recently
/// *resolved* request; a failed refresh keeps the last good preview on
/// screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportFlow {
    phase: ReportPhase,
    preview: Option<ClimatePreview>,
}

impl Default for ReportFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFlow {
    pub fn new() -> Self {
        Self {
            phase: ReportPhase::Idle,
            preview: None,
        }
    }

    pub fn phase(&self) -> ReportPhase {
        self.phase
    }

    pub fn preview(&self) -> Option<&ClimatePreview> {
        self.preview.as_ref()
    }

    /// Accept a submitted address and enter `LoadingPreview`.
    ///
    /// Returns the trimmed address to send. Blank input is rejected without
    /// any state change, so no request is ever issued for it.
    pub fn begin_preview(&mut self, raw: &str) -> Result<String, BlankAddress> {
        let address = normalized_address(raw).ok_or(BlankAddress)?;
        self.phase = ReportPhase::LoadingPreview;
        Ok(address)
    }

    /// A preview request resolved successfully. Last resolved wins.
    pub fn preview_resolved(&mut self, preview: ClimatePreview) {
        self.preview = Some(preview);
        self.phase = ReportPhase::PreviewReady;
    }

    /// A preview request failed. Falls back to the last good state: the
    /// previous preview stays on screen if there was one.
    pub fn preview_failed(&mut self) {
        self.phase = if self.preview.is_some() {
            ReportPhase::PreviewReady
        } else {
            ReportPhase::Idle
        };
    }

    /// Gate a download request on the entitlement flag.
    pub fn request_download(&mut self, entitled: bool) -> DownloadGate {
        if self.phase != ReportPhase::PreviewReady || self.preview.is_none() {
            return DownloadGate::NoPreview;
        }
        if !entitled {
            return DownloadGate::PaymentRequired;
        }
        self.phase = ReportPhase::Downloading;
        DownloadGate::Started
    }

    /// The download call finished, successfully or not. Either way the
    /// button resets; only the notification differs.
    pub fn download_finished(&mut self) {
        self.phase = ReportPhase::PreviewReady;
    }
}

/// Enumerated projection of the download status feed.
///
/// Not a real progress metric: there is no bytes-transferred tracking, just
/// a fixed message sequence advanced on a timer and a percent capped at 100.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DownloadProgress {
    stage: usize,
}

impl DownloadProgress {
    pub fn start() -> Self {
        Self { stage: 0 }
    }

    pub fn message(&self) -> &'static str {
        if self.stage == 0 {
            "Fetching relevant info..."
        } else {
            DOWNLOAD_STAGES[(self.stage - 1).min(DOWNLOAD_STAGES.len() - 1)]
        }
    }

    pub fn percent(&self) -> u32 {
        ((self.stage * 100 / DOWNLOAD_STAGES.len()) as u32).min(100)
    }

    /// Advance one stage. Returns false once the sequence is exhausted, at
    /// which point the caller should stop its timer.
    pub fn advance(&mut self) -> bool {
        if self.stage < DOWNLOAD_STAGES.len() {
            self.stage += 1;
            true
        } else {
            false
        }
    }

    pub fn is_complete(&self) -> bool {
        self.stage >= DOWNLOAD_STAGES.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{RiskItem, RiskLevel};

    fn sample_preview(address: &str) -> ClimatePreview {
        ClimatePreview {
            address: address.to_string(),
            overall_risk: RiskLevel::Moderate,
            summary: format!(
                "Based on our analysis of {address}, this location shows moderate climate risks."
            ),
            risks: vec![
                RiskItem {
                    name: "Flood Risk".into(),
                    value: 20,
                    level: RiskLevel::High,
                },
                RiskItem {
                    name: "Air Quality".into(),
                    value: 20,
                    level: RiskLevel::Moderate,
                },
            ],
        }
    }

    #[test]
    fn blank_address_is_rejected_without_state_change() {
        let mut flow = ReportFlow::new();
        assert_eq!(flow.begin_preview(""), Err(BlankAddress));
        assert_eq!(flow.begin_preview("   \t "), Err(BlankAddress));
        assert_eq!(flow.phase(), ReportPhase::Idle);
        assert!(flow.preview().is_none());
    }

    #[test]
    fn submitted_address_is_trimmed() {
        let mut flow = ReportFlow::new();
        let sent = flow.begin_preview("  123 Main St  ").unwrap();
        assert_eq!(sent, "123 Main St");
        assert_eq!(flow.phase(), ReportPhase::LoadingPreview);
    }

    #[test]
    fn successful_preview_reaches_preview_ready() {
        let mut flow = ReportFlow::new();
        flow.begin_preview("123 Main St").unwrap();
        flow.preview_resolved(sample_preview("123 Main St"));
        assert_eq!(flow.phase(), ReportPhase::PreviewReady);
        assert_eq!(flow.preview().unwrap().address, "123 Main St");
        assert_eq!(flow.preview().unwrap().risks.len(), 2);
    }

    #[test]
    fn failure_without_previous_preview_returns_to_idle() {
        let mut flow = ReportFlow::new();
        flow.begin_preview("123 Main St").unwrap();
        flow.preview_failed();
        assert_eq!(flow.phase(), ReportPhase::Idle);
        assert!(flow.preview().is_none());
    }

    #[test]
    fn failure_keeps_the_last_resolved_preview() {
        let mut flow = ReportFlow::new();
        flow.begin_preview("123 Main St").unwrap();
        flow.preview_resolved(sample_preview("123 Main St"));

        flow.begin_preview("9 Oak Lane").unwrap();
        flow.preview_failed();

        assert_eq!(flow.phase(), ReportPhase::PreviewReady);
        assert_eq!(flow.preview().unwrap().address, "123 Main St");
    }

    #[test]
    fn most_recently_resolved_preview_wins() {
        let mut flow = ReportFlow::new();
        flow.begin_preview("123 Main St").unwrap();
        flow.preview_resolved(sample_preview("123 Main St"));
        flow.begin_preview("9 Oak Lane").unwrap();
        flow.preview_resolved(sample_preview("9 Oak Lane"));
        assert_eq!(flow.preview().unwrap().address, "9 Oak Lane");
    }

    #[test]
    fn download_without_a_preview_is_refused() {
        let mut flow = ReportFlow::new();
        assert_eq!(flow.request_download(true), DownloadGate::NoPreview);
        assert_eq!(flow.phase(), ReportPhase::Idle);
    }

    #[test]
    fn unentitled_download_opens_the_paywall_and_leaves_state_alone() {
        let mut flow = ReportFlow::new();
        flow.begin_preview("123 Main St").unwrap();
        flow.preview_resolved(sample_preview("123 Main St"));

        assert_eq!(flow.request_download(false), DownloadGate::PaymentRequired);
        assert_eq!(flow.phase(), ReportPhase::PreviewReady);

        // Asking again without paying stays gated.
        assert_eq!(flow.request_download(false), DownloadGate::PaymentRequired);
    }

    #[test]
    fn entitled_download_runs_and_resets_to_preview_ready() {
        let mut flow = ReportFlow::new();
        flow.begin_preview("123 Main St").unwrap();
        flow.preview_resolved(sample_preview("123 Main St"));

        assert_eq!(flow.request_download(true), DownloadGate::Started);
        assert_eq!(flow.phase(), ReportPhase::Downloading);

        // Success and failure both land back on PreviewReady with the
        // preview intact; only the toast differs.
        flow.download_finished();
        assert_eq!(flow.phase(), ReportPhase::PreviewReady);
        assert_eq!(flow.preview().unwrap().address, "123 Main St");
    }

    #[test]
    fn progress_messages_advance_in_order_and_percent_caps() {
        let mut progress = DownloadProgress::start();
        assert_eq!(progress.message(), "Fetching relevant info...");
        assert_eq!(progress.percent(), 0);
        assert!(!progress.is_complete());

        let mut seen = Vec::new();
        while progress.advance() {
            seen.push((progress.message(), progress.percent()));
        }

        assert_eq!(
            seen,
            vec![
                ("Using intelligent GPT-5 AI...", 25),
                ("Forming the perfect report...", 50),
                ("Almost there...", 75),
                ("Finalizing report...", 100),
            ]
        );
        assert!(progress.is_complete());

        // Further advances are refused and the percent stays capped.
        assert!(!progress.advance());
        assert_eq!(progress.percent(), 100);
        assert_eq!(progress.message(), "Finalizing report...");
    }
}
