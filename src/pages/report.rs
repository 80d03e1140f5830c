use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;

use crate::analytics::{
    track_event, EVENT_PAYWALL_OPENED, EVENT_PREVIEW_GENERATED, EVENT_REPORT_DOWNLOADED,
};
use crate::api;
use crate::components::{Footer, PaywallModal, ProgressBar, RiskBarChart, RiskPieChart};
use crate::flow::{
    BlankAddress, DownloadGate, DownloadProgress, ReportFlow, ReportPhase, DOWNLOAD_STAGE_MILLIS,
};
use crate::notify::Toaster;
use crate::storage;

#[component]
pub fn ReportPage() -> impl IntoView {
    let toaster = Toaster::expect();

    let (address, set_address) = create_signal(String::new());
    let (show_paywall, set_show_paywall) = create_signal(false);
    let flow = create_rw_signal(ReportFlow::new());
    let progress = create_rw_signal(DownloadProgress::start());
    let ticker: StoredValue<Option<IntervalHandle>> = store_value(None);

    let stop_ticker = move || {
        if let Some(handle) = ticker.get_value() {
            handle.clear();
            ticker.set_value(None);
        }
    };
    on_cleanup(stop_ticker);

    let phase = create_memo(move |_| flow.with(|f| f.phase()));
    let preview = create_memo(move |_| flow.with(|f| f.preview().cloned()));
    let risks = create_memo(move |_| preview.get().map(|p| p.risks).unwrap_or_default());
    let is_loading = create_memo(move |_| phase.get() == ReportPhase::LoadingPreview);
    let is_downloading = create_memo(move |_| phase.get() == ReportPhase::Downloading);

    // Submit the address and fetch a preview. Blank input is rejected here,
    // before any request goes out.
    let generate = move || {
        if is_loading.get() {
            return;
        }
        let raw = address.get();
        let submitted = flow
            .try_update(|f| f.begin_preview(&raw))
            .unwrap_or(Err(BlankAddress));

        match submitted {
            Err(BlankAddress) => toaster.error(
                "Please enter an address",
                "We need an address to generate your climate risk report.",
            ),
            Ok(target) => spawn_local(async move {
                match api::fetch_preview(&target).await {
                    Ok(resolved) => {
                        flow.update(|f| f.preview_resolved(resolved));
                        track_event(EVENT_PREVIEW_GENERATED);
                        toaster.success("Report Generated!", "Your climate risk preview is ready.");
                    }
                    Err(_) => {
                        flow.update(|f| f.preview_failed());
                        toaster.error("Error", "Failed to generate report. Please try again.");
                    }
                }
            }),
        }
    };

    // Download the full report, or open the paywall when unentitled. Also
    // invoked by the paywall's completion callback, at which point the paid
    // flag is set and the download goes through.
    let start_download = move || {
        let gate = flow
            .try_update(|f| f.request_download(storage::is_paid()))
            .unwrap_or(DownloadGate::NoPreview);

        match gate {
            DownloadGate::NoPreview => {}
            DownloadGate::PaymentRequired => {
                track_event(EVENT_PAYWALL_OPENED);
                set_show_paywall.set(true);
            }
            DownloadGate::Started => {
                progress.set(DownloadProgress::start());
                let handle = set_interval_with_handle(
                    move || {
                        let advanced = progress.try_update(|p| p.advance()).unwrap_or(false);
                        if !advanced {
                            stop_ticker();
                        }
                    },
                    Duration::from_millis(DOWNLOAD_STAGE_MILLIS),
                );
                ticker.set_value(handle.ok());

                let target = flow
                    .with(|f| f.preview().map(|p| p.address.clone()))
                    .unwrap_or_default();
                spawn_local(async move {
                    let outcome = api::download_full_report(&target).await;
                    stop_ticker();
                    flow.update(|f| f.download_finished());
                    progress.set(DownloadProgress::start());
                    match outcome {
                        Ok(()) => {
                            track_event(EVENT_REPORT_DOWNLOADED);
                            toaster.success(
                                "Download Started",
                                "Your full climate risk report is downloading.",
                            );
                        }
                        Err(_) => toaster.error(
                            "Download Failed",
                            "Please try again or contact support.",
                        ),
                    }
                });
            }
        }
    };

    view! {
        <main class="container report-page">
            <header>
                <h1>"Climate Risk Assessment"</h1>
                <p class="tagline">"Enter any address to get a comprehensive climate risk analysis"</p>
            </header>

            <section class="card address-card">
                <h2>"Property Address"</h2>
                <div class="address-row">
                    <input
                        type="text"
                        class="address-input"
                        placeholder="Enter property address (e.g., 123 Main St, City, State)"
                        prop:value=move || address.get()
                        on:input=move |ev| set_address.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                generate();
                            }
                        }
                    />
                    <button
                        class="btn primary"
                        disabled=move || is_loading.get()
                        on:click=move |_| generate()
                    >
                        {move || if is_loading.get() { "Generating..." } else { "Generate Report" }}
                    </button>
                </div>
            </section>

            {move || preview.get().map(|p| {
                let overall = p.overall_risk;
                view! {
                    <section class="preview">
                        <div class="card summary-card">
                            <div class="summary-head">
                                <div>
                                    <h2>"Risk Assessment Summary"</h2>
                                    <p class="summary-address">{p.address.clone()}</p>
                                </div>
                                <div class="overall">
                                    <span class="overall-label">"Overall Risk"</span>
                                    <span class=format!("overall-value {}", overall.css_class())>
                                        {overall.label()}
                                    </span>
                                </div>
                            </div>

                            <p class="summary-text">{p.summary.clone()}</p>

                            <button
                                class="btn primary download"
                                disabled=move || is_downloading.get()
                                on:click=move |_| start_download()
                            >
                                {move || if is_downloading.get() {
                                    progress.with(|pr| pr.message())
                                } else {
                                    "Download Full Report (PDF)"
                                }}
                            </button>
                            {move || is_downloading.get().then(|| view! {
                                <ProgressBar percent=Signal::derive(move || progress.with(|pr| pr.percent()))/>
                            })}
                        </div>

                        <div class="risk-grid">
                            <div class="card">
                                <h3>"Risk Levels"</h3>
                                <ul class="risk-list">
                                    {p.risks.iter().map(|risk| view! {
                                        <li class="risk-row">
                                            <span class="risk-name">{risk.name.clone()}</span>
                                            <span class="risk-value">{format!("{}%", risk.value)}</span>
                                            <span class=format!("risk-level {}", risk.level.css_class())>
                                                {risk.level.label()}
                                            </span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </div>
                            <div class="card">
                                <h3>"Risk Visualization"</h3>
                                <RiskBarChart risks=risks/>
                            </div>
                        </div>

                        <div class="card">
                            <h3>"Risk Distribution"</h3>
                            <RiskPieChart risks=risks/>
                        </div>
                    </section>
                }
            })}

            {move || show_paywall.get().then(|| view! {
                <PaywallModal
                    set_open=set_show_paywall
                    on_payment_success=move |_: ()| start_download()
                />
            })}

            <Footer/>
        </main>
    }
}
