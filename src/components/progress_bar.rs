use leptos::*;

/// Thin percent bar shown under the download button while the report is
/// prepared. Purely cosmetic; the value comes from the fixed status feed,
/// not from transfer progress.
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<u32>) -> impl IntoView {
    view! {
        <div
            class="progress-track"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || percent.get().min(100)
        >
            <div
                class="progress-fill"
                style:width=move || format!("{}%", percent.get().min(100))
            ></div>
        </div>
    }
}
