use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

use crate::analytics::{track_event, EVENT_PAYMENT_COMPLETED};
use crate::notify::Toaster;
use crate::storage;

// TODO(payment): replace the simulated flow with a real Stripe/PayPal
// integration and a server-issued entitlement instead of the local flag.

/// Simulated gateway latency before the payment "settles".
const PAYMENT_DELAY: Duration = Duration::from_secs(2);

/// Fixed-price offer gating the full-report download.
///
/// Confirmation is unconditionally treated as success: after the delay the
/// paid flag is persisted, the modal closes, and `on_payment_success` fires
/// (the Report page uses it to retry the download immediately).
#[component]
pub fn PaywallModal(
    set_open: WriteSignal<bool>,
    #[prop(into)] on_payment_success: Callback<()>,
) -> impl IntoView {
    let toaster = Toaster::expect();
    let (is_processing, set_is_processing) = create_signal(false);
    let pending: StoredValue<Option<TimeoutHandle>> = store_value(None);

    // Don't leave the settle timer running if the page unmounts mid-payment.
    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    let confirm = move |_| {
        if is_processing.get() {
            return;
        }
        set_is_processing.set(true);

        let handle = set_timeout_with_handle(
            move || {
                pending.set_value(None);
                storage::mark_paid();
                set_is_processing.set(false);
                track_event(EVENT_PAYMENT_COMPLETED);
                // Fire the callback before closing: closing unmounts this
                // component and everything scoped to it.
                on_payment_success.call(());
                set_open.set(false);
                toaster.success(
                    "Payment Successful!",
                    "You can now download the full climate risk report.",
                );
            },
            PAYMENT_DELAY,
        );
        pending.set_value(handle.ok());
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal paywall" role="dialog" aria-modal="true" aria-labelledby="paywall-title">
                <h2 id="paywall-title">"Unlock Full Climate Report"</h2>

                <div class="price-card">
                    <div class="price">"$9.99"</div>
                    <div class="price-note">"One-time payment"</div>
                    <ul class="perks">
                        <li>"Detailed risk assessment"</li>
                        <li>"Historical climate data"</li>
                        <li>"Future projections"</li>
                        <li>"Downloadable PDF report"</li>
                    </ul>
                </div>

                <div class="modal-actions">
                    <button
                        class="btn secondary"
                        disabled=move || is_processing.get()
                        on:click=move |_| set_open.set(false)
                    >
                        "Maybe Later"
                    </button>
                    <button
                        class="btn primary"
                        disabled=move || is_processing.get()
                        on:click=confirm
                    >
                        {move || if is_processing.get() { "Processing..." } else { "Pay Now" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
