//! Browser persistence for the paid-entitlement flag.
//!
//! The entire entitlement model is one localStorage key: `paid` holding the
//! literal string `"true"`. It survives reloads, never expires, and is not
//! validated against any payment record. This is not a security boundary;
//! a real payment integration needs a server-issued entitlement token.

const PAID_KEY: &str = "paid";
const PAID_VALUE: &str = "true";

/// Attempts to get the browser's localStorage.
///
/// Returns `None` outside a browser, in private/incognito mode, or when a
/// SecurityError blocks access (e.g. a sandboxed iframe).
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Log a warning to the browser console for non-fatal storage errors.
fn log_warning(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Only the literal `"true"` grants entitlement; absence or any other value
/// means not entitled.
pub fn entitlement_granted(raw: Option<&str>) -> bool {
    raw == Some(PAID_VALUE)
}

/// Whether the simulated purchase has been completed in this browser.
///
/// Any storage failure is treated as unpaid: the app keeps working, the
/// user just sees the paywall again.
pub fn is_paid() -> bool {
    match get_storage() {
        Some(storage) => match storage.get_item(PAID_KEY) {
            Ok(value) => entitlement_granted(value.as_deref()),
            Err(_) => {
                log_warning("ClimateLens: could not read localStorage (treating as unpaid)");
                false
            }
        },
        // localStorage unavailable, expected in private browsing.
        None => false,
    }
}

/// Persist the paid flag. Called unconditionally when the simulated payment
/// completes.
pub fn mark_paid() {
    let storage = match get_storage() {
        Some(s) => s,
        None => return,
    };
    if storage.set_item(PAID_KEY, PAID_VALUE).is_err() {
        log_warning(
            "ClimateLens: could not persist the paid flag. \
             You may be in private browsing mode or out of storage quota.",
        );
    }
}

/// Remove the paid flag. Not reachable from the UI; used by the browser
/// test suite to reset state between cases.
pub fn clear_paid() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(PAID_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_literal_true_grants_entitlement() {
        assert!(entitlement_granted(Some("true")));

        assert!(!entitlement_granted(None));
        assert!(!entitlement_granted(Some("")));
        assert!(!entitlement_granted(Some("TRUE")));
        assert!(!entitlement_granted(Some("True")));
        assert!(!entitlement_granted(Some("1")));
        assert!(!entitlement_granted(Some("false")));
        assert!(!entitlement_granted(Some(" true")));
        assert!(!entitlement_granted(Some("true ")));
    }
}
