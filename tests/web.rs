//! Browser-side tests for the persisted entitlement flag.
//!
//! Run with `wasm-pack test --headless --chrome` (or `--firefox`).

#![cfg(target_arch = "wasm32")]

use climatelens::storage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn paid_flag_roundtrips_through_local_storage() {
    storage::clear_paid();
    assert!(!storage::is_paid());

    storage::mark_paid();
    assert!(storage::is_paid());

    storage::clear_paid();
    assert!(!storage::is_paid());
}

#[wasm_bindgen_test]
fn foreign_values_do_not_entitle() {
    let store = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap();

    for value in ["TRUE", "True", "1", "yes", ""] {
        store.set_item("paid", value).unwrap();
        assert!(!storage::is_paid(), "{value:?} must not grant entitlement");
    }
    store.remove_item("paid").unwrap();
}
