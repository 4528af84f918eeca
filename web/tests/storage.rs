#![cfg(target_arch = "wasm32")]
//! Tests for `storage`.
use gloo_storage::{LocalStorage, Storage};
use portfolio_core::theme::{Theme, ThemeStorage};
use portfolio_web::storage::{load_theme_store, LocalThemeStorage};
use wasm_bindgen_test::*;
wasm_bindgen_test_configure!(run_in_browser);

fn clear(key: &str) {
    LocalStorage::raw()
        .remove_item(key)
        .expect("could not clear storage");
}

#[wasm_bindgen_test]
fn local_theme_storage_should_persist_plain_value() {
    let key = "test-theme-plain";
    clear(key);

    let storage = LocalThemeStorage::open(key).expect("local storage should be available");
    assert_eq!(Ok(None), storage.load());

    storage.save(Theme::Light).expect("could not save theme");
    let raw = LocalStorage::raw().get_item(key).expect("could not read storage");
    assert_eq!(Some("light".to_string()), raw);
    assert_eq!(Ok(Some(Theme::Light)), storage.load());
}

#[wasm_bindgen_test]
fn load_theme_store_should_read_persisted_theme() {
    let key = "test-theme-store";
    clear(key);
    LocalStorage::raw()
        .set_item(key, "light")
        .expect("could not write storage");

    let store = load_theme_store(key);
    assert!(store.is_persistent());
    assert_eq!(Theme::Light, store.theme());

    store.toggle();
    let raw = LocalStorage::raw().get_item(key).expect("could not read storage");
    assert_eq!(Some("dark".to_string()), raw);
}

#[wasm_bindgen_test]
fn invalid_persisted_theme_should_default_to_dark() {
    let key = "test-theme-invalid";
    clear(key);
    LocalStorage::raw()
        .set_item(key, "sepia")
        .expect("could not write storage");

    let store = load_theme_store(key);
    assert_eq!(Theme::Dark, store.theme());
}
