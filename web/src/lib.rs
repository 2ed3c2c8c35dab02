#![recursion_limit = "512"]

pub mod app;
pub mod attribution;
pub mod catalog;
pub mod components;
pub mod config;
pub mod contact;
pub mod error;
pub mod geo;
pub mod server;
pub mod views;

pub use attribution::{AttributionStorage, AttributionStore, CaptureOutcome, MemoryStorage, ReadOutcome};
pub use config::SiteConfig;
pub use contact::{resolve_contact, ContactNumber, ContactResolver};
pub use error::{ConfigError, GeoError, StorageError};
pub use geo::{GeoResolver, HierarchicalPath};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
