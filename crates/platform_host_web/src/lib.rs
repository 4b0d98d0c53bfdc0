//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer: the EIP-1193 wallet bridge
//! (`window.ethereum`), `localStorage` preferences, `matchMedia` / document-class appearance
//! hooks, and `setTimeout` timers. On non-wasm targets every adapter degrades to the behavior of
//! an environment without a browser so the workspace still builds and tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod appearance;
mod bridge;
pub mod scheduler;
pub mod storage;
pub mod wallet;

pub use adapters::{
    appearance_service, build_host_services, injected_wallet, prefs_store, scheduler,
    selected_host_strategy,
};
pub use appearance::WebAppearanceService;
pub use scheduler::BrowserScheduler;
pub use storage::local_prefs::WebPrefsStore;
pub use wallet::InjectedWallet;
