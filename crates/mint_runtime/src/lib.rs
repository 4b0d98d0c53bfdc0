//! Sheep NFT mint front-end runtime: state model, reducer, host effects, and Leptos views.

pub mod components;
pub mod config;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod tasks;
pub mod theme;

pub use components::{
    use_mint_runtime, BalanceReader, InstallPrompt, MintGallery, MintProvider,
    MintRuntimeContext, MintSlotCard, RootView, StatusBanner, ThemeToggle,
};
pub use config::{ConfigError, MintConfig};
pub use host::{run_effect, Dispatch, MintHostContext};
pub use model::*;
pub use reducer::{reduce_mint, MintAction, ReducerError, RuntimeEffect};
pub use tasks::TaskScope;
pub use theme::{ThemeStore, THEME_PREF_KEY};
