//! Shared host-bundle model for browser and headless runtime composition.

use std::rc::Rc;

use crate::{AppearanceService, MintContract, PrefsStore, Scheduler, WalletProvider};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (`window.ethereum`, `localStorage`, `matchMedia`).
    Browser,
    /// Composition without a browser, backed by in-memory or no-op services.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected service bundle injected into the mint runtime.
///
/// All environment-specific selection happens before this bundle crosses into `mint_runtime`,
/// which keeps the runtime free of browser adapter details and lets tests substitute fakes.
#[derive(Clone)]
pub struct HostServices {
    /// Injected wallet provider.
    pub wallet: Rc<dyn WalletProvider>,
    /// Minting contract reached through the wallet.
    pub contract: Rc<dyn MintContract>,
    /// Persisted preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Color-scheme signal and document dark flag.
    pub appearance: Rc<dyn AppearanceService>,
    /// Timer service.
    pub scheduler: Rc<dyn Scheduler>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundles a [`crate::MemoryChain`]-style fake that implements both wallet and contract.
    pub fn from_chain<C>(
        chain: C,
        prefs: Rc<dyn PrefsStore>,
        appearance: Rc<dyn AppearanceService>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self
    where
        C: WalletProvider + MintContract + 'static,
    {
        let chain = Rc::new(chain);
        Self {
            wallet: chain.clone(),
            contract: chain,
            prefs,
            appearance,
            scheduler,
            host_strategy: HostStrategy::Headless,
        }
    }
}
