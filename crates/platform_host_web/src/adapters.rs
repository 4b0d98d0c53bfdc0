use std::rc::Rc;

use platform_host::{ChainSettings, HostServices, HostStrategy, Scheduler};

use crate::{BrowserScheduler, InjectedWallet, WebAppearanceService, WebPrefsStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Builds the `localStorage` preference adapter.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}

/// Builds the `matchMedia` / document-class appearance adapter.
pub fn appearance_service() -> WebAppearanceService {
    WebAppearanceService
}

/// Builds the `setTimeout` scheduler adapter.
pub fn scheduler() -> BrowserScheduler {
    BrowserScheduler
}

/// Builds the injected-wallet adapter for the configured contract.
pub fn injected_wallet(settings: ChainSettings, scheduler: Rc<dyn Scheduler>) -> InjectedWallet {
    InjectedWallet::new(settings, scheduler)
}

/// Assembles the browser host bundle consumed by `mint_runtime`.
pub fn build_host_services(settings: ChainSettings) -> HostServices {
    let scheduler: Rc<dyn Scheduler> = Rc::new(scheduler());
    let wallet = Rc::new(injected_wallet(settings, scheduler.clone()));

    HostServices {
        wallet: wallet.clone(),
        contract: wallet,
        prefs: Rc::new(prefs_store()),
        appearance: Rc::new(appearance_service()),
        scheduler,
        host_strategy: selected_host_strategy(),
    }
}
