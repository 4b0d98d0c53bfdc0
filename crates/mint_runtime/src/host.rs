//! Host-side runtime helpers for executing reducer effects against injected services.
//!
//! The reducer stays pure; everything that touches the wallet, storage, the document, or timers
//! runs here behind the [`HostServices`] bundle assembled by the entry layer.

mod boot;
mod effects;

use std::rc::Rc;

use leptos::{logging, spawn_local, Callable, Callback};
use platform_host::{
    AppearanceService, HostServices, MintContract, PrefsStore, Scheduler, WalletProvider,
};

pub use self::effects::{run_effect, Dispatch};

use crate::{
    config::MintConfig,
    model::MintState,
    reducer::{MintAction, RuntimeEffect},
    tasks::TaskScope,
    theme::ThemeStore,
};

#[derive(Clone)]
/// Host service bundle plus configuration for mint runtime side effects.
pub struct MintHostContext {
    services: HostServices,
    config: Rc<MintConfig>,
}

impl Default for MintHostContext {
    fn default() -> Self {
        Self::browser()
    }
}

impl MintHostContext {
    /// Wraps an already-assembled service bundle.
    pub fn new(services: HostServices, config: MintConfig) -> Self {
        Self {
            services,
            config: Rc::new(config),
        }
    }

    /// Builds the browser composition from the bundled configuration.
    pub fn browser() -> Self {
        let config = MintConfig::bundled().unwrap_or_else(|err| {
            logging::warn!("bundled mint config rejected, using defaults: {err}");
            MintConfig::default()
        });
        let services = platform_host_web::build_host_services(config.chain_settings());
        Self::new(services, config)
    }

    pub fn config(&self) -> &MintConfig {
        &self.config
    }

    pub fn wallet(&self) -> &dyn WalletProvider {
        self.services.wallet.as_ref()
    }

    pub fn contract(&self) -> &dyn MintContract {
        self.services.contract.as_ref()
    }

    pub fn prefs(&self) -> &dyn PrefsStore {
        self.services.prefs.as_ref()
    }

    pub fn appearance(&self) -> &dyn AppearanceService {
        self.services.appearance.as_ref()
    }

    pub fn scheduler(&self) -> &dyn Scheduler {
        self.services.scheduler.as_ref()
    }

    /// Theme store bound to this host's preference and appearance services.
    pub fn theme_store(&self) -> ThemeStore<'_> {
        ThemeStore::new(self.prefs(), self.appearance())
    }

    /// Fresh runtime state with the theme seeded from the system preference, so the first
    /// render already matches the document before the stored preference is read.
    pub fn initial_state(&self) -> MintState {
        MintState {
            theme: Some(self.theme_store().seed()),
            ..MintState::default()
        }
    }

    /// Stable host strategy token for diagnostics.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Dispatches [`MintAction::Boot`] once the reactive owner is running.
    pub fn install_boot(&self, dispatch: Callback<MintAction>) {
        boot::install_boot(self.host_strategy_name(), dispatch);
    }

    /// Spawns `effect` on the local executor, tracked by `tasks` so unmounting aborts it.
    pub fn spawn_runtime_effect(
        &self,
        tasks: &TaskScope,
        dispatch: Callback<MintAction>,
        effect: RuntimeEffect,
    ) {
        let dispatch: Dispatch = Rc::new(move |action: MintAction| dispatch.call(action));
        let task = tasks.track(run_effect(self.clone(), effect, dispatch));
        spawn_local(async move {
            let _ = task.await;
        });
    }
}
