use leptos::*;

use super::StatusBanner;
use crate::{
    model::{RootPhase, StatusOrigin},
    reducer::MintAction,
    runtime_context::use_mint_runtime,
};

#[component]
/// Instructions shown when no injected wallet was found.
pub fn InstallPrompt() -> impl IntoView {
    let runtime = use_mint_runtime();
    let install_url = runtime
        .host
        .with_value(|host| host.config().install_url.clone());
    let checking = create_memo(move |_| {
        runtime
            .state
            .with(|state| state.phase == RootPhase::Detecting { recheck: true })
    });

    view! {
        <div class="install-prompt">
            <div class="mint-box install-box">
                <p class="install-title">"You don't have MetaMask installed."</p>
                <p>
                    "Head over to "
                    <a class="install-link" href=install_url target="_blank" rel="noopener noreferrer">
                        "their website"
                    </a>
                    " to install the extension, then come back here."
                </p>
                <hr class="install-divider" />
                <p class="install-title">"Already have MetaMask?"</p>
                <p class="install-note">
                    "Make sure this website is allowed to see the "
                    <code>"window.ethereum"</code>
                    " object."
                </p>
                <button
                    class="install-recheck"
                    type="button"
                    disabled=move || checking.get()
                    on:click=move |_| runtime.dispatch_action(MintAction::RecheckWallet)
                >
                    "I've installed it"
                </button>
                <StatusBanner origin=StatusOrigin::Install />
            </div>
        </div>
    }
}
