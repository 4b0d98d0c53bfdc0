//! Mint front-end UI composition.

mod balance;
mod gallery;
mod install_prompt;
mod status;
mod theme_toggle;

use leptos::*;

pub use self::{
    balance::BalanceReader,
    gallery::{MintGallery, MintSlotCard},
    install_prompt::InstallPrompt,
    status::{LoadingPlaceholder, StatusBanner},
    theme_toggle::ThemeToggle,
};
pub use crate::runtime_context::{use_mint_runtime, MintProvider, MintRuntimeContext};

use crate::model::RootPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootScreen {
    Loading,
    Install,
    Gallery,
}

fn root_screen(phase: RootPhase) -> RootScreen {
    match phase {
        RootPhase::Loading | RootPhase::Detecting { recheck: false } => RootScreen::Loading,
        // A re-check keeps the install instructions on screen until the probe answers.
        RootPhase::Detecting { recheck: true } | RootPhase::NoWallet => RootScreen::Install,
        RootPhase::HasWallet => RootScreen::Gallery,
    }
}

#[component]
/// Switches between the loading placeholder, the install prompt, and the gallery.
pub fn RootView() -> impl IntoView {
    let runtime = use_mint_runtime();
    let screen = create_memo(move |_| runtime.state.with(|state| root_screen(state.phase)));

    view! {
        <footer class="mint-root">
            <div class="mint-stage">
                {move || match screen.get() {
                    RootScreen::Loading => view! { <LoadingPlaceholder /> }.into_view(),
                    RootScreen::Install => view! { <InstallPrompt /> }.into_view(),
                    RootScreen::Gallery => view! { <MintGallery /> }.into_view(),
                }}
            </div>
            <ThemeToggle />
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn recheck_keeps_install_prompt_mounted() {
        assert_eq!(root_screen(RootPhase::Loading), RootScreen::Loading);
        assert_eq!(
            root_screen(RootPhase::Detecting { recheck: false }),
            RootScreen::Loading
        );
        assert_eq!(
            root_screen(RootPhase::Detecting { recheck: true }),
            RootScreen::Install
        );
        assert_eq!(root_screen(RootPhase::NoWallet), RootScreen::Install);
        assert_eq!(root_screen(RootPhase::HasWallet), RootScreen::Gallery);
    }
}
