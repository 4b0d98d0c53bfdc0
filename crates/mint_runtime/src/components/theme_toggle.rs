use leptos::*;

use crate::{model::ThemePreference, reducer::MintAction, runtime_context::use_mint_runtime};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let runtime = use_mint_runtime();
    // Seeded at mount from the system preference, so the fallback never renders under a provider.
    let label = create_memo(move |_| {
        runtime.state.with(|state| {
            state
                .theme
                .unwrap_or(ThemePreference::Light)
                .toggle_label()
        })
    });

    view! {
        <button
            class="theme-toggle"
            type="button"
            on:click=move |_| runtime.dispatch_action(MintAction::ToggleTheme)
        >
            {move || label.get()}
        </button>
    }
}
