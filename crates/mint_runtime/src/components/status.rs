use leptos::*;

use crate::{
    model::{StatusLevel, StatusOrigin},
    reducer::MintAction,
    runtime_context::use_mint_runtime,
};

#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="mint-loading" role="status" aria-live="polite">
            <span class="mint-spinner" aria-hidden="true"></span>
            <span>"Loading..."</span>
        </div>
    }
}

#[component]
/// Dismissible status line for the component identified by `origin`.
pub fn StatusBanner(origin: StatusOrigin) -> impl IntoView {
    let runtime = use_mint_runtime();
    let message = create_memo(move |_| {
        runtime
            .state
            .with(|state| state.status_for(origin).cloned())
    });

    move || {
        message.get().map(|message| {
            let id = message.id;
            let class = match message.level {
                StatusLevel::Info => "mint-status mint-status-info",
                StatusLevel::Error => "mint-status mint-status-error",
            };
            view! {
                <p class=class role="status" aria-live="polite">
                    <span class="mint-status-text">{message.text}</span>
                    <button
                        class="mint-status-dismiss"
                        aria-label="Dismiss message"
                        on:click=move |_| runtime.dispatch_action(MintAction::DismissStatus { id })
                    >
                        "x"
                    </button>
                </p>
            }
        })
    }
}
