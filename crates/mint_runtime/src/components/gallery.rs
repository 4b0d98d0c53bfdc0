use leptos::*;

use super::{BalanceReader, StatusBanner};
use crate::{
    model::{SlotId, SlotState, StatusOrigin},
    reducer::MintAction,
    runtime_context::use_mint_runtime,
};

#[component]
/// Balance plus one card per slot, `count + 1` in total.
pub fn MintGallery() -> impl IntoView {
    let runtime = use_mint_runtime();
    let slot_ids = create_memo(move |_| runtime.state.with(|state| state.gallery.slot_ids()));
    let count_failed =
        create_memo(move |_| runtime.state.with(|state| state.gallery.count_failed()));

    create_effect(move |_| runtime.dispatch_action(MintAction::RefreshCount));

    view! {
        <div class="mint-gallery-page">
            <div class="balance-row">
                <BalanceReader />
            </div>
            <StatusBanner origin=StatusOrigin::Gallery />
            <Show when=move || count_failed.get() fallback=|| ()>
                <div class="mint-box gallery-failed">
                    <p class="gallery-title">"The collection could not be loaded."</p>
                    <button
                        class="gallery-retry"
                        type="button"
                        on:click=move |_| runtime.dispatch_action(MintAction::RefreshCount)
                    >
                        "Retry"
                    </button>
                </div>
            </Show>
            <div class="mint-gallery">
                <For
                    each=move || slot_ids.get()
                    key=|slot| *slot
                    children=move |slot| MintSlotCard(MintSlotCardProps { slot })
                />
            </div>
        </div>
    }
}

#[component]
pub fn MintSlotCard(slot: SlotId) -> impl IntoView {
    let runtime = use_mint_runtime();
    let image_uri = runtime.host.with_value(|host| host.config().image_uri(slot));
    let slot_state = create_memo(move |_| {
        runtime
            .state
            .with(|state| state.gallery.slot(slot).cloned())
    });
    let minted = move || matches!(slot_state.get(), Some(SlotState::Minted));

    view! {
        <div class="mint-box mint-slot" class:unminted=move || !minted()>
            <p class="slot-title">{format!("Sheep NFT #{slot}")}</p>
            <img
                class="slot-image"
                src=image_uri
                alt=move || {
                    if minted() {
                        "An already-minted sheep NFT."
                    } else {
                        "An un-minted sheep NFT! You should mint it."
                    }
                }
            />
            <div class="slot-footer">
                <p class="slot-status">{move || slot_label(slot_state.get().as_ref())}</p>
                {move || match slot_state.get() {
                    Some(SlotState::Unminted) => view! {
                        <button
                            class="slot-mint"
                            type="button"
                            on:click=move |_| runtime.dispatch_action(MintAction::RequestMint { slot })
                        >
                            "Mint"
                        </button>
                    }
                    .into_view(),
                    Some(SlotState::Pending { .. }) => view! {
                        <button class="slot-mint" type="button" disabled=true>
                            "Minting..."
                        </button>
                    }
                    .into_view(),
                    Some(SlotState::Failed { .. }) => view! {
                        <button
                            class="slot-retry"
                            type="button"
                            on:click=move |_| runtime.dispatch_action(MintAction::RecheckSlot { slot })
                        >
                            "Retry"
                        </button>
                    }
                    .into_view(),
                    Some(SlotState::Checking | SlotState::Minted) | None => ().into_view(),
                }}
            </div>
            <StatusBanner origin=StatusOrigin::Slot(slot) />
        </div>
    }
}

fn slot_label(state: Option<&SlotState>) -> &'static str {
    match state {
        Some(SlotState::Minted) => "Minted",
        Some(SlotState::Unminted) => "Available",
        Some(SlotState::Pending { tx: None }) => "Waiting for wallet approval",
        Some(SlotState::Pending { tx: Some(_) }) => "Waiting for confirmation",
        Some(SlotState::Failed { .. }) => "Status unavailable",
        Some(SlotState::Checking) | None => "Checking...",
    }
}
