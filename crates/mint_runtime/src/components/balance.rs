use leptos::*;

use super::{LoadingPlaceholder, StatusBanner};
use crate::{
    model::{BalanceState, StatusOrigin},
    reducer::MintAction,
    runtime_context::use_mint_runtime,
};

#[component]
/// Connected account balance. Requests accounts and balance on mount.
pub fn BalanceReader() -> impl IntoView {
    let runtime = use_mint_runtime();
    let symbol = runtime
        .host
        .with_value(|host| host.config().currency_symbol.clone());
    let balance = create_memo(move |_| runtime.state.with(|state| state.balance.clone()));

    create_effect(move |_| runtime.dispatch_action(MintAction::RefreshBalance));

    view! {
        <div class="mint-box balance-reader">
            {move || match balance.get() {
                BalanceState::Ready { account, balance, .. } => view! {
                    <div class="balance-ready">
                        <p class="balance-title">
                            "Your wallet balance: "
                            <span class="balance-amount">{format!("{balance} {symbol}")}</span>
                        </p>
                        <p class="balance-account" title=account.to_string()>
                            {short_account(&account.to_string())}
                        </p>
                    </div>
                }
                .into_view(),
                BalanceState::Failed { .. } => view! {
                    <div class="balance-failed">
                        <p class="balance-title">"Your balance could not be read."</p>
                        <button
                            class="balance-retry"
                            type="button"
                            on:click=move |_| runtime.dispatch_action(MintAction::RefreshBalance)
                        >
                            "Retry"
                        </button>
                    </div>
                }
                .into_view(),
                BalanceState::Idle | BalanceState::Loading { .. } => {
                    view! { <LoadingPlaceholder /> }.into_view()
                }
            }}
            <StatusBanner origin=StatusOrigin::Balance />
        </div>
    }
}

fn short_account(account: &str) -> String {
    if account.len() <= 12 {
        return account.to_string();
    }
    format!("{}...{}", &account[..6], &account[account.len() - 4..])
}
