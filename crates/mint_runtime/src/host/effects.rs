//! Runtime-effect execution for the mint host boundary.

use std::rc::Rc;

use alloy_primitives::{Address, U256};
use leptos::logging;
use platform_host::{format_ether, WalletError};

use crate::{
    host::MintHostContext,
    model::SlotId,
    reducer::{MintAction, RuntimeEffect},
};

/// Callback through which effect outcomes re-enter the reducer.
pub type Dispatch = Rc<dyn Fn(MintAction)>;

/// Runs one reducer-emitted effect to completion, dispatching its outcome.
pub async fn run_effect(host: MintHostContext, effect: RuntimeEffect, dispatch: Dispatch) {
    match effect {
        RuntimeEffect::ResolveTheme => {
            let theme = host.theme_store().read().await;
            dispatch(MintAction::ThemeResolved { theme });
        }
        RuntimeEffect::ToggleTheme => {
            let theme = host.theme_store().toggle().await;
            dispatch(MintAction::ThemeResolved { theme });
        }
        RuntimeEffect::StartLoadingDelay => {
            host.scheduler().sleep(host.config().loading_delay).await;
            dispatch(MintAction::LoadingDelayElapsed);
        }
        RuntimeEffect::ProbeWallet => {
            let present = host.wallet().is_present();
            dispatch(MintAction::WalletProbed { present });
        }
        RuntimeEffect::LoadBalance { request } => match load_balance(&host).await {
            Ok((account, balance)) => dispatch(MintAction::BalanceLoaded {
                request,
                account,
                balance,
            }),
            Err(error) => {
                logging::warn!("balance read failed: {error}");
                dispatch(MintAction::BalanceFailed { request, error });
            }
        },
        RuntimeEffect::LoadCount { request } => match load_count(&host).await {
            Ok(count) => dispatch(MintAction::CountLoaded { request, count }),
            Err(error) => {
                logging::warn!("mint counter read failed: {error}");
                dispatch(MintAction::CountFailed { request, error });
            }
        },
        RuntimeEffect::LoadSlotOwnership { slot } => {
            let uri = host.config().metadata_uri(slot);
            match host.contract().is_content_owned(&uri).await {
                Ok(owned) => dispatch(MintAction::SlotOwnershipLoaded { slot, owned }),
                Err(error) => {
                    logging::warn!("ownership read for slot {slot} failed: {error}");
                    dispatch(MintAction::SlotOwnershipFailed { slot, error });
                }
            }
        }
        RuntimeEffect::SubmitMint { slot } => match submit_mint(&host, slot, &dispatch).await {
            Ok(()) => dispatch(MintAction::MintConfirmed { slot }),
            Err(error) => {
                logging::warn!("mint of slot {slot} failed: {error}");
                dispatch(MintAction::MintFailed { slot, error });
            }
        },
        RuntimeEffect::ClearStatusAfterDelay { id } => {
            host.scheduler()
                .sleep(host.config().status_clear_delay)
                .await;
            dispatch(MintAction::DismissStatus { id });
        }
    }
}

async fn connected_account(host: &MintHostContext) -> Result<Address, WalletError> {
    host.wallet()
        .request_accounts()
        .await?
        .into_iter()
        .next()
        .ok_or(WalletError::NoAccounts)
}

async fn load_balance(host: &MintHostContext) -> Result<(Address, String), WalletError> {
    let account = connected_account(host).await?;
    let wei = host.wallet().get_balance(account).await?;
    Ok((account, format_ether(wei, host.config().balance_decimals)))
}

async fn load_count(host: &MintHostContext) -> Result<u64, WalletError> {
    let count = host.contract().count().await?;
    if count > U256::from(u64::MAX) {
        return Err(WalletError::InvalidResponse(format!(
            "mint counter {count} out of range"
        )));
    }
    Ok(count.to::<u64>())
}

async fn submit_mint(
    host: &MintHostContext,
    slot: SlotId,
    dispatch: &Dispatch,
) -> Result<(), WalletError> {
    let account = connected_account(host).await?;
    let uri = host.config().metadata_uri(slot);
    let tx = host
        .contract()
        .pay_to_mint(account, &uri, host.config().mint_price)
        .await?;
    logging::log!("mint of slot {slot} broadcast as {tx}");
    dispatch(MintAction::MintSubmitted { slot, tx });
    host.contract().wait_for_confirmation(tx).await
}
