//! Reducer actions, side-effect intents, and transition logic for the mint runtime.

use alloy_primitives::Address;
use platform_host::{TxHash, WalletError};
use thiserror::Error;

use crate::model::{
    BalanceState, MintState, RequestId, RootPhase, SlotId, SlotState, StatusId, StatusLevel,
    StatusOrigin, ThemePreference,
};

const RECHECK_MISS_TEXT: &str =
    "Still no wallet detected. Reload the page if the extension was just installed.";

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_mint`] to mutate [`MintState`].
pub enum MintAction {
    /// Runtime mounted; hydrate the theme and start the loading delay.
    Boot,
    /// The placeholder delay before the first probe has elapsed.
    LoadingDelayElapsed,
    /// Result of a wallet presence probe.
    WalletProbed {
        /// Whether a provider object exists.
        present: bool,
    },
    /// User claims to have installed a wallet.
    RecheckWallet,
    /// Effective theme was read or toggled and applied to the document.
    ThemeResolved {
        /// Theme now in effect.
        theme: ThemePreference,
    },
    /// Flip the effective theme.
    ToggleTheme,
    /// Start a fresh account + balance read.
    RefreshBalance,
    /// Balance read completed.
    BalanceLoaded {
        /// Generation the result belongs to.
        request: RequestId,
        /// First account exposed by the wallet.
        account: Address,
        /// Formatted ether amount.
        balance: String,
    },
    /// Balance read failed.
    BalanceFailed {
        /// Generation the failure belongs to.
        request: RequestId,
        /// Failure cause.
        error: WalletError,
    },
    /// Start a fresh gallery counter read.
    RefreshCount,
    /// Counter read completed.
    CountLoaded {
        /// Generation the result belongs to.
        request: RequestId,
        /// Tokens minted so far.
        count: u64,
    },
    /// Counter read failed.
    CountFailed {
        /// Generation the failure belongs to.
        request: RequestId,
        /// Failure cause.
        error: WalletError,
    },
    /// Re-read a slot's ownership after a failure.
    RecheckSlot {
        /// Slot to re-read.
        slot: SlotId,
    },
    /// Ownership read for a slot completed.
    SlotOwnershipLoaded {
        /// Slot that was read.
        slot: SlotId,
        /// Whether its metadata URI is already claimed.
        owned: bool,
    },
    /// Ownership read for a slot failed.
    SlotOwnershipFailed {
        /// Slot that was read.
        slot: SlotId,
        /// Failure cause.
        error: WalletError,
    },
    /// User pressed "Mint" on a slot.
    RequestMint {
        /// Slot to mint.
        slot: SlotId,
    },
    /// The wallet broadcast the mint transaction.
    MintSubmitted {
        /// Slot being minted.
        slot: SlotId,
        /// Broadcast transaction.
        tx: TxHash,
    },
    /// The mint transaction was confirmed.
    MintConfirmed {
        /// Slot that was minted.
        slot: SlotId,
    },
    /// The mint was rejected, reverted, or timed out.
    MintFailed {
        /// Slot that failed.
        slot: SlotId,
        /// Failure cause.
        error: WalletError,
    },
    /// Remove a status message.
    DismissStatus {
        /// Message to remove.
        id: StatusId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects emitted by the reducer for the host context to execute.
pub enum RuntimeEffect {
    /// Read the persisted or system theme and apply it.
    ResolveTheme,
    /// Flip, persist, and apply the theme.
    ToggleTheme,
    /// Wait out the loading placeholder.
    StartLoadingDelay,
    /// Check for an injected wallet.
    ProbeWallet,
    /// Request accounts, then read the first account's balance.
    LoadBalance {
        /// Generation to report back.
        request: RequestId,
    },
    /// Read the gallery counter.
    LoadCount {
        /// Generation to report back.
        request: RequestId,
    },
    /// Read whether a slot's metadata URI is owned.
    LoadSlotOwnership {
        /// Slot to read.
        slot: SlotId,
    },
    /// Submit `payToMint` for a slot and wait for confirmation.
    SubmitMint {
        /// Slot to mint.
        slot: SlotId,
    },
    /// Dismiss a status message once the clear delay elapses.
    ClearStatusAfterDelay {
        /// Message to clear.
        id: StatusId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reducer misuse detected while applying an action.
pub enum ReducerError {
    /// The action named a slot the gallery does not show.
    #[error("slot {0} is not part of the gallery")]
    UnknownSlot(SlotId),
}

/// Applies `action` to `state` and returns the effects the host must run.
pub fn reduce_mint(
    state: &mut MintState,
    action: MintAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();

    match action {
        MintAction::Boot => {
            if state.phase == RootPhase::Loading {
                effects.push(RuntimeEffect::ResolveTheme);
                effects.push(RuntimeEffect::StartLoadingDelay);
            }
        }
        MintAction::LoadingDelayElapsed => {
            if state.phase == RootPhase::Loading {
                state.phase = RootPhase::Detecting { recheck: false };
                effects.push(RuntimeEffect::ProbeWallet);
            }
        }
        MintAction::WalletProbed { present } => {
            if let RootPhase::Detecting { recheck } = state.phase {
                if present {
                    state.phase = RootPhase::HasWallet;
                    state.clear_status(StatusOrigin::Install);
                } else {
                    state.phase = RootPhase::NoWallet;
                    if recheck {
                        push_status(
                            state,
                            &mut effects,
                            StatusOrigin::Install,
                            StatusLevel::Info,
                            RECHECK_MISS_TEXT,
                        );
                    }
                }
            }
        }
        MintAction::RecheckWallet => {
            if state.phase == RootPhase::NoWallet {
                state.phase = RootPhase::Detecting { recheck: true };
                effects.push(RuntimeEffect::ProbeWallet);
            }
        }
        MintAction::ThemeResolved { theme } => {
            state.theme = Some(theme);
        }
        MintAction::ToggleTheme => effects.push(RuntimeEffect::ToggleTheme),
        MintAction::RefreshBalance => {
            if state.phase == RootPhase::HasWallet {
                begin_balance_refresh(state, &mut effects);
            }
        }
        MintAction::BalanceLoaded {
            request,
            account,
            balance,
        } => {
            if is_current_balance(state, request) {
                state.balance = BalanceState::Ready {
                    request,
                    account,
                    balance,
                };
            }
        }
        MintAction::BalanceFailed { request, error } => {
            if is_current_balance(state, request) {
                let text = error.user_message();
                state.balance = BalanceState::Failed { request, error };
                push_status(
                    state,
                    &mut effects,
                    StatusOrigin::Balance,
                    StatusLevel::Error,
                    text,
                );
            }
        }
        MintAction::RefreshCount => {
            if state.phase == RootPhase::HasWallet {
                begin_count_refresh(state, &mut effects);
            }
        }
        MintAction::CountLoaded { request, count } => {
            if state.gallery.count_request == Some(request) {
                state.gallery.count_request = None;
                state.gallery.count = Some(count);
                state.clear_status(StatusOrigin::Gallery);

                let last = count.saturating_add(1);
                state.gallery.slots.retain(|slot, _| slot.0 <= last);
                for id in 1..=last {
                    let slot = SlotId(id);
                    if !state.gallery.slots.contains_key(&slot) {
                        state.gallery.slots.insert(slot, SlotState::Checking);
                        effects.push(RuntimeEffect::LoadSlotOwnership { slot });
                    }
                }
            }
        }
        MintAction::CountFailed { request, error } => {
            if state.gallery.count_request == Some(request) {
                let text = error.user_message();
                state.gallery.count_request = None;
                state.gallery.count_error = Some(error);
                push_status(
                    state,
                    &mut effects,
                    StatusOrigin::Gallery,
                    StatusLevel::Error,
                    text,
                );
            }
        }
        MintAction::RecheckSlot { slot } => {
            let current = slot_state_mut(state, slot)?;
            if !current.is_pending() {
                *current = SlotState::Checking;
                state.clear_status(StatusOrigin::Slot(slot));
                effects.push(RuntimeEffect::LoadSlotOwnership { slot });
            }
        }
        MintAction::SlotOwnershipLoaded { slot, owned } => {
            let current = slot_state_mut(state, slot)?;
            if !current.is_pending() {
                *current = if owned {
                    SlotState::Minted
                } else {
                    SlotState::Unminted
                };
            }
        }
        MintAction::SlotOwnershipFailed { slot, error } => {
            let current = slot_state_mut(state, slot)?;
            if !current.is_pending() {
                let text = error.user_message();
                *current = SlotState::Failed { error };
                push_status(
                    state,
                    &mut effects,
                    StatusOrigin::Slot(slot),
                    StatusLevel::Error,
                    text,
                );
            }
        }
        MintAction::RequestMint { slot } => {
            let connected = state.phase == RootPhase::HasWallet;
            let current = slot_state_mut(state, slot)?;
            if connected && current.can_mint() {
                *current = SlotState::Pending { tx: None };
                state.clear_status(StatusOrigin::Slot(slot));
                effects.push(RuntimeEffect::SubmitMint { slot });
            }
        }
        MintAction::MintSubmitted { slot, tx } => {
            let current = slot_state_mut(state, slot)?;
            if current.is_pending() {
                *current = SlotState::Pending { tx: Some(tx) };
            }
        }
        MintAction::MintConfirmed { slot } => {
            let current = slot_state_mut(state, slot)?;
            if current.is_pending() {
                *current = SlotState::Checking;
                effects.push(RuntimeEffect::LoadSlotOwnership { slot });
                push_status(
                    state,
                    &mut effects,
                    StatusOrigin::Slot(slot),
                    StatusLevel::Info,
                    format!("Sheep #{slot} minted!"),
                );
                if state.phase == RootPhase::HasWallet {
                    begin_count_refresh(state, &mut effects);
                    begin_balance_refresh(state, &mut effects);
                }
            }
        }
        MintAction::MintFailed { slot, error } => {
            let current = slot_state_mut(state, slot)?;
            let broadcast = match &*current {
                SlotState::Pending { tx } => tx.is_some(),
                _ => return Ok(effects),
            };
            if broadcast {
                // The transaction may still land; only the chain can say whether the slot is free.
                *current = SlotState::Checking;
                effects.push(RuntimeEffect::LoadSlotOwnership { slot });
                if state.phase == RootPhase::HasWallet {
                    begin_count_refresh(state, &mut effects);
                }
            } else {
                *current = SlotState::Unminted;
            }
            push_status(
                state,
                &mut effects,
                StatusOrigin::Slot(slot),
                StatusLevel::Error,
                error.user_message(),
            );
        }
        MintAction::DismissStatus { id } => {
            state.statuses.retain(|status| status.id != id);
        }
    }

    Ok(effects)
}

fn slot_state_mut(state: &mut MintState, slot: SlotId) -> Result<&mut SlotState, ReducerError> {
    state
        .gallery
        .slots
        .get_mut(&slot)
        .ok_or(ReducerError::UnknownSlot(slot))
}

fn is_current_balance(state: &MintState, request: RequestId) -> bool {
    matches!(state.balance, BalanceState::Loading { request: current } if current == request)
}

fn begin_balance_refresh(state: &mut MintState, effects: &mut Vec<RuntimeEffect>) {
    let request = state.next_request();
    state.balance = BalanceState::Loading { request };
    state.clear_status(StatusOrigin::Balance);
    effects.push(RuntimeEffect::LoadBalance { request });
}

fn begin_count_refresh(state: &mut MintState, effects: &mut Vec<RuntimeEffect>) {
    let request = state.next_request();
    state.gallery.count_request = Some(request);
    state.gallery.count_error = None;
    state.clear_status(StatusOrigin::Gallery);
    effects.push(RuntimeEffect::LoadCount { request });
}

fn push_status(
    state: &mut MintState,
    effects: &mut Vec<RuntimeEffect>,
    origin: StatusOrigin,
    level: StatusLevel,
    text: impl Into<String>,
) {
    let id = state.set_status(origin, level, text);
    if level == StatusLevel::Info {
        effects.push(RuntimeEffect::ClearStatusAfterDelay { id });
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::B256;
    use pretty_assertions::assert_eq;

    use super::*;

    fn reduce(state: &mut MintState, action: MintAction) -> Vec<RuntimeEffect> {
        reduce_mint(state, action).expect("reduce")
    }

    fn connected() -> MintState {
        MintState {
            phase: RootPhase::HasWallet,
            ..MintState::default()
        }
    }

    fn gallery_with(count: u64) -> MintState {
        let mut state = connected();
        let effects = reduce(&mut state, MintAction::RefreshCount);
        let [RuntimeEffect::LoadCount { request }] = effects.as_slice() else {
            panic!("expected count load, got {effects:?}");
        };
        reduce(
            &mut state,
            MintAction::CountLoaded {
                request: *request,
                count,
            },
        );
        state
    }

    #[test]
    fn boot_waits_for_loading_delay_before_probing() {
        let mut state = MintState::default();
        assert_eq!(
            reduce(&mut state, MintAction::Boot),
            vec![RuntimeEffect::ResolveTheme, RuntimeEffect::StartLoadingDelay]
        );
        assert_eq!(state.phase, RootPhase::Loading);

        assert_eq!(
            reduce(&mut state, MintAction::LoadingDelayElapsed),
            vec![RuntimeEffect::ProbeWallet]
        );
        assert_eq!(state.phase, RootPhase::Detecting { recheck: false });

        reduce(&mut state, MintAction::WalletProbed { present: true });
        assert_eq!(state.phase, RootPhase::HasWallet);
        assert!(reduce(&mut state, MintAction::Boot).is_empty());
    }

    #[test]
    fn recheck_goes_straight_back_to_detection() {
        let mut state = MintState {
            phase: RootPhase::Detecting { recheck: false },
            ..MintState::default()
        };
        assert!(reduce(&mut state, MintAction::WalletProbed { present: false }).is_empty());
        assert_eq!(state.phase, RootPhase::NoWallet);
        assert_eq!(state.status_for(StatusOrigin::Install), None);

        assert_eq!(
            reduce(&mut state, MintAction::RecheckWallet),
            vec![RuntimeEffect::ProbeWallet]
        );
        assert_eq!(state.phase, RootPhase::Detecting { recheck: true });

        let effects = reduce(&mut state, MintAction::WalletProbed { present: false });
        let status = state
            .status_for(StatusOrigin::Install)
            .expect("recheck miss message")
            .clone();
        assert_eq!(status.level, StatusLevel::Info);
        assert_eq!(
            effects,
            vec![RuntimeEffect::ClearStatusAfterDelay { id: status.id }]
        );

        reduce(&mut state, MintAction::RecheckWallet);
        reduce(&mut state, MintAction::WalletProbed { present: true });
        assert_eq!(state.phase, RootPhase::HasWallet);
        assert_eq!(state.status_for(StatusOrigin::Install), None);
    }

    #[test]
    fn recheck_is_ignored_outside_no_wallet() {
        let mut state = connected();
        assert!(reduce(&mut state, MintAction::RecheckWallet).is_empty());
        assert_eq!(state.phase, RootPhase::HasWallet);
    }

    #[test]
    fn superseded_balance_results_are_dropped() {
        let mut state = connected();
        let first = state.next_request_id + 1;
        reduce(&mut state, MintAction::RefreshBalance);
        reduce(&mut state, MintAction::RefreshBalance);
        let second = RequestId(first + 1);

        reduce(
            &mut state,
            MintAction::BalanceLoaded {
                request: RequestId(first),
                account: Address::ZERO,
                balance: "9.0".to_string(),
            },
        );
        assert_eq!(state.balance, BalanceState::Loading { request: second });

        reduce(
            &mut state,
            MintAction::BalanceLoaded {
                request: second,
                account: Address::ZERO,
                balance: "1.5".to_string(),
            },
        );
        assert_eq!(
            state.balance,
            BalanceState::Ready {
                request: second,
                account: Address::ZERO,
                balance: "1.5".to_string(),
            }
        );
    }

    #[test]
    fn balance_failure_raises_persistent_status_and_retry_clears_it() {
        let mut state = connected();
        reduce(&mut state, MintAction::RefreshBalance);
        let request = state.balance.request().expect("loading");
        let effects = reduce(
            &mut state,
            MintAction::BalanceFailed {
                request,
                error: WalletError::NoAccounts,
            },
        );
        assert!(effects.is_empty());
        assert!(matches!(state.balance, BalanceState::Failed { .. }));
        assert_eq!(
            state.status_for(StatusOrigin::Balance).map(|s| s.level),
            Some(StatusLevel::Error)
        );

        reduce(&mut state, MintAction::RefreshBalance);
        assert_eq!(state.status_for(StatusOrigin::Balance), None);
        assert!(matches!(state.balance, BalanceState::Loading { .. }));
    }

    #[test]
    fn count_of_three_yields_four_checking_slots() {
        let mut state = connected();
        let effects = reduce(&mut state, MintAction::RefreshCount);
        let request = state.gallery.count_request.expect("count request");
        assert_eq!(effects, vec![RuntimeEffect::LoadCount { request }]);

        let effects = reduce(&mut state, MintAction::CountLoaded { request, count: 3 });
        assert_eq!(
            state.gallery.slot_ids(),
            vec![SlotId(1), SlotId(2), SlotId(3), SlotId(4)]
        );
        assert_eq!(
            effects,
            (1..=4)
                .map(|id| RuntimeEffect::LoadSlotOwnership { slot: SlotId(id) })
                .collect::<Vec<_>>()
        );
        assert!(state
            .gallery
            .slots
            .values()
            .all(|slot| *slot == SlotState::Checking));
    }

    #[test]
    fn count_failure_offers_retry_until_a_new_read_starts() {
        let mut state = connected();
        reduce(&mut state, MintAction::RefreshCount);
        let request = state.gallery.count_request.expect("count request");
        reduce(
            &mut state,
            MintAction::CountFailed {
                request,
                error: WalletError::NetworkUnavailable("offline".to_string()),
            },
        );
        assert!(state.gallery.count_failed());
        assert!(state.gallery.slot_ids().is_empty());
        assert!(state.status_for(StatusOrigin::Gallery).is_some());

        let effects = reduce(&mut state, MintAction::RefreshCount);
        let retry = state.gallery.count_request.expect("retry request");
        assert_eq!(effects, vec![RuntimeEffect::LoadCount { request: retry }]);
        assert!(!state.gallery.count_failed());
        assert_eq!(state.gallery.count_error, None);
        assert_eq!(state.status_for(StatusOrigin::Gallery), None);
    }

    #[test]
    fn empty_collection_still_offers_first_slot() {
        let state = gallery_with(0);
        assert_eq!(state.gallery.slot_ids(), vec![SlotId(1)]);
    }

    #[test]
    fn pending_slot_ignores_second_mint_request() {
        let mut state = gallery_with(1);
        reduce(
            &mut state,
            MintAction::SlotOwnershipLoaded {
                slot: SlotId(2),
                owned: false,
            },
        );

        assert_eq!(
            reduce(&mut state, MintAction::RequestMint { slot: SlotId(2) }),
            vec![RuntimeEffect::SubmitMint { slot: SlotId(2) }]
        );
        assert!(reduce(&mut state, MintAction::RequestMint { slot: SlotId(2) }).is_empty());

        reduce(
            &mut state,
            MintAction::SlotOwnershipLoaded {
                slot: SlotId(2),
                owned: false,
            },
        );
        assert_eq!(
            state.gallery.slot(SlotId(2)),
            Some(&SlotState::Pending { tx: None })
        );
    }

    #[test]
    fn minted_or_checking_slots_cannot_be_minted() {
        let mut state = gallery_with(1);
        assert!(reduce(&mut state, MintAction::RequestMint { slot: SlotId(1) }).is_empty());
        reduce(
            &mut state,
            MintAction::SlotOwnershipLoaded {
                slot: SlotId(1),
                owned: true,
            },
        );
        assert!(reduce(&mut state, MintAction::RequestMint { slot: SlotId(1) }).is_empty());
        assert_eq!(state.gallery.slot(SlotId(1)), Some(&SlotState::Minted));
    }

    #[test]
    fn confirmed_mint_rechecks_slot_and_refreshes_counter_and_balance() {
        let mut state = gallery_with(0);
        reduce(
            &mut state,
            MintAction::SlotOwnershipLoaded {
                slot: SlotId(1),
                owned: false,
            },
        );
        reduce(&mut state, MintAction::RequestMint { slot: SlotId(1) });
        reduce(
            &mut state,
            MintAction::MintSubmitted {
                slot: SlotId(1),
                tx: B256::repeat_byte(7),
            },
        );
        assert_eq!(
            state.gallery.slot(SlotId(1)),
            Some(&SlotState::Pending {
                tx: Some(B256::repeat_byte(7))
            })
        );

        let effects = reduce(&mut state, MintAction::MintConfirmed { slot: SlotId(1) });
        let status = state
            .status_for(StatusOrigin::Slot(SlotId(1)))
            .expect("minted message")
            .clone();
        let count_request = state.gallery.count_request.expect("count refresh");
        let balance_request = state.balance.request().expect("balance refresh");
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::LoadSlotOwnership { slot: SlotId(1) },
                RuntimeEffect::ClearStatusAfterDelay { id: status.id },
                RuntimeEffect::LoadCount {
                    request: count_request
                },
                RuntimeEffect::LoadBalance {
                    request: balance_request
                },
            ]
        );
        assert_eq!(state.gallery.slot(SlotId(1)), Some(&SlotState::Checking));
    }

    #[test]
    fn failed_mint_returns_slot_to_unminted_with_error() {
        let mut state = gallery_with(0);
        reduce(
            &mut state,
            MintAction::SlotOwnershipLoaded {
                slot: SlotId(1),
                owned: false,
            },
        );
        reduce(&mut state, MintAction::RequestMint { slot: SlotId(1) });
        let effects = reduce(
            &mut state,
            MintAction::MintFailed {
                slot: SlotId(1),
                error: WalletError::UserRejectedRequest("denied".to_string()),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state.gallery.slot(SlotId(1)), Some(&SlotState::Unminted));
        let status = state
            .status_for(StatusOrigin::Slot(SlotId(1)))
            .expect("slot error");
        assert_eq!(status.level, StatusLevel::Error);
        let id = status.id;

        reduce(&mut state, MintAction::DismissStatus { id });
        assert!(state.statuses.is_empty());
    }

    #[test]
    fn failure_after_broadcast_rechecks_instead_of_reopening_slot() {
        let mut state = gallery_with(0);
        reduce(
            &mut state,
            MintAction::SlotOwnershipLoaded {
                slot: SlotId(1),
                owned: false,
            },
        );
        reduce(&mut state, MintAction::RequestMint { slot: SlotId(1) });
        let tx = B256::repeat_byte(9);
        reduce(
            &mut state,
            MintAction::MintSubmitted {
                slot: SlotId(1),
                tx,
            },
        );

        let effects = reduce(
            &mut state,
            MintAction::MintFailed {
                slot: SlotId(1),
                error: WalletError::TransactionTimedOut(tx),
            },
        );
        let count_request = state.gallery.count_request.expect("count refresh");
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::LoadSlotOwnership { slot: SlotId(1) },
                RuntimeEffect::LoadCount {
                    request: count_request
                },
            ]
        );
        assert_eq!(state.gallery.slot(SlotId(1)), Some(&SlotState::Checking));
        assert_eq!(
            state
                .status_for(StatusOrigin::Slot(SlotId(1)))
                .map(|status| status.level),
            Some(StatusLevel::Error)
        );
        assert!(reduce(&mut state, MintAction::RequestMint { slot: SlotId(1) }).is_empty());
    }

    #[test]
    fn unknown_slot_is_a_reducer_error() {
        let mut state = gallery_with(2);
        assert_eq!(
            reduce_mint(&mut state, MintAction::RequestMint { slot: SlotId(9) }),
            Err(ReducerError::UnknownSlot(SlotId(9)))
        );
    }

    #[test]
    fn ownership_failure_offers_recheck() {
        let mut state = gallery_with(0);
        reduce(
            &mut state,
            MintAction::SlotOwnershipFailed {
                slot: SlotId(1),
                error: WalletError::NetworkUnavailable("offline".to_string()),
            },
        );
        assert!(matches!(
            state.gallery.slot(SlotId(1)),
            Some(SlotState::Failed { .. })
        ));

        assert_eq!(
            reduce(&mut state, MintAction::RecheckSlot { slot: SlotId(1) }),
            vec![RuntimeEffect::LoadSlotOwnership { slot: SlotId(1) }]
        );
        assert_eq!(state.status_for(StatusOrigin::Slot(SlotId(1))), None);
    }

    #[test]
    fn results_before_wallet_detection_start_nothing() {
        let mut state = MintState::default();
        assert!(reduce(&mut state, MintAction::RefreshBalance).is_empty());
        assert!(reduce(&mut state, MintAction::RefreshCount).is_empty());
        assert_eq!(state.balance, BalanceState::Idle);
    }
}
