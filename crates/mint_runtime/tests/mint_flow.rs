//! End-to-end mint flows driven through the reducer and host effects without a browser.

use std::{cell::RefCell, rc::Rc, time::Duration};

use alloy_primitives::{address, Address, B256, U256};
use futures::{
    executor::{LocalPool, LocalSpawner},
    task::LocalSpawnExt,
};
use mint_runtime::{
    reduce_mint, run_effect, BalanceState, MintAction, MintConfig, MintHostContext, MintState,
    RootPhase, SlotId, SlotState, StatusLevel, StatusOrigin, ThemePreference, THEME_PREF_KEY,
};
use platform_host::{
    parse_ether, HostServices, ManualScheduler, MemoryAppearance, MemoryChain, MemoryChainOp,
    MemoryPrefsStore, MintContract, WalletError,
};
use pretty_assertions::assert_eq;

const ALICE: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

struct Driver {
    state: RefCell<MintState>,
    host: MintHostContext,
    spawner: LocalSpawner,
}

impl Driver {
    fn dispatch(self: &Rc<Self>, action: MintAction) {
        let effects = reduce_mint(&mut self.state.borrow_mut(), action).expect("reduce");
        for effect in effects {
            let driver = self.clone();
            let future = run_effect(
                self.host.clone(),
                effect,
                Rc::new(move |action: MintAction| driver.dispatch(action)),
            );
            self.spawner.spawn_local(future).expect("spawn effect");
        }
    }

    fn state(&self) -> MintState {
        self.state.borrow().clone()
    }
}

struct Harness {
    pool: LocalPool,
    driver: Rc<Driver>,
    chain: MemoryChain,
    prefs: MemoryPrefsStore,
    appearance: MemoryAppearance,
    scheduler: ManualScheduler,
    config: MintConfig,
}

impl Harness {
    fn new(chain: MemoryChain) -> Self {
        Self::with_prefs(chain, MemoryPrefsStore::default(), None)
    }

    fn with_prefs(
        chain: MemoryChain,
        prefs: MemoryPrefsStore,
        prefers_dark: Option<bool>,
    ) -> Self {
        let pool = LocalPool::new();
        let appearance = MemoryAppearance::with_system_preference(prefers_dark);
        let scheduler = ManualScheduler::default();
        let config = MintConfig::default();
        let host = MintHostContext::new(
            HostServices::from_chain(
                chain.clone(),
                Rc::new(prefs.clone()),
                Rc::new(appearance.clone()),
                Rc::new(scheduler.clone()),
            ),
            config.clone(),
        );
        let driver = Rc::new(Driver {
            state: RefCell::new(host.initial_state()),
            host,
            spawner: pool.spawner(),
        });
        Self {
            pool,
            driver,
            chain,
            prefs,
            appearance,
            scheduler,
            config,
        }
    }

    fn dispatch(&mut self, action: MintAction) {
        self.driver.dispatch(action);
        self.settle();
    }

    fn settle(&mut self) {
        self.pool.run_until_stalled();
    }

    fn advance(&mut self, by: Duration) {
        self.scheduler.advance(by);
        self.settle();
    }

    fn state(&self) -> MintState {
        self.driver.state()
    }

    /// Boots, waits out the loading delay, and performs the mount-time reads a connected view
    /// issues.
    fn boot_connected(&mut self) {
        self.dispatch(MintAction::Boot);
        self.advance(self.config.loading_delay);
        assert_eq!(self.state().phase, RootPhase::HasWallet);
        self.dispatch(MintAction::RefreshBalance);
        self.dispatch(MintAction::RefreshCount);
    }

    fn premint(&self, slots: &[u64]) {
        for slot in slots {
            let uri = self.config.metadata_uri(SlotId(*slot));
            let tx = futures::executor::block_on(self.chain.pay_to_mint(
                ALICE,
                &uri,
                self.config.mint_price,
            ))
            .expect("premint submit");
            futures::executor::block_on(self.chain.wait_for_confirmation(tx))
                .expect("premint confirm");
        }
    }
}

fn funded_chain(ether: &str) -> MemoryChain {
    MemoryChain::new(MintConfig::default().mint_price)
        .with_funded_account(ALICE, parse_ether(ether).expect("funds"))
}

#[test]
fn loading_delay_precedes_detection() {
    let mut harness = Harness::new(funded_chain("1"));
    harness.dispatch(MintAction::Boot);
    assert_eq!(harness.state().phase, RootPhase::Loading);

    harness.advance(Duration::from_millis(99));
    assert_eq!(harness.state().phase, RootPhase::Loading);

    harness.advance(Duration::from_millis(1));
    assert_eq!(harness.state().phase, RootPhase::HasWallet);
}

#[test]
fn gallery_shows_counter_plus_one_slots_with_live_ownership() {
    let mut harness = Harness::new(funded_chain("1"));
    harness.premint(&[1, 2, 3]);
    harness.boot_connected();

    let state = harness.state();
    assert_eq!(state.gallery.count, Some(3));
    assert_eq!(
        state.gallery.slot_ids(),
        vec![SlotId(1), SlotId(2), SlotId(3), SlotId(4)]
    );
    for slot in 1..=3 {
        assert_eq!(state.gallery.slot(SlotId(slot)), Some(&SlotState::Minted));
    }
    assert_eq!(state.gallery.slot(SlotId(4)), Some(&SlotState::Unminted));
    assert_eq!(
        state.balance,
        BalanceState::Ready {
            request: state.balance.request().expect("request"),
            account: ALICE,
            balance: "0.85".to_string(),
        }
    );
}

#[test]
fn minting_claims_slot_grows_gallery_and_spends_balance() {
    let mut harness = Harness::new(funded_chain("1"));
    harness.boot_connected();
    assert_eq!(harness.state().gallery.slot_ids(), vec![SlotId(1)]);

    harness.dispatch(MintAction::RequestMint { slot: SlotId(1) });

    let state = harness.state();
    assert_eq!(harness.chain.submitted_transactions(), 1);
    assert_eq!(
        harness
            .chain
            .owner_of_uri(&harness.config.metadata_uri(SlotId(1))),
        Some(ALICE)
    );
    assert_eq!(state.gallery.count, Some(1));
    assert_eq!(state.gallery.slot(SlotId(1)), Some(&SlotState::Minted));
    assert_eq!(state.gallery.slot(SlotId(2)), Some(&SlotState::Unminted));
    assert!(matches!(
        &state.balance,
        BalanceState::Ready { balance, .. } if balance == "0.95"
    ));
    assert_eq!(
        state
            .status_for(StatusOrigin::Slot(SlotId(1)))
            .map(|status| status.level),
        Some(StatusLevel::Info)
    );

    harness.advance(harness.config.status_clear_delay);
    assert!(harness.state().statuses.is_empty());
}

#[test]
fn double_submit_on_pending_slot_sends_one_transaction() {
    let mut harness = Harness::new(funded_chain("1"));
    harness.boot_connected();

    // Queue both presses before the executor gets a chance to run the first submission.
    harness
        .driver
        .dispatch(MintAction::RequestMint { slot: SlotId(1) });
    harness
        .driver
        .dispatch(MintAction::RequestMint { slot: SlotId(1) });
    harness.settle();

    assert_eq!(harness.chain.submitted_transactions(), 1);
    assert_eq!(harness.state().gallery.slot(SlotId(1)), Some(&SlotState::Minted));
}

#[test]
fn rejected_mint_leaves_slot_mintable_with_error() {
    let mut harness = Harness::new(funded_chain("1"));
    harness.boot_connected();
    harness.chain.fail_next(
        MemoryChainOp::PayToMint,
        WalletError::UserRejectedRequest("User denied transaction signature".to_string()),
    );

    harness.dispatch(MintAction::RequestMint { slot: SlotId(1) });

    let state = harness.state();
    assert_eq!(state.gallery.slot(SlotId(1)), Some(&SlotState::Unminted));
    let status = state
        .status_for(StatusOrigin::Slot(SlotId(1)))
        .expect("slot error");
    assert_eq!(status.level, StatusLevel::Error);
    assert_eq!(status.text, "The request was rejected in your wallet.");

    harness.advance(harness.config.status_clear_delay);
    assert!(harness
        .state()
        .status_for(StatusOrigin::Slot(SlotId(1)))
        .is_some());
}

#[test]
fn timed_out_mint_is_rechecked_not_resubmitted() {
    let mut harness = Harness::new(funded_chain("1"));
    harness.boot_connected();
    harness.chain.fail_next(
        MemoryChainOp::WaitForConfirmation,
        WalletError::TransactionTimedOut(B256::repeat_byte(0x11)),
    );

    harness.dispatch(MintAction::RequestMint { slot: SlotId(1) });

    let state = harness.state();
    assert_eq!(state.gallery.slot(SlotId(1)), Some(&SlotState::Minted));
    assert_eq!(state.gallery.count, Some(1));
    assert_eq!(
        state
            .status_for(StatusOrigin::Slot(SlotId(1)))
            .map(|status| status.level),
        Some(StatusLevel::Error)
    );

    harness.dispatch(MintAction::RequestMint { slot: SlotId(1) });
    assert_eq!(harness.chain.submitted_transactions(), 1);
    assert_eq!(
        harness.state().gallery.slot(SlotId(1)),
        Some(&SlotState::Minted)
    );
}

#[test]
fn missing_wallet_recheck_reports_and_recovers() {
    let chain = funded_chain("1");
    chain.set_present(false);
    let mut harness = Harness::new(chain);
    harness.dispatch(MintAction::Boot);
    harness.advance(harness.config.loading_delay);
    assert_eq!(harness.state().phase, RootPhase::NoWallet);

    harness.dispatch(MintAction::RecheckWallet);
    let state = harness.state();
    assert_eq!(state.phase, RootPhase::NoWallet);
    assert!(state.status_for(StatusOrigin::Install).is_some());

    harness.advance(Duration::from_secs(4));
    assert!(harness.state().status_for(StatusOrigin::Install).is_some());
    harness.advance(Duration::from_secs(1));
    assert!(harness.state().status_for(StatusOrigin::Install).is_none());

    harness.chain.set_present(true);
    harness.dispatch(MintAction::RecheckWallet);
    assert_eq!(harness.state().phase, RootPhase::HasWallet);
}

#[test]
fn balance_failure_surfaces_and_retry_recovers() {
    let mut harness = Harness::new(funded_chain("2"));
    harness.chain.fail_next(
        MemoryChainOp::RequestAccounts,
        WalletError::UserRejectedRequest("User rejected the request.".to_string()),
    );
    harness.boot_connected();

    let state = harness.state();
    assert!(matches!(
        state.balance,
        BalanceState::Failed {
            error: WalletError::UserRejectedRequest(_),
            ..
        }
    ));
    assert!(state.status_for(StatusOrigin::Balance).is_some());

    harness.dispatch(MintAction::RefreshBalance);
    let state = harness.state();
    assert!(matches!(
        &state.balance,
        BalanceState::Ready { balance, .. } if balance == "2.0"
    ));
    assert!(state.status_for(StatusOrigin::Balance).is_none());
}

#[test]
fn counter_failure_leaves_empty_gallery_until_retry() {
    let mut harness = Harness::new(funded_chain("1"));
    harness.premint(&[1]);
    harness.chain.fail_next(
        MemoryChainOp::Count,
        WalletError::NetworkUnavailable("connection refused".to_string()),
    );
    harness.boot_connected();

    let state = harness.state();
    assert!(state.gallery.count_failed());
    assert!(state.gallery.slot_ids().is_empty());
    assert!(state.status_for(StatusOrigin::Gallery).is_some());

    harness.dispatch(MintAction::RefreshCount);
    let state = harness.state();
    assert!(!state.gallery.count_failed());
    assert_eq!(state.gallery.slot_ids(), vec![SlotId(1), SlotId(2)]);
    assert_eq!(state.gallery.slot(SlotId(1)), Some(&SlotState::Minted));
    assert!(state.status_for(StatusOrigin::Gallery).is_none());
}

#[test]
fn balance_only_reflects_latest_request() {
    let mut harness = Harness::new(funded_chain("1"));
    harness.boot_connected();

    harness
        .chain
        .set_balance(ALICE, U256::from(25_000_000_000_000_000u64));
    harness.driver.dispatch(MintAction::RefreshBalance);
    assert!(matches!(
        harness.state().balance,
        BalanceState::Loading { .. }
    ));
    harness.driver.dispatch(MintAction::RefreshBalance);
    let latest = harness.state().balance.request().expect("latest");
    harness.settle();

    assert_eq!(
        harness.state().balance,
        BalanceState::Ready {
            request: latest,
            account: ALICE,
            balance: "0.025".to_string(),
        }
    );
}

#[test]
fn dark_system_theme_is_in_place_before_boot() {
    let harness = Harness::with_prefs(funded_chain("1"), MemoryPrefsStore::default(), Some(true));
    assert_eq!(harness.state().theme, Some(ThemePreference::Dark));
    assert!(harness.appearance.dark_flag());
    assert_eq!(
        harness.state().theme.map(ThemePreference::toggle_label),
        Some("Toggle light mode")
    );
}

#[test]
fn theme_hydrates_from_storage_and_toggles_persistently() {
    let prefs = MemoryPrefsStore::with_entry(THEME_PREF_KEY, "dark");
    let mut harness = Harness::with_prefs(funded_chain("1"), prefs, Some(false));
    harness.dispatch(MintAction::Boot);
    assert_eq!(harness.state().theme, Some(ThemePreference::Dark));
    assert!(harness.appearance.dark_flag());

    harness.dispatch(MintAction::ToggleTheme);
    assert_eq!(harness.state().theme, Some(ThemePreference::Light));
    assert_eq!(harness.prefs.peek(THEME_PREF_KEY).as_deref(), Some("light"));
    assert!(!harness.appearance.dark_flag());

    harness.dispatch(MintAction::ToggleTheme);
    assert_eq!(harness.state().theme, Some(ThemePreference::Dark));
    assert!(harness.appearance.dark_flag());
}
