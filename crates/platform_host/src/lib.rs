//! Typed host-domain contracts shared by the mint runtime and its browser adapters.
//!
//! This crate is the API-first boundary for everything the front-end needs from its environment:
//! the injected wallet provider, the minting contract, the preference store, document appearance
//! hooks, and timers. Concrete browser adapters live in `platform_host_web`; in-memory
//! implementations here back the runtime tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod appearance;
pub mod host;
pub mod scheduler;
pub mod storage;
pub mod wallet;

pub use appearance::{AppearanceService, MemoryAppearance};
pub use host::{HostServices, HostStrategy};
pub use scheduler::{ManualScheduler, ReadyScheduler, Scheduler, SchedulerFuture};
pub use storage::prefs::{MemoryPrefsStore, PrefsStore, PrefsStoreFuture};
pub use wallet::abi::AbiError;
pub use wallet::error::WalletError;
pub use wallet::memory::{MemoryChain, MemoryChainOp};
pub use wallet::provider::{ChainSettings, MintContract, TxHash, WalletFuture, WalletProvider};
pub use wallet::units::{format_ether, parse_ether, parse_quantity, to_quantity, UnitsError};

pub use alloy_primitives::{Address, U256};
