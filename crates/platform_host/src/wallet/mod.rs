//! Wallet provider and minting-contract contracts, plus the wire helpers shared by adapters.

pub mod abi;
pub mod error;
pub mod memory;
pub mod provider;
pub mod units;
