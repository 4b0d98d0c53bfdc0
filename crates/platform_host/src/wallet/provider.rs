//! Wallet provider and minting-contract service contracts.

use std::{future::Future, pin::Pin, time::Duration};

use alloy_primitives::{Address, B256, U256};

use super::error::WalletError;

/// Object-safe boxed future used by wallet and contract methods.
pub type WalletFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Hash identifying a submitted transaction.
pub type TxHash = B256;

/// Chain-side parameters an adapter needs to reach the minting contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSettings {
    /// Deployed contract address.
    pub contract_address: Address,
    /// Delay between transaction receipt polls.
    pub confirmation_poll_interval: Duration,
    /// Total time to wait for a receipt before giving up.
    pub confirmation_timeout: Duration,
}

/// Injected wallet capability: presence, accounts, balances.
pub trait WalletProvider {
    /// Returns whether a wallet provider object exists right now. Never cached.
    fn is_present(&self) -> bool;

    /// Asks the wallet for access and returns the exposed accounts, active account first.
    fn request_accounts(&self) -> WalletFuture<'_, Result<Vec<Address>, WalletError>>;

    /// Returns the balance of `account` in wei.
    fn get_balance(&self, account: Address) -> WalletFuture<'_, Result<U256, WalletError>>;
}

/// Minting-contract capability reached through the wallet.
pub trait MintContract {
    /// Number of tokens minted so far.
    fn count(&self) -> WalletFuture<'_, Result<U256, WalletError>>;

    /// Whether the metadata URI has already been claimed.
    fn is_content_owned<'a>(&'a self, uri: &'a str) -> WalletFuture<'a, Result<bool, WalletError>>;

    /// Metadata URI stored for a minted token id.
    fn token_uri(&self, token_id: U256) -> WalletFuture<'_, Result<String, WalletError>>;

    /// Submits a paid mint of `uri` to `recipient`. Resolves once the wallet has broadcast the
    /// transaction, not once it is confirmed.
    fn pay_to_mint<'a>(
        &'a self,
        recipient: Address,
        uri: &'a str,
        value: U256,
    ) -> WalletFuture<'a, Result<TxHash, WalletError>>;

    /// Waits until `tx` is included. Fails with [`WalletError::ContractCallReverted`] when the
    /// receipt reports failure and [`WalletError::TransactionTimedOut`] when no receipt arrives.
    fn wait_for_confirmation(&self, tx: TxHash) -> WalletFuture<'_, Result<(), WalletError>>;
}
