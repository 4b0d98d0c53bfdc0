//! In-memory wallet and minting contract used by runtime tests and local previews.
//!
//! The contract model follows the deployed minting contract: a token counter, one token per
//! metadata URI, and a minimum payment per mint. Transactions are accepted on submission and
//! executed when their confirmation is awaited.

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use alloy_primitives::{keccak256, Address, U256};

use super::{
    error::WalletError,
    provider::{MintContract, TxHash, WalletFuture, WalletProvider},
};

/// Operations that can be made to fail once via [`MemoryChain::fail_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryChainOp {
    /// [`WalletProvider::request_accounts`]
    RequestAccounts,
    /// [`WalletProvider::get_balance`]
    GetBalance,
    /// [`MintContract::count`]
    Count,
    /// [`MintContract::is_content_owned`]
    IsContentOwned,
    /// [`MintContract::token_uri`]
    TokenUri,
    /// [`MintContract::pay_to_mint`]
    PayToMint,
    /// [`MintContract::wait_for_confirmation`]
    WaitForConfirmation,
}

#[derive(Debug, Clone)]
struct PendingMint {
    from: Address,
    recipient: Address,
    uri: String,
    value: U256,
}

#[derive(Debug, Default)]
struct ChainState {
    present: bool,
    accounts: Vec<Address>,
    balances: HashMap<Address, U256>,
    mint_price: U256,
    tokens: Vec<(String, Address)>,
    claimed: HashSet<String>,
    pending: HashMap<TxHash, PendingMint>,
    next_nonce: u64,
    submitted: usize,
    failures: HashMap<MemoryChainOp, WalletError>,
}

impl ChainState {
    fn take_failure(&mut self, op: MemoryChainOp) -> Result<(), WalletError> {
        match self.failures.remove(&op) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn require_present(&self) -> Result<(), WalletError> {
        if self.present {
            Ok(())
        } else {
            Err(WalletError::WalletUnavailable)
        }
    }

    fn submit(
        &mut self,
        recipient: Address,
        uri: &str,
        value: U256,
    ) -> Result<TxHash, WalletError> {
        self.require_present()?;
        self.take_failure(MemoryChainOp::PayToMint)?;
        let from = *self.accounts.first().ok_or(WalletError::NoAccounts)?;
        if value < self.mint_price {
            return Err(WalletError::ContractCallReverted(
                "Need to pay up!".to_string(),
            ));
        }
        if self.claimed.contains(uri) {
            return Err(WalletError::ContractCallReverted(
                "NFT already minted!".to_string(),
            ));
        }
        let balance = self.balances.get(&from).copied().unwrap_or_default();
        if balance < value {
            return Err(WalletError::ContractCallReverted(
                "insufficient funds for transfer".to_string(),
            ));
        }

        let nonce = self.next_nonce;
        self.next_nonce += 1;
        let tx = keccak256(nonce.to_be_bytes());
        self.pending.insert(
            tx,
            PendingMint {
                from,
                recipient,
                uri: uri.to_string(),
                value,
            },
        );
        self.submitted += 1;
        Ok(tx)
    }

    fn execute(&mut self, tx: TxHash) -> Result<(), WalletError> {
        self.require_present()?;
        if let Some(err) = self.failures.remove(&MemoryChainOp::WaitForConfirmation) {
            // A receipt that never arrived does not stop the transaction from being mined.
            if matches!(err, WalletError::TransactionTimedOut(_)) {
                let _ = self.mine(tx);
            }
            return Err(err);
        }
        self.mine(tx)
    }

    fn mine(&mut self, tx: TxHash) -> Result<(), WalletError> {
        let mint = self
            .pending
            .remove(&tx)
            .ok_or_else(|| WalletError::InvalidResponse(format!("unknown transaction {tx}")))?;

        if self.claimed.contains(&mint.uri) {
            return Err(WalletError::ContractCallReverted(
                "NFT already minted!".to_string(),
            ));
        }
        let balance = self.balances.entry(mint.from).or_default();
        if *balance < mint.value {
            return Err(WalletError::ContractCallReverted(
                "insufficient funds for transfer".to_string(),
            ));
        }
        *balance -= mint.value;
        self.claimed.insert(mint.uri.clone());
        self.tokens.push((mint.uri, mint.recipient));
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Shared in-memory chain implementing both [`WalletProvider`] and [`MintContract`].
///
/// Clones observe and mutate the same state.
pub struct MemoryChain {
    state: Rc<RefCell<ChainState>>,
}

impl MemoryChain {
    /// Creates a chain with a present wallet, no accounts, and the given mint price.
    pub fn new(mint_price: U256) -> Self {
        let chain = Self::default();
        {
            let mut state = chain.state.borrow_mut();
            state.present = true;
            state.mint_price = mint_price;
        }
        chain
    }

    /// Adds an account (appended after existing ones) holding `balance` wei.
    pub fn with_funded_account(self, account: Address, balance: U256) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.accounts.push(account);
            state.balances.insert(account, balance);
        }
        self
    }

    /// Toggles whether the injected provider object exists.
    pub fn set_present(&self, present: bool) {
        self.state.borrow_mut().present = present;
    }

    /// Replaces the exposed account list.
    pub fn set_accounts(&self, accounts: Vec<Address>) {
        self.state.borrow_mut().accounts = accounts;
    }

    /// Overwrites an account balance.
    pub fn set_balance(&self, account: Address, balance: U256) {
        self.state.borrow_mut().balances.insert(account, balance);
    }

    /// Current balance of `account`.
    pub fn balance_of(&self, account: Address) -> U256 {
        self.state
            .borrow()
            .balances
            .get(&account)
            .copied()
            .unwrap_or_default()
    }

    /// Makes the next call of `op` fail with `err`.
    pub fn fail_next(&self, op: MemoryChainOp, err: WalletError) {
        self.state.borrow_mut().failures.insert(op, err);
    }

    /// Number of transactions accepted by [`MintContract::pay_to_mint`].
    pub fn submitted_transactions(&self) -> usize {
        self.state.borrow().submitted
    }

    /// Owner of the token minted for `uri`, if any.
    pub fn owner_of_uri(&self, uri: &str) -> Option<Address> {
        self.state
            .borrow()
            .tokens
            .iter()
            .find(|(token_uri, _)| token_uri == uri)
            .map(|(_, owner)| *owner)
    }
}

impl WalletProvider for MemoryChain {
    fn is_present(&self) -> bool {
        self.state.borrow().present
    }

    fn request_accounts(&self) -> WalletFuture<'_, Result<Vec<Address>, WalletError>> {
        Box::pin(async move {
            let mut state = self.state.borrow_mut();
            state.require_present()?;
            state.take_failure(MemoryChainOp::RequestAccounts)?;
            Ok(state.accounts.clone())
        })
    }

    fn get_balance(&self, account: Address) -> WalletFuture<'_, Result<U256, WalletError>> {
        Box::pin(async move {
            let mut state = self.state.borrow_mut();
            state.require_present()?;
            state.take_failure(MemoryChainOp::GetBalance)?;
            Ok(state.balances.get(&account).copied().unwrap_or_default())
        })
    }
}

impl MintContract for MemoryChain {
    fn count(&self) -> WalletFuture<'_, Result<U256, WalletError>> {
        Box::pin(async move {
            let mut state = self.state.borrow_mut();
            state.require_present()?;
            state.take_failure(MemoryChainOp::Count)?;
            Ok(U256::from(state.tokens.len() as u64))
        })
    }

    fn is_content_owned<'a>(&'a self, uri: &'a str) -> WalletFuture<'a, Result<bool, WalletError>> {
        Box::pin(async move {
            let mut state = self.state.borrow_mut();
            state.require_present()?;
            state.take_failure(MemoryChainOp::IsContentOwned)?;
            Ok(state.claimed.contains(uri))
        })
    }

    fn token_uri(&self, token_id: U256) -> WalletFuture<'_, Result<String, WalletError>> {
        Box::pin(async move {
            let mut state = self.state.borrow_mut();
            state.require_present()?;
            state.take_failure(MemoryChainOp::TokenUri)?;
            let index = usize::try_from(token_id.as_limbs()[0]).ok();
            let in_range = token_id < U256::from(state.tokens.len() as u64);
            match index.filter(|_| in_range).and_then(|index| state.tokens.get(index)) {
                Some((uri, _)) => Ok(uri.clone()),
                None => Err(WalletError::ContractCallReverted(
                    "ERC721Metadata: URI query for nonexistent token".to_string(),
                )),
            }
        })
    }

    fn pay_to_mint<'a>(
        &'a self,
        recipient: Address,
        uri: &'a str,
        value: U256,
    ) -> WalletFuture<'a, Result<TxHash, WalletError>> {
        Box::pin(async move { self.state.borrow_mut().submit(recipient, uri, value) })
    }

    fn wait_for_confirmation(&self, tx: TxHash) -> WalletFuture<'_, Result<(), WalletError>> {
        Box::pin(async move { self.state.borrow_mut().execute(tx) })
    }
}
