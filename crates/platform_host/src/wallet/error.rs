//! Failure taxonomy for wallet and contract calls.

use thiserror::Error;

use super::provider::TxHash;

/// EIP-1193: the user rejected the request.
const RPC_USER_REJECTED: i64 = 4001;
/// EIP-1193: the requested method/account has not been authorized.
const RPC_UNAUTHORIZED: i64 = 4100;
/// EIP-1193: the provider is disconnected from all chains.
const RPC_DISCONNECTED: i64 = 4900;
/// EIP-1193: the provider is not connected to the requested chain.
const RPC_CHAIN_DISCONNECTED: i64 = 4901;
/// Geth-style `execution reverted` error code.
const RPC_EXECUTION_REVERTED: i64 = 3;
/// Generic JSON-RPC server error, used by several nodes for reverts.
const RPC_SERVER_ERROR: i64 = -32000;
/// Hardhat / Ganache VM exception.
const RPC_VM_EXCEPTION: i64 = -32015;

/// Errors surfaced by [`crate::WalletProvider`] and [`crate::MintContract`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No injected wallet provider exists in the environment.
    #[error("no wallet provider is available")]
    WalletUnavailable,
    /// The user declined the request in the wallet UI.
    #[error("request rejected in the wallet: {0}")]
    UserRejectedRequest(String),
    /// The wallet granted access but exposed no account.
    #[error("the wallet did not expose any account")]
    NoAccounts,
    /// The provider could not reach the network.
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),
    /// The contract call or transaction reverted.
    #[error("contract call reverted: {0}")]
    ContractCallReverted(String),
    /// A submitted transaction was not confirmed within the configured window.
    #[error("transaction {0} was not confirmed in time")]
    TransactionTimedOut(TxHash),
    /// The provider returned a payload that could not be decoded.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

impl WalletError {
    /// Maps an EIP-1193 / JSON-RPC error object onto the taxonomy.
    pub fn from_rpc_error(code: i64, message: &str) -> Self {
        let message = message.trim().to_string();
        match code {
            RPC_USER_REJECTED | RPC_UNAUTHORIZED => Self::UserRejectedRequest(message),
            RPC_DISCONNECTED | RPC_CHAIN_DISCONNECTED => Self::NetworkUnavailable(message),
            RPC_EXECUTION_REVERTED | RPC_VM_EXCEPTION => Self::ContractCallReverted(message),
            RPC_SERVER_ERROR if message.to_ascii_lowercase().contains("revert") => {
                Self::ContractCallReverted(message)
            }
            _ => Self::NetworkUnavailable(message),
        }
    }

    /// Short, user-facing sentence for status messages.
    pub fn user_message(&self) -> String {
        match self {
            Self::WalletUnavailable => "MetaMask is not available in this browser.".to_string(),
            Self::UserRejectedRequest(_) => "The request was rejected in your wallet.".to_string(),
            Self::NoAccounts => "Your wallet did not share an account with this site.".to_string(),
            Self::NetworkUnavailable(_) => {
                "The network could not be reached. Check your wallet connection.".to_string()
            }
            Self::ContractCallReverted(reason) if !reason.is_empty() => {
                format!("The contract rejected the call: {reason}")
            }
            Self::ContractCallReverted(_) => "The contract rejected the call.".to_string(),
            Self::TransactionTimedOut(_) => {
                "The transaction is taking too long to confirm.".to_string()
            }
            Self::InvalidResponse(_) => "Your wallet returned an unexpected response.".to_string(),
        }
    }
}
