//! Solidity bindings for the minting contract plus hex helpers for JSON-RPC call data.

use alloy_sol_types::{sol, SolCall};
use thiserror::Error;

sol! {
    /// Number of tokens minted so far.
    function count() external view returns (uint256);
    /// Whether a metadata URI has been claimed.
    function isContentOwned(string uri) external view returns (bool);
    /// Metadata URI of a minted token.
    function tokenURI(uint256 tokenId) external view returns (string);
    /// Payable mint of `metadataURI` to `recipient`.
    function payToMint(address recipient, string metadataURI) external payable returns (uint256);
}

/// Errors produced while decoding contract return data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// Return data did not match the call's declared return types.
    #[error("invalid return data for {call}: {reason}")]
    Decode {
        /// Solidity signature of the call.
        call: &'static str,
        /// Decoder message.
        reason: String,
    },
    /// Hex text could not be decoded.
    #[error("invalid hex data: {0}")]
    InvalidHex(String),
}

/// Decodes `C`'s return values, validating padding and dynamic offsets.
///
/// # Errors
///
/// Returns an error when `data` does not hold an encoding of `C::Return`.
pub fn decode_returns<C: SolCall>(data: &[u8]) -> Result<C::Return, AbiError> {
    C::abi_decode_returns(data, true).map_err(|err| AbiError::Decode {
        call: C::SIGNATURE,
        reason: err.to_string(),
    })
}

/// Decodes `0x`-prefixed hex call data.
///
/// # Errors
///
/// Returns an error for malformed hex.
pub fn decode_hex(raw: &str) -> Result<Vec<u8>, AbiError> {
    alloy_primitives::hex::decode(raw).map_err(|err| AbiError::InvalidHex(err.to_string()))
}

/// Encodes bytes as `0x`-prefixed hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    alloy_primitives::hex::encode_prefixed(bytes)
}
