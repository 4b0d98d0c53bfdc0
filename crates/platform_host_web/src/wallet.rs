//! Injected-wallet adapter speaking EIP-1193 JSON-RPC to `window.ethereum`.
//!
//! Contract reads go through `eth_call`, the mint through `eth_sendTransaction`, and
//! confirmation through `eth_getTransactionReceipt` polling on the injected [`Scheduler`].

use std::{rc::Rc, str::FromStr, time::Duration};

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use platform_host::{
    parse_quantity, to_quantity,
    wallet::abi::{self, countCall, isContentOwnedCall, payToMintCall, tokenURICall},
    AbiError, ChainSettings, MintContract, Scheduler, TxHash, WalletError, WalletFuture,
    WalletProvider,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::bridge;

#[derive(Debug, Deserialize)]
struct TransactionReceipt {
    #[serde(default)]
    status: Option<String>,
}

#[derive(Clone)]
/// Wallet and contract adapter backed by the page's injected provider.
pub struct InjectedWallet {
    settings: ChainSettings,
    scheduler: Rc<dyn Scheduler>,
}

impl InjectedWallet {
    /// Creates an adapter targeting the configured contract, polling receipts on `scheduler`.
    pub fn new(settings: ChainSettings, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            settings,
            scheduler,
        }
    }

    async fn eth_call<C: SolCall>(&self, call: C) -> Result<C::Return, WalletError> {
        let request = json!([
            {
                "to": hex_address(self.settings.contract_address),
                "data": abi::encode_hex(&call.abi_encode()),
            },
            "latest"
        ]);
        let result = bridge::ethereum_request("eth_call", request).await?;
        let raw = expect_str(&result, "eth_call")?;
        let data = abi::decode_hex(raw).map_err(abi_error)?;
        abi::decode_returns::<C>(&data).map_err(abi_error)
    }

    async fn poll_receipt(&self, tx: TxHash) -> Result<(), WalletError> {
        let poll = self.settings.confirmation_poll_interval;
        let mut waited = Duration::ZERO;
        loop {
            let receipt = bridge::ethereum_request(
                "eth_getTransactionReceipt",
                json!([abi::encode_hex(tx.as_slice())]),
            )
            .await?;
            if !receipt.is_null() {
                return receipt_outcome(receipt);
            }
            if waited >= self.settings.confirmation_timeout {
                return Err(WalletError::TransactionTimedOut(tx));
            }
            self.scheduler.sleep(poll).await;
            waited += poll;
        }
    }
}

impl WalletProvider for InjectedWallet {
    fn is_present(&self) -> bool {
        bridge::ethereum_present()
    }

    fn request_accounts(&self) -> WalletFuture<'_, Result<Vec<Address>, WalletError>> {
        Box::pin(async move {
            let result = bridge::ethereum_request("eth_requestAccounts", json!([])).await?;
            parse_accounts(&result)
        })
    }

    fn get_balance(&self, account: Address) -> WalletFuture<'_, Result<U256, WalletError>> {
        Box::pin(async move {
            let result =
                bridge::ethereum_request("eth_getBalance", json!([hex_address(account), "latest"]))
                    .await?;
            quantity(&result, "eth_getBalance")
        })
    }
}

impl MintContract for InjectedWallet {
    fn count(&self) -> WalletFuture<'_, Result<U256, WalletError>> {
        Box::pin(async move {
            Ok(self.eth_call(countCall {}).await?._0)
        })
    }

    fn is_content_owned<'a>(&'a self, uri: &'a str) -> WalletFuture<'a, Result<bool, WalletError>> {
        Box::pin(async move {
            let call = isContentOwnedCall {
                uri: uri.to_string(),
            };
            Ok(self.eth_call(call).await?._0)
        })
    }

    fn token_uri(&self, token_id: U256) -> WalletFuture<'_, Result<String, WalletError>> {
        Box::pin(async move {
            let call = tokenURICall { tokenId: token_id };
            Ok(self.eth_call(call).await?._0)
        })
    }

    /// Sends the mint from `recipient`, which must be the wallet's active account.
    fn pay_to_mint<'a>(
        &'a self,
        recipient: Address,
        uri: &'a str,
        value: U256,
    ) -> WalletFuture<'a, Result<TxHash, WalletError>> {
        Box::pin(async move {
            let call = payToMintCall {
                recipient,
                metadataURI: uri.to_string(),
            };
            let transaction = json!([{
                "from": hex_address(recipient),
                "to": hex_address(self.settings.contract_address),
                "value": to_quantity(value),
                "data": abi::encode_hex(&call.abi_encode()),
            }]);
            let result = bridge::ethereum_request("eth_sendTransaction", transaction).await?;
            let raw = expect_str(&result, "eth_sendTransaction")?;
            TxHash::from_str(raw)
                .map_err(|e| WalletError::InvalidResponse(format!("transaction hash: {e}")))
        })
    }

    fn wait_for_confirmation(&self, tx: TxHash) -> WalletFuture<'_, Result<(), WalletError>> {
        Box::pin(self.poll_receipt(tx))
    }
}

fn hex_address(address: Address) -> String {
    abi::encode_hex(address.as_slice())
}

fn abi_error(err: AbiError) -> WalletError {
    WalletError::InvalidResponse(err.to_string())
}

fn expect_str<'a>(value: &'a Value, method: &str) -> Result<&'a str, WalletError> {
    value
        .as_str()
        .ok_or_else(|| WalletError::InvalidResponse(format!("{method} returned {value}")))
}

fn quantity(value: &Value, method: &str) -> Result<U256, WalletError> {
    parse_quantity(expect_str(value, method)?)
        .map_err(|e| WalletError::InvalidResponse(format!("{method}: {e}")))
}

fn parse_accounts(value: &Value) -> Result<Vec<Address>, WalletError> {
    let entries = value.as_array().ok_or_else(|| {
        WalletError::InvalidResponse(format!("eth_requestAccounts returned {value}"))
    })?;
    entries
        .iter()
        .map(|entry| {
            let raw = expect_str(entry, "eth_requestAccounts")?;
            Address::from_str(raw)
                .map_err(|e| WalletError::InvalidResponse(format!("account `{raw}`: {e}")))
        })
        .collect()
}

fn receipt_outcome(receipt: Value) -> Result<(), WalletError> {
    let receipt: TransactionReceipt = serde_json::from_value(receipt)
        .map_err(|e| WalletError::InvalidResponse(format!("receipt: {e}")))?;
    match receipt.status.as_deref().map(parse_quantity) {
        Some(Ok(status)) if status.is_zero() => Err(WalletError::ContractCallReverted(
            "transaction reverted".to_string(),
        )),
        Some(Err(e)) => Err(WalletError::InvalidResponse(format!("receipt status: {e}"))),
        _ => Ok(()),
    }
}
