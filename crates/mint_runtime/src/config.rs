//! Build-time mint configuration.
//!
//! `mint.config.toml` is validated by `build.rs` and embedded as JSON; [`MintConfig::bundled`]
//! turns that payload into typed values at startup.

use std::{str::FromStr, time::Duration};

use alloy_primitives::{address, Address, U256};
use platform_host::{parse_ether, ChainSettings, UnitsError};
use serde::Deserialize;
use thiserror::Error;

use crate::model::SlotId;

include!(concat!(env!("OUT_DIR"), "/mint_config_generated.rs"));

/// Default local deployment address of the minting contract.
pub const DEFAULT_CONTRACT_ADDRESS: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
/// Pinned metadata root for the sheep collection.
pub const DEFAULT_CONTENT_ROOT: &str = "QmWCgENJo8oZc1PcNKeg5qjrbe5QzsFhP5DfhnCemS3JGu";
/// 0.05 ETH in wei.
pub const DEFAULT_MINT_PRICE_WEI: u64 = 50_000_000_000_000_000;

#[derive(Debug, Error)]
/// Failure turning the embedded configuration payload into a [`MintConfig`].
pub enum ConfigError {
    /// Payload was not valid JSON for the expected shape.
    #[error("invalid mint config: {0}")]
    Json(#[from] serde_json::Error),
    /// Contract address was not a 20-byte hex string.
    #[error("invalid contract address `{0}`")]
    ContractAddress(String),
    /// Mint price could not be parsed as an ether amount.
    #[error("invalid mint price: {0}")]
    MintPrice(#[from] UnitsError),
}

#[derive(Debug, Deserialize)]
struct MintConfigFile {
    contract_address: String,
    mint_price_ether: String,
    currency_symbol: String,
    content_root: String,
    image_root: String,
    install_url: String,
    loading_delay_ms: u64,
    status_clear_delay_ms: u64,
    confirmation_poll_interval_ms: u64,
    confirmation_timeout_ms: u64,
    #[serde(default)]
    balance_decimals: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Typed mint front-end configuration.
pub struct MintConfig {
    /// Deployed minting contract.
    pub contract_address: Address,
    /// Value sent with every `payToMint`, in wei.
    pub mint_price: U256,
    /// Display symbol appended to balances.
    pub currency_symbol: String,
    /// Root under which `JSON_NFT_DATA-{slot}.json` metadata files live.
    pub content_root: String,
    /// Root under which `IMG-{slot}.png` previews are served.
    pub image_root: String,
    /// Where the install prompt sends users without a wallet.
    pub install_url: String,
    /// Placeholder time before the first wallet probe.
    pub loading_delay: Duration,
    /// How long informational status messages stay visible.
    pub status_clear_delay: Duration,
    /// Delay between transaction receipt polls.
    pub confirmation_poll_interval: Duration,
    /// Give up waiting for a receipt after this long.
    pub confirmation_timeout: Duration,
    /// Fractional digits shown for balances; `None` keeps full precision.
    pub balance_decimals: Option<u8>,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS,
            mint_price: U256::from(DEFAULT_MINT_PRICE_WEI),
            currency_symbol: "ETH".to_string(),
            content_root: DEFAULT_CONTENT_ROOT.to_string(),
            image_root: "image".to_string(),
            install_url: "https://metamask.io".to_string(),
            loading_delay: Duration::from_millis(100),
            status_clear_delay: Duration::from_secs(5),
            confirmation_poll_interval: Duration::from_secs(1),
            confirmation_timeout: Duration::from_secs(120),
            balance_decimals: None,
        }
    }
}

impl MintConfig {
    /// Parses a configuration payload in the shape `build.rs` emits.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let file: MintConfigFile = serde_json::from_str(raw)?;
        let contract_address = Address::from_str(file.contract_address.trim())
            .map_err(|_| ConfigError::ContractAddress(file.contract_address.clone()))?;
        Ok(Self {
            contract_address,
            mint_price: parse_ether(&file.mint_price_ether)?,
            currency_symbol: file.currency_symbol,
            content_root: file.content_root.trim_end_matches('/').to_string(),
            image_root: file.image_root.trim_end_matches('/').to_string(),
            install_url: file.install_url,
            loading_delay: Duration::from_millis(file.loading_delay_ms),
            status_clear_delay: Duration::from_millis(file.status_clear_delay_ms),
            confirmation_poll_interval: Duration::from_millis(file.confirmation_poll_interval_ms),
            confirmation_timeout: Duration::from_millis(file.confirmation_timeout_ms),
            balance_decimals: file.balance_decimals,
        })
    }

    /// Returns the configuration embedded at build time.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(MINT_CONFIG_JSON)
    }

    /// Chain-side subset handed to wallet adapters.
    pub fn chain_settings(&self) -> ChainSettings {
        ChainSettings {
            contract_address: self.contract_address,
            confirmation_poll_interval: self.confirmation_poll_interval,
            confirmation_timeout: self.confirmation_timeout,
        }
    }

    /// Metadata URI claimed on-chain by `slot`.
    pub fn metadata_uri(&self, slot: SlotId) -> String {
        format!("{}/JSON_NFT_DATA-{}.json", self.content_root, slot.0)
    }

    /// Preview image URI for `slot`.
    pub fn image_uri(&self, slot: SlotId) -> String {
        format!("{}/IMG-{}.png", self.image_root, slot.0)
    }
}
