use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MintConfigFile {
    schema_version: u32,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    balance_decimals: Option<u8>,
}

fn validate(config: &MintConfigFile, path: &str) {
    if config.schema_version != 1 {
        panic!(
            "config schema mismatch in {path}: expected 1 found {}",
            config.schema_version
        );
    }
    let address = config.contract_address.trim();
    let hex_ok = address
        .strip_prefix("0x")
        .map(|digits| digits.len() == 40 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
        .unwrap_or(false);
    if !hex_ok {
        panic!("contract_address in {path} must be 0x followed by 40 hex digits");
    }
    if config.mint_price_ether.trim().is_empty() {
        panic!("mint_price_ether in {path} must not be empty");
    }
    if config.content_root.trim().is_empty() || config.image_root.trim().is_empty() {
        panic!("content_root and image_root in {path} must not be empty");
    }
    if config.confirmation_poll_interval_ms == 0 {
        panic!("confirmation_poll_interval_ms in {path} must be positive");
    }
    if config.confirmation_timeout_ms < config.confirmation_poll_interval_ms {
        panic!("confirmation_timeout_ms in {path} must be at least one poll interval");
    }
    if config.balance_decimals.is_some_and(|decimals| decimals > 18) {
        panic!("balance_decimals in {path} must be at most 18");
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("mint.config.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: MintConfigFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&config, &path.display().to_string());

    let json = serde_json::to_string_pretty(&config).expect("serialize mint config");
    let generated = format!(
        "/// Build-time generated mint configuration JSON.\n\
pub const MINT_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("mint_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
