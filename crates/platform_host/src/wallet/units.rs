//! Ether display policy over `alloy_primitives::utils`, and JSON-RPC quantity encoding.

use alloy_primitives::{utils, U256};
use thiserror::Error;

/// Errors produced while parsing amounts.
#[derive(Debug, Error)]
pub enum UnitsError {
    /// The input had no digits.
    #[error("amount is empty")]
    Empty,
    /// The decimal amount was rejected by the unit parser.
    #[error("invalid ether amount: {0}")]
    Ether(#[from] utils::UnitsError),
    /// The input was not a `0x`-prefixed hex quantity.
    #[error("invalid hex quantity `{0}`")]
    InvalidQuantity(String),
}

/// Formats a wei amount as a decimal ether string.
///
/// Trailing fractional zeros are trimmed but at least one fractional digit is kept, so one ether
/// renders as `"1.0"`. `decimals` truncates (never rounds) the fractional part.
pub fn format_ether(wei: U256, decimals: Option<u8>) -> String {
    let full = utils::format_ether(wei);
    let (whole, fraction) = full.split_once('.').unwrap_or((full.as_str(), ""));
    let fraction = match decimals {
        Some(decimals) => &fraction[..fraction.len().min(usize::from(decimals))],
        None => fraction,
    };
    let trimmed = fraction.trim_end_matches('0');
    let fraction = if trimmed.is_empty() { "0" } else { trimmed };
    format!("{whole}.{fraction}")
}

/// Parses a decimal ether string (`"0.05"`, `"2"`, `".5"`) into wei.
///
/// Digits beyond the 18th decimal place are dropped.
///
/// # Errors
///
/// Returns an error for blank input or anything the unit parser rejects.
pub fn parse_ether(input: &str) -> Result<U256, UnitsError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UnitsError::Empty);
    }
    Ok(utils::parse_ether(input)?)
}

/// Parses a JSON-RPC hex quantity such as `"0x1bc16d674ec80000"`.
///
/// # Errors
///
/// Returns an error when the prefix is missing or the digits are not valid hex.
pub fn parse_quantity(raw: &str) -> Result<U256, UnitsError> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .ok_or_else(|| UnitsError::InvalidQuantity(raw.to_string()))?;
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 16).map_err(|_| UnitsError::InvalidQuantity(raw.to_string()))
}

/// Encodes a value as a minimal JSON-RPC hex quantity.
pub fn to_quantity(value: U256) -> String {
    format!("0x{value:x}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ether(whole: u64) -> U256 {
        U256::from(whole) * U256::from(10u64).pow(U256::from(18u64))
    }

    #[test]
    fn mint_price_parses_and_formats() {
        let wei = parse_ether("0.05").expect("parse");
        assert_eq!(wei, U256::from(50_000_000_000_000_000u64));
        assert_eq!(format_ether(wei, None), "0.05");
    }

    #[test]
    fn whole_and_zero_amounts_keep_one_fractional_digit() {
        assert_eq!(format_ether(ether(1), None), "1.0");
        assert_eq!(format_ether(U256::ZERO, None), "0.0");
        assert_eq!(parse_ether("2").expect("parse"), ether(2));
        assert_eq!(parse_ether(" 0.0 ").expect("parse"), U256::ZERO);
    }

    #[test]
    fn precision_truncates_fraction() {
        // 9999.987654321 ETH, a typical funded local-chain account after a few mints.
        let wei = parse_ether("9999.987654321").expect("parse");
        assert_eq!(format_ether(wei, None), "9999.987654321");
        assert_eq!(format_ether(wei, Some(4)), "9999.9876");
        assert_eq!(format_ether(wei, Some(0)), "9999.0");
    }

    #[test]
    fn smallest_unit_survives_formatting() {
        assert_eq!(format_ether(U256::from(1u64), None), "0.000000000000000001");
        assert_eq!(parse_ether("0.000000000000000001").expect("parse"), U256::from(1u64));
    }

    #[test]
    fn malformed_amounts_are_rejected() {
        assert!(matches!(parse_ether(" "), Err(UnitsError::Empty)));
        assert!(matches!(parse_ether("0.05eth"), Err(UnitsError::Ether(_))));
        assert!(matches!(parse_ether("1.2.3"), Err(UnitsError::Ether(_))));
    }

    #[test]
    fn quantities_use_minimal_hex() {
        assert_eq!(to_quantity(U256::ZERO), "0x0");
        assert_eq!(
            to_quantity(U256::from(50_000_000_000_000_000u64)),
            "0xb1a2bc2ec50000"
        );
        assert_eq!(
            parse_quantity("0x21e19e0c9bab2400000").expect("parse"),
            ether(10_000)
        );
        assert!(parse_quantity("1234").is_err());
        assert!(parse_quantity("0xzz").is_err());
    }
}
