//! Human-readable amount parsing
//!
//! Converts strings like "100 klay" or "1 ston" into peb, the chain's
//! smallest integer unit. 1 klay = 10^18 peb, 1 ston = 10^9 peb.

use crate::error::{FlooderError, FlooderResult};

use ethers::types::U256;

fn unit_decimals(unit: &str) -> Option<usize> {
    match unit.to_ascii_lowercase().as_str() {
        "peb" => Some(0),
        "ston" => Some(9),
        "klay" => Some(18),
        _ => None,
    }
}

/// Parse "<decimal> <unit>" into peb
pub fn parse_amount(input: &str) -> FlooderResult<U256> {
    let invalid = |message: &str| FlooderError::InvalidAmount {
        input: input.to_string(),
        message: message.to_string(),
    };

    let mut parts = input.split_whitespace();
    let number = parts.next().ok_or_else(|| invalid("empty amount"))?;
    let unit = parts.next().ok_or_else(|| invalid("missing unit"))?;
    if parts.next().is_some() {
        return Err(invalid("trailing input after unit"));
    }

    let decimals = unit_decimals(unit).ok_or_else(|| invalid("unknown unit"))?;

    let (whole, frac) = match number.split_once('.') {
        Some((w, f)) => (w, f),
        None => (number, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("no digits"));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("not a decimal number"));
    }

    // Fractions finer than one peb cannot be represented
    if frac.trim_end_matches('0').len() > decimals {
        return Err(invalid("fraction below one peb"));
    }

    let scale = U256::exp10(decimals);
    let whole = U256::from_dec_str(if whole.is_empty() { "0" } else { whole })
        .map_err(|_| invalid("number too large"))?;
    let whole = whole
        .checked_mul(scale)
        .ok_or_else(|| invalid("amount overflows 256 bits"))?;

    let frac = &frac[..frac.len().min(decimals)];
    let frac_value = if frac.is_empty() {
        U256::zero()
    } else {
        let digits = U256::from_dec_str(frac).map_err(|_| invalid("number too large"))?;
        digits * U256::exp10(decimals - frac.len())
    };

    whole
        .checked_add(frac_value)
        .ok_or_else(|| invalid("amount overflows 256 bits"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amounts() {
        assert_eq!(parse_amount("1 peb").unwrap(), U256::from(1u64));
        assert_eq!(parse_amount("1 ston").unwrap(), U256::exp10(9));
        assert_eq!(parse_amount("100 klay").unwrap(), U256::exp10(20));
    }

    #[test]
    fn test_fractional_amounts() {
        assert_eq!(
            parse_amount("0.5 klay").unwrap(),
            U256::exp10(17) * U256::from(5u64)
        );
        assert_eq!(
            parse_amount("1.5 ston").unwrap(),
            U256::from(1_500_000_000u64)
        );
        // trailing zeros in the fraction are harmless
        assert_eq!(parse_amount("2.000 peb").unwrap(), U256::from(2u64));
    }

    #[test]
    fn test_units_are_case_insensitive() {
        assert_eq!(parse_amount("1 KLAY").unwrap(), U256::exp10(18));
        assert_eq!(parse_amount("1 Ston").unwrap(), U256::exp10(9));
    }

    #[test]
    fn test_rejects_sub_peb_fractions() {
        assert!(parse_amount("0.5 peb").is_err());
        assert!(parse_amount("0.0000000001 ston").is_err());
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("100").is_err());
        assert!(parse_amount("abc klay").is_err());
        assert!(parse_amount("1 wei").is_err());
        assert!(parse_amount("1 klay extra").is_err());
        assert!(parse_amount("-1 klay").is_err());
        assert!(parse_amount(". klay").is_err());
    }
}
