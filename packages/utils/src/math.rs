use std::str::FromStr;

use cosmwasm_std::{Decimal256, SignedDecimal256, StdError, StdResult, Uint128, Uint256};

/// Integral part of a decimal, truncated toward zero.
pub fn truncate_decimal(value: Decimal256) -> Uint256 {
    value.to_uint_floor()
}

/// Lossless conversion into a signed decimal. Both types carry 18 fractional digits, so the
/// canonical string form round-trips exactly.
pub fn decimal_to_signed(value: Decimal256) -> StdResult<SignedDecimal256> {
    SignedDecimal256::from_str(&value.to_string())
}

/// Inverse of [`decimal_to_signed`], failing for negative values.
pub fn signed_to_decimal(value: SignedDecimal256) -> StdResult<Decimal256> {
    if value.is_negative() {
        return Err(StdError::generic_err(format!(
            "cannot convert negative value {value} into an unsigned decimal"
        )));
    }
    Decimal256::from_str(&value.to_string())
}

/// Number of bits needed to represent the amount, zero for zero.
pub fn bit_length(amount: Uint128) -> u32 {
    u128::BITS - amount.u128().leading_zeros()
}
