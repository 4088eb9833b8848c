use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, Decimal256, StdResult, Uint128};
use terra_utils::math::truncate_decimal;

/// A coin whose amount may carry a fractional part, used for intermediate pricing.
#[cw_serde]
pub struct DecCoin {
    pub denom: String,
    pub amount: Decimal256,
}

impl DecCoin {
    pub fn new(denom: impl Into<String>, amount: Decimal256) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn zero(denom: impl Into<String>) -> Self {
        Self::new(denom, Decimal256::zero())
    }

    /// Splits into the integral coin (truncated toward zero) and the fractional remainder.
    pub fn truncate(&self) -> StdResult<(Coin, DecCoin)> {
        let integral = truncate_decimal(self.amount);
        let remainder = self.amount - Decimal256::from_ratio(integral, 1u8);
        let coin = Coin {
            denom: self.denom.clone(),
            amount: Uint128::try_from(integral)?,
        };
        Ok((coin, DecCoin::new(self.denom.clone(), remainder)))
    }
}

impl From<&Coin> for DecCoin {
    fn from(coin: &Coin) -> Self {
        Self::new(coin.denom.clone(), Decimal256::from_ratio(coin.amount, 1u8))
    }
}

impl From<Coin> for DecCoin {
    fn from(coin: Coin) -> Self {
        Self::from(&coin)
    }
}

impl fmt::Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
