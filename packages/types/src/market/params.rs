use std::collections::HashSet;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, Decimal, Decimal256, Uint128};
use terra_utils::{
    error::ValidationError,
    helpers::{decimal_param_le_one, integer_param_gt_zero, validate_native_denom},
};

/// Blocks per day at a ~6 second block time.
pub const BLOCKS_PER_DAY: u64 = 14_400;

/// Largest offer amount accepted by default, in bits.
pub const DEFAULT_MAX_OFFER_BITS: u32 = 100;

/// Governance-controlled parameters of the market.
#[cw_serde]
pub struct Params {
    /// Size of each side of the virtual pool at zero delta, in base denom units
    pub base_pool: Decimal256,
    /// Number of blocks it takes for the pool delta to regress back to zero
    pub pool_recovery_period: u64,
    /// Floor of the spread charged on swaps involving the reserve asset
    pub min_stability_spread: Decimal,
    /// Maximum total supply per denomination. A denom missing here can never be minted
    pub max_supply: Vec<Coin>,
    /// Offers whose amount needs more bits than this are rejected
    pub max_offer_bits: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            base_pool: Decimal256::from_ratio(1_000_000_000_000u128, 1u8),
            pool_recovery_period: BLOCKS_PER_DAY,
            min_stability_spread: Decimal::percent(2),
            max_supply: vec![],
            max_offer_bits: DEFAULT_MAX_OFFER_BITS,
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_pool.is_zero() {
            return Err(ValidationError::InvalidParam {
                param_name: "base_pool".to_string(),
                invalid_value: self.base_pool.to_string(),
                predicate: "> 0".to_string(),
            });
        }

        integer_param_gt_zero(self.pool_recovery_period, "pool_recovery_period")?;
        decimal_param_le_one(self.min_stability_spread, "min_stability_spread")?;

        if self.max_offer_bits == 0 || self.max_offer_bits > u128::BITS {
            return Err(ValidationError::InvalidParam {
                param_name: "max_offer_bits".to_string(),
                invalid_value: self.max_offer_bits.to_string(),
                predicate: format!("[1, {}]", u128::BITS),
            });
        }

        let mut seen = HashSet::new();
        for coin in &self.max_supply {
            validate_native_denom(&coin.denom)?;
            if !seen.insert(coin.denom.as_str()) {
                return Err(ValidationError::InvalidParam {
                    param_name: "max_supply".to_string(),
                    invalid_value: coin.denom.clone(),
                    predicate: "unique denoms".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Configured supply ceiling for the denom, if any.
    pub fn max_supply_of(&self, denom: &str) -> Option<Uint128> {
        self.max_supply.iter().find(|coin| coin.denom == denom).map(|coin| coin.amount)
    }

    pub fn apply_update(&mut self, update: ParamsUpdate) {
        let ParamsUpdate {
            base_pool,
            pool_recovery_period,
            min_stability_spread,
            max_supply,
            max_offer_bits,
        } = update;

        if let Some(base_pool) = base_pool {
            self.base_pool = base_pool;
        }
        if let Some(pool_recovery_period) = pool_recovery_period {
            self.pool_recovery_period = pool_recovery_period;
        }
        if let Some(min_stability_spread) = min_stability_spread {
            self.min_stability_spread = min_stability_spread;
        }
        if let Some(max_supply) = max_supply {
            self.max_supply = max_supply;
        }
        if let Some(max_offer_bits) = max_offer_bits {
            self.max_offer_bits = max_offer_bits;
        }
    }
}

/// Partial update of [`Params`]; fields left as `None` keep their current value.
#[cw_serde]
#[derive(Default)]
pub struct ParamsUpdate {
    pub base_pool: Option<Decimal256>,
    pub pool_recovery_period: Option<u64>,
    pub min_stability_spread: Option<Decimal>,
    pub max_supply: Option<Vec<Coin>>,
    pub max_offer_bits: Option<u32>,
}
