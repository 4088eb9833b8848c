use cosmwasm_std::{Decimal, Decimal256, SignedDecimal256, StdResult, Uint128};

/// Exchange rates and tobin taxes published by the oracle
pub trait RateProvider {
    /// Units of `denom` per Luna, `None` if no price has been registered
    fn exchange_rate(&self, denom: &str) -> StdResult<Option<Decimal>>;

    /// Tobin tax of the denom, `None` if the denom has none configured
    fn tobin_tax(&self, denom: &str) -> StdResult<Option<Decimal>>;
}

/// Minted supply per denom and the ceiling it may not be pushed past
pub trait SupplyLedger {
    fn total_supply(&self, denom: &str) -> StdResult<Uint128>;

    fn max_supply(&self, denom: &str) -> StdResult<Option<Uint128>>;
}

pub trait ParameterStore {
    fn base_pool(&self) -> Decimal256;

    fn min_stability_spread(&self) -> Decimal;

    fn max_offer_bits(&self) -> u32;
}

/// Handle on the terra pool delta, the single piece of state the swap engine mutates
pub trait PoolDeltaStore {
    fn terra_pool_delta(&self) -> StdResult<SignedDecimal256>;

    fn set_terra_pool_delta(&mut self, delta: SignedDecimal256) -> StdResult<()>;
}
