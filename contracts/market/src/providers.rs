use cosmwasm_std::{Decimal, Decimal256, QuerierWrapper, StdResult, Uint128};
use terra_types::{adapters::oracle::Oracle, market::Params};

use crate::traits::{ParameterStore, RateProvider, SupplyLedger};

/// Rates served by the oracle contract
pub struct OracleRates<'a> {
    oracle: &'a Oracle,
    querier: QuerierWrapper<'a>,
}

impl<'a> OracleRates<'a> {
    pub fn new(oracle: &'a Oracle, querier: QuerierWrapper<'a>) -> Self {
        Self {
            oracle,
            querier,
        }
    }
}

impl<'a> RateProvider for OracleRates<'a> {
    fn exchange_rate(&self, denom: &str) -> StdResult<Option<Decimal>> {
        self.oracle.query_exchange_rate(&self.querier, denom)
    }

    fn tobin_tax(&self, denom: &str) -> StdResult<Option<Decimal>> {
        self.oracle.query_tobin_tax(&self.querier, denom)
    }
}

/// Total supply from the bank module, ceilings from the market params
pub struct BankSupply<'a> {
    querier: QuerierWrapper<'a>,
    params: &'a Params,
}

impl<'a> BankSupply<'a> {
    pub fn new(querier: QuerierWrapper<'a>, params: &'a Params) -> Self {
        Self {
            querier,
            params,
        }
    }
}

impl<'a> SupplyLedger for BankSupply<'a> {
    fn total_supply(&self, denom: &str) -> StdResult<Uint128> {
        Ok(self.querier.query_supply(denom)?.amount)
    }

    fn max_supply(&self, denom: &str) -> StdResult<Option<Uint128>> {
        Ok(self.params.max_supply_of(denom))
    }
}

impl ParameterStore for Params {
    fn base_pool(&self) -> Decimal256 {
        self.base_pool
    }

    fn min_stability_spread(&self) -> Decimal {
        self.min_stability_spread
    }

    fn max_offer_bits(&self) -> u32 {
        self.max_offer_bits
    }
}
