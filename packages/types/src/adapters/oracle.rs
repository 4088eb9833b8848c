use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal, QuerierWrapper, StdResult};

use crate::{
    oracle::{ExchangeRateResponse, QueryMsg, TobinTaxResponse},
    MICRO_LUNA_DENOM,
};

#[cw_serde]
pub struct OracleBase<T>(T);

impl<T> OracleBase<T> {
    pub fn new(address: T) -> OracleBase<T> {
        OracleBase(address)
    }

    pub fn address(&self) -> &T {
        &self.0
    }
}

pub type Oracle = OracleBase<Addr>;

impl Oracle {
    /// Units of `denom` per Luna. The reserve asset is always priced at one and never queried.
    pub fn query_exchange_rate(
        &self,
        querier: &QuerierWrapper,
        denom: &str,
    ) -> StdResult<Option<Decimal>> {
        if denom == MICRO_LUNA_DENOM {
            return Ok(Some(Decimal::one()));
        }

        let res: ExchangeRateResponse = querier.query_wasm_smart(
            self.address().to_string(),
            &QueryMsg::ExchangeRate {
                denom: denom.to_string(),
            },
        )?;
        Ok(res.exchange_rate)
    }

    pub fn query_tobin_tax(
        &self,
        querier: &QuerierWrapper,
        denom: &str,
    ) -> StdResult<Option<Decimal>> {
        let res: TobinTaxResponse = querier.query_wasm_smart(
            self.address().to_string(),
            &QueryMsg::TobinTax {
                denom: denom.to_string(),
            },
        )?;
        Ok(res.tobin_tax)
    }
}
