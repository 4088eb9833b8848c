use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Decimal;

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Exchange rate of the denom against the reserve asset, as units of `denom` per Luna
    #[returns(ExchangeRateResponse)]
    ExchangeRate {
        denom: String,
    },

    /// Tobin tax levied on stable-to-stable swaps involving the denom
    #[returns(TobinTaxResponse)]
    TobinTax {
        denom: String,
    },
}

#[cw_serde]
pub struct ExchangeRateResponse {
    pub denom: String,
    /// `None` if no price has been registered for the denom
    pub exchange_rate: Option<Decimal>,
}

#[cw_serde]
pub struct TobinTaxResponse {
    pub denom: String,
    /// `None` if the denom is not whitelisted for tobin tax
    pub tobin_tax: Option<Decimal>,
}
