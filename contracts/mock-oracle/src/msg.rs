use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;

#[cw_serde]
pub struct CoinRate {
    pub denom: String,
    pub rate: Decimal,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub exchange_rates: Vec<CoinRate>,
    pub tobin_taxes: Vec<CoinRate>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // Meant to simulate price changes for tests. Not available in prod.
    SetExchangeRate(CoinRate),
    RemoveExchangeRate {
        denom: String,
    },
    SetTobinTax(CoinRate),
}
