use cosmwasm_std::Decimal;
use cw_storage_plus::Map;

pub const EXCHANGE_RATES: Map<&str, Decimal> = Map::new("exchange_rates");
pub const TOBIN_TAXES: Map<&str, Decimal> = Map::new("tobin_taxes");
