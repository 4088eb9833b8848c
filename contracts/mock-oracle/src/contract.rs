#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use terra_types::oracle::{ExchangeRateResponse, QueryMsg, TobinTaxResponse};

use crate::{
    msg::{CoinRate, ExecuteMsg, InstantiateMsg},
    state::{EXCHANGE_RATES, TOBIN_TAXES},
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    for item in msg.exchange_rates {
        EXCHANGE_RATES.save(deps.storage, &item.denom, &item.rate)?
    }
    for item in msg.tobin_taxes {
        TOBIN_TAXES.save(deps.storage, &item.denom, &item.rate)?
    }
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::SetExchangeRate(item) => set_exchange_rate(deps, item),
        ExecuteMsg::RemoveExchangeRate {
            denom,
        } => {
            EXCHANGE_RATES.remove(deps.storage, &denom);
            Ok(Response::new())
        }
        ExecuteMsg::SetTobinTax(item) => {
            TOBIN_TAXES.save(deps.storage, &item.denom, &item.rate)?;
            Ok(Response::new())
        }
    }
}

fn set_exchange_rate(deps: DepsMut, item: CoinRate) -> StdResult<Response> {
    EXCHANGE_RATES.save(deps.storage, &item.denom, &item.rate)?;
    Ok(Response::new())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::ExchangeRate {
            denom,
        } => to_json_binary(&ExchangeRateResponse {
            exchange_rate: EXCHANGE_RATES.may_load(deps.storage, &denom)?,
            denom,
        }),
        QueryMsg::TobinTax {
            denom,
        } => to_json_binary(&TobinTaxResponse {
            tobin_tax: TOBIN_TAXES.may_load(deps.storage, &denom)?,
            denom,
        }),
    }
}
