#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, SignedDecimal256,
};
use cw2::set_contract_version;
use mars_owner::OwnerInit::SetInitialOwner;
use terra_types::market::{Config, ExecuteMsg, InstantiateMsg, QueryMsg, SudoMsg};

use crate::{
    error::ContractResult,
    execute::{sudo_replenish_pools, swap, update_config, update_params},
    query::{query_config, query_simulate_swap, query_terra_pool_delta},
    state::{CONFIG, OWNER, PARAMS, TERRA_POOL_DELTA},
};

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _: Env,
    _: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    set_contract_version(deps.storage, format!("crates.io:{CONTRACT_NAME}"), CONTRACT_VERSION)?;

    OWNER.initialize(
        deps.storage,
        deps.api,
        SetInitialOwner {
            owner: msg.owner,
        },
    )?;

    let config = Config {
        oracle: deps.api.addr_validate(&msg.oracle)?,
        fee_collector: deps.api.addr_validate(&msg.fee_collector)?,
    };
    CONFIG.save(deps.storage, &config)?;

    msg.params.validate()?;
    PARAMS.save(deps.storage, &msg.params)?;

    TERRA_POOL_DELTA.save(deps.storage, &SignedDecimal256::zero())?;

    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::UpdateOwner(update) => Ok(OWNER.update(deps, info, update)?),
        ExecuteMsg::UpdateConfig {
            oracle,
            fee_collector,
        } => update_config(deps, info, oracle, fee_collector),
        ExecuteMsg::UpdateParams(update) => update_params(deps, info, update),
        ExecuteMsg::Swap {
            ask_denom,
            recipient,
        } => swap(deps, info, ask_denom, recipient),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn sudo(deps: DepsMut, _: Env, msg: SudoMsg) -> ContractResult<Response> {
    match msg {
        SudoMsg::ReplenishPools {} => sudo_replenish_pools(deps),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _: Env, msg: QueryMsg) -> ContractResult<Binary> {
    let res = match msg {
        QueryMsg::Owner {} => to_json_binary(&OWNER.query(deps.storage)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Params {} => to_json_binary(&PARAMS.load(deps.storage)?),
        QueryMsg::Swap {
            offer_coin,
            ask_denom,
        } => to_json_binary(&query_simulate_swap(deps, offer_coin, ask_denom)?),
        QueryMsg::TerraPoolDelta {} => to_json_binary(&query_terra_pool_delta(deps)?),
    };
    res.map_err(Into::into)
}
