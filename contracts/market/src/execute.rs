use cosmwasm_std::{DepsMut, MessageInfo, Response};
use cw_utils::one_coin;
use terra_types::{adapters::oracle::Oracle, coin::DecCoin, market::ParamsUpdate};
use terra_utils::helpers::{build_send_coin_msg, option_string_to_addr, validate_native_denom};

use crate::{
    error::{ContractError, ContractResult},
    events::{build_replenish_pools_event, build_swap_event},
    pool::{replenish_pools, StoragePoolDelta},
    providers::{BankSupply, OracleRates},
    simulate::deduct_spread_fee,
    state::{CONFIG, OWNER, PARAMS, TERRA_POOL_DELTA},
    swap::SwapEngine,
};

pub fn update_config(
    deps: DepsMut,
    info: MessageInfo,
    oracle: Option<String>,
    fee_collector: Option<String>,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    if let Some(oracle) = oracle {
        config.oracle = deps.api.addr_validate(&oracle)?;
    }
    if let Some(fee_collector) = fee_collector {
        config.fee_collector = deps.api.addr_validate(&fee_collector)?;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("oracle", config.oracle)
        .add_attribute("fee_collector", config.fee_collector))
}

pub fn update_params(
    deps: DepsMut,
    info: MessageInfo,
    update: ParamsUpdate,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let mut params = PARAMS.load(deps.storage)?;
    params.apply_update(update);
    params.validate()?;
    PARAMS.save(deps.storage, &params)?;

    Ok(Response::new()
        .add_attribute("action", "update_params")
        .add_attribute("base_pool", params.base_pool.to_string())
        .add_attribute("pool_recovery_period", params.pool_recovery_period.to_string())
        .add_attribute("min_stability_spread", params.min_stability_spread.to_string())
        .add_attribute("max_offer_bits", params.max_offer_bits.to_string()))
}

/// Swaps the coin sent along into `ask_denom`. The offered coin stays with the contract, the
/// swap coin goes to the recipient and the spread fee to the fee collector.
pub fn swap(
    deps: DepsMut,
    info: MessageInfo,
    ask_denom: String,
    recipient: Option<String>,
) -> ContractResult<Response> {
    let offer_coin = one_coin(&info)?;
    validate_native_denom(&ask_denom)?;
    let recipient = option_string_to_addr(deps.api, recipient, info.sender.clone())?;

    let config = CONFIG.load(deps.storage)?;
    let params = PARAMS.load(deps.storage)?;
    let oracle = Oracle::new(config.oracle);
    let rates = OracleRates::new(&oracle, deps.querier);
    let supply = BankSupply::new(deps.querier, &params);
    let engine = SwapEngine::new(&rates, &supply, &params);
    engine.assert_offer_magnitude(&offer_coin)?;

    let mut pool = StoragePoolDelta::new(deps.storage);
    let (swap_dec_coin, spread) = engine.compute_swap(&pool, &offer_coin, &ask_denom)?;

    let (net_dec_coin, fee_dec_coin) = deduct_spread_fee(swap_dec_coin, spread)?;
    let (swap_coin, remainder) = net_dec_coin.truncate()?;
    if swap_coin.amount.is_zero() {
        return Err(ContractError::ZeroSwapCoin {
            denom: ask_denom,
        });
    }
    // the truncated dust is collected along with the fee
    let fee_dec_coin =
        DecCoin::new(fee_dec_coin.denom, fee_dec_coin.amount.checked_add(remainder.amount)?);
    let (fee_coin, _) = fee_dec_coin.truncate()?;

    // only the net coin leaves the pool, the fee stays with the market
    let terra_pool_delta = engine.apply_swap_to_pool(&mut pool, &offer_coin, &net_dec_coin)?;

    let mut response = Response::new()
        .add_event(build_swap_event(
            &info.sender,
            &recipient,
            &offer_coin,
            &swap_coin,
            &fee_coin,
            spread,
            terra_pool_delta,
        ))
        .add_message(build_send_coin_msg(&recipient, swap_coin.clone()));

    if !fee_coin.amount.is_zero() {
        response = response.add_message(build_send_coin_msg(&config.fee_collector, fee_coin));
    }

    Ok(response
        .add_attribute("action", "swap")
        .add_attribute("offer", offer_coin.to_string())
        .add_attribute("swap_coin", swap_coin.to_string()))
}

pub fn sudo_replenish_pools(deps: DepsMut) -> ContractResult<Response> {
    let params = PARAMS.load(deps.storage)?;
    let previous_delta = TERRA_POOL_DELTA.load(deps.storage)?;

    let mut pool = StoragePoolDelta::new(deps.storage);
    let terra_pool_delta = replenish_pools(&mut pool, params.pool_recovery_period)?;

    Ok(Response::new()
        .add_event(build_replenish_pools_event(previous_delta, terra_pool_delta))
        .add_attribute("action", "replenish_pools"))
}
