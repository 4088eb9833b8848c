use cosmwasm_std::{Coin, Deps};
use terra_types::{
    adapters::oracle::Oracle,
    market::{ConfigResponse, SimulateSwapResponse, TerraPoolDeltaResponse},
};

use crate::{
    error::ContractResult,
    pool::PoolDeltaSnapshot,
    providers::{BankSupply, OracleRates},
    state::{CONFIG, PARAMS, TERRA_POOL_DELTA},
    swap::SwapEngine,
};

pub fn query_config(deps: Deps) -> ContractResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        oracle: config.oracle.to_string(),
        fee_collector: config.fee_collector.to_string(),
    })
}

pub fn query_terra_pool_delta(deps: Deps) -> ContractResult<TerraPoolDeltaResponse> {
    Ok(TerraPoolDeltaResponse {
        terra_pool_delta: TERRA_POOL_DELTA.load(deps.storage)?,
    })
}

pub fn query_simulate_swap(
    deps: Deps,
    offer_coin: Coin,
    ask_denom: String,
) -> ContractResult<SimulateSwapResponse> {
    let config = CONFIG.load(deps.storage)?;
    let params = PARAMS.load(deps.storage)?;
    let oracle = Oracle::new(config.oracle);
    let rates = OracleRates::new(&oracle, deps.querier);
    let supply = BankSupply::new(deps.querier, &params);
    let engine = SwapEngine::new(&rates, &supply, &params);

    let pool = PoolDeltaSnapshot::load(deps.storage)?;
    let return_coin = engine.simulate_swap(&pool, &offer_coin, &ask_denom)?;

    Ok(SimulateSwapResponse {
        return_coin,
    })
}
