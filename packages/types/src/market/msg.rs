use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, SignedDecimal256};
use mars_owner::OwnerUpdate;

use super::{Params, ParamsUpdate};

#[cw_serde]
pub struct InstantiateMsg {
    /// Contract's owner
    pub owner: String,
    /// Oracle contract publishing exchange rates and tobin taxes
    pub oracle: String,
    /// Address receiving the swap fees
    pub fee_collector: String,
    /// Initial market parameters
    pub params: Params,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Manages owner state
    UpdateOwner(OwnerUpdate),

    /// Update contract config (only owner can call)
    UpdateConfig {
        oracle: Option<String>,
        fee_collector: Option<String>,
    },

    /// Update market parameters (only owner can call)
    UpdateParams(ParamsUpdate),

    /// Swap the single coin sent with the message into `ask_denom`.
    /// The swapped coin is sent to `recipient`, or to the sender if none is given.
    Swap {
        ask_denom: String,
        recipient: Option<String>,
    },
}

/// Messages only the chain itself can dispatch
#[cw_serde]
pub enum SudoMsg {
    /// Regress the terra pool delta one step back toward zero. Called once per block.
    ReplenishPools {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(mars_owner::OwnerResponse)]
    Owner {},

    #[returns(ConfigResponse)]
    Config {},

    #[returns(Params)]
    Params {},

    /// Quote the coin that would be received for swapping `offer_coin` into `ask_denom`
    #[returns(SimulateSwapResponse)]
    Swap {
        offer_coin: Coin,
        ask_denom: String,
    },

    #[returns(TerraPoolDeltaResponse)]
    TerraPoolDelta {},
}

/// Global configuration
#[cw_serde]
pub struct Config<T> {
    pub oracle: T,
    pub fee_collector: T,
}

pub type ConfigResponse = Config<String>;

#[cw_serde]
pub struct SimulateSwapResponse {
    pub return_coin: Coin,
}

#[cw_serde]
pub struct TerraPoolDeltaResponse {
    /// Accumulated deviation of the virtual terra pool from the base pool, in base denom units
    pub terra_pool_delta: SignedDecimal256,
}
