use cosmwasm_std::{
    CheckedFromRatioError, ConversionOverflowError, OverflowError, StdError, Uint128, Uint256,
};
use cw_utils::PaymentError;
use mars_owner::OwnerError;
pub use terra_utils::error::ValidationError;
use thiserror::Error;

pub type ContractResult<T> = Result<T, ContractError>;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Owner(#[from] OwnerError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    CheckedFromRatio(#[from] CheckedFromRatioError),

    #[error("{0}")]
    ConversionOverflow(#[from] ConversionOverflowError),

    #[error("Recursive swap: offer and ask denoms are both {denom:?}")]
    RecursiveSwap {
        denom: String,
    },

    #[error("No effective price registered for {denom:?}")]
    NoEffectivePrice {
        denom: String,
    },

    #[error("Invalid coins: {amount}{denom}")]
    InvalidCoins {
        denom: String,
        amount: String,
    },

    #[error("Maximum supply not configured for {denom:?}")]
    MaxSupplyNotConfigured {
        denom: String,
    },

    #[error("Minting {amount}{denom} on top of a total supply of {total_supply} exceeds the maximum supply of {max_supply}")]
    SupplyCapExceeded {
        denom: String,
        max_supply: Uint128,
        total_supply: Uint128,
        amount: Uint256,
    },

    #[error("No tobin tax configured for {denom:?}")]
    TobinTaxUnavailable {
        denom: String,
    },

    #[error("Terra pool is depleted: {terra_pool}")]
    DepletedTerraPool {
        terra_pool: String,
    },

    #[error("Swap results in a zero {denom:?} coin")]
    ZeroSwapCoin {
        denom: String,
    },

    #[error("Swap simulation failed: {0}")]
    SwapSimulation(Box<ContractError>),
}
