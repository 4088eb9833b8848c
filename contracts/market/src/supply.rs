use cosmwasm_std::Uint256;
use terra_types::coin::DecCoin;
use terra_utils::math::truncate_decimal;

use crate::{
    error::{ContractError, ContractResult},
    swap::SwapEngine,
    traits::SupplyLedger,
};

/// Fails if minting `coin` (truncated) would push the denom's total supply past its configured
/// maximum. Denoms without a configured maximum can never be minted.
pub fn validate_supply_maximum(supply: &dyn SupplyLedger, coin: &DecCoin) -> ContractResult<()> {
    let max_supply =
        supply.max_supply(&coin.denom)?.ok_or_else(|| ContractError::MaxSupplyNotConfigured {
            denom: coin.denom.clone(),
        })?;
    let total_supply = supply.total_supply(&coin.denom)?;
    let amount = truncate_decimal(coin.amount);

    if Uint256::from(total_supply).checked_add(amount)? > Uint256::from(max_supply) {
        return Err(ContractError::SupplyCapExceeded {
            denom: coin.denom.clone(),
            max_supply,
            total_supply,
            amount,
        });
    }

    Ok(())
}

impl<'a> SwapEngine<'a> {
    pub fn validate_supply_maximum(&self, coin: &DecCoin) -> ContractResult<()> {
        validate_supply_maximum(self.supply, coin)
    }
}
