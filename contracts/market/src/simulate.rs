use cosmwasm_std::{Coin, Decimal256};
use terra_types::coin::DecCoin;
use terra_utils::math::bit_length;

use crate::{
    error::{ContractError, ContractResult},
    swap::SwapEngine,
    traits::PoolDeltaStore,
};

impl<'a> SwapEngine<'a> {
    /// Rejects offers whose amount needs more bits than the configured ceiling.
    pub fn assert_offer_magnitude(&self, offer_coin: &Coin) -> ContractResult<()> {
        if bit_length(offer_coin.amount) > self.params.max_offer_bits() {
            return Err(ContractError::InvalidCoins {
                denom: offer_coin.denom.clone(),
                amount: offer_coin.amount.to_string(),
            });
        }
        Ok(())
    }

    /// Quotes the integral coin a swap would credit, net of the spread fee. Reads the pool
    /// delta but never writes it.
    pub fn simulate_swap(
        &self,
        pool: &dyn PoolDeltaStore,
        offer_coin: &Coin,
        ask_denom: &str,
    ) -> ContractResult<Coin> {
        if offer_coin.denom == ask_denom {
            return Err(ContractError::RecursiveSwap {
                denom: ask_denom.to_string(),
            });
        }
        self.assert_offer_magnitude(offer_coin)?;

        let (swap_coin, spread) = self
            .compute_swap(pool, offer_coin, ask_denom)
            .map_err(|err| ContractError::SwapSimulation(Box::new(err)))?;
        let (swap_coin, _) = deduct_spread_fee(swap_coin, spread)?;

        let (return_coin, _) = swap_coin.truncate()?;
        self.validate_supply_maximum(&DecCoin::from(&return_coin))?;

        Ok(return_coin)
    }
}

/// Splits the quoted coin into what the trader receives and the spread fee.
pub fn deduct_spread_fee(
    swap_coin: DecCoin,
    spread: Decimal256,
) -> ContractResult<(DecCoin, DecCoin)> {
    let fee_amount = if spread.is_zero() {
        Decimal256::zero()
    } else {
        swap_coin.amount.checked_mul(spread)?
    };
    let amount = swap_coin.amount.checked_sub(fee_amount)?;

    Ok((DecCoin::new(swap_coin.denom.clone(), amount), DecCoin::new(swap_coin.denom, fee_amount)))
}
