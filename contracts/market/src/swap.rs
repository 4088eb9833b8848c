use std::cmp::max;

use cosmwasm_std::{Coin, Decimal256, SignedDecimal256};
use terra_types::{coin::DecCoin, MICRO_LUNA_DENOM, MICRO_SDR_DENOM};
use terra_utils::math::{decimal_to_signed, signed_to_decimal};

use crate::{
    error::{ContractError, ContractResult},
    traits::{ParameterStore, PoolDeltaStore, RateProvider, SupplyLedger},
};

/// Prices swaps between Luna and the Terra denominations.
///
/// Every input other than the pool delta is a read-only snapshot supplied by the collaborators
/// the engine is built with; the pool delta handle is passed into each call.
pub struct SwapEngine<'a> {
    pub oracle: &'a dyn RateProvider,
    pub supply: &'a dyn SupplyLedger,
    pub params: &'a dyn ParameterStore,
}

impl<'a> SwapEngine<'a> {
    pub fn new(
        oracle: &'a dyn RateProvider,
        supply: &'a dyn SupplyLedger,
        params: &'a dyn ParameterStore,
    ) -> Self {
        Self {
            oracle,
            supply,
            params,
        }
    }

    /// Converts `offer_coin` into `ask_denom` at the oracle rates, charging no spread.
    pub fn compute_internal_swap(
        &self,
        offer_coin: &DecCoin,
        ask_denom: &str,
        skip_supply_check: bool,
    ) -> ContractResult<DecCoin> {
        if offer_coin.denom == ask_denom {
            return Ok(offer_coin.clone());
        }

        let offer_rate = self.exchange_rate(&offer_coin.denom)?;
        let ask_rate = self.exchange_rate(ask_denom)?;

        let amount = offer_coin.amount.checked_mul(ask_rate)?.checked_div(offer_rate)?;
        if amount.is_zero() {
            return Err(ContractError::InvalidCoins {
                denom: offer_coin.denom.clone(),
                amount: offer_coin.amount.to_string(),
            });
        }

        let ask_coin = DecCoin::new(ask_denom, amount);
        if !skip_supply_check {
            self.validate_supply_maximum(&ask_coin)?;
        }

        Ok(ask_coin)
    }

    /// Quotes `offer_coin` into `ask_denom`. Returns the ask coin before any fee is taken
    /// together with the spread the caller has to charge on it.
    pub fn compute_swap(
        &self,
        pool: &dyn PoolDeltaStore,
        offer_coin: &Coin,
        ask_denom: &str,
    ) -> ContractResult<(DecCoin, Decimal256)> {
        if offer_coin.denom == ask_denom {
            return Err(ContractError::RecursiveSwap {
                denom: ask_denom.to_string(),
            });
        }

        // Minting Luna is not capped while normalizing, only the final ask denom is
        let offer_is_luna = offer_coin.denom == MICRO_LUNA_DENOM;
        let base_offer_coin =
            self.compute_internal_swap(&DecCoin::from(offer_coin), MICRO_SDR_DENOM, offer_is_luna)?;
        let ask_coin = self.compute_internal_swap(&base_offer_coin, ask_denom, false)?;

        // Terra => Terra only pays the tobin tax, no constant-product spread
        if !offer_is_luna && ask_denom != MICRO_LUNA_DENOM {
            let offer_tobin_tax = self.tobin_tax(&offer_coin.denom)?;
            let ask_tobin_tax = self.tobin_tax(ask_denom)?;
            return Ok((ask_coin, max(offer_tobin_tax, ask_tobin_tax)));
        }

        let base_pool = self.params.base_pool();
        let min_spread = Decimal256::from(self.params.min_stability_spread());

        // constant product is the square of the equilibrium pool
        let cp = base_pool.checked_mul(base_pool)?;
        let terra_pool = terra_pool(base_pool, pool.terra_pool_delta()?)?;
        let luna_pool = cp.checked_div(terra_pool)?;

        let (offer_pool, ask_pool) = if offer_is_luna {
            (luna_pool, terra_pool)
        } else {
            (terra_pool, luna_pool)
        };

        // all in base denom units
        let base_offer_amount = base_offer_coin.amount;
        let ask_base_amount =
            ask_pool.saturating_sub(cp.checked_div(offer_pool.checked_add(base_offer_amount)?)?);
        let spread =
            base_offer_amount.saturating_sub(ask_base_amount).checked_div(base_offer_amount)?;
        let spread = max(spread, min_spread);

        self.validate_supply_maximum(&ask_coin)?;

        Ok((ask_coin, spread))
    }

    /// Records a committed swap in the terra pool delta and returns the new delta. `ask_coin` is
    /// what the trader receives, net of the spread fee. Nothing is written unless the whole
    /// update succeeds.
    pub fn apply_swap_to_pool(
        &self,
        pool: &mut dyn PoolDeltaStore,
        offer_coin: &Coin,
        ask_coin: &DecCoin,
    ) -> ContractResult<SignedDecimal256> {
        let offer_is_luna = offer_coin.denom == MICRO_LUNA_DENOM;
        let ask_is_luna = ask_coin.denom == MICRO_LUNA_DENOM;

        let delta = pool.terra_pool_delta()?;
        let delta = match (offer_is_luna, ask_is_luna) {
            // Terra => Luna: the terra pool grows
            (false, true) => {
                let offer_base_coin =
                    self.compute_internal_swap(&DecCoin::from(offer_coin), MICRO_SDR_DENOM, true)?;
                delta.checked_add(decimal_to_signed(offer_base_coin.amount)?)?
            }
            // Luna => Terra: the terra pool shrinks
            (true, false) => {
                let ask_base_coin = self.compute_internal_swap(ask_coin, MICRO_SDR_DENOM, true)?;
                delta.checked_sub(decimal_to_signed(ask_base_coin.amount)?)?
            }
            _ => return Ok(delta),
        };

        pool.set_terra_pool_delta(delta)?;
        Ok(delta)
    }

    fn exchange_rate(&self, denom: &str) -> ContractResult<Decimal256> {
        self.oracle
            .exchange_rate(denom)?
            .filter(|rate| !rate.is_zero())
            .map(Decimal256::from)
            .ok_or_else(|| ContractError::NoEffectivePrice {
                denom: denom.to_string(),
            })
    }

    fn tobin_tax(&self, denom: &str) -> ContractResult<Decimal256> {
        self.oracle.tobin_tax(denom)?.map(Decimal256::from).ok_or_else(|| {
            ContractError::TobinTaxUnavailable {
                denom: denom.to_string(),
            }
        })
    }
}

fn terra_pool(base_pool: Decimal256, delta: SignedDecimal256) -> ContractResult<Decimal256> {
    let terra_pool = decimal_to_signed(base_pool)?.checked_add(delta)?;
    if terra_pool <= SignedDecimal256::zero() {
        return Err(ContractError::DepletedTerraPool {
            terra_pool: terra_pool.to_string(),
        });
    }
    Ok(signed_to_decimal(terra_pool)?)
}
