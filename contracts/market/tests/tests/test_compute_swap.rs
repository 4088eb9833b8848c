use std::str::FromStr;

use cosmwasm_std::{coin, Decimal, SignedDecimal256, Uint128, Uint256};
use terra_market::{error::ContractError, pool::PoolDeltaSnapshot};
use terra_types::{coin::DecCoin, MICRO_LUNA_DENOM, MICRO_SDR_DENOM};

use super::helpers::{dec, TestMarket, UKRW, UMNT};

fn pool_with_delta(delta: &str) -> PoolDeltaSnapshot {
    PoolDeltaSnapshot::new(SignedDecimal256::from_str(delta).unwrap())
}

#[test]
fn luna_to_terra_at_equilibrium() {
    let market = TestMarket::default();
    let pool = PoolDeltaSnapshot::default();

    let (ask_coin, spread) = market
        .engine()
        .compute_swap(&pool, &coin(1_000_000, MICRO_LUNA_DENOM), MICRO_SDR_DENOM)
        .unwrap();
    assert_eq!(ask_coin, DecCoin::new(MICRO_SDR_DENOM, dec("1000000")));
    assert_eq!(spread, dec("0.0099009900990099"));
}

#[test]
fn terra_to_luna_at_equilibrium_is_symmetric() {
    let market = TestMarket::default();
    let pool = PoolDeltaSnapshot::default();

    let (ask_coin, spread) = market
        .engine()
        .compute_swap(&pool, &coin(1_000_000, MICRO_SDR_DENOM), MICRO_LUNA_DENOM)
        .unwrap();
    assert_eq!(ask_coin, DecCoin::new(MICRO_LUNA_DENOM, dec("1000000")));
    assert_eq!(spread, dec("0.0099009900990099"));
}

#[test]
fn small_offers_have_negligible_price_impact() {
    let market = TestMarket::default();
    let pool = PoolDeltaSnapshot::default();

    let (_, spread) = market
        .engine()
        .compute_swap(&pool, &coin(1, MICRO_LUNA_DENOM), MICRO_SDR_DENOM)
        .unwrap();
    assert_eq!(spread, dec("0.0000000099999999"));
}

#[test]
fn terra_to_luna_from_non_base_denom() {
    let market = TestMarket::default();
    let pool = PoolDeltaSnapshot::default();

    let (ask_coin, spread) = market
        .engine()
        .compute_swap(&pool, &coin(1_200_000, UKRW), MICRO_LUNA_DENOM)
        .unwrap();
    assert_eq!(ask_coin, DecCoin::new(MICRO_LUNA_DENOM, dec("1000")));
    assert_eq!(spread, dec("0.000009999900000999"));
}

#[test]
fn depleted_terra_side_widens_spread() {
    let market = TestMarket::default();
    let pool = pool_with_delta("-1000000");

    let (_, spread) = market
        .engine()
        .compute_swap(&pool, &coin(1_000_000, MICRO_LUNA_DENOM), MICRO_SDR_DENOM)
        .unwrap();
    assert_eq!(spread, dec("0.029507872066541241"));
}

#[test]
fn spread_is_floored_at_min_stability_spread() {
    let market = TestMarket::default();
    // an oversupplied terra pool quotes Luna => Terra better than the oracle
    let pool = pool_with_delta("1000000");
    let offer = coin(1_000_000, MICRO_LUNA_DENOM);

    let (_, spread) = market.engine().compute_swap(&pool, &offer, MICRO_SDR_DENOM).unwrap();
    assert_eq!(spread, dec("0"));

    let market = TestMarket::default().with_min_spread(Decimal::percent(2));
    let (_, spread) = market.engine().compute_swap(&pool, &offer, MICRO_SDR_DENOM).unwrap();
    assert_eq!(spread, dec("0.02"));
}

#[test]
fn terra_to_terra_charges_highest_tobin_tax() {
    let market = TestMarket::default().with_min_spread(Decimal::percent(10));
    let pool = PoolDeltaSnapshot::default();

    let (ask_coin, spread) =
        market.engine().compute_swap(&pool, &coin(1_200_000, UKRW), UMNT).unwrap();
    assert_eq!(ask_coin, DecCoin::new(UMNT, dec("3000000")));
    // the minimum spread only applies to swaps involving Luna
    assert_eq!(spread, dec("0.02"));

    let (_, spread) =
        market.engine().compute_swap(&pool, &coin(1_200_000, UKRW), MICRO_SDR_DENOM).unwrap();
    assert_eq!(spread, dec("0.0035"));
}

#[test]
fn terra_to_terra_needs_tobin_taxes() {
    let mut market = TestMarket::default();
    market.rates.tobin_taxes.remove(UMNT);
    let pool = PoolDeltaSnapshot::default();

    let err = market.engine().compute_swap(&pool, &coin(1_200_000, UKRW), UMNT).unwrap_err();
    assert_eq!(
        err,
        ContractError::TobinTaxUnavailable {
            denom: UMNT.to_string()
        }
    );
}

#[test]
fn recursive_swap_is_rejected() {
    let market = TestMarket::default();
    let pool = PoolDeltaSnapshot::default();

    let err = market.engine().compute_swap(&pool, &coin(100, UKRW), UKRW).unwrap_err();
    assert_eq!(
        err,
        ContractError::RecursiveSwap {
            denom: UKRW.to_string()
        }
    );
}

#[test]
fn zero_offer_is_rejected() {
    let market = TestMarket::default();
    let pool = PoolDeltaSnapshot::default();

    let err = market
        .engine()
        .compute_swap(&pool, &coin(0, MICRO_LUNA_DENOM), MICRO_SDR_DENOM)
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::InvalidCoins {
            denom: MICRO_LUNA_DENOM.to_string(),
            amount: "0".to_string(),
        }
    );
}

#[test]
fn fully_drained_terra_pool_is_rejected() {
    let market = TestMarket::default();
    let pool = pool_with_delta("-100000000");

    let err = market
        .engine()
        .compute_swap(&pool, &coin(1_000, MICRO_LUNA_DENOM), MICRO_SDR_DENOM)
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::DepletedTerraPool {
            terra_pool: "0".to_string()
        }
    );
}

#[test]
fn luna_offer_skips_base_denom_cap_while_normalizing() {
    let mut market = TestMarket::default();
    market.supply.set_total_supply(MICRO_SDR_DENOM, 1_000);
    market.supply.set_max_supply(MICRO_SDR_DENOM, 1_000);
    let pool = PoolDeltaSnapshot::default();

    // Luna => ukrw goes through usdr without checking its cap
    let (ask_coin, _) =
        market.engine().compute_swap(&pool, &coin(1_000, MICRO_LUNA_DENOM), UKRW).unwrap();
    assert_eq!(ask_coin, DecCoin::new(UKRW, dec("1200000")));

    // ukrw => Luna normalizes into the capped usdr
    let err =
        market.engine().compute_swap(&pool, &coin(1_200_000, UKRW), MICRO_LUNA_DENOM).unwrap_err();
    assert_eq!(
        err,
        ContractError::SupplyCapExceeded {
            denom: MICRO_SDR_DENOM.to_string(),
            max_supply: Uint128::new(1_000),
            total_supply: Uint128::new(1_000),
            amount: Uint256::from(1_000u128),
        }
    );
}

#[test]
fn ask_denom_cap_is_enforced() {
    let mut market = TestMarket::default();
    market.supply.set_total_supply(MICRO_LUNA_DENOM, 10_000);
    market.supply.set_max_supply(MICRO_LUNA_DENOM, 10_500);
    let pool = PoolDeltaSnapshot::default();

    let err = market
        .engine()
        .compute_swap(&pool, &coin(1_000, MICRO_SDR_DENOM), MICRO_LUNA_DENOM)
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::SupplyCapExceeded {
            denom: MICRO_LUNA_DENOM.to_string(),
            max_supply: Uint128::new(10_500),
            total_supply: Uint128::new(10_000),
            amount: Uint256::from(1_000u128),
        }
    );
}
