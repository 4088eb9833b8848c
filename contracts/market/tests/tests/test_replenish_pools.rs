use std::str::FromStr;

use cosmwasm_std::{coin, Addr, Decimal, SignedDecimal256};
use terra_types::{market::ParamsUpdate, MICRO_LUNA_DENOM, MICRO_SDR_DENOM};

use super::helpers::MockEnv;

fn signed(value: &str) -> SignedDecimal256 {
    SignedDecimal256::from_str(value).unwrap()
}

#[test]
fn replenish_without_delta_is_noop() {
    let mut mock = MockEnv::new().build().unwrap();

    let res = mock.replenish_pools().unwrap();
    assert_eq!(mock.query_terra_pool_delta().terra_pool_delta, SignedDecimal256::zero());

    let event = res.events.iter().find(|e| e.ty == "wasm-replenish_pools").unwrap();
    let attr = event.attributes.iter().find(|a| a.key == "terra_pool_delta").unwrap();
    assert_eq!(attr.value, "0");
}

#[test]
fn replenish_regresses_delta_toward_zero() {
    let trader = Addr::unchecked("trader");
    let mut mock = MockEnv::new()
        .fund_user(&trader, vec![coin(1_000_000, MICRO_LUNA_DENOM)])
        .build()
        .unwrap();
    mock.update_params(
        &mock.query_owner(),
        ParamsUpdate {
            pool_recovery_period: Some(4),
            ..Default::default()
        },
    )
    .unwrap();

    mock.swap(&trader, &[coin(1_000_000, MICRO_LUNA_DENOM)], MICRO_SDR_DENOM, None).unwrap();
    assert_eq!(mock.query_terra_pool_delta().terra_pool_delta, signed("-980000"));

    let res = mock.replenish_pools().unwrap();
    assert_eq!(mock.query_terra_pool_delta().terra_pool_delta, signed("-735000"));

    let event = res.events.iter().find(|e| e.ty == "wasm-replenish_pools").unwrap();
    let previous =
        event.attributes.iter().find(|a| a.key == "previous_terra_pool_delta").unwrap();
    assert_eq!(previous.value, "-980000");

    mock.replenish_pools().unwrap();
    assert_eq!(mock.query_terra_pool_delta().terra_pool_delta, signed("-551250"));
}

#[test]
fn replenished_pool_quotes_closer_to_equilibrium() {
    let trader = Addr::unchecked("trader");
    let mut mock = MockEnv::new()
        .min_stability_spread(Decimal::zero())
        .fund_user(&trader, vec![coin(1_000_000, MICRO_LUNA_DENOM)])
        .build()
        .unwrap();
    mock.update_params(
        &mock.query_owner(),
        ParamsUpdate {
            pool_recovery_period: Some(1),
            ..Default::default()
        },
    )
    .unwrap();

    let offer = coin(1_000_000, MICRO_LUNA_DENOM);
    let before = mock.query_simulate_swap(offer.clone(), MICRO_SDR_DENOM).unwrap().return_coin;

    mock.swap(&trader, &[offer.clone()], MICRO_SDR_DENOM, None).unwrap();
    let moved = mock.query_simulate_swap(offer.clone(), MICRO_SDR_DENOM).unwrap().return_coin;
    assert!(moved.amount < before.amount);

    // a recovery period of one block restores the pool at once
    mock.replenish_pools().unwrap();
    let recovered = mock.query_simulate_swap(offer, MICRO_SDR_DENOM).unwrap().return_coin;
    assert_eq!(recovered, before);
}
