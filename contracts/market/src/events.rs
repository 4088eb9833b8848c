use cosmwasm_std::{Addr, Coin, Decimal256, Event, SignedDecimal256};

pub fn build_swap_event(
    trader: &Addr,
    recipient: &Addr,
    offer_coin: &Coin,
    swap_coin: &Coin,
    swap_fee: &Coin,
    spread: Decimal256,
    terra_pool_delta: SignedDecimal256,
) -> Event {
    Event::new("swap")
        .add_attribute("trader", trader)
        .add_attribute("recipient", recipient)
        .add_attribute("offer", offer_coin.to_string())
        .add_attribute("swap_coin", swap_coin.to_string())
        .add_attribute("swap_fee", swap_fee.to_string())
        .add_attribute("spread", spread.to_string())
        .add_attribute("terra_pool_delta", terra_pool_delta.to_string())
}

pub fn build_replenish_pools_event(
    previous_delta: SignedDecimal256,
    terra_pool_delta: SignedDecimal256,
) -> Event {
    Event::new("replenish_pools")
        .add_attribute("previous_terra_pool_delta", previous_delta.to_string())
        .add_attribute("terra_pool_delta", terra_pool_delta.to_string())
}
