use cosmwasm_std::{Addr, SignedDecimal256};
use cw_storage_plus::Item;
use mars_owner::Owner;
use terra_types::market::{Config, Params};

pub const OWNER: Owner = Owner::new("owner");
pub const CONFIG: Item<Config<Addr>> = Item::new("config");
pub const PARAMS: Item<Params> = Item::new("params");
pub const TERRA_POOL_DELTA: Item<SignedDecimal256> = Item::new("terra_pool_delta");
