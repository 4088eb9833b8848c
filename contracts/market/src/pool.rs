use cosmwasm_std::{Decimal256, SignedDecimal256, StdResult, Storage};
use terra_utils::math::decimal_to_signed;

use crate::{error::ContractResult, state::TERRA_POOL_DELTA, traits::PoolDeltaStore};

/// Pool delta persisted in contract storage. Writes go straight to the store, so it is only
/// handed out while the surrounding transaction holds the storage exclusively.
pub struct StoragePoolDelta<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> StoragePoolDelta<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        Self {
            storage,
        }
    }
}

impl<'a> PoolDeltaStore for StoragePoolDelta<'a> {
    fn terra_pool_delta(&self) -> StdResult<SignedDecimal256> {
        TERRA_POOL_DELTA.load(&*self.storage)
    }

    fn set_terra_pool_delta(&mut self, delta: SignedDecimal256) -> StdResult<()> {
        TERRA_POOL_DELTA.save(self.storage, &delta)
    }
}

/// In-memory copy of the pool delta. Used for read-only quoting, where updates must not
/// reach the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolDeltaSnapshot {
    delta: SignedDecimal256,
}

impl PoolDeltaSnapshot {
    pub fn new(delta: SignedDecimal256) -> Self {
        Self {
            delta,
        }
    }

    pub fn load(storage: &dyn Storage) -> StdResult<Self> {
        Ok(Self::new(TERRA_POOL_DELTA.load(storage)?))
    }
}

impl Default for PoolDeltaSnapshot {
    fn default() -> Self {
        Self::new(SignedDecimal256::zero())
    }
}

impl PoolDeltaStore for PoolDeltaSnapshot {
    fn terra_pool_delta(&self) -> StdResult<SignedDecimal256> {
        Ok(self.delta)
    }

    fn set_terra_pool_delta(&mut self, delta: SignedDecimal256) -> StdResult<()> {
        self.delta = delta;
        Ok(())
    }
}

/// Moves the delta `1 / pool_recovery_period` of the way back to zero and returns the new value.
pub fn replenish_pools(
    pool: &mut dyn PoolDeltaStore,
    pool_recovery_period: u64,
) -> ContractResult<SignedDecimal256> {
    let delta = pool.terra_pool_delta()?;
    if delta == SignedDecimal256::zero() {
        return Ok(delta);
    }

    let period = decimal_to_signed(Decimal256::from_ratio(pool_recovery_period, 1u8))?;
    let regression = delta.checked_div(period)?;
    let delta = delta.checked_sub(regression)?;

    pool.set_terra_pool_delta(delta)?;
    Ok(delta)
}
