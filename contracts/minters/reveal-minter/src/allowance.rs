use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::{Bound, Map, PrimaryKey};

use crate::error::ContractError;

/// Remaining mint count per key. One table backs every whitelist stage (keyed by
/// stage index and address) and another one backs public minting.
pub struct AllowanceTable<'a, K>(Map<'a, K, u64>);

impl<'a, K> AllowanceTable<'a, K>
where
    K: PrimaryKey<'a>,
{
    pub const fn new(storage_key: &'a str) -> Self {
        AllowanceTable(Map::new(storage_key))
    }

    /// Inserts or overwrites the remaining allowance of `key`.
    pub fn grant(&self, store: &mut dyn Storage, key: K, amount: u64) -> StdResult<()> {
        self.0.save(store, key, &amount)
    }

    pub fn remaining(&self, store: &dyn Storage, key: K) -> StdResult<Option<u64>> {
        self.0.may_load(store, key)
    }

    /// Fails without touching the entry unless `amount` fits into what is left.
    pub fn check(&self, store: &dyn Storage, key: K, amount: u64) -> Result<u64, ContractError> {
        let remaining = self
            .0
            .may_load(store, key)?
            .ok_or(ContractError::AllowanceNotFound {})?;
        if amount > remaining {
            return Err(ContractError::ExceedsAllowance {
                requested: amount,
                remaining,
            });
        }
        Ok(remaining)
    }

    /// Decrements the entry by `amount` and returns what is left.
    pub fn try_consume(
        &self,
        store: &mut dyn Storage,
        key: K,
        amount: u64,
    ) -> Result<u64, ContractError>
    where
        K: Clone,
    {
        let remaining = self.check(store, key.clone(), amount)? - amount;
        self.0.save(store, key, &remaining)?;
        Ok(remaining)
    }
}

impl<'a> AllowanceTable<'a, (u32, Addr)> {
    pub fn members(
        &self,
        store: &dyn Storage,
        stage_index: u32,
        start_after: Option<Addr>,
        limit: usize,
    ) -> StdResult<Vec<(Addr, u64)>> {
        self.0
            .prefix(stage_index)
            .range(
                store,
                start_after.map(Bound::exclusive),
                None,
                Order::Ascending,
            )
            .take(limit)
            .collect()
    }
}
