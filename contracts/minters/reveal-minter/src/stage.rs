use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Order, StdResult, Storage, Timestamp};
use cw_storage_plus::Map;

use crate::allowance::AllowanceTable;
use crate::error::ContractError;

#[cw_serde]
pub struct WhitelistStage {
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub mint_price: Coin,
}

impl WhitelistStage {
    pub fn contains(&self, now: Timestamp) -> bool {
        now >= self.start_time && now < self.end_time
    }
}

/// Append-only list of whitelist stages with one allowance table shared by all of them.
/// Stage indices are contiguous from 0.
pub struct StageRegistry<'a> {
    stages: Map<'a, u32, WhitelistStage>,
    pub allowances: AllowanceTable<'a, (u32, Addr)>,
}

impl<'a> StageRegistry<'a> {
    pub const fn new(stages_key: &'a str, allowances_key: &'a str) -> Self {
        StageRegistry {
            stages: Map::new(stages_key),
            allowances: AllowanceTable::new(allowances_key),
        }
    }

    pub fn len(&self, store: &dyn Storage) -> StdResult<u32> {
        let last = self
            .stages
            .keys(store, None, None, Order::Descending)
            .next()
            .transpose()?;
        Ok(last.map_or(0, |index| index + 1))
    }

    #[cfg(test)]
    pub fn is_empty(&self, store: &dyn Storage) -> StdResult<bool> {
        Ok(self.len(store)? == 0)
    }

    pub fn load(&self, store: &dyn Storage, stage_index: u32) -> Result<WhitelistStage, ContractError> {
        let expected = self.len(store)?;
        self.stages
            .may_load(store, stage_index)?
            .ok_or(ContractError::InvalidStageIndex {
                index: stage_index,
                expected,
            })
    }

    pub fn load_all(&self, store: &dyn Storage) -> StdResult<Vec<(u32, WhitelistStage)>> {
        self.stages
            .range(store, None, None, Order::Ascending)
            .collect()
    }

    pub fn add_stage(
        &self,
        store: &mut dyn Storage,
        stage: WhitelistStage,
        expected_index: u32,
    ) -> Result<u32, ContractError> {
        if stage.start_time >= stage.end_time {
            return Err(ContractError::InvalidWindow {
                start: stage.start_time,
                end: stage.end_time,
            });
        }
        let len = self.len(store)?;
        if expected_index != len {
            return Err(ContractError::InvalidStageIndex {
                index: expected_index,
                expected: len,
            });
        }
        self.stages.save(store, len, &stage)?;
        Ok(len)
    }

    /// True from the start of the first stage until the end of the last one, gaps included.
    pub fn is_any_stage_active(&self, store: &dyn Storage, now: Timestamp) -> StdResult<bool> {
        let first = self
            .stages
            .range(store, None, None, Order::Ascending)
            .next()
            .transpose()?;
        let last = self
            .stages
            .range(store, None, None, Order::Descending)
            .next()
            .transpose()?;
        Ok(match (first, last) {
            (Some((_, first)), Some((_, last))) => now >= first.start_time && now < last.end_time,
            _ => false,
        })
    }

    // Lowest index wins when windows overlap
    pub fn active_stage_index(
        &self,
        store: &dyn Storage,
        now: Timestamp,
    ) -> StdResult<Option<(u32, WhitelistStage)>> {
        for item in self.stages.range(store, None, None, Order::Ascending) {
            let (index, stage) = item?;
            if stage.contains(now) {
                return Ok(Some((index, stage)));
            }
        }
        Ok(None)
    }

    /// Sets the allowance of every address in the batch. Addresses are validated by the caller.
    pub fn grant(
        &self,
        store: &mut dyn Storage,
        now: Timestamp,
        stage_index: u32,
        addresses: &[Addr],
        amount: u64,
    ) -> Result<(), ContractError> {
        let stage = self.load(store, stage_index)?;
        if now >= stage.end_time {
            return Err(ContractError::UpdateAfterClose { stage_index });
        }
        for address in addresses {
            self.allowances
                .grant(store, (stage_index, address.clone()), amount)?;
        }
        Ok(())
    }
}
