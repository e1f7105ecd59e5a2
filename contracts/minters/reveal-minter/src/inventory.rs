use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Empty, Order, StdResult, Storage};
use cw_storage_plus::{Bound, Item, Map};
use minter_types::token_details::AssetProperty;

use crate::error::ContractError;

/// One unrevealed asset: a media uri and its trait table.
#[cw_serde]
pub struct AssetDescriptor {
    pub uri: String,
    pub property_keys: Vec<String>,
    pub property_values: Vec<String>,
    pub property_types: Vec<String>,
}

impl AssetDescriptor {
    pub fn properties(&self) -> Vec<AssetProperty> {
        self.property_keys
            .iter()
            .zip(self.property_values.iter())
            .zip(self.property_types.iter())
            .map(|((key, value), value_type)| AssetProperty {
                key: key.clone(),
                value: value.clone(),
                value_type: value_type.clone(),
            })
            .collect()
    }
}

/// Dense pool of descriptors addressed by `0..len`, with a uri index for deduplication.
pub struct InventoryPool<'a> {
    entries: Map<'a, u64, AssetDescriptor>,
    seen_uris: Map<'a, String, Empty>,
    len: Item<'a, u64>,
}

impl<'a> InventoryPool<'a> {
    pub const fn new(entries_key: &'a str, uris_key: &'a str, len_key: &'a str) -> Self {
        InventoryPool {
            entries: Map::new(entries_key),
            seen_uris: Map::new(uris_key),
            len: Item::new(len_key),
        }
    }

    pub fn len(&self, store: &dyn Storage) -> StdResult<u64> {
        Ok(self.len.may_load(store)?.unwrap_or_default())
    }

    #[cfg(test)]
    pub fn is_empty(&self, store: &dyn Storage) -> StdResult<bool> {
        Ok(self.len(store)? == 0)
    }

    pub fn contains(&self, store: &dyn Storage, uri: &str) -> bool {
        self.seen_uris.has(store, uri.to_string())
    }

    #[cfg(test)]
    pub fn seen_count(&self, store: &dyn Storage) -> usize {
        self.seen_uris
            .keys_raw(store, None, None, Order::Ascending)
            .count()
    }

    /// Appends `descriptor`. A `collection_maximum` of 0 leaves the pool unbounded.
    pub fn add(
        &self,
        store: &mut dyn Storage,
        descriptor: AssetDescriptor,
        collection_maximum: u64,
    ) -> Result<u64, ContractError> {
        if self.contains(store, &descriptor.uri) {
            return Err(ContractError::DuplicateUri {
                uri: descriptor.uri,
            });
        }
        let len = self.len(store)?;
        if collection_maximum > 0 && len + 1 > collection_maximum {
            return Err(ContractError::CapacityExceeded {
                maximum: collection_maximum,
            });
        }
        self.seen_uris
            .save(store, descriptor.uri.clone(), &Empty {})?;
        self.entries.save(store, len, &descriptor)?;
        self.len.save(store, &(len + 1))?;
        Ok(len + 1)
    }

    /// Removes and returns the entry at `seed mod len`. The last entry moves into the hole.
    pub fn take_random(
        &self,
        store: &mut dyn Storage,
        seed: u64,
    ) -> Result<AssetDescriptor, ContractError> {
        let len = self.len(store)?;
        if len == 0 {
            return Err(ContractError::InventoryEmpty {});
        }
        let index = seed % len;
        let last_index = len - 1;
        let drawn = self.entries.load(store, index)?;
        if index != last_index {
            let last = self.entries.load(store, last_index)?;
            self.entries.save(store, index, &last)?;
        }
        self.entries.remove(store, last_index);
        self.seen_uris.remove(store, drawn.uri.clone());
        self.len.save(store, &last_index)?;
        Ok(drawn)
    }

    pub fn page(
        &self,
        store: &dyn Storage,
        start_after: Option<u64>,
        limit: usize,
    ) -> StdResult<Vec<(u64, AssetDescriptor)>> {
        self.entries
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
