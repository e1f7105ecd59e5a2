use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Timestamp};
use cw_storage_plus::Item;
use minter_types::{
    certificate_details::CertificateDetails,
    collection_details::CollectionDetails,
    token_details::TokenDetails,
    types::{AuthDetails, CollectionCaps},
};

use crate::{allowance::AllowanceTable, inventory::InventoryPool, stage::StageRegistry};

#[cw_serde]
pub struct PublicMintConfig {
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub mint_price: Coin,
}

impl PublicMintConfig {
    pub fn is_active(&self, now: Timestamp) -> bool {
        now >= self.start_time && now < self.end_time
    }
}

#[cw_serde]
pub struct RevealConfig {
    pub reveal_time: Timestamp,
}

pub const AUTH_DETAILS: Item<AuthDetails> = Item::new("auth_details");
pub const COLLECTION: Item<CollectionDetails> = Item::new("collection");
pub const TOKEN_DETAILS: Item<TokenDetails> = Item::new("token_details");
pub const CERTIFICATE_DETAILS: Item<CertificateDetails> = Item::new("certificate_details");
// Address of the cw721 contract holding certificates, set by the instantiate reply
pub const CERTIFICATE_COLLECTION: Item<Addr> = Item::new("certificate_collection");
pub const COLLECTION_CAPS: Item<CollectionCaps> = Item::new("collection_caps");
pub const PUBLIC_MINT: Item<PublicMintConfig> = Item::new("public_mint");
pub const REVEAL: Item<RevealConfig> = Item::new("reveal");
// Sequence number of the next certificate, starts at 1
pub const CERTIFICATE_COUNTER: Item<u64> = Item::new("certificate_counter");

pub const STAGES: StageRegistry = StageRegistry::new("stages", "stage_allowances");
pub const PUBLIC_ALLOWANCES: AllowanceTable<Addr> = AllowanceTable::new("public_allowances");
pub const INVENTORY: InventoryPool =
    InventoryPool::new("inventory", "inventory_uris", "inventory_len");
