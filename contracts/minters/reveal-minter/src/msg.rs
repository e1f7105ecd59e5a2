use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Empty, Timestamp};
use cw721::Cw721ReceiveMsg;
use minter_types::{
    certificate_details::CertificateDetails,
    collection_details::CollectionDetails,
    token_details::TokenDetails,
    types::{AuthDetails, CollectionCaps},
};

use crate::inventory::AssetDescriptor;
use crate::stage::WhitelistStage;
use crate::state::{PublicMintConfig, RevealConfig};

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: Option<String>,
    pub payment_collector: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    ConfigureTreasury {
        payment_collector: String,
    },
    CreateCollection {
        collection_details: CollectionDetails,
        token_details: TokenDetails,
        certificate_details: CertificateDetails,
        // 0 leaves the inventory unbounded
        collection_maximum: u64,
        // 0 disables the public per address limit
        public_mint_limit: u64,
    },
    ConfigurePublicAndReveal {
        start_time: Timestamp,
        end_time: Timestamp,
        mint_price: Coin,
        reveal_time: Timestamp,
    },
    AddWhitelistStage {
        start_time: Timestamp,
        end_time: Timestamp,
        mint_price: Coin,
        stage_index: u32,
    },
    AddWhitelistAddresses {
        addresses: Vec<String>,
        limit: u64,
        stage_index: u32,
    },
    AddInventory {
        uris: Vec<String>,
        property_keys: Vec<Vec<String>>,
        property_values: Vec<Vec<String>>,
        property_types: Vec<Vec<String>>,
    },
    MintCertificate {
        amount: u64,
    },
    // Requires an approval of the certificate for this contract
    Exchange {
        certificate_id: String,
    },
    // Hook called by the certificate collection on SendNft
    ReceiveNft(Cw721ReceiveMsg),
}

/// Payload of a `SendNft` to this contract.
#[cw_serde]
pub enum ReceiveMsg {
    Exchange {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(AuthDetails)]
    AuthDetails {},
    #[returns(CollectionDetails)]
    Collection {},
    #[returns(TokenDetails)]
    TokenDetails {},
    #[returns(CertificateDetails)]
    CertificateDetails {},
    #[returns(CollectionCaps)]
    CollectionCaps {},
    #[returns(PublicMintConfig)]
    PublicMint {},
    #[returns(RevealConfig)]
    Reveal {},
    #[returns(Addr)]
    CertificateCollection {},
    #[returns(u64)]
    CertificateCounter {},
    #[returns(Vec<StageResponse>)]
    Stages {},
    #[returns(WhitelistStage)]
    Stage { stage_index: u32 },
    #[returns(Option<StageResponse>)]
    ActiveStage {},
    #[returns(Vec<AllowanceResponse>)]
    StageMembers {
        stage_index: u32,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(Option<u64>)]
    WhitelistAllowance { stage_index: u32, address: String },
    #[returns(Option<u64>)]
    PublicAllowance { address: String },
    #[returns(MintPriceResponse)]
    MintPrice {},
    #[returns(Vec<InventoryEntry>)]
    Inventory {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(u64)]
    InventorySize {},
}

#[cw_serde]
pub struct StageResponse {
    pub stage_index: u32,
    pub stage: WhitelistStage,
}

#[cw_serde]
pub struct AllowanceResponse {
    pub address: Addr,
    pub remaining: u64,
}

#[cw_serde]
pub enum ActivePhase {
    Whitelist { stage_index: u32 },
    Public,
    Closed,
}

#[cw_serde]
pub struct MintPriceResponse {
    pub phase: ActivePhase,
    pub mint_price: Option<Coin>,
}

#[cw_serde]
pub struct InventoryEntry {
    pub index: u64,
    pub descriptor: AssetDescriptor,
}

// Wire compatible subsets of the cw721-base messages sent to the certificate collection

#[cw_serde]
pub struct CertificateCollectionInstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub minter: String,
}

#[cw_serde]
pub enum CertificateCollectionExecuteMsg {
    Mint {
        token_id: String,
        owner: String,
        token_uri: Option<String>,
        extension: Option<Empty>,
    },
    Burn {
        token_id: String,
    },
}
