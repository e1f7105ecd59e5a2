use cosmwasm_std::{Coin, OverflowError, StdError, Timestamp, Uint128};
use cw_utils::{ParseReplyError, PaymentError};
use minter_types::{
    certificate_details::CertificateDetailsError, collection_details::CollectionDetailsError,
    token_details::TokenDetailsError,
};
use serde_json::Error as SerdeError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    TokenDetailsError(#[from] TokenDetailsError),

    #[error(transparent)]
    CollectionDetailsError(#[from] CollectionDetailsError),

    #[error(transparent)]
    CertificateDetailsError(#[from] CertificateDetailsError),

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    ParseReplyError(#[from] ParseReplyError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized (code 1)")]
    Unauthorized {},

    #[error("Invalid royalty (code 2)")]
    InvalidRoyalty {},

    #[error("Collection already created (code 3)")]
    AlreadyCreated {},

    #[error("Invalid creation fee (code 23)")]
    InvalidCreationFee {
        expected: Vec<Coin>,
        sent: Vec<Coin>,
    },

    #[error("Invalid public window or reveal time (code 4)")]
    InvalidTime {},

    #[error("Invalid stage window (code 5)")]
    InvalidWindow { start: Timestamp, end: Timestamp },

    #[error("Invalid stage index {index}, expected {expected} (code 6)")]
    InvalidStageIndex { index: u32, expected: u32 },

    #[error("Stage {stage_index} has already closed (code 7)")]
    UpdateAfterClose { stage_index: u32 },

    #[error("Unknown account {address} (code 8)")]
    UnknownAccount { address: String },

    #[error("Inventory arrays have mismatched lengths (code 9)")]
    LengthMismatch {},

    #[error("Collection maximum of {maximum} reached (code 10)")]
    CapacityExceeded { maximum: u64 },

    #[error("Uri {uri} is already in the inventory (code 11)")]
    DuplicateUri { uri: String },

    #[error("Collection or mint configuration is not initialized (code 12)")]
    ConfigNotInitialized {},

    #[error("Mint amount must be greater than zero (code 21)")]
    InvalidMintAmount {},

    #[error("Minting is closed (code 13)")]
    MintingClosed {},

    #[error("Address is not whitelisted for stage {stage_index} (code 14)")]
    NotWhitelisted { stage_index: u32 },

    #[error("No allowance entry (code 20)")]
    AllowanceNotFound {},

    #[error("Requested {requested} exceeds remaining allowance {remaining} (code 15)")]
    ExceedsAllowance { requested: u64, remaining: u64 },

    #[error("Requested {requested} certificates but inventory holds {available} (code 16)")]
    InsufficientInventory { requested: u64, available: u64 },

    #[error("Incorrect payment amount (code 22)")]
    IncorrectPaymentAmount { expected: Uint128, sent: Uint128 },

    #[error("Reveal has not started yet (code 17)")]
    RevealNotStarted {
        reveal_time: Timestamp,
        current_time: Timestamp,
    },

    #[error("Certificate {certificate_id} is not held by the sender (code 18)")]
    CertificateNotHeld { certificate_id: String },

    #[error("Inventory is empty (code 19)")]
    InventoryEmpty {},

    #[error("Unknown reply id {id} (code 24)")]
    UnknownReplyId { id: u64 },
}

/// Broad classes of failure. Every one of them aborts only the operation that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authorization,
    Configuration,
    Timing,
    Capacity,
    Duplicate,
    NotFound,
    Payment,
    Internal,
}

impl ContractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::Unauthorized {} => ErrorKind::Authorization,
            ContractError::InvalidRoyalty {}
            | ContractError::AlreadyCreated {}
            | ContractError::InvalidWindow { .. }
            | ContractError::LengthMismatch {}
            | ContractError::ConfigNotInitialized {}
            | ContractError::InvalidMintAmount {}
            | ContractError::TokenDetailsError(_)
            | ContractError::CollectionDetailsError(_)
            | ContractError::CertificateDetailsError(_) => ErrorKind::Configuration,
            ContractError::InvalidTime {}
            | ContractError::UpdateAfterClose { .. }
            | ContractError::MintingClosed {}
            | ContractError::RevealNotStarted { .. } => ErrorKind::Timing,
            ContractError::CapacityExceeded { .. }
            | ContractError::ExceedsAllowance { .. }
            | ContractError::InsufficientInventory { .. } => ErrorKind::Capacity,
            ContractError::DuplicateUri { .. } => ErrorKind::Duplicate,
            ContractError::InvalidStageIndex { .. }
            | ContractError::UnknownAccount { .. }
            | ContractError::NotWhitelisted { .. }
            | ContractError::AllowanceNotFound {}
            | ContractError::CertificateNotHeld { .. }
            | ContractError::InventoryEmpty {} => ErrorKind::NotFound,
            ContractError::PaymentError(_)
            | ContractError::InvalidCreationFee { .. }
            | ContractError::IncorrectPaymentAmount { .. } => ErrorKind::Payment,
            ContractError::Std(_)
            | ContractError::ParseReplyError(_)
            | ContractError::Overflow(_)
            | ContractError::UnknownReplyId { .. } => ErrorKind::Internal,
        }
    }

    /// Stable abort code, one per failure kind, also carried in the error message.
    /// Wrapped library errors share code 0.
    pub fn code(&self) -> u32 {
        match self {
            ContractError::Unauthorized {} => 1,
            ContractError::InvalidRoyalty {} => 2,
            ContractError::AlreadyCreated {} => 3,
            ContractError::InvalidTime {} => 4,
            ContractError::InvalidWindow { .. } => 5,
            ContractError::InvalidStageIndex { .. } => 6,
            ContractError::UpdateAfterClose { .. } => 7,
            ContractError::UnknownAccount { .. } => 8,
            ContractError::LengthMismatch {} => 9,
            ContractError::CapacityExceeded { .. } => 10,
            ContractError::DuplicateUri { .. } => 11,
            ContractError::ConfigNotInitialized {} => 12,
            ContractError::MintingClosed {} => 13,
            ContractError::NotWhitelisted { .. } => 14,
            ContractError::ExceedsAllowance { .. } => 15,
            ContractError::InsufficientInventory { .. } => 16,
            ContractError::RevealNotStarted { .. } => 17,
            ContractError::CertificateNotHeld { .. } => 18,
            ContractError::InventoryEmpty {} => 19,
            ContractError::AllowanceNotFound {} => 20,
            ContractError::InvalidMintAmount {} => 21,
            ContractError::IncorrectPaymentAmount { .. } => 22,
            ContractError::InvalidCreationFee { .. } => 23,
            ContractError::UnknownReplyId { .. } => 24,
            ContractError::Std(_)
            | ContractError::TokenDetailsError(_)
            | ContractError::CollectionDetailsError(_)
            | ContractError::CertificateDetailsError(_)
            | ContractError::PaymentError(_)
            | ContractError::ParseReplyError(_)
            | ContractError::Overflow(_) => 0,
        }
    }
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::generic_err(format!("{:?}: {}", err.kind(), err))
    }
}

impl From<SerdeError> for ContractError {
    fn from(err: SerdeError) -> ContractError {
        ContractError::Std(StdError::generic_err(err.to_string()))
    }
}
