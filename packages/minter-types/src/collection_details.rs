use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, StdError};
use omniflix_std::types::omniflix::onft::v1beta1::WeightedAddress;
use std::str::FromStr;
use thiserror::Error;

// Destination collection, created as an ONFT denom owned by the minter.
// FE: Collection:"Baby Tardigrades" each revealed token "Baby Tardigrade: 12"
#[cw_serde]
pub struct CollectionDetails {
    pub description: Option<String>,
    pub preview_uri: Option<String>,
    pub schema: Option<String>,
    pub uri: Option<String>,
    pub uri_hash: Option<String>,
    pub collection_name: String,
    pub data: Option<String>,
    pub symbol: String,
    pub id: String,
    // Royalty split. Weights are decimal strings and must add up to exactly one
    pub royalty_receivers: Option<Vec<WeightedAddress>>,
}

impl CollectionDetails {
    pub fn check_integrity(&self) -> Result<(), CollectionDetailsError> {
        if self.collection_name.chars().count() > 256 {
            return Err(CollectionDetailsError::InvalidCollectionName {});
        }
        if self.symbol.chars().count() > 256 {
            return Err(CollectionDetailsError::InvalidSymbol {});
        }
        if self.id.chars().count() < 3 || self.id.chars().count() > 64 {
            return Err(CollectionDetailsError::InvalidId {});
        }
        if let Some(description) = &self.description {
            if description.chars().count() > 4096 {
                return Err(CollectionDetailsError::InvalidDescription {});
            }
        }
        if let Some(preview_uri) = &self.preview_uri {
            if preview_uri.chars().count() > 256 {
                return Err(CollectionDetailsError::InvalidPreviewUri {});
            }
        }
        if let Some(schema) = &self.schema {
            if schema.chars().count() > 256 {
                return Err(CollectionDetailsError::InvalidSchema {});
            }
        }
        if let Some(uri) = &self.uri {
            if uri.chars().count() > 256 {
                return Err(CollectionDetailsError::InvalidUri {});
            }
        }
        if let Some(uri_hash) = &self.uri_hash {
            if uri_hash.chars().count() > 256 {
                return Err(CollectionDetailsError::InvalidUriHash {});
            }
        }
        if let Some(data) = &self.data {
            if data.chars().count() > 4096 {
                return Err(CollectionDetailsError::InvalidData {});
            }
        }
        Ok(())
    }

    /// Royalty receivers are optional. When given, every weight has to parse as a
    /// decimal within (0, 1] and all weights together must sum to one.
    pub fn check_royalty_receivers(&self) -> Result<(), CollectionDetailsError> {
        let receivers = match &self.royalty_receivers {
            Some(receivers) => receivers,
            None => return Ok(()),
        };
        if receivers.is_empty() {
            return Err(CollectionDetailsError::InvalidRoyaltyReceivers {});
        }
        let mut total = Decimal::zero();
        for receiver in receivers {
            let weight = Decimal::from_str(&receiver.weight)
                .map_err(|_| CollectionDetailsError::InvalidRoyaltyReceivers {})?;
            if weight.is_zero() || weight > Decimal::one() {
                return Err(CollectionDetailsError::InvalidRoyaltyReceivers {});
            }
            total = total
                .checked_add(weight)
                .map_err(|_| CollectionDetailsError::InvalidRoyaltyReceivers {})?;
        }
        if total != Decimal::one() {
            return Err(CollectionDetailsError::InvalidRoyaltyReceivers {});
        }
        Ok(())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CollectionDetailsError {
    #[error(transparent)]
    Std(#[from] StdError),
    #[error("Invalid collection name")]
    InvalidCollectionName {},
    #[error("Invalid symbol")]
    InvalidSymbol {},
    #[error("Invalid collection id")]
    InvalidId {},
    #[error("Invalid description")]
    InvalidDescription {},
    #[error("Invalid preview uri")]
    InvalidPreviewUri {},
    #[error("Invalid schema")]
    InvalidSchema {},
    #[error("Invalid uri")]
    InvalidUri {},
    #[error("Invalid uri hash")]
    InvalidUriHash {},
    #[error("Invalid data")]
    InvalidData {},
    #[error("Invalid royalty receivers")]
    InvalidRoyaltyReceivers {},
}
