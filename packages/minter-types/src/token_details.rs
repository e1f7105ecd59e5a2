use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TokenDetailsError {
    #[error("Invalid royalty ratio")]
    InvalidRoyaltyRatio {},
    #[error("Preview uri too long")]
    PreviewUriTooLong {},
    #[error("Preview uri too short")]
    PreviewUriTooShort {},
    #[error("Token description too long")]
    TokenDescriptionTooLong {},
    #[error("Token name too long")]
    TokenNameTooLong {},
    #[error("Token name too short")]
    TokenNameTooShort {},
    #[error("Data too long")]
    DataTooLong {},
}

#[cw_serde]
pub struct TokenDetails {
    // Destination base name. Each revealed token is named "{token_name}: {certificate number}"
    pub token_name: String,
    pub data: Option<String>,
    pub description: Option<String>,
    // Mutability flags forwarded to every minted onft
    pub transferable: bool,
    pub extensible: bool,
    pub nsfw: bool,
    pub royalty_ratio: Decimal,
    // Used as preview for every revealed token. Falls back to the drawn asset uri
    pub preview_uri: Option<String>,
}

impl TokenDetails {
    pub fn check_integrity(&self) -> Result<(), TokenDetailsError> {
        if self.royalty_ratio > Decimal::one() {
            return Err(TokenDetailsError::InvalidRoyaltyRatio {});
        }
        if let Some(preview_uri) = &self.preview_uri {
            if preview_uri.chars().count() > 256 {
                return Err(TokenDetailsError::PreviewUriTooLong {});
            }
            if preview_uri.chars().count() < 3 {
                return Err(TokenDetailsError::PreviewUriTooShort {});
            }
        }
        if let Some(description) = &self.description {
            if description.chars().count() > 4096 {
                return Err(TokenDetailsError::TokenDescriptionTooLong {});
            }
        }
        if self.token_name.chars().count() > 256 {
            return Err(TokenDetailsError::TokenNameTooLong {});
        }
        if self.token_name.chars().count() < 3 {
            return Err(TokenDetailsError::TokenNameTooShort {});
        }
        if let Some(data) = &self.data {
            if data.chars().count() > 4096 {
                return Err(TokenDetailsError::DataTooLong {});
            }
        }
        Ok(())
    }
}

#[cw_serde]
pub struct AssetProperty {
    pub key: String,
    pub value: String,
    pub value_type: String,
}

// Stored as json in the data field of each revealed onft
#[cw_serde]
pub struct RevealedNftData {
    pub creator_token_data: String,
    pub certificate_id: String,
    pub properties: Vec<AssetProperty>,
}
