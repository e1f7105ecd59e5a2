use cosmwasm_schema::cw_serde;
use thiserror::Error;

/// Separates the certificate base name from its sequence number.
pub const CERTIFICATE_SEPARATOR: char = '#';

#[derive(Error, Debug, PartialEq)]
pub enum CertificateDetailsError {
    #[error("Invalid certificate code id")]
    InvalidCodeId {},
    #[error("Certificate name too short")]
    NameTooShort {},
    #[error("Certificate symbol too short")]
    SymbolTooShort {},
    #[error("Certificate base name is invalid")]
    InvalidBaseName {},
    #[error("Certificate token uri too long")]
    TokenUriTooLong {},
}

// Source collection. Instantiated as a cw721 contract with the minter as its only minter.
#[cw_serde]
pub struct CertificateDetails {
    pub code_id: u64,
    pub name: String,
    pub symbol: String,
    // Each certificate is named "{base_name}#{sequence}"
    pub base_name: String,
    pub token_uri: Option<String>,
}

impl CertificateDetails {
    pub fn check_integrity(&self) -> Result<(), CertificateDetailsError> {
        if self.code_id == 0 {
            return Err(CertificateDetailsError::InvalidCodeId {});
        }
        if self.name.chars().count() < 3 {
            return Err(CertificateDetailsError::NameTooShort {});
        }
        if self.symbol.chars().count() < 3 {
            return Err(CertificateDetailsError::SymbolTooShort {});
        }
        if self.base_name.is_empty()
            || self.base_name.chars().count() > 128
            || self.base_name.contains(CERTIFICATE_SEPARATOR)
        {
            return Err(CertificateDetailsError::InvalidBaseName {});
        }
        if let Some(token_uri) = &self.token_uri {
            if token_uri.chars().count() > 256 {
                return Err(CertificateDetailsError::TokenUriTooLong {});
            }
        }
        Ok(())
    }

    pub fn certificate_id(&self, sequence: u64) -> String {
        format!("{}{}{}", self.base_name, CERTIFICATE_SEPARATOR, sequence)
    }
}

/// Returns the sequence number following the last separator, if the id carries one.
pub fn certificate_suffix(certificate_id: &str) -> Option<u64> {
    let (_, suffix) = certificate_id.rsplit_once(CERTIFICATE_SEPARATOR)?;
    suffix.parse::<u64>().ok()
}
