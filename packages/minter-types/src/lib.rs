pub mod certificate_details;
pub mod collection_details;
pub mod token_details;
pub mod types;
pub mod utils;
