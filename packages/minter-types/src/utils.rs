use crate::collection_details::CollectionDetails;
use crate::token_details::{AssetProperty, RevealedNftData, TokenDetails};
use cosmwasm_std::{Addr, Coin, Decimal, QuerierWrapper, StdError, Uint128};
use omniflix_std::types::omniflix::onft::v1beta1::{
    Metadata, MsgCreateDenom, MsgMintOnft, OnftQuerier, WeightedAddress,
};
use std::str::FromStr;

/// Everything needed to mint one revealed token.
pub struct RevealedToken {
    pub onft_id: String,
    pub name: String,
    pub media_uri: String,
    pub certificate_id: String,
    pub properties: Vec<AssetProperty>,
}

pub fn generate_reveal_mint_message(
    collection: &CollectionDetails,
    token_details: &TokenDetails,
    token: RevealedToken,
    minter_address: Addr,
    recipient: Addr,
) -> Result<MsgMintOnft, serde_json::Error> {
    let data = RevealedNftData {
        creator_token_data: token_details.data.clone().unwrap_or_default(),
        certificate_id: token.certificate_id,
        properties: token.properties,
    };
    let json_data = serde_json::to_string(&data)?;
    let metadata = Metadata {
        name: token.name,
        description: token_details.description.clone().unwrap_or_default(),
        preview_uri: token_details
            .preview_uri
            .clone()
            .unwrap_or(token.media_uri.clone()),
        media_uri: token.media_uri,
        uri_hash: collection.uri_hash.clone().unwrap_or_default(),
    };

    Ok(MsgMintOnft {
        data: json_data,
        id: token.onft_id,
        metadata: Some(metadata),
        denom_id: collection.id.clone(),
        transferable: token_details.transferable,
        sender: minter_address.into_string(),
        extensible: token_details.extensible,
        nsfw: token_details.nsfw,
        recipient: recipient.into_string(),
        royalty_share: token_details.royalty_ratio.atomics().to_string(),
    })
}

pub fn generate_create_denom_msg(
    collection: &CollectionDetails,
    minter_address: Addr,
    creation_fee: Coin,
    payment_collector: Addr,
) -> Result<MsgCreateDenom, StdError> {
    // Weights are sent to the chain as decimal atomics
    let royalty_receivers = match &collection.royalty_receivers {
        Some(receivers) => receivers
            .iter()
            .map(|r| {
                let atomics_weight = Decimal::from_str(&r.weight)?.atomics().to_string();
                Ok(WeightedAddress {
                    address: r.address.clone(),
                    weight: atomics_weight,
                })
            })
            .collect::<Result<Vec<WeightedAddress>, StdError>>()?,
        None => vec![WeightedAddress {
            address: payment_collector.into_string(),
            weight: Decimal::one().atomics().to_string(),
        }],
    };

    Ok(MsgCreateDenom {
        creation_fee: Some(creation_fee.into()),
        id: collection.id.clone(),
        symbol: collection.symbol.clone(),
        name: collection.collection_name.clone(),
        description: collection.description.clone().unwrap_or_default(),
        preview_uri: collection.preview_uri.clone().unwrap_or_default(),
        schema: collection.schema.clone().unwrap_or_default(),
        sender: minter_address.into_string(),
        uri: collection.uri.clone().unwrap_or_default(),
        uri_hash: collection.uri_hash.clone().unwrap_or_default(),
        data: collection.data.clone().unwrap_or_default(),
        royalty_receivers,
    })
}

pub fn check_collection_creation_fee(querier: QuerierWrapper) -> Result<Coin, StdError> {
    let onft_querier = OnftQuerier::new(&querier);
    let params = onft_querier.params()?;
    let creation_fee = params
        .params
        .and_then(|params| params.denom_creation_fee)
        .ok_or_else(|| StdError::generic_err("Denom creation fee not set"))?;
    Ok(Coin {
        denom: creation_fee.denom,
        amount: Uint128::from_str(&creation_fee.amount)?,
    })
}
