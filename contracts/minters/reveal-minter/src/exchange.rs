use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, Deps, Env, Event, Response, StdError, Storage, Timestamp,
    WasmMsg,
};
use cw721::{Cw721QueryMsg, OwnerOfResponse};
use minter_types::{
    certificate_details::certificate_suffix,
    collection_details::CollectionDetails,
    token_details::TokenDetails,
    utils::{generate_reveal_mint_message, RevealedToken},
};

use crate::error::ContractError;
use crate::msg::CertificateCollectionExecuteMsg;
use crate::state::{
    RevealConfig, CERTIFICATE_COLLECTION, COLLECTION, INVENTORY, REVEAL, TOKEN_DETAILS,
};
use crate::utils::{random_seed, revealed_name};

/// Everything an exchange needs from setup.
pub struct ExchangeConfig {
    pub collection: CollectionDetails,
    pub token_details: TokenDetails,
    pub certificate_collection: Addr,
    pub reveal: RevealConfig,
}

pub fn load_config(store: &dyn Storage) -> Result<ExchangeConfig, ContractError> {
    let (Some(collection), Some(token_details), Some(certificate_collection), Some(reveal)) = (
        COLLECTION.may_load(store)?,
        TOKEN_DETAILS.may_load(store)?,
        CERTIFICATE_COLLECTION.may_load(store)?,
        REVEAL.may_load(store)?,
    ) else {
        return Err(ContractError::ConfigNotInitialized {});
    };
    Ok(ExchangeConfig {
        collection,
        token_details,
        certificate_collection,
        reveal,
    })
}

pub fn check_reveal(reveal: &RevealConfig, now: Timestamp) -> Result<(), ContractError> {
    if now <= reveal.reveal_time {
        return Err(ContractError::RevealNotStarted {
            reveal_time: reveal.reveal_time,
            current_time: now,
        });
    }
    Ok(())
}

// Contract query failures reach us as generic errors wrapping the callee's message
fn is_not_found(err: &StdError) -> bool {
    match err {
        StdError::NotFound { .. } => true,
        StdError::GenericErr { msg, .. } => msg.contains("not found"),
        _ => false,
    }
}

/// Asks the certificate collection who owns `certificate_id`. A missing token means the
/// certificate is not held, any other query failure is passed through.
pub fn verify_holder(
    deps: Deps,
    certificate_collection: &Addr,
    claimant: &Addr,
    certificate_id: &str,
) -> Result<(), ContractError> {
    let not_held = || ContractError::CertificateNotHeld {
        certificate_id: certificate_id.to_string(),
    };
    let owner: OwnerOfResponse = deps
        .querier
        .query_wasm_smart(
            certificate_collection,
            &Cw721QueryMsg::OwnerOf {
                token_id: certificate_id.to_string(),
                include_expired: None,
            },
        )
        .map_err(|err| {
            if is_not_found(&err) {
                not_held()
            } else {
                ContractError::Std(err)
            }
        })?;
    if owner.owner != claimant.as_str() {
        return Err(not_held());
    }
    Ok(())
}

/// Draws one inventory entry for a verified certificate, burns the certificate and
/// mints the drawn asset to `claimant`.
pub fn redeem(
    store: &mut dyn Storage,
    env: &Env,
    config: &ExchangeConfig,
    claimant: Addr,
    certificate_id: String,
) -> Result<Response, ContractError> {
    let suffix =
        certificate_suffix(&certificate_id).ok_or_else(|| ContractError::CertificateNotHeld {
            certificate_id: certificate_id.clone(),
        })?;

    let seed = random_seed(env, &certificate_id);
    let descriptor = INVENTORY.take_random(store, seed)?;
    let remaining = INVENTORY.len(store)?;

    let burn_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.certificate_collection.to_string(),
        msg: to_json_binary(&CertificateCollectionExecuteMsg::Burn {
            token_id: certificate_id.clone(),
        })?,
        funds: vec![],
    });

    let name = revealed_name(&config.token_details.token_name, suffix);
    let mint_msg: CosmosMsg = generate_reveal_mint_message(
        &config.collection,
        &config.token_details,
        RevealedToken {
            onft_id: suffix.to_string(),
            name: name.clone(),
            media_uri: descriptor.uri.clone(),
            certificate_id: certificate_id.clone(),
            properties: descriptor.properties(),
        },
        env.contract.address.clone(),
        claimant.clone(),
    )?
    .into();

    let event = Event::new("certificate_exchanged")
        .add_attribute("certificate_id", certificate_id.clone())
        .add_attribute("owner", claimant.to_string())
        .add_attribute("token_id", suffix.to_string())
        .add_attribute("name", name)
        .add_attribute("uri", descriptor.uri);

    Ok(Response::new()
        .add_message(burn_msg)
        .add_message(mint_msg)
        .add_event(event)
        .add_attribute("action", "exchange")
        .add_attribute("certificate_id", certificate_id)
        .add_attribute("collection_id", config.collection.id.clone())
        .add_attribute("inventory_remaining", remaining.to_string()))
}
