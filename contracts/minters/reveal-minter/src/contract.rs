#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    from_json, to_json_binary, Addr, BankMsg, Binary, CosmosMsg, Decimal, Deps, DepsMut, Env,
    MessageInfo, Reply, Response, StdResult, Storage, SubMsg, Timestamp, WasmMsg,
};
use cw2::set_contract_version;
use cw721::Cw721ReceiveMsg;
use cw_utils::{maybe_addr, may_pay, nonpayable, parse_reply_instantiate_data};
use minter_types::{
    certificate_details::CertificateDetails,
    collection_details::CollectionDetails,
    token_details::TokenDetails,
    types::{AuthDetails, CollectionCaps},
    utils::{check_collection_creation_fee, generate_create_denom_msg},
};

use crate::error::ContractError;
use crate::exchange::{check_reveal, load_config, redeem, verify_holder};
use crate::gate::{
    authorize, check_inventory, check_payment, commit, current_phase, issue_certificates,
    MintPhase,
};
use crate::inventory::AssetDescriptor;
use crate::msg::{
    ActivePhase, AllowanceResponse, CertificateCollectionInstantiateMsg, ExecuteMsg,
    InstantiateMsg, InventoryEntry, MintPriceResponse, QueryMsg, ReceiveMsg, StageResponse,
};
use crate::stage::WhitelistStage;
use crate::state::{
    PublicMintConfig, RevealConfig, AUTH_DETAILS, CERTIFICATE_COLLECTION, CERTIFICATE_COUNTER,
    CERTIFICATE_DETAILS, COLLECTION, COLLECTION_CAPS, INVENTORY, PUBLIC_ALLOWANCES, PUBLIC_MINT,
    REVEAL, STAGES, TOKEN_DETAILS,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:omniflix-reveal-minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const INSTANTIATE_CERTIFICATE_REPLY_ID: u64 = 1;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    nonpayable(&info)?;

    let admin = maybe_addr(deps.api, msg.admin)?.unwrap_or(info.sender.clone());
    let payment_collector =
        maybe_addr(deps.api, msg.payment_collector)?.unwrap_or(info.sender.clone());

    let auth_details = AuthDetails {
        admin: admin.clone(),
        payment_collector: payment_collector.clone(),
    };
    auth_details.validate(&deps.as_ref())?;
    AUTH_DETAILS.save(deps.storage, &auth_details)?;
    CERTIFICATE_COUNTER.save(deps.storage, &1)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("payment_collector", payment_collector))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ConfigureTreasury { payment_collector } => {
            execute_configure_treasury(deps, env, info, payment_collector)
        }
        ExecuteMsg::CreateCollection {
            collection_details,
            token_details,
            certificate_details,
            collection_maximum,
            public_mint_limit,
        } => execute_create_collection(
            deps,
            env,
            info,
            collection_details,
            token_details,
            certificate_details,
            CollectionCaps {
                collection_maximum,
                public_mint_limit,
            },
        ),
        ExecuteMsg::ConfigurePublicAndReveal {
            start_time,
            end_time,
            mint_price,
            reveal_time,
        } => execute_configure_public_and_reveal(
            deps,
            env,
            info,
            PublicMintConfig {
                start_time,
                end_time,
                mint_price,
            },
            reveal_time,
        ),
        ExecuteMsg::AddWhitelistStage {
            start_time,
            end_time,
            mint_price,
            stage_index,
        } => execute_add_whitelist_stage(
            deps,
            env,
            info,
            WhitelistStage {
                start_time,
                end_time,
                mint_price,
            },
            stage_index,
        ),
        ExecuteMsg::AddWhitelistAddresses {
            addresses,
            limit,
            stage_index,
        } => execute_add_whitelist_addresses(deps, env, info, addresses, limit, stage_index),
        ExecuteMsg::AddInventory {
            uris,
            property_keys,
            property_values,
            property_types,
        } => execute_add_inventory(
            deps,
            env,
            info,
            uris,
            property_keys,
            property_values,
            property_types,
        ),
        ExecuteMsg::MintCertificate { amount } => execute_mint_certificate(deps, env, info, amount),
        ExecuteMsg::Exchange { certificate_id } => {
            execute_exchange(deps, env, info, certificate_id)
        }
        ExecuteMsg::ReceiveNft(receive_msg) => execute_receive_nft(deps, env, info, receive_msg),
    }
}

fn assert_admin(store: &dyn Storage, sender: &Addr) -> Result<AuthDetails, ContractError> {
    let auth_details = AUTH_DETAILS.load(store)?;
    if auth_details.admin != *sender {
        return Err(ContractError::Unauthorized {});
    }
    Ok(auth_details)
}

fn validate_account(deps: Deps, address: &str) -> Result<Addr, ContractError> {
    deps.api
        .addr_validate(address)
        .map_err(|_| ContractError::UnknownAccount {
            address: address.to_string(),
        })
}

pub fn execute_configure_treasury(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    payment_collector: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut auth_details = assert_admin(deps.storage, &info.sender)?;
    let payment_collector = validate_account(deps.as_ref(), &payment_collector)?;

    auth_details.payment_collector = payment_collector.clone();
    AUTH_DETAILS.save(deps.storage, &auth_details)?;

    Ok(Response::new()
        .add_attribute("action", "configure_treasury")
        .add_attribute("payment_collector", payment_collector))
}

pub fn execute_create_collection(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collection_details: CollectionDetails,
    token_details: TokenDetails,
    certificate_details: CertificateDetails,
    caps: CollectionCaps,
) -> Result<Response, ContractError> {
    let auth_details = assert_admin(deps.storage, &info.sender)?;
    if COLLECTION.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyCreated {});
    }

    collection_details
        .check_royalty_receivers()
        .map_err(|_| ContractError::InvalidRoyalty {})?;
    if let Some(receivers) = &collection_details.royalty_receivers {
        for receiver in receivers {
            deps.api
                .addr_validate(&receiver.address)
                .map_err(|_| ContractError::InvalidRoyalty {})?;
        }
    }
    if token_details.royalty_ratio > Decimal::one() {
        return Err(ContractError::InvalidRoyalty {});
    }
    collection_details.check_integrity()?;
    token_details.check_integrity()?;
    certificate_details.check_integrity()?;

    // The denom creation fee is forwarded to the onft module
    let creation_fee = check_collection_creation_fee(deps.querier)?;
    let sent = may_pay(&info, &creation_fee.denom)?;
    if sent != creation_fee.amount {
        return Err(ContractError::InvalidCreationFee {
            expected: vec![creation_fee],
            sent: info.funds,
        });
    }

    COLLECTION.save(deps.storage, &collection_details)?;
    TOKEN_DETAILS.save(deps.storage, &token_details)?;
    CERTIFICATE_DETAILS.save(deps.storage, &certificate_details)?;
    COLLECTION_CAPS.save(deps.storage, &caps)?;

    let collection_creation_msg: CosmosMsg = generate_create_denom_msg(
        &collection_details,
        env.contract.address.clone(),
        creation_fee,
        auth_details.payment_collector,
    )?
    .into();

    let certificate_collection_msg = SubMsg::reply_on_success(
        WasmMsg::Instantiate {
            admin: Some(auth_details.admin.into_string()),
            code_id: certificate_details.code_id,
            msg: to_json_binary(&CertificateCollectionInstantiateMsg {
                name: certificate_details.name.clone(),
                symbol: certificate_details.symbol.clone(),
                minter: env.contract.address.into_string(),
            })?,
            funds: vec![],
            label: format!("{} certificates", collection_details.id),
        },
        INSTANTIATE_CERTIFICATE_REPLY_ID,
    );

    Ok(Response::new()
        .add_message(collection_creation_msg)
        .add_submessage(certificate_collection_msg)
        .add_attribute("action", "create_collection")
        .add_attribute("collection_id", collection_details.id)
        .add_attribute("collection_maximum", caps.collection_maximum.to_string())
        .add_attribute("public_mint_limit", caps.public_mint_limit.to_string()))
}

pub fn execute_configure_public_and_reveal(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    public_mint: PublicMintConfig,
    reveal_time: Timestamp,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_admin(deps.storage, &info.sender)?;

    if public_mint.start_time < env.block.time
        || public_mint.start_time >= public_mint.end_time
        || reveal_time < public_mint.end_time
    {
        return Err(ContractError::InvalidTime {});
    }

    PUBLIC_MINT.save(deps.storage, &public_mint)?;
    REVEAL.save(deps.storage, &RevealConfig { reveal_time })?;

    Ok(Response::new()
        .add_attribute("action", "configure_public_and_reveal")
        .add_attribute("start_time", public_mint.start_time.to_string())
        .add_attribute("end_time", public_mint.end_time.to_string())
        .add_attribute("mint_price", public_mint.mint_price.to_string())
        .add_attribute("reveal_time", reveal_time.to_string()))
}

pub fn execute_add_whitelist_stage(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    stage: WhitelistStage,
    stage_index: u32,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_admin(deps.storage, &info.sender)?;

    let mint_price = stage.mint_price.clone();
    let stage_index = STAGES.add_stage(deps.storage, stage, stage_index)?;

    Ok(Response::new()
        .add_attribute("action", "add_whitelist_stage")
        .add_attribute("stage_index", stage_index.to_string())
        .add_attribute("mint_price", mint_price.to_string()))
}

pub fn execute_add_whitelist_addresses(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    addresses: Vec<String>,
    limit: u64,
    stage_index: u32,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_admin(deps.storage, &info.sender)?;

    let addresses = addresses
        .iter()
        .map(|address| validate_account(deps.as_ref(), address))
        .collect::<Result<Vec<Addr>, ContractError>>()?;
    STAGES.grant(deps.storage, env.block.time, stage_index, &addresses, limit)?;

    Ok(Response::new()
        .add_attribute("action", "add_whitelist_addresses")
        .add_attribute("stage_index", stage_index.to_string())
        .add_attribute("count", addresses.len().to_string())
        .add_attribute("limit", limit.to_string()))
}

pub fn execute_add_inventory(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    uris: Vec<String>,
    property_keys: Vec<Vec<String>>,
    property_values: Vec<Vec<String>>,
    property_types: Vec<Vec<String>>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_admin(deps.storage, &info.sender)?;
    let caps = COLLECTION_CAPS
        .may_load(deps.storage)?
        .ok_or(ContractError::ConfigNotInitialized {})?;

    if uris.len() != property_keys.len()
        || uris.len() != property_values.len()
        || uris.len() != property_types.len()
    {
        return Err(ContractError::LengthMismatch {});
    }
    let descriptors = uris
        .into_iter()
        .zip(property_keys)
        .zip(property_values)
        .zip(property_types)
        .map(|(((uri, keys), values), types)| {
            if keys.len() != values.len() || keys.len() != types.len() {
                return Err(ContractError::LengthMismatch {});
            }
            Ok(AssetDescriptor {
                uri,
                property_keys: keys,
                property_values: values,
                property_types: types,
            })
        })
        .collect::<Result<Vec<AssetDescriptor>, ContractError>>()?;

    let added = descriptors.len();
    let mut len = INVENTORY.len(deps.storage)?;
    for descriptor in descriptors {
        len = INVENTORY.add(deps.storage, descriptor, caps.collection_maximum)?;
    }

    Ok(Response::new()
        .add_attribute("action", "add_inventory")
        .add_attribute("added", added.to_string())
        .add_attribute("inventory_size", len.to_string()))
}

pub fn execute_mint_certificate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: u64,
) -> Result<Response, ContractError> {
    let (Some(auth_details), Some(certificate_details), Some(certificate_collection), Some(caps), Some(public_mint)) = (
        AUTH_DETAILS.may_load(deps.storage)?,
        CERTIFICATE_DETAILS.may_load(deps.storage)?,
        CERTIFICATE_COLLECTION.may_load(deps.storage)?,
        COLLECTION_CAPS.may_load(deps.storage)?,
        PUBLIC_MINT.may_load(deps.storage)?,
    ) else {
        return Err(ContractError::ConfigNotInitialized {});
    };
    if amount == 0 {
        return Err(ContractError::InvalidMintAmount {});
    }

    let claimant = info.sender.clone();
    let authorization = authorize(
        deps.storage,
        env.block.time,
        &claimant,
        amount,
        &public_mint,
        &caps,
    )?;
    let first_sequence = check_inventory(deps.storage, amount)?;
    let total = check_payment(&info, &authorization.price, amount)?;

    commit(deps.storage, &claimant, &authorization, amount, &caps)?;
    let (mut messages, events) = issue_certificates(
        deps.storage,
        &certificate_collection,
        &certificate_details,
        &claimant,
        amount,
    )?;

    if !total.amount.is_zero() {
        let bank_msg: CosmosMsg = CosmosMsg::Bank(BankMsg::Send {
            to_address: auth_details.payment_collector.into_string(),
            amount: vec![total.clone()],
        });
        messages.push(bank_msg);
    }

    let phase = match authorization.phase {
        MintPhase::Whitelist { stage_index } => format!("whitelist_{}", stage_index),
        MintPhase::Public { .. } => "public".to_string(),
    };

    Ok(Response::new()
        .add_messages(messages)
        .add_events(events)
        .add_attribute("action", "mint_certificate")
        .add_attribute("minter", claimant)
        .add_attribute("amount", amount.to_string())
        .add_attribute("first_sequence", first_sequence.to_string())
        .add_attribute("phase", phase)
        .add_attribute("total_paid", total.to_string()))
}

pub fn execute_exchange(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    certificate_id: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = load_config(deps.storage)?;
    check_reveal(&config.reveal, env.block.time)?;
    verify_holder(
        deps.as_ref(),
        &config.certificate_collection,
        &info.sender,
        &certificate_id,
    )?;
    redeem(deps.storage, &env, &config, info.sender, certificate_id)
}

pub fn execute_receive_nft(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receive_msg: Cw721ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = load_config(deps.storage)?;
    check_reveal(&config.reveal, env.block.time)?;
    // Only the certificate collection can vouch that the token was moved here
    if info.sender != config.certificate_collection {
        return Err(ContractError::CertificateNotHeld {
            certificate_id: receive_msg.token_id,
        });
    }
    let claimant = deps.api.addr_validate(&receive_msg.sender)?;
    let receive: ReceiveMsg = from_json(&receive_msg.msg)?;
    match receive {
        ReceiveMsg::Exchange {} => {
            redeem(deps.storage, &env, &config, claimant, receive_msg.token_id)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_CERTIFICATE_REPLY_ID => {
            let res = parse_reply_instantiate_data(msg)?;
            let certificate_collection = deps.api.addr_validate(&res.contract_address)?;
            CERTIFICATE_COLLECTION.save(deps.storage, &certificate_collection)?;
            Ok(Response::new()
                .add_attribute("action", "certificate_collection_instantiated")
                .add_attribute("certificate_collection", certificate_collection))
        }
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::AuthDetails {} => to_json_binary(&AUTH_DETAILS.load(deps.storage)?),
        QueryMsg::Collection {} => to_json_binary(&COLLECTION.load(deps.storage)?),
        QueryMsg::TokenDetails {} => to_json_binary(&TOKEN_DETAILS.load(deps.storage)?),
        QueryMsg::CertificateDetails {} => {
            to_json_binary(&CERTIFICATE_DETAILS.load(deps.storage)?)
        }
        QueryMsg::CollectionCaps {} => to_json_binary(&COLLECTION_CAPS.load(deps.storage)?),
        QueryMsg::PublicMint {} => to_json_binary(&PUBLIC_MINT.load(deps.storage)?),
        QueryMsg::Reveal {} => to_json_binary(&REVEAL.load(deps.storage)?),
        QueryMsg::CertificateCollection {} => {
            to_json_binary(&CERTIFICATE_COLLECTION.load(deps.storage)?)
        }
        QueryMsg::CertificateCounter {} => {
            to_json_binary(&CERTIFICATE_COUNTER.load(deps.storage)?)
        }
        QueryMsg::Stages {} => to_json_binary(&query_stages(deps)?),
        QueryMsg::Stage { stage_index } => to_json_binary(&query_stage(deps, stage_index)?),
        QueryMsg::ActiveStage {} => to_json_binary(&query_active_stage(deps, env)?),
        QueryMsg::StageMembers {
            stage_index,
            start_after,
            limit,
        } => to_json_binary(&query_stage_members(
            deps,
            stage_index,
            start_after,
            limit,
        )?),
        QueryMsg::WhitelistAllowance {
            stage_index,
            address,
        } => to_json_binary(&query_whitelist_allowance(deps, stage_index, address)?),
        QueryMsg::PublicAllowance { address } => {
            to_json_binary(&query_public_allowance(deps, address)?)
        }
        QueryMsg::MintPrice {} => to_json_binary(&query_mint_price(deps, env)?),
        QueryMsg::Inventory { start_after, limit } => {
            to_json_binary(&query_inventory(deps, start_after, limit)?)
        }
        QueryMsg::InventorySize {} => to_json_binary(&INVENTORY.len(deps.storage)?),
    }
}

fn query_stages(deps: Deps) -> Result<Vec<StageResponse>, ContractError> {
    let stages = STAGES
        .load_all(deps.storage)?
        .into_iter()
        .map(|(stage_index, stage)| StageResponse { stage_index, stage })
        .collect();
    Ok(stages)
}

fn query_stage(deps: Deps, stage_index: u32) -> Result<WhitelistStage, ContractError> {
    STAGES.load(deps.storage, stage_index)
}

fn query_active_stage(deps: Deps, env: Env) -> Result<Option<StageResponse>, ContractError> {
    let active = STAGES
        .active_stage_index(deps.storage, env.block.time)?
        .map(|(stage_index, stage)| StageResponse { stage_index, stage });
    Ok(active)
}

fn query_stage_members(
    deps: Deps,
    stage_index: u32,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<Vec<AllowanceResponse>, ContractError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = maybe_addr(deps.api, start_after)?;
    let members = STAGES
        .allowances
        .members(deps.storage, stage_index, start_after, limit)?
        .into_iter()
        .map(|(address, remaining)| AllowanceResponse { address, remaining })
        .collect();
    Ok(members)
}

fn query_whitelist_allowance(
    deps: Deps,
    stage_index: u32,
    address: String,
) -> Result<Option<u64>, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let remaining = STAGES
        .allowances
        .remaining(deps.storage, (stage_index, address))?;
    Ok(remaining)
}

fn query_public_allowance(deps: Deps, address: String) -> Result<Option<u64>, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let caps = COLLECTION_CAPS.load(deps.storage)?;
    if caps.public_mint_limit == 0 {
        return Ok(None);
    }
    // Untracked addresses still have the full limit
    let remaining = PUBLIC_ALLOWANCES
        .remaining(deps.storage, address)?
        .unwrap_or(caps.public_mint_limit);
    Ok(Some(remaining))
}

fn query_mint_price(deps: Deps, env: Env) -> Result<MintPriceResponse, ContractError> {
    let public_mint = PUBLIC_MINT.may_load(deps.storage)?;
    let response = match current_phase(deps.storage, env.block.time, public_mint.as_ref())? {
        Some((MintPhase::Whitelist { stage_index }, price)) => MintPriceResponse {
            phase: ActivePhase::Whitelist { stage_index },
            mint_price: Some(price),
        },
        Some((MintPhase::Public { .. }, price)) => MintPriceResponse {
            phase: ActivePhase::Public,
            mint_price: Some(price),
        },
        None => MintPriceResponse {
            phase: ActivePhase::Closed,
            mint_price: None,
        },
    };
    Ok(response)
}

fn query_inventory(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> Result<Vec<InventoryEntry>, ContractError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let entries = INVENTORY
        .page(deps.storage, start_after, limit)?
        .into_iter()
        .map(|(index, descriptor)| InventoryEntry { index, descriptor })
        .collect();
    Ok(entries)
}
