use cosmwasm_std::{
    to_json_binary, Addr, Coin, CosmosMsg, Event, MessageInfo, Storage, Timestamp, Uint128,
    WasmMsg,
};
use cw_utils::may_pay;
use minter_types::{certificate_details::CertificateDetails, types::CollectionCaps};

use crate::error::ContractError;
use crate::msg::CertificateCollectionExecuteMsg;
use crate::state::{PublicMintConfig, CERTIFICATE_COUNTER, INVENTORY, PUBLIC_ALLOWANCES, STAGES};

#[derive(Debug, Clone, PartialEq)]
pub enum MintPhase {
    Whitelist { stage_index: u32 },
    // `None` when the public limit is disabled
    Public { remaining: Option<u64> },
}

/// Outcome of the read-only checks of one mint call. Nothing is written until
/// [`commit`] is called with it.
#[derive(Debug, Clone, PartialEq)]
pub struct MintAuthorization {
    pub phase: MintPhase,
    pub price: Coin,
}

/// Resolves the phase active at `now` without checking any allowance.
pub fn current_phase(
    store: &dyn Storage,
    now: Timestamp,
    public_mint: Option<&PublicMintConfig>,
) -> Result<Option<(MintPhase, Coin)>, ContractError> {
    if let Some((stage_index, stage)) = STAGES.active_stage_index(store, now)? {
        return Ok(Some((MintPhase::Whitelist { stage_index }, stage.mint_price)));
    }
    match public_mint {
        Some(public_mint) if public_mint.is_active(now) => Ok(Some((
            MintPhase::Public { remaining: None },
            public_mint.mint_price.clone(),
        ))),
        _ => Ok(None),
    }
}

pub fn authorize(
    store: &dyn Storage,
    now: Timestamp,
    claimant: &Addr,
    amount: u64,
    public_mint: &PublicMintConfig,
    caps: &CollectionCaps,
) -> Result<MintAuthorization, ContractError> {
    if !STAGES.is_any_stage_active(store, now)? && !public_mint.is_active(now) {
        return Err(ContractError::MintingClosed {});
    }

    if let Some((stage_index, stage)) = STAGES.active_stage_index(store, now)? {
        STAGES
            .allowances
            .check(store, (stage_index, claimant.clone()), amount)
            .map_err(|err| match err {
                ContractError::AllowanceNotFound {} => ContractError::NotWhitelisted { stage_index },
                err => err,
            })?;
        return Ok(MintAuthorization {
            phase: MintPhase::Whitelist { stage_index },
            price: stage.mint_price,
        });
    }

    // Between two stages with no public window open
    if !public_mint.is_active(now) {
        return Err(ContractError::MintingClosed {});
    }

    let remaining = if caps.public_mint_limit > 0 {
        let remaining = PUBLIC_ALLOWANCES
            .remaining(store, claimant.clone())?
            .unwrap_or(caps.public_mint_limit);
        if amount > remaining {
            return Err(ContractError::ExceedsAllowance {
                requested: amount,
                remaining,
            });
        }
        Some(remaining)
    } else {
        None
    };
    Ok(MintAuthorization {
        phase: MintPhase::Public { remaining },
        price: public_mint.mint_price.clone(),
    })
}

/// Fails unless `amount` more certificates still fit the inventory.
pub fn check_inventory(store: &dyn Storage, amount: u64) -> Result<u64, ContractError> {
    let counter = CERTIFICATE_COUNTER.load(store)?;
    let available = INVENTORY.len(store)?;
    let last_sequence = counter
        .checked_add(amount)
        .map(|sequence| sequence - 1)
        .ok_or(ContractError::InsufficientInventory {
            requested: amount,
            available,
        })?;
    if last_sequence > available {
        return Err(ContractError::InsufficientInventory {
            requested: amount,
            available,
        });
    }
    Ok(counter)
}

/// Exact payment of `price * amount` in the price denom. Returns the total.
pub fn check_payment(info: &MessageInfo, price: &Coin, amount: u64) -> Result<Coin, ContractError> {
    let total = price.amount.checked_mul(Uint128::from(amount))?;
    let sent = may_pay(info, &price.denom)?;
    if sent != total {
        return Err(ContractError::IncorrectPaymentAmount {
            expected: total,
            sent,
        });
    }
    Ok(Coin {
        denom: price.denom.clone(),
        amount: total,
    })
}

/// Debits the allowance checked by [`authorize`].
pub fn commit(
    store: &mut dyn Storage,
    claimant: &Addr,
    authorization: &MintAuthorization,
    amount: u64,
    caps: &CollectionCaps,
) -> Result<(), ContractError> {
    match authorization.phase {
        MintPhase::Whitelist { stage_index } => {
            STAGES
                .allowances
                .try_consume(store, (stage_index, claimant.clone()), amount)?;
        }
        MintPhase::Public { remaining: Some(_) } => {
            if PUBLIC_ALLOWANCES
                .remaining(store, claimant.clone())?
                .is_none()
            {
                PUBLIC_ALLOWANCES.grant(store, claimant.clone(), caps.public_mint_limit)?;
            }
            PUBLIC_ALLOWANCES.try_consume(store, claimant.clone(), amount)?;
        }
        MintPhase::Public { remaining: None } => {}
    }
    Ok(())
}

/// Advances the counter by `amount` and builds one cw721 mint and one event per certificate.
pub fn issue_certificates(
    store: &mut dyn Storage,
    certificate_collection: &Addr,
    details: &CertificateDetails,
    claimant: &Addr,
    amount: u64,
) -> Result<(Vec<CosmosMsg>, Vec<Event>), ContractError> {
    let mut counter = CERTIFICATE_COUNTER.load(store)?;
    let mut messages: Vec<CosmosMsg> = Vec::with_capacity(amount as usize);
    let mut events = Vec::with_capacity(amount as usize);
    for _ in 0..amount {
        let certificate_id = details.certificate_id(counter);
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: certificate_collection.to_string(),
            msg: to_json_binary(&CertificateCollectionExecuteMsg::Mint {
                token_id: certificate_id.clone(),
                owner: claimant.to_string(),
                token_uri: details.token_uri.clone(),
                extension: None,
            })?,
            funds: vec![],
        }));
        events.push(
            Event::new("certificate_issued")
                .add_attribute("certificate_id", certificate_id)
                .add_attribute("sequence", counter.to_string())
                .add_attribute("owner", claimant.to_string()),
        );
        counter += 1;
    }
    CERTIFICATE_COUNTER.save(store, &counter)?;
    Ok((messages, events))
}
