use std::fmt::Debug;

use anyhow::{bail, Result};
use cosmwasm_std::{
    coins, from_json, to_json_binary, Addr, Api, BankMsg, Binary, BlockInfo, CosmosMsg,
    CustomQuery, Querier, Storage,
};
use cw_multi_test::{error::AnyResult, AppResponse, CosmosRouter, Stargate};
use omniflix_std::types::omniflix::onft::v1beta1::{
    Collection, Denom, MsgCreateDenom, MsgMintOnft,
};
use omniflix_std::types::{
    cosmos::base::v1beta1::Coin,
    omniflix::onft::v1beta1::{Onft, Params, QueryParamsResponse},
};
use prost::Message;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

const COLLECTION_PREFIX: &str = "collections";

pub const CREATION_FEE_DENOM: &str = "uflix";
pub const CREATION_FEE_AMOUNT: u128 = 1_000_000;

/// Storage key of the onft collection with denom id `denom_id`.
pub fn collection_key(denom_id: &str) -> String {
    format!("{}:{}", COLLECTION_PREFIX, denom_id)
}

pub fn load_collection(storage: &dyn Storage, denom_id: &str) -> Option<Collection> {
    storage
        .get(collection_key(denom_id).as_bytes())
        .and_then(|raw| from_json(raw).ok())
}

fn save_collection(storage: &mut dyn Storage, denom_id: &str, collection: &Collection) -> Result<()> {
    let serialized_collection = to_json_binary(collection)?;
    storage.set(collection_key(denom_id).as_bytes(), &serialized_collection);
    Ok(())
}

pub struct StargateKeeper {}

impl StargateKeeper {
    fn create_denom(
        &self,
        storage: &mut dyn Storage,
        sender: Addr,
        msg: MsgCreateDenom,
    ) -> AnyResult<AppResponse> {
        if load_collection(storage, &msg.id).is_some() {
            bail!("denom {} already exists", msg.id);
        }
        let collection = Collection {
            denom: Some(Denom {
                creator: sender.to_string(),
                data: msg.data,
                name: msg.name,
                id: msg.id.clone(),
                preview_uri: msg.preview_uri,
                description: msg.description,
                schema: msg.schema,
                symbol: msg.symbol,
                uri: msg.uri,
                uri_hash: msg.uri_hash,
                royalty_receivers: msg.royalty_receivers,
            }),
            onfts: vec![],
        };
        save_collection(storage, &msg.id, &collection)?;
        Ok(AppResponse::default())
    }

    fn mint_onft(
        &self,
        storage: &mut dyn Storage,
        sender: Addr,
        msg: MsgMintOnft,
    ) -> AnyResult<AppResponse> {
        let Some(mut collection) = load_collection(storage, &msg.denom_id) else {
            bail!("denom {} not found", msg.denom_id);
        };
        let creator = collection
            .denom
            .as_ref()
            .map(|denom| denom.creator.clone())
            .unwrap_or_default();
        if creator != sender.as_str() {
            bail!("{} is not the creator of denom {}", sender, msg.denom_id);
        }
        if collection.onfts.iter().any(|onft| onft.id == msg.id) {
            bail!("onft {} already exists in denom {}", msg.id, msg.denom_id);
        }
        collection.onfts.push(Onft {
            id: msg.id,
            created_at: None,
            nsfw: msg.nsfw,
            owner: msg.recipient,
            data: msg.data,
            transferable: msg.transferable,
            extensible: msg.extensible,
            metadata: msg.metadata,
            royalty_share: msg.royalty_share,
        });
        save_collection(storage, &msg.denom_id, &collection)?;
        Ok(AppResponse::default())
    }
}

impl Stargate for StargateKeeper {
    fn execute<ExecC, QueryC>(
        &self,
        api: &dyn Api,
        storage: &mut dyn Storage,
        router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        block: &BlockInfo,
        sender: Addr,
        type_url: String,
        value: Binary,
    ) -> AnyResult<AppResponse>
    where
        ExecC: Debug + Clone + PartialEq + JsonSchema + DeserializeOwned + 'static,
        QueryC: CustomQuery + DeserializeOwned + 'static,
    {
        match type_url.as_str() {
            "/OmniFlix.onft.v1beta1.MsgCreateDenom" => {
                let msg = MsgCreateDenom::decode(value.as_slice())?;
                // The onft module burns the creation fee from the creator
                if let Some(fee) = msg.creation_fee.clone() {
                    let amount: u128 = fee.amount.parse()?;
                    if amount > 0 {
                        router.execute(
                            api,
                            storage,
                            block,
                            sender.clone(),
                            CosmosMsg::Bank(BankMsg::Burn {
                                amount: coins(amount, fee.denom),
                            }),
                        )?;
                    }
                }
                self.create_denom(storage, sender, msg)
            }
            "/OmniFlix.onft.v1beta1.MsgMintONFT" => {
                let msg = MsgMintOnft::decode(value.as_slice())?;
                self.mint_onft(storage, sender, msg)
            }
            _ => bail!("unsupported stargate message {}", type_url),
        }
    }

    fn query(
        &self,
        _api: &dyn Api,
        _storage: &dyn Storage,
        _querier: &dyn Querier,
        _block: &BlockInfo,
        path: String,
        _data: Binary,
    ) -> AnyResult<Binary> {
        if path == *"/OmniFlix.onft.v1beta1.Query/Params" {
            let params = QueryParamsResponse {
                params: Some(Params {
                    denom_creation_fee: Some(Coin {
                        denom: CREATION_FEE_DENOM.to_string(),
                        amount: CREATION_FEE_AMOUNT.to_string(),
                    }),
                }),
            };
            return Ok(to_json_binary(&params)?);
        }
        bail!("unsupported stargate query {}", path)
    }
}
