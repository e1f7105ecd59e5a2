use cosmwasm_std::{coin, coins, Addr, Decimal, Uint128};
use cw721::{ContractInfoResponse, Cw721QueryMsg};
use cw_multi_test::Executor;
use minter_types::token_details::TokenDetailsError;
use minter_types::types::{AuthDetails, CollectionCaps};
use omniflix_reveal_minter::error::ContractError;
use omniflix_reveal_minter::msg::{ExecuteMsg, QueryMsg};
use omniflix_std::types::omniflix::onft::v1beta1::WeightedAddress;
use omniflix_testing::stargate::{CREATION_FEE_AMOUNT, CREATION_FEE_DENOM};

use crate::helpers::mock_messages::reveal_minter_mock_messages::{
    return_certificate_details, return_collection_details, return_create_collection_msg,
    return_reveal_minter_instantiate_msg, return_token_details,
};
use crate::helpers::setup::setup;
use crate::helpers::utils::query_onft_collection;

#[test]
fn reveal_minter_collection_creation() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
    let collector = res.test_accounts.collector;
    let reveal_minter_code_id = res.reveal_minter_code_id;
    let certificate_code_id = res.certificate_code_id;
    let mut app = res.app;

    let minter_address = app
        .instantiate_contract(
            reveal_minter_code_id,
            admin.clone(),
            &return_reveal_minter_instantiate_msg(),
            &[],
            "reveal-minter",
            None,
        )
        .unwrap();

    let auth_details: AuthDetails = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &QueryMsg::AuthDetails {})
        .unwrap();
    assert_eq!(auth_details.admin, creator);
    assert_eq!(auth_details.payment_collector, Addr::unchecked("treasury"));
    let counter: u64 = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &QueryMsg::CertificateCounter {})
        .unwrap();
    assert_eq!(counter, 1);

    // Only the admin can create the collection
    let error = app
        .execute_contract(
            collector.clone(),
            minter_address.clone(),
            &return_create_collection_msg(certificate_code_id, 0, 0),
            &coins(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM),
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::Unauthorized {});

    // Royalty weights must sum to one
    let mut collection_details = return_collection_details();
    collection_details.royalty_receivers = Some(vec![
        WeightedAddress {
            address: "creator".to_string(),
            weight: "0.5".to_string(),
        },
        WeightedAddress {
            address: "treasury".to_string(),
            weight: "0.4".to_string(),
        },
    ]);
    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &ExecuteMsg::CreateCollection {
                collection_details,
                token_details: return_token_details(),
                certificate_details: return_certificate_details(certificate_code_id),
                collection_maximum: 0,
                public_mint_limit: 0,
            },
            &coins(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM),
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::InvalidRoyalty {});

    // Royalty ratio above one
    let mut token_details = return_token_details();
    token_details.royalty_ratio = Decimal::percent(101);
    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &ExecuteMsg::CreateCollection {
                collection_details: return_collection_details(),
                token_details,
                certificate_details: return_certificate_details(certificate_code_id),
                collection_maximum: 0,
                public_mint_limit: 0,
            },
            &coins(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM),
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::InvalidRoyalty {});

    // Token name too short
    let mut token_details = return_token_details();
    token_details.token_name = "ab".to_string();
    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &ExecuteMsg::CreateCollection {
                collection_details: return_collection_details(),
                token_details,
                certificate_details: return_certificate_details(certificate_code_id),
                collection_maximum: 0,
                public_mint_limit: 0,
            },
            &coins(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM),
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(
        error,
        &ContractError::TokenDetailsError(TokenDetailsError::TokenNameTooShort {})
    );

    // Wrong creation fee
    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &return_create_collection_msg(certificate_code_id, 0, 0),
            &coins(CREATION_FEE_AMOUNT - 1, CREATION_FEE_DENOM),
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(
        error,
        &ContractError::InvalidCreationFee {
            expected: vec![coin(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM)],
            sent: vec![coin(CREATION_FEE_AMOUNT - 1, CREATION_FEE_DENOM)],
        }
    );

    let creator_balance_before: Uint128 = app
        .wrap()
        .query_balance(creator.to_string(), "uflix")
        .unwrap()
        .amount;

    let res = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &return_create_collection_msg(certificate_code_id, 100, 3),
            &coins(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM),
        )
        .unwrap();
    assert!(res
        .events
        .iter()
        .any(|e| e.ty == "wasm" && e.attributes.iter().any(|a| a.value == "create_collection")));

    // The creation fee was paid by the creator and burned by the onft module
    let creator_balance_after: Uint128 = app
        .wrap()
        .query_balance(creator.to_string(), "uflix")
        .unwrap()
        .amount;
    assert_eq!(
        creator_balance_before - creator_balance_after,
        Uint128::from(CREATION_FEE_AMOUNT)
    );
    let minter_balance = app
        .wrap()
        .query_balance(minter_address.to_string(), "uflix")
        .unwrap()
        .amount;
    assert_eq!(minter_balance, Uint128::zero());

    // Destination denom is owned by the minter
    let collection = query_onft_collection(&app, "tardigrades");
    let denom = collection.denom.unwrap();
    assert_eq!(denom.creator, minter_address.to_string());
    assert_eq!(denom.name, "Tardigrades");
    assert_eq!(denom.symbol, "TARDI");
    assert_eq!(denom.royalty_receivers.len(), 1);
    assert_eq!(denom.royalty_receivers[0].address, "treasury");
    assert!(collection.onfts.is_empty());

    // Certificate collection is a cw721 contract minted by the minter
    let certificate_address: Addr = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &QueryMsg::CertificateCollection {})
        .unwrap();
    let contract_info: ContractInfoResponse = app
        .wrap()
        .query_wasm_smart(certificate_address.clone(), &Cw721QueryMsg::ContractInfo {})
        .unwrap();
    assert_eq!(contract_info.name, "Tardigrade Mint Pass");
    assert_eq!(contract_info.symbol, "TPASS");

    let caps: CollectionCaps = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &QueryMsg::CollectionCaps {})
        .unwrap();
    assert_eq!(
        caps,
        CollectionCaps {
            collection_maximum: 100,
            public_mint_limit: 3
        }
    );

    // Second creation is rejected
    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &return_create_collection_msg(certificate_code_id, 0, 0),
            &coins(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM),
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::AlreadyCreated {});
}

#[test]
fn reveal_minter_instantiation_defaults_to_sender() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let mut app = res.app;

    let minter_address = app
        .instantiate_contract(
            res.reveal_minter_code_id,
            admin.clone(),
            &omniflix_reveal_minter::msg::InstantiateMsg {
                admin: None,
                payment_collector: None,
            },
            &[],
            "reveal-minter",
            None,
        )
        .unwrap();
    let auth_details: AuthDetails = app
        .wrap()
        .query_wasm_smart(minter_address, &QueryMsg::AuthDetails {})
        .unwrap();
    assert_eq!(auth_details.admin, admin);
    assert_eq!(auth_details.payment_collector, admin);
}
