use cosmwasm_std::{coin, Addr, Timestamp};
use cw_multi_test::Executor;
use minter_types::types::AuthDetails;
use omniflix_reveal_minter::error::ContractError;
use omniflix_reveal_minter::msg::{ExecuteMsg, QueryMsg};
use omniflix_reveal_minter::state::{PublicMintConfig, RevealConfig};

use crate::helpers::mock_messages::reveal_minter_mock_messages::return_public_and_reveal_msg;
use crate::helpers::setup::setup;
use crate::helpers::utils::create_reveal_minter;

#[test]
fn reveal_minter_configure_treasury() {
    let res = setup();
    let test_accounts = res.test_accounts;
    let mut app = res.app;
    let (minter_address, _) = create_reveal_minter(
        &mut app,
        &test_accounts,
        res.reveal_minter_code_id,
        res.certificate_code_id,
        0,
        0,
    );

    let error = app
        .execute_contract(
            test_accounts.collector.clone(),
            minter_address.clone(),
            &ExecuteMsg::ConfigureTreasury {
                payment_collector: "collector".to_string(),
            },
            &[],
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::Unauthorized {});

    let error = app
        .execute_contract(
            test_accounts.creator.clone(),
            minter_address.clone(),
            &ExecuteMsg::ConfigureTreasury {
                payment_collector: "Not Normalized".to_string(),
            },
            &[],
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(
        error,
        &ContractError::UnknownAccount {
            address: "Not Normalized".to_string()
        }
    );

    app.execute_contract(
        test_accounts.creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::ConfigureTreasury {
            payment_collector: "collector".to_string(),
        },
        &[],
    )
    .unwrap();
    let auth_details: AuthDetails = app
        .wrap()
        .query_wasm_smart(minter_address, &QueryMsg::AuthDetails {})
        .unwrap();
    assert_eq!(auth_details.payment_collector, Addr::unchecked("collector"));
    assert_eq!(auth_details.admin, test_accounts.creator);
}

#[test]
fn reveal_minter_configure_public_and_reveal() {
    let res = setup();
    let test_accounts = res.test_accounts;
    let creator = test_accounts.creator.clone();
    let mut app = res.app;
    let (minter_address, _) = create_reveal_minter(
        &mut app,
        &test_accounts,
        res.reveal_minter_code_id,
        res.certificate_code_id,
        0,
        0,
    );

    let error = app
        .execute_contract(
            test_accounts.collector.clone(),
            minter_address.clone(),
            &return_public_and_reveal_msg(201, 400, 10, 400),
            &[],
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::Unauthorized {});

    // Block time is 10, start in the past
    // Empty window
    // Reveal before the public window ends
    for msg in [
        return_public_and_reveal_msg(5, 400, 10, 400),
        return_public_and_reveal_msg(201, 201, 10, 400),
        return_public_and_reveal_msg(201, 400, 10, 399),
    ] {
        let error = app
            .execute_contract(creator.clone(), minter_address.clone(), &msg, &[])
            .unwrap_err();
        let res = error.source().unwrap();
        let error = res.downcast_ref::<ContractError>().unwrap();
        assert_eq!(error, &ContractError::InvalidTime {});
    }

    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &return_public_and_reveal_msg(201, 400, 10, 400),
        &[],
    )
    .unwrap();

    // Upserted any number of times
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &return_public_and_reveal_msg(10, 300, 12, 500),
        &[],
    )
    .unwrap();

    let public_mint: PublicMintConfig = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &QueryMsg::PublicMint {})
        .unwrap();
    assert_eq!(
        public_mint,
        PublicMintConfig {
            start_time: Timestamp::from_seconds(10),
            end_time: Timestamp::from_seconds(300),
            mint_price: coin(12, "uflix"),
        }
    );
    let reveal: RevealConfig = app
        .wrap()
        .query_wasm_smart(minter_address, &QueryMsg::Reveal {})
        .unwrap();
    assert_eq!(reveal.reveal_time, Timestamp::from_seconds(500));
}
