#![cfg(test)]
use cosmwasm_std::{coins, to_json_binary, Empty, Uint128};
use cw_multi_test::Executor;
use omniflix_reveal_minter::msg::{ExecuteMsg, QueryMsg, ReceiveMsg};

use crate::helpers::mock_messages::reveal_minter_mock_messages::{
    return_inventory_msg, return_public_and_reveal_msg, return_whitelist_stage_msg,
};
use crate::helpers::setup::setup;
use crate::helpers::utils::{
    create_reveal_minter, query_certificates, query_onft_collection, set_block_time,
};

#[test]
fn test_scenario_2() {
    // Scenario 2:
    // Unbounded collection, one stage [50, 200) price 5 with collector limited to 2
    // Public [201, 400) price 10 with a limit of 1, reveal at 400, 3 inventory uris
    // 1. collector mints 2 at t=60 paying 10 (Mint Pass#1, Mint Pass#2)
    // 2. admin mints 1 at t=250 paying 10 (Mint Pass#3)
    // 3. At t=401 every certificate is exchanged and the inventory is drained
    let res = setup();
    let test_accounts = res.test_accounts;
    let creator = test_accounts.creator.clone();
    let collector = test_accounts.collector.clone();
    let admin = test_accounts.admin.clone();
    let treasury = test_accounts.treasury.clone();
    let mut app = res.app;
    let (minter_address, certificate_address) = create_reveal_minter(
        &mut app,
        &test_accounts,
        res.reveal_minter_code_id,
        res.certificate_code_id,
        0,
        1,
    );
    for msg in [
        return_whitelist_stage_msg(50, 200, 5, 0),
        return_public_and_reveal_msg(201, 400, 10, 400),
        return_inventory_msg(&["ipfs://a", "ipfs://b", "ipfs://c"]),
        ExecuteMsg::AddWhitelistAddresses {
            addresses: vec![collector.to_string()],
            limit: 2,
            stage_index: 0,
        },
    ] {
        app.execute_contract(creator.clone(), minter_address.clone(), &msg, &[])
            .unwrap();
    }
    let treasury_balance_before = app
        .wrap()
        .query_balance(treasury.to_string(), "uflix")
        .unwrap()
        .amount;

    set_block_time(&mut app, 60);
    app.execute_contract(
        collector.clone(),
        minter_address.clone(),
        &ExecuteMsg::MintCertificate { amount: 2 },
        &coins(10, "uflix"),
    )
    .unwrap();
    assert_eq!(
        query_certificates(&app, &certificate_address, &collector),
        vec!["Mint Pass#1".to_string(), "Mint Pass#2".to_string()]
    );

    set_block_time(&mut app, 250);
    app.execute_contract(
        admin.clone(),
        minter_address.clone(),
        &ExecuteMsg::MintCertificate { amount: 1 },
        &coins(10, "uflix"),
    )
    .unwrap();
    assert_eq!(
        query_certificates(&app, &certificate_address, &admin),
        vec!["Mint Pass#3".to_string()]
    );
    let public_allowance: Option<u64> = app
        .wrap()
        .query_wasm_smart(
            minter_address.clone(),
            &QueryMsg::PublicAllowance {
                address: admin.to_string(),
            },
        )
        .unwrap();
    assert_eq!(public_allowance, Some(0));

    let treasury_balance_after = app
        .wrap()
        .query_balance(treasury.to_string(), "uflix")
        .unwrap()
        .amount;
    assert_eq!(
        treasury_balance_after - treasury_balance_before,
        Uint128::new(20)
    );

    set_block_time(&mut app, 401);
    for (owner, certificate_id) in [
        (&collector, "Mint Pass#1"),
        (&collector, "Mint Pass#2"),
        (&admin, "Mint Pass#3"),
    ] {
        app.execute_contract(
            owner.clone(),
            certificate_address.clone(),
            &cw721_base::ExecuteMsg::<cw721_base::Extension, Empty>::SendNft {
                contract: minter_address.to_string(),
                token_id: certificate_id.to_string(),
                msg: to_json_binary(&ReceiveMsg::Exchange {}).unwrap(),
            },
            &[],
        )
        .unwrap();
    }

    let size: u64 = app
        .wrap()
        .query_wasm_smart(minter_address, &QueryMsg::InventorySize {})
        .unwrap();
    assert_eq!(size, 0);
    assert!(query_certificates(&app, &certificate_address, &collector).is_empty());
    assert!(query_certificates(&app, &certificate_address, &admin).is_empty());

    let collection = query_onft_collection(&app, "tardigrades");
    let mut owned: Vec<(String, String, String)> = collection
        .onfts
        .iter()
        .map(|onft| {
            (
                onft.id.clone(),
                onft.owner.clone(),
                onft.metadata.clone().unwrap().name,
            )
        })
        .collect();
    owned.sort();
    assert_eq!(
        owned,
        vec![
            (
                "1".to_string(),
                collector.to_string(),
                "Tardigrade: 1".to_string()
            ),
            (
                "2".to_string(),
                collector.to_string(),
                "Tardigrade: 2".to_string()
            ),
            (
                "3".to_string(),
                admin.to_string(),
                "Tardigrade: 3".to_string()
            ),
        ]
    );
}
