#![cfg(test)]

use soroban_sdk::String;

use super::utils::*;
use crate::{BatchStatus, RegistryError};

#[test]
fn test_batch_count() {
    let setup = TestSetup::with_authority();
    assert_eq!(setup.client.get_batch_count(), 0);

    setup.register("BATCH008");
    setup.register("BATCH009");
    assert_eq!(setup.client.get_batch_count(), 2);
}

#[test]
fn test_is_registered() {
    let setup = TestSetup::with_authority();
    let env = &setup.env;
    setup.register("BATCH010");

    assert!(setup.client.is_registered(&String::from_str(env, "BATCH010")));
    assert!(!setup.client.is_registered(&String::from_str(env, "BATCH011")));
}

#[test]
fn test_lookup_by_identifier() {
    let setup = TestSetup::with_authority();
    let env = &setup.env;
    setup.register("BATCH001");
    setup.register("BATCH002");

    let batch = setup
        .client
        .get_batch_by_id(&String::from_str(env, "BATCH002"))
        .unwrap();
    assert_eq!(batch, setup.client.get_batch(&1).unwrap());

    assert!(setup
        .client
        .get_batch_by_id(&String::from_str(env, "BATCH404"))
        .is_none());
    assert_eq!(
        setup.client.get_batch_key(&String::from_str(env, "BATCH404")),
        None
    );
}

#[test]
fn test_unknown_key_is_absent() {
    let setup = TestSetup::with_authority();

    assert!(setup.client.get_batch(&0).is_none());
    assert!(setup.client.get_batch(&u32::MAX).is_none());
    assert!(setup.client.get_batch_update(&0).is_none());
}

#[test]
fn test_index_and_records_stay_in_step() {
    let setup = TestSetup::with_authority();
    let env = &setup.env;
    let ids = ["LOT-A", "LOT-B", "LOT-C"];

    for id in ids.iter() {
        setup.register(id);
    }
    // A rejected duplicate must not disturb the mapping
    let result = setup
        .client
        .try_register(&setup.manufacturer, &setup.params("LOT-B"));
    assert_eq!(result, Err(Ok(RegistryError::DuplicateIdentifier)));

    for (expected_key, id) in ids.iter().enumerate() {
        let batch_id = String::from_str(env, id);
        let key = setup.client.get_batch_key(&batch_id).unwrap();
        assert_eq!(key, expected_key as u32);
        assert_eq!(setup.client.get_batch(&key).unwrap().batch_id, batch_id);
    }
    assert_eq!(setup.client.get_batch_count(), ids.len() as u32);
}

#[test]
fn test_reads_see_amendments() {
    let setup = TestSetup::with_authority();
    let env = &setup.env;
    setup.register("BATCH001");

    setup.client.amend(
        &setup.manufacturer,
        &0,
        &String::from_str(env, "Recall notice 7"),
        &status(env, "recalled"),
    );

    let by_key = setup.client.get_batch(&0).unwrap();
    let by_id = setup
        .client
        .get_batch_by_id(&String::from_str(env, "BATCH001"))
        .unwrap();
    assert_eq!(by_key.status, BatchStatus::Recalled);
    assert_eq!(by_key, by_id);
}
