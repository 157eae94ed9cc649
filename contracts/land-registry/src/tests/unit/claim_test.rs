use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- claim_land ---

#[test]
fn claim_land_happy() {
    let mut contract = new_contract();
    testing_env!(context(claimant()).build());

    let key = contract
        .claim_land(10, 15, "My Estate".into(), "A fine plot".into())
        .unwrap();

    assert_eq!(key, "10:15");
    let parcel = contract.get_land_info(10, 15).unwrap();
    assert_eq!(parcel.owner_id, claimant());
    assert_eq!(parcel.name, "My Estate");
    assert_eq!(parcel.price.0, 0);
    assert!(!parcel.for_sale);
    assert_eq!(parcel.last_updated, 100);
}

#[test]
fn claim_land_increments_owner_count() {
    let mut contract = new_contract();
    assert_eq!(contract.get_owner_land_count(claimant()), 0);

    claim(&mut contract, &claimant(), 1, 1);
    assert_eq!(contract.get_owner_land_count(claimant()), 1);

    claim(&mut contract, &claimant(), 2, 1);
    assert_eq!(contract.get_owner_land_count(claimant()), 2);
}

#[test]
fn claim_land_writes_claim_history() {
    let mut contract = new_contract();
    claim(&mut contract, &claimant(), 3, 4);

    let record = contract.get_land_transaction(3, 4, 100).unwrap();
    assert!(record.from.is_none());
    assert_eq!(record.to, claimant());
    assert_eq!(record.price.0, 0);
    assert_eq!(record.transaction_type, TransactionType::Claim);
}

#[test]
fn claim_land_out_of_bounds_fails() {
    let mut contract = new_contract();
    testing_env!(context(claimant()).build());

    let err = contract
        .claim_land(1000, 0, "Edge".into(), "".into())
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidCoordinates(_)));

    let err = contract
        .claim_land(0, 1000, "Edge".into(), "".into())
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidCoordinates(_)));
}

#[test]
fn claim_land_twice_fails() {
    let mut contract = new_contract();
    claim(&mut contract, &claimant(), 5, 5);

    testing_env!(context(buyer()).build());
    let err = contract
        .claim_land(5, 5, "Mine now".into(), "".into())
        .unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyOwned(_)));

    // State after the failure equals state before the second call.
    assert_eq!(*contract.get_land_owner(5, 5).unwrap(), claimant());
    assert_eq!(contract.get_owner_land_count(buyer()), 0);
    assert_eq!(contract.get_owner_land_count(claimant()), 1);
}

#[test]
fn claim_land_boundary_coordinate_succeeds() {
    let mut contract = new_contract();
    testing_env!(context(claimant()).build());

    contract
        .claim_land(999, 999, "Corner".into(), "".into())
        .unwrap();
    assert!(contract.is_land_owned(999, 999));
}

#[test]
fn distinct_owners_have_independent_counts() {
    let mut contract = new_contract();
    claim(&mut contract, &claimant(), 0, 0);
    claim(&mut contract, &buyer(), 0, 1);

    assert_eq!(contract.get_owner_land_count(claimant()), 1);
    assert_eq!(contract.get_owner_land_count(buyer()), 1);
}
