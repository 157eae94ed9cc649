use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- new ---

#[test]
fn new_contract_defaults() {
    let contract = new_contract();

    assert_eq!(contract.get_world_size(), (1000, 1000));
    assert_eq!(contract.get_base_price().0, 1_000_000);
    assert_eq!(*contract.get_administrator(), admin());
    assert_eq!(contract.get_version(), env!("CARGO_PKG_VERSION"));
}

// --- set_world_size ---

#[test]
fn set_world_size_happy() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(admin(), 1).build());

    contract.set_world_size(2000, 2000).unwrap();
    assert_eq!(contract.get_world_size(), (2000, 2000));
}

#[test]
fn set_world_size_not_admin_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(claimant(), 1).build());

    let err = contract.set_world_size(2000, 2000).unwrap_err();
    assert!(matches!(err, RegistryError::NotAuthorized(_)));
    assert_eq!(contract.get_world_size(), (1000, 1000));
}

#[test]
fn set_world_size_requires_one_yocto() {
    let mut contract = new_contract();
    testing_env!(context(admin()).build());

    let err = contract.set_world_size(2000, 2000).unwrap_err();
    assert!(matches!(err, RegistryError::InsufficientDeposit(_)));
}

#[test]
fn grown_world_accepts_new_claims() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(admin(), 1).build());
    contract.set_world_size(2000, 2000).unwrap();

    testing_env!(context(claimant()).build());
    contract
        .claim_land(1500, 1500, "Frontier".into(), "".into())
        .unwrap();
    assert!(contract.is_land_owned(1500, 1500));
}

#[test]
fn shrunken_world_keeps_legacy_parcels_functional() {
    let mut contract = new_contract();
    claim(&mut contract, &claimant(), 500, 500);

    testing_env!(context_with_deposit(admin(), 1).build());
    contract.set_world_size(100, 100).unwrap();

    // The out-of-bounds parcel stays owned and tradable.
    assert!(!contract.is_valid_coordinates(500, 500));
    assert_eq!(*contract.get_land_owner(500, 500).unwrap(), claimant());
    testing_env!(context_at(claimant(), 101).build());
    contract.set_for_sale(500, 500, U128(1_000)).unwrap();
    contract.transfer_land(500, 500, buyer()).unwrap();
    assert_eq!(*contract.get_land_owner(500, 500).unwrap(), buyer());

    // Only new claims are bounds-checked.
    testing_env!(context(buyer()).build());
    let err = contract
        .claim_land(500, 501, "Late".into(), "".into())
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidCoordinates(_)));
}

// --- set_base_price ---

#[test]
fn set_base_price_happy() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(admin(), 1).build());

    contract.set_base_price(U128(2_000_000)).unwrap();
    assert_eq!(contract.get_base_price().0, 2_000_000);
}

#[test]
fn set_base_price_not_admin_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(buyer(), 1).build());

    let err = contract.set_base_price(U128(2_000_000)).unwrap_err();
    assert!(matches!(err, RegistryError::NotAuthorized(_)));
    assert_eq!(contract.get_base_price().0, 1_000_000);
}

#[test]
fn set_base_price_zero_is_allowed() {
    // The base price is advisory; no validation is applied to new values.
    let mut contract = new_contract();
    testing_env!(context_with_deposit(admin(), 1).build());

    contract.set_base_price(U128(0)).unwrap();
    assert_eq!(contract.get_base_price().0, 0);
}
