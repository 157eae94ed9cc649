use near_sdk::json_types::U128;
use near_sdk::store::LookupMap;
use near_sdk::{AccountId, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;

mod history;
mod land;
mod sale;

mod admin;
mod storage;
mod types;
mod views;


pub use constants::*;
pub use errors::RegistryError;
pub use storage::StorageKey;
pub use types::{LandTransaction, Parcel, TransactionType, WorldConfig};

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    /// Fixed at initialization; the only account allowed to mutate
    /// `world_config`.
    pub administrator_id: AccountId,
    pub world_config: WorldConfig,

    /// Source of truth for ownership and sale state, keyed `"x:y"`.
    pub(crate) parcels: LookupMap<String, Parcel>,
    /// Derived index: parcels currently owned per account. Maintained
    /// transactionally with every ownership change, never authoritative.
    pub(crate) owner_land_counts: LookupMap<AccountId, u64>,
    /// Append-only audit trail, keyed `"x:y:seq"` where `seq` is the block
    /// height of the mutating receipt.
    pub(crate) land_transactions: LookupMap<String, LandTransaction>,
}
