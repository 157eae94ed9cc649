use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

use crate::constants::*;

// --- Enums ---

/// What moved ownership: the initial claim, a paid purchase, or a gift.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Claim,
    Purchase,
    Transfer,
}

// --- Structs ---

/// A single owned unit of land at a unique integer coordinate.
/// Exists iff it has been claimed; permanent once claimed.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Parcel {
    pub owner_id: AccountId,
    pub name: String,
    pub description: String,
    /// yoctoNEAR. 0 = not priced. `for_sale` implies a non-zero price.
    pub price: U128,
    pub for_sale: bool,
    /// Block height of the last mutating operation on this parcel.
    pub last_updated: u64,
}

/// One history entry per ownership-affecting operation. Never rewritten.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct LandTransaction {
    /// None for the initial claim.
    pub from: Option<AccountId>,
    pub to: AccountId,
    /// yoctoNEAR. 0 for non-monetary events.
    pub price: U128,
    pub transaction_type: TransactionType,
}

/// World bounds and the advisory default price, administrator-mutable.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct WorldConfig {
    pub size_x: u32,
    pub size_y: u32,
    /// yoctoNEAR. Advisory — not enforced by any operation.
    pub base_price: U128,
}

impl WorldConfig {
    /// True iff `(x, y)` lies inside the current bounds.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.size_x && y < self.size_y
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size_x: DEFAULT_WORLD_SIZE_X,
            size_y: DEFAULT_WORLD_SIZE_Y,
            base_price: U128(DEFAULT_BASE_PRICE),
        }
    }
}
