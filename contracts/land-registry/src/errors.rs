//! Typed error handling for the land registry contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(RegistryError::Xxx)`, the SDK calls `env::panic_str()` with the
//! Display message — same on-wire behaviour as raw panics, but with
//! structured, testable codes.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum RegistryError {
    /// Caller lacks the required privilege (admin-only op, self-trade).
    NotAuthorized(String),
    /// Referenced parcel has never been claimed.
    NotExists(String),
    /// Claim attempted on an occupied coordinate.
    AlreadyOwned(String),
    /// Caller is not the parcel's current owner.
    NotOwner(String),
    /// Coordinate outside the current world bounds.
    InvalidCoordinates(String),
    /// Zero price supplied to a listing.
    InvalidPrice(String),
    /// Purchase attempted on a parcel that is not listed.
    NotForSale(String),
    /// Attached deposit is too low.
    InsufficientDeposit(String),
    /// Invalid parameters or data from the caller.
    InvalidInput(String),
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthorized(msg) => write!(f, "Not authorized: {}", msg),
            Self::NotExists(msg) => write!(f, "Not found: {}", msg),
            Self::AlreadyOwned(msg) => write!(f, "Already owned: {}", msg),
            Self::NotOwner(msg) => write!(f, "Not owner: {}", msg),
            Self::InvalidCoordinates(msg) => write!(f, "Invalid coordinates: {}", msg),
            Self::InvalidPrice(msg) => write!(f, "Invalid price: {}", msg),
            Self::NotForSale(msg) => write!(f, "Not for sale: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl RegistryError {
    pub fn parcel_not_found(x: u32, y: u32) -> Self {
        Self::NotExists(format!("No parcel claimed at ({}, {})", x, y))
    }
    pub fn parcel_already_claimed(x: u32, y: u32) -> Self {
        Self::AlreadyOwned(format!("Parcel ({}, {}) is already claimed", x, y))
    }
    pub fn only_parcel_owner() -> Self {
        Self::NotOwner("Only the parcel owner can perform this action".into())
    }
    pub fn only_administrator() -> Self {
        Self::NotAuthorized("Only the administrator can perform this action".into())
    }
    pub fn out_of_bounds(x: u32, y: u32, size_x: u32, size_y: u32) -> Self {
        Self::InvalidCoordinates(format!(
            "Coordinates ({}, {}) are outside the {}x{} world",
            x, y, size_x, size_y
        ))
    }
}
