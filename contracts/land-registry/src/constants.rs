use near_sdk::NearToken;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 200;

pub const DEFAULT_WORLD_SIZE_X: u32 = 1000;
pub const DEFAULT_WORLD_SIZE_Y: u32 = 1000;
/// yoctoNEAR. Advisory default listing price; not enforced by any operation.
pub const DEFAULT_BASE_PRICE: u128 = 1_000_000;

// Storage key invariant: delimiter cannot appear in a decimal coordinate or a
// NEAR account ID, preventing parcel/history key collisions.
pub const DELIMETER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
