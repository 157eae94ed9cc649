use near_sdk::json_types::U128;
use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::CONTRACT;

pub fn emit_world_size_updated(administrator_id: &AccountId, size_x: u32, size_y: u32) {
    EventBuilder::new(CONTRACT, "world_size_updated", administrator_id)
        .field("size_x", size_x)
        .field("size_y", size_y)
        .emit();
}

pub fn emit_base_price_updated(administrator_id: &AccountId, base_price: U128) {
    EventBuilder::new(CONTRACT, "base_price_updated", administrator_id)
        .field("base_price", base_price)
        .emit();
}
