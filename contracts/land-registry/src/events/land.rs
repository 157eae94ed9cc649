use near_sdk::json_types::U128;
use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::LAND;

pub fn emit_land_claimed(owner_id: &AccountId, x: u32, y: u32) {
    EventBuilder::new(LAND, "land_claimed", owner_id)
        .field("x", x)
        .field("y", y)
        .emit();
}

pub fn emit_land_updated(owner_id: &AccountId, x: u32, y: u32) {
    EventBuilder::new(LAND, "land_updated", owner_id)
        .field("x", x)
        .field("y", y)
        .emit();
}

pub fn emit_land_listed(owner_id: &AccountId, x: u32, y: u32, price: U128) {
    EventBuilder::new(LAND, "land_listed", owner_id)
        .field("x", x)
        .field("y", y)
        .field("price", price)
        .emit();
}

pub fn emit_land_delisted(owner_id: &AccountId, x: u32, y: u32) {
    EventBuilder::new(LAND, "land_delisted", owner_id)
        .field("x", x)
        .field("y", y)
        .emit();
}

pub fn emit_land_purchased(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    x: u32,
    y: u32,
    price: U128,
) {
    EventBuilder::new(LAND, "land_purchased", buyer_id)
        .field("seller", seller_id)
        .field("x", x)
        .field("y", y)
        .field("price", price)
        .emit();
}

pub fn emit_land_transferred(old_owner_id: &AccountId, new_owner_id: &AccountId, x: u32, y: u32) {
    EventBuilder::new(LAND, "land_transferred", old_owner_id)
        .field("new_owner", new_owner_id)
        .field("x", x)
        .field("y", y)
        .emit();
}
