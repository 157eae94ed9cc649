use crate::*;

#[near]
impl Contract {
    /// Full parcel record, or None if the coordinate was never claimed.
    pub fn get_land_info(&self, x: u32, y: u32) -> Option<&Parcel> {
        self.parcels.get(&Self::make_parcel_key(x, y))
    }

    pub fn is_valid_coordinates(&self, x: u32, y: u32) -> bool {
        self.world_config.contains(x, y)
    }

    pub fn get_owner_land_count(&self, owner_id: AccountId) -> u64 {
        self.owner_land_counts.get(&owner_id).copied().unwrap_or(0)
    }

    pub fn is_land_owned(&self, x: u32, y: u32) -> bool {
        self.parcels.contains_key(&Self::make_parcel_key(x, y))
    }

    pub fn get_land_owner(&self, x: u32, y: u32) -> Option<&AccountId> {
        self.parcels
            .get(&Self::make_parcel_key(x, y))
            .map(|parcel| &parcel.owner_id)
    }

    pub fn is_land_for_sale(&self, x: u32, y: u32) -> bool {
        self.parcels
            .get(&Self::make_parcel_key(x, y))
            .is_some_and(|parcel| parcel.for_sale)
    }

    pub fn get_land_price(&self, x: u32, y: u32) -> U128 {
        self.parcels
            .get(&Self::make_parcel_key(x, y))
            .map_or(U128(0), |parcel| parcel.price)
    }

    pub fn get_world_size(&self) -> (u32, u32) {
        (self.world_config.size_x, self.world_config.size_y)
    }

    pub fn get_base_price(&self) -> U128 {
        self.world_config.base_price
    }

    /// History entry for `(x, y)` at block height `seq`, if one exists.
    pub fn get_land_transaction(&self, x: u32, y: u32, seq: u64) -> Option<&LandTransaction> {
        self.land_transactions
            .get(&Self::make_transaction_key(x, y, seq))
    }
}
