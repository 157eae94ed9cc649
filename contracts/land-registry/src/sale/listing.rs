use crate::*;

#[near]
impl Contract {
    /// Lists the parcel at `(x, y)` at `price` yoctoNEAR. Relisting an
    /// already-listed parcel just overwrites the price.
    #[handle_result]
    pub fn set_for_sale(&mut self, x: u32, y: u32, price: U128) -> Result<(), RegistryError> {
        let caller_id = env::predecessor_account_id();

        let key = Self::make_parcel_key(x, y);
        let parcel = self
            .parcels
            .get(&key)
            .ok_or_else(|| RegistryError::parcel_not_found(x, y))?;
        if parcel.owner_id != caller_id {
            return Err(RegistryError::only_parcel_owner());
        }
        if price.0 == 0 {
            return Err(RegistryError::InvalidPrice(
                "Price must be greater than 0".into(),
            ));
        }

        let mut parcel = parcel.clone();
        parcel.price = price;
        parcel.for_sale = true;
        parcel.last_updated = env::block_height();
        self.parcels.insert(key, parcel);

        events::emit_land_listed(&caller_id, x, y, price);
        Ok(())
    }

    /// Takes the parcel off the market and clears its price, restoring the
    /// sale fields of a freshly claimed parcel.
    #[handle_result]
    pub fn remove_from_sale(&mut self, x: u32, y: u32) -> Result<(), RegistryError> {
        let caller_id = env::predecessor_account_id();

        let key = Self::make_parcel_key(x, y);
        let parcel = self
            .parcels
            .get(&key)
            .ok_or_else(|| RegistryError::parcel_not_found(x, y))?;
        if parcel.owner_id != caller_id {
            return Err(RegistryError::only_parcel_owner());
        }

        let mut parcel = parcel.clone();
        parcel.price = U128(0);
        parcel.for_sale = false;
        parcel.last_updated = env::block_height();
        self.parcels.insert(key, parcel);

        events::emit_land_delisted(&caller_id, x, y);
        Ok(())
    }
}
