use crate::*;

#[near]
impl Contract {
    /// Gifts the parcel at `(x, y)` to `new_owner_id`. No payment moves;
    /// any active listing is cleared so the new owner starts unlisted.
    #[handle_result]
    pub fn transfer_land(
        &mut self,
        x: u32,
        y: u32,
        new_owner_id: AccountId,
    ) -> Result<(), RegistryError> {
        let caller_id = env::predecessor_account_id();

        let key = Self::make_parcel_key(x, y);
        let parcel = self
            .parcels
            .get(&key)
            .ok_or_else(|| RegistryError::parcel_not_found(x, y))?;
        if parcel.owner_id != caller_id {
            return Err(RegistryError::only_parcel_owner());
        }
        if new_owner_id == caller_id {
            return Err(RegistryError::NotAuthorized(
                "Cannot transfer a parcel to yourself".into(),
            ));
        }

        let mut parcel = parcel.clone();
        parcel.owner_id = new_owner_id.clone();
        parcel.price = U128(0);
        parcel.for_sale = false;
        parcel.last_updated = env::block_height();
        self.parcels.insert(key, parcel);

        self.decrement_owner_land_count(&caller_id);
        self.increment_owner_land_count(&new_owner_id);
        self.record_transaction(
            x,
            y,
            Some(caller_id.clone()),
            new_owner_id.clone(),
            0,
            TransactionType::Transfer,
        )?;

        events::emit_land_transferred(&caller_id, &new_owner_id, x, y);
        Ok(())
    }
}
