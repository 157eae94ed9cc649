use crate::*;

#[near]
impl Contract {
    /// Claims the vacant parcel at `(x, y)` for the caller and returns the
    /// parcel key. The claim is free; the parcel starts unpriced and
    /// unlisted.
    #[handle_result]
    pub fn claim_land(
        &mut self,
        x: u32,
        y: u32,
        name: String,
        description: String,
    ) -> Result<String, RegistryError> {
        let caller_id = env::predecessor_account_id();

        self.check_coordinates(x, y)?;
        validation::validate_name(&name)?;
        validation::validate_description(&description)?;

        let key = Self::make_parcel_key(x, y);
        if self.parcels.contains_key(&key) {
            return Err(RegistryError::parcel_already_claimed(x, y));
        }

        let parcel = Parcel {
            owner_id: caller_id.clone(),
            name,
            description,
            price: U128(0),
            for_sale: false,
            last_updated: env::block_height(),
        };
        self.parcels.insert(key.clone(), parcel);

        self.increment_owner_land_count(&caller_id);
        self.record_transaction(x, y, None, caller_id.clone(), 0, TransactionType::Claim)?;

        events::emit_land_claimed(&caller_id, x, y);
        Ok(key)
    }
}
