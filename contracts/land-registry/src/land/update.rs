use crate::*;

#[near]
impl Contract {
    /// Replaces the parcel's name and description. Owner, price, and sale
    /// state are untouched; no history entry is written.
    #[handle_result]
    pub fn update_land(
        &mut self,
        x: u32,
        y: u32,
        name: String,
        description: String,
    ) -> Result<(), RegistryError> {
        let caller_id = env::predecessor_account_id();

        validation::validate_name(&name)?;
        validation::validate_description(&description)?;

        let key = Self::make_parcel_key(x, y);
        let parcel = self
            .parcels
            .get(&key)
            .ok_or_else(|| RegistryError::parcel_not_found(x, y))?;
        if parcel.owner_id != caller_id {
            return Err(RegistryError::only_parcel_owner());
        }

        let mut parcel = parcel.clone();
        parcel.name = name;
        parcel.description = description;
        parcel.last_updated = env::block_height();
        self.parcels.insert(key, parcel);

        events::emit_land_updated(&caller_id, x, y);
        Ok(())
    }
}
