use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(administrator_id: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            administrator_id,
            world_config: WorldConfig::default(),
            parcels: LookupMap::new(StorageKey::Parcels),
            owner_land_counts: LookupMap::new(StorageKey::OwnerLandCounts),
            land_transactions: LookupMap::new(StorageKey::LandTransactions),
        }
    }

    /// Overwrites the world bounds unconditionally. Parcels outside a
    /// shrunken world stay owned and tradable; only new claims are
    /// bounds-checked against the new size.
    #[payable]
    #[handle_result]
    pub fn set_world_size(&mut self, new_x: u32, new_y: u32) -> Result<(), RegistryError> {
        crate::guards::check_one_yocto()?;
        self.check_administrator(&env::predecessor_account_id())?;
        self.world_config.size_x = new_x;
        self.world_config.size_y = new_y;
        events::emit_world_size_updated(&self.administrator_id, new_x, new_y);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_base_price(&mut self, new_price: U128) -> Result<(), RegistryError> {
        crate::guards::check_one_yocto()?;
        self.check_administrator(&env::predecessor_account_id())?;
        self.world_config.base_price = new_price;
        events::emit_base_price_updated(&self.administrator_id, new_price);
        Ok(())
    }

    pub fn get_administrator(&self) -> &AccountId {
        &self.administrator_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
