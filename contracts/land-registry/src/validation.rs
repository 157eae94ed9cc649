use crate::*;

pub(crate) fn validate_name(name: &str) -> Result<(), RegistryError> {
    if name.len() > MAX_NAME_LEN {
        return Err(RegistryError::InvalidInput(format!(
            "Name too long (max {} characters)",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

pub(crate) fn validate_description(description: &str) -> Result<(), RegistryError> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(RegistryError::InvalidInput(format!(
            "Description too long (max {} characters)",
            MAX_DESCRIPTION_LEN
        )));
    }
    Ok(())
}

impl Contract {
    /// Bounds check against the current world size. Only new claims are
    /// gated on this — parcels claimed before a shrink stay functional.
    pub(crate) fn check_coordinates(&self, x: u32, y: u32) -> Result<(), RegistryError> {
        if !self.world_config.contains(x, y) {
            return Err(RegistryError::out_of_bounds(
                x,
                y,
                self.world_config.size_x,
                self.world_config.size_y,
            ));
        }
        Ok(())
    }
}
