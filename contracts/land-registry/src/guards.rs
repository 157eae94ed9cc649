use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), RegistryError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(RegistryError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_administrator(&self, actor_id: &AccountId) -> Result<(), RegistryError> {
        if actor_id != &self.administrator_id {
            return Err(RegistryError::only_administrator());
        }
        Ok(())
    }
}
