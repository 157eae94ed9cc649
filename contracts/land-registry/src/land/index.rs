use crate::*;

impl Contract {
    /// Canonical storage key for the parcel at `(x, y)`.
    pub fn make_parcel_key(x: u32, y: u32) -> String {
        format!("{}{}{}", x, DELIMETER, y)
    }

    pub(crate) fn increment_owner_land_count(&mut self, owner_id: &AccountId) {
        let count = self.owner_land_counts.get(owner_id).copied().unwrap_or(0);
        self.owner_land_counts.insert(owner_id.clone(), count + 1);
    }

    /// Floors at zero rather than failing; a count that was never
    /// initialized is treated as zero, not as corruption.
    pub(crate) fn decrement_owner_land_count(&mut self, owner_id: &AccountId) {
        let count = self.owner_land_counts.get(owner_id).copied().unwrap_or(0);
        self.owner_land_counts
            .insert(owner_id.clone(), count.saturating_sub(1));
    }
}
