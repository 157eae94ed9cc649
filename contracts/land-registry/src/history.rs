use crate::*;

impl Contract {
    /// Storage key for the history entry written at block height `seq`.
    pub fn make_transaction_key(x: u32, y: u32, seq: u64) -> String {
        format!("{}{}{}{}{}", x, DELIMETER, y, DELIMETER, seq)
    }

    /// Appends one record to the audit trail. Entries are never rewritten:
    /// a second mutation of the same parcel within one block collides here
    /// and aborts the whole operation, so the second caller retries in the
    /// next block.
    pub(crate) fn record_transaction(
        &mut self,
        x: u32,
        y: u32,
        from: Option<AccountId>,
        to: AccountId,
        price: u128,
        transaction_type: TransactionType,
    ) -> Result<(), RegistryError> {
        let key = Self::make_transaction_key(x, y, env::block_height());
        if self.land_transactions.contains_key(&key) {
            return Err(RegistryError::InternalError(format!(
                "Duplicate history entry at {}",
                key
            )));
        }
        self.land_transactions.insert(
            key,
            LandTransaction {
                from,
                to,
                price: U128(price),
                transaction_type,
            },
        );
        Ok(())
    }
}
