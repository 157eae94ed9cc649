use crate::*;

#[near]
impl Contract {
    /// Buys the listed parcel at `(x, y)`. The attached deposit must cover
    /// the asking price; the runtime escrows it before this method runs, so
    /// the payout to the seller cannot fail once the checks pass. Any
    /// overpayment is refunded to the buyer.
    #[payable]
    #[handle_result]
    pub fn buy_land(&mut self, x: u32, y: u32) -> Result<(), RegistryError> {
        let buyer_id = env::predecessor_account_id();

        let key = Self::make_parcel_key(x, y);
        let parcel = self
            .parcels
            .get(&key)
            .ok_or_else(|| RegistryError::parcel_not_found(x, y))?;
        if !parcel.for_sale {
            return Err(RegistryError::NotForSale(format!(
                "Parcel ({}, {}) is not for sale",
                x, y
            )));
        }
        if parcel.owner_id == buyer_id {
            return Err(RegistryError::NotAuthorized(
                "Cannot purchase your own listing".into(),
            ));
        }

        let price = parcel.price.0;
        let deposit = env::attached_deposit().as_yoctonear();
        if deposit < price {
            return Err(RegistryError::InsufficientDeposit(format!(
                "Attached deposit {} is less than price {}",
                deposit, price
            )));
        }

        let seller_id = parcel.owner_id.clone();

        let mut parcel = parcel.clone();
        parcel.owner_id = buyer_id.clone();
        parcel.price = U128(0);
        parcel.for_sale = false;
        parcel.last_updated = env::block_height();
        self.parcels.insert(key, parcel);

        self.decrement_owner_land_count(&seller_id);
        self.increment_owner_land_count(&buyer_id);
        self.record_transaction(
            x,
            y,
            Some(seller_id.clone()),
            buyer_id.clone(),
            price,
            TransactionType::Purchase,
        )?;

        if price > 0 {
            let _ = Promise::new(seller_id.clone()).transfer(NearToken::from_yoctonear(price));
        }
        refund_excess(&buyer_id, deposit, price);

        events::emit_land_purchased(&buyer_id, &seller_id, x, y, U128(price));
        Ok(())
    }
}

/// Returns any overpayment above `price` to the buyer.
pub(crate) fn refund_excess(buyer_id: &AccountId, deposit: u128, price: u128) {
    let refund = deposit.saturating_sub(price);
    if refund > 0 {
        let _ = Promise::new(buyer_id.clone()).transfer(NearToken::from_yoctonear(refund));
    }
}
