//! Ledger base: balance storage and the primitives the mint/burn controller
//! builds on.
//!
//! The read half ([`LedgerInspect`]) is public. The raw mutation half
//! ([`LedgerMutate`]) is crate-private so that nothing outside the controller
//! can move balances or supply around the cap and ownership checks.

use sp_runtime::ArithmeticError;
use sp_std::marker::PhantomData;

use crate::{Balances, Config, Owner, TotalSupply};

/// Read access to the ledger state.
pub trait LedgerInspect<AccountId> {
    /// Current balance of `who`; unknown accounts hold zero.
    fn balance_of(&self, who: &AccountId) -> u128;

    /// Sum of all balances.
    fn total_supply(&self) -> u128;

    /// The account allowed to mint, if any.
    fn current_owner(&self) -> Option<AccountId>;
}

/// Raw balance primitives. Each call moves one balance and the total supply
/// by the same amount, so `total_supply == Σ balances` holds across calls.
///
/// Implementations must not write anything when they return an error.
pub(crate) trait LedgerMutate<AccountId>: LedgerInspect<AccountId> {
    fn raw_increase_balance(
        &mut self,
        who: &AccountId,
        amount: u128,
    ) -> Result<(), ArithmeticError>;

    fn raw_decrease_balance(
        &mut self,
        who: &AccountId,
        amount: u128,
    ) -> Result<(), ArithmeticError>;
}

/// Ledger backed by the pallet's storage items.
pub struct StorageLedger<T>(PhantomData<T>);

impl<T> StorageLedger<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for StorageLedger<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Config> LedgerInspect<T::AccountId> for StorageLedger<T> {
    fn balance_of(&self, who: &T::AccountId) -> u128 {
        Balances::<T>::get(who)
    }

    fn total_supply(&self) -> u128 {
        TotalSupply::<T>::get()
    }

    fn current_owner(&self) -> Option<T::AccountId> {
        Owner::<T>::get()
    }
}

impl<T: Config> LedgerMutate<T::AccountId> for StorageLedger<T> {
    fn raw_increase_balance(
        &mut self,
        who: &T::AccountId,
        amount: u128,
    ) -> Result<(), ArithmeticError> {
        let new_supply =
            TotalSupply::<T>::get().checked_add(amount).ok_or(ArithmeticError::Overflow)?;
        let new_balance =
            Balances::<T>::get(who).checked_add(amount).ok_or(ArithmeticError::Overflow)?;

        TotalSupply::<T>::put(new_supply);
        if new_balance > 0 {
            Balances::<T>::insert(who, new_balance);
        }
        Ok(())
    }

    fn raw_decrease_balance(
        &mut self,
        who: &T::AccountId,
        amount: u128,
    ) -> Result<(), ArithmeticError> {
        let new_balance =
            Balances::<T>::get(who).checked_sub(amount).ok_or(ArithmeticError::Underflow)?;
        let new_supply =
            TotalSupply::<T>::get().checked_sub(amount).ok_or(ArithmeticError::Underflow)?;

        TotalSupply::<T>::put(new_supply);
        if new_balance == 0 {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, new_balance);
        }
        Ok(())
    }
}
