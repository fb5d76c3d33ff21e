//! Supply-capped mint/burn controller.
//!
//! Pure state transitions over a [`LedgerMutate`] implementation. Every check
//! runs against the current ledger snapshot before the first write, so a
//! rejected call leaves the ledger exactly as it was.

use crate::ledger::{LedgerInspect, LedgerMutate};

/// Why a mint was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintError {
    /// Caller is not the current owner, or there is no owner.
    Unauthorized,
    /// The mint would take total supply past the maximum supply.
    SupplyCapExceeded,
    /// `total_supply + amount` does not fit in a `u128`.
    Overflow,
}

/// Why a burn was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurnError {
    /// Caller holds less than the requested amount.
    InsufficientBalance,
}

/// Owner-only check against the owner currently recorded in the ledger.
pub(crate) fn ensure_owner<AccountId, L>(ledger: &L, caller: &AccountId) -> Result<(), MintError>
where
    AccountId: PartialEq,
    L: LedgerInspect<AccountId>,
{
    match ledger.current_owner() {
        Some(owner) if owner == *caller => Ok(()),
        _ => Err(MintError::Unauthorized),
    }
}

/// Credit `amount` to `target`, provided `caller` owns the ledger and the
/// resulting supply stays within `max_supply`.
pub(crate) fn mint<AccountId, L>(
    ledger: &mut L,
    max_supply: u128,
    caller: &AccountId,
    target: &AccountId,
    amount: u128,
) -> Result<(), MintError>
where
    AccountId: PartialEq,
    L: LedgerMutate<AccountId>,
{
    ensure_owner(ledger, caller)?;

    let new_supply = ledger.total_supply().checked_add(amount).ok_or(MintError::Overflow)?;
    if new_supply > max_supply {
        return Err(MintError::SupplyCapExceeded)
    }
    // Balances never exceed total supply, so the target cannot overflow here.
    ledger.raw_increase_balance(target, amount).map_err(|_| MintError::Overflow)
}

/// Debit `amount` from the caller's own balance.
pub(crate) fn burn<AccountId, L>(
    ledger: &mut L,
    caller: &AccountId,
    amount: u128,
) -> Result<(), BurnError>
where
    L: LedgerMutate<AccountId>,
{
    if ledger.balance_of(caller) < amount {
        return Err(BurnError::InsufficientBalance)
    }
    ledger
        .raw_decrease_balance(caller, amount)
        .map_err(|_| BurnError::InsufficientBalance)
}
