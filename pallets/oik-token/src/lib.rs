#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` is deprecated upstream; the read API below still relies on it.
#![allow(deprecated)]

//! # OIK Token Pallet
//!
//! A fungible token with a single owner who may mint up to an immutable
//! maximum supply. Any holder may burn from their own balance.
//!
//! - [`Call::mint`]: owner-only, rejected if total supply would exceed
//!   [`Pallet::max_supply`].
//! - [`Call::burn`]: debits the signer's own balance.
//! - [`Call::transfer_ownership`] / [`Call::renounce_ownership`]: replace
//!   the single owner value ([`Pallet::owner`]).
//!
//! Mint and burn go through the [`controller`] module, which only touches
//! balances via the crate-private primitives of [`ledger`]. Storage items are
//! crate-private; other pallets read through the getters or [`LedgerInspect`]:
//!
//! ```no_run
//! fn headroom<T: pallet_oik_token::Config>() -> u128 {
//!     pallet_oik_token::Pallet::<T>::max_supply() - pallet_oik_token::Pallet::<T>::total_supply()
//! }
//! ```
//!
//! but cannot write supply or balances directly:
//!
//! ```compile_fail
//! fn inflate<T: pallet_oik_token::Config>() {
//!     pallet_oik_token::TotalSupply::<T>::put(u128::MAX);
//! }
//! ```

use frame_support::{dispatch::DispatchResult, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use controller::{BurnError, MintError};
pub use ledger::{LedgerInspect, StorageLedger};
pub use pallet::*;
pub use weights::WeightInfo;

pub mod controller;
pub mod ledger;
pub mod migrations;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-oik-token";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Weight information for extrinsics in this pallet.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "OIK")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub(crate) type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "OIK")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub(crate) type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals (e.g., 6 for USDC-style, 18 for ETH-style)
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub(crate) type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Upper bound on total supply. Written once at genesis.
    #[pallet::storage]
    #[pallet::getter(fn max_supply)]
    pub(crate) type MaxSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Total token supply
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub(crate) type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub(crate) type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// The only account allowed to mint. `None` once ownership is renounced.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub(crate) type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens destroyed from the holder's own balance
        Burned { from: T::AccountId, amount: u128 },
        /// Owner replaced or cleared
        OwnershipTransferred {
            previous_owner: Option<T::AccountId>,
            new_owner: Option<T::AccountId>,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the current owner.
        Unauthorized,
        /// Mint would push total supply above the maximum supply.
        SupplyCapExceeded,
        /// Burn amount exceeds the caller's balance.
        InsufficientBalance,
        /// Arithmetic overflow in supply accounting.
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Mint `amount` new tokens to `to`. Owner only.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            let mut ledger = StorageLedger::<T>::new();

            controller::mint(&mut ledger, MaxSupply::<T>::get(), &caller, &to, amount).map_err(
                |e| {
                    log::debug!(target: LOG_TARGET, "mint of {amount} to {to:?} rejected: {e:?}");
                    Error::<T>::from(e)
                },
            )?;

            log::trace!(
                target: LOG_TARGET,
                "minted {amount} to {to:?}, total supply now {}",
                ledger.total_supply()
            );
            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        /// Burn `amount` tokens from the signer's own balance.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            let mut ledger = StorageLedger::<T>::new();

            controller::burn(&mut ledger, &caller, amount).map_err(|e| {
                log::debug!(target: LOG_TARGET, "burn of {amount} by {caller:?} rejected: {e:?}");
                Error::<T>::from(e)
            })?;

            log::trace!(
                target: LOG_TARGET,
                "burned {amount} from {caller:?}, total supply now {}",
                ledger.total_supply()
            );
            Self::deposit_event(Event::Burned { from: caller, amount });
            Ok(())
        }

        /// Hand minting rights to `new_owner`. Owner only.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(
            origin: OriginFor<T>,
            new_owner: T::AccountId,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_owner(&caller)?;

            Owner::<T>::put(&new_owner);
            log::info!(target: LOG_TARGET, "ownership moved from {caller:?} to {new_owner:?}");
            Self::deposit_event(Event::OwnershipTransferred {
                previous_owner: Some(caller),
                new_owner: Some(new_owner),
            });
            Ok(())
        }

        /// Drop the owner. No account can mint afterwards.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::renounce_ownership())]
        pub fn renounce_ownership(origin: OriginFor<T>) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_owner(&caller)?;

            Owner::<T>::kill();
            log::info!(target: LOG_TARGET, "ownership renounced by {caller:?}");
            Self::deposit_event(Event::OwnershipTransferred {
                previous_owner: Some(caller),
                new_owner: None,
            });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial owner (the deployer); `None` leaves minting disabled
        pub owner: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Immutable ceiling on total supply
        pub max_supply: u128,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);
            MaxSupply::<T>::put(self.max_supply);

            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                total = total.checked_add(*amount).expect("Initial balances overflow u128");
                if *amount > 0 {
                    Balances::<T>::mutate(account, |bal| *bal += *amount);
                }
            }
            assert!(total <= self.max_supply, "Initial balances exceed max supply");
            TotalSupply::<T>::put(total);
        }
    }
}

impl<T: Config> Pallet<T> {
    fn ensure_owner(caller: &T::AccountId) -> DispatchResult {
        controller::ensure_owner(&StorageLedger::<T>::new(), caller).map_err(|e| {
            log::debug!(target: LOG_TARGET, "owner-only call by {caller:?} rejected");
            Error::<T>::from(e).into()
        })
    }

    /// Check the supply invariants against current storage.
    ///
    /// Fails if total supply exceeds the maximum supply or differs from the
    /// sum of all balances.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> DispatchResult {
        let total = TotalSupply::<T>::get();
        ensure!(total <= MaxSupply::<T>::get(), "total supply exceeds max supply");

        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, bal| acc.checked_add(bal))
            .ok_or("sum of balances overflows u128")?;
        ensure!(sum == total, "total supply does not match sum of balances");
        Ok(())
    }
}

impl<T: Config> From<MintError> for Error<T> {
    fn from(e: MintError) -> Self {
        match e {
            MintError::Unauthorized => Error::<T>::Unauthorized,
            MintError::SupplyCapExceeded => Error::<T>::SupplyCapExceeded,
            MintError::Overflow => Error::<T>::Overflow,
        }
    }
}

impl<T: Config> From<BurnError> for Error<T> {
    fn from(e: BurnError) -> Self {
        match e {
            BurnError::InsufficientBalance => Error::<T>::InsufficientBalance,
        }
    }
}
