//! Storage migrations for pallet-oik-token.
//!
//! Each migration checks the on-chain storage version before touching
//! anything, so it is safe to leave in the runtime's migration tuple after it
//! has run. Wire it into `Executive` like any other `OnRuntimeUpgrade`:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_oik_token::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet, LOG_TARGET};

/// Version 1: the first release that tracks `MaxSupply` and `Owner`.
///
/// Chains that predate storage versioning are stamped with v1. No data moves;
/// under `try-runtime` the supply invariants are re-checked on both sides of
/// the upgrade.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                log::info!(target: LOG_TARGET, "stamping storage version v1");
                StorageVersion::new(1).put::<Pallet<T>>();
                T::DbWeight::get().reads_writes(1, 1)
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "storage already at v{on_chain_version:?}, skipping v1 migration"
                );
                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            Pallet::<T>::do_try_state()?;
            Ok(crate::TotalSupply::<T>::get().encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_supply: u128 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("failed to decode pre-state"))?;

            ensure!(
                Pallet::<T>::on_chain_storage_version() >= 1,
                sp_runtime::TryRuntimeError::Other("migration to v1 did not complete")
            );
            ensure!(
                crate::TotalSupply::<T>::get() == pre_supply,
                sp_runtime::TryRuntimeError::Other("total supply changed during migration")
            );
            Pallet::<T>::do_try_state()
        }
    }
}
