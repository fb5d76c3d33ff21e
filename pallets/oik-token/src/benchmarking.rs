//! Benchmarking setup for pallet-oik-token

use super::*;

#[allow(unused)]
use crate::Pallet as OikToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Install `owner` and leave the full `u128` range as headroom.
fn setup_owner<T: Config>(owner: &T::AccountId) {
    Owner::<T>::put(owner);
    MaxSupply::<T>::put(u128::MAX);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let owner: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        setup_owner::<T>(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(TotalSupply::<T>::get(), amount);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        let amount: u128 = 1_000_000;

        // Setup: give caller a balance to burn from
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount);

        assert_eq!(Balances::<T>::get(&caller), 9_000_000);
        assert_eq!(TotalSupply::<T>::get(), 9_000_000);
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("new_owner", 0, 0);
        setup_owner::<T>(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn renounce_ownership() {
        let owner: T::AccountId = whitelisted_caller();
        setup_owner::<T>(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert_eq!(Owner::<T>::get(), None);
    }

    impl_benchmark_test_suite!(OikToken, crate::mock::new_test_ext(), crate::mock::Test);
}
