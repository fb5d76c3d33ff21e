//! Weights for pallet-oik-token.
//!
//! Hand-derived from the storage accesses of each call until the benchmarks in
//! `benchmarking.rs` are run against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet-oik-token.
pub trait WeightInfo {
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn transfer_ownership() -> Weight;
    fn renounce_ownership() -> Weight;
}

/// Weights for pallet-oik-token using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `OikToken::Owner` (r:1 w:0)
    /// Storage: `OikToken::MaxSupply` (r:1 w:0)
    /// Storage: `OikToken::TotalSupply` (r:1 w:1)
    /// Storage: `OikToken::Balances` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `OikToken::TotalSupply` (r:1 w:1)
    /// Storage: `OikToken::Balances` (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(15_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `OikToken::Owner` (r:1 w:1)
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `OikToken::Owner` (r:1 w:1)
    fn renounce_ownership() -> Weight {
        Weight::from_parts(9_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn mint() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(15_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn renounce_ownership() -> Weight {
        Weight::from_parts(9_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
