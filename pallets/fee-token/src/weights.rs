//! Weights for pallet-fee-token.
//!
//! Hand-estimated from the storage accesses of each call until benchmark output
//! from `benchmarking.rs` replaces them.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-fee-token.
pub trait WeightInfo {
    fn mint() -> Weight;
    fn transfer() -> Weight;
    fn set_fee_basis_points() -> Weight;
    fn set_fee_manager() -> Weight;
    fn set_fee_treasury() -> Weight;
    fn whitelist_address() -> Weight;
    fn transfer_ownership() -> Weight;
}

/// Weights for pallet-fee-token using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `FeeToken::Owner` (r:1 w:0)
    /// Storage: `FeeToken::TotalSupply` (r:1 w:1)
    /// Storage: `FeeToken::Balances` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `FeeToken::Balances` (r:3 w:3)
    /// Storage: `FeeToken::Whitelist` (r:1 w:0)
    /// Storage: `FeeToken::FeeBasisPoints` (r:1 w:0)
    /// Storage: `FeeToken::FeeTreasury` (r:1 w:0)
    fn transfer() -> Weight {
        Weight::from_parts(20_000_000, 6_000)
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `FeeToken::FeeManager` (r:1 w:0)
    /// Storage: `FeeToken::FeeBasisPoints` (r:1 w:1)
    fn set_fee_basis_points() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `FeeToken::FeeManager` (r:1 w:1)
    fn set_fee_manager() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `FeeToken::FeeManager` (r:1 w:0)
    /// Storage: `FeeToken::FeeTreasury` (r:1 w:1)
    fn set_fee_treasury() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `FeeToken::FeeManager` (r:1 w:0)
    /// Storage: `FeeToken::Whitelist` (r:0 w:1)
    fn whitelist_address() -> Weight {
        Weight::from_parts(8_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `FeeToken::Owner` (r:1 w:1)
    fn transfer_ownership() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn mint() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(20_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads(6_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn set_fee_basis_points() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_fee_manager() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_fee_treasury() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn whitelist_address() -> Weight {
        Weight::from_parts(8_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
