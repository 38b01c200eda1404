//! Weights for pallet-lue-token.
//!
//! The figures below are placeholders estimated by hand from the storage
//! accesses of each call, not benchmark output. Regenerate with
//! `frame-omni-bencher v1 benchmark pallet --pallet pallet_lue_token` once the
//! pallet is wired into a runtime with the `runtime-benchmarks` feature.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn transfer() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn add_minter() -> Weight;
    fn remove_minter() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn add_to_blacklist() -> Weight;
    fn remove_from_blacklist() -> Weight;
    fn batch_transfer(n: u32) -> Weight;
    fn batch_mint(n: u32) -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
    fn burn_from() -> Weight;
    fn transfer_ownership() -> Weight;
}

/// Weights for pallet-lue-token using the runtime's configured `DbWeight`.
///
/// Placeholder figures: the `ref_time` / `proof_size` parts are hand estimates
/// until the benchmarks are run against a runtime.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Paused, Blacklist(to), Balances(from), Balances(to)
    // Writes: Balances(from), Balances(to)
    fn transfer() -> Weight {
        Weight::from_parts(28_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    // Reads: Paused, Minters, Blacklist, TotalSupply, MaxSupply, Balances(to)
    // Writes: TotalSupply, Balances(to)
    fn mint() -> Weight {
        Weight::from_parts(26_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(22_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn add_minter() -> Weight {
        Weight::from_parts(15_000_000, 3_517)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn remove_minter() -> Weight {
        Weight::from_parts(14_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn pause() -> Weight {
        Weight::from_parts(12_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn unpause() -> Weight {
        Weight::from_parts(12_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn add_to_blacklist() -> Weight {
        Weight::from_parts(15_000_000, 3_517)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn remove_from_blacklist() -> Weight {
        Weight::from_parts(14_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// The range of component `n` is `[0, MaxBatchSize]`.
    fn batch_transfer(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 3_593)
            .saturating_add(Weight::from_parts(18_000_000, 2_603).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// The range of component `n` is `[0, MaxBatchSize]`.
    fn batch_mint(n: u32) -> Weight {
        Weight::from_parts(12_000_000, 1_517)
            .saturating_add(Weight::from_parts(17_000_000, 2_603).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(16_000_000, 0)
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(34_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(30_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(13_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For tests. Same placeholder figures as `SubstrateWeight`, priced with `RocksDbWeight`.
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(28_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn mint() -> Weight {
        Weight::from_parts(26_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(6_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(22_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn add_minter() -> Weight {
        Weight::from_parts(15_000_000, 3_517)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn remove_minter() -> Weight {
        Weight::from_parts(14_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn pause() -> Weight {
        Weight::from_parts(12_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn unpause() -> Weight {
        Weight::from_parts(12_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn add_to_blacklist() -> Weight {
        Weight::from_parts(15_000_000, 3_517)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn remove_from_blacklist() -> Weight {
        Weight::from_parts(14_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn batch_transfer(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 3_593)
            .saturating_add(Weight::from_parts(18_000_000, 2_603).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn batch_mint(n: u32) -> Weight {
        Weight::from_parts(12_000_000, 1_517)
            .saturating_add(Weight::from_parts(17_000_000, 2_603).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(16_000_000, 0)
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(34_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(30_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(13_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
