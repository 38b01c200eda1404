//! Benchmarking setup for pallet-lue-token

use super::*;

#[allow(unused)]
use crate::Pallet as LueToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_std::vec;

/// Makes the whitelisted caller owner and minter and lifts the supply ceiling.
fn setup_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = whitelisted_caller();
    Owner::<T>::put(&owner);
    Minters::<T>::insert(&owner, true);
    MaxSupply::<T>::put(T::Balance::max_value());
    Paused::<T>::put(false);
    owner
}

/// Credits `who` while keeping total supply in step with balances.
fn fund<T: Config>(who: &T::AccountId, amount: T::Balance) {
    Balances::<T>::mutate(who, |balance| *balance = balance.saturating_add(amount));
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

fn unit<T: Config>() -> T::Balance {
    T::Balance::from(1_000_000u32)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller = setup_owner::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount = unit::<T>();
        fund::<T>(&caller, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn mint() {
        let caller = setup_owner::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount = unit::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn() {
        let caller = setup_owner::<T>();
        let amount = unit::<T>();
        fund::<T>(&caller, amount);
        let before = Balances::<T>::get(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount);

        assert_eq!(Balances::<T>::get(&caller), before.saturating_sub(amount));
    }

    #[benchmark]
    fn add_minter() {
        let owner = setup_owner::<T>();
        let minter: T::AccountId = account("minter", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), minter.clone());

        assert!(Minters::<T>::get(&minter));
    }

    #[benchmark]
    fn remove_minter() {
        let owner = setup_owner::<T>();
        let minter: T::AccountId = account("minter", 0, 0);
        Minters::<T>::insert(&minter, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), minter.clone());

        assert!(!Minters::<T>::get(&minter));
    }

    #[benchmark]
    fn pause() {
        let owner = setup_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(Paused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let owner = setup_owner::<T>();
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(!Paused::<T>::get());
    }

    #[benchmark]
    fn add_to_blacklist() {
        let owner = setup_owner::<T>();
        let blocked: T::AccountId = account("blocked", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), blocked.clone());

        assert!(Blacklist::<T>::get(&blocked));
    }

    #[benchmark]
    fn remove_from_blacklist() {
        let owner = setup_owner::<T>();
        let blocked: T::AccountId = account("blocked", 0, 0);
        Blacklist::<T>::insert(&blocked, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), blocked.clone());

        assert!(!Blacklist::<T>::get(&blocked));
    }

    #[benchmark]
    fn batch_transfer(n: Linear<0, { T::MaxBatchSize::get() }>) {
        let caller = setup_owner::<T>();
        let amount = unit::<T>();
        fund::<T>(&caller, amount.saturating_mul(T::Balance::from(n.max(1))));
        let recipients: Vec<T::AccountId> = (0..n).map(|i| account("recipient", i, 0)).collect();
        let amounts = vec![amount; n as usize];

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipients.clone(), amounts);

        for recipient in recipients {
            assert_eq!(Balances::<T>::get(&recipient), amount);
        }
    }

    #[benchmark]
    fn batch_mint(n: Linear<0, { T::MaxBatchSize::get() }>) {
        let caller = setup_owner::<T>();
        let amount = unit::<T>();
        let recipients: Vec<T::AccountId> = (0..n).map(|i| account("recipient", i, 0)).collect();
        let amounts = vec![amount; n as usize];

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipients.clone(), amounts);

        for recipient in recipients {
            assert_eq!(Balances::<T>::get(&recipient), amount);
        }
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        let amount = unit::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), amount);

        assert_eq!(Allowances::<T>::get(&caller, &spender), amount);
    }

    #[benchmark]
    fn transfer_from() {
        let holder = setup_owner::<T>();
        let spender: T::AccountId = account("spender", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount = unit::<T>();
        fund::<T>(&holder, amount);
        Allowances::<T>::insert(&holder, &spender, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), holder.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert!(Allowances::<T>::get(&holder, &spender).is_zero());
    }

    #[benchmark]
    fn burn_from() {
        let holder = setup_owner::<T>();
        let spender: T::AccountId = account("spender", 0, 0);
        let amount = unit::<T>();
        fund::<T>(&holder, amount);
        Allowances::<T>::insert(&holder, &spender, amount);
        let supply = TotalSupply::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(spender), holder, amount);

        assert_eq!(TotalSupply::<T>::get(), supply.saturating_sub(amount));
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner = setup_owner::<T>();
        let new_owner: T::AccountId = account("owner", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    impl_benchmark_test_suite!(LueToken, crate::mock::new_test_ext(), crate::mock::Test);
}
