//! Benchmarking setup for pallet-fee-token

use super::*;

#[allow(unused)]
use crate::Pallet as FeeToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn set_roles<T: Config>() -> (T::AccountId, T::AccountId) {
    let owner: T::AccountId = account("owner", 0, 0);
    let manager: T::AccountId = account("manager", 0, 0);
    let treasury: T::AccountId = account("treasury", 0, 0);
    Owner::<T>::put(&owner);
    FeeManager::<T>::put(&manager);
    FeeTreasury::<T>::put(&treasury);
    (owner, manager)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let (owner, _) = set_roles::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    // Worst case: the sender pays a fee, so three balances are written.
    #[benchmark]
    fn transfer() {
        set_roles::<T>();
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        FeeBasisPoints::<T>::put(fee::MAX_FEE_BASIS_POINTS);
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), 900_000);
    }

    #[benchmark]
    fn set_fee_basis_points() {
        let (_, manager) = set_roles::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(manager), fee::MAX_FEE_BASIS_POINTS);

        assert_eq!(FeeBasisPoints::<T>::get(), fee::MAX_FEE_BASIS_POINTS);
    }

    #[benchmark]
    fn set_fee_manager() {
        let (_, manager) = set_roles::<T>();
        let new_manager: T::AccountId = account("new_manager", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(manager), new_manager.clone());

        assert_eq!(FeeManager::<T>::get(), Some(new_manager));
    }

    #[benchmark]
    fn set_fee_treasury() {
        let (_, manager) = set_roles::<T>();
        let new_treasury: T::AccountId = account("new_treasury", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(manager), new_treasury.clone());

        assert_eq!(FeeTreasury::<T>::get(), Some(new_treasury));
    }

    #[benchmark]
    fn whitelist_address() {
        let (_, manager) = set_roles::<T>();
        let account: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(manager), account.clone(), true);

        assert_eq!(Whitelist::<T>::get(&account), true);
    }

    #[benchmark]
    fn transfer_ownership() {
        let (owner, _) = set_roles::<T>();
        let new_owner: T::AccountId = account("new_owner", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    impl_benchmark_test_suite!(FeeToken, crate::mock::new_test_ext(), crate::mock::Test);
}
