#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are kept for the public read API until callers move to explicit accessors
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Fee Token Pallet
//!
//! A fungible token ledger that deducts a percentage fee from every transfer and
//! routes it to a treasury account.
//!
//! - The **owner** mints new supply.
//! - The **fee manager** sets the fee rate (at most 1000 basis points), the
//!   treasury account and the fee whitelist.
//! - Senders on the whitelist transfer without paying a fee.
//!
//! Every multi-posting operation runs inside its own storage layer, so a failure
//! in any posting leaves balances and supply exactly as they were.

use frame_support::{
    dispatch::DispatchResult, ensure, pallet_prelude::*, storage::with_storage_layer,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

pub mod fee;
pub mod migrations;
pub mod roles;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "runtime::fee-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use crate::{
        fee::FeeSplit,
        roles::{is_zero_account, Role},
    };

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Weight information for extrinsics in this pallet.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "TestToken")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "TST")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Only minting increases it.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Holder of the mint authority
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Holder of the fee administration authority
    #[pallet::storage]
    #[pallet::getter(fn fee_manager)]
    pub type FeeManager<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account that collects transfer fees
    #[pallet::storage]
    #[pallet::getter(fn fee_treasury)]
    pub type FeeTreasury<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Transfer fee in basis points, never above `fee::MAX_FEE_BASIS_POINTS`
    #[pallet::storage]
    #[pallet::getter(fn fee)]
    pub type FeeBasisPoints<T> = StorageValue<_, u16, ValueQuery>;

    /// Senders exempt from the transfer fee
    #[pallet::storage]
    #[pallet::getter(fn is_whitelisted)]
    pub type Whitelist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Recipient of the genesis mint
    #[pallet::storage]
    #[pallet::getter(fn minted_address)]
    pub type MintedAddress<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens transferred; `amount` is what the recipient received after fees
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Transfer fee credited to the treasury
        FeeCollected { from: T::AccountId, treasury: T::AccountId, amount: u128 },
        /// Fee rate changed
        FeeBasisPointsChanged { old: u16, new: u16 },
        /// Fee manager role handed over
        FeeManagerChanged { old: T::AccountId, new: T::AccountId },
        /// Fee treasury account replaced
        FeeTreasuryChanged { old: Option<T::AccountId>, new: T::AccountId },
        /// Whitelist membership set
        WhitelistUpdated { account: T::AccountId, whitelisted: bool },
        /// Owner role handed over
        OwnershipTransferred { old: T::AccountId, new: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold the role the call requires.
        AccessDenied,
        /// Debit larger than the account balance.
        InsufficientBalance,
        /// Fee rate above the 1000 basis point ceiling.
        InvalidFee,
        /// The zero account, or no account at all, where a real holder is required.
        InvalidAddress,
        /// Balance or supply would exceed `u128::MAX`.
        Overflow,
    }

    #[pallet::extra_constants]
    impl<T: Config> Pallet<T> {
        /// Highest fee rate `set_fee_basis_points` accepts.
        #[pallet::constant_name(MaxFeeBasisPoints)]
        pub fn max_fee_basis_points() -> u16 {
            fee::MAX_FEE_BASIS_POINTS
        }

        /// Basis points that make up 100%.
        #[pallet::constant_name(BasisPointsDenominator)]
        pub fn basis_points_denominator() -> u128 {
            fee::BASIS_POINTS_DENOMINATOR
        }
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
        /// Create `amount` new tokens in `to`'s account. Owner only; no fee applies.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Role::Owner.ensure_holder::<T>(&who)?;
            Self::do_mint(to, amount)
        }

        /// Move `amount` from the signer to `to`, less the transfer fee unless the
        /// signer is whitelisted.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let from = ensure_signed(origin)?;
            Self::do_transfer(from, to, amount)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::set_fee_basis_points())]
        pub fn set_fee_basis_points(origin: OriginFor<T>, value: u16) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Role::FeeManager.ensure_holder::<T>(&who)?;
            ensure!(fee::is_valid_rate(value), Error::<T>::InvalidFee);

            let old = FeeBasisPoints::<T>::mutate(|bp| core::mem::replace(bp, value));
            log::info!(target: LOG_TARGET, "Fee rate changed from {old} to {value} bp");
            Self::deposit_event(Event::FeeBasisPointsChanged { old, new: value });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::set_fee_manager())]
        pub fn set_fee_manager(origin: OriginFor<T>, new_manager: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let old = Role::FeeManager.hand_over::<T>(&who, new_manager.clone())?;
            Self::deposit_event(Event::FeeManagerChanged { old, new: new_manager });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::set_fee_treasury())]
        pub fn set_fee_treasury(origin: OriginFor<T>, new_treasury: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Role::FeeManager.ensure_holder::<T>(&who)?;
            ensure!(!is_zero_account(&new_treasury), Error::<T>::InvalidAddress);

            let old = FeeTreasury::<T>::mutate(|treasury| treasury.replace(new_treasury.clone()));
            log::info!(target: LOG_TARGET, "Fee treasury changed from {old:?} to {new_treasury:?}");
            Self::deposit_event(Event::FeeTreasuryChanged { old, new: new_treasury });
            Ok(())
        }

        /// Add `account` to or remove it from the fee whitelist. Setting the
        /// current value again succeeds and emits the event.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::whitelist_address())]
        pub fn whitelist_address(
            origin: OriginFor<T>,
            account: T::AccountId,
            whitelisted: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Role::FeeManager.ensure_holder::<T>(&who)?;

            if whitelisted {
                Whitelist::<T>::insert(&account, true);
            } else {
                Whitelist::<T>::remove(&account);
            }
            Self::deposit_event(Event::WhitelistUpdated { account, whitelisted });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let old = Role::Owner.hand_over::<T>(&who, new_owner.clone())?;
            Self::deposit_event(Event::OwnershipTransferred { old, new: new_owner });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Increase supply and credit `to`. Callers are responsible for the owner check.
        pub fn do_mint(to: T::AccountId, amount: u128) -> DispatchResult {
            with_storage_layer(|| -> DispatchResult {
                TotalSupply::<T>::try_mutate(|supply| -> DispatchResult {
                    *supply = supply.checked_add(amount).ok_or(Error::<T>::Overflow)?;
                    Ok(())
                })?;
                Self::credit(&to, amount)
            })?;

            log::debug!(target: LOG_TARGET, "Minted {amount} to {to:?}");
            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        /// Move `amount` out of `from`, splitting it between `to` and the fee
        /// treasury. `from` must be the authenticated caller.
        pub fn do_transfer(from: T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
            let split = Self::fee_split(&from, amount);

            let treasury = with_storage_layer(|| -> Result<Option<T::AccountId>, DispatchError> {
                Self::debit(&from, amount)?;
                Self::credit(&to, split.net)?;
                if split.fee == 0 {
                    return Ok(None);
                }
                let treasury = FeeTreasury::<T>::get().ok_or(Error::<T>::InvalidAddress)?;
                Self::credit(&treasury, split.fee)?;
                Ok(Some(treasury))
            })?;

            log::debug!(
                target: LOG_TARGET,
                "Transferred {amount} from {from:?} to {to:?} (net {}, fee {})",
                split.net,
                split.fee
            );
            Self::deposit_event(Event::Transferred {
                from: from.clone(),
                to,
                amount: split.net,
            });
            if let Some(treasury) = treasury {
                Self::deposit_event(Event::FeeCollected { from, treasury, amount: split.fee });
            }
            Ok(())
        }

        /// How a transfer of `amount` by `from` would be divided right now.
        pub fn fee_split(from: &T::AccountId, amount: u128) -> FeeSplit {
            if Whitelist::<T>::get(from) {
                FeeSplit::exempt(amount)
            } else {
                fee::split(amount, FeeBasisPoints::<T>::get())
            }
        }

        fn credit(who: &T::AccountId, amount: u128) -> DispatchResult {
            Balances::<T>::try_mutate(who, |balance| -> DispatchResult {
                *balance = balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
                Ok(())
            })
        }

        fn debit(who: &T::AccountId, amount: u128) -> DispatchResult {
            Balances::<T>::try_mutate(who, |balance| -> DispatchResult {
                *balance = balance.checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
                Ok(())
            })
        }

        /// Checks the ledger invariants: supply equals the sum of balances and the
        /// fee rate is within bounds.
        #[cfg(any(feature = "try-runtime", test))]
        pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
            let sum = Balances::<T>::iter_values()
                .try_fold(0u128, |acc, balance| acc.checked_add(balance))
                .ok_or(sp_runtime::TryRuntimeError::Other("Sum of balances overflows"))?;
            ensure!(
                sum == TotalSupply::<T>::get(),
                sp_runtime::TryRuntimeError::Other("Total supply differs from sum of balances")
            );
            ensure!(
                fee::is_valid_rate(FeeBasisPoints::<T>::get()),
                sp_runtime::TryRuntimeError::Other("Fee rate above ceiling")
            );
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Token name
        pub name: Vec<u8>,
        /// Token symbol
        pub symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Mint authority, the deploying account
        pub owner: Option<T::AccountId>,
        /// Fee administration authority
        pub fee_manager: Option<T::AccountId>,
        /// Account that collects transfer fees
        pub fee_treasury: Option<T::AccountId>,
        /// Initial fee rate in basis points
        pub fee_basis_points: u16,
        /// Supply created at genesis
        pub initial_mint_amount: u128,
        /// Account that receives the genesis supply
        pub initial_mint_recipient: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            assert!(
                fee::is_valid_rate(self.fee_basis_points),
                "Fee rate above {} basis points",
                fee::MAX_FEE_BASIS_POINTS
            );
            FeeBasisPoints::<T>::put(self.fee_basis_points);

            for (role, holder) in [
                ("owner", &self.owner),
                ("fee manager", &self.fee_manager),
                ("fee treasury", &self.fee_treasury),
            ] {
                if let Some(holder) = holder {
                    assert!(!is_zero_account(holder), "Genesis {role} is the zero account");
                }
            }
            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }
            if let Some(ref manager) = self.fee_manager {
                FeeManager::<T>::put(manager);
            }
            if let Some(ref treasury) = self.fee_treasury {
                FeeTreasury::<T>::put(treasury);
            }

            match self.initial_mint_recipient {
                Some(ref recipient) => {
                    Balances::<T>::insert(recipient, self.initial_mint_amount);
                    TotalSupply::<T>::put(self.initial_mint_amount);
                    MintedAddress::<T>::put(recipient);
                },
                None => assert!(
                    self.initial_mint_amount == 0,
                    "Initial mint amount set without a recipient"
                ),
            }
        }
    }
}
