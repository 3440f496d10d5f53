//! The two single-holder authorities of the ledger.
//!
//! The owner may mint; the fee manager administers the fee rate, the treasury
//! and the whitelist. Each role is stored separately and handing one over never
//! touches the other.

use codec::Encode;
use frame_support::{ensure, pallet_prelude::DispatchError};
use sp_runtime::{DispatchResult, RuntimeDebug};

use crate::{Config, Error, FeeManager, Owner};

#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum Role {
    /// Mint authority.
    Owner,
    /// Fee rate, treasury and whitelist authority.
    FeeManager,
}

impl Role {
    /// Current holder of the role, if one was ever assigned.
    pub fn holder<T: Config>(self) -> Option<T::AccountId> {
        match self {
            Role::Owner => Owner::<T>::get(),
            Role::FeeManager => FeeManager::<T>::get(),
        }
    }

    /// Fails with `AccessDenied` unless `who` holds the role.
    pub fn ensure_holder<T: Config>(self, who: &T::AccountId) -> DispatchResult {
        ensure!(self.holder::<T>().as_ref() == Some(who), Error::<T>::AccessDenied);
        Ok(())
    }

    /// Hands the role from `caller` to `new_holder`, returning the previous holder.
    pub fn hand_over<T: Config>(
        self,
        caller: &T::AccountId,
        new_holder: T::AccountId,
    ) -> Result<T::AccountId, DispatchError> {
        self.ensure_holder::<T>(caller)?;
        ensure!(!is_zero_account(&new_holder), Error::<T>::InvalidAddress);

        match self {
            Role::Owner => Owner::<T>::put(&new_holder),
            Role::FeeManager => FeeManager::<T>::put(&new_holder),
        }

        log::info!(
            target: crate::LOG_TARGET,
            "{:?} role handed over from {:?} to {:?}",
            self,
            caller,
            new_holder
        );

        Ok(caller.clone())
    }
}

/// The null address: an account whose encoding is all zero bytes.
pub fn is_zero_account<AccountId: Encode>(who: &AccountId) -> bool {
    who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
}
