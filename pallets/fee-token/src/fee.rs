//! Transfer fee arithmetic.
//!
//! Fees are expressed in basis points (1 bp = 0.01%) and always truncate toward
//! zero. The rate ceiling is fixed at 1000 bp (10%).

use sp_runtime::RuntimeDebug;

/// Highest fee rate the ledger accepts, in basis points.
pub const MAX_FEE_BASIS_POINTS: u16 = 1_000;

/// Basis points that make up 100%.
pub const BASIS_POINTS_DENOMINATOR: u128 = 10_000;

/// How a transferred amount is divided between recipient and treasury.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub struct FeeSplit {
    /// Amount credited to the recipient.
    pub net: u128,
    /// Amount credited to the fee treasury.
    pub fee: u128,
}

impl FeeSplit {
    /// Split with no fee taken, used for whitelisted senders.
    pub fn exempt(amount: u128) -> Self {
        Self { net: amount, fee: 0 }
    }
}

/// Whether `basis_points` is an acceptable fee rate.
pub fn is_valid_rate(basis_points: u16) -> bool {
    basis_points <= MAX_FEE_BASIS_POINTS
}

/// Computes `floor(amount * basis_points / 10_000)` and the remainder.
///
/// The product is formed in two halves so that no `u128` amount can overflow.
/// Rates above 100% are treated as 100%.
pub fn split(amount: u128, basis_points: u16) -> FeeSplit {
    let rate = u128::from(basis_points).min(BASIS_POINTS_DENOMINATOR);
    let whole = amount / BASIS_POINTS_DENOMINATOR * rate;
    let part = amount % BASIS_POINTS_DENOMINATOR * rate / BASIS_POINTS_DENOMINATOR;
    let fee = whole + part;

    FeeSplit { net: amount - fee, fee }
}
