//! Core traits for the ledger
//!
//! This module defines the seam between the ledger and the source of new
//! account numbers, so that production code draws them at random while tests
//! can script collisions and exact values.

use crate::types::AccountNumber;

/// Source of candidate account numbers
///
/// The ledger calls `draw` until it gets a number that is assignable
/// (6 digits) and not already in use. Implementations are expected to cover
/// `[100000, 999999]` uniformly; anything outside that range is discarded.
pub trait AccountNumberSource {
    /// Draw the next candidate number
    fn draw(&mut self) -> AccountNumber;
}
