//! Validation helper utilities for the voting contracts
//!
//! These helpers are pure: they take plain values and never touch storage,
//! so both the engine and its tests can call them directly.

use soroban_sdk::String;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_PERCENTAGE};

/// Reason a proposal description was refused
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DescriptionError {
    Empty,
    TooLong,
}

// ===== Percentage Validation =====

/// Whether `percentage` lies in `[0, 100]`
pub fn is_valid_percentage(percentage: u32) -> bool {
    percentage <= MAX_PERCENTAGE
}

/// Integer participation percentage, rounded half up.
///
/// Returns 0 when nobody is registered.
pub fn participation_percentage(voted: u32, registered: u32) -> u32 {
    if registered == 0 {
        return 0;
    }
    let voted = voted as u64;
    let registered = registered as u64;
    ((voted * 200 + registered) / (registered * 2)) as u32
}

/// Whether `participation` satisfies the `quorum` gate
pub fn is_quorum_met(participation: u32, quorum: u32) -> bool {
    participation >= quorum
}

// ===== Description Validation =====

/// Validate a proposal description: non-empty and at most
/// [`MAX_DESCRIPTION_LENGTH`] bytes
pub fn validate_description(description: &String) -> Result<(), DescriptionError> {
    let len = description.len();
    if len == 0 {
        return Err(DescriptionError::Empty);
    }
    if len > MAX_DESCRIPTION_LENGTH {
        return Err(DescriptionError::TooLong);
    }
    Ok(())
}
