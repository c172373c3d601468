#![no_std]
//! # Shared Voting Contracts Library
//!
//! Constants and validation helpers reused by the voting contracts.
//!
//! ## Modules
//!
//! - `constants` - Bounds, defaults and storage TTL values
//! - `validation` - Pure validation and participation arithmetic
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! shared = { path = "../shared" }
//! ```
//!
//! ```rust,ignore
//! use shared::constants::DEFAULT_QUORUM_PERCENT;
//! use shared::validation::{participation_percentage, validate_description};
//! ```

pub mod constants;
pub mod validation;

pub use constants::{
    BALLOT_TTL_EXTEND, BALLOT_TTL_THRESHOLD, DEFAULT_ALLOW_VOTE_CHANGE, DEFAULT_QUORUM_PERCENT,
    MAX_DESCRIPTION_LENGTH, MAX_PERCENTAGE,
};
pub use validation::{
    is_quorum_met, is_valid_percentage, participation_percentage, validate_description,
    DescriptionError,
};
