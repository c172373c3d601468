//! Common constants used across the voting contracts

// ===== Governance Constants =====

/// Quorum applied when a deployment does not configure one (no quorum)
pub const DEFAULT_QUORUM_PERCENT: u32 = 0;

/// Deployments are vote-once unless configured otherwise
pub const DEFAULT_ALLOW_VOTE_CHANGE: bool = false;

/// Maximum percentage for quorum and participation (100%)
pub const MAX_PERCENTAGE: u32 = 100;

// ===== Proposal Constants =====

/// Maximum proposal description length in bytes
pub const MAX_DESCRIPTION_LENGTH: u32 = 512;

// ===== Storage Constants =====

// At ~5s per ledger: 30 days ≈ 518,400 ledgers, one year ≈ 6,307,200.

/// Remaining TTL below which the ballot entry gets extended
pub const BALLOT_TTL_THRESHOLD: u32 = 518_400;

/// TTL the ballot entry is extended to on every write
pub const BALLOT_TTL_EXTEND: u32 = 6_307_200;
