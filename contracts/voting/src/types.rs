use soroban_sdk::{contracttype, String};

use shared::{DEFAULT_ALLOW_VOTE_CHANGE, DEFAULT_QUORUM_PERCENT};

/// Whitelist record for a registered identity
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    pub voted_proposal_id: Option<u32>,
}

impl Voter {
    pub fn registered() -> Self {
        Self {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: None,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Position in submission order; stable for the lifetime of the ballot
    pub id: u32,
    pub description: String,
    pub vote_count: u32,
}

/// Deployment configuration supplied at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BallotSettings {
    /// Minimum participation required to close the voting session, in `[0, 100]`
    pub quorum_percentage: u32,
    /// Whether a voter may move their ballot to another proposal
    pub allow_vote_change: bool,
}

impl Default for BallotSettings {
    fn default() -> Self {
        Self {
            quorum_percentage: DEFAULT_QUORUM_PERCENT,
            allow_vote_change: DEFAULT_ALLOW_VOTE_CHANGE,
        }
    }
}

/// Quorum gate as seen by front-ends before closing the session
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuorumStatus {
    pub required: u32,
    pub participation: u32,
    pub reached: bool,
}
