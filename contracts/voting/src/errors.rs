use soroban_sdk::contracterror;

use authorization::AuthError;
use shared::DescriptionError;

use crate::workflow::{Transition, WorkflowStatus};

/// Reason the ballot engine refused a command. Carries enough context to
/// explain the violated precondition; the contract boundary maps it to a
/// stable [`VotingError`] code.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BallotError {
    /// Caller lacks the role the command requires
    Unauthorized,
    /// Command is not accepted in the current phase
    InvalidPhase { current: WorkflowStatus },
    /// Phase transition requested from the wrong phase
    InvalidPhaseTransition {
        current: WorkflowStatus,
        transition: Transition,
    },
    AlreadyRegistered,
    AlreadyVoted,
    /// Identity can never be a voter or owner (the ballot contract itself)
    InvalidIdentity,
    InvalidProposal(DescriptionError),
    InvalidProposalId { proposal_id: u32, count: u32 },
    InvalidQuorum { requested: u32 },
    NoVotersRegistered,
    QuorumNotReached { required: u32, actual: u32 },
    NoProposals,
    TallyNotPerformed,
}

impl From<AuthError> for BallotError {
    fn from(_: AuthError) -> Self {
        BallotError::Unauthorized
    }
}

impl From<DescriptionError> for BallotError {
    fn from(err: DescriptionError) -> Self {
        BallotError::InvalidProposal(err)
    }
}

/// Error codes returned by the voting contract
///
/// Ranges:
/// - 1-19: General/Authorization errors
/// - 20-39: Workflow errors
/// - 40-59: Registry errors
/// - 60-79: Ballot and tally errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    // ===== General/Authorization Errors (1-19) =====
    Unauthorized = 1,
    NotInitialized = 2,
    AlreadyInitialized = 3,
    InvalidIdentity = 4,

    // ===== Workflow Errors (20-39) =====
    InvalidPhase = 20,
    InvalidPhaseTransition = 21,

    // ===== Registry Errors (40-59) =====
    AlreadyRegistered = 40,
    InvalidProposal = 41,
    InvalidProposalId = 42,

    // ===== Ballot and Tally Errors (60-79) =====
    AlreadyVoted = 60,
    InvalidQuorum = 61,
    NoVotersRegistered = 62,
    QuorumNotReached = 63,
    NoProposals = 64,
    TallyNotPerformed = 65,
}

impl From<BallotError> for VotingError {
    fn from(err: BallotError) -> Self {
        match err {
            BallotError::Unauthorized => VotingError::Unauthorized,
            BallotError::InvalidPhase { .. } => VotingError::InvalidPhase,
            BallotError::InvalidPhaseTransition { .. } => VotingError::InvalidPhaseTransition,
            BallotError::AlreadyRegistered => VotingError::AlreadyRegistered,
            BallotError::AlreadyVoted => VotingError::AlreadyVoted,
            BallotError::InvalidIdentity => VotingError::InvalidIdentity,
            BallotError::InvalidProposal(_) => VotingError::InvalidProposal,
            BallotError::InvalidProposalId { .. } => VotingError::InvalidProposalId,
            BallotError::InvalidQuorum { .. } => VotingError::InvalidQuorum,
            BallotError::NoVotersRegistered => VotingError::NoVotersRegistered,
            BallotError::QuorumNotReached { .. } => VotingError::QuorumNotReached,
            BallotError::NoProposals => VotingError::NoProposals,
            BallotError::TallyNotPerformed => VotingError::TallyNotPerformed,
        }
    }
}
