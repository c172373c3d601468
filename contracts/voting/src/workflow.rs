//! Ballot workflow: six ordered phases and the administrative transitions
//! between them.

use soroban_sdk::contracttype;

use crate::errors::BallotError;

/// Lifecycle phase of a ballot. Strictly ordered; a ballot only ever moves
/// to the next value.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    VoterRegistration = 0,
    ProposalsRegistration = 1,
    ProposalsRegistrationEnded = 2,
    VotingSession = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

/// Administrative command moving a ballot to its next phase
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    StartProposalsRegistration,
    EndProposalsRegistration,
    StartVotingSession,
    EndVotingSession,
    TallyVotes,
}

impl Transition {
    pub const ALL: [Transition; 5] = [
        Transition::StartProposalsRegistration,
        Transition::EndProposalsRegistration,
        Transition::StartVotingSession,
        Transition::EndVotingSession,
        Transition::TallyVotes,
    ];

    /// Transition table: the only phase a command is legal from, and the
    /// phase it leads to.
    pub fn edge(self) -> (WorkflowStatus, WorkflowStatus) {
        use WorkflowStatus::*;
        match self {
            Transition::StartProposalsRegistration => (VoterRegistration, ProposalsRegistration),
            Transition::EndProposalsRegistration => {
                (ProposalsRegistration, ProposalsRegistrationEnded)
            }
            Transition::StartVotingSession => (ProposalsRegistrationEnded, VotingSession),
            Transition::EndVotingSession => (VotingSession, VotingSessionEnded),
            Transition::TallyVotes => (VotingSessionEnded, VotesTallied),
        }
    }
}

impl WorkflowStatus {
    /// The phase that follows this one, `None` once votes are tallied
    pub fn next(self) -> Option<WorkflowStatus> {
        use WorkflowStatus::*;
        match self {
            VoterRegistration => Some(ProposalsRegistration),
            ProposalsRegistration => Some(ProposalsRegistrationEnded),
            ProposalsRegistrationEnded => Some(VotingSession),
            VotingSession => Some(VotingSessionEnded),
            VotingSessionEnded => Some(VotesTallied),
            VotesTallied => None,
        }
    }

    /// Only the immediate successor is reachable; no skips, no going back
    pub fn can_transition_to(self, next: WorkflowStatus) -> bool {
        self.next() == Some(next)
    }

    /// Apply `transition` from this phase, returning the new phase
    pub fn apply(self, transition: Transition) -> Result<WorkflowStatus, BallotError> {
        let (from, to) = transition.edge();
        if self != from || !self.can_transition_to(to) {
            return Err(BallotError::InvalidPhaseTransition {
                current: self,
                transition,
            });
        }
        Ok(to)
    }
}
