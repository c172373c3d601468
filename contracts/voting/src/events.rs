use soroban_sdk::{symbol_short, Address, Env};

use crate::workflow::WorkflowStatus;

/// Notification produced by a committed ballot command
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BallotEvent {
    WorkflowStatusChanged {
        previous: WorkflowStatus,
        next: WorkflowStatus,
    },
    VoterRegistered {
        voter: Address,
    },
    ProposalRegistered {
        proposal_id: u32,
    },
    Voted {
        voter: Address,
        proposal_id: u32,
    },
    VoteModified {
        voter: Address,
        previous: u32,
        next: u32,
    },
    QuorumUpdated {
        previous: u32,
        next: u32,
    },
    OwnershipTransferred {
        previous: Address,
        next: Address,
    },
}

impl BallotEvent {
    /// Emit the event for external indexers and front-ends
    pub fn publish(&self, env: &Env) {
        let events = env.events();
        match self {
            BallotEvent::WorkflowStatusChanged { previous, next } => {
                events.publish((symbol_short!("status"),), (*previous, *next));
            }
            BallotEvent::VoterRegistered { voter } => {
                events.publish((symbol_short!("voter_reg"),), voter.clone());
            }
            BallotEvent::ProposalRegistered { proposal_id } => {
                events.publish((symbol_short!("prop_reg"),), *proposal_id);
            }
            BallotEvent::Voted { voter, proposal_id } => {
                events.publish((symbol_short!("voted"), voter.clone()), *proposal_id);
            }
            BallotEvent::VoteModified {
                voter,
                previous,
                next,
            } => {
                events.publish(
                    (symbol_short!("vote_mod"), voter.clone()),
                    (*previous, *next),
                );
            }
            BallotEvent::QuorumUpdated { previous, next } => {
                events.publish((symbol_short!("quorum"),), (*previous, *next));
            }
            BallotEvent::OwnershipTransferred { previous, next } => {
                events.publish(
                    (symbol_short!("own_xfer"),),
                    (previous.clone(), next.clone()),
                );
            }
        }
    }
}
