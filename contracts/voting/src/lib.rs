#![no_std]

//! Voting workflow contract.
//!
//! A ballot moves through six administrative phases: voter registration,
//! proposal registration, voting, and a quorum-gated tally. The engine lives
//! in [`ballot`]; [`contract`] is the Soroban surface that authenticates
//! callers, persists the ballot and publishes its events. The ballot is kept
//! as one small header entry plus one entry per voter, whitelist slot and
//! proposal.

#[cfg(test)]
extern crate std;

mod ballot;
mod contract;
mod errors;
mod events;
mod storage;
mod types;
mod workflow;

pub use authorization::Role;
pub use ballot::{Ballot, BallotState};
pub use contract::{VotingContract, VotingContractClient};
pub use errors::{BallotError, VotingError};
pub use events::BallotEvent;
pub use storage::{BallotStore, PersistentStore};
pub use types::{BallotSettings, Proposal, QuorumStatus, Voter};
pub use workflow::{Transition, WorkflowStatus};
