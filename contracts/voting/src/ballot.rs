//! The voting workflow engine.
//!
//! [`Ballot`] drives one vote: workflow phase, whitelist, proposals, quorum
//! and the frozen tally. Every command validates fully before it mutates
//! anything, so a rejected command leaves the ballot exactly as it was.
//!
//! The ballot is split in two. [`BallotState`] is the small fixed-size header
//! (phase, owner, settings, counters); voters, whitelist entries and proposals
//! are individual records behind a [`BallotStore`]. A command touches the
//! header plus the few records it needs, never the whole registry.

use soroban_sdk::{contracttype, Address, Env, String, Vec};

use authorization::{require_owner, require_voter, Role};
use shared::{is_quorum_met, is_valid_percentage, participation_percentage, validate_description};

use crate::errors::BallotError;
use crate::events::BallotEvent;
use crate::storage::BallotStore;
use crate::types::{BallotSettings, Proposal, QuorumStatus, Voter};
use crate::workflow::{Transition, WorkflowStatus};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BallotState {
    pub owner: Address,
    /// Address hosting the ballot; never a valid voter or owner
    pub host: Address,
    pub status: WorkflowStatus,
    pub settings: BallotSettings,
    pub voters_count: u32,
    pub proposals_count: u32,
    /// Number of voters with `has_voted` set
    pub votes_cast: u32,
    /// Current front-runner; `None` until the first vote
    pub leading_proposal_id: Option<u32>,
    pub winning_proposal_id: Option<u32>,
}

pub struct Ballot<S: BallotStore> {
    env: Env,
    state: BallotState,
    store: S,
}

impl<S: BallotStore> Ballot<S> {
    pub fn new(
        env: &Env,
        owner: Address,
        host: Address,
        settings: BallotSettings,
        store: S,
    ) -> Result<Self, BallotError> {
        if owner == host {
            return Err(BallotError::InvalidIdentity);
        }
        if !is_valid_percentage(settings.quorum_percentage) {
            return Err(BallotError::InvalidQuorum {
                requested: settings.quorum_percentage,
            });
        }

        let state = BallotState {
            owner,
            host,
            status: WorkflowStatus::VoterRegistration,
            settings,
            voters_count: 0,
            proposals_count: 0,
            votes_cast: 0,
            leading_proposal_id: None,
            winning_proposal_id: None,
        };
        Ok(Self::restore(env, state, store))
    }

    /// Reattach a persisted header to its records
    pub fn restore(env: &Env, state: BallotState, store: S) -> Self {
        Self {
            env: env.clone(),
            state,
            store,
        }
    }

    pub fn state(&self) -> &BallotState {
        &self.state
    }

    pub fn owner(&self) -> Address {
        self.state.owner.clone()
    }

    pub fn host(&self) -> Address {
        self.state.host.clone()
    }

    pub fn status(&self) -> WorkflowStatus {
        self.state.status
    }

    pub fn settings(&self) -> BallotSettings {
        self.state.settings.clone()
    }

    // ── Access Control ───────────────────────────────────────────────────────

    pub fn role_of(&self, caller: &Address) -> Role {
        Role::resolve(&self.state.owner, caller, self.is_registered(caller))
    }

    fn require_status(&self, expected: WorkflowStatus) -> Result<(), BallotError> {
        if self.state.status != expected {
            return Err(BallotError::InvalidPhase {
                current: self.state.status,
            });
        }
        Ok(())
    }

    /// Hand administration to `new_owner`. One step, effective immediately.
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: Address,
    ) -> Result<BallotEvent, BallotError> {
        require_owner(self.role_of(caller))?;
        if new_owner == self.state.host {
            return Err(BallotError::InvalidIdentity);
        }

        let previous = core::mem::replace(&mut self.state.owner, new_owner.clone());
        Ok(BallotEvent::OwnershipTransferred {
            previous,
            next: new_owner,
        })
    }

    // ── Phase Transitions ────────────────────────────────────────────────────

    /// Run one administrative phase transition.
    ///
    /// Closing the voting session is gated on quorum; tallying freezes the
    /// winner in the same step as the phase change.
    pub fn advance(
        &mut self,
        caller: &Address,
        transition: Transition,
    ) -> Result<BallotEvent, BallotError> {
        require_owner(self.role_of(caller))?;
        let previous = self.state.status;
        let next = previous.apply(transition)?;

        match transition {
            Transition::EndVotingSession => self.check_quorum()?,
            Transition::TallyVotes => {
                let winner = self.resolve_winner()?;
                self.state.winning_proposal_id = Some(winner);
            }
            _ => {}
        }

        self.state.status = next;
        Ok(BallotEvent::WorkflowStatusChanged { previous, next })
    }

    pub fn start_proposals_registration(
        &mut self,
        caller: &Address,
    ) -> Result<BallotEvent, BallotError> {
        self.advance(caller, Transition::StartProposalsRegistration)
    }

    pub fn end_proposals_registration(
        &mut self,
        caller: &Address,
    ) -> Result<BallotEvent, BallotError> {
        self.advance(caller, Transition::EndProposalsRegistration)
    }

    pub fn start_voting_session(&mut self, caller: &Address) -> Result<BallotEvent, BallotError> {
        self.advance(caller, Transition::StartVotingSession)
    }

    pub fn end_voting_session(&mut self, caller: &Address) -> Result<BallotEvent, BallotError> {
        self.advance(caller, Transition::EndVotingSession)
    }

    pub fn tally_votes(&mut self, caller: &Address) -> Result<BallotEvent, BallotError> {
        self.advance(caller, Transition::TallyVotes)
    }

    // ── Voter Registry ───────────────────────────────────────────────────────

    pub fn add_voter(
        &mut self,
        caller: &Address,
        voter: Address,
    ) -> Result<BallotEvent, BallotError> {
        require_owner(self.role_of(caller))?;
        self.require_status(WorkflowStatus::VoterRegistration)?;
        if voter == self.state.host {
            return Err(BallotError::InvalidIdentity);
        }
        if self.store.voter(&voter).is_some() {
            return Err(BallotError::AlreadyRegistered);
        }

        let index = self.state.voters_count;
        self.store.put_voter(&voter, &Voter::registered());
        self.store.put_whitelist_entry(index, &voter);
        self.state.voters_count += 1;
        Ok(BallotEvent::VoterRegistered { voter })
    }

    pub fn is_registered(&self, identity: &Address) -> bool {
        self.store
            .voter(identity)
            .map(|voter| voter.is_registered)
            .unwrap_or(false)
    }

    pub fn voter(&self, identity: &Address) -> Option<Voter> {
        self.store.voter(identity)
    }

    /// `(has_voted, voted_proposal_id)`; unregistered identities read as
    /// not having voted.
    pub fn voter_info(&self, identity: &Address) -> (bool, Option<u32>) {
        match self.store.voter(identity) {
            Some(voter) => (voter.has_voted, voter.voted_proposal_id),
            None => (false, None),
        }
    }

    /// Registered identities in registration order
    pub fn whitelist(&self) -> Vec<Address> {
        let mut whitelist = Vec::new(&self.env);
        for index in 0..self.state.voters_count {
            if let Some(identity) = self.store.whitelist_entry(index) {
                whitelist.push_back(identity);
            }
        }
        whitelist
    }

    pub fn voters_count(&self) -> u32 {
        self.state.voters_count
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    pub fn submit_proposal(
        &mut self,
        caller: &Address,
        description: String,
    ) -> Result<BallotEvent, BallotError> {
        require_voter(self.role_of(caller))?;
        self.require_status(WorkflowStatus::ProposalsRegistration)?;
        validate_description(&description)?;

        let proposal_id = self.state.proposals_count;
        self.store.put_proposal(&Proposal {
            id: proposal_id,
            description,
            vote_count: 0,
        });
        self.state.proposals_count += 1;
        Ok(BallotEvent::ProposalRegistered { proposal_id })
    }

    pub fn proposal(&self, proposal_id: u32) -> Result<Proposal, BallotError> {
        let unknown = BallotError::InvalidProposalId {
            proposal_id,
            count: self.state.proposals_count,
        };
        if proposal_id >= self.state.proposals_count {
            return Err(unknown);
        }
        self.store.proposal(proposal_id).ok_or(unknown)
    }

    /// All proposals in id order
    pub fn proposals(&self) -> Vec<Proposal> {
        let mut proposals = Vec::new(&self.env);
        for proposal_id in 0..self.state.proposals_count {
            if let Some(proposal) = self.store.proposal(proposal_id) {
                proposals.push_back(proposal);
            }
        }
        proposals
    }

    pub fn proposals_count(&self) -> u32 {
        self.state.proposals_count
    }

    // ── Ballot ───────────────────────────────────────────────────────────────

    /// Cast or, when the deployment allows it, move a vote.
    ///
    /// A move takes one vote off the previous proposal and adds one to the new
    /// one, so the sum of vote counts always equals `votes_cast`.
    pub fn vote(&mut self, caller: &Address, proposal_id: u32) -> Result<BallotEvent, BallotError> {
        require_voter(self.role_of(caller))?;
        self.require_status(WorkflowStatus::VotingSession)?;
        let mut chosen = self.proposal(proposal_id)?;
        let mut voter = self.voter(caller).ok_or(BallotError::Unauthorized)?;

        match (voter.has_voted, voter.voted_proposal_id) {
            (false, _) => {
                voter.has_voted = true;
                voter.voted_proposal_id = Some(proposal_id);
                chosen.vote_count += 1;

                self.store.put_voter(caller, &voter);
                self.store.put_proposal(&chosen);
                self.state.votes_cast += 1;
                self.follow_leader(&chosen);
                Ok(BallotEvent::Voted {
                    voter: caller.clone(),
                    proposal_id,
                })
            }
            (true, Some(previous))
                if self.state.settings.allow_vote_change && previous != proposal_id =>
            {
                let mut abandoned = self.proposal(previous)?;
                voter.voted_proposal_id = Some(proposal_id);
                abandoned.vote_count -= 1;
                chosen.vote_count += 1;

                self.store.put_voter(caller, &voter);
                self.store.put_proposal(&abandoned);
                self.store.put_proposal(&chosen);
                if self.state.leading_proposal_id == Some(previous) {
                    self.state.leading_proposal_id = self.scan_leader();
                } else {
                    self.follow_leader(&chosen);
                }
                Ok(BallotEvent::VoteModified {
                    voter: caller.clone(),
                    previous,
                    next: proposal_id,
                })
            }
            (true, _) => Err(BallotError::AlreadyVoted),
        }
    }

    pub fn votes_cast(&self) -> u32 {
        self.state.votes_cast
    }

    // ── Quorum & Participation ───────────────────────────────────────────────

    pub fn set_quorum(
        &mut self,
        caller: &Address,
        percentage: u32,
    ) -> Result<BallotEvent, BallotError> {
        require_owner(self.role_of(caller))?;
        if !is_valid_percentage(percentage) {
            return Err(BallotError::InvalidQuorum {
                requested: percentage,
            });
        }

        let previous = self.state.settings.quorum_percentage;
        self.state.settings.quorum_percentage = percentage;
        Ok(BallotEvent::QuorumUpdated {
            previous,
            next: percentage,
        })
    }

    pub fn quorum_percentage(&self) -> u32 {
        self.state.settings.quorum_percentage
    }

    pub fn participation(&self) -> u32 {
        participation_percentage(self.state.votes_cast, self.state.voters_count)
    }

    pub fn quorum_status(&self) -> QuorumStatus {
        let required = self.quorum_percentage();
        let participation = self.participation();
        QuorumStatus {
            required,
            participation,
            reached: self.state.voters_count > 0 && is_quorum_met(participation, required),
        }
    }

    fn check_quorum(&self) -> Result<(), BallotError> {
        if self.state.voters_count == 0 {
            return Err(BallotError::NoVotersRegistered);
        }
        let required = self.quorum_percentage();
        let actual = self.participation();
        if !is_quorum_met(actual, required) {
            return Err(BallotError::QuorumNotReached { required, actual });
        }
        Ok(())
    }

    // ── Tally ────────────────────────────────────────────────────────────────

    /// Promote `candidate` if it now beats the front-runner. Ties go to the
    /// lowest id.
    fn follow_leader(&mut self, candidate: &Proposal) {
        let leads = match self.state.leading_proposal_id {
            None => true,
            Some(leader_id) if leader_id == candidate.id => false,
            Some(leader_id) => match self.store.proposal(leader_id) {
                Some(leader) => {
                    candidate.vote_count > leader.vote_count
                        || (candidate.vote_count == leader.vote_count && candidate.id < leader.id)
                }
                None => true,
            },
        };
        if leads {
            self.state.leading_proposal_id = Some(candidate.id);
        }
    }

    /// Full pass over the proposals; only needed when the front-runner loses
    /// a vote.
    fn scan_leader(&self) -> Option<u32> {
        let mut leader: Option<Proposal> = None;
        for proposal in self.proposals().iter() {
            let ahead = match &leader {
                Some(current) => proposal.vote_count > current.vote_count,
                None => true,
            };
            if ahead {
                leader = Some(proposal);
            }
        }
        leader.map(|proposal| proposal.id)
    }

    /// Highest vote count wins; ties go to the lowest id, so with no votes at
    /// all the first proposal wins.
    fn resolve_winner(&self) -> Result<u32, BallotError> {
        if self.state.proposals_count == 0 {
            return Err(BallotError::NoProposals);
        }
        Ok(self.state.leading_proposal_id.unwrap_or(0))
    }

    pub fn winning_proposal_id(&self) -> Result<u32, BallotError> {
        self.state
            .winning_proposal_id
            .ok_or(BallotError::TallyNotPerformed)
    }

    pub fn winning_proposal(&self) -> Result<Proposal, BallotError> {
        self.proposal(self.winning_proposal_id()?)
    }
}
