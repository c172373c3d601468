use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String, Vec};

use authorization::Role;

use crate::{
    ballot::Ballot,
    errors::{BallotError, VotingError},
    events::BallotEvent,
    storage::{self, PersistentStore},
    types::{BallotSettings, Proposal, QuorumStatus, Voter},
    workflow::{Transition, WorkflowStatus},
};

#[contract]
pub struct VotingContract;

type StoredBallot = Ballot<PersistentStore>;

fn load(env: &Env) -> Result<StoredBallot, VotingError> {
    let state = storage::load_state(env).ok_or(VotingError::NotInitialized)?;
    Ok(Ballot::restore(env, state, PersistentStore::new(env)))
}

/// Log the context of a refused command and map it to its error code
fn reject(env: &Env, err: BallotError) -> VotingError {
    match err {
        BallotError::InvalidPhase { current } => {
            log!(env, "command not allowed in phase", current);
        }
        BallotError::InvalidPhaseTransition { current, .. } => {
            log!(env, "phase transition not allowed from", current);
        }
        BallotError::InvalidProposalId { proposal_id, count } => {
            log!(env, "unknown proposal", proposal_id, count);
        }
        BallotError::InvalidQuorum { requested } => {
            log!(env, "quorum out of range", requested);
        }
        BallotError::QuorumNotReached { required, actual } => {
            log!(env, "quorum not reached", required, actual);
        }
        other => {
            log!(env, "command rejected", VotingError::from(other) as u32);
        }
    }
    err.into()
}

/// Authenticate `caller`, run one command against the stored ballot and
/// commit its header. Records are written by the command itself, only after
/// it has validated; nothing is written when the command is refused.
fn execute<F>(env: &Env, caller: &Address, command: F) -> Result<(), VotingError>
where
    F: FnOnce(&mut StoredBallot) -> Result<BallotEvent, BallotError>,
{
    caller.require_auth();
    let mut ballot = load(env)?;

    match command(&mut ballot) {
        Ok(event) => {
            storage::save_state(env, ballot.state());
            event.publish(env);
            Ok(())
        }
        Err(err) => Err(reject(env, err)),
    }
}

fn advance(env: &Env, caller: &Address, transition: Transition) -> Result<(), VotingError> {
    execute(env, caller, |ballot| ballot.advance(caller, transition))?;
    log!(env, "workflow status changed", transition.edge().1);
    Ok(())
}

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Create the ballot with `owner` as administrator.
    /// Can only be called once.
    pub fn initialize(
        env: Env,
        owner: Address,
        settings: BallotSettings,
    ) -> Result<(), VotingError> {
        if storage::has_ballot(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        owner.require_auth();

        let host = env.current_contract_address();
        let store = PersistentStore::new(&env);
        let ballot = Ballot::new(&env, owner.clone(), host, settings, store)
            .map_err(|err| reject(&env, err))?;
        storage::save_state(&env, ballot.state());

        env.events().publish((symbol_short!("init"),), (owner,));
        Ok(())
    }

    /// Settings a deployment gets when it has no preference
    pub fn default_settings(_env: Env) -> BallotSettings {
        BallotSettings::default()
    }

    // ── Administration ───────────────────────────────────────────────────────

    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        execute(&env, &caller, |ballot| ballot.add_voter(&caller, voter))
    }

    pub fn start_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        advance(&env, &caller, Transition::StartProposalsRegistration)
    }

    pub fn end_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        advance(&env, &caller, Transition::EndProposalsRegistration)
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        advance(&env, &caller, Transition::StartVotingSession)
    }

    /// Close the voting session. Fails while participation is below quorum.
    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        advance(&env, &caller, Transition::EndVotingSession)
    }

    /// Close the ballot and freeze the winning proposal.
    pub fn tally_votes(env: Env, caller: Address) -> Result<(), VotingError> {
        advance(&env, &caller, Transition::TallyVotes)
    }

    pub fn set_quorum(env: Env, caller: Address, percentage: u32) -> Result<(), VotingError> {
        execute(&env, &caller, |ballot| ballot.set_quorum(&caller, percentage))
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), VotingError> {
        execute(&env, &caller, |ballot| {
            ballot.transfer_ownership(&caller, new_owner)
        })
    }

    // ── Voter Actions ────────────────────────────────────────────────────────

    pub fn submit_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<(), VotingError> {
        execute(&env, &caller, |ballot| {
            ballot.submit_proposal(&caller, description)
        })
    }

    /// Cast a vote, or move it when the deployment allows vote changes.
    pub fn vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        execute(&env, &caller, |ballot| ballot.vote(&caller, proposal_id))
    }

    // ── Query Functions ──────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Result<Address, VotingError> {
        Ok(load(&env)?.owner())
    }

    pub fn role_of(env: Env, identity: Address) -> Result<Role, VotingError> {
        Ok(load(&env)?.role_of(&identity))
    }

    pub fn workflow_status(env: Env) -> Result<WorkflowStatus, VotingError> {
        Ok(load(&env)?.status())
    }

    pub fn get_settings(env: Env) -> Result<BallotSettings, VotingError> {
        Ok(load(&env)?.settings())
    }

    pub fn quorum_percentage(env: Env) -> Result<u32, VotingError> {
        Ok(load(&env)?.quorum_percentage())
    }

    /// Registered identities in registration order
    pub fn get_whitelist(env: Env) -> Result<Vec<Address>, VotingError> {
        Ok(load(&env)?.whitelist())
    }

    pub fn voters_count(env: Env) -> Result<u32, VotingError> {
        Ok(load(&env)?.voters_count())
    }

    pub fn is_registered(env: Env, identity: Address) -> Result<bool, VotingError> {
        Ok(load(&env)?.is_registered(&identity))
    }

    pub fn get_voter(env: Env, identity: Address) -> Result<Option<Voter>, VotingError> {
        Ok(load(&env)?.voter(&identity))
    }

    /// `(has_voted, voted_proposal_id)`. Unregistered identities read as not
    /// having voted; check `is_registered` separately.
    pub fn get_voter_info(
        env: Env,
        identity: Address,
    ) -> Result<(bool, Option<u32>), VotingError> {
        Ok(load(&env)?.voter_info(&identity))
    }

    pub fn get_proposals_count(env: Env) -> Result<u32, VotingError> {
        Ok(load(&env)?.proposals_count())
    }

    pub fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, VotingError> {
        load(&env)?
            .proposal(proposal_id)
            .map_err(|err| reject(&env, err))
    }

    /// All proposals in id order
    pub fn get_proposals(env: Env) -> Result<Vec<Proposal>, VotingError> {
        Ok(load(&env)?.proposals())
    }

    pub fn votes_cast(env: Env) -> Result<u32, VotingError> {
        Ok(load(&env)?.votes_cast())
    }

    pub fn get_current_participation(env: Env) -> Result<u32, VotingError> {
        Ok(load(&env)?.participation())
    }

    pub fn get_quorum_status(env: Env) -> Result<QuorumStatus, VotingError> {
        Ok(load(&env)?.quorum_status())
    }

    pub fn get_winning_proposal_id(env: Env) -> Result<u32, VotingError> {
        load(&env)?
            .winning_proposal_id()
            .map_err(|err| reject(&env, err))
    }

    /// Description of the winning proposal; fails until votes are tallied.
    pub fn get_winning_proposal(env: Env) -> Result<String, VotingError> {
        load(&env)?
            .winning_proposal()
            .map(|proposal| proposal.description)
            .map_err(|err| reject(&env, err))
    }
}
