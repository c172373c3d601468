use soroban_sdk::{contracttype, Address, Env, IntoVal, Val};

use shared::{BALLOT_TTL_EXTEND, BALLOT_TTL_THRESHOLD};

use crate::ballot::BallotState;
use crate::types::{Proposal, Voter};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Phase, owner, settings and counters
    Ballot,
    Voter(Address),
    WhitelistEntry(u32), // registration index
    Proposal(u32),
}

/// Per-item records of a ballot. Each record is its own entry, so a command
/// only reads and writes the handful of records it touches.
pub trait BallotStore {
    fn voter(&self, identity: &Address) -> Option<Voter>;
    fn put_voter(&mut self, identity: &Address, voter: &Voter);
    fn whitelist_entry(&self, index: u32) -> Option<Address>;
    fn put_whitelist_entry(&mut self, index: u32, identity: &Address);
    fn proposal(&self, proposal_id: u32) -> Option<Proposal>;
    fn put_proposal(&mut self, proposal: &Proposal);
}

fn write<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    let storage = env.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, BALLOT_TTL_THRESHOLD, BALLOT_TTL_EXTEND);
}

// ── Ballot ───────────────────────────────────────────────────────────────────

pub fn has_ballot(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Ballot)
}

pub fn load_state(env: &Env) -> Option<BallotState> {
    env.storage().persistent().get(&DataKey::Ballot)
}

pub fn save_state(env: &Env, state: &BallotState) {
    write(env, &DataKey::Ballot, state);
}

// ── Records ──────────────────────────────────────────────────────────────────

/// Contract persistent storage
pub struct PersistentStore {
    env: Env,
}

impl PersistentStore {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }
}

impl BallotStore for PersistentStore {
    fn voter(&self, identity: &Address) -> Option<Voter> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Voter(identity.clone()))
    }

    fn put_voter(&mut self, identity: &Address, voter: &Voter) {
        write(&self.env, &DataKey::Voter(identity.clone()), voter);
    }

    fn whitelist_entry(&self, index: u32) -> Option<Address> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::WhitelistEntry(index))
    }

    fn put_whitelist_entry(&mut self, index: u32, identity: &Address) {
        write(&self.env, &DataKey::WhitelistEntry(index), identity);
    }

    fn proposal(&self, proposal_id: u32) -> Option<Proposal> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
    }

    fn put_proposal(&mut self, proposal: &Proposal) {
        write(&self.env, &DataKey::Proposal(proposal.id), proposal);
    }
}
