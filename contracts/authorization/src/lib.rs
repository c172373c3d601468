//! Authorization Module for the voting contracts
//!
//! Resolves the role a caller holds against a ballot and answers which
//! commands that role may issue. Signature checks (`require_auth`) stay with
//! the contract entry points; this module only decides permissions.

#![no_std]

use soroban_sdk::{contracttype, Address};

/// Roles a caller can hold against a ballot
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Role {
    /// Ballot administrator, not on the whitelist
    Owner,
    /// Whitelisted voter
    Voter,
    /// Administrator who also registered as a voter
    RegisteredOwner,
    /// Anyone else; read-only access
    Public,
}

/// Authorization errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    /// Caller is not the ballot owner
    NotOwner,
    /// Caller is not on the whitelist
    NotRegistered,
}

/// Permission matrix: defines what each role can do
impl Role {
    /// Resolve a caller's role from ownership and whitelist membership
    pub fn resolve(owner: &Address, caller: &Address, registered: bool) -> Role {
        match (caller == owner, registered) {
            (true, true) => Role::RegisteredOwner,
            (true, false) => Role::Owner,
            (false, true) => Role::Voter,
            (false, false) => Role::Public,
        }
    }

    /// Phase transitions, whitelist admission, quorum and ownership changes
    pub fn can_administer(&self) -> bool {
        matches!(self, Role::Owner | Role::RegisteredOwner)
    }

    /// Proposal submission and voting
    pub fn can_participate(&self) -> bool {
        matches!(self, Role::Voter | Role::RegisteredOwner)
    }
}

/// Require administrator rights
pub fn require_owner(role: Role) -> Result<(), AuthError> {
    if role.can_administer() {
        Ok(())
    } else {
        Err(AuthError::NotOwner)
    }
}

/// Require a whitelisted caller
pub fn require_voter(role: Role) -> Result<(), AuthError> {
    if role.can_participate() {
        Ok(())
    } else {
        Err(AuthError::NotRegistered)
    }
}
