//! Administrative events. These describe the ledger itself, not its records, and do
//! not take part in the audit sequence.
#![allow(deprecated)]

use soroban_sdk::{symbol_short, Address, Env};

/// Event published when the ledger is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when the circuit breaker is engaged or released.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub admin: Address,
    pub paused: bool,
    pub timestamp: u64,
}

/// Event published when ledger ownership moves. `new_admin` is `None` on renounce.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous_admin: Address,
    pub new_admin: Option<Address>,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_paused(env: &Env, admin: Address) {
    let topics = (symbol_short!("PAUSED"), admin.clone());
    let data = PauseChangedEvent {
        admin,
        paused: true,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_unpaused(env: &Env, admin: Address) {
    let topics = (symbol_short!("UNPAUSED"), admin.clone());
    let data = PauseChangedEvent {
        admin,
        paused: false,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an ownership change, including renouncement.
pub fn publish_ownership_transferred(
    env: &Env,
    previous_admin: Address,
    new_admin: Option<Address>,
) {
    let topics = (symbol_short!("OWN_XFER"), previous_admin.clone());
    let data = OwnershipTransferredEvent {
        previous_admin,
        new_admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
