//! Append-only audit trail for record operations.
//!
//! Every accepted create, access, update, delete, share and revoke publishes exactly one
//! event, after the state transition it describes has been written. History is not kept
//! in contract storage: indexers materialise it from the event stream. The ledger only
//! stores the latest [`AuditHead`], which numbers events (`seq`, starting at 1, no gaps)
//! and chains them (`hash`), so a consumer can detect lost, duplicated, reordered or
//! altered events.
#![allow(deprecated)]

use soroban_sdk::{
    contracttype, symbol_short, xdr::ToXdr, Address, Bytes, BytesN, Env, IntoVal, String, Symbol,
    Val,
};

const AUDIT_HEAD: Symbol = symbol_short!("AUD_HEAD");

/// Audit event variants. The discriminant is part of the chain digest and must stay stable.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuditKind {
    Created = 1,
    Accessed = 2,
    Updated = 3,
    Deleted = 4,
    Shared = 5,
    AccessRevoked = 6,
}

/// Position of the latest audit event in the trail.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditHead {
    /// Sequence number of the latest event; 0 when nothing has been audited yet.
    pub seq: u64,
    /// Chain digest over every event up to and including `seq`; all-zero at genesis.
    pub hash: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordCreatedEvent {
    pub seq: u64,
    pub record_id: BytesN<32>,
    pub actor: Address,
    pub resource_id: String,
    pub data_hash: BytesN<32>,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordAccessedEvent {
    pub seq: u64,
    pub record_id: BytesN<32>,
    pub actor: Address,
    pub resource_id: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordUpdatedEvent {
    pub seq: u64,
    pub record_id: BytesN<32>,
    pub actor: Address,
    pub resource_id: String,
    pub data_hash: BytesN<32>,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordDeletedEvent {
    pub seq: u64,
    pub record_id: BytesN<32>,
    pub actor: Address,
    pub resource_id: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordSharedEvent {
    pub seq: u64,
    pub record_id: BytesN<32>,
    pub actor: Address,
    pub resource_id: String,
    pub recipient: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRevokedEvent {
    pub seq: u64,
    pub record_id: BytesN<32>,
    pub actor: Address,
    pub resource_id: String,
    pub revoked: Address,
    pub timestamp: u64,
}

pub fn head(env: &Env) -> AuditHead {
    env.storage()
        .instance()
        .get(&AUDIT_HEAD)
        .unwrap_or_else(|| AuditHead {
            seq: 0,
            hash: BytesN::from_array(env, &[0u8; 32]),
        })
}

/// Folds one event into the chain: `keccak256(prev ‖ kind_be ‖ xdr(event))`.
///
/// The event payload is hashed whole, so its sequence number, record id, actor, resource
/// id, timestamp and variant-specific field (digest, recipient, revoked principal) are all
/// bound into the head. Exposed so off-ledger consumers can replay a trail with the same
/// function the ledger uses.
pub fn chain_digest<E>(env: &Env, prev: &BytesN<32>, kind: AuditKind, event: &E) -> BytesN<32>
where
    E: IntoVal<Env, Val> + Clone,
{
    let mut buf = Bytes::new(env);
    buf.extend_from_array(&prev.to_array());
    buf.extend_from_array(&(kind as u32).to_be_bytes());
    buf.append(&event.clone().to_xdr(env));
    env.crypto().keccak256(&buf).into()
}

/// Sequence number and timestamp the next event will carry.
fn next(env: &Env) -> (u64, u64) {
    (head(env).seq.saturating_add(1), env.ledger().timestamp())
}

/// Folds `event` into the stored head.
fn seal<E>(env: &Env, seq: u64, kind: AuditKind, event: &E)
where
    E: IntoVal<Env, Val> + Clone,
{
    let hash = chain_digest(env, &head(env).hash, kind, event);
    env.storage()
        .instance()
        .set(&AUDIT_HEAD, &AuditHead { seq, hash });
}

pub fn record_created(
    env: &Env,
    record_id: BytesN<32>,
    actor: Address,
    resource_id: String,
    data_hash: BytesN<32>,
) {
    let (seq, timestamp) = next(env);
    let topics = (symbol_short!("REC_CRT"), record_id.clone(), actor.clone());
    let data = RecordCreatedEvent {
        seq,
        record_id,
        actor,
        resource_id,
        data_hash,
        timestamp,
    };
    seal(env, seq, AuditKind::Created, &data);
    env.events().publish(topics, data);
}

pub fn record_accessed(env: &Env, record_id: BytesN<32>, actor: Address, resource_id: String) {
    let (seq, timestamp) = next(env);
    let topics = (symbol_short!("REC_ACC"), record_id.clone(), actor.clone());
    let data = RecordAccessedEvent {
        seq,
        record_id,
        actor,
        resource_id,
        timestamp,
    };
    seal(env, seq, AuditKind::Accessed, &data);
    env.events().publish(topics, data);
}

pub fn record_updated(
    env: &Env,
    record_id: BytesN<32>,
    actor: Address,
    resource_id: String,
    data_hash: BytesN<32>,
) {
    let (seq, timestamp) = next(env);
    let topics = (symbol_short!("REC_UPD"), record_id.clone(), actor.clone());
    let data = RecordUpdatedEvent {
        seq,
        record_id,
        actor,
        resource_id,
        data_hash,
        timestamp,
    };
    seal(env, seq, AuditKind::Updated, &data);
    env.events().publish(topics, data);
}

pub fn record_deleted(env: &Env, record_id: BytesN<32>, actor: Address, resource_id: String) {
    let (seq, timestamp) = next(env);
    let topics = (symbol_short!("REC_DEL"), record_id.clone(), actor.clone());
    let data = RecordDeletedEvent {
        seq,
        record_id,
        actor,
        resource_id,
        timestamp,
    };
    seal(env, seq, AuditKind::Deleted, &data);
    env.events().publish(topics, data);
}

pub fn record_shared(
    env: &Env,
    record_id: BytesN<32>,
    actor: Address,
    resource_id: String,
    recipient: Address,
) {
    let (seq, timestamp) = next(env);
    let topics = (symbol_short!("REC_SHR"), record_id.clone(), recipient.clone());
    let data = RecordSharedEvent {
        seq,
        record_id,
        actor,
        resource_id,
        recipient,
        timestamp,
    };
    seal(env, seq, AuditKind::Shared, &data);
    env.events().publish(topics, data);
}

pub fn access_revoked(
    env: &Env,
    record_id: BytesN<32>,
    actor: Address,
    resource_id: String,
    revoked: Address,
) {
    let (seq, timestamp) = next(env);
    let topics = (symbol_short!("REC_RVK"), record_id.clone(), revoked.clone());
    let data = AccessRevokedEvent {
        seq,
        record_id,
        actor,
        resource_id,
        revoked,
        timestamp,
    };
    seal(env, seq, AuditKind::AccessRevoked, &data);
    env.events().publish(topics, data);
}
