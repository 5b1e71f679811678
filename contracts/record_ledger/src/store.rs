use crate::LedgerError;
use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol};

const RECORD: Symbol = symbol_short!("RECORD");
const REC_CTR: Symbol = symbol_short!("REC_CTR");

/// Storage lifetimes in ledgers, shared by record entries and instance storage.
pub(crate) const TTL_THRESHOLD: u32 = 5184000;
pub(crate) const TTL_EXTEND_TO: u32 = 10368000;

/// Integrity fingerprint and provenance of one off-ledger resource.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// Principal that executed the create, not necessarily the namespace owner.
    pub creator: Address,
    pub data_hash: BytesN<32>,
    pub created_at: u64,
    pub last_modified: u64,
}

fn record_key(record_id: &BytesN<32>) -> (Symbol, BytesN<32>) {
    (RECORD, record_id.clone())
}

fn extend_ttl_record_key(env: &Env, key: &(Symbol, BytesN<32>)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn load(env: &Env, record_id: &BytesN<32>) -> Option<Record> {
    let key = record_key(record_id);
    let record: Option<Record> = env.storage().persistent().get(&key);
    if record.is_some() {
        extend_ttl_record_key(env, &key);
    }
    record
}

pub fn require(env: &Env, record_id: &BytesN<32>) -> Result<Record, LedgerError> {
    load(env, record_id).ok_or(LedgerError::RecordNotFound)
}

pub fn exists(env: &Env, record_id: &BytesN<32>) -> bool {
    env.storage().persistent().has(&record_key(record_id))
}

pub fn count(env: &Env) -> u64 {
    env.storage().instance().get(&REC_CTR).unwrap_or(0)
}

/// Inserts a fresh record stamped with the current ledger time.
/// The caller has already validated `data_hash`; the duplicate check lives here so no
/// path can overwrite an existing identity.
pub fn insert(
    env: &Env,
    record_id: &BytesN<32>,
    creator: &Address,
    data_hash: &BytesN<32>,
) -> Result<(), LedgerError> {
    let key = record_key(record_id);
    if env.storage().persistent().has(&key) {
        return Err(LedgerError::RecordAlreadyExists);
    }

    let now = env.ledger().timestamp();
    let record = Record {
        creator: creator.clone(),
        data_hash: data_hash.clone(),
        created_at: now,
        last_modified: now,
    };
    env.storage().persistent().set(&key, &record);
    extend_ttl_record_key(env, &key);

    env.storage()
        .instance()
        .set(&REC_CTR, &count(env).saturating_add(1));

    Ok(())
}

/// Replaces the digest of an existing record. `created_at` is kept and `last_modified`
/// never moves backwards, so `created_at <= last_modified` holds after every write.
pub fn overwrite_hash(
    env: &Env,
    record_id: &BytesN<32>,
    mut record: Record,
    data_hash: &BytesN<32>,
) {
    record.data_hash = data_hash.clone();
    record.last_modified = env.ledger().timestamp().max(record.last_modified);

    let key = record_key(record_id);
    env.storage().persistent().set(&key, &record);
    extend_ttl_record_key(env, &key);
}

pub fn remove(env: &Env, record_id: &BytesN<32>) {
    env.storage().persistent().remove(&record_key(record_id));
    env.storage()
        .instance()
        .set(&REC_CTR, &count(env).saturating_sub(1));
}
