#![no_std]
//! Content-addressed audit ledger for healthcare records.
//!
//! The ledger never sees clinical payloads. For each off-ledger resource it keeps a
//! 32-byte digest plus provenance (who created it and when), keyed by an id derived from
//! `(resource_id, owner)`, and publishes an ordered audit event for every create, access,
//! update, delete, share and revoke.
//!
//! Three principal roles are kept apart throughout:
//! - **owner** namespaces a record id,
//! - **creator** executed the create and is the only authority over the record,
//! - **admin** owns the ledger itself and controls the circuit breaker.
//!
//! Every entry point runs validation, then the pause and authorization guards, then the
//! storage transition, then the audit event. A failure at any step returns an error and
//! the host discards the invocation's writes and events.

pub mod audit;
pub mod errors;
pub mod events;
pub mod guard;
pub mod identity;
pub mod store;
pub mod validation;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

pub use audit::{AuditHead, AuditKind};
pub use errors::{ErrorCategory, ErrorSeverity, LedgerError};
pub use identity::derive_record_id;
pub use store::Record;

#[contract]
pub struct RecordLedgerContract;

#[contractimpl]
impl RecordLedgerContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the ledger with its administrator
    pub fn initialize(env: Env, admin: Address) -> Result<(), LedgerError> {
        admin.require_auth();
        guard::initialize(&env, &admin)
    }

    /// Check if the ledger is initialized
    pub fn is_initialized(env: Env) -> bool {
        guard::is_initialized(&env)
    }

    /// Current administrator, `None` once ownership has been renounced
    pub fn get_admin(env: Env) -> Option<Address> {
        guard::admin(&env)
    }

    // ── Record Lifecycle ─────────────────────────────────────────────────────

    /// Registers the digest of `resource_id` in `owner`'s namespace, with `caller` as creator.
    /// Returns the derived record id.
    pub fn create_record(
        env: Env,
        caller: Address,
        resource_id: String,
        data_hash: BytesN<32>,
        owner: Address,
    ) -> Result<BytesN<32>, LedgerError> {
        caller.require_auth();

        validation::validate_resource_id(&resource_id)?;
        validation::validate_data_hash(&data_hash)?;
        validation::validate_principal(&env, &owner)?;
        guard::require_writable(&env)?;

        let record_id = identity::derive_record_id(&env, &resource_id, &owner);
        store::insert(&env, &record_id, &caller, &data_hash)?;
        guard::extend_ttl_instance(&env);

        audit::record_created(&env, record_id.clone(), caller, resource_id, data_hash);

        Ok(record_id)
    }

    /// Replaces the digest of a record in the caller's own namespace.
    pub fn update_record(
        env: Env,
        caller: Address,
        resource_id: String,
        new_data_hash: BytesN<32>,
    ) -> Result<(), LedgerError> {
        caller.require_auth();

        validation::validate_resource_id(&resource_id)?;
        validation::validate_data_hash(&new_data_hash)?;
        guard::require_writable(&env)?;

        let record_id = identity::derive_record_id(&env, &resource_id, &caller);
        let record = store::require(&env, &record_id)?;
        guard::require_creator(&record, &caller)?;

        store::overwrite_hash(&env, &record_id, record, &new_data_hash);
        guard::extend_ttl_instance(&env);

        audit::record_updated(&env, record_id, caller, resource_id, new_data_hash);

        Ok(())
    }

    /// Removes a record from the caller's own namespace.
    pub fn delete_record(env: Env, caller: Address, resource_id: String) -> Result<(), LedgerError> {
        caller.require_auth();

        validation::validate_resource_id(&resource_id)?;
        guard::require_writable(&env)?;

        let record_id = identity::derive_record_id(&env, &resource_id, &caller);
        let record = store::require(&env, &record_id)?;
        guard::require_creator(&record, &caller)?;

        store::remove(&env, &record_id);
        guard::extend_ttl_instance(&env);

        audit::record_deleted(&env, record_id, caller, resource_id);

        Ok(())
    }

    /// Removes a record from any owner's namespace. Only the record's creator may do this.
    pub fn force_delete_record(
        env: Env,
        caller: Address,
        resource_id: String,
        owner: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();

        validation::validate_resource_id(&resource_id)?;
        validation::validate_principal(&env, &owner)?;
        guard::require_writable(&env)?;

        let record_id = identity::derive_record_id(&env, &resource_id, &owner);
        let record = store::require(&env, &record_id)?;
        guard::require_creator(&record, &caller)?;

        store::remove(&env, &record_id);
        guard::extend_ttl_instance(&env);

        audit::record_deleted(&env, record_id, caller, resource_id);

        Ok(())
    }

    // ── Audit Logging ────────────────────────────────────────────────────────

    /// Records that `caller` read the record. Leaves the record untouched.
    pub fn log_access(
        env: Env,
        caller: Address,
        resource_id: String,
        owner: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();

        validation::validate_resource_id(&resource_id)?;
        validation::validate_principal(&env, &owner)?;
        guard::require_writable(&env)?;

        let record_id = Self::require_existing(&env, &resource_id, &owner)?;
        guard::extend_ttl_instance(&env);

        audit::record_accessed(&env, record_id, caller, resource_id);

        Ok(())
    }

    /// Records that `caller` shared the record with `recipient`.
    pub fn log_share_access(
        env: Env,
        caller: Address,
        resource_id: String,
        owner: Address,
        recipient: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();

        validation::validate_resource_id(&resource_id)?;
        validation::validate_principal(&env, &owner)?;
        validation::validate_counterparty(&env, &recipient, &caller)?;
        guard::require_writable(&env)?;

        let record_id = Self::require_existing(&env, &resource_id, &owner)?;
        guard::extend_ttl_instance(&env);

        audit::record_shared(&env, record_id, caller, resource_id, recipient);

        Ok(())
    }

    /// Records that `caller` revoked `user_to_revoke`'s access to the record.
    pub fn log_revoke_access(
        env: Env,
        caller: Address,
        resource_id: String,
        owner: Address,
        user_to_revoke: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();

        validation::validate_resource_id(&resource_id)?;
        validation::validate_principal(&env, &owner)?;
        validation::validate_counterparty(&env, &user_to_revoke, &caller)?;
        guard::require_writable(&env)?;

        let record_id = Self::require_existing(&env, &resource_id, &owner)?;
        guard::extend_ttl_instance(&env);

        audit::access_revoked(&env, record_id, caller, resource_id, user_to_revoke);

        Ok(())
    }

    /// Latest audit sequence number and chain digest
    pub fn get_audit_head(env: Env) -> AuditHead {
        audit::head(&env)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Get a record. Reads are not audited; callers that need a trail use `log_access`.
    pub fn get_record(env: Env, resource_id: String, owner: Address) -> Result<Record, LedgerError> {
        let record_id = identity::derive_record_id(&env, &resource_id, &owner);
        store::require(&env, &record_id)
    }

    pub fn record_exists(env: Env, resource_id: String, owner: Address) -> bool {
        let record_id = identity::derive_record_id(&env, &resource_id, &owner);
        store::exists(&env, &record_id)
    }

    /// Get the number of live records
    pub fn get_record_count(env: Env) -> u64 {
        store::count(&env)
    }

    /// Derive the id a record has, or would have, in `owner`'s namespace
    pub fn get_record_id(env: Env, resource_id: String, owner: Address) -> BytesN<32> {
        identity::derive_record_id(&env, &resource_id, &owner)
    }

    // ── Circuit Breaker & Ownership ──────────────────────────────────────────

    pub fn pause(env: Env, caller: Address) -> Result<(), LedgerError> {
        caller.require_auth();
        guard::pause(&env, &caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), LedgerError> {
        caller.require_auth();
        guard::unpause(&env, &caller)
    }

    pub fn is_paused(env: Env) -> bool {
        guard::is_paused(&env)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        guard::transfer_ownership(&env, &caller, &new_admin)
    }

    /// Permanently gives up ledger administration. Pause state can no longer change.
    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), LedgerError> {
        caller.require_auth();
        guard::renounce_ownership(&env, &caller)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}

impl RecordLedgerContract {
    fn require_existing(
        env: &Env,
        resource_id: &String,
        owner: &Address,
    ) -> Result<BytesN<32>, LedgerError> {
        let record_id = identity::derive_record_id(env, resource_id, owner);
        if !store::exists(env, &record_id) {
            return Err(LedgerError::RecordNotFound);
        }
        Ok(record_id)
    }
}
