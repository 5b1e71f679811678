use crate::store::{Record, TTL_EXTEND_TO, TTL_THRESHOLD};
use crate::{events, validation, LedgerError};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const PAUSED: Symbol = symbol_short!("P_GLOB");

/// Instance storage TTL applies to admin, pause flag, counter and audit head together.
pub fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Administration ───────────────────────────────────────────

pub fn initialize(env: &Env, admin: &Address) -> Result<(), LedgerError> {
    if is_initialized(env) {
        return Err(LedgerError::AlreadyInitialized);
    }
    validation::validate_principal(env, admin)?;

    env.storage().instance().set(&ADMIN, admin);
    env.storage().instance().set(&INITIALIZED, &true);
    extend_ttl_instance(env);

    events::publish_initialized(env, admin.clone());
    Ok(())
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn require_initialized(env: &Env) -> Result<(), LedgerError> {
    if !is_initialized(env) {
        return Err(LedgerError::NotInitialized);
    }
    Ok(())
}

/// `None` before initialization and after the administrator renounced.
pub fn admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ADMIN)
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    require_initialized(env)?;
    match admin(env) {
        Some(admin) if admin == *caller => Ok(()),
        _ => Err(LedgerError::NotAuthorized),
    }
}

pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_admin: &Address,
) -> Result<(), LedgerError> {
    require_admin(env, caller)?;
    validation::validate_principal(env, new_admin)?;

    env.storage().instance().set(&ADMIN, new_admin);
    extend_ttl_instance(env);

    events::publish_ownership_transferred(env, caller.clone(), Some(new_admin.clone()));
    Ok(())
}

/// Clears the administrator for good. Pause, unpause and ownership transfer are
/// unreachable afterwards; whatever pause state was in force stays in force.
pub fn renounce_ownership(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    require_admin(env, caller)?;

    env.storage().instance().remove(&ADMIN);
    extend_ttl_instance(env);

    events::publish_ownership_transferred(env, caller.clone(), None);
    Ok(())
}

// ── Circuit Breaker ──────────────────────────────────────────

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

pub fn require_not_paused(env: &Env) -> Result<(), LedgerError> {
    if is_paused(env) {
        return Err(LedgerError::LedgerPaused);
    }
    Ok(())
}

pub fn pause(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    require_admin(env, caller)?;
    require_not_paused(env)?;

    env.storage().instance().set(&PAUSED, &true);
    extend_ttl_instance(env);

    events::publish_paused(env, caller.clone());
    Ok(())
}

pub fn unpause(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    require_admin(env, caller)?;
    if !is_paused(env) {
        return Err(LedgerError::LedgerNotPaused);
    }

    env.storage().instance().set(&PAUSED, &false);
    extend_ttl_instance(env);

    events::publish_unpaused(env, caller.clone());
    Ok(())
}

// ── Record Authority ─────────────────────────────────────────

/// The creator is the only authority over a record; there is no record-level admin.
pub fn require_creator(record: &Record, caller: &Address) -> Result<(), LedgerError> {
    if record.creator != *caller {
        return Err(LedgerError::NotAuthorized);
    }
    Ok(())
}

/// Gate shared by every record mutation and audit logging call.
pub fn require_writable(env: &Env) -> Result<(), LedgerError> {
    require_initialized(env)?;
    require_not_paused(env)
}
