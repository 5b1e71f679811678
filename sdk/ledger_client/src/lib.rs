//! Off-ledger client for the record ledger.
//!
//! Callers outside the contract deal in strings: strkey principals, hex digests, free-form
//! resource ids. [`LedgerClient`] parses and checks all of them before anything is
//! submitted, then forwards to the generated contract client and folds the nested
//! invocation result into one [`ClientError`].

pub mod wire;

use std::fmt;

use record_ledger::{AuditHead, LedgerError, Record, RecordLedgerContractClient};
use soroban_sdk::{Address, BytesN, Env, String};

pub use wire::{parse_data_hash, parse_principal, validate_resource_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientError {
    /// Refused locally; nothing was submitted.
    Invalid(LedgerError),
    /// The ledger ran the call and rejected it. No state changed.
    Ledger(LedgerError),
    /// The invocation failed below the contract (host trap, bad return value).
    Host,
}

impl ClientError {
    pub fn kind(&self) -> Option<LedgerError> {
        match self {
            ClientError::Invalid(err) | ClientError::Ledger(err) => Some(*err),
            ClientError::Host => None,
        }
    }

    pub fn submitted(&self) -> bool {
        !matches!(self, ClientError::Invalid(_))
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Invalid(err) => write!(f, "rejected before submission: {}", err.message()),
            ClientError::Ledger(err) => write!(
                f,
                "rejected by ledger (code {}): {}",
                *err as u32,
                err.message()
            ),
            ClientError::Host => write!(f, "host invocation failed"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<LedgerError> for ClientError {
    fn from(err: LedgerError) -> Self {
        ClientError::Invalid(err)
    }
}

/// Collapses the `try_*` result shape of a generated client call to a fallible entry point.
fn submit<T, C, H>(res: Result<Result<T, C>, Result<LedgerError, H>>) -> Result<T, ClientError> {
    match res {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) | Err(Err(_)) => Err(ClientError::Host),
        Err(Ok(err)) => Err(ClientError::Ledger(err)),
    }
}

pub struct LedgerClient<'a> {
    env: Env,
    inner: RecordLedgerContractClient<'a>,
}

impl<'a> LedgerClient<'a> {
    pub fn new(env: &Env, contract_id: &Address) -> Self {
        LedgerClient {
            env: env.clone(),
            inner: RecordLedgerContractClient::new(env, contract_id),
        }
    }

    pub fn contract(&self) -> &RecordLedgerContractClient<'a> {
        &self.inner
    }

    fn resource(&self, resource_id: &str) -> Result<String, ClientError> {
        validate_resource_id(resource_id)?;
        Ok(String::from_str(&self.env, resource_id))
    }

    fn principal(&self, input: &str) -> Result<Address, ClientError> {
        Ok(parse_principal(&self.env, input)?)
    }

    /// Caller and counterparty, refused locally when they are the same principal.
    fn counterparty(&self, caller: &str, target: &str) -> Result<(Address, Address), ClientError> {
        let caller = self.principal(caller)?;
        let target = self.principal(target)?;
        if caller == target {
            return Err(ClientError::Invalid(LedgerError::SelfReferenceNotAllowed));
        }
        Ok((caller, target))
    }

    pub fn create_record(
        &self,
        caller: &str,
        resource_id: &str,
        data_hash: &str,
        owner: &str,
    ) -> Result<BytesN<32>, ClientError> {
        let caller = self.principal(caller)?;
        let resource_id = self.resource(resource_id)?;
        let data_hash = parse_data_hash(&self.env, data_hash)?;
        let owner = self.principal(owner)?;
        submit(
            self.inner
                .try_create_record(&caller, &resource_id, &data_hash, &owner),
        )
    }

    pub fn update_record(
        &self,
        caller: &str,
        resource_id: &str,
        new_data_hash: &str,
    ) -> Result<(), ClientError> {
        let caller = self.principal(caller)?;
        let resource_id = self.resource(resource_id)?;
        let data_hash = parse_data_hash(&self.env, new_data_hash)?;
        submit(self.inner.try_update_record(&caller, &resource_id, &data_hash))
    }

    pub fn delete_record(&self, caller: &str, resource_id: &str) -> Result<(), ClientError> {
        let caller = self.principal(caller)?;
        let resource_id = self.resource(resource_id)?;
        submit(self.inner.try_delete_record(&caller, &resource_id))
    }

    pub fn force_delete_record(
        &self,
        caller: &str,
        resource_id: &str,
        owner: &str,
    ) -> Result<(), ClientError> {
        let caller = self.principal(caller)?;
        let resource_id = self.resource(resource_id)?;
        let owner = self.principal(owner)?;
        submit(
            self.inner
                .try_force_delete_record(&caller, &resource_id, &owner),
        )
    }

    pub fn log_access(&self, caller: &str, resource_id: &str, owner: &str) -> Result<(), ClientError> {
        let caller = self.principal(caller)?;
        let resource_id = self.resource(resource_id)?;
        let owner = self.principal(owner)?;
        submit(self.inner.try_log_access(&caller, &resource_id, &owner))
    }

    pub fn log_share_access(
        &self,
        caller: &str,
        resource_id: &str,
        owner: &str,
        recipient: &str,
    ) -> Result<(), ClientError> {
        let (caller, recipient) = self.counterparty(caller, recipient)?;
        let resource_id = self.resource(resource_id)?;
        let owner = self.principal(owner)?;
        submit(
            self.inner
                .try_log_share_access(&caller, &resource_id, &owner, &recipient),
        )
    }

    pub fn log_revoke_access(
        &self,
        caller: &str,
        resource_id: &str,
        owner: &str,
        user_to_revoke: &str,
    ) -> Result<(), ClientError> {
        let (caller, revoked) = self.counterparty(caller, user_to_revoke)?;
        let resource_id = self.resource(resource_id)?;
        let owner = self.principal(owner)?;
        submit(
            self.inner
                .try_log_revoke_access(&caller, &resource_id, &owner, &revoked),
        )
    }

    pub fn get_record(&self, resource_id: &str, owner: &str) -> Result<Record, ClientError> {
        let resource_id = self.resource(resource_id)?;
        let owner = self.principal(owner)?;
        submit(self.inner.try_get_record(&resource_id, &owner))
    }

    pub fn record_exists(&self, resource_id: &str, owner: &str) -> Result<bool, ClientError> {
        let resource_id = self.resource(resource_id)?;
        let owner = self.principal(owner)?;
        Ok(self.inner.record_exists(&resource_id, &owner))
    }

    pub fn record_id(&self, resource_id: &str, owner: &str) -> Result<BytesN<32>, ClientError> {
        let resource_id = self.resource(resource_id)?;
        let owner = self.principal(owner)?;
        Ok(self.inner.get_record_id(&resource_id, &owner))
    }

    pub fn record_count(&self) -> u64 {
        self.inner.get_record_count()
    }

    pub fn audit_head(&self) -> AuditHead {
        self.inner.get_audit_head()
    }
}
