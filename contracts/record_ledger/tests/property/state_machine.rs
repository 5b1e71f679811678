#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based state machine tests for the record ledger.
//!
//! Random operation sequences run against the contract and against a plain in-memory
//! model side by side. After every step the outcome (success or the exact error) must
//! match, and at the end the record count, every stored record, and the audit sequence
//! must agree with the model.

use std::collections::HashMap;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use record_ledger::{LedgerError, RecordLedgerContract, RecordLedgerContractClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, Env, String};

const PRINCIPALS: u8 = 3;
const RESOURCES: u8 = 3;

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Create { actor: u8, owner: u8, resource: u8, hash: u8 },
    Update { actor: u8, resource: u8, hash: u8 },
    Delete { actor: u8, resource: u8 },
    ForceDelete { actor: u8, owner: u8, resource: u8 },
    LogAccess { actor: u8, owner: u8, resource: u8 },
    Share { actor: u8, owner: u8, resource: u8, target: u8 },
    Revoke { actor: u8, owner: u8, resource: u8, target: u8 },
    Pause,
    Unpause,
}

/// (owner, resource) -> (creator, hash byte)
#[derive(Default)]
struct Model {
    records: HashMap<(u8, u8), (u8, u8)>,
    paused: bool,
    seq: u64,
}

impl Model {
    fn writable(&self) -> Result<(), LedgerError> {
        if self.paused {
            return Err(LedgerError::LedgerPaused);
        }
        Ok(())
    }

    fn owned_by(&self, key: (u8, u8), actor: u8) -> Result<(), LedgerError> {
        match self.records.get(&key) {
            None => Err(LedgerError::RecordNotFound),
            Some((creator, _)) if *creator != actor => Err(LedgerError::NotAuthorized),
            Some(_) => Ok(()),
        }
    }

    fn present(&self, key: (u8, u8)) -> Result<(), LedgerError> {
        if !self.records.contains_key(&key) {
            return Err(LedgerError::RecordNotFound);
        }
        Ok(())
    }

    /// Applies `op` and returns the outcome the ledger is expected to report.
    fn apply(&mut self, op: &Op) -> Result<(), LedgerError> {
        let outcome = match *op {
            Op::Create { actor, owner, resource, hash } => {
                if hash == 0 {
                    return Err(LedgerError::EmptyHash);
                }
                self.writable()?;
                let key = (owner, resource);
                if self.records.contains_key(&key) {
                    return Err(LedgerError::RecordAlreadyExists);
                }
                self.records.insert(key, (actor, hash));
                Ok(())
            }
            Op::Update { actor, resource, hash } => {
                if hash == 0 {
                    return Err(LedgerError::EmptyHash);
                }
                self.writable()?;
                self.owned_by((actor, resource), actor)?;
                self.records.insert((actor, resource), (actor, hash));
                Ok(())
            }
            Op::Delete { actor, resource } => {
                self.writable()?;
                self.owned_by((actor, resource), actor)?;
                self.records.remove(&(actor, resource));
                Ok(())
            }
            Op::ForceDelete { actor, owner, resource } => {
                self.writable()?;
                self.owned_by((owner, resource), actor)?;
                self.records.remove(&(owner, resource));
                Ok(())
            }
            Op::LogAccess { owner, resource, .. } => {
                self.writable()?;
                self.present((owner, resource))
            }
            Op::Share { actor, owner, resource, target }
            | Op::Revoke { actor, owner, resource, target } => {
                if actor == target {
                    return Err(LedgerError::SelfReferenceNotAllowed);
                }
                self.writable()?;
                self.present((owner, resource))
            }
            Op::Pause => {
                self.writable()?;
                self.paused = true;
                return Ok(());
            }
            Op::Unpause => {
                if !self.paused {
                    return Err(LedgerError::LedgerNotPaused);
                }
                self.paused = false;
                return Ok(());
            }
        };
        if outcome.is_ok() {
            self.seq += 1;
        }
        outcome
    }
}

fn normalize(op: Op) -> Op {
    let p = |n: u8| n % PRINCIPALS;
    let r = |n: u8| n % RESOURCES;
    match op {
        Op::Create { actor, owner, resource, hash } => Op::Create {
            actor: p(actor),
            owner: p(owner),
            resource: r(resource),
            hash: hash % 4,
        },
        Op::Update { actor, resource, hash } => Op::Update {
            actor: p(actor),
            resource: r(resource),
            hash: hash % 4,
        },
        Op::Delete { actor, resource } => Op::Delete {
            actor: p(actor),
            resource: r(resource),
        },
        Op::ForceDelete { actor, owner, resource } => Op::ForceDelete {
            actor: p(actor),
            owner: p(owner),
            resource: r(resource),
        },
        Op::LogAccess { actor, owner, resource } => Op::LogAccess {
            actor: p(actor),
            owner: p(owner),
            resource: r(resource),
        },
        Op::Share { actor, owner, resource, target } => Op::Share {
            actor: p(actor),
            owner: p(owner),
            resource: r(resource),
            target: p(target),
        },
        Op::Revoke { actor, owner, resource, target } => Op::Revoke {
            actor: p(actor),
            owner: p(owner),
            resource: r(resource),
            target: p(target),
        },
        other => other,
    }
}

fn flatten<T, C, H: std::fmt::Debug>(
    res: Result<Result<T, C>, Result<LedgerError, H>>,
) -> Result<(), LedgerError> {
    match res {
        Ok(_) => Ok(()),
        Err(Ok(err)) => Err(err),
        Err(Err(err)) => panic!("host error: {:?}", err),
    }
}

struct Harness {
    env: Env,
    client: RecordLedgerContractClient<'static>,
    admin: Address,
    principals: Vec<Address>,
    resources: Vec<String>,
}

impl Harness {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register(RecordLedgerContract, ());
        let client = RecordLedgerContractClient::new(&env, &contract_id);
        let admin = Address::generate(&env);
        client.initialize(&admin);

        let principals = (0..PRINCIPALS).map(|_| Address::generate(&env)).collect();
        let resources = (0..RESOURCES)
            .map(|i| String::from_str(&env, &format!("res-{}", i)))
            .collect();

        Harness { env, client, admin, principals, resources }
    }

    fn hash(&self, byte: u8) -> BytesN<32> {
        BytesN::from_array(&self.env, &[byte; 32])
    }

    fn run(&self, op: &Op) -> Result<(), LedgerError> {
        let p = |n: u8| &self.principals[n as usize];
        let r = |n: u8| &self.resources[n as usize];
        match *op {
            Op::Create { actor, owner, resource, hash } => flatten(
                self.client
                    .try_create_record(p(actor), r(resource), &self.hash(hash), p(owner)),
            ),
            Op::Update { actor, resource, hash } => flatten(
                self.client
                    .try_update_record(p(actor), r(resource), &self.hash(hash)),
            ),
            Op::Delete { actor, resource } => {
                flatten(self.client.try_delete_record(p(actor), r(resource)))
            }
            Op::ForceDelete { actor, owner, resource } => flatten(
                self.client
                    .try_force_delete_record(p(actor), r(resource), p(owner)),
            ),
            Op::LogAccess { actor, owner, resource } => {
                flatten(self.client.try_log_access(p(actor), r(resource), p(owner)))
            }
            Op::Share { actor, owner, resource, target } => flatten(
                self.client
                    .try_log_share_access(p(actor), r(resource), p(owner), p(target)),
            ),
            Op::Revoke { actor, owner, resource, target } => flatten(
                self.client
                    .try_log_revoke_access(p(actor), r(resource), p(owner), p(target)),
            ),
            Op::Pause => flatten(self.client.try_pause(&self.admin)),
            Op::Unpause => flatten(self.client.try_unpause(&self.admin)),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_ledger_matches_model(ops in prop::collection::vec(any::<Op>(), 1..40)) {
        let harness = Harness::new();
        let mut model = Model::default();

        for op in ops.into_iter().map(normalize) {
            let expected = model.apply(&op);
            let actual = harness.run(&op);
            prop_assert_eq!(actual, expected, "diverged on {:?}", op);
        }

        prop_assert_eq!(harness.client.get_record_count(), model.records.len() as u64);
        prop_assert_eq!(harness.client.get_audit_head().seq, model.seq);
        prop_assert_eq!(harness.client.is_paused(), model.paused);

        for owner in 0..PRINCIPALS {
            for resource in 0..RESOURCES {
                let stored = harness.client.try_get_record(
                    &harness.resources[resource as usize],
                    &harness.principals[owner as usize],
                );
                match model.records.get(&(owner, resource)) {
                    Some((creator, hash)) => {
                        let record = stored.unwrap().unwrap();
                        prop_assert_eq!(&record.creator, &harness.principals[*creator as usize]);
                        prop_assert_eq!(record.data_hash, harness.hash(*hash));
                        prop_assert!(record.created_at <= record.last_modified);
                    }
                    None => {
                        prop_assert_eq!(stored.unwrap_err().unwrap(), LedgerError::RecordNotFound);
                    }
                }
            }
        }
    }
}
