#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for the guard layer.
//!
//! Invariants tested:
//! - Only the creator can update or delete; refused calls leave the record unchanged
//! - Share and revoke can never target the caller
//! - While paused, every mutating and logging call fails and reads still succeed

use proptest::prelude::*;
use record_ledger::{LedgerError, RecordLedgerContract, RecordLedgerContractClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, Env, String};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup() -> (Env, RecordLedgerContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(RecordLedgerContract, ());
    let client = RecordLedgerContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    /// A record created by someone else in the owner's namespace is out of the owner's reach.
    #[test]
    fn prop_non_creator_cannot_mutate(byte in 1u8..=255u8, new_byte in 1u8..=255u8) {
        let (env, client, _admin) = setup();
        let creator = Address::generate(&env);
        let owner = Address::generate(&env);
        let resource = String::from_str(&env, "obs-123");
        let hash = BytesN::from_array(&env, &[byte; 32]);

        client.create_record(&creator, &resource, &hash, &owner);
        let before = client.get_record(&resource, &owner);

        let res = client.try_update_record(&owner, &resource, &BytesN::from_array(&env, &[new_byte; 32]));
        prop_assert_eq!(res.unwrap_err().unwrap(), LedgerError::NotAuthorized);
        let res = client.try_delete_record(&owner, &resource);
        prop_assert_eq!(res.unwrap_err().unwrap(), LedgerError::NotAuthorized);
        let res = client.try_force_delete_record(&owner, &resource, &owner);
        prop_assert_eq!(res.unwrap_err().unwrap(), LedgerError::NotAuthorized);

        prop_assert_eq!(client.get_record(&resource, &owner), before);
        prop_assert_eq!(client.get_record_count(), 1u64);
    }

    #[test]
    fn prop_self_reference_rejected(resource in "[a-z0-9-]{1,32}") {
        let (env, client, _admin) = setup();
        let actor = Address::generate(&env);
        let owner = Address::generate(&env);
        let resource = String::from_str(&env, &resource);
        client.create_record(&actor, &resource, &BytesN::from_array(&env, &[0xaa; 32]), &owner);

        // Any caller, creator or not, is refused as its own counterparty.
        for caller in [actor.clone(), owner.clone(), Address::generate(&env)] {
            let res = client.try_log_share_access(&caller, &resource, &owner, &caller);
            prop_assert_eq!(res.unwrap_err().unwrap(), LedgerError::SelfReferenceNotAllowed);
            let res = client.try_log_revoke_access(&caller, &resource, &owner, &caller);
            prop_assert_eq!(res.unwrap_err().unwrap(), LedgerError::SelfReferenceNotAllowed);
        }
        prop_assert_eq!(client.get_audit_head().seq, 1u64);
    }

    #[test]
    fn prop_pause_gates_writes_not_reads(op in 0u8..7u8) {
        let (env, client, admin) = setup();
        let actor = Address::generate(&env);
        let other = Address::generate(&env);
        let resource = String::from_str(&env, "obs-123");
        let hash = BytesN::from_array(&env, &[0xaa; 32]);
        client.create_record(&actor, &resource, &hash, &actor);

        client.pause(&admin);

        let err = match op {
            0 => client.try_create_record(&actor, &String::from_str(&env, "new"), &hash, &actor).unwrap_err(),
            1 => client.try_update_record(&actor, &resource, &BytesN::from_array(&env, &[0xbb; 32])).unwrap_err(),
            2 => client.try_delete_record(&actor, &resource).unwrap_err(),
            3 => client.try_force_delete_record(&actor, &resource, &actor).unwrap_err(),
            4 => client.try_log_access(&other, &resource, &actor).unwrap_err(),
            5 => client.try_log_share_access(&actor, &resource, &actor, &other).unwrap_err(),
            _ => client.try_log_revoke_access(&actor, &resource, &actor, &other).unwrap_err(),
        };
        prop_assert_eq!(err.unwrap(), LedgerError::LedgerPaused);

        prop_assert!(client.record_exists(&resource, &actor));
        prop_assert_eq!(client.get_record(&resource, &actor).data_hash, hash);
        prop_assert_eq!(client.get_record_count(), 1u64);
        prop_assert_eq!(client.get_audit_head().seq, 1u64);
    }
}
