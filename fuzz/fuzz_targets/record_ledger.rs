#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use record_ledger::{LedgerError, RecordLedgerContract, RecordLedgerContractClient};
use soroban_sdk::{testutils::Address as _, Address, BytesN, Env, String};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Create { actor: u8, owner: u8, resource: u8, hash: u8 },
    Update { actor: u8, resource: u8, hash: u8 },
    Delete { actor: u8, resource: u8 },
    ForceDelete { actor: u8, owner: u8, resource: u8 },
    Access { actor: u8, owner: u8, resource: u8 },
    Share { actor: u8, owner: u8, resource: u8, target: u8 },
    Revoke { actor: u8, owner: u8, resource: u8, target: u8 },
    Pause { caller: u8 },
    Unpause { caller: u8 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(RecordLedgerContract, ());
    let client = RecordLedgerContractClient::new(&env, &contract_id);

    // Slot 0 is the admin; the rest act as patients and providers.
    let users: Vec<Address> = (0..4).map(|_| Address::generate(&env)).collect();
    let _ = client.try_initialize(&users[0]);

    let resources: Vec<String> = ["obs-1", "obs-12", "lab-7", ""]
        .iter()
        .map(|s| String::from_str(&env, s))
        .collect();

    let user = |n: u8| &users[n as usize % users.len()];
    let resource = |n: u8| &resources[n as usize % resources.len()];
    let digest = |n: u8| BytesN::from_array(&env, &[n % 4; 32]);

    for action in actions {
        let seq_before = client.get_audit_head().seq;
        let count_before = client.get_record_count();

        let accepted = match action {
            FuzzAction::Create { actor, owner, resource: r, hash } => client
                .try_create_record(user(actor), resource(r), &digest(hash), user(owner))
                .is_ok(),
            FuzzAction::Update { actor, resource: r, hash } => client
                .try_update_record(user(actor), resource(r), &digest(hash))
                .is_ok(),
            FuzzAction::Delete { actor, resource: r } => {
                client.try_delete_record(user(actor), resource(r)).is_ok()
            }
            FuzzAction::ForceDelete { actor, owner, resource: r } => client
                .try_force_delete_record(user(actor), resource(r), user(owner))
                .is_ok(),
            FuzzAction::Access { actor, owner, resource: r } => client
                .try_log_access(user(actor), resource(r), user(owner))
                .is_ok(),
            FuzzAction::Share { actor, owner, resource: r, target } => {
                let res = client.try_log_share_access(user(actor), resource(r), user(owner), user(target));
                if user(actor) == user(target) && resource(r).len() > 0 {
                    assert_eq!(res.unwrap_err().unwrap(), LedgerError::SelfReferenceNotAllowed);
                    false
                } else {
                    res.is_ok()
                }
            }
            FuzzAction::Revoke { actor, owner, resource: r, target } => {
                let res = client.try_log_revoke_access(user(actor), resource(r), user(owner), user(target));
                if user(actor) == user(target) && resource(r).len() > 0 {
                    assert_eq!(res.unwrap_err().unwrap(), LedgerError::SelfReferenceNotAllowed);
                    false
                } else {
                    res.is_ok()
                }
            }
            FuzzAction::Pause { caller } => {
                let _ = client.try_pause(user(caller));
                continue;
            }
            FuzzAction::Unpause { caller } => {
                let _ = client.try_unpause(user(caller));
                continue;
            }
        };

        // Accepted record operations advance the sequence by one; rejected ones leave no trace.
        let seq_after = client.get_audit_head().seq;
        if accepted {
            assert_eq!(seq_after, seq_before + 1);
        } else {
            assert_eq!(seq_after, seq_before);
            assert_eq!(client.get_record_count(), count_before);
        }
    }
});
