#![allow(dead_code)]

use record_ledger::{RecordLedgerContract, RecordLedgerContractClient};
use soroban_sdk::{testutils::Address as _, Address, BytesN, Env, String};

pub struct TestContext {
    pub env: Env,
    pub client: RecordLedgerContractClient<'static>,
    pub admin: Address,
}

/// Creates a mocked Soroban environment, deploys the ledger, and initializes its admin.
pub fn setup_test_env() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(RecordLedgerContract, ());
    let client = RecordLedgerContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    TestContext { env, client, admin }
}

/// A 32-byte digest with every byte set to `byte`.
pub fn digest(env: &Env, byte: u8) -> BytesN<32> {
    BytesN::from_array(env, &[byte; 32])
}

/// Creates a record in `owner`'s namespace on behalf of `creator` and returns its id.
pub fn create_test_record(
    ctx: &TestContext,
    creator: &Address,
    resource_id: &str,
    byte: u8,
    owner: &Address,
) -> BytesN<32> {
    let resource = String::from_str(&ctx.env, resource_id);
    ctx.client
        .create_record(creator, &resource, &digest(&ctx.env, byte), owner)
}
