use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env, String};

/// Derives the ledger identity of a record from its resource id and owning principal.
///
/// The id is `keccak256(xdr(resource_id) || xdr(owner))`. Both encodings carry their own
/// length, so no two `(resource_id, owner)` pairs share a preimage, and the same
/// `resource_id` under two owners lands in two different namespaces.
///
/// Pure and total: lookups re-derive the id instead of storing it anywhere.
pub fn derive_record_id(env: &Env, resource_id: &String, owner: &Address) -> BytesN<32> {
    let mut preimage = resource_id.clone().to_xdr(env);
    preimage.append(&owner.clone().to_xdr(env));
    env.crypto().keccak256(&preimage).into()
}
