use crate::LedgerError;
use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env, String};

/// Longest accepted resource id, in bytes.
pub const MAX_RESOURCE_ID_LEN: u32 = 256;

/// Strkey of the all-zero ed25519 account, the ledger's "no principal" sentinel.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Strkey of the all-zero contract address.
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub fn validate_resource_id(resource_id: &String) -> Result<(), LedgerError> {
    let len = resource_id.len();
    if len == 0 || len > MAX_RESOURCE_ID_LEN {
        return Err(LedgerError::InvalidInput);
    }
    Ok(())
}

/// Digests are fixed-width; the only malformed value left to reject is all-zero.
pub fn validate_data_hash(data_hash: &BytesN<32>) -> Result<(), LedgerError> {
    if data_hash.to_array() == [0u8; 32] {
        return Err(LedgerError::EmptyHash);
    }
    Ok(())
}

/// `ScVal::Address` of an ed25519 account: value tag, address type, key type.
const ACCOUNT_XDR_HEADER: [u8; 12] = [0, 0, 0, 18, 0, 0, 0, 0, 0, 0, 0, 0];
/// `ScVal::Address` of a contract: value tag, address type.
const CONTRACT_XDR_HEADER: [u8; 8] = [0, 0, 0, 18, 0, 0, 0, 1];

/// Matches the XDR form against the two sentinel layouts, so no strkey is parsed.
pub fn is_zero_principal(env: &Env, principal: &Address) -> bool {
    let xdr = principal.clone().to_xdr(env);
    let mut buf = [0u8; 44];
    let len = xdr.len() as usize;
    if len > buf.len() {
        return false;
    }
    xdr.copy_into_slice(&mut buf[..len]);

    let (header, key) = match len {
        44 => buf.split_at(ACCOUNT_XDR_HEADER.len()),
        40 => buf[..40].split_at(CONTRACT_XDR_HEADER.len()),
        _ => return false,
    };
    let known_header = header == ACCOUNT_XDR_HEADER || header == CONTRACT_XDR_HEADER;
    known_header && key == [0u8; 32]
}

pub fn validate_principal(env: &Env, principal: &Address) -> Result<(), LedgerError> {
    if is_zero_principal(env, principal) {
        return Err(LedgerError::ZeroPrincipal);
    }
    Ok(())
}

/// Checks the target of a share or revoke: a real principal other than the actor.
pub fn validate_counterparty(
    env: &Env,
    target: &Address,
    actor: &Address,
) -> Result<(), LedgerError> {
    validate_principal(env, target)?;
    if target == actor {
        return Err(LedgerError::SelfReferenceNotAllowed);
    }
    Ok(())
}
