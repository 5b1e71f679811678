//! Parsers for the string forms callers hand to the ledger.
//!
//! Every check here runs before anything is submitted. The ledger repeats the checks that
//! still apply to typed values (non-zero digest, non-zero principal, resource id bounds),
//! so a caller that bypasses this module gains nothing.

use record_ledger::{validation, LedgerError};
use soroban_sdk::{Address, BytesN, Env, String};
use stellar_strkey::Strkey;

/// Hex digits in a 32-byte digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Parses a 32-byte digest written as 64 hex digits, optionally prefixed with `0x`.
///
/// Anything longer is rejected rather than cut down to 32 bytes: a longer digest means the
/// caller hashed with a different function, and keeping a prefix of it would silently
/// break integrity checks later.
pub fn parse_data_hash(env: &Env, input: &str) -> Result<BytesN<32>, LedgerError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    if digits.len() != DIGEST_HEX_LEN {
        return Err(LedgerError::InvalidInput);
    }

    let mut bytes = [0u8; 32];
    hex::decode_to_slice(digits, &mut bytes).map_err(|_| LedgerError::InvalidInput)?;

    let hash = BytesN::from_array(env, &bytes);
    validation::validate_data_hash(&hash)?;
    Ok(hash)
}

/// Parses an account (`G…`) or contract (`C…`) strkey, checksum included.
pub fn parse_principal(env: &Env, input: &str) -> Result<Address, LedgerError> {
    match input.parse::<Strkey>() {
        Ok(Strkey::PublicKeyEd25519(_)) | Ok(Strkey::Contract(_)) => {}
        _ => return Err(LedgerError::InvalidInput),
    }

    let address = Address::from_string(&String::from_str(env, input));
    validation::validate_principal(env, &address)?;
    Ok(address)
}

pub fn validate_resource_id(input: &str) -> Result<(), LedgerError> {
    if input.is_empty() || input.len() > validation::MAX_RESOURCE_ID_LEN as usize {
        return Err(LedgerError::InvalidInput);
    }
    Ok(())
}
