use soroban_sdk::{Address, Bytes, Env, String};

use crate::types::{
    MAX_BATCH_ID_LEN, MAX_LOCATION_LEN, MAX_METADATA_LEN, MAX_STORAGE_TEMPERATURE,
    MIN_STORAGE_TEMPERATURE,
};

/// All-zero account and contract strkeys. Funds sent there are unrecoverable.
pub const BURN_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
pub const BURN_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

// Current ledger sequence, the registry's clock
pub fn current_clock(env: &Env) -> u32 {
    env.ledger().sequence()
}

// Production and expiration dates may not lie before the current ledger
pub fn is_not_backdated(env: &Env, date: u32) -> bool {
    date >= current_clock(env)
}

// A UTF-8 character is at most four bytes
const MAX_UTF8_CHAR_BYTES: u32 = 4;

/// Number of characters in `text`, or `None` when it is not valid UTF-8
/// or cannot possibly fit within `max_chars`.
fn char_count(text: &String, max_chars: u32) -> Option<u32> {
    let mut buf = [0u8; (MAX_METADATA_LEN * MAX_UTF8_CHAR_BYTES) as usize];
    let len = text.len();
    if len > max_chars * MAX_UTF8_CHAR_BYTES || len as usize > buf.len() {
        return None;
    }

    let bytes = &mut buf[..len as usize];
    text.copy_into_slice(bytes);
    core::str::from_utf8(bytes)
        .ok()
        .map(|decoded| decoded.chars().count() as u32)
}

fn has_char_count_within(text: &String, min_chars: u32, max_chars: u32) -> bool {
    matches!(char_count(text, max_chars), Some(count) if count >= min_chars && count <= max_chars)
}

pub fn is_valid_batch_id(batch_id: &String) -> bool {
    has_char_count_within(batch_id, 1, MAX_BATCH_ID_LEN)
}

pub fn is_valid_hash(composition_hash: &Bytes) -> bool {
    !composition_hash.is_empty()
}

pub fn is_valid_metadata(metadata: &String) -> bool {
    has_char_count_within(metadata, 0, MAX_METADATA_LEN)
}

pub fn is_valid_location(location: &String) -> bool {
    has_char_count_within(location, 1, MAX_LOCATION_LEN)
}

pub fn is_valid_temperature(temperature: i32) -> bool {
    (MIN_STORAGE_TEMPERATURE..=MAX_STORAGE_TEMPERATURE).contains(&temperature)
}

/// Identities that may never become the fee-receiving authority.
pub fn is_reserved_identity(env: &Env, candidate: &Address) -> bool {
    *candidate == env.current_contract_address()
        || *candidate == Address::from_string(&String::from_str(env, BURN_ACCOUNT))
        || *candidate == Address::from_string(&String::from_str(env, BURN_CONTRACT))
}
