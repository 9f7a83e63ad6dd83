use soroban_sdk::{contracttype, Env, String};

use crate::error::RegistryError;
use crate::types::{Batch, BatchUpdate, RegistryConfig};

const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_BUMP_THRESHOLD: u32 = INSTANCE_BUMP_LEDGERS - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_LEDGERS: u32 = 30 * DAY_IN_LEDGERS; // ~30 days
pub const PERSISTENT_BUMP_THRESHOLD: u32 = PERSISTENT_BUMP_LEDGERS - 7 * DAY_IN_LEDGERS; // Renew ~7 days early

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,                // RegistryConfig singleton (instance)
    Batch(u32),            // key -> Batch
    BatchUpdate(u32),      // key -> latest BatchUpdate
    BatchIndex(String),    // batch_id -> key
    AmendmentCount(u32),   // key -> number of amendments
    Amendment(u32, u32),   // (key, index) -> BatchUpdate
}

// Configuration

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<RegistryConfig, RegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(RegistryError::NotInitialized)
}

pub fn set_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_BUMP_LEDGERS);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_BUMP_LEDGERS);
}

// Batch records

pub fn get_batch(env: &Env, key: u32) -> Option<Batch> {
    env.storage().persistent().get(&DataKey::Batch(key))
}

pub fn set_batch(env: &Env, key: u32, batch: &Batch) {
    let storage_key = DataKey::Batch(key);
    env.storage().persistent().set(&storage_key, batch);
    bump_persistent(env, &storage_key);
}

// Identifier index

pub fn get_batch_key(env: &Env, batch_id: &String) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::BatchIndex(batch_id.clone()))
}

pub fn has_batch_id(env: &Env, batch_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::BatchIndex(batch_id.clone()))
}

pub fn set_batch_key(env: &Env, batch_id: &String, key: u32) {
    let storage_key = DataKey::BatchIndex(batch_id.clone());
    env.storage().persistent().set(&storage_key, &key);
    bump_persistent(env, &storage_key);
}

// Amendment trail

pub fn get_batch_update(env: &Env, key: u32) -> Option<BatchUpdate> {
    env.storage().persistent().get(&DataKey::BatchUpdate(key))
}

pub fn set_batch_update(env: &Env, key: u32, update: &BatchUpdate) {
    let storage_key = DataKey::BatchUpdate(key);
    env.storage().persistent().set(&storage_key, update);
    bump_persistent(env, &storage_key);
}

pub fn get_amendment_count(env: &Env, key: u32) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::AmendmentCount(key))
        .unwrap_or(0)
}

pub fn get_amendment(env: &Env, key: u32, index: u32) -> Option<BatchUpdate> {
    env.storage()
        .persistent()
        .get(&DataKey::Amendment(key, index))
}

pub fn append_amendment(env: &Env, key: u32, update: &BatchUpdate) {
    let index = get_amendment_count(env, key);

    let entry_key = DataKey::Amendment(key, index);
    env.storage().persistent().set(&entry_key, update);
    bump_persistent(env, &entry_key);

    let count_key = DataKey::AmendmentCount(key);
    env.storage().persistent().set(&count_key, &(index + 1));
    bump_persistent(env, &count_key);
}
