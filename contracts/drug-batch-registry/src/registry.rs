use soroban_sdk::{Address, Env, String, Vec};

use crate::authority;
use crate::error::RegistryError;
use crate::events::{emit_batch_amended, emit_batch_registered};
use crate::storage;
use crate::types::{Batch, BatchStatus, BatchUpdate, RegistrationParams, RegistryConfig};
use crate::utils;

/// Runs every registration check in order. The first failure wins.
/// Returns the parsed status so the caller never re-inspects the raw text.
fn validate_registration(
    env: &Env,
    config: &RegistryConfig,
    manufacturer: &Address,
    params: &RegistrationParams,
) -> Result<BatchStatus, RegistryError> {
    if !config.has_capacity() {
        return Err(RegistryError::CapacityExceeded);
    }

    if !utils::is_valid_batch_id(&params.batch_id) {
        return Err(RegistryError::InvalidIdentifier);
    }

    if params.quantity == 0 {
        return Err(RegistryError::InvalidQuantity);
    }

    if !utils::is_not_backdated(env, params.production_date) {
        return Err(RegistryError::InvalidDate);
    }

    if !utils::is_not_backdated(env, params.expiration_date) {
        return Err(RegistryError::InvalidDate);
    }

    if !utils::is_valid_hash(&params.composition_hash) {
        return Err(RegistryError::InvalidHash);
    }

    if !utils::is_valid_metadata(&params.metadata) {
        return Err(RegistryError::InvalidMetadata);
    }

    let status = BatchStatus::parse(&params.status)?;

    if !utils::is_valid_location(&params.origin_location) {
        return Err(RegistryError::InvalidLocation);
    }

    if !utils::is_valid_temperature(params.storage_temperature) {
        return Err(RegistryError::InvalidTemperature);
    }

    if !authority::is_authorized_manufacturer(env, config, manufacturer) {
        return Err(RegistryError::UnauthorizedManufacturer);
    }

    if storage::has_batch_id(env, &params.batch_id) {
        return Err(RegistryError::DuplicateIdentifier);
    }

    config.bound_authority()?;

    Ok(status)
}

pub fn register_batch(
    env: &Env,
    manufacturer: &Address,
    params: RegistrationParams,
) -> Result<u32, RegistryError> {
    let mut config = storage::get_config(env)?;

    let status = validate_registration(env, &config, manufacturer, &params)?;

    let fee_paid = authority::collect_fee(env, &config, manufacturer)?;

    let timestamp = utils::current_clock(env);
    let key = config.allocate_key();

    let batch = Batch {
        batch_id: params.batch_id.clone(),
        manufacturer: manufacturer.clone(),
        quantity: params.quantity,
        production_date: params.production_date,
        expiration_date: params.expiration_date,
        composition_hash: params.composition_hash,
        metadata: params.metadata,
        status,
        origin_location: params.origin_location,
        storage_temperature: params.storage_temperature,
        timestamp,
    };

    storage::set_batch(env, key, &batch);
    storage::set_batch_key(env, &params.batch_id, key);
    storage::set_config(env, &config);

    emit_batch_registered(
        env,
        key,
        params.batch_id,
        manufacturer.clone(),
        fee_paid,
        timestamp,
    );

    Ok(key)
}

pub fn amend_batch(
    env: &Env,
    caller: &Address,
    key: u32,
    new_metadata: String,
    new_status: String,
) -> Result<(), RegistryError> {
    let mut batch = storage::get_batch(env, key).ok_or(RegistryError::NotFound)?;

    // Only the manufacturer amends; the authority gets no special treatment.
    if batch.manufacturer != *caller {
        return Err(RegistryError::Unauthorized);
    }

    if !utils::is_valid_metadata(&new_metadata) {
        return Err(RegistryError::InvalidMetadata);
    }

    let new_status = BatchStatus::parse(&new_status)?;

    let old_status = batch.status.clone();
    let timestamp = utils::current_clock(env);

    batch.metadata = new_metadata.clone();
    batch.status = new_status.clone();
    batch.timestamp = timestamp;
    storage::set_batch(env, key, &batch);

    let update = BatchUpdate {
        update_metadata: new_metadata,
        update_status: new_status.clone(),
        update_timestamp: timestamp,
        updater: caller.clone(),
    };
    storage::set_batch_update(env, key, &update);
    storage::append_amendment(env, key, &update);

    emit_batch_amended(env, key, caller.clone(), old_status, new_status, timestamp);

    Ok(())
}

pub fn get_batch(env: &Env, key: u32) -> Option<Batch> {
    storage::get_batch(env, key)
}

pub fn get_batch_by_id(env: &Env, batch_id: &String) -> Option<Batch> {
    storage::get_batch_key(env, batch_id).and_then(|key| storage::get_batch(env, key))
}

pub fn get_batch_count(env: &Env) -> u32 {
    storage::get_config(env)
        .map(|config| config.next_batch_id)
        .unwrap_or(0)
}

pub fn is_registered(env: &Env, batch_id: &String) -> bool {
    storage::has_batch_id(env, batch_id)
}

pub fn get_amendment_history(env: &Env, key: u32, offset: u32, limit: u32) -> Vec<BatchUpdate> {
    let total = storage::get_amendment_count(env, key);
    let mut updates = Vec::new(env);

    let end = offset.saturating_add(limit).min(total);
    for index in offset..end {
        if let Some(update) = storage::get_amendment(env, key, index) {
            updates.push_back(update);
        }
    }

    updates
}
