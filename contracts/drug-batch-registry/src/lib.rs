#![no_std]

mod authority;
mod error;
mod events;
mod registry;
mod storage;
mod types;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use authority::{ManufacturerOracle, ManufacturerOracleClient};
pub use error::*;
pub use events::*;
pub use types::*;

#[contract]
pub struct DrugBatchRegistry;

#[contractimpl]
impl DrugBatchRegistry {
    /// Initialize the registry with its fee token, manufacturer oracle and capacity.
    /// A `max_batches` of zero selects the default capacity.
    pub fn initialize(
        env: Env,
        fee_token: Address,
        manufacturer_oracle: Address,
        max_batches: u32,
    ) -> Result<(), RegistryError> {
        if storage::has_config(&env) {
            return Err(RegistryError::AlreadyInitialized);
        }
        let config = RegistryConfig::new(fee_token, manufacturer_oracle, max_batches);
        storage::set_config(&env, &config);
        Ok(())
    }

    /// Bind the verifying authority. Succeeds once.
    pub fn bind_authority(env: Env, authority: Address) -> Result<(), RegistryError> {
        authority::bind_authority(&env, authority)
    }

    /// Change the registration fee. Requires the bound authority's signature.
    pub fn set_fee(env: Env, new_fee: u64) -> Result<(), RegistryError> {
        authority::set_fee(&env, new_fee)
    }

    /// Register a new batch and charge the registration fee.
    /// Returns the numeric key allocated to the record.
    pub fn register(
        env: Env,
        manufacturer: Address,
        params: RegistrationParams,
    ) -> Result<u32, RegistryError> {
        manufacturer.require_auth();
        registry::register_batch(&env, &manufacturer, params)
    }

    /// Amend the metadata and status of a batch
    pub fn amend(
        env: Env,
        caller: Address,
        key: u32,
        new_metadata: String,
        new_status: String,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        registry::amend_batch(&env, &caller, key, new_metadata, new_status)
    }

    /// Get a batch by its numeric key
    pub fn get_batch(env: Env, key: u32) -> Option<Batch> {
        registry::get_batch(&env, key)
    }

    /// Look up a batch by its manufacturer-assigned identifier
    pub fn get_batch_by_id(env: Env, batch_id: String) -> Option<Batch> {
        registry::get_batch_by_id(&env, &batch_id)
    }

    /// Numeric key assigned to a batch identifier
    pub fn get_batch_key(env: Env, batch_id: String) -> Option<u32> {
        storage::get_batch_key(&env, &batch_id)
    }

    /// Number of batches ever registered
    pub fn get_batch_count(env: Env) -> u32 {
        registry::get_batch_count(&env)
    }

    /// Check whether a batch identifier has been taken
    pub fn is_registered(env: Env, batch_id: String) -> bool {
        registry::is_registered(&env, &batch_id)
    }

    /// Latest amendment of a batch, if it was ever amended
    pub fn get_batch_update(env: Env, key: u32) -> Option<BatchUpdate> {
        storage::get_batch_update(&env, key)
    }

    /// Every amendment of a batch, oldest first
    pub fn get_amendment_history(env: Env, key: u32, offset: u32, limit: u32) -> Vec<BatchUpdate> {
        registry::get_amendment_history(&env, key, offset, limit)
    }

    /// Current registration fee
    pub fn get_registration_fee(env: Env) -> u64 {
        storage::get_config(&env)
            .map(|config| config.registration_fee)
            .unwrap_or(0)
    }

    /// Bound verifying authority, if any
    pub fn get_authority(env: Env) -> Option<Address> {
        storage::get_config(&env)
            .ok()
            .and_then(|config| config.authority())
    }

    /// Registry capacity
    pub fn get_max_batches(env: Env) -> u32 {
        storage::get_config(&env)
            .map(|config| config.max_batches)
            .unwrap_or(0)
    }
}
