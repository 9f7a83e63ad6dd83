use soroban_sdk::{contracttype, Address, Bytes, String};

use crate::error::RegistryError;

/// Capacity used when `initialize` is called with `max_batches == 0`.
pub const DEFAULT_MAX_BATCHES: u32 = 10_000;

/// Fee charged per registration until the authority changes it.
pub const DEFAULT_REGISTRATION_FEE: u64 = 500;

pub const MAX_BATCH_ID_LEN: u32 = 100;
pub const MAX_METADATA_LEN: u32 = 256;
pub const MAX_LOCATION_LEN: u32 = 100;
pub const MIN_STORAGE_TEMPERATURE: i32 = -20;
pub const MAX_STORAGE_TEMPERATURE: i32 = 40;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BatchStatus {
    Active,
    Recalled,
    Expired,
}

impl BatchStatus {
    /// Parses the caller-facing status text (`active`, `recalled`, `expired`).
    pub fn parse(status: &String) -> Result<Self, RegistryError> {
        let mut buf = [0u8; 8];
        let len = status.len() as usize;
        if len > buf.len() {
            return Err(RegistryError::InvalidStatus);
        }
        status.copy_into_slice(&mut buf[..len]);

        match &buf[..len] {
            b"active" => Ok(BatchStatus::Active),
            b"recalled" => Ok(BatchStatus::Recalled),
            b"expired" => Ok(BatchStatus::Expired),
            _ => Err(RegistryError::InvalidStatus),
        }
    }
}

/// Write-once binding of the verifying authority.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuthorityBinding {
    Unbound,
    Bound(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub next_batch_id: u32,
    pub max_batches: u32,
    pub registration_fee: u64,
    pub fee_token: Address,
    pub manufacturer_oracle: Address,
    authority: AuthorityBinding,
}

impl RegistryConfig {
    pub fn new(fee_token: Address, manufacturer_oracle: Address, max_batches: u32) -> Self {
        let max_batches = if max_batches == 0 {
            DEFAULT_MAX_BATCHES
        } else {
            max_batches
        };

        RegistryConfig {
            next_batch_id: 0,
            max_batches,
            registration_fee: DEFAULT_REGISTRATION_FEE,
            fee_token,
            manufacturer_oracle,
            authority: AuthorityBinding::Unbound,
        }
    }

    pub fn authority(&self) -> Option<Address> {
        match &self.authority {
            AuthorityBinding::Bound(authority) => Some(authority.clone()),
            AuthorityBinding::Unbound => None,
        }
    }

    pub fn bound_authority(&self) -> Result<Address, RegistryError> {
        self.authority().ok_or(RegistryError::AuthorityNotBound)
    }

    /// Moves the binding from `Unbound` to `Bound`. There is no way back.
    pub fn bind_authority(&mut self, candidate: Address) -> Result<(), RegistryError> {
        if let AuthorityBinding::Bound(_) = self.authority {
            return Err(RegistryError::AlreadyBound);
        }
        self.authority = AuthorityBinding::Bound(candidate);
        Ok(())
    }

    pub fn has_capacity(&self) -> bool {
        self.next_batch_id < self.max_batches
    }

    /// Hands out the next record key and advances the counter.
    pub fn allocate_key(&mut self) -> u32 {
        let key = self.next_batch_id;
        self.next_batch_id += 1;
        key
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Batch {
    pub batch_id: String,
    pub manufacturer: Address,
    pub quantity: u64,
    pub production_date: u32,
    pub expiration_date: u32,
    pub composition_hash: Bytes,
    pub metadata: String,
    pub status: BatchStatus,
    pub origin_location: String,
    pub storage_temperature: i32,
    pub timestamp: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchUpdate {
    pub update_metadata: String,
    pub update_status: BatchStatus,
    pub update_timestamp: u32,
    pub updater: Address,
}

/// Registration request as received from the manufacturer, before validation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrationParams {
    pub batch_id: String,
    pub quantity: u64,
    pub production_date: u32,
    pub expiration_date: u32,
    pub composition_hash: Bytes,
    pub metadata: String,
    pub status: String,
    pub origin_location: String,
    pub storage_temperature: i32,
}
