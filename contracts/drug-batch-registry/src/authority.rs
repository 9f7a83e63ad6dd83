use soroban_sdk::{contractclient, log, token, Address, Env};

use crate::error::RegistryError;
use crate::events::{emit_authority_bound, emit_fee_updated};
use crate::storage;
use crate::types::RegistryConfig;
use crate::utils;

/// Membership oracle for manufacturers allowed to register batches.
/// The registry only asks; the set itself is maintained elsewhere.
#[contractclient(name = "ManufacturerOracleClient")]
pub trait ManufacturerOracle {
    fn is_authorized_manufacturer(env: Env, manufacturer: Address) -> bool;
}

pub fn bind_authority(env: &Env, candidate: Address) -> Result<(), RegistryError> {
    let mut config = storage::get_config(env)?;

    if config.authority().is_some() {
        return Err(RegistryError::AlreadyBound);
    }

    if utils::is_reserved_identity(env, &candidate) {
        return Err(RegistryError::InvalidIdentity);
    }

    config.bind_authority(candidate.clone())?;
    storage::set_config(env, &config);

    emit_authority_bound(env, candidate);

    Ok(())
}

pub fn set_fee(env: &Env, new_fee: u64) -> Result<(), RegistryError> {
    let mut config = storage::get_config(env)?;

    let authority = config.bound_authority()?;
    authority.require_auth();

    let old_fee = config.registration_fee;
    config.registration_fee = new_fee;
    storage::set_config(env, &config);

    emit_fee_updated(env, old_fee, new_fee);

    Ok(())
}

/// A failing or misbehaving oracle counts as "not authorized".
pub fn is_authorized_manufacturer(env: &Env, config: &RegistryConfig, caller: &Address) -> bool {
    let oracle = ManufacturerOracleClient::new(env, &config.manufacturer_oracle);
    matches!(oracle.try_is_authorized_manufacturer(caller), Ok(Ok(true)))
}

/// Moves the registration fee from `payer` to the bound authority.
/// Returns the amount charged.
pub fn collect_fee(
    env: &Env,
    config: &RegistryConfig,
    payer: &Address,
) -> Result<u64, RegistryError> {
    let authority = config.bound_authority()?;
    let fee = config.registration_fee;

    if fee == 0 {
        return Ok(0);
    }

    let token_client = token::Client::new(env, &config.fee_token);
    match token_client.try_transfer(payer, &authority, &i128::from(fee)) {
        Ok(Ok(())) => Ok(fee),
        _ => {
            log!(env, "registration fee transfer failed", payer.clone(), fee);
            Err(RegistryError::TransferFailed)
        }
    }
}
