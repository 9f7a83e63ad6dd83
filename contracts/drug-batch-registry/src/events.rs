use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::types::BatchStatus;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorityBoundEvent {
    pub authority: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeUpdatedEvent {
    pub old_fee: u64,
    pub new_fee: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchRegisteredEvent {
    pub key: u32,
    pub batch_id: String,
    pub manufacturer: Address,
    pub fee_paid: u64,
    pub timestamp: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchAmendedEvent {
    pub key: u32,
    pub updater: Address,
    pub old_status: BatchStatus,
    pub new_status: BatchStatus,
    pub timestamp: u32,
}

pub fn emit_authority_bound(env: &Env, authority: Address) {
    let event = AuthorityBoundEvent { authority };
    env.events().publish((symbol_short!("auth_bnd"),), event);
}

pub fn emit_fee_updated(env: &Env, old_fee: u64, new_fee: u64) {
    let event = FeeUpdatedEvent { old_fee, new_fee };
    env.events().publish((symbol_short!("fee_upd"),), event);
}

pub fn emit_batch_registered(
    env: &Env,
    key: u32,
    batch_id: String,
    manufacturer: Address,
    fee_paid: u64,
    timestamp: u32,
) {
    let event = BatchRegisteredEvent {
        key,
        batch_id,
        manufacturer,
        fee_paid,
        timestamp,
    };
    env.events().publish((symbol_short!("batch_reg"), key), event);
}

pub fn emit_batch_amended(
    env: &Env,
    key: u32,
    updater: Address,
    old_status: BatchStatus,
    new_status: BatchStatus,
    timestamp: u32,
) {
    let event = BatchAmendedEvent {
        key,
        updater,
        old_status,
        new_status,
        timestamp,
    };
    env.events().publish((symbol_short!("batch_amd"), key), event);
}
