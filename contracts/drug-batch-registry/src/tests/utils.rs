#![cfg(test)]

use soroban_sdk::{
    contract, contractimpl,
    testutils::{Address as _, Ledger},
    token, Address, Bytes, Env, String,
};

use crate::{DrugBatchRegistry, DrugBatchRegistryClient, RegistrationParams};

pub const STARTING_BALANCE: i128 = 1_000_000;

/// Stand-in for the external manufacturer membership oracle.
#[contract]
pub struct MockManufacturerOracle;

#[contractimpl]
impl MockManufacturerOracle {
    pub fn set_authorized(env: Env, manufacturer: Address, authorized: bool) {
        env.storage().instance().set(&manufacturer, &authorized);
    }

    pub fn is_authorized_manufacturer(env: Env, manufacturer: Address) -> bool {
        env.storage().instance().get(&manufacturer).unwrap_or(false)
    }
}

pub struct TestSetup {
    pub env: Env,
    pub client: DrugBatchRegistryClient<'static>,
    pub oracle: MockManufacturerOracleClient<'static>,
    pub token: Address,
    pub manufacturer: Address,
    pub authority: Address,
}

impl TestSetup {
    /// Initialized registry with one funded, authorized manufacturer.
    /// The authority is generated but not bound.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(max_batches: u32) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_sequence_number(0);

        let token_admin = Address::generate(&env);
        let token = env
            .register_stellar_asset_contract_v2(token_admin)
            .address();

        let oracle_id = env.register(MockManufacturerOracle, ());
        let oracle = MockManufacturerOracleClient::new(&env, &oracle_id);

        let contract_id = env.register(DrugBatchRegistry, ());
        let client = DrugBatchRegistryClient::new(&env, &contract_id);
        client.initialize(&token, &oracle_id, &max_batches);

        let authority = Address::generate(&env);
        let manufacturer = authorized_manufacturer(&env, &oracle, &token, STARTING_BALANCE);

        Self {
            env,
            client,
            oracle,
            token,
            manufacturer,
            authority,
        }
    }

    /// Same as `new`, with the authority already bound.
    pub fn with_authority() -> Self {
        let setup = Self::new();
        setup.client.bind_authority(&setup.authority);
        setup
    }

    /// Generates an authorized manufacturer holding `funds` fee tokens.
    pub fn new_manufacturer(&self, funds: i128) -> Address {
        authorized_manufacturer(&self.env, &self.oracle, &self.token, funds)
    }

    pub fn balance(&self, account: &Address) -> i128 {
        token::Client::new(&self.env, &self.token).balance(account)
    }

    pub fn set_clock(&self, sequence: u32) {
        self.env.ledger().set_sequence_number(sequence);
    }

    pub fn params(&self, batch_id: &str) -> RegistrationParams {
        batch_params(&self.env, batch_id)
    }

    pub fn register(&self, batch_id: &str) -> u32 {
        self.client.register(&self.manufacturer, &self.params(batch_id))
    }
}

fn authorized_manufacturer(
    env: &Env,
    oracle: &MockManufacturerOracleClient,
    token: &Address,
    funds: i128,
) -> Address {
    let manufacturer = Address::generate(env);
    oracle.set_authorized(&manufacturer, &true);
    if funds > 0 {
        token::StellarAssetClient::new(env, token).mint(&manufacturer, &funds);
    }
    manufacturer
}

/// The reference batch: 1000 units produced at ledger 100, expiring at 200.
pub fn batch_params(env: &Env, batch_id: &str) -> RegistrationParams {
    RegistrationParams {
        batch_id: String::from_str(env, batch_id),
        quantity: 1000,
        production_date: 100,
        expiration_date: 200,
        composition_hash: Bytes::from_array(env, &[b'a'; 32]),
        metadata: String::from_str(env, "Paracetamol 500mg"),
        status: String::from_str(env, "active"),
        origin_location: String::from_str(env, "FactoryA"),
        storage_temperature: 25,
    }
}

pub fn status(env: &Env, value: &str) -> String {
    String::from_str(env, value)
}

/// `count` copies of `ch`, for exercising limits with multi-byte text.
pub fn repeat_char(env: &Env, ch: char, count: usize) -> String {
    let mut buf = [0u8; 1100];
    let mut encoded = [0u8; 4];
    let width = ch.encode_utf8(&mut encoded).len();
    for i in 0..count {
        buf[i * width..(i + 1) * width].copy_from_slice(&encoded[..width]);
    }
    String::from_bytes(env, &buf[..count * width])
}
