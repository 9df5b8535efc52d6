//! Deterministic wallet addresses and the wallet registry.
//!
//! Wallets are EIP-1167 minimal proxies of one implementation, deployed with
//! CREATE2 under a salt that packs the user's 96-bit salt above the creator's
//! address. The predicted address therefore matches the on-chain factory's.

use crate::config::MultisigConfig;
use crate::error::MultisigError;
use crate::wallet::{CallExecutor, ExecutionReceipt, MultisigWallet};
use alloy_primitives::{Address, U256};
use orochi_crypto::keccak256;
use orochi_types::{word, Timestamp};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

const PROXY_PREFIX: [u8; 20] = [
    0x3d, 0x60, 0x2d, 0x80, 0x60, 0x0a, 0x3d, 0x39, 0x81, 0xf3, 0x36, 0x3d, 0x3d, 0x37, 0x3d,
    0x3d, 0x3d, 0x36, 0x3d, 0x73,
];
const PROXY_SUFFIX: [u8; 15] = [
    0x5a, 0xf4, 0x3d, 0x82, 0x80, 0x3e, 0x90, 0x3d, 0x91, 0x60, 0x2b, 0x57, 0xfd, 0x5b, 0xf3,
];

/// Largest salt that fits in the high 96 bits.
pub const MAX_SALT: u128 = (1u128 << 96) - 1;

/// `salt << 160 | creator`.
pub fn pack_salt(salt: u128, creator: Address) -> Result<U256, MultisigError> {
    if salt > MAX_SALT {
        return Err(MultisigError::InvalidSalt);
    }
    Ok((U256::from(salt) << 160) | U256::from_be_slice(creator.as_slice()))
}

/// EIP-1167 creation code delegating to `implementation`.
pub fn proxy_init_code(implementation: Address) -> Vec<u8> {
    let mut code = Vec::with_capacity(PROXY_PREFIX.len() + 20 + PROXY_SUFFIX.len());
    code.extend_from_slice(&PROXY_PREFIX);
    code.extend_from_slice(implementation.as_slice());
    code.extend_from_slice(&PROXY_SUFFIX);
    code
}

/// CREATE2 address of the proxy `factory` deploys for `(salt, creator)`.
pub fn predict_wallet_address(
    factory: Address,
    implementation: Address,
    salt: u128,
    creator: Address,
) -> Result<Address, MultisigError> {
    let packed = pack_salt(salt, creator)?;
    let init_code_hash = keccak256(&proxy_init_code(implementation));
    Ok(factory.create2(word(packed), init_code_hash.0))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Creates wallets and serialises every state change per wallet.
///
/// The registry lock only guards the address map; each wallet has its own
/// lock, held across the whole nonce check and increment.
pub struct WalletFactory {
    factory_address: Address,
    implementation: Address,
    chain_id: U256,
    config: MultisigConfig,
    wallets: Mutex<HashMap<Address, Arc<Mutex<MultisigWallet>>>>,
}

impl WalletFactory {
    pub fn new(
        factory_address: Address,
        implementation: Address,
        chain_id: U256,
        config: MultisigConfig,
    ) -> Self {
        Self {
            factory_address,
            implementation,
            chain_id,
            config,
            wallets: Mutex::new(HashMap::new()),
        }
    }

    pub fn predict_wallet_address(&self, salt: u128, creator: Address) -> Result<Address, MultisigError> {
        predict_wallet_address(self.factory_address, self.implementation, salt, creator)
    }

    /// Initialise and register a wallet at its predicted address.
    pub fn create_wallet(
        &self,
        creator: Address,
        salt: u128,
        users: &[Address],
        roles: &[u8],
        threshold: u64,
    ) -> Result<Address, MultisigError> {
        let address = self.predict_wallet_address(salt, creator)?;
        let mut wallets = lock(&self.wallets);
        if wallets.contains_key(&address) {
            return Err(MultisigError::WalletAlreadyExists(address));
        }

        let mut wallet = MultisigWallet::new(address, self.chain_id, self.config.clone());
        wallet.init(users, roles, threshold)?;
        wallets.insert(address, Arc::new(Mutex::new(wallet)));

        info!(%address, %creator, salt, "wallet created");
        Ok(address)
    }

    pub fn is_wallet_exist(&self, address: &Address) -> bool {
        lock(&self.wallets).contains_key(address)
    }

    pub fn wallet_count(&self) -> usize {
        lock(&self.wallets).len()
    }

    /// Shared handle to a registered wallet.
    pub fn wallet(&self, address: &Address) -> Result<Arc<Mutex<MultisigWallet>>, MultisigError> {
        lock(&self.wallets)
            .get(address)
            .cloned()
            .ok_or(MultisigError::WalletNotFound(*address))
    }

    pub fn execute_transaction<S: AsRef<[u8]>>(
        &self,
        wallet: &Address,
        creator_signature: &[u8],
        signatures: &[S],
        message: &[u8],
        now: Timestamp,
        executor: &dyn CallExecutor,
    ) -> Result<ExecutionReceipt, MultisigError> {
        let handle = self.wallet(wallet)?;
        let mut wallet = lock(&handle);
        wallet.execute_transaction(creator_signature, signatures, message, now, executor)
    }

    pub fn transfer_role(
        &self,
        wallet: &Address,
        caller: Address,
        new_holder: Address,
        now: Timestamp,
    ) -> Result<(), MultisigError> {
        let handle = self.wallet(wallet)?;
        let mut wallet = lock(&handle);
        wallet.transfer_role(caller, new_holder, now)
    }

    pub fn factory_address(&self) -> Address {
        self.factory_address
    }

    pub fn implementation(&self) -> Address {
        self.implementation
    }

    pub fn chain_id(&self) -> U256 {
        self.chain_id
    }
}
