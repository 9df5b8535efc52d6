//! The multisig wallet state machine.
//!
//! A wallet is created uninitialised, initialised exactly once with a sorted
//! signer list, and from then on only changes through
//! [`MultisigWallet::execute_transaction`] (nonce, self-call commands) and
//! [`MultisigWallet::transfer_role`]. Every mutating operation validates
//! completely before touching state, so a rejected call leaves the wallet
//! exactly as it was.

use crate::command::WalletCommand;
use crate::config::MultisigConfig;
use crate::error::MultisigError;
use crate::permission::{Permission, RoleRecord};
use crate::transaction::PackedTransaction;
use alloy_primitives::{Address, U256};
use orochi_crypto::{eth_signed_message_hash, recover_signer};
use orochi_types::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// An external call approved by the signers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub target: Address,
    pub value: U256,
    pub data: Vec<u8>,
}

/// Performs approved external calls on behalf of a wallet.
pub trait CallExecutor {
    /// Run `call` from `wallet`, returning the call's output.
    fn execute(&self, wallet: Address, call: &Call) -> Result<Vec<u8>, String>;
}

/// What a successful execution did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionReceipt {
    /// The nonce the transaction consumed.
    pub nonce: U256,
    pub target: Address,
    pub value: U256,
    /// Active voters counted towards the threshold.
    pub votes: u64,
    /// Set for self-calls.
    pub command: Option<WalletCommand>,
    /// Output of an external call; empty for self-calls.
    pub output: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletMetadata {
    pub total_signer: u64,
    pub threshold: u64,
    pub secured_timeout: u64,
    pub nonce: U256,
}

#[derive(Clone, Debug)]
pub struct MultisigWallet {
    address: Address,
    chain_id: U256,
    config: MultisigConfig,
    initialized: bool,
    roles: BTreeMap<Address, RoleRecord>,
    total_signer: u64,
    threshold: u64,
    secured_timeout: u64,
    nonce: U256,
}

impl MultisigWallet {
    pub fn new(address: Address, chain_id: U256, config: MultisigConfig) -> Self {
        let secured_timeout = config.secured_timeout_secs;
        Self {
            address,
            chain_id,
            config,
            initialized: false,
            roles: BTreeMap::new(),
            total_signer: 0,
            threshold: 0,
            secured_timeout,
            nonce: U256::ZERO,
        }
    }

    /// One-time setup. `users` must be strictly ascending.
    pub fn init(&mut self, users: &[Address], roles: &[u8], threshold: u64) -> Result<(), MultisigError> {
        if self.initialized {
            return Err(MultisigError::OnlyAbleToInitOnce);
        }
        if users.len() != roles.len() {
            return Err(MultisigError::UserRoleLengthMismatch {
                users: users.len(),
                roles: roles.len(),
            });
        }
        if let Some(i) = first_unordered(users) {
            return Err(MultisigError::UserDuplicatedOrWrongOrder(i));
        }

        let permissions = roles
            .iter()
            .map(|&bits| Permission::from_role_bits(bits))
            .collect::<Result<Vec<_>, _>>()?;
        if !permissions.iter().any(|p| p.contains(Permission::CREATE)) {
            return Err(MultisigError::ProofNoCreator);
        }
        let total_signer = permissions
            .iter()
            .filter(|p| p.contains(Permission::VOTE))
            .count() as u64;
        check_threshold(threshold, total_signer)?;

        self.roles = users
            .iter()
            .zip(permissions)
            .enumerate()
            .map(|(index, (&user, permission))| {
                let record = RoleRecord {
                    index: index as u32,
                    permission,
                    active_time: Timestamp::EPOCH,
                };
                (user, record)
            })
            .collect();
        self.total_signer = total_signer;
        self.threshold = threshold;
        self.initialized = true;

        info!(
            wallet = %self.address,
            users = users.len(),
            total_signer,
            threshold,
            "wallet initialised"
        );
        Ok(())
    }

    /// Pack a transaction at the current nonce for signers to vote on.
    pub fn encode_transaction(
        &self,
        timeout: u64,
        target: Address,
        value: U256,
        data: Vec<u8>,
        now: Timestamp,
    ) -> Result<Vec<u8>, MultisigError> {
        if timeout < self.config.min_voting_timeout_secs {
            return Err(MultisigError::InsecuredTimeout {
                got: timeout,
                min: self.config.min_voting_timeout_secs,
            });
        }
        let tx = PackedTransaction {
            chain_id: self.chain_id,
            voting_deadline: now.saturating_add(timeout),
            nonce: self.nonce,
            current_block_time: now,
            target,
            value,
            wallet_address: self.address,
            data,
        };
        Ok(tx.encode())
    }

    /// Validate a signed transaction and run it.
    ///
    /// `signatures` are the co-signers' EIP-191 signatures over `message`,
    /// ordered by strictly ascending signer address. The nonce advances only
    /// when every check and the call itself succeed.
    pub fn execute_transaction<S: AsRef<[u8]>>(
        &mut self,
        creator_signature: &[u8],
        signatures: &[S],
        message: &[u8],
        now: Timestamp,
        executor: &dyn CallExecutor,
    ) -> Result<ExecutionReceipt, MultisigError> {
        if !self.initialized {
            return Err(MultisigError::NotInitialized);
        }
        let tx = PackedTransaction::decode(message)?;

        if tx.chain_id != self.chain_id {
            debug!(wallet = %self.address, got = %tx.chain_id, "chain id mismatch");
            return Err(MultisigError::ProofChainIdMismatch {
                expected: self.chain_id,
                got: tx.chain_id,
            });
        }
        if tx.wallet_address != self.address {
            debug!(wallet = %self.address, got = %tx.wallet_address, "wallet address mismatch");
            return Err(MultisigError::ProofWalletMismatch {
                expected: self.address,
                got: tx.wallet_address,
            });
        }
        if tx.nonce != self.nonce {
            debug!(wallet = %self.address, expected = %self.nonce, got = %tx.nonce, "nonce mismatch");
            return Err(MultisigError::ProofInvalidNonce {
                expected: self.nonce,
                got: tx.nonce,
            });
        }
        if now > tx.voting_deadline {
            debug!(wallet = %self.address, deadline = %tx.voting_deadline, %now, "voting window closed");
            return Err(MultisigError::ProofExpired {
                deadline: tx.voting_deadline,
                now,
            });
        }

        let digest = eth_signed_message_hash(message);
        let creator = recover_signer(&digest, creator_signature)?;
        if !self.is_active_permission(&creator, Permission::CREATE, now) {
            debug!(wallet = %self.address, %creator, "creator lacks active create permission");
            return Err(MultisigError::InvalidPermission(creator));
        }

        let votes = self.count_votes(&digest, signatures, now)?;
        if votes < self.threshold {
            debug!(wallet = %self.address, votes, threshold = self.threshold, "threshold not passed");
            return Err(MultisigError::ThresholdNotPassed {
                have: votes,
                need: self.threshold,
            });
        }

        let (command, output) = if tx.is_self_call() {
            let command = WalletCommand::decode(&tx.data)?;
            self.apply_command(command)?;
            (Some(command), Vec::new())
        } else {
            let call = Call {
                target: tx.target,
                value: tx.value,
                data: tx.data,
            };
            let output = executor
                .execute(self.address, &call)
                .map_err(MultisigError::ExecutionFailed)?;
            (None, output)
        };

        let consumed = self.nonce;
        self.nonce += U256::from(1u8);
        info!(
            wallet = %self.address,
            nonce = %consumed,
            target = %tx.target,
            votes,
            "transaction executed"
        );

        Ok(ExecutionReceipt {
            nonce: consumed,
            target: tx.target,
            value: tx.value,
            votes,
            command,
            output,
        })
    }

    /// Hand the caller's slot to `new_holder`.
    ///
    /// The caller loses every permission at once; the receiver's permissions
    /// activate after the secured timeout.
    pub fn transfer_role(
        &mut self,
        caller: Address,
        new_holder: Address,
        now: Timestamp,
    ) -> Result<(), MultisigError> {
        if !self.initialized {
            return Err(MultisigError::NotInitialized);
        }
        if !self.roles.contains_key(&caller) {
            return Err(MultisigError::OnlyUserAllowed);
        }
        if new_holder.is_zero() || self.roles.contains_key(&new_holder) {
            return Err(MultisigError::InvalidReceiver(new_holder));
        }

        let Some(record) = self.roles.remove(&caller) else {
            return Err(MultisigError::OnlyUserAllowed);
        };
        let active_time = now.saturating_add(self.secured_timeout);
        self.roles.insert(
            new_holder,
            RoleRecord {
                active_time,
                ..record
            },
        );

        info!(
            wallet = %self.address,
            from = %caller,
            to = %new_holder,
            %active_time,
            "role transferred"
        );
        Ok(())
    }

    /// Signer count, threshold, secured timeout and nonce.
    pub fn metadata(&self) -> WalletMetadata {
        WalletMetadata {
            total_signer: self.total_signer,
            threshold: self.threshold,
            secured_timeout: self.secured_timeout,
            nonce: self.nonce,
        }
    }

    /// Every slot holder in ascending address order.
    pub fn users(&self) -> Vec<(Address, RoleRecord)> {
        self.roles.iter().map(|(a, r)| (*a, *r)).collect()
    }

    /// The slot held by `user`, pending or active.
    pub fn role_of(&self, user: &Address) -> Option<&RoleRecord> {
        self.roles.get(user)
    }

    /// Whether `user` holds a slot at all.
    pub fn is_user(&self, user: &Address) -> bool {
        self.roles.contains_key(user)
    }

    /// Whether `user` holds a slot whose activation time has passed.
    pub fn is_active_user(&self, user: &Address, now: Timestamp) -> bool {
        self.roles.get(user).is_some_and(|r| r.is_active(now))
    }

    /// Whether `user` holds an active slot carrying every bit of `permission`.
    pub fn is_active_permission(&self, user: &Address, permission: Permission, now: Timestamp) -> bool {
        self.roles
            .get(user)
            .is_some_and(|r| r.has_active(permission, now))
    }

    /// The nonce the next transaction must carry.
    pub fn nonce(&self) -> U256 {
        self.nonce
    }

    /// The wallet address bound into every transaction.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The chain id bound into every transaction.
    pub fn chain_id(&self) -> U256 {
        self.chain_id
    }

    /// Whether [`MultisigWallet::init`] has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Timeouts this wallet enforces.
    pub fn config(&self) -> &MultisigConfig {
        &self.config
    }

    /// Count active voters among `signatures`, which must recover to
    /// strictly ascending addresses.
    fn count_votes<S: AsRef<[u8]>>(
        &self,
        digest: &alloy_primitives::B256,
        signatures: &[S],
        now: Timestamp,
    ) -> Result<u64, MultisigError> {
        let mut previous: Option<Address> = None;
        let mut votes = 0u64;
        for (i, signature) in signatures.iter().enumerate() {
            let signer = recover_signer(digest, signature.as_ref())?;
            if previous.is_some_and(|p| signer <= p) {
                debug!(wallet = %self.address, index = i, %signer, "co-signers out of order");
                return Err(MultisigError::UserDuplicatedOrWrongOrder(i));
            }
            previous = Some(signer);

            if self.is_active_permission(&signer, Permission::VOTE, now) {
                votes += 1;
            } else {
                debug!(wallet = %self.address, %signer, "skipping signer without active vote");
            }
        }
        Ok(votes)
    }

    fn apply_command(&mut self, command: WalletCommand) -> Result<(), MultisigError> {
        match command {
            WalletCommand::UpdateThreshold(threshold) => {
                check_threshold(threshold, self.total_signer)?;
                self.threshold = threshold;
            }
            WalletCommand::UpdateSecuredTimeout(secs) => {
                if secs < self.config.min_voting_timeout_secs {
                    return Err(MultisigError::InsecuredTimeout {
                        got: secs,
                        min: self.config.min_voting_timeout_secs,
                    });
                }
                self.secured_timeout = secs;
            }
        }
        info!(wallet = %self.address, ?command, "wallet command applied");
        Ok(())
    }
}

fn check_threshold(threshold: u64, total_signer: u64) -> Result<(), MultisigError> {
    if threshold == 0 || threshold > total_signer {
        return Err(MultisigError::InvalidThreshold {
            threshold,
            total_signer,
        });
    }
    Ok(())
}

/// Index of the first element not strictly greater than its predecessor.
fn first_unordered(users: &[Address]) -> Option<usize> {
    users
        .windows(2)
        .position(|pair| pair[0] >= pair[1])
        .map(|i| i + 1)
}
