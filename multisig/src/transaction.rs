//! The packed transaction message signers vote on.
//!
//! Layout (big-endian, no padding):
//!
//! | Offset | Size | Field              |
//! |-------:|-----:|--------------------|
//! | 0      | 32   | chain id           |
//! | 32     | 32   | voting deadline    |
//! | 64     | 32   | nonce              |
//! | 96     | 32   | current block time |
//! | 128    | 20   | target             |
//! | 148    | 32   | value              |
//! | 180    | 20   | wallet address     |
//! | 200    | rest | call data          |

use crate::error::MultisigError;
use alloy_primitives::{Address, U256};
use orochi_types::{word, Timestamp};

/// Size of the fixed head preceding the call data.
pub const PACKED_HEAD_LEN: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedTransaction {
    pub chain_id: U256,
    pub voting_deadline: Timestamp,
    pub nonce: U256,
    pub current_block_time: Timestamp,
    pub target: Address,
    pub value: U256,
    pub wallet_address: Address,
    pub data: Vec<u8>,
}

impl PackedTransaction {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(PACKED_HEAD_LEN + self.data.len());
        out.extend_from_slice(&word(self.chain_id));
        out.extend_from_slice(&word(U256::from(self.voting_deadline.as_secs())));
        out.extend_from_slice(&word(self.nonce));
        out.extend_from_slice(&word(U256::from(self.current_block_time.as_secs())));
        out.extend_from_slice(self.target.as_slice());
        out.extend_from_slice(&word(self.value));
        out.extend_from_slice(self.wallet_address.as_slice());
        out.extend_from_slice(&self.data);
        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, MultisigError> {
        if bytes.len() < PACKED_HEAD_LEN {
            return Err(MultisigError::MalformedTransaction(format!(
                "{} bytes is shorter than the {PACKED_HEAD_LEN}-byte head",
                bytes.len()
            )));
        }
        let word_at = |offset: usize| U256::from_be_slice(&bytes[offset..offset + 32]);
        let address_at = |offset: usize| Address::from_slice(&bytes[offset..offset + 20]);

        Ok(Self {
            chain_id: word_at(0),
            voting_deadline: timestamp_word(word_at(32), "voting deadline")?,
            nonce: word_at(64),
            current_block_time: timestamp_word(word_at(96), "block time")?,
            target: address_at(128),
            value: word_at(148),
            wallet_address: address_at(180),
            data: bytes[PACKED_HEAD_LEN..].to_vec(),
        })
    }

    pub fn is_self_call(&self) -> bool {
        self.target == self.wallet_address
    }
}

fn timestamp_word(value: U256, field: &str) -> Result<Timestamp, MultisigError> {
    u64::try_from(value)
        .map(Timestamp::new)
        .map_err(|_| MultisigError::MalformedTransaction(format!("{field} {value} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PackedTransaction {
        PackedTransaction {
            chain_id: U256::from(911u64),
            voting_deadline: Timestamp::new(1_700_000_900),
            nonce: U256::from(3u8),
            current_block_time: Timestamp::new(1_700_000_000),
            target: Address::repeat_byte(0xaa),
            value: U256::from(10u64).pow(U256::from(18u8)),
            wallet_address: Address::repeat_byte(0xbb),
            data: vec![0xde, 0xad, 0xbe, 0xef],
        }
    }

    #[test]
    fn field_offsets() {
        let bytes = sample().encode();
        assert_eq!(bytes.len(), PACKED_HEAD_LEN + 4);
        assert_eq!(U256::from_be_slice(&bytes[0..32]), U256::from(911u64));
        assert_eq!(U256::from_be_slice(&bytes[64..96]), U256::from(3u8));
        assert_eq!(&bytes[128..148], &[0xaa; 20]);
        assert_eq!(&bytes[180..200], &[0xbb; 20]);
        assert_eq!(&bytes[200..], &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decodes_what_it_encodes() {
        let tx = sample();
        assert_eq!(PackedTransaction::decode(&tx.encode()).unwrap(), tx);
    }

    #[test]
    fn empty_call_data_allowed() {
        let tx = PackedTransaction {
            data: Vec::new(),
            ..sample()
        };
        let bytes = tx.encode();
        assert_eq!(bytes.len(), PACKED_HEAD_LEN);
        assert!(PackedTransaction::decode(&bytes).unwrap().data.is_empty());
    }

    #[test]
    fn short_message_rejected() {
        let bytes = sample().encode();
        assert!(matches!(
            PackedTransaction::decode(&bytes[..199]),
            Err(MultisigError::MalformedTransaction(_))
        ));
    }

    #[test]
    fn oversized_deadline_rejected() {
        let mut bytes = sample().encode();
        bytes[32] = 1;
        assert!(matches!(
            PackedTransaction::decode(&bytes),
            Err(MultisigError::MalformedTransaction(_))
        ));
    }
}
