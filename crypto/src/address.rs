//! Ethereum address derivation from public keys.
//!
//! Address = last 20 bytes of `keccak256(x || y)` of the uncompressed point.
//! The ECVRF `u_witness` is derived the same way from an intermediate point.

use crate::hash::keccak256;
use alloy_primitives::Address;
use k256::ecdsa::VerifyingKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use orochi_types::Point;

/// Derive the address of a word-encoded point.
pub fn address_of_point(point: &Point) -> Address {
    let digest = keccak256(&point.to_bytes());
    Address::from_slice(&digest[12..])
}

/// Derive the address controlled by an ECDSA verifying key.
pub fn address_of_verifying_key(key: &VerifyingKey) -> Address {
    let encoded = key.as_affine().to_encoded_point(false);
    // Skip the 0x04 tag.
    let digest = keccak256(&encoded.as_bytes()[1..]);
    Address::from_slice(&digest[12..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve;
    use alloy_primitives::U256;

    #[test]
    fn secret_one_address_vector() {
        // Well-known address of the private key 0x...01.
        let g = curve::mul_generator(U256::from(1u8)).unwrap();
        assert_eq!(
            address_of_point(&g),
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
                .parse::<Address>()
                .unwrap()
        );
    }

    #[test]
    fn point_and_key_derivations_agree() {
        let kp = crate::keys::keypair_from_secret(&[7u8; 32]).unwrap();
        assert_eq!(
            address_of_verifying_key(kp.signing_key.verifying_key()),
            address_of_point(&kp.public)
        );
        assert_eq!(kp.address, address_of_point(&kp.public));
    }
}
