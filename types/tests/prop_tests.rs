use proptest::prelude::*;

use orochi_types::{parse_word, word, Point, Timestamp, TypesError, U256};

proptest! {
    /// Both uncompressed encodings decode to the same coordinates.
    #[test]
    fn point_encodings_agree(
        x in prop::array::uniform32(0u8..),
        y in prop::array::uniform32(0u8..),
    ) {
        let p = Point::new(U256::from_be_bytes(x), U256::from_be_bytes(y));
        let tagged = Point::from_uncompressed(&p.to_uncompressed()).unwrap();
        let raw = Point::from_uncompressed(&p.to_bytes()).unwrap();
        prop_assert_eq!(tagged, p);
        prop_assert_eq!(raw, p);
    }

    /// Any tag other than 0x04 is rejected for 65-byte input.
    #[test]
    fn point_rejects_foreign_tag(tag in 0u8.., body in prop::array::uniform32(0u8..)) {
        prop_assume!(tag != Point::UNCOMPRESSED_TAG);
        let mut bytes = vec![tag];
        bytes.extend_from_slice(&body);
        bytes.extend_from_slice(&body);
        prop_assert_eq!(
            Point::from_uncompressed(&bytes).unwrap_err(),
            TypesError::InvalidPointPrefix(tag)
        );
    }

    /// Hex words parse back to the value they were printed from.
    #[test]
    fn word_hex_parses(bytes in prop::array::uniform32(0u8..)) {
        let value = U256::from_be_bytes(bytes);
        prop_assert_eq!(parse_word(&format!("{value:#x}")).unwrap(), value);
        prop_assert_eq!(word(value), bytes);
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// Timestamp elapsed_since saturates to 0 when now < self.
    #[test]
    fn timestamp_elapsed_since_saturates(
        base in 1u64..1_000_000,
        deficit in 1u64..1_000_000,
    ) {
        let later = Timestamp::new(base + deficit);
        let earlier = Timestamp::new(base);
        prop_assert_eq!(later.elapsed_since(earlier), 0);
        prop_assert_eq!(earlier.elapsed_since(later), deficit);
    }

    /// Timestamp has_expired agrees with manual arithmetic.
    #[test]
    fn timestamp_has_expired_correct(
        start in 0u64..500_000,
        duration in 1u64..500_000,
        offset in 0u64..1_000_000,
    ) {
        let t = Timestamp::new(start);
        let now = Timestamp::new(start.saturating_add(offset));
        prop_assert_eq!(t.has_expired(duration, now), offset >= duration);
        prop_assert_eq!(t.saturating_add(duration) <= now, offset >= duration);
    }
}
