//! Property tests: round-trips, byte order symmetry, truncation, padding,
//! and agreement between backends.

use bigint_buffer::{ByteOrder, Codec};
use num_bigint::BigUint;
use proptest::prelude::*;

fn codecs() -> Vec<Codec> {
    let mut all = vec![Codec::portable()];
    if let Ok(codec) = Codec::accelerated() {
        all.push(codec);
    }
    all
}

fn any_order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::LittleEndian), Just(ByteOrder::BigEndian)]
}

fn any_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..80)
}

fn any_biguint() -> impl Strategy<Value = BigUint> {
    any_bytes().prop_map(|b| BigUint::from_bytes_be(&b))
}

/// Length of the minimal big-endian encoding; zero for zero.
fn minimal_len(v: &BigUint) -> usize {
    (v.bits() as usize).div_ceil(8)
}

proptest! {
    #[test]
    fn roundtrip_at_or_above_minimal_width(
        v in any_biguint(),
        extra in 0usize..16,
        order in any_order(),
    ) {
        let width = minimal_len(&v) + extra;
        for codec in codecs() {
            let buf = codec.encode(&v, width, order).unwrap();
            prop_assert_eq!(buf.len(), width);
            prop_assert_eq!(codec.decode(&buf, order), v.clone());
        }
    }

    #[test]
    fn byte_order_symmetry(bytes in any_bytes()) {
        let mut reversed = bytes.clone();
        reversed.reverse();
        for codec in codecs() {
            prop_assert_eq!(
                codec.decode(&bytes, ByteOrder::BigEndian),
                codec.decode(&reversed, ByteOrder::LittleEndian)
            );
        }
    }

    #[test]
    fn truncation_keeps_low_order_bytes(
        v in any_biguint(),
        width in 0usize..24,
        order in any_order(),
    ) {
        prop_assume!(width < minimal_len(&v));
        let expected = &v % (BigUint::from(1u8) << (8 * width));
        for codec in codecs() {
            let buf = codec.encode(&v, width, order).unwrap();
            prop_assert_eq!(buf.len(), width);
            prop_assert_eq!(codec.decode(&buf, order), expected.clone());
        }
    }

    #[test]
    fn padding_zero_fills_high_positions(
        v in any_biguint(),
        extra in 1usize..16,
    ) {
        let natural = minimal_len(&v);
        let width = natural + extra;
        for codec in codecs() {
            let be = codec.encode(&v, width, ByteOrder::BigEndian).unwrap();
            prop_assert!(be[..extra].iter().all(|&b| b == 0));

            let le = codec.encode(&v, width, ByteOrder::LittleEndian).unwrap();
            prop_assert!(le[natural..].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn backends_agree_on_decode(bytes in any_bytes(), order in any_order()) {
        let reference = Codec::portable().decode(&bytes, order);
        for codec in codecs() {
            prop_assert_eq!(codec.decode(&bytes, order), reference.clone());
        }
    }

    #[test]
    fn backends_agree_on_encode(
        v in any_biguint(),
        width in 0usize..96,
        order in any_order(),
    ) {
        let reference = Codec::portable().encode(&v, width, order).unwrap();
        for codec in codecs() {
            prop_assert_eq!(codec.encode(&v, width, order).unwrap(), reference.clone());
        }
    }

    #[test]
    fn encode_into_matches_encode(
        v in any::<u128>(),
        width in 0usize..40,
        order in any_order(),
    ) {
        for codec in codecs() {
            let mut buf = vec![0xA5u8; width];
            codec.encode_into(&v, &mut buf, order).unwrap();
            prop_assert_eq!(buf, codec.encode(&v, width, order).unwrap());
        }
    }
}
