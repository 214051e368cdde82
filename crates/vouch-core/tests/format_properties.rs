//! Property-based tests for the container codec
//!
//! These verify the codec's central contract: any container round-trips
//! byte-for-byte, and the encoding depends only on content.

use std::collections::BTreeMap;

use proptest::prelude::*;

use vouch_core::Container;

/// Generate arbitrary valid entry keys: short, non-empty ASCII
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]{1,8}").unwrap()
}

/// Generate arbitrary entry values, including empty blobs
fn arb_value() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// Generate arbitrary non-empty entry maps
fn arb_entries() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    prop::collection::btree_map(arb_key(), arb_value(), 1..8)
}

fn build(entries: &BTreeMap<String, Vec<u8>>) -> Container {
    let mut container = Container::new();
    for (key, value) in entries {
        container.insert(key, value.clone()).unwrap();
    }
    container
}

proptest! {
    /// Property: decode(encode(m)) reconstructs every entry byte-for-byte
    #[test]
    fn roundtrip_is_exact(entries in arb_entries()) {
        let container = build(&entries);
        let decoded = Container::decode(&container.encode()).unwrap();

        prop_assert_eq!(decoded.len(), entries.len());
        for (key, value) in &entries {
            prop_assert_eq!(decoded.require(key).unwrap(), value.as_slice());
        }
    }

    /// Property: encoding is a pure function of content
    #[test]
    fn encoding_is_deterministic(entries in arb_entries()) {
        let first = build(&entries).encode();
        let second = build(&entries).encode();
        prop_assert_eq!(first, second);
    }

    /// Property: nesting a container and unwrapping it restores the original
    #[test]
    fn nested_roundtrip(entries in arb_entries()) {
        let inner = build(&entries);
        let mut outer = Container::new();
        outer.insert_container("i", &inner).unwrap();

        let decoded = Container::decode(&outer.encode()).unwrap();
        prop_assert_eq!(decoded.require_container("i").unwrap(), inner);
    }

    /// Property: no strict prefix of a single-entry encoding decodes
    /// (multi-entry containers can be cut at entry boundaries, which record
    /// decoding catches through missing required entries)
    #[test]
    fn truncation_inside_an_entry_always_fails(key in arb_key(), value in arb_value()) {
        let mut container = Container::new();
        container.insert(&key, value).unwrap();

        let encoded = container.encode();
        for len in 0..encoded.len() {
            prop_assert!(Container::decode(&encoded[..len]).is_err());
        }
    }
}
