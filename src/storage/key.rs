//! Storage key derivation from a stopwatch name

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Calculate the FNV-1a 64-bit hash of a name
pub fn fnv1a_64(name: &str) -> u64 {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET_BASIS;
    for byte in name.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Derive the store key for a stopwatch name.
///
/// Always 11 URL-safe characters, identical across runs and platforms.
pub fn storage_key(name: &str) -> String {
    URL_SAFE_NO_PAD.encode(fnv1a_64(name).to_be_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv_reference_vectors() {
        assert_eq!(fnv1a_64(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a_64("a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn key_is_fixed_length_and_stable() {
        let key = storage_key("Stopwatch");
        assert_eq!(key.len(), 11);
        assert_eq!(key, storage_key("Stopwatch"));
        assert_eq!(storage_key("").len(), 11);
        assert_eq!(storage_key(&"x".repeat(4096)).len(), 11);
    }

    #[test]
    fn different_names_get_different_keys() {
        assert_ne!(storage_key("Stopwatch"), storage_key("stopwatch"));
        assert_ne!(storage_key("lap 1"), storage_key("lap 2"));
    }
}
