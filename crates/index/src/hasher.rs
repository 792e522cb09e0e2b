//! Bucket hashing.
//!
//! Placement must be stable for a key across calls, so the index uses the
//! unseeded Fx hasher instead of `RandomState`.

pub use rustc_hash::FxBuildHasher;

/// Hasher builder used by [`crate::ChainedHashTable`] unless another is given.
pub type DefaultBuildHasher = FxBuildHasher;

#[cfg(test)]
mod tests {
    use super::*;
    use core::hash::BuildHasher;

    #[test]
    fn placement_hash_is_stable_across_builders() {
        let a = DefaultBuildHasher::default();
        let b = FxBuildHasher;
        assert_eq!(a.hash_one("Screwdriver"), a.hash_one("Screwdriver"));
        assert_eq!(a.hash_one("Screwdriver"), b.hash_one("Screwdriver"));
        assert_ne!(a.hash_one("Screwdriver"), a.hash_one("Hammer"));
    }

    #[test]
    fn string_and_str_keys_hash_alike() {
        let h = DefaultBuildHasher::default();
        assert_eq!(h.hash_one("Paint"), h.hash_one(&"Paint".to_string()));
    }
}
