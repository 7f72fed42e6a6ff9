//! Faster (but not DoS-resistant) hashmaps for tokens and trie states
use farmhash;
use hash_hasher::HashBuildHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher, BuildHasherDefault};

/// Farmhash for string keys
///
/// Farmhash isn't a streaming hash, so each `write` rehashes with the running
/// value as the seed. String keys arrive as one large `write` plus a one-byte
/// terminator, and the big block still goes through farmhash in a single call.
pub struct FarmHasher(u64);

impl Default for FarmHasher {
    #[inline]
    fn default() -> FarmHasher { FarmHasher(0) }
}

impl Hasher for FarmHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0 = farmhash::hash64_with_seed(bytes, self.0);
    }
}

pub type Farm = BuildHasherDefault<FarmHasher>;

/// Map from token strings, hashed with farmhash
pub type TokenMap<Y> = HashMap<String, Y, Farm>;

pub fn new_token_map<Y>() -> TokenMap<Y> {
    Default::default()
}

/// Map from small integer keys, like trie state ids, where hashing
/// would be a waste of time
pub type StateMap<X, Y> = HashMap<X, Y, HashBuildHasher>;

pub fn new_state_map<X: Hash + Eq, Y>() -> StateMap<X, Y> {
    Default::default()
}
