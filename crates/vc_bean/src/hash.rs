//! Hash containers keyed by [`TypeId`] and property names.
//!
//! Based on `hashbrown` with a `foldhash` hasher under a fixed seed,
//! so that lookups are deterministic across runs.

use core::any::TypeId;
use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x95EE04C4F326B271);

/// Fixed Hash State based upon a random but fixed seed.
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

/// A [`hashbrown::HashMap`] using [`FixedHashState`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;

/// A map with [`TypeId`] as the fixed key type.
pub type TypeIdMap<V> = HashMap<TypeId, V>;

/// Creates an empty [`HashMap`], usable in `const` and `static` contexts.
#[inline]
pub const fn new_map<K, V>() -> HashMap<K, V> {
    hashbrown::HashMap::with_hasher(FixedHashState)
}

/// Creates an empty [`HashMap`] with the specified capacity.
#[inline]
pub fn map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V> {
    hashbrown::HashMap::with_capacity_and_hasher(capacity, FixedHashState)
}
