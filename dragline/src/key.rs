#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type NodeMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type NodeMap<K, V> = BTreeMap<K, V>;

/// Bound for host node ids (children and drag handles).
///
/// With `std` this is `Hash + Eq`; without it, `Ord`.
#[cfg(feature = "std")]
pub trait NodeKey: Copy + core::fmt::Debug + core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: Copy + core::fmt::Debug + core::hash::Hash + Eq> NodeKey for K {}

#[cfg(not(feature = "std"))]
pub trait NodeKey: Copy + core::fmt::Debug + Ord {}
#[cfg(not(feature = "std"))]
impl<K: Copy + core::fmt::Debug + Ord> NodeKey for K {}
