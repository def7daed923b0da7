//! Generic containers: a binary min-heap and associative maps.
//!
//! - [`ds::MinHeap`]: priority queue on an implicit complete binary tree.
//! - [`naive::ScanMap`]: insertion-ordered map with linear lookup.
//! - [`ds::ChainedHashMap`]: fixed number of `ScanMap` buckets selected by
//!   a randomized multiplicative hash.
//!
//! Both maps implement [`ops::AssocMap`].

use inner::doc_inline_reexport;

doc_inline_reexport! {
    mod ds, naive, ops,
}
