//! Hash collections used across the workspace.
//!
//! Keys are short strings (feature names, ids, paths), where FxHash beats SipHash.
//! Never rely on their iteration order for output; ordered views are kept
//! alongside in a `Vec`.

pub use rustc_hash::{FxHashMap, FxHashSet};
