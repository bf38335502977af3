//! Feature catalog: normalization, overrides, ignore list, and the merged lookup table.

pub mod builder;
pub mod bundled;
pub mod ignore;
pub mod merger;
pub mod normalizer;
pub mod overrides;
pub mod types;

pub use builder::CatalogBuilder;
pub use ignore::IgnoreSet;
pub use merger::LookupTable;
pub use normalizer::{normalize, normalize_value, RawCatalog};
pub use overrides::LocalOverrides;
pub use types::{case_fold, Baseline, Feature};
