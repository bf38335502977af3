//! Feature detectors: script (identifier/member access) and style (pseudo selectors).

pub mod registry;
pub mod script;
pub mod style;
pub mod traits;

pub use registry::{create_default_registry, DetectorRegistry};
pub use script::ScriptDetector;
pub use style::StyleDetector;
pub use traits::{FeatureDetector, FeatureHits};
