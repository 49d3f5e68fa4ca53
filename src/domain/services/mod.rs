//! Domain Services
//!
//! Classification, reference discovery and the resolution engine.
//! These services only touch the tree through the `FileStore` port.

pub mod classifier;
pub mod reference_extractor;
pub mod resolver;
pub mod trace;

pub use classifier::{classify, is_inside_module_tree, DirectoryRole};
pub use reference_extractor::{
    extract_module_references, ModuleReference, ReferenceExtractor, INFRA_FILE_GLOB,
    INFRA_FILE_PATTERN,
};
pub use resolver::{
    resolve_affected_projects, ProjectResolver, Resolution, ResolverConfig, PROVIDER_FILE,
};
pub use trace::{ResolutionStep, ResolutionTrace, StepAction, TraceSummary};
