//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (services, ports)
//! - Does NOT contain resolution rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AffectedProjectsUseCase` - detect changes, filter, resolve
//! - `ChangeDetector` - pick the changed-file source for a request

pub mod affected;
pub mod change_detector;

pub use affected::{AffectedOptions, AffectedProjectsUseCase, AffectedReport};
pub use change_detector::{ChangeDetector, ChangeOrigin, ChangeRequest, DetectedChanges};
