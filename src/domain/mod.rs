//! Domain Layer
//!
//! The core of tfaffected: directory classification, reference discovery and
//! the affected-project resolver.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (DirPath, GitRef)
//! - `services/` - Classifier, ReferenceExtractor, ProjectResolver, ResolutionTrace
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - The tree is only reached through the `FileStore` port
//! 2. **Fresh state per call** - Nothing survives a resolution call
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
