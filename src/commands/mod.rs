//! Command handlers invoked by the binary.

pub mod affected;
pub mod classify;

pub use affected::{cmd_affected, wants_json};
pub use classify::cmd_classify;
