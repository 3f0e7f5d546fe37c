//! Document tracking and the analyses answered over it.
//!
//! - `store.rs`: open-document text store
//! - `scan.rs`: line-by-line phrase scan producing diagnostics
//! - `hover.rs`, `definition.rs`, `code_action.rs`, `completion.rs`: pure
//!   functions behind the position-based requests

pub mod code_action;
pub mod completion;
pub mod definition;
pub mod hover;
pub mod scan;
pub mod store;

pub use scan::{FlagRule, Ruleset};
pub use store::{DocumentError, DocumentStore};
