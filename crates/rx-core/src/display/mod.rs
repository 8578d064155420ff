//! Markdown formatting for models, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the newtype wrappers here add collection and result context. Everything
//! renders as markdown, which the CLI feeds to its terminal renderer.
//!
//! ```rust
//! use rx_core::{display::Templates, TemplateCatalog};
//!
//! let catalog = TemplateCatalog::builtin();
//! let output = Templates(&catalog).to_string();
//! assert!(output.contains("Saline Solution Dilution"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Items, Templates};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
