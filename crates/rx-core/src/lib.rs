//! Core library for the Augmented Rx compounding guide.
//!
//! This crate holds everything below the display layer:
//!
//! - [`models`]: the [`Process`] being walked through, its steps, and the
//!   [`ScannedItem`] records a scan produces
//! - [`session`]: the [`SessionController`] state machine
//!   (Idle → InProgress → Finished)
//! - [`templates`]: built-in and file-loaded procedure templates
//! - [`db`] and [`inventory`]: SQLite storage for scanned items and the
//!   async facade over it
//! - [`display`]: markdown formatting
//!
//! # Quick Start
//!
//! ```rust
//! use rx_core::{SessionController, SessionPhase, TemplateCatalog};
//!
//! let catalog = TemplateCatalog::builtin();
//! let mut session = SessionController::new(catalog.resolve("NS-0.9"));
//!
//! assert_eq!(session.start().status_text, "Step 1");
//! while session.current_phase() == SessionPhase::InProgress {
//!     let transition = session.advance();
//!     println!("{transition}");
//! }
//! assert!(session.process().is_complete());
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod inventory;
pub mod models;
pub mod params;
pub mod session;
pub mod templates;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, DeleteResult, Items, OperationStatus, Templates};
pub use error::{Result, RxError};
pub use inventory::{Inventory, InventoryBuilder};
pub use models::{Process, ProcessStep, ScannedItem, SessionAction, SessionPhase};
pub use params::{Id, ScanItem};
pub use session::{SessionController, Transition, FALLBACK_STATUS, FINISHED_STATUS};
pub use templates::TemplateCatalog;
