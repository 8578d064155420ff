//! Domain models for procedures, sessions and scanned items.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use rx_core::models::{Process, ProcessStep};
//!
//! let mut process = Process::new(
//!     "Saline Solution Dilution",
//!     vec![
//!         ProcessStep::new(1, "Step 1", "Prepare the materials."),
//!         ProcessStep::new(2, "Step 2", "Mix the solution.").with_animation("animateCap"),
//!     ],
//! );
//!
//! process.mark_complete(1);
//! assert_eq!(process.next_incomplete_step().map(|s| s.id), Some(2));
//! assert!(!process.is_complete());
//! ```

pub mod item;
pub mod phase;
pub mod process;
pub mod step;


pub use item::ScannedItem;
pub use phase::{SessionAction, SessionPhase};
pub use process::Process;
pub use step::ProcessStep;
