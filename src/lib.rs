//! Goinstall - one-shot installer for the latest Go toolchain on Linux.
//!
//! Goinstall downloads the latest Go release archive, unpacks it under
//! `/usr/local`, writes a profile fragment so login shells pick up
//! `/usr/local/go/bin`, and (after interactive confirmation) appends that
//! directory to the sudoers `secure_path` so `sudo go ...` works too.
//!
//! # Modules
//!
//! - [`config`] - Fixed paths and endpoints, injectable for tests
//! - [`error`] - Error types and result alias
//! - [`extract`] - Archive extraction
//! - [`fetch`] - Version resolution and archive download
//! - [`installer`] - Step orchestration
//! - [`preflight`] - OS, privilege, and existing-install checks
//! - [`profile`] - Login-shell PATH fragment
//! - [`secure_path`] - Sudoers secure_path editing
//! - [`sys`] - Platform helpers (effective uid, PATH lookup)
//! - [`ui`] - Terminal output and the confirmation prompt
//!
//! # Example
//!
//! ```
//! use goinstall::secure_path::{plan_update, Plan};
//!
//! // Compute the sudoers rewrite without touching any file
//! let plan = plan_update("Defaults secure_path=\"/usr/bin:/bin\"\n", "/usr/local/go/bin");
//! match plan {
//!     Plan::Update { after, .. } => {
//!         assert_eq!(after, "Defaults secure_path=\"/usr/bin:/bin:/usr/local/go/bin\"");
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod installer;
pub mod preflight;
pub mod profile;
pub mod secure_path;
pub mod sys;
pub mod ui;

pub use error::{InstallError, Result};
