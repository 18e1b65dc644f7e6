//! AD&D 2e Engine library.
//!
//! Command-line host for the sheet: recomputes actor documents and makes
//! rolls against their derived statistics.
//!
//! ## Structure
//!
//! - `use_cases/` - Sheet recomputation and rolls
//! - `infrastructure/` - Randomness and configuration loading
//! - `cli` - Command-line entry points
//! - `app` - Application composition

pub mod app;
pub mod cli;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
