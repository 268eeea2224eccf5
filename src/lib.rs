// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interaction and transform layer for real-time rendering demos.
//!
//! Each demo lets the user spin the displayed object with the mouse and
//! animates parts of the scene over time. This crate holds that host-side
//! state, independent of any graphics API: it consumes pointer events and
//! frame times and produces plain 4x4 matrices.
//!
//! # Key entry points
//!
//! - [`camera::Arcball`] - arcball/trackball orientation controller
//! - [`input::InputProcessor`] - feeds window events to the arcball
//! - [`animation`] - explicit per-object spin and oscillation state
//! - [`options::Options`] - TOML configuration for all of the above
//! - [`script::GestureScript`] - recorded gestures for replay and tests

pub mod animation;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod script;
pub mod util;

pub use error::DemoError;
