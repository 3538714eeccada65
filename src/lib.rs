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
// Complexity limits (thresholds in clippy.toml)
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

//! Timeline-driven exploded-view engine for architectural window units.
//!
//! Fenestra animates a multi-part box-window assembly between a
//! disassembled (exploded) arrangement and its fully assembled form. A
//! single progress scalar drives every part through a choreographed,
//! overlapping sequence: foundations settle first, cladding and glazing
//! last. The crate computes layout and motion only; it never draws
//! pixels or reads input devices.
//!
//! # Key entry points
//!
//! - [`engine::ExplodedViewEngine`] - the engine facade a host drives
//!   with frame notifications and user actions
//! - [`assembly::window_unit()`] - the parametric part layout generator
//! - [`animation::TimelineController`] - the global progress timeline
//! - [`options::Options`] - runtime configuration (structure, playback)
//!
//! # Architecture
//!
//! The layout generator runs once per configuration and produces an
//! immutable [`assembly::Assembly`] of part descriptors, each carrying
//! its exploded and assembled positions plus the window of global
//! progress during which it moves. Per frame, the timeline integrates
//! elapsed wall-clock time into the progress scalar and the interpolator
//! maps that one snapshot to every part's position through a windowed,
//! eased lerp. Adjacent parts are flush by construction at progress 1.

pub mod animation;
pub mod assembly;
pub mod engine;
pub mod error;
pub mod options;
pub mod util;

pub use engine::ExplodedViewEngine;
pub use error::FenestraError;
