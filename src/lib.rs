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

//! Asset loading and placement pipeline for a hosted protein viewer.
//!
//! A structure is requested by identity through a query string. Its ball
//! (per-atom) and ribbon (backbone) models are loaded concurrently, parented
//! under one composite node and either placed with a hand-tuned transform or
//! fitted into a unit sphere. Render surface setup and host frame
//! negotiation run alongside, and the composite enters the live scene only
//! once everything has settled.
//!
//! # Key entry points
//!
//! - [`orchestrator::CompositionOrchestrator`] - runs the whole pipeline
//! - [`config::ViewerConfiguration`] - query-string flags
//! - [`placement::resolve_placement`] - composite construction and fitting
//! - [`placement::estimate_radius`] - bounding radius over a node hierarchy
//! - [`scene::Scene`] - the live scene read by the
//!   [`render_loop::RenderLoop`]
//! - [`options::Options`] - persistent configuration (asset locations,
//!   preview camera, UI styling)

pub mod camera;
pub mod config;
pub mod error;
pub mod host;
pub mod identity;
pub mod loader;
pub mod options;
pub mod orchestrator;
pub mod placement;
pub mod render_loop;
pub mod scene;
pub mod surface;
pub mod ui;

#[cfg(test)]
mod testing;
