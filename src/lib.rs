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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics-math allowances: comparisons against exact sentinel values and
// lossy index/size casts are intentional throughout
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]

//! Geometry-ingestion and interactive-transform core for a small real-time
//! 3D viewer.
//!
//! The crate parses Wavefront OBJ geometry into flat vertex/index buffers
//! normalized into the canonical `[-1, 1]³` cube, and translates per-frame
//! pointer deltas into rigid/scaling transforms applied either to an
//! arcball camera or to a selected node in a transform hierarchy.
//!
//! # Key entry points
//!
//! - [`mesh::parse_obj`] / [`mesh::load_obj`] - OBJ import
//! - [`camera::CameraController`] - arcball orbit/pan/zoom
//! - [`editor::NodeEditor`] - camera-aligned node manipulation
//! - [`frame::FrameController`] - per-tick dispatch between the two
//! - [`options::ViewerOptions`] - runtime configuration
//!
//! # Architecture
//!
//! The rendering backend, scene-graph container, and raw input polling are
//! external collaborators consumed through the [`render::UniformStore`],
//! [`scene::SceneGraph`], and [`input::InputSource`] traits. Everything runs
//! single-threaded inside one update-then-render tick driven by the
//! embedder; elapsed time is passed in explicitly, never measured here.

pub mod camera;
pub mod editor;
pub mod error;
pub mod frame;
pub mod input;
pub mod mesh;
pub mod options;
pub mod render;
pub mod scene;
pub mod transform;

pub use error::ArcviewError;
