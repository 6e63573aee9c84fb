//! timeline-grid: a horizontal timeline ruler widget.
//!
//! The crate maps a numeric time domain onto a pixel axis, lays out primary
//! and secondary ticks with value labels, and overlays hint boxes for markers
//! and a selection. Painting produces a backend-agnostic `RenderFrame` that a
//! `Renderer` (headless, Cairo/Pango, or GTK4 via the adapter) draws.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{GridStyle, TimelineGrid, TimelineGridConfig, TimelineWidget};
pub use error::{GridError, GridResult};
