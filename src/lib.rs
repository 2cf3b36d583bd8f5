//! Deterministic Gantt timeline layout.
//!
//! Turns a schedule document (equipment tracks, tasks with planned and
//! actual intervals, dependency links) into draw geometry: lane-packed
//! bars, track bands, link lines, and vertical markers. The crate is the
//! pure core of a Gantt widget — it knows nothing about SVG, the DOM, or
//! any rendering toolkit; a thin adapter maps [`models::Layout`] onto
//! whatever drawing layer the application uses.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ChartData`, `Task`, `Link` in;
//!   `Layout`, `PlacedTask`, `TrackBand`, `LinkLine`, `Marker` out
//! - **`layout`**: The layout pass — greedy interval lane packing,
//!   time-domain resolution, band subdivision, coordinate mapping
//! - **`config`**: Caller-tunable knobs (zoom, row height, window
//!   override, markers) and their validation
//! - **`validation`**: Optional loud integrity checks for input documents
//! - **`error`**: Configuration-boundary errors
//!
//! # Determinism
//!
//! One layout pass is a pure function of `(document, config, now)`: the
//! current instant is an injected parameter (it closes open-ended actual
//! intervals and anchors the empty-schedule fallback window), so results
//! are reproducible without wall-clock mocking. Every pass recomputes
//! from the full task list; there is no incremental state.

pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod validation;
