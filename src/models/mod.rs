//! Layout domain models.
//!
//! Provides the data types consumed and produced by the layout pass:
//! the input document ([`ChartData`] holding [`Task`]s and [`Link`]s)
//! and the output ([`Layout`] holding placed tasks, track bands, link
//! lines, and markers).
//!
//! Input types deserialize from the camelCase JSON documents supplied by
//! the data-loading collaborator; output types serialize so a rendering
//! collaborator in another process can consume them.

mod chart;
mod layout;
mod link;
mod task;

pub use chart::ChartData;
pub use layout::{Band, Layout, LinkLine, Marker, MarkerKind, PlacedTask, Rect, TimeDomain, TrackBand};
pub use link::Link;
pub use task::{Task, PORT_TYPE_PREFIX};
