//! Plot layer: turn two columns into scaled pixel geometry.
//!
//! `projector` owns the numeric side (filtering, sorting, extents, pixel
//! mapping); `draw` turns a projection into a flat list of primitives that
//! any renderer can replay.

pub mod draw;
pub mod projector;
