//! egui renderers. Each one only reads prepared views from [`AppState`](crate::state::AppState).

pub mod panels;
pub mod plot;
pub mod table;
