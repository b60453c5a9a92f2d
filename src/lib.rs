//! Column-oriented CSV explorer: parse delimited text into columns, show it
//! as a table, and plot any two columns against each other.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod plot;
pub mod state;
pub mod ui;
