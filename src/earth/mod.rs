//! Physical models of the air the aircraft flies through.

pub mod atmosphere;
pub mod wind;

pub use atmosphere::atmospheric_model;
pub use wind::{compute_gs, compute_wca};
