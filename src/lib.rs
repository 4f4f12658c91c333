//! Tactical Overlay - force stacks on a terrain grid and the metrics a map
//! renderer draws for them

pub mod core;
pub mod tactical;
