// src/models/mod.rs

pub mod evaluation;
pub mod quiz;
pub mod recommendation;
