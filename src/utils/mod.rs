// src/utils/mod.rs

pub mod college;
