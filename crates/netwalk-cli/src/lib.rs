//! Text front-end helpers for the `netwalk` binary.

pub mod render;
