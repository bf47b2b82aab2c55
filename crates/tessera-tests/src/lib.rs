//! Integration tests for tessera crates.
//!
//! This crate contains end-to-end tests that exercise the crates together:
//! a scene walked through the matrix stack and the camera, generated meshes
//! transformed into clip space, and colors parsed into vertex attributes.
//! Property tests live in `tests/`.
