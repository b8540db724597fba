//! Core, I/O-free building blocks: lookup parameters and identifier
//! sanitization.
pub mod params;
pub mod sanitize;
