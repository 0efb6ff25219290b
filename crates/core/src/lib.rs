//! Functional core for the Bloom Agriculture API.
//!
//! Domain types, request payloads, filtering and sorting, validation, admin
//! credential checks and the repository traits implemented by the storage
//! backends. Nothing in this crate performs I/O.

pub mod admin;
pub mod content;
pub mod serde;
pub mod storage;
