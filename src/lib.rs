//! Sluice: a split-query data layer for Rust.
//!
//! Compiles logical query plans into single or split execution and freezes,
//! once per plan shape and per backend capability, whether result sets are
//! buffered or streamed. Backends implement [`Driver`], [`Executor`] and
//! [`Connection`] from `sluice-core`, re-exported here.

pub use sluice_core::*;
