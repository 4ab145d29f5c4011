//! API endpoint modules organized by resource.
//!
//! Each module adds typed methods for a group of related endpoints to
//! `DocbaseClient`.

pub mod posts;
pub mod tags;
