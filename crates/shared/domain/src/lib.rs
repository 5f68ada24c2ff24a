//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O, networking, or validation logic—just data and simple helpers.
//! Validation of these shapes lives in `mona-kernel`, composition in `mona-landing`.

pub mod config;
pub mod constants;
pub mod landing;
pub mod marketplace;
pub mod subscription;
