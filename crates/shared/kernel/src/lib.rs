//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it owns the startup contract (config loading and deployment
//! validation) and the claims lookup capability used by the landing page.
//!
//! ## Config loading and validation
//! ```rust,no_run
//! use mona_kernel::config::{ensure_valid_deployment, load_app_config};
//!
//! let cfg = load_app_config(Some("mona.toml")).unwrap();
//! ensure_valid_deployment(&cfg.deployment).unwrap();
//! ```
//!
//! ## Claims lookup
//! ```rust
//! use mona_kernel::security::claims::{Claims, ClaimsSource};
//!
//! let claims = Claims::new().with("name", "Ada Lovelace");
//! assert_eq!(claims.preferred_claim(&["given_name", "name"]), Some("Ada Lovelace"));
//! ```
pub mod config;
pub mod prelude;
pub mod security;

pub use mona_domain as domain;
