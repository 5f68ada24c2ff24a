//! Landing page feature slice.
//!
//! Merges the authenticated user's claims, the configured offer, the customer's subscription,
//! the deployment and an optional error code into one [`LandingPageModel`] for the renderer.

mod composer;
mod error;

pub use crate::composer::LandingPageComposer;
pub use crate::error::{LandingError, LandingErrorExt, Party};
pub use mona_domain::landing::LandingPageModel;
