use std::borrow::Cow;
use std::fmt;

/// Which party of a subscription is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Purchaser,
    Beneficiary,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Purchaser => "purchaser",
            Self::Beneficiary => "beneficiary",
        })
    }
}

/// A specialized [`LandingError`] enum of this crate.
///
/// Both kinds are caller contract violations; nothing here is retried.
#[mona_derive::mona_error]
pub enum LandingError {
    /// A required input was absent or empty.
    #[error("Invalid argument `{argument}`{}", format_context(.context))]
    InvalidArgument { argument: &'static str, context: Option<Cow<'static, str>> },
    /// The subscription does not carry one of its parties.
    #[error("Subscription has no {party}{}", format_context(.context))]
    MissingParty { party: Party, context: Option<Cow<'static, str>> },
}

impl LandingError {
    pub(crate) const fn invalid_argument(argument: &'static str) -> Self {
        Self::InvalidArgument { argument, context: None }
    }
}
