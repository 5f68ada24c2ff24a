/// Claim carrying the user's given name, as issued by Entra ID / WS-Federation.
pub const GIVEN_NAME_CLAIM: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/givenname";
/// Generic display name claim (OpenID Connect `name`).
pub const NAME_CLAIM: &str = "name";

/// Claim types tried, in order, when resolving a user's friendly name.
pub const FRIENDLY_NAME_CLAIMS: [&str; 2] = [GIVEN_NAME_CLAIM, NAME_CLAIM];

/// Environment variable prefix for configuration overrides (`MONA__DEPLOYMENT__NAME`).
pub const CONFIG_ENV_PREFIX: &str = "MONA";
/// Default configuration file stem, resolved relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mona";
