pub use crate::config::validation::{RequiredField, ensure_valid_deployment, validate_deployment};
pub use crate::config::{ConfigError, ConfigErrorExt, load_app_config, load_config};
pub use crate::security::claims::{Claim, Claims, ClaimsSource};
