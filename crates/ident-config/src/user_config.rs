use crate::{ConfigError, ConfigErrorResult, system};

use ident_core::{CommitterSource, sanitize};

use serde::Deserialize;

/// The `[user]` section plus committer-only overrides from the environment.
///
/// Committer name resolves as: committer override, `user.name`, system user.
/// Committer email resolves as: committer override, `user.email`,
/// `<system-user>@<hostname>`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct UserConfig {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Set from `GIT_COMMITTER_NAME`.
    #[serde(skip)]
    pub committer_name: Option<String>,
    /// Set from `GIT_COMMITTER_EMAIL`.
    #[serde(skip)]
    pub committer_email: Option<String>,
}

impl UserConfig {
    /// Reject configured values that would encode to nothing.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let fields = [
            ("user.name", &self.name),
            ("user.email", &self.email),
            ("committer name", &self.committer_name),
            ("committer email", &self.committer_email),
        ];

        for (field, value) in fields {
            if let Some(value) = value
                && sanitize(value).is_empty()
            {
                return Err(ConfigError::user(format!(
                    "{field} must contain at least one printable character"
                )));
            }
        }

        Ok(())
    }
}

impl CommitterSource for UserConfig {
    fn committer_name(&self) -> Option<String> {
        self.committer_name
            .clone()
            .or_else(|| self.name.clone())
            .or_else(system::user_name)
    }

    fn committer_email(&self) -> Option<String> {
        self.committer_email
            .clone()
            .or_else(|| self.email.clone())
            .or_else(system::default_email)
    }
}
