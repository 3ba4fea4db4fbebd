mod log_level;

use std::env;

use tempfile::TempDir;

/// Every variable `Config::load` reads, plus the system user fallbacks.
const IDENT_ENV_VARS: [&str; 9] = [
    "IDENT_USER_NAME",
    "IDENT_USER_EMAIL",
    "GIT_COMMITTER_NAME",
    "GIT_COMMITTER_EMAIL",
    "IDENT_LOG_LEVEL",
    "IDENT_LOG_COLORED",
    "IDENT_LOG_FILE",
    "USER",
    "USERNAME",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory pointed to by IDENT_CONFIG_DIR, with every
/// override variable cleared for the guard's lifetime.
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _config_dir: EnvGuard,
    _cleared: Vec<EnvGuard>,
}

impl TestEnv {
    pub(crate) fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
    }
}

pub(crate) fn setup_config_dir() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let config_dir = EnvGuard::set("IDENT_CONFIG_DIR", dir.path().to_str().unwrap());
    let cleared = IDENT_ENV_VARS.into_iter().map(EnvGuard::remove).collect();

    TestEnv {
        dir,
        _config_dir: config_dir,
        _cleared: cleared,
    }
}
