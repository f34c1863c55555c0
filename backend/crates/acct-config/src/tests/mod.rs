
use std::env;

use tempfile::TempDir;

pub(crate) const ACCESS_SECRET: &str = "access-secret-0123456789abcdefghijkl";
pub(crate) const REFRESH_SECRET: &str = "refresh-secret-0123456789abcdefghijk";

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

/// Create a temp config directory and set ACCT_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("ACCT_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Set the values that have no usable default (secrets, media endpoint)
pub(crate) fn required_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("ACCT_ACCESS_TOKEN_SECRET", ACCESS_SECRET),
        EnvGuard::set("ACCT_REFRESH_TOKEN_SECRET", REFRESH_SECRET),
        EnvGuard::set("ACCT_MEDIA_UPLOAD_URL", "https://media.example.com/upload"),
    ]
}
