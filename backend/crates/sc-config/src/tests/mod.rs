
use std::env;

use tempfile::TempDir;

pub(crate) const VALID_SECRET: &str = "12345678901234567890123456789012";

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

/// Create a temp config directory and set SC_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set(crate::CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    (temp, guard)
}

/// Set the minimum settings (JWT secret and image host account) for validate() to pass
pub(crate) fn required_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("SC_AUTH_JWT_SECRET", VALID_SECRET),
        EnvGuard::remove("SC_AUTH_JWT_PUBLIC_KEY_PATH"),
        EnvGuard::set("SC_MEDIA_CLOUD_NAME", "demo"),
        EnvGuard::set("SC_MEDIA_API_KEY", "key-123"),
        EnvGuard::set("SC_MEDIA_API_SECRET", "secret-456"),
    ]
}
