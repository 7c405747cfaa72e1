//! Environment overrides for tests that exercise `LINEZONE_*` variables.

use std::sync::{Mutex, OnceLock};

/// Serializes every test that touches the process environment.
pub fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

#[allow(unused_unsafe)]
fn write_var(key: &str, value: Option<&str>) {
    // SAFETY: callers hold `env_lock`, so no other test reads the environment
    // concurrently.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

/// Overrides one variable and puts the old value back on drop.
pub struct EnvGuard {
    key: String,
    previous: Option<String>,
}

impl EnvGuard {
    fn replace(key: &str, value: Option<&str>) -> Self {
        let previous = std::env::var(key).ok();
        write_var(key, value);
        Self {
            key: key.to_string(),
            previous,
        }
    }

    pub fn set(key: &str, value: &str) -> Self {
        Self::replace(key, Some(value))
    }

    pub fn remove(key: &str) -> Self {
        Self::replace(key, None)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        write_var(&self.key, self.previous.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::{env_lock, EnvGuard};
    use crate::constants::ENV_TERMINATOR;

    #[test]
    fn nested_guards_unwind_in_order() {
        let _lock = env_lock().lock().expect("env lock");
        let _outer = EnvGuard::set(ENV_TERMINATOR, "outer");
        {
            let _inner = EnvGuard::remove(ENV_TERMINATOR);
            assert!(std::env::var(ENV_TERMINATOR).is_err());
            let _set = EnvGuard::set(ENV_TERMINATOR, r"\t");
            assert_eq!(std::env::var(ENV_TERMINATOR).as_deref(), Ok(r"\t"));
        }
        assert_eq!(std::env::var(ENV_TERMINATOR).as_deref(), Ok("outer"));
    }
}
