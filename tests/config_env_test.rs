//! Config loading from the real process environment.
//!
//! Each test mutates `POOLWATCH_*` variables, so they run serially.

use std::time::Duration;

use poolwatch::config::{Config, ENV_API_URL, ENV_FENCING, ENV_MOBILE_COLS, ENV_TIMEOUT_SECS};
use poolwatch::state::FencingPolicy;
use serial_test::serial;

const VARS: [&str; 4] = [ENV_API_URL, ENV_TIMEOUT_SECS, ENV_MOBILE_COLS, ENV_FENCING];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_without_vars_is_default() {
    clear_env();
    assert_eq!(Config::from_env().unwrap(), Config::default());
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_env();
    std::env::set_var(ENV_API_URL, "https://pools.example.com/api/");
    std::env::set_var(ENV_TIMEOUT_SECS, "15");
    std::env::set_var(ENV_FENCING, "last-resolved");

    let config = Config::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_base_url, "https://pools.example.com/api");
    assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    assert_eq!(config.fencing, FencingPolicy::LastResolved);
}

#[test]
#[serial]
fn test_from_env_rejects_bad_breakpoint() {
    clear_env();
    std::env::set_var(ENV_MOBILE_COLS, "wide");

    let err = Config::from_env().unwrap_err();
    clear_env();

    assert!(err.to_string().contains(ENV_MOBILE_COLS));
}
