//! Interrupt handling tests
//!
//! These touch the process-wide interrupt flag, so they live in their own test
//! binary and run as a single test.

use std::ffi::OsString;

use ec2_meta_env::environ::{build_environment, BuildOptions, Environ};
use ec2_meta_env::errors::Ec2MetaEnvError;
use ec2_meta_env::metadata::{FetchError, MetadataSource};
use ec2_meta_env::signals::{reset_interrupted, set_interrupted, was_interrupted};
use ec2_meta_env::status::ExitStatus;

struct PanickingSource;

impl MetadataSource for PanickingSource {
    fn fetch(&self, key: &str) -> Result<String, FetchError> {
        panic!("fetched {} after interrupt", key);
    }
}

/// Simulates Ctrl+C arriving while a request is in flight
struct InterruptingSource;

impl MetadataSource for InterruptingSource {
    fn fetch(&self, _key: &str) -> Result<String, FetchError> {
        set_interrupted();
        Ok("10.0.0.1".to_string())
    }
}

#[test]
fn test_interrupt_stops_build() {
    reset_interrupted();
    assert!(!was_interrupted());

    set_interrupted();
    assert!(was_interrupted());

    let options = BuildOptions {
        keys: vec!["local-ipv4".to_string()],
        ..Default::default()
    };
    let mut base = Environ::new();
    base.insert(OsString::from("MY_VAR"), OsString::from("some-val"));

    let err = build_environment(&base, &options, &PanickingSource).unwrap_err();
    assert!(matches!(err, Ec2MetaEnvError::Interrupted));
    assert_eq!(ExitStatus::from_error(&err), ExitStatus::Interrupted);

    reset_interrupted();
    assert!(!was_interrupted());

    // interrupted during the only fetch: the value arrives but the build fails
    let err = build_environment(&base, &options, &InterruptingSource).unwrap_err();
    assert!(matches!(err, Ec2MetaEnvError::Interrupted));

    reset_interrupted();
    assert!(!was_interrupted());
}
