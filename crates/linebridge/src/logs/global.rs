//! Process default provider.
//!
//! Installed once by the host program at startup. Library code never reads
//! it implicitly: constructors receive [`logger_provider`] as an explicit
//! accessor (see [`crate::conf::DefaultProvider`]).

use std::sync::{Arc, OnceLock};

use super::{NoopLoggerProvider, SharedProvider};

static PROCESS_PROVIDER: OnceLock<SharedProvider> = OnceLock::new();

/// Install the process default provider.
///
/// Only the first call takes effect; later calls hand the rejected provider
/// back as `Err`.
pub fn set_logger_provider(provider: SharedProvider) -> Result<(), SharedProvider> {
    PROCESS_PROVIDER.set(provider)
}

/// The installed provider, or a no-op provider when nothing was installed.
pub fn logger_provider() -> SharedProvider {
    match PROCESS_PROVIDER.get() {
        Some(provider) => Arc::clone(provider),
        None => Arc::new(NoopLoggerProvider::new()),
    }
}

pub fn is_installed() -> bool {
    PROCESS_PROVIDER.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::with_version;
    use crate::logs::LogRecord;
    use crate::recorder::Recorder;
    use crate::LineBridge;

    // The only test that installs the process provider; it runs once per
    // test binary.
    #[test]
    fn test_install_once_and_bridge_fallback() {
        let recorder = Arc::new(Recorder::new());
        let first = set_logger_provider(recorder.clone());
        let second = set_logger_provider(Arc::new(NoopLoggerProvider::new()));

        assert!(first.is_ok());
        assert!(is_installed());
        assert!(second.is_err(), "second install must be rejected");

        logger_provider().logger("global").emit(LogRecord::new());

        let bridge = LineBridge::new("global-bridge", [with_version("2.0.0")]);
        bridge.write_chunk(b"12:00:00 INFO via process provider\n").unwrap();

        let result = recorder.result();
        assert_eq!(result[0].scope.name, "global");
        let scope = result
            .iter()
            .find(|s| s.scope.name == "global-bridge")
            .expect("bridge logger comes from the installed provider");
        assert_eq!(scope.scope.version.as_deref(), Some("2.0.0"));
        assert_eq!(scope.records.len(), 1);
        assert_eq!(
            scope.records[0].body.as_ref().and_then(|b| b.as_str()),
            Some("via process provider")
        );
    }
}
