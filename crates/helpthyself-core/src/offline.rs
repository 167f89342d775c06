//! Offline-mode hook.
//!
//! The asset cache itself belongs to the host; the core only records the
//! user's choice and asks the host to (un)register. Failures are warnings.

pub type RegistrarError = Box<dyn std::error::Error + Send + Sync>;

pub trait OfflineRegistrar {
    fn register(&mut self) -> Result<(), RegistrarError>;
    fn unregister(&mut self) -> Result<(), RegistrarError>;
}

/// Registrar for hosts that have nothing to cache.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRegistrar;

impl OfflineRegistrar for NoopRegistrar {
    fn register(&mut self) -> Result<(), RegistrarError> {
        Ok(())
    }

    fn unregister(&mut self) -> Result<(), RegistrarError> {
        Ok(())
    }
}

/// Register or unregister, logging any failure. Returns whether the call succeeded.
pub fn apply<R: OfflineRegistrar + ?Sized>(registrar: &mut R, enabled: bool) -> bool {
    let result = if enabled {
        registrar.register()
    } else {
        registrar.unregister()
    };
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(enabled, error = %e, "offline cache registration failed");
            false
        }
    }
}
