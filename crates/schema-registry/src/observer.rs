use crate::error::RegistryError;

/// Notified of every mutating or failing registry operation. Replaceable; defaults to a no-op so
/// a caller that doesn't care about observability pays nothing for it.
pub trait RegistryObserver: Send + Sync {
    fn registered(&self, oid: &str) {
        let _ = oid;
    }

    fn register_failed(&self, oid: &str, err: &RegistryError) {
        let _ = (oid, err);
    }

    fn looked_up(&self, id: &str, oid: &str) {
        let _ = (id, oid);
    }

    fn lookup_failed(&self, id: &str, err: &RegistryError) {
        let _ = (id, err);
    }
}

/// The default observer: does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RegistryObserver for NoopObserver {}
