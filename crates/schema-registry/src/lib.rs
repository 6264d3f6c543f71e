//! An OID-keyed registry for LDAP schema objects (matching rules, attribute types, object
//! classes, …), representative of several uniform registries the directory server keeps: a
//! process-wide immutable bootstrap tier under a mutable overlay, with alias-name lookups
//! normalized to canonical OIDs first.

mod error;
mod object;
mod observer;
mod registry;

pub use error::RegistryError;
pub use object::SchemaObject;
pub use observer::{NoopObserver, RegistryObserver};
pub use registry::OidRegistry;
