use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::RegistryError;
use crate::object::SchemaObject;
use crate::observer::{NoopObserver, RegistryObserver};

struct BootstrapEntry {
    schema: String,
    object: SchemaObject,
}

struct Overlay {
    entries: HashMap<String, (String, SchemaObject)>,
    /// Alias name -> canonical OID, seeded from the bootstrap tier at construction and grown by
    /// every successful `register`.
    aliases: HashMap<String, String>,
}

/// Two-tier OID-keyed store: a process-wide immutable `bootstrap` tier and a mutable `overlay`.
/// An OID never exists in both tiers at once — `register` enforces that.
pub struct OidRegistry {
    bootstrap: HashMap<String, BootstrapEntry>,
    overlay: Mutex<Overlay>,
    observer: Mutex<Box<dyn RegistryObserver>>,
}

impl OidRegistry {
    /// Builds a registry whose bootstrap tier is seeded from `entries` (schema name, object
    /// pairs). Bootstrap aliases are indexed once here; they never change afterward.
    pub fn new(entries: impl IntoIterator<Item = (String, SchemaObject)>) -> Self {
        let mut bootstrap = HashMap::new();
        let mut aliases = HashMap::new();

        for (schema, object) in entries {
            aliases.insert(object.oid.clone(), object.oid.clone());
            for name in &object.names {
                aliases.insert(name.clone(), object.oid.clone());
            }
            bootstrap.insert(object.oid.clone(), BootstrapEntry { schema, object });
        }

        Self {
            bootstrap,
            overlay: Mutex::new(Overlay {
                entries: HashMap::new(),
                aliases,
            }),
            observer: Mutex::new(Box::new(NoopObserver)),
        }
    }

    /// Replaces the observer. Not itself observed.
    pub fn set_observer(&self, observer: impl RegistryObserver + 'static) {
        *self.observer.lock() = Box::new(observer);
    }

    fn normalize<'a>(overlay: &'a Overlay, id: &'a str) -> &'a str {
        overlay.aliases.get(id).map_or(id, String::as_str)
    }

    /// Fails if `obj.oid` already exists in either tier; otherwise inserts into the overlay and
    /// records the `oid -> schema` association plus every `name -> oid` alias.
    pub fn register(&self, schema: impl Into<String>, obj: SchemaObject) -> Result<(), RegistryError> {
        let mut overlay = self.overlay.lock();

        if self.bootstrap.contains_key(&obj.oid) || overlay.entries.contains_key(&obj.oid) {
            let err = RegistryError::AlreadyRegistered { oid: obj.oid.clone() };
            self.observer.lock().register_failed(&obj.oid, &err);
            return Err(err);
        }

        overlay.aliases.insert(obj.oid.clone(), obj.oid.clone());
        for name in &obj.names {
            overlay.aliases.insert(name.clone(), obj.oid.clone());
        }
        let oid = obj.oid.clone();
        overlay.entries.insert(oid.clone(), (schema.into(), obj));

        tracing::debug!(oid, "schema object registered");
        self.observer.lock().registered(&oid);
        Ok(())
    }

    /// Normalizes `id` through the alias table, then checks the overlay before the bootstrap.
    pub fn lookup(&self, id: &str) -> Result<SchemaObject, RegistryError> {
        let overlay = self.overlay.lock();
        let oid = Self::normalize(&overlay, id).to_owned();

        if let Some((_, obj)) = overlay.entries.get(&oid) {
            let obj = obj.clone();
            drop(overlay);
            tracing::debug!(id, oid, "schema object looked up");
            self.observer.lock().looked_up(id, &oid);
            return Ok(obj);
        }
        drop(overlay);

        if let Some(entry) = self.bootstrap.get(&oid) {
            tracing::debug!(id, oid, "schema object looked up");
            self.observer.lock().looked_up(id, &oid);
            return Ok(entry.object.clone());
        }

        let err = RegistryError::NotRegistered { oid };
        self.observer.lock().lookup_failed(id, &err);
        Err(err)
    }

    /// Non-throwing existence check.
    pub fn has(&self, id: &str) -> bool {
        self.lookup(id).is_ok()
    }

    /// Normalizes `id`, then returns the schema name associated with it from the overlay, else
    /// the bootstrap.
    pub fn get_schema_name(&self, id: &str) -> Result<String, RegistryError> {
        let overlay = self.overlay.lock();
        let oid = Self::normalize(&overlay, id).to_owned();

        if let Some((schema, _)) = overlay.entries.get(&oid) {
            let schema = schema.clone();
            drop(overlay);
            self.observer.lock().looked_up(id, &oid);
            return Ok(schema);
        }
        drop(overlay);

        if let Some(entry) = self.bootstrap.get(&oid) {
            self.observer.lock().looked_up(id, &oid);
            return Ok(entry.schema.clone());
        }

        let err = RegistryError::NotRegistered { oid };
        self.observer.lock().lookup_failed(id, &err);
        Err(err)
    }

    /// Yields every registered object exactly once, overlay and bootstrap combined. The register
    /// invariant (no OID in both tiers) makes de-duplication unnecessary.
    pub fn list(&self) -> Vec<SchemaObject> {
        let overlay = self.overlay.lock();
        let mut out: Vec<SchemaObject> = self.bootstrap.values().map(|entry| entry.object.clone()).collect();
        out.extend(overlay.entries.values().map(|(_, obj)| obj.clone()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cn() -> SchemaObject {
        SchemaObject::new("2.5.4.3", vec!["cn".to_owned(), "commonName".to_owned()], "core")
    }

    #[test]
    fn bootstrap_object_is_reachable_by_oid_and_alias() {
        let registry = OidRegistry::new([("core".to_owned(), cn())]);

        assert_eq!(registry.lookup("2.5.4.3").unwrap(), cn());
        assert_eq!(registry.lookup("cn").unwrap(), cn());
        assert_eq!(registry.get_schema_name("commonName").unwrap(), "core");
    }

    #[test]
    fn register_rejects_oid_collision_with_bootstrap() {
        let registry = OidRegistry::new([("core".to_owned(), cn())]);

        let err = registry
            .register("overlay-schema", SchemaObject::new("2.5.4.3", vec!["duplicate".to_owned()], "x"))
            .unwrap_err();
        assert_eq!(err, RegistryError::AlreadyRegistered { oid: "2.5.4.3".to_owned() });
        // The failed register must not have touched the alias table.
        assert!(registry.lookup("duplicate").is_err());
    }

    #[test]
    fn register_twice_on_same_overlay_oid_is_always_an_error() {
        let registry = OidRegistry::new(std::iter::empty());
        let obj = SchemaObject::new("1.2.3", vec!["widget".to_owned()], "custom");

        registry.register("custom", obj.clone()).unwrap();
        let err = registry.register("custom", obj).unwrap_err();
        assert_eq!(err, RegistryError::AlreadyRegistered { oid: "1.2.3".to_owned() });
    }

    #[test]
    fn has_is_non_throwing() {
        let registry = OidRegistry::new([("core".to_owned(), cn())]);
        assert!(registry.has("cn"));
        assert!(!registry.has("nonexistent"));
    }

    #[test]
    fn list_combines_both_tiers_without_duplicates() {
        let registry = OidRegistry::new([("core".to_owned(), cn())]);
        registry
            .register("custom", SchemaObject::new("1.2.3", vec!["widget".to_owned()], "custom"))
            .unwrap();

        let mut oids: Vec<_> = registry.list().into_iter().map(|obj| obj.oid).collect();
        oids.sort();
        assert_eq!(oids, vec!["1.2.3".to_owned(), "2.5.4.3".to_owned()]);
    }
}
