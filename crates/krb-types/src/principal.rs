use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::crypto::{EncryptionKey, EncryptionType};

/// [RFC 4120 6.2](https://www.rfc-editor.org/rfc/rfc4120.txt) — `NameType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum NameType {
    Unknown = 0,
    Principal = 1,
    SrvInst = 2,
    SrvHst = 3,
    SrvXhst = 4,
    Uid = 5,
    X500Principal = 6,
    Smtp = 7,
    Enterprise = 10,
}

pub type Realm = String;

/// [RFC 4120 5.2.2](https://www.rfc-editor.org/rfc/rfc4120.txt)
///
/// ```not_rust
/// PrincipalName   ::= SEQUENCE {
///         name-type       [0] Int32,
///         name-string     [1] SEQUENCE OF KerberosString
/// }
/// ```
///
/// Equality is realm + name-parts only, per the spec's invariant — `name_type` is metadata that
/// does not participate in principal identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalName {
    pub realm: Realm,
    pub name_type: NameType,
    pub name_string: Vec<String>,
}

impl PrincipalName {
    pub fn new(realm: impl Into<Realm>, name_type: NameType, name_string: Vec<String>) -> Self {
        PrincipalName {
            realm: realm.into(),
            name_type,
            name_string,
        }
    }

    /// `krbtgt/REALM@REALM`, the KDC's own service principal for a given realm.
    pub fn krbtgt(realm: impl Into<Realm> + Clone) -> Self {
        PrincipalName {
            realm: realm.clone().into(),
            name_type: NameType::SrvInst,
            name_string: vec!["krbtgt".to_owned(), realm.into()],
        }
    }
}

impl PartialEq for PrincipalName {
    fn eq(&self, other: &Self) -> bool {
        self.realm == other.realm && self.name_string == other.name_string
    }
}

impl Eq for PrincipalName {}

impl std::hash::Hash for PrincipalName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.realm.hash(state);
        self.name_string.hash(state);
    }
}

impl std::fmt::Display for PrincipalName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name_string.join("/"), self.realm)
    }
}

/// What a `PrincipalStore` collaborator returns on a successful lookup: the principal's key
/// material across every etype it has a key for, plus the display metadata an LDAP entry would
/// carry alongside it.
#[derive(Debug, Clone)]
pub struct PrincipalStoreEntry {
    pub principal: PrincipalName,
    pub key_map: HashMap<EncryptionType, EncryptionKey>,
    pub common_name: String,
    pub realm_name: Realm,
}

impl PrincipalStoreEntry {
    pub fn key_for(&self, etype: EncryptionType) -> Option<&EncryptionKey> {
        self.key_map.get(&etype)
    }
}
