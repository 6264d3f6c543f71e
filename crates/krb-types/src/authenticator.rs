use serde::{Deserialize, Serialize};

use crate::crypto::EncryptionKey;
use crate::principal::{PrincipalName, Realm};
use crate::time::KerberosTime;

/// [RFC 4120 5.2.9](https://www.rfc-editor.org/rfc/rfc4120.txt) — `Checksum`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checksum {
    pub cksumtype: i32,
    pub checksum: Vec<u8>,
}

/// [RFC 4120 5.3.2](https://www.rfc-editor.org/rfc/rfc4120.txt) — `Authenticator`, decrypted from
/// the AP-REQ's `authenticator` field under the ticket session key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authenticator {
    pub crealm: Realm,
    pub cname: PrincipalName,
    pub cksum: Option<Checksum>,
    pub ctime: KerberosTime,
    /// Microseconds, 0..999999 — combined with `ctime` this is the sub-second replay key.
    pub cusec: u32,
    pub subkey: Option<EncryptionKey>,
    pub seq_number: Option<u32>,
}

impl Authenticator {
    /// The tuple a `ReplayCache` keys its linearizable check-and-insert on.
    pub fn replay_key(&self) -> (KerberosTime, u32, PrincipalName, Realm) {
        (self.ctime, self.cusec, self.cname.clone(), self.crealm.clone())
    }
}
