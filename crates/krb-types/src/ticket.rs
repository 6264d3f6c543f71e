use serde::{Deserialize, Serialize};

use crate::crypto::{EncryptedData, EncryptionKey};
use crate::flags::TicketFlags;
use crate::principal::{PrincipalName, Realm};
use crate::time::KerberosTime;

/// [RFC 4120 5.2.5](https://www.rfc-editor.org/rfc/rfc4120.txt)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostAddress {
    pub addr_type: i32,
    pub address: Vec<u8>,
}

/// [RFC 4120 5.2.6](https://www.rfc-editor.org/rfc/rfc4120.txt)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationDataEntry {
    pub ad_type: i32,
    pub ad_data: Vec<u8>,
}

pub type AuthorizationData = Vec<AuthorizationDataEntry>;

/// The transited-realm list an issuing KDC stamps onto a ticket as it crosses realms. This
/// workspace only implements the local-realm pass-through case (see [`EncTicketPart::transited`]);
/// anything carrying a non-domain-X.500 compressed encoding is rejected upstream with
/// `KDC_ERR_TRTYPE_NOSUPP`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitedEncoding {
    pub tr_type: i32,
    pub contents: Vec<u8>,
}

impl TransitedEncoding {
    pub const DOMAIN_X500_COMPRESS: i32 = 1;

    pub fn local(realm: &Realm) -> Self {
        TransitedEncoding {
            tr_type: Self::DOMAIN_X500_COMPRESS,
            contents: realm.as_bytes().to_vec(),
        }
    }
}

/// [RFC 4120 5.3](https://www.rfc-editor.org/rfc/rfc4120.txt) — `EncTicketPart`, the cleartext a
/// ticket's `enc-part` decrypts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncTicketPart {
    pub flags: TicketFlags,
    pub key: EncryptionKey,
    pub crealm: Realm,
    pub cname: PrincipalName,
    pub transited: TransitedEncoding,
    pub auth_time: KerberosTime,
    pub start_time: Option<KerberosTime>,
    pub end_time: KerberosTime,
    pub renew_till: Option<KerberosTime>,
    pub client_addresses: Vec<HostAddress>,
    pub authorization_data: AuthorizationData,
}

impl EncTicketPart {
    /// `startTime` if present, else `authTime` — the RFC's "time the ticket starts being valid"
    /// fallback used by the renewal window arithmetic.
    pub fn start_or_auth_time(&self) -> KerberosTime {
        self.start_time.unwrap_or(self.auth_time)
    }
}

/// A ticket's `enc-part` as seen by the core: either still-sealed ciphertext, or the cleartext
/// reached by a prior `decrypt` call. Modeled as a tagged variant rather than an
/// always-populated `Option` so callers cannot accidentally read stale cleartext from a ticket
/// whose key they never actually unsealed.
#[derive(Debug, Clone)]
pub enum TicketBody {
    Encrypted(EncryptedData),
    Decrypted(EncTicketPart),
}

impl TicketBody {
    pub fn as_decrypted(&self) -> Option<&EncTicketPart> {
        match self {
            TicketBody::Decrypted(part) => Some(part),
            TicketBody::Encrypted(_) => None,
        }
    }
}

/// [RFC 4120 5.3](https://www.rfc-editor.org/rfc/rfc4120.txt)
///
/// ```not_rust
/// Ticket          ::= [APPLICATION 1] SEQUENCE {
///         tkt-vno         [0] INTEGER (5),
///         realm           [1] Realm,
///         sname           [2] PrincipalName,
///         enc-part        [3] EncryptedData
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Ticket {
    pub tkt_vno: i32,
    pub realm: Realm,
    pub sname: PrincipalName,
    pub body: TicketBody,
}

impl Ticket {
    pub fn new_sealed(realm: impl Into<Realm>, sname: PrincipalName, enc_part: EncryptedData) -> Self {
        Ticket {
            tkt_vno: 5,
            realm: realm.into(),
            sname,
            body: TicketBody::Encrypted(enc_part),
        }
    }

    /// Replace the sealed body with its decrypted contents. The caller has already verified the
    /// ciphertext decrypted under the expected server key; this method only records the result.
    pub fn set_decrypted(&mut self, part: EncTicketPart) {
        self.body = TicketBody::Decrypted(part);
    }

    pub fn encrypted(&self) -> Option<&EncryptedData> {
        match &self.body {
            TicketBody::Encrypted(data) => Some(data),
            TicketBody::Decrypted(_) => None,
        }
    }

    pub fn decrypted(&self) -> Option<&EncTicketPart> {
        self.body.as_decrypted()
    }
}
