//! Kerberos V5 domain value types ([RFC 4120](https://www.rfc-editor.org/rfc/rfc4120.txt)).
//!
//! These types model the *decoded* wire structures a KDC works with. Encoding and decoding to
//! ASN.1 DER/BER is an external collaborator's responsibility (not implemented here); this crate
//! only defines the shapes that collaborator produces and consumes.

pub mod authenticator;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod flags;
pub mod messages;
pub mod principal;
pub mod ticket;
pub mod time;

pub use authenticator::{Authenticator, Checksum};
pub use crypto::{EncryptedData, EncryptionKey, EncryptionType};
pub use error::KerberosError;
pub use flags::{KdcOptions, TicketFlags};
pub use messages::{ApplicationRequest, EncKdcRepPart, KdcReq, KdcReqBody, LastReqEntry, PaData, TgsRep};
pub use principal::{NameType, PrincipalName, PrincipalStoreEntry, Realm};
pub use ticket::{AuthorizationData, AuthorizationDataEntry, EncTicketPart, HostAddress, Ticket, TicketBody, TransitedEncoding};
pub use time::KerberosTime;
