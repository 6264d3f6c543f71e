use serde::{Deserialize, Serialize};

use crate::constants::types;
use crate::crypto::{EncryptedData, EncryptionKey};
use crate::flags::{KdcOptions, TicketFlags};
use crate::principal::{PrincipalName, Realm};
use crate::ticket::{AuthorizationData, HostAddress, Ticket};
use crate::time::KerberosTime;

/// [RFC 4120 5.2.7](https://www.rfc-editor.org/rfc/rfc4120.txt)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaData {
    pub padata_type: u8,
    pub padata_value: Vec<u8>,
}

impl PaData {
    pub fn is_tgs_req(&self) -> bool {
        self.padata_type == types::PA_TGS_REQ_TYPE
    }
}

/// [RFC 4120 5.4.1](https://www.rfc-editor.org/rfc/rfc4120.txt) — `KDC-REQ-BODY`, restricted to
/// the fields the TGS path reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KdcReqBody {
    pub kdc_options: KdcOptions,
    pub cname: Option<PrincipalName>,
    pub realm: Realm,
    pub sname: PrincipalName,
    pub from: Option<KerberosTime>,
    pub till: KerberosTime,
    pub rtime: Option<KerberosTime>,
    pub nonce: u32,
    pub etype: Vec<crate::crypto::EncryptionType>,
    pub addresses: Vec<HostAddress>,
    pub enc_authorization_data: Option<EncryptedData>,
}

/// [RFC 4120 5.4.1](https://www.rfc-editor.org/rfc/rfc4120.txt) — `KDC-REQ`, as handed to this
/// crate already decoded by the external ASN.1 codec.
#[derive(Debug, Clone)]
pub struct KdcReq {
    pub pvno: u8,
    pub msg_type: u8,
    pub pa_data: Vec<PaData>,
    pub req_body: KdcReqBody,
    /// The exact encoded octets of `req_body`, preserved verbatim because the authenticator
    /// checksum in the AP-REQ is taken over these bytes. Any re-encoding before checksum
    /// verification is a protocol error (`KRB_AP_ERR_MODIFIED`).
    pub body_bytes: Vec<u8>,
}

/// [RFC 4120 5.5.1](https://www.rfc-editor.org/rfc/rfc4120.txt) — `AP-REQ`, embedded as the
/// `PA-TGS-REQ` pre-authentication datum.
#[derive(Debug, Clone)]
pub struct ApplicationRequest {
    pub ap_options: u32,
    pub ticket: Ticket,
    pub authenticator: EncryptedData,
}

/// [RFC 4120 5.4.2](https://www.rfc-editor.org/rfc/rfc4120.txt)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastReqEntry {
    pub lr_type: i32,
    pub lr_value: KerberosTime,
}

/// [RFC 4120 5.4.2](https://www.rfc-editor.org/rfc/rfc4120.txt) — `EncKDCRepPart`, the cleartext
/// sealed into a `TGS-REP`'s `enc-part`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncKdcRepPart {
    pub key: EncryptionKey,
    pub last_req: Vec<LastReqEntry>,
    pub nonce: u32,
    pub flags: TicketFlags,
    pub auth_time: KerberosTime,
    pub start_time: Option<KerberosTime>,
    pub end_time: KerberosTime,
    pub renew_till: Option<KerberosTime>,
    pub srealm: Realm,
    pub sname: PrincipalName,
    pub caddr: Vec<HostAddress>,
}

/// [RFC 4120 5.4.2](https://www.rfc-editor.org/rfc/rfc4120.txt) — `TGS-REP`.
#[derive(Debug, Clone)]
pub struct TgsRep {
    pub pvno: u8,
    pub msg_type: u8,
    pub crealm: Realm,
    pub cname: PrincipalName,
    pub ticket: Ticket,
    pub enc_part: EncryptedData,
}
