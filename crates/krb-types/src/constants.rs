//! Fixed constants from [RFC 4120](https://www.rfc-editor.org/rfc/rfc4120.txt).

pub mod types {
    pub const AS_REQ_MSG_TYPE: u8 = 0x0a;
    pub const AS_REP_MSG_TYPE: u8 = 0x0b;
    pub const TGS_REQ_MSG_TYPE: u8 = 0x0c;
    pub const TGS_REP_MSG_TYPE: u8 = 0x0d;
    pub const AP_REQ_MSG_TYPE: u8 = 0x0e;
    pub const AP_REP_MSG_TYPE: u8 = 0x0f;

    pub const KRB_ERROR_MSG_TYPE: u8 = 0x1e;

    pub const NT_PRINCIPAL: u8 = 0x01;
    pub const NT_SRV_INST: u8 = 0x02;

    pub const PA_TGS_REQ_TYPE: u8 = 0x01;

    pub const TICKET_TYPE: u8 = 1;
    pub const AUTHENTICATOR_TYPE: u8 = 2;
    pub const ENC_TGS_REP_PART_TYPE: u8 = 26;
}

/// Key usage numbers. Using the wrong one for a given seal/unseal/checksum call breaks
/// interoperability even when the key itself is correct.
pub mod key_usages {
    pub const TICKET_SEAL: i32 = 2;
    pub const TGS_REQ_AUTHORIZATION_DATA: i32 = 4;
    pub const TGS_REQ_AP_REQ_AUTHENTICATOR: i32 = 7;
    pub const TGS_REQ_BODY_CHECKSUM: i32 = 8;
    pub const TGS_REP_SESSION_KEY: i32 = 8;
    pub const TGS_REP_SUBKEY: i32 = 9;
}
