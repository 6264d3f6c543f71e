use krb_types::{
    ApplicationRequest, Authenticator, AuthorizationData, Checksum, EncKdcRepPart, EncTicketPart, EncryptedData,
    EncryptionKey, EncryptionType, PrincipalName, PrincipalStoreEntry, Realm, KerberosTime,
};
use thiserror::Error;

/// Failures a collaborator can report back to the TGS core. Each call site in `crate::stages`
/// folds this into a [`krb_types::KerberosError`] itself, since the mapping is contextual to which
/// stage called the collaborator.
#[derive(Debug, Error)]
pub enum CollabError {
    #[error("principal not found")]
    NotFound,
    #[error("ciphertext failed to decrypt or integrity-check")]
    DecryptionFailed,
    #[error("checksum did not verify")]
    ChecksumMismatch,
    #[error("collaborator error: {0}")]
    Other(String),
}

/// Seals and unseals ciphertext under a given key and key usage number. Implemented by whatever
/// block cipher / HMAC primitives the deployment links in; this crate only depends on the
/// contract.
pub trait CipherTextHandler {
    fn seal(&self, key: &EncryptionKey, plaintext: &[u8], key_usage: i32) -> Result<EncryptedData, CollabError>;

    fn unseal(&self, key: &EncryptionKey, data: &EncryptedData, key_usage: i32) -> Result<Vec<u8>, CollabError>;
}

/// Verifies a keyed checksum over a byte range.
pub trait ChecksumHandler {
    fn verify(&self, cksum: &Checksum, bytes: &[u8], key: &EncryptionKey, key_usage: i32) -> Result<(), CollabError>;
}

/// Produces a fresh random session key for a given etype.
pub trait RandomKeyFactory {
    fn random(&self, etype: EncryptionType) -> Result<EncryptionKey, CollabError>;
}

/// Encodes and decodes the nested ASN.1 structures this core only ever sees as raw octets: the
/// `PA-TGS-REQ` padata value (an `AP-REQ`), the authenticator reached by decrypting it, decrypted
/// authorization-data octets, and the two cleartext structures the core seals before handing them
/// back to `CipherTextHandler`. The outer `KdcReq` itself arrives already decoded; this is the
/// remaining sliver of codec work the core cannot avoid depending on.
pub trait MessageCodec {
    fn decode_application_request(&self, bytes: &[u8]) -> Result<ApplicationRequest, CollabError>;

    fn decode_authenticator(&self, bytes: &[u8]) -> Result<Authenticator, CollabError>;

    fn decode_enc_ticket_part(&self, bytes: &[u8]) -> Result<EncTicketPart, CollabError>;

    fn decode_authorization_data(&self, bytes: &[u8]) -> Result<AuthorizationData, CollabError>;

    fn encode_enc_ticket_part(&self, part: &EncTicketPart) -> Result<Vec<u8>, CollabError>;

    fn encode_enc_kdc_rep_part(&self, part: &EncKdcRepPart) -> Result<Vec<u8>, CollabError>;
}

/// Resolves a principal name to its store entry (key material + display metadata).
pub trait PrincipalStore {
    fn lookup(&self, principal: &PrincipalName) -> Result<PrincipalStoreEntry, CollabError>;
}

/// Linearizable replay protection, keyed by `(ctime, cusec, cname, crealm)` with TTL equal to the
/// configured clock skew. `check_and_insert` returns `Ok(true)` the first time a given key is
/// seen and `Ok(false)` on a repeat — it never distinguishes "repeat" as an error so the stage can
/// decide what `KerberosError` variant that maps to.
pub trait ReplayCache {
    fn check_and_insert(
        &self,
        ctime: KerberosTime,
        cusec: u32,
        cname: &PrincipalName,
        crealm: &Realm,
    ) -> Result<bool, CollabError>;
}

impl dyn ReplayCache + '_ {
    /// Convenience wrapper matching the shape the spec's authenticator replay check is stated in.
    pub fn check_authenticator(&self, authenticator: &Authenticator) -> Result<bool, CollabError> {
        let (ctime, cusec, cname, crealm) = authenticator.replay_key();
        self.check_and_insert(ctime, cusec, &cname, &crealm)
    }
}
