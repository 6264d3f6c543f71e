//! Fixture collaborators for driving [`kdc_tgs::execute`] end to end without any real
//! cryptography or ASN.1 codec. Sealing is an identity transform (the fixture never needs to
//! forge ciphertext it doesn't control) and decoding looks values up from tables the test
//! populates ahead of time, the way a hand-rolled in-memory store would.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use kdc_tgs::{ChecksumHandler, CipherTextHandler, CollabError, MessageCodec, PrincipalStore, RandomKeyFactory, ReplayCache};
use krb_types::{
    ApplicationRequest, Authenticator, AuthorizationData, Checksum, EncKdcRepPart, EncTicketPart, EncryptedData,
    EncryptionKey, EncryptionType, KerberosTime, PrincipalName, PrincipalStoreEntry, Realm,
};

#[derive(Default)]
pub struct Fixture {
    ap_reqs: RefCell<HashMap<Vec<u8>, ApplicationRequest>>,
    authenticators: RefCell<HashMap<Vec<u8>, Authenticator>>,
    ticket_parts: RefCell<HashMap<Vec<u8>, EncTicketPart>>,
    rep_parts: RefCell<HashMap<Vec<u8>, EncKdcRepPart>>,
    principals: RefCell<HashMap<PrincipalName, PrincipalStoreEntry>>,
    seen: RefCell<HashSet<(i64, u32, String, String)>>,
    next_token: RefCell<u64>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_token(&self) -> Vec<u8> {
        let mut counter = self.next_token.borrow_mut();
        *counter += 1;
        format!("token-{counter}").into_bytes()
    }

    /// Registers a principal and returns it so callers can build tickets referencing it.
    pub fn add_principal(&self, entry: PrincipalStoreEntry) {
        self.principals.borrow_mut().insert(entry.principal.clone(), entry);
    }

    /// Seals `body` as the TGT's `EncryptedData`, registering the plaintext so the fixture
    /// cipher/codec pair can round-trip it during `stage6_verify_ap_req`.
    pub fn seal_ticket_part(&self, body: EncTicketPart, etype: EncryptionType) -> EncryptedData {
        let token = self.fresh_token();
        self.ticket_parts.borrow_mut().insert(token.clone(), body);
        EncryptedData { etype, kvno: Some(1), cipher: token }
    }

    /// Registers an `ApplicationRequest` and returns the bytes a `PA-TGS-REQ` padata entry would
    /// carry to reach it via `decode_application_request`.
    pub fn register_ap_req(&self, ap_req: ApplicationRequest) -> Vec<u8> {
        let token = self.fresh_token();
        self.ap_reqs.borrow_mut().insert(token.clone(), ap_req);
        token
    }

    /// Recovers the `EncKdcRepPart` an `execute` call sealed into its reply, keyed by the
    /// resulting `enc_part.cipher` (the fixture cipher is an identity transform, so the cipher
    /// bytes are exactly the token `encode_enc_kdc_rep_part` handed back).
    pub fn decode_rep_part(&self, token: &[u8]) -> EncKdcRepPart {
        self.rep_parts
            .borrow()
            .get(token)
            .cloned()
            .expect("token was registered by encode_enc_kdc_rep_part")
    }

    /// Seals `authenticator` under `key`, registering it so `decode_authenticator` can find it
    /// again once the fixture cipher "unseals" the token.
    pub fn seal_authenticator(&self, authenticator: Authenticator, key: &EncryptionKey) -> EncryptedData {
        let token = self.fresh_token();
        self.authenticators.borrow_mut().insert(token.clone(), authenticator);
        EncryptedData {
            etype: key.etype,
            kvno: Some(key.kvno),
            cipher: token,
        }
    }
}

impl CipherTextHandler for Fixture {
    fn seal(&self, _key: &EncryptionKey, plaintext: &[u8], _key_usage: i32) -> Result<EncryptedData, CollabError> {
        Ok(EncryptedData {
            etype: EncryptionType::Aes256CtsHmacSha1_96,
            kvno: Some(1),
            cipher: plaintext.to_vec(),
        })
    }

    fn unseal(&self, _key: &EncryptionKey, data: &EncryptedData, _key_usage: i32) -> Result<Vec<u8>, CollabError> {
        Ok(data.cipher.clone())
    }
}

impl ChecksumHandler for Fixture {
    fn verify(&self, _cksum: &Checksum, _bytes: &[u8], _key: &EncryptionKey, _key_usage: i32) -> Result<(), CollabError> {
        Ok(())
    }
}

impl RandomKeyFactory for Fixture {
    fn random(&self, etype: EncryptionType) -> Result<EncryptionKey, CollabError> {
        Ok(EncryptionKey::new(etype, 1, vec![0xAB; etype.key_length()]))
    }
}

impl PrincipalStore for Fixture {
    fn lookup(&self, principal: &PrincipalName) -> Result<PrincipalStoreEntry, CollabError> {
        self.principals.borrow().get(principal).cloned().ok_or(CollabError::NotFound)
    }
}

impl ReplayCache for Fixture {
    fn check_and_insert(
        &self,
        ctime: KerberosTime,
        cusec: u32,
        cname: &PrincipalName,
        crealm: &Realm,
    ) -> Result<bool, CollabError> {
        let key = (ctime.as_millis(), cusec, cname.to_string(), crealm.clone());
        Ok(self.seen.borrow_mut().insert(key))
    }
}

impl MessageCodec for Fixture {
    fn decode_application_request(&self, bytes: &[u8]) -> Result<ApplicationRequest, CollabError> {
        self.ap_reqs.borrow().get(bytes).cloned().ok_or(CollabError::DecryptionFailed)
    }

    fn decode_authenticator(&self, bytes: &[u8]) -> Result<Authenticator, CollabError> {
        self.authenticators.borrow().get(bytes).cloned().ok_or(CollabError::DecryptionFailed)
    }

    fn decode_enc_ticket_part(&self, bytes: &[u8]) -> Result<EncTicketPart, CollabError> {
        self.ticket_parts.borrow().get(bytes).cloned().ok_or(CollabError::DecryptionFailed)
    }

    fn decode_authorization_data(&self, _bytes: &[u8]) -> Result<AuthorizationData, CollabError> {
        Ok(Vec::new())
    }

    fn encode_enc_ticket_part(&self, part: &EncTicketPart) -> Result<Vec<u8>, CollabError> {
        Ok(format!("{part:?}").into_bytes())
    }

    fn encode_enc_kdc_rep_part(&self, part: &EncKdcRepPart) -> Result<Vec<u8>, CollabError> {
        let token = self.fresh_token();
        self.rep_parts.borrow_mut().insert(token.clone(), part.clone());
        Ok(token)
    }
}
