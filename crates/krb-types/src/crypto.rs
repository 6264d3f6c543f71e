use serde::{Deserialize, Serialize};

/// [RFC 3961 / RFC 4120 Section 8](https://www.rfc-editor.org/rfc/rfc4120.txt) — etype registry,
/// restricted to the values a modern KDC actually negotiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum EncryptionType {
    Des3CbcSha1Kd = 16,
    Aes128CtsHmacSha1_96 = 17,
    Aes256CtsHmacSha1_96 = 18,
    Aes128CtsHmacSha256_128 = 19,
    Aes256CtsHmacSha384_192 = 20,
    Rc4Hmac = 23,
}

impl EncryptionType {
    /// Expected raw key length in bytes, used to validate `EncryptionKey::key_value`.
    pub const fn key_length(self) -> usize {
        match self {
            EncryptionType::Des3CbcSha1Kd => 24,
            EncryptionType::Aes128CtsHmacSha1_96 | EncryptionType::Aes128CtsHmacSha256_128 => 16,
            EncryptionType::Aes256CtsHmacSha1_96 => 32,
            EncryptionType::Aes256CtsHmacSha384_192 => 32,
            EncryptionType::Rc4Hmac => 16,
        }
    }
}

/// [RFC 4120 5.2.9](https://www.rfc-editor.org/rfc/rfc4120.txt)
///
/// ```not_rust
/// EncryptionKey   ::= SEQUENCE {
///         keytype         [0] Int32,
///         keyvalue        [1] OCTET STRING
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionKey {
    pub etype: EncryptionType,
    pub kvno: u32,
    pub key_value: Vec<u8>,
}

impl EncryptionKey {
    pub fn new(etype: EncryptionType, kvno: u32, key_value: Vec<u8>) -> Self {
        EncryptionKey { etype, kvno, key_value }
    }

    pub fn has_consistent_length(&self) -> bool {
        self.key_value.len() == self.etype.key_length()
    }
}

/// [RFC 4120 5.2.9](https://www.rfc-editor.org/rfc/rfc4120.txt)
///
/// ```not_rust
/// EncryptedData   ::= SEQUENCE {
///         etype   [0] Int32,
///         kvno    [1] UInt32 OPTIONAL,
///         cipher  [2] OCTET STRING
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedData {
    pub etype: EncryptionType,
    pub kvno: Option<u32>,
    pub cipher: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_length_matches_etype() {
        let key = EncryptionKey::new(EncryptionType::Aes256CtsHmacSha1_96, 1, vec![0u8; 32]);
        assert!(key.has_consistent_length());
    }

    #[test]
    fn mismatched_key_length_is_detected() {
        let key = EncryptionKey::new(EncryptionType::Aes256CtsHmacSha1_96, 1, vec![0u8; 16]);
        assert!(!key.has_consistent_length());
    }
}
