use std::time::Duration;

use krb_types::{EncryptionType, PrincipalName, Realm};
use serde::{Deserialize, Serialize};

/// The configuration surface the TGS reads from. A plain `Deserialize`-able struct: loading it
/// from a file or environment, and swapping it atomically on reload, is the hosting service's
/// job, not this crate's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TgsConfig {
    pub primary_realm: Realm,
    pub service_principal: PrincipalName,
    /// Ordered preference list; stage 2 picks the first entry also offered by the client.
    pub encryption_types: Vec<EncryptionType>,
    #[serde(with = "duration_millis")]
    pub allowable_clock_skew: Duration,
    #[serde(with = "duration_millis")]
    pub max_ticket_lifetime: Duration,
    #[serde(with = "duration_millis")]
    pub max_renewable_lifetime: Duration,
    pub body_checksum_verified: bool,
    pub empty_addresses_allowed: bool,
    pub forwardable_allowed: bool,
    pub proxiable_allowed: bool,
    pub postdated_allowed: bool,
    pub renewable_allowed: bool,
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

impl TgsConfig {
    /// A permissive configuration used across this crate's test suites. Not gated behind
    /// `#[cfg(test)]` since the black-box scenarios in `tests/` link the library as an ordinary
    /// dependency and need it too.
    pub fn test_default() -> Self {
        TgsConfig {
            primary_realm: "EXAMPLE.COM".to_owned(),
            service_principal: PrincipalName::krbtgt("EXAMPLE.COM"),
            encryption_types: vec![EncryptionType::Aes256CtsHmacSha1_96],
            allowable_clock_skew: Duration::from_secs(5 * 60),
            max_ticket_lifetime: Duration::from_secs(8 * 60 * 60),
            max_renewable_lifetime: Duration::from_secs(7 * 24 * 60 * 60),
            body_checksum_verified: true,
            empty_addresses_allowed: true,
            forwardable_allowed: true,
            proxiable_allowed: true,
            postdated_allowed: true,
            renewable_allowed: true,
        }
    }
}
