use std::fmt;

/// [RFC 4120 5.2.3](https://www.rfc-editor.org/rfc/rfc4120.txt)
///
/// ```not_rust
/// KerberosTime    ::= GeneralizedTime -- with no fractional seconds
/// ```
///
/// Represented here as milliseconds since the Unix epoch rather than a `GeneralizedTime` string,
/// since the ASN.1 encoding is the external codec's concern. `INFINITY` stands in for the
/// "indefinite" value the protocol uses for unbounded `till`/`rtime` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct KerberosTime(i64);

impl KerberosTime {
    pub const INFINITY: KerberosTime = KerberosTime(i64::MAX);
    pub const ZERO: KerberosTime = KerberosTime(0);

    pub const fn from_millis(millis: i64) -> Self {
        KerberosTime(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `|self - other| <= skew`, saturating so neither side can wrap.
    pub fn is_in_clock_skew_of(self, other: KerberosTime, skew: std::time::Duration) -> bool {
        let skew_millis = i64::try_from(skew.as_millis()).unwrap_or(i64::MAX);
        let diff = self.0.saturating_sub(other.0).saturating_abs();
        diff <= skew_millis
    }

    pub fn saturating_add(self, duration: std::time::Duration) -> Self {
        let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        KerberosTime(self.0.saturating_add(millis))
    }

    pub fn saturating_sub(self, other: KerberosTime) -> std::time::Duration {
        let diff = self.0.saturating_sub(other.0).max(0);
        std::time::Duration::from_millis(diff.unsigned_abs())
    }

    pub fn min(self, other: KerberosTime) -> KerberosTime {
        std::cmp::min(self, other)
    }
}

impl fmt::Display for KerberosTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INFINITY {
            f.write_str("INFINITY")
        } else {
            write!(f, "{}ms", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn skew_is_symmetric() {
        let now = KerberosTime::from_millis(10_000);
        let past = KerberosTime::from_millis(9_000);
        let skew = Duration::from_secs(2);
        assert!(now.is_in_clock_skew_of(past, skew));
        assert!(past.is_in_clock_skew_of(now, skew));
    }

    #[test]
    fn skew_rejects_out_of_bounds() {
        let now = KerberosTime::from_millis(10_000);
        let past = KerberosTime::from_millis(1_000);
        assert!(!now.is_in_clock_skew_of(past, Duration::from_secs(2)));
    }

    #[test]
    fn infinity_never_overflows() {
        let t = KerberosTime::INFINITY;
        assert_eq!(t.saturating_add(Duration::from_secs(1)), KerberosTime::INFINITY);
    }

    #[test]
    fn min_picks_the_earlier_time() {
        let a = KerberosTime::from_millis(5);
        let b = KerberosTime::from_millis(10);
        assert_eq!(a.min(b), a);
        assert_eq!(KerberosTime::INFINITY.min(b), b);
    }

    proptest::proptest! {
        #[test]
        fn saturating_add_never_panics(base in i64::MIN..i64::MAX, secs in 0u64..1_000_000_000) {
            let t = KerberosTime::from_millis(base);
            let _ = t.saturating_add(std::time::Duration::from_secs(secs));
        }
    }
}
