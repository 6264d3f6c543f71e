use thiserror::Error;

/// The RFC 4120 error codes this workspace's TGS core can actually produce. Deliberately a
/// closed, flat enum rather than a generic `{ code: i32, text: String }` — the whole point of the
/// Kerberos error taxonomy is that callers pattern-match on the variant, not the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KerberosError {
    #[error("KDC_ERR_BAD_PVNO")]
    BadPvno,
    #[error("KDC_ERR_ETYPE_NOSUPP")]
    EtypeNoSupp,
    #[error("KDC_ERR_PADATA_TYPE_NOSUPP")]
    PadataTypeNoSupp,
    #[error("KDC_ERR_S_PRINCIPAL_UNKNOWN")]
    SPrincipalUnknown,
    #[error("KDC_ERR_POLICY")]
    Policy,
    #[error("KDC_ERR_BADOPTION")]
    BadOption,
    #[error("KDC_ERR_CANNOT_POSTDATE")]
    CannotPostdate,
    #[error("KDC_ERR_NEVER_VALID")]
    NeverValid,
    #[error("KDC_ERR_TRTYPE_NOSUPP")]
    TrtypeNoSupp,
    #[error("KRB_AP_ERR_NOT_US")]
    ApErrNotUs,
    #[error("KRB_AP_ERR_INAPP_CKSUM")]
    ApErrInappCksum,
    #[error("KRB_AP_ERR_MODIFIED")]
    ApErrModified,
    #[error("KRB_AP_ERR_BADMATCH")]
    ApErrBadmatch,
    #[error("KRB_AP_ERR_SKEW")]
    ApErrSkew,
    #[error("KRB_AP_ERR_REPEAT")]
    ApErrRepeat,
    #[error("KRB_AP_ERR_BADADDR")]
    ApErrBadaddr,
    #[error("KRB_AP_ERR_TKT_EXPIRED")]
    ApErrTktExpired,
    #[error("KRB_AP_ERR_TKT_NYV")]
    ApErrTktNyv,
    /// Collaborator failure that doesn't map onto any RFC 4120 code (e.g. an I/O error surfaced
    /// by the principal store). Carries a message for logging only — never matched on by name.
    #[error("internal error: {0}")]
    Internal(String),
}
