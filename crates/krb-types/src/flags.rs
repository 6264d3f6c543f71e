use bitflags::bitflags;

bitflags! {
    /// [RFC 4120 5.3](https://www.rfc-editor.org/rfc/rfc4120.txt) — `TicketFlags`.
    ///
    /// Independent bits; a ticket may carry any combination.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
    pub struct TicketFlags: u32 {
        const RESERVED      = 1 << 0;
        const FORWARDABLE   = 1 << 1;
        const FORWARDED     = 1 << 2;
        const PROXIABLE     = 1 << 3;
        const PROXY         = 1 << 4;
        const MAY_POSTDATE  = 1 << 5;
        const POSTDATED     = 1 << 6;
        const INVALID       = 1 << 7;
        const RENEWABLE     = 1 << 8;
        const INITIAL       = 1 << 9;
        const PRE_AUTHENT   = 1 << 10;
        const HW_AUTHENT    = 1 << 11;
    }
}

bitflags! {
    /// [RFC 4120 5.4.1](https://www.rfc-editor.org/rfc/rfc4120.txt) — `KDCOptions`.
    ///
    /// The `RESERVED_*` bits form the reject set: any KDC that sees one set must refuse the
    /// request with `KDC_ERR_BADOPTION`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
    pub struct KdcOptions: u32 {
        const RESERVED          = 1 << 0;
        const FORWARDABLE       = 1 << 1;
        const FORWARDED         = 1 << 2;
        const PROXIABLE         = 1 << 3;
        const PROXY             = 1 << 4;
        const ALLOW_POSTDATE    = 1 << 5;
        const POSTDATED         = 1 << 6;
        const RESERVED_7        = 1 << 7;
        const RENEWABLE         = 1 << 8;
        const RESERVED_9        = 1 << 9;
        const RESERVED_10       = 1 << 10;
        const RESERVED_11       = 1 << 11;
        const RESERVED_12       = 1 << 12;
        const RESERVED_13       = 1 << 13;
        const RESERVED_14       = 1 << 14;
        const RENEWABLE_OK      = 1 << 15;
        const ENC_TKT_IN_SKEY   = 1 << 16;
        const RESERVED_17       = 1 << 17;
        const RENEW             = 1 << 18;
        const VALIDATE          = 1 << 19;
    }
}

impl KdcOptions {
    /// The RESERVED-* bits this protocol revision never assigns a meaning to.
    pub const RESERVED_SET: KdcOptions = KdcOptions::RESERVED
        .union(KdcOptions::RESERVED_7)
        .union(KdcOptions::RESERVED_9)
        .union(KdcOptions::RESERVED_10)
        .union(KdcOptions::RESERVED_11)
        .union(KdcOptions::RESERVED_12)
        .union(KdcOptions::RESERVED_13)
        .union(KdcOptions::RESERVED_14)
        .union(KdcOptions::RESERVED_17);

    pub fn has_any_reserved(self) -> bool {
        self.intersects(Self::RESERVED_SET)
    }
}
