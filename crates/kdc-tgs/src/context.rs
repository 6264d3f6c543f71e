use krb_types::{
    Authenticator, EncryptionKey, EncryptionType, HostAddress, KdcReq, KerberosTime, PrincipalStoreEntry, Ticket, TgsRep,
};

use crate::collaborators::{ChecksumHandler, CipherTextHandler, MessageCodec, PrincipalStore, RandomKeyFactory, ReplayCache};
use crate::config::TgsConfig;

/// The mutable builder threaded through the ten TGS stages. Request-scoped, owned exclusively by
/// one [`crate::execute`] call.
pub struct TgsContext {
    pub request: KdcReq,
    /// The KDC's notion of "now" for this request, supplied by the caller rather than read from
    /// the system clock by the core itself — keeps the pipeline a pure function of its inputs.
    pub now: KerberosTime,
    /// The network address the AP-REQ arrived from, if the transport exposes one.
    pub client_address: Option<HostAddress>,

    pub(crate) selected_etype: Option<EncryptionType>,
    pub(crate) ap_req: Option<krb_types::ApplicationRequest>,
    pub(crate) tgt_server_entry: Option<PrincipalStoreEntry>,
    pub(crate) tgt: Option<Ticket>,
    pub(crate) authenticator: Option<Authenticator>,
    pub(crate) requested_server_entry: Option<PrincipalStoreEntry>,
    pub(crate) new_session_key: Option<EncryptionKey>,
    pub(crate) new_ticket: Option<Ticket>,

    pub reply: Option<TgsRep>,
}

impl TgsContext {
    pub fn new(request: KdcReq, now: KerberosTime, client_address: Option<HostAddress>) -> Self {
        TgsContext {
            request,
            now,
            client_address,
            selected_etype: None,
            ap_req: None,
            tgt_server_entry: None,
            tgt: None,
            authenticator: None,
            requested_server_entry: None,
            new_session_key: None,
            new_ticket: None,
            reply: None,
        }
    }
}

/// The collaborator trait objects and configuration an `execute` call is run against. Borrowed
/// for the duration of the call; none of them are owned by the context.
pub struct TgsDeps<'a> {
    pub config: &'a TgsConfig,
    pub principal_store: &'a dyn PrincipalStore,
    pub replay_cache: &'a dyn ReplayCache,
    pub cipher: &'a dyn CipherTextHandler,
    pub checksum: &'a dyn ChecksumHandler,
    pub random_key_factory: &'a dyn RandomKeyFactory,
    pub codec: &'a dyn MessageCodec,
}
