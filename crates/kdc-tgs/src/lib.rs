//! The Kerberos V5 Ticket-Granting Service state machine: ten ordered stages taking a decoded
//! `TGS-REQ` to a `TGS-REP`, per [RFC 4120](https://www.rfc-editor.org/rfc/rfc4120.txt) section 3.3.

mod collaborators;
mod config;
mod context;
mod execute;
mod flag_algebra;
mod stages;
mod time_algebra;

pub use collaborators::{CipherTextHandler, ChecksumHandler, CollabError, MessageCodec, PrincipalStore, RandomKeyFactory, ReplayCache};
pub use config::TgsConfig;
pub use context::{TgsContext, TgsDeps};
pub use execute::execute;
