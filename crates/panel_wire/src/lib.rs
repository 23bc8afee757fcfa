//! Panel wire: content codec and message envelopes for the page/host
//! boundary.
mod candidates;
mod codec;
mod inbound;
mod outbound;
mod types;

pub use candidates::{parse_candidate_list, CandidateRecord};
pub use codec::{decode, encode, encode_for, CodecError};
pub use inbound::{parse_host_message, HostCommand};
pub use outbound::{notify_message, result_message, OutboundPayload};
pub use types::{ContentEnvelope, ContentKind, ContentType, WireError};
