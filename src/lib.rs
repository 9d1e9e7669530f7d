pub mod channel;
pub mod config;
mod config_file;
pub mod error;
pub mod format;
pub mod policy;

pub mod prelude {
    pub use crate::channel::{
        generate_default_channel, generate_default_peer, generate_endorsing_peer,
        generate_simple_channel, ChannelConfig, ChannelPeer, PeerUpsert,
    };
    pub use crate::error::{ChannelError, Result};
    pub use crate::format::ConfigFormat;
    pub use crate::policy::{
        ChannelEventService, ChannelPolices, ChannelSelection, QueryChannelConfig, RetryOpts,
    };
}
