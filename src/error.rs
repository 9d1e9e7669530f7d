//! Crate error type: a small hand-written enum, wrapping the codec and io errors it meets.
use std::{error::Error as StdError, fmt, io};

#[derive(Debug)]
pub enum ChannelError {
    EmptyKey,                  // channel key is ""
    EmptyPeerKey,              // some peer has key ""
    DuplicatePeer(String),     // two peers share this key
    UnsupportedFormat(String), // file extension not json/yaml/yml
    Io(io::Error),
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelError::EmptyKey => write!(f, "channel key is empty"),
            ChannelError::EmptyPeerKey => write!(f, "channel peer key is empty"),
            ChannelError::DuplicatePeer(k) => write!(f, "duplicate channel peer: {k}"),
            ChannelError::UnsupportedFormat(ext) => {
                write!(f, "unsupported channel config format: {ext}")
            }
            ChannelError::Io(e) => write!(f, "channel config io error: {e}"),
            ChannelError::Json(e) => write!(f, "channel config json error: {e}"),
            ChannelError::Yaml(e) => write!(f, "channel config yaml error: {e}"),
        }
    }
}

impl StdError for ChannelError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ChannelError::Io(e) => Some(e),
            ChannelError::Json(e) => Some(e),
            ChannelError::Yaml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ChannelError {
    fn from(err: io::Error) -> Self {
        ChannelError::Io(err)
    }
}

impl From<serde_json::Error> for ChannelError {
    fn from(err: serde_json::Error) -> Self {
        ChannelError::Json(err)
    }
}

impl From<serde_yaml::Error> for ChannelError {
    fn from(err: serde_yaml::Error) -> Self {
        ChannelError::Yaml(err)
    }
}

pub type Result<T = ()> = std::result::Result<T, ChannelError>;
