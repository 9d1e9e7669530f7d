use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

use crate::error::{ChannelError, Result};
use crate::policy::{ChannelEventService, ChannelPolices, ChannelSelection};

/// A peer's membership in a channel and the roles it serves there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelPeer {
    #[serde(rename = "key", alias = "Key", default)]
    pub key: String,
    #[serde(rename = "endorsingPeer", alias = "EndorsingPeer", default)]
    pub endorsing_peer: bool,
    #[serde(rename = "chaincodeQuery", alias = "ChaincodeQuery", default)]
    pub chaincode_query: bool,
    #[serde(rename = "ledgerQuery", alias = "LedgerQuery", default)]
    pub ledger_query: bool,
    #[serde(rename = "eventSource", alias = "EventSource", default)]
    pub event_source: bool,
}

impl ChannelPeer {
    /// OR every capability flag of `other` into `self`. Flags are never cleared.
    pub fn merge(&mut self, other: &ChannelPeer) {
        self.endorsing_peer |= other.endorsing_peer;
        self.chaincode_query |= other.chaincode_query;
        self.ledger_query |= other.ledger_query;
        self.event_source |= other.event_source;
    }
}

/// Which branch `ChannelConfig::add_peer` took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerUpsert {
    /// No peer had this key; it was appended.
    Inserted,
    /// Flags were OR-ed into the peer already holding this key.
    Merged,
}

/// A named channel: its orderers, member peers and optional policies.
///
/// `peers` holds at most one entry per key as long as it is only grown through
/// [`ChannelConfig::add_peer`]; configs assembled by hand or decoded from a file
/// can be checked with [`ChannelConfig::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    #[serde(rename = "key", alias = "Key", default)]
    pub key: String,
    #[serde(
        rename = "orderers",
        alias = "Orderers",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub orderers: Vec<String>,
    #[serde(
        rename = "peers",
        alias = "Peers",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub peers: Vec<ChannelPeer>,
    #[serde(rename = "polices", alias = "Polices", default)]
    pub polices: Option<ChannelPolices>,
    #[serde(rename = "selection", alias = "Selection", default)]
    pub selection: Option<ChannelSelection>,
    #[serde(rename = "eventService", alias = "EventService", default)]
    pub event_service: Option<ChannelEventService>,
}

// A `null` sequence reads the same as a missing one.
pub(crate) fn null_as_empty<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Channel with every policy populated from the defaults in [`crate::config`].
pub fn generate_default_channel(name: impl Into<String>) -> ChannelConfig {
    ChannelConfig {
        key: name.into(),
        orderers: Vec::new(),
        peers: Vec::new(),
        polices: Some(ChannelPolices::default()),
        selection: Some(ChannelSelection::default()),
        event_service: Some(ChannelEventService::default()),
    }
}

/// Channel with only a key; policies are left unset.
pub fn generate_simple_channel(name: impl Into<String>) -> ChannelConfig {
    ChannelConfig {
        key: name.into(),
        ..ChannelConfig::default()
    }
}

/// Non-endorsing peer that serves chaincode queries, ledger queries and events.
pub fn generate_default_peer(key: impl Into<String>) -> ChannelPeer {
    ChannelPeer {
        key: key.into(),
        endorsing_peer: false,
        chaincode_query: true,
        ledger_query: true,
        event_source: true,
    }
}

/// Same as [`generate_default_peer`], but endorsing.
pub fn generate_endorsing_peer(key: impl Into<String>) -> ChannelPeer {
    ChannelPeer {
        endorsing_peer: true,
        ..generate_default_peer(key)
    }
}

impl ChannelConfig {
    /// Upsert by key: an existing peer keeps its position and gains `peer`'s flags,
    /// an unknown one is appended.
    pub fn add_peer(&mut self, peer: ChannelPeer) -> PeerUpsert {
        tracing::debug!(channel = %self.key, peers = ?self.peers, "adding channel peer");
        if let Some(existing) = self.peers.iter_mut().find(|p| p.key == peer.key) {
            existing.merge(&peer);
            tracing::trace!(channel = %self.key, peer = %existing.key, "merged peer capabilities");
            return PeerUpsert::Merged;
        }
        tracing::trace!(channel = %self.key, peer = %peer.key, "appended peer");
        self.peers.push(peer);
        PeerUpsert::Inserted
    }

    /// Appends unconditionally; duplicates are kept.
    pub fn add_orderer(&mut self, orderer: impl Into<String>) {
        self.orderers.push(orderer.into());
    }

    pub fn peer(&self, key: &str) -> Option<&ChannelPeer> {
        self.peers.iter().find(|p| p.key == key)
    }

    pub fn endorsing_peers(&self) -> impl Iterator<Item = &ChannelPeer> {
        self.peers.iter().filter(|p| p.endorsing_peer)
    }

    /// No policy record is set, as produced by [`generate_simple_channel`].
    pub fn is_simple(&self) -> bool {
        self.polices.is_none() && self.selection.is_none() && self.event_service.is_none()
    }

    /// Checks the channel key and peer-key uniqueness.
    pub fn validate(&self) -> Result {
        if self.key.is_empty() {
            tracing::warn!("channel config has an empty key");
            return Err(ChannelError::EmptyKey);
        }
        let mut seen = HashSet::with_capacity(self.peers.len());
        for peer in &self.peers {
            if peer.key.is_empty() {
                tracing::warn!(channel = %self.key, "channel peer has an empty key");
                return Err(ChannelError::EmptyPeerKey);
            }
            if !seen.insert(peer.key.as_str()) {
                tracing::warn!(channel = %self.key, peer = %peer.key, "duplicate channel peer");
                return Err(ChannelError::DuplicatePeer(peer.key.clone()));
            }
        }
        Ok(())
    }
}
