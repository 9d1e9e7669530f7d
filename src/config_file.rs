//! Config-file (YAML) shape of [`ChannelConfig`].
//!
//! Top-level and peer keys match the interchange names. The nested policy records
//! only tag a few fields for the config file; every other field is written under its
//! lowercased field name (`maxtargets`, `querychannelconfig`, ...). Reading also
//! accepts the interchange key and the bare field name.
use serde::{Deserialize, Serialize};

use crate::channel::{ChannelConfig, ChannelPeer};
use crate::policy::{
    ChannelEventService, ChannelPolices, ChannelSelection, QueryChannelConfig, RetryOpts,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct FileChannel {
    #[serde(rename = "key", alias = "Key", default)]
    key: String,
    #[serde(
        rename = "orderers",
        alias = "Orderers",
        default,
        deserialize_with = "crate::channel::null_as_empty"
    )]
    orderers: Vec<String>,
    #[serde(
        rename = "peers",
        alias = "Peers",
        default,
        deserialize_with = "crate::channel::null_as_empty"
    )]
    peers: Vec<ChannelPeer>,
    #[serde(rename = "polices", alias = "Polices", default)]
    polices: Option<FilePolices>,
    #[serde(rename = "selection", alias = "Selection", default)]
    selection: Option<FileSelection>,
    #[serde(
        rename = "eventService",
        alias = "EventService",
        alias = "eventservice",
        default
    )]
    event_service: Option<FileEventService>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FileRetry {
    #[serde(rename = "attempts", alias = "Attempts", default)]
    attempts: i64,
    #[serde(
        rename = "initialBackoff",
        alias = "InitialBackoff",
        alias = "initialbackoff",
        default
    )]
    initial_backoff: String,
    #[serde(rename = "maxBackoff", alias = "MaxBackoff", alias = "maxbackoff", default)]
    max_backoff: String,
    #[serde(
        rename = "backoffFactor",
        alias = "BackoffFactor",
        alias = "backofffactor",
        default
    )]
    backoff_factor: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct FileQuery {
    #[serde(
        rename = "minResponses",
        alias = "MinResponses",
        alias = "minresponses",
        default
    )]
    min_responses: i64,
    #[serde(rename = "maxtargets", alias = "maxTargets", alias = "MaxTargets", default)]
    max_targets: i64,
    #[serde(rename = "retryopts", alias = "retryOpts", alias = "RetryOpts", default)]
    retry_opts: Option<FileRetry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FilePolices {
    #[serde(
        rename = "querychannelconfig",
        alias = "queryChannelConfig",
        alias = "QueryChannelConfig",
        default
    )]
    query_channel_config: Option<FileQuery>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FileSelection {
    #[serde(rename = "sortingstrategy", alias = "SortingStrategy", default)]
    sorting_strategy: String,
    #[serde(rename = "balancer", alias = "Balancer", default)]
    balancer: String,
    #[serde(
        rename = "blockheightlagthreshold",
        alias = "BlockHeightLagThreshold",
        default
    )]
    block_height_lag_threshold: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct FileEventService {
    #[serde(
        rename = "resolverstrategy",
        alias = "resolverStrategy",
        alias = "ResolverStrategy",
        default
    )]
    resolver_strategy: String,
    #[serde(
        rename = "minblockheightresolvermode",
        alias = "minBlockHeightResolverMode",
        alias = "MinBlockHeightResolverMode",
        default
    )]
    min_block_height_resolver_mode: String,
    #[serde(
        rename = "blockheightlagthreshold",
        alias = "blockHeightLagThreshold",
        alias = "BlockHeightLagThreshold",
        default
    )]
    block_height_lag_threshold: i64,
    #[serde(
        rename = "reconnectblockheightlagthreshold",
        alias = "reconnectBlockHeightLagThreshold",
        alias = "ReconnectBlockHeightLagThreshold",
        default
    )]
    reconnect_block_height_lag_threshold: i64,
    #[serde(
        rename = "peermonitor",
        alias = "peerMonitor",
        alias = "PeerMonitor",
        default
    )]
    peer_monitor: String,
    #[serde(
        rename = "peermonitorperiod",
        alias = "peerMonitorPeriod",
        alias = "PeerMonitorPeriod",
        default
    )]
    peer_monitor_period: String,
}

impl From<&ChannelConfig> for FileChannel {
    fn from(c: &ChannelConfig) -> Self {
        Self {
            key: c.key.clone(),
            orderers: c.orderers.clone(),
            peers: c.peers.clone(),
            polices: c.polices.as_ref().map(|p| FilePolices {
                query_channel_config: p.query_channel_config.as_ref().map(|q| FileQuery {
                    min_responses: q.min_responses,
                    max_targets: q.max_targets,
                    retry_opts: q.retry_opts.as_ref().map(|r| FileRetry {
                        attempts: r.attempts,
                        initial_backoff: r.initial_backoff.clone(),
                        max_backoff: r.max_backoff.clone(),
                        backoff_factor: r.backoff_factor.clone(),
                    }),
                }),
            }),
            selection: c.selection.as_ref().map(|s| FileSelection {
                sorting_strategy: s.sorting_strategy.clone(),
                balancer: s.balancer.clone(),
                block_height_lag_threshold: s.block_height_lag_threshold,
            }),
            event_service: c.event_service.as_ref().map(|e| FileEventService {
                resolver_strategy: e.resolver_strategy.clone(),
                min_block_height_resolver_mode: e.min_block_height_resolver_mode.clone(),
                block_height_lag_threshold: e.block_height_lag_threshold,
                reconnect_block_height_lag_threshold: e.reconnect_block_height_lag_threshold,
                peer_monitor: e.peer_monitor.clone(),
                peer_monitor_period: e.peer_monitor_period.clone(),
            }),
        }
    }
}

impl From<FileChannel> for ChannelConfig {
    fn from(f: FileChannel) -> Self {
        Self {
            key: f.key,
            orderers: f.orderers,
            peers: f.peers,
            polices: f.polices.map(|p| ChannelPolices {
                query_channel_config: p.query_channel_config.map(|q| QueryChannelConfig {
                    min_responses: q.min_responses,
                    max_targets: q.max_targets,
                    retry_opts: q.retry_opts.map(|r| RetryOpts {
                        attempts: r.attempts,
                        initial_backoff: r.initial_backoff,
                        max_backoff: r.max_backoff,
                        backoff_factor: r.backoff_factor,
                    }),
                }),
            }),
            selection: f.selection.map(|s| ChannelSelection {
                sorting_strategy: s.sorting_strategy,
                balancer: s.balancer,
                block_height_lag_threshold: s.block_height_lag_threshold,
            }),
            event_service: f.event_service.map(|e| ChannelEventService {
                resolver_strategy: e.resolver_strategy,
                min_block_height_resolver_mode: e.min_block_height_resolver_mode,
                block_height_lag_threshold: e.block_height_lag_threshold,
                reconnect_block_height_lag_threshold: e.reconnect_block_height_lag_threshold,
                peer_monitor: e.peer_monitor,
                peer_monitor_period: e.peer_monitor_period,
            }),
        }
    }
}
