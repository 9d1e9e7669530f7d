//! Per-channel policy records: query quorum with retry, peer selection, event service.
//!
//! Strategy names and duration strings (`"500ms"`, `"5s"`) are carried as opaque text;
//! whoever executes the policy is responsible for interpreting them.
//!
//! Keys follow the interchange names. Where the config-file format declares no key of
//! its own, decoding also accepts the bare field name and its lowercased form.
use serde::{Deserialize, Serialize};

/// Retry policy handed to the query executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryOpts {
    #[serde(rename = "attempts", alias = "Attempts", default)]
    pub attempts: i64,
    #[serde(
        rename = "initialBackoff",
        alias = "InitialBackoff",
        alias = "initialbackoff",
        default
    )]
    pub initial_backoff: String,
    #[serde(rename = "maxBackoff", alias = "MaxBackoff", alias = "maxbackoff", default)]
    pub max_backoff: String,
    #[serde(
        rename = "backoffFactor",
        alias = "BackoffFactor",
        alias = "backofffactor",
        default
    )]
    pub backoff_factor: String,
}

/// Quorum policy for channel queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryChannelConfig {
    #[serde(
        rename = "minResponses",
        alias = "MinResponses",
        alias = "minresponses",
        default
    )]
    pub min_responses: i64,
    #[serde(rename = "maxTargets", alias = "MaxTargets", alias = "maxtargets", default)]
    pub max_targets: i64,
    #[serde(rename = "retryOpts", alias = "RetryOpts", alias = "retryopts", default)]
    pub retry_opts: Option<RetryOpts>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelPolices {
    #[serde(
        rename = "queryChannelConfig",
        alias = "QueryChannelConfig",
        alias = "querychannelconfig",
        default
    )]
    pub query_channel_config: Option<QueryChannelConfig>,
}

/// Peer selection policy. Its interchange keys are capitalised as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSelection {
    #[serde(rename = "SortingStrategy", alias = "sortingstrategy", default)]
    pub sorting_strategy: String,
    #[serde(rename = "Balancer", alias = "balancer", default)]
    pub balancer: String,
    #[serde(
        rename = "BlockHeightLagThreshold",
        alias = "blockheightlagthreshold",
        default
    )]
    pub block_height_lag_threshold: i64,
}

/// How event subscriptions pick and monitor their source peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelEventService {
    #[serde(
        rename = "resolverStrategy",
        alias = "ResolverStrategy",
        alias = "resolverstrategy",
        default
    )]
    pub resolver_strategy: String,
    #[serde(
        rename = "minBlockHeightResolverMode",
        alias = "MinBlockHeightResolverMode",
        alias = "minblockheightresolvermode",
        default
    )]
    pub min_block_height_resolver_mode: String,
    #[serde(
        rename = "blockHeightLagThreshold",
        alias = "BlockHeightLagThreshold",
        alias = "blockheightlagthreshold",
        default
    )]
    pub block_height_lag_threshold: i64,
    #[serde(
        rename = "reconnectBlockHeightLagThreshold",
        alias = "ReconnectBlockHeightLagThreshold",
        alias = "reconnectblockheightlagthreshold",
        default
    )]
    pub reconnect_block_height_lag_threshold: i64,
    #[serde(
        rename = "peerMonitor",
        alias = "PeerMonitor",
        alias = "peermonitor",
        default
    )]
    pub peer_monitor: String,
    #[serde(
        rename = "peerMonitorPeriod",
        alias = "PeerMonitorPeriod",
        alias = "peermonitorperiod",
        default
    )]
    pub peer_monitor_period: String,
}
