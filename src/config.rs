// Defaults filled in by `generate_default_channel`; simple channels leave every policy unset.
use crate::policy::{
    ChannelEventService, ChannelPolices, ChannelSelection, QueryChannelConfig, RetryOpts,
};

pub const DEFAULT_MIN_RESPONSES: i64 = 1;
pub const DEFAULT_MAX_TARGETS: i64 = 1;

pub const DEFAULT_RETRY_ATTEMPTS: i64 = 5;
pub const DEFAULT_INITIAL_BACKOFF: &str = "500ms";
pub const DEFAULT_MAX_BACKOFF: &str = "5s";
pub const DEFAULT_BACKOFF_FACTOR: &str = "2.0";

pub const DEFAULT_SORTING_STRATEGY: &str = "BlockHeightPriority";
pub const DEFAULT_BALANCER: &str = "RoundRobin";
pub const DEFAULT_SELECTION_LAG_THRESHOLD: i64 = 5;

pub const DEFAULT_RESOLVER_STRATEGY: &str = "PreferOrg";
pub const DEFAULT_MIN_BLOCK_HEIGHT_RESOLVER_MODE: &str = "ResolveByThreshold";
pub const DEFAULT_EVENT_LAG_THRESHOLD: i64 = 5;
pub const DEFAULT_RECONNECT_LAG_THRESHOLD: i64 = 10;
pub const DEFAULT_PEER_MONITOR: &str = "Enabled";
pub const DEFAULT_PEER_MONITOR_PERIOD: &str = "5s";

impl Default for RetryOpts {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_RETRY_ATTEMPTS,
            initial_backoff: DEFAULT_INITIAL_BACKOFF.to_string(),
            max_backoff: DEFAULT_MAX_BACKOFF.to_string(),
            backoff_factor: DEFAULT_BACKOFF_FACTOR.to_string(),
        }
    }
}

impl Default for QueryChannelConfig {
    fn default() -> Self {
        Self {
            min_responses: DEFAULT_MIN_RESPONSES,
            max_targets: DEFAULT_MAX_TARGETS,
            retry_opts: Some(RetryOpts::default()),
        }
    }
}

impl Default for ChannelPolices {
    fn default() -> Self {
        Self {
            query_channel_config: Some(QueryChannelConfig::default()),
        }
    }
}

impl Default for ChannelSelection {
    fn default() -> Self {
        Self {
            sorting_strategy: DEFAULT_SORTING_STRATEGY.to_string(),
            balancer: DEFAULT_BALANCER.to_string(),
            block_height_lag_threshold: DEFAULT_SELECTION_LAG_THRESHOLD,
        }
    }
}

impl Default for ChannelEventService {
    fn default() -> Self {
        Self {
            resolver_strategy: DEFAULT_RESOLVER_STRATEGY.to_string(),
            min_block_height_resolver_mode: DEFAULT_MIN_BLOCK_HEIGHT_RESOLVER_MODE.to_string(),
            block_height_lag_threshold: DEFAULT_EVENT_LAG_THRESHOLD,
            reconnect_block_height_lag_threshold: DEFAULT_RECONNECT_LAG_THRESHOLD,
            peer_monitor: DEFAULT_PEER_MONITOR.to_string(),
            peer_monitor_period: DEFAULT_PEER_MONITOR_PERIOD.to_string(),
        }
    }
}
