//! Expiry Eviction Service - periodically removes expired profiles
//!
//! Reads never evict; this service owns the recurring pass that removes
//! profiles whose subscription has lapsed. It runs for the lifetime of the
//! host and is stopped through its cancellation token on shutdown.

use crate::profile_registry::ProfileRegistry;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Configuration for the expiry eviction service
#[derive(Debug, Clone)]
pub struct ExpiryEvictionConfig {
    /// How often to run an eviction pass
    pub eviction_interval: Duration,
    /// How often to log registry metrics
    pub metrics_interval: Duration,
}

impl Default for ExpiryEvictionConfig {
    fn default() -> Self {
        Self {
            eviction_interval: Duration::from_secs(60),
            metrics_interval: Duration::from_secs(300),
        }
    }
}

/// Recurring task that evicts expired profiles from a shared registry.
#[derive(Debug)]
pub struct ExpiryEvictionService {
    registry: Arc<ProfileRegistry>,
    config: ExpiryEvictionConfig,
    cancellation_token: CancellationToken,
}

impl ExpiryEvictionService {
    /// Create a new service over a shared registry.
    ///
    /// The cancellation token is supplied by the host so shutdown can be
    /// coordinated across every task in the process.
    pub fn new(
        registry: Arc<ProfileRegistry>,
        config: ExpiryEvictionConfig,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            registry,
            config,
            cancellation_token,
        }
    }

    /// Run eviction passes until the cancellation token fires.
    ///
    /// Ticks that fall due while a pass is still running are skipped rather
    /// than run back to back; a pass itself is a synchronous filter under
    /// the registry lock, so passes never overlap.
    pub async fn run(&self) {
        info!(
            "Starting expiry eviction service (pass every {:?})",
            self.config.eviction_interval
        );

        let mut eviction_interval = interval(self.config.eviction_interval);
        eviction_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut metrics_interval = interval(self.config.metrics_interval);
        metrics_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = self.cancellation_token.cancelled() => {
                    info!("Expiry eviction service cancelled");
                    break;
                }

                _ = eviction_interval.tick() => {
                    let today = Utc::now().date_naive();
                    let evicted = self.registry.evict_expired(today);
                    if evicted > 0 {
                        info!("Eviction pass removed {} expired profile(s)", evicted);
                    } else {
                        debug!("Eviction pass found no expired profiles");
                    }
                }

                _ = metrics_interval.tick() => {
                    let metrics = self.registry.metrics();
                    info!(
                        "Registry metrics: active={}, registered={}, rejected={}, evicted={}",
                        metrics.active_profiles,
                        metrics.total_registered,
                        metrics.total_rejected,
                        metrics.total_evicted
                    );
                }
            }
        }
    }

    /// Cancel the service; `run` returns promptly after this.
    pub fn shutdown(&self) {
        self.cancellation_token.cancel();
    }
}
