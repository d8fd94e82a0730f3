//! In-memory profile registry with expiry-based eviction

use crate::date_arithmetic::add_calendar_months;
use crate::profile::{Profile, ProfileInput};
use crate::profile_validation::{validate_submission, ProfileValidationError};
use chrono::{NaiveDate, Utc};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use tracing::{debug, info};

/// Lifetime counters for registry activity.
#[derive(Debug, Default)]
struct RegistryMetrics {
    total_registered: AtomicU64,
    total_rejected: AtomicU64,
    total_evicted: AtomicU64,
}

/// Snapshot of metrics for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryMetricsSnapshot {
    pub total_registered: u64,
    pub total_rejected: u64,
    pub total_evicted: u64,
    pub active_profiles: usize,
}

#[derive(Debug, Default)]
struct RegistryState {
    /// Active set, in registration order.
    profiles: Vec<Profile>,
    /// Count of profiles ever registered. Ids come from here, never from the
    /// length of the active set, so eviction can never cause id reuse.
    lifetime_registrations: u64,
}

/// Single source of truth for the active profile set.
///
/// Owns id assignment, validation, field derivation and expiry eviction.
/// Shared behind an `Arc` between the registering caller and the eviction
/// task; every operation is synchronous and serialized by the inner lock, so
/// no reader observes a partially updated set.
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    state: RwLock<RegistryState>,
    metrics: RegistryMetrics,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a submission against the current UTC date.
    pub fn register(&self, input: &ProfileInput) -> Result<Profile, ProfileValidationError> {
        self.register_at(input, Utc::now().date_naive())
    }

    /// Register a submission as of an explicit date.
    ///
    /// Validation short-circuits on the first failing check. A rejected
    /// submission leaves the active set and the id counter untouched, so the
    /// next successful registration still gets the next consecutive id.
    pub fn register_at(
        &self,
        input: &ProfileInput,
        today: NaiveDate,
    ) -> Result<Profile, ProfileValidationError> {
        let submission = match validate_submission(input, today) {
            Ok(submission) => submission,
            Err(e) => {
                self.metrics
                    .total_rejected
                    .fetch_add(1, AtomicOrdering::Relaxed);
                return Err(e);
            }
        };

        let mut state = self.state.write();
        state.lifetime_registrations += 1;

        let profile = Profile {
            id: state.lifetime_registrations,
            name: submission.name,
            gender: submission.gender,
            age: submission.age,
            bio: submission.bio,
            phone: submission.phone,
            registered_on: today,
            subscription_expiry: add_calendar_months(today, submission.subscription_months),
        };

        state.profiles.push(profile.clone());
        drop(state);

        self.metrics
            .total_registered
            .fetch_add(1, AtomicOrdering::Relaxed);
        info!(
            "Registered profile #{} ({}, age {}), subscription until {}",
            profile.id, profile.name, profile.age, profile.subscription_expiry
        );

        Ok(profile)
    }

    /// Remove every profile whose subscription expired strictly before `now`.
    ///
    /// A profile expiring on `now` itself stays visible through that day.
    /// Survivors keep their registration order and the id counter is not
    /// affected, so the pass is idempotent. Returns the number removed.
    pub fn evict_expired(&self, now: NaiveDate) -> usize {
        let mut state = self.state.write();
        let before = state.profiles.len();
        state
            .profiles
            .retain(|profile| profile.subscription_expiry >= now);
        let evicted = before - state.profiles.len();
        drop(state);

        if evicted > 0 {
            self.metrics
                .total_evicted
                .fetch_add(evicted as u64, AtomicOrdering::Relaxed);
            debug!("Evicted {} expired profile(s)", evicted);
        }

        evicted
    }

    /// Snapshot of the active set in registration order.
    ///
    /// A pure read: profiles whose expiry has already passed remain visible
    /// until the next eviction pass runs.
    pub fn list(&self) -> Vec<Profile> {
        self.state.read().profiles.clone()
    }

    /// Number of profiles currently in the active set.
    pub fn active_count(&self) -> usize {
        self.state.read().profiles.len()
    }

    /// Get current metrics snapshot
    pub fn metrics(&self) -> RegistryMetricsSnapshot {
        RegistryMetricsSnapshot {
            total_registered: self.metrics.total_registered.load(AtomicOrdering::Relaxed),
            total_rejected: self.metrics.total_rejected.load(AtomicOrdering::Relaxed),
            total_evicted: self.metrics.total_evicted.load(AtomicOrdering::Relaxed),
            active_profiles: self.active_count(),
        }
    }
}
