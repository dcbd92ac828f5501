//! Shared cache of generated light curves
//!
//! Keyed on the exact bit pattern of the parameters. Each key owns a
//! `OnceLock`, so concurrent requests for the same configuration wait on a
//! single computation instead of duplicating it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use super::curve::{LightCurve, LightCurvePoint, generate_unchecked};
use crate::error::TransitResult;
use crate::params::SimulationParameters;

type Slot = Arc<OnceLock<Arc<LightCurve>>>;

/// Memoizes light curves per parameter bundle
#[derive(Debug, Default)]
pub struct CurveCache {
    slots: Mutex<HashMap<[u64; 5], Slot>>,
    /// Entry cap; the cache is flushed when a new key would exceed it
    max_entries: Option<usize>,
}

impl CurveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding at most `max_entries` configurations
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            slots: Mutex::default(),
            max_entries: Some(max_entries.max(1)),
        }
    }

    /// Return the cached curve for `params`, generating it on first request
    ///
    /// Invalid parameters are rejected up front and never occupy a slot.
    pub fn get_or_generate(&self, params: &SimulationParameters) -> TransitResult<Arc<LightCurve>> {
        params.validate()?;

        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            let key = params.cache_key();
            if let Some(max) = self.max_entries {
                if slots.len() >= max && !slots.contains_key(&key) {
                    log::debug!("Curve cache full ({max} entries), flushing");
                    slots.clear();
                }
            }
            Arc::clone(slots.entry(key).or_default())
        };

        // Map lock is released; only callers of this key block here
        let curve = slot.get_or_init(|| {
            log::debug!("Cache miss, generating {} frames", params.step_count);
            Arc::new(generate_unchecked(params))
        });
        Ok(Arc::clone(curve))
    }

    /// Points up to and including `frame`, reusing the cached curve
    ///
    /// Lets an animation ask for its history frame by frame while the curve
    /// itself is generated once.
    pub fn history(
        &self,
        params: &SimulationParameters,
        frame: u32,
    ) -> TransitResult<Vec<LightCurvePoint>> {
        let curve = self.get_or_generate(params)?;
        Ok(curve.history(frame)?.to_vec())
    }

    /// Whether a finished curve exists for `params`
    pub fn contains(&self, params: &SimulationParameters) -> bool {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .get(&params.cache_key())
            .is_some_and(|slot| slot.get().is_some())
    }

    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}
