//! Courier registry and market shares.
//!
//! The registry fixes the courier iteration order for the whole run: codes
//! sorted ascending, `CourierId` = position in that order.  Relying on a hash
//! map's incidental ordering here would make parcel IDs depend on hasher
//! state, so the order is made explicit once and everything downstream
//! iterates `0..len()`.

use pg_core::CourierId;

use crate::{CarrierError, CarrierResult};

// ── CourierRegistry ───────────────────────────────────────────────────────────

/// Courier codes in sorted order, addressed by `CourierId`.
#[derive(Debug)]
pub struct CourierRegistry {
    codes: Vec<String>,
}

impl CourierRegistry {
    /// Build from the market-share table's courier codes.
    pub fn new(mut codes: Vec<String>) -> CourierRegistry {
        codes.sort_unstable();
        codes.dedup();
        CourierRegistry { codes }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn code(&self, id: CourierId) -> &str {
        &self.codes[id.0 as usize]
    }

    pub fn id_of(&self, code: &str) -> Option<CourierId> {
        self.codes
            .binary_search_by(|c| c.as_str().cmp(code))
            .ok()
            .map(|i| CourierId(i as u16))
    }

    /// All courier IDs in registry order.
    pub fn ids(&self) -> impl Iterator<Item = CourierId> {
        (0..self.codes.len() as u16).map(CourierId)
    }
}

// ── MarketShares ──────────────────────────────────────────────────────────────

/// Per-courier market share, aligned with the registry order.
///
/// Shares must each lie in [0, 1] and sum to at most 1 (a remainder is
/// delivered by couriers outside the model).
#[derive(Debug)]
pub struct MarketShares {
    shares: Vec<f64>,
}

impl MarketShares {
    /// Share-sum tolerance for float noise in the input table.
    const SUM_TOLERANCE: f64 = 1e-6;

    /// Build from `(code, share)` pairs; the registry is derived from the
    /// same pairs, so every registry courier has a share.
    pub fn new(pairs: &[(String, f64)], registry: &CourierRegistry) -> CarrierResult<MarketShares> {
        let mut shares = vec![0.0; registry.len()];
        for (code, share) in pairs {
            if !(0.0..=1.0).contains(share) {
                return Err(CarrierError::MalformedShares(format!(
                    "share {share} of courier {code} outside [0, 1]"
                )));
            }
            let id = registry.id_of(code).ok_or_else(|| {
                CarrierError::MalformedShares(format!("courier {code} not in registry"))
            })?;
            shares[id.0 as usize] = *share;
        }

        let total: f64 = shares.iter().sum();
        if total > 1.0 + Self::SUM_TOLERANCE {
            return Err(CarrierError::MalformedShares(format!(
                "market shares sum to {total}, expected at most 1"
            )));
        }

        Ok(MarketShares { shares })
    }

    #[inline]
    pub fn share(&self, id: CourierId) -> f64 {
        self.shares[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}
