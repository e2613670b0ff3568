//! Bidirectional mapping between external zone numbers and skim positions.
//!
//! # Position assignment
//!
//! Detailed zones get positions `1..=N` in ascending zone-number order.
//! Supra-zones follow at `N+1..=N+S` with synthesized numbers
//! `offset + 1 ..= offset + S`.  Position assignment is fixed for the run's
//! lifetime; every component that touches the skim matrix resolves positions
//! through this index.

use pg_core::{MatrixPos, ZoneNum};
use rustc_hash::FxHashMap;

use crate::zone::ZoneTable;
use crate::{ZoneError, ZoneResult};

/// External zone number ↔ dense 1-based matrix position.
#[derive(Debug)]
pub struct ZoneIndex {
    /// Zone number at each position, indexed by `MatrixPos::index()`.
    nums: Vec<ZoneNum>,
    /// Inverse of `nums`.
    positions: FxHashMap<ZoneNum, MatrixPos>,
    /// How many leading positions are detailed zones.
    n_detail: usize,
}

impl ZoneIndex {
    /// Build from the sorted zone table plus the configured supra-zone scheme.
    pub fn build(zones: &ZoneTable, supra_count: u32, supra_offset: u32) -> ZoneIndex {
        let n_detail = zones.len();
        let mut nums = Vec::with_capacity(n_detail + supra_count as usize);
        nums.extend(zones.nums());
        for i in 0..supra_count {
            nums.push(ZoneNum(supra_offset + i + 1));
        }

        let positions = nums
            .iter()
            .enumerate()
            .map(|(i, &num)| (num, MatrixPos::from_index(i)))
            .collect();

        ZoneIndex { nums, positions, n_detail }
    }

    /// Total positions (detailed + supra).
    pub fn len(&self) -> usize {
        self.nums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nums.is_empty()
    }

    /// Number of detailed zones (positions `1..=n_detail()`).
    pub fn n_detail(&self) -> usize {
        self.n_detail
    }

    /// Matrix position of an external zone number.
    pub fn position_of(&self, num: ZoneNum) -> ZoneResult<MatrixPos> {
        self.positions
            .get(&num)
            .copied()
            .ok_or(ZoneError::UnknownZone(num))
    }

    /// External zone number at a matrix position.
    pub fn zone_of(&self, pos: MatrixPos) -> ZoneResult<ZoneNum> {
        self.nums
            .get(pos.index())
            .copied()
            .ok_or(ZoneError::PositionOutOfRange(pos.0, self.nums.len() as u32))
    }

    /// `true` if the position belongs to a supra-zone.
    pub fn is_supra(&self, pos: MatrixPos) -> bool {
        pos.index() >= self.n_detail
    }
}
