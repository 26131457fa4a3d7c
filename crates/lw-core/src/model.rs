//! Wheel model - ordered prizes and the sector geometry derived from them

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};
use crate::prize::Prize;

/// Number of blank sectors shown before the host supplies prizes
pub const PLACEHOLDER_SECTORS: usize = 16;

/// Angle of the 12 o'clock pointer in canvas degrees (0° = 3 o'clock, clockwise)
pub const POINTER_ANGLE: f32 = -90.0;

/// Angular span of one sector in the wheel's unrotated frame (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorRange {
    pub start: f32,
    pub sweep: f32,
}

impl SectorRange {
    /// Exclusive end of the range
    pub fn end(&self) -> f32 {
        self.start + self.sweep
    }

    /// Angle halfway through the sweep
    pub fn center(&self) -> f32 {
        self.start + self.sweep / 2.0
    }

    pub fn contains(&self, angle: f32) -> bool {
        angle >= self.start && angle < self.end()
    }
}

/// Ordered prize sectors. Insertion order is visual order, clockwise, with
/// sector 0 centered under the pointer.
#[derive(Debug, Clone)]
pub struct WheelModel {
    prizes: Vec<Prize>,
    revision: u64,
}

impl WheelModel {
    /// Create a model from a non-empty prize list
    pub fn new(prizes: Vec<Prize>) -> WheelResult<Self> {
        if prizes.is_empty() {
            return Err(WheelError::InvalidModel);
        }
        Ok(Self { prizes, revision: 0 })
    }

    /// Replace every sector. An empty list is rejected and the model is left as is.
    pub fn set_prizes(&mut self, prizes: Vec<Prize>) -> WheelResult<()> {
        if prizes.is_empty() {
            log::warn!("Rejected empty prize list");
            return Err(WheelError::InvalidModel);
        }
        log::debug!("Wheel model replaced: {} sectors", prizes.len());
        self.prizes = prizes;
        self.revision = self.revision.wrapping_add(1);
        Ok(())
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn prize(&self, index: usize) -> WheelResult<&Prize> {
        self.prizes.get(index).ok_or(WheelError::IndexOutOfRange {
            index,
            len: self.prizes.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    /// Bumped on every accepted `set_prizes`; painters compare it to decide on a repaint
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Degrees covered by each sector
    pub fn sector_angle(&self) -> f32 {
        360.0 / self.prizes.len() as f32
    }

    /// Start angle of sector 0 in the unrotated frame
    pub fn first_sector_start(&self) -> f32 {
        POINTER_ANGLE - self.sector_angle() / 2.0
    }

    /// Angular range of a sector in the unrotated frame
    pub fn sector_angle_range(&self, index: usize) -> WheelResult<SectorRange> {
        if index >= self.prizes.len() {
            return Err(WheelError::IndexOutOfRange {
                index,
                len: self.prizes.len(),
            });
        }
        let sweep = self.sector_angle();
        Ok(SectorRange {
            start: self.first_sector_start() + index as f32 * sweep,
            sweep,
        })
    }

    /// All sector ranges in model order
    pub fn sector_ranges(&self) -> impl Iterator<Item = SectorRange> + '_ {
        let sweep = self.sector_angle();
        let first = self.first_sector_start();
        (0..self.prizes.len()).map(move |i| SectorRange {
            start: first + i as f32 * sweep,
            sweep,
        })
    }

    /// Index of the first sector whose id matches
    pub fn index_of_id(&self, id: &str) -> WheelResult<usize> {
        self.prizes
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| WheelError::PrizeNotFound(id.to_string()))
    }

    /// Sector sitting under the pointer when the wheel is rotated clockwise by `rotation` degrees
    pub fn sector_at_pointer(&self, rotation: f32) -> usize {
        let len = self.prizes.len();
        let sweep = 360.0 / len as f64;
        // Local angle under the pointer, measured from the start of sector 0
        let offset = (sweep / 2.0 - rotation as f64).rem_euclid(360.0);
        ((offset / sweep).floor() as usize) % len
    }
}

impl Default for WheelModel {
    fn default() -> Self {
        Self {
            prizes: vec![Prize::placeholder(); PLACEHOLDER_SECTORS],
            revision: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn abc() -> WheelModel {
        WheelModel::new(vec![
            Prize::new("a", "A"),
            Prize::new("b", "B"),
            Prize::new("c", "C"),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_is_blank_sixteen() {
        let model = WheelModel::default();
        assert_eq!(model.len(), PLACEHOLDER_SECTORS);
        assert!(model.prizes().iter().all(|p| p.id.is_empty() && p.label.is_empty()));
        assert_relative_eq!(model.sector_angle(), 22.5);
    }

    #[test]
    fn test_sector_ranges_partition_circle() {
        for n in 1..=24 {
            let prizes = (0..n).map(|i| Prize::new(i.to_string(), "")).collect();
            let model = WheelModel::new(prizes).unwrap();
            let sweep = model.sector_angle();
            assert_relative_eq!(sweep, 360.0 / n as f32);

            let ranges: Vec<_> = model.sector_ranges().collect();
            assert_relative_eq!(ranges[0].start, -90.0 - sweep / 2.0);
            for pair in ranges.windows(2) {
                assert_relative_eq!(pair[0].end(), pair[1].start, epsilon = 1e-4);
            }
            assert_relative_eq!(
                ranges[n - 1].end(),
                270.0 - sweep / 2.0,
                epsilon = 1e-3
            );
        }
    }

    #[test]
    fn test_sector_zero_centered_at_pointer() {
        let model = abc();
        let range = model.sector_angle_range(0).unwrap();
        assert_relative_eq!(range.center(), POINTER_ANGLE);
        assert!(range.contains(POINTER_ANGLE));
    }

    #[test]
    fn test_sector_range_out_of_bounds() {
        let model = abc();
        assert!(matches!(
            model.sector_angle_range(3),
            Err(WheelError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_set_empty_rejected() {
        let mut model = abc();
        let revision = model.revision();
        assert!(matches!(model.set_prizes(Vec::new()), Err(WheelError::InvalidModel)));
        assert_eq!(model.len(), 3);
        assert_eq!(model.revision(), revision);
    }

    #[test]
    fn test_set_prizes_bumps_revision() {
        let mut model = abc();
        model.set_prizes(vec![Prize::new("x", "X")]).unwrap();
        assert_eq!(model.revision(), 1);
        assert_relative_eq!(model.sector_angle(), 360.0);
    }

    #[test]
    fn test_index_of_id_first_match() {
        let model = WheelModel::new(vec![
            Prize::new("a", "first"),
            Prize::new("b", "B"),
            Prize::new("a", "second"),
        ])
        .unwrap();
        assert_eq!(model.index_of_id("a").unwrap(), 0);
        assert_eq!(model.index_of_id("b").unwrap(), 1);
        assert!(matches!(model.index_of_id("z"), Err(WheelError::PrizeNotFound(id)) if id == "z"));
    }

    #[test]
    fn test_sector_at_pointer() {
        let prizes = (0..4).map(|i| Prize::new(format!("p{i}"), "")).collect();
        let model = WheelModel::new(prizes).unwrap();
        assert_eq!(model.sector_at_pointer(0.0), 0);
        // Clockwise quarter turn brings the last sector under the pointer
        assert_eq!(model.sector_at_pointer(90.0), 3);
        assert_eq!(model.sector_at_pointer(-90.0), 1);
        assert_eq!(model.sector_at_pointer(3420.0), 2);
        assert_eq!(model.sector_at_pointer(44.0), 0);
    }
}
