//! World configuration.

use std::time::Duration;

use crate::{GwError, GwResult, Point};

/// Top-level run configuration.
///
/// Typically loaded from a TOML file by the host binary and passed to the
/// world builder.  Every field has a default, so a partial file (or none at
/// all) is valid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Top-left corner of the playable rectangle (inclusive).
    pub min: Point,

    /// Bottom-right corner of the playable rectangle (inclusive).
    pub max: Point,

    /// One entity is placed at each of these points, in order.
    pub spawns: Vec<Point>,

    /// How long one cell-to-cell move lasts, in milliseconds.
    pub step_millis: u64,

    /// Budget handed to the world per tick by `World::run`, in milliseconds.
    pub frame_millis: u64,

    /// Ticks simulated by `World::run`.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            min:          Point::new(-10, -10),
            max:          Point::new(10, 10),
            spawns:       vec![Point::new(1, 1), Point::new(0, 0)],
            step_millis:  250,
            frame_millis: 16,
            total_ticks:  600,
            seed:         42,
        }
    }
}

impl WorldConfig {
    #[inline]
    pub fn step_duration(&self) -> Duration {
        Duration::from_millis(self.step_millis)
    }

    #[inline]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_millis)
    }

    /// Number of cells in the playable rectangle.
    pub fn cell_count(&self) -> u64 {
        if self.min.row > self.max.row || self.min.column > self.max.column {
            return 0;
        }
        let rows = self.min.row.abs_diff(self.max.row) as u64 + 1;
        let cols = self.min.column.abs_diff(self.max.column) as u64 + 1;
        rows * cols
    }

    /// Reject configurations the world cannot be built from.
    pub fn validate(&self) -> GwResult<()> {
        if self.min.row > self.max.row || self.min.column > self.max.column {
            return Err(GwError::Config(format!(
                "grid min {} is not above and left of max {}",
                self.min, self.max
            )));
        }
        if self.frame_millis == 0 {
            return Err(GwError::Config("frame_millis must be positive".into()));
        }
        if let Some(&outside) = self.spawns.iter().find(|s| !s.within(self.min, self.max)) {
            return Err(GwError::OutOfBounds(outside));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl WorldConfig {
    /// Parse a configuration from TOML text.  Missing keys take their
    /// defaults; the result is validated.
    pub fn from_toml_str(text: &str) -> GwResult<Self> {
        let config: WorldConfig =
            toml::from_str(text).map_err(|e| GwError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<std::path::Path>) -> GwResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
