//! Run selectors accepted from the caller: algorithm, scenario and
//! playback speed preset.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which stepping policy drives the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Sequential scan over every index in order.
    #[default]
    Linear,
    /// Halving scan over a sorted dataset.
    Binary,
}

impl Algorithm {
    /// Whether the dataset must be sorted ascending before this
    /// algorithm may run.
    pub fn requires_sorted(&self) -> bool {
        matches!(self, Algorithm::Binary)
    }

    /// Stable name used in outcome records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Linear => "linear",
            Algorithm::Binary => "binary",
        }
    }
}

/// Which dataset flavor to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Numeric sector frequencies, duplicates allowed.
    #[default]
    Space,
    /// Distinct contact names from a fixed pool.
    Contacts,
    /// Distinct roll numbers drawn from 1..=50.
    Attendance,
}

impl Scenario {
    /// Human label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Space => "Space",
            Scenario::Contacts => "Contacts",
            Scenario::Attendance => "Attendance",
        }
    }
}

/// Fixed playback speed presets.
///
/// Millisecond values match the original control panel: the per-step
/// delay is the preset itself; the halving scan's probe delay is the
/// preset with a floor of 200 ms on the fastest setting and 500 ms on
/// the others, keeping the probe at least as long as a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpeedPreset {
    /// 800 ms per step.
    Slow,
    /// 300 ms per step.
    #[default]
    Medium,
    /// 50 ms per step.
    Fast,
}

impl SpeedPreset {
    /// Delay between observable steps.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(match self {
            SpeedPreset::Slow => 800,
            SpeedPreset::Medium => 300,
            SpeedPreset::Fast => 50,
        })
    }

    /// Delay after a midpoint probe, before comparing.
    pub fn probe_delay(&self) -> Duration {
        let floor = Duration::from_millis(match self {
            SpeedPreset::Fast => 200,
            _ => 500,
        });
        self.step_delay().max(floor)
    }

    /// Human label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            SpeedPreset::Slow => "Charge Pulse (Slow)",
            SpeedPreset::Medium => "Plasma Cannon (Med)",
            SpeedPreset::Fast => "Gatling Laser (Fast)",
        }
    }

    /// Cycles to the next preset (UI toggle order).
    pub fn next(&self) -> Self {
        match self {
            SpeedPreset::Slow => SpeedPreset::Medium,
            SpeedPreset::Medium => SpeedPreset::Fast,
            SpeedPreset::Fast => SpeedPreset::Slow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_requires_sorted_input() {
        assert!(Algorithm::Binary.requires_sorted());
        assert!(!Algorithm::Linear.requires_sorted());
    }

    #[test]
    fn probe_delay_never_shorter_than_step_delay() {
        for preset in [SpeedPreset::Slow, SpeedPreset::Medium, SpeedPreset::Fast] {
            assert!(preset.probe_delay() >= preset.step_delay());
        }
    }

    #[test]
    fn fast_preset_has_probe_floor() {
        assert_eq!(
            SpeedPreset::Fast.probe_delay(),
            Duration::from_millis(200)
        );
        assert_eq!(
            SpeedPreset::Slow.probe_delay(),
            Duration::from_millis(800)
        );
        assert_eq!(
            SpeedPreset::Medium.probe_delay(),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn algorithm_names_are_stable() {
        assert_eq!(Algorithm::Linear.as_str(), "linear");
        assert_eq!(Algorithm::Binary.as_str(), "binary");
    }
}
