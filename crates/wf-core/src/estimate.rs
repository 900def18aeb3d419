//! Distance → travel-time estimates and their display formatting.
//!
//! The mode split is a policy, not physics: above 5 000 m the route is
//! reported as a drive, at or below as a walk and a cycle.  The cut-off and
//! the three paces feed directly into user-visible labels, so they are
//! exact-match constants.

use std::fmt;

// ── Policy constants ──────────────────────────────────────────────────────────

/// Walking pace, metres per minute (4.8 km/h).
pub const WALK_M_PER_MIN: f64 = 80.0;
/// Cycling pace, metres per minute (15 km/h).
pub const BIKE_M_PER_MIN: f64 = 250.0;
/// Driving pace, metres per minute (30 km/h).
pub const DRIVE_M_PER_MIN: f64 = 500.0;
/// Above this distance only the drive estimate applies.
pub const DRIVE_ONLY_ABOVE_M: f64 = 5_000.0;

// ── TravelMode ────────────────────────────────────────────────────────────────

/// The means of travel an estimate line refers to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelMode {
    Walk,
    Bike,
    Drive,
}

impl TravelMode {
    /// Assumed pace in metres per minute.
    #[inline]
    pub fn pace_m_per_min(self) -> f64 {
        match self {
            TravelMode::Walk => WALK_M_PER_MIN,
            TravelMode::Bike => BIKE_M_PER_MIN,
            TravelMode::Drive => DRIVE_M_PER_MIN,
        }
    }

    /// Label prefix used in overlay text.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walk => "Walk",
            TravelMode::Bike => "Bike",
            TravelMode::Drive => "Drive",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TravelEstimate ────────────────────────────────────────────────────────────

/// Rounded minute count for one travel mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeMinutes {
    pub mode: TravelMode,
    pub minutes: u32,
}

/// Mode-dependent travel-time estimate for a route of known length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelEstimate {
    /// Route length in metres the estimate was computed from.
    pub distance_m: f64,
    /// One entry per applicable mode, in display order.
    pub legs: Vec<ModeMinutes>,
}

impl TravelEstimate {
    /// Estimate travel time for a route `distance_m` metres long.
    ///
    /// Above [`DRIVE_ONLY_ABOVE_M`] the only applicable mode is
    /// [`TravelMode::Drive`]; otherwise walking and cycling are both
    /// reported.  Minutes are `round(distance / pace)`.
    pub fn for_distance(distance_m: f64) -> Self {
        let modes: &[TravelMode] = if distance_m > DRIVE_ONLY_ABOVE_M {
            &[TravelMode::Drive]
        } else {
            &[TravelMode::Walk, TravelMode::Bike]
        };
        let legs = modes
            .iter()
            .map(|&mode| ModeMinutes {
                mode,
                minutes: (distance_m / mode.pace_m_per_min()).round() as u32,
            })
            .collect();
        Self { distance_m, legs }
    }

    /// Minutes for `mode`, if that mode applies at this distance.
    pub fn minutes_for(&self, mode: TravelMode) -> Option<u32> {
        self.legs.iter().find(|l| l.mode == mode).map(|l| l.minutes)
    }

    /// Distance formatted for display — whole metres below 1 km, otherwise
    /// kilometres to two decimals (`"720m"`, `"7.20km"`).
    pub fn display_distance(&self) -> String {
        if self.distance_m < 1_000.0 {
            format!("{:.0}m", self.distance_m)
        } else {
            format!("{:.2}km", self.distance_m / 1_000.0)
        }
    }

    /// The overlay label line, e.g. `"Walk ~9 min · Bike ~3 min (720m)"` or
    /// `"Drive ~14 min (7.20km)"`.
    pub fn label(&self) -> String {
        let legs = self
            .legs
            .iter()
            .map(|l| format!("{} ~{} min", l.mode, l.minutes))
            .collect::<Vec<_>>()
            .join(" · ");
        format!("{legs} ({})", self.display_distance())
    }
}
