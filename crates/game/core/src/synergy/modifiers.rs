//! Session-wide modifiers applied on top of per-perk synergy.
//!
//! The host passes these explicitly on every resolve; nothing is read from
//! ambient session state.

/// Global modifier flags for one resolve call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GlobalModifiers {
    /// Matrix overdrive: flat +15% to every slotted item, added after perks.
    pub overdrive: bool,

    /// Resonance: percent added to every perk's value before it is
    /// multiplied by its match count. Zero leaves perk values untouched.
    pub resonance_pct: f64,
}

impl GlobalModifiers {
    /// No modifiers active.
    pub const NONE: Self = Self {
        overdrive: false,
        resonance_pct: 0.0,
    };

    pub fn new() -> Self {
        Self::NONE
    }

    /// Overdrive active, no resonance.
    pub fn overdrive() -> Self {
        Self {
            overdrive: true,
            ..Self::NONE
        }
    }

    /// Sets the overdrive flag (builder pattern).
    #[must_use]
    pub fn with_overdrive(mut self, active: bool) -> Self {
        self.overdrive = active;
        self
    }

    /// Sets the resonance bonus in percent (builder pattern).
    #[must_use]
    pub fn with_resonance(mut self, resonance_pct: f64) -> Self {
        self.resonance_pct = resonance_pct;
        self
    }
}
