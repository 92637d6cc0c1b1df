//! Interpolation-mode negotiation against a host-advertised capability set.

use std::collections::HashSet;

/// Keyframe interpolation modes the engine knows how to request.
///
/// Hosts advertise support as identifier strings; conversion in both
/// directions goes through [`Interpolation::identifier`] and
/// [`Interpolation::from_identifier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interpolation {
    Constant,
    Linear,
    Bezier,
    Sine,
}

impl Interpolation {
    /// The identifier string the host vocabulary uses for this mode.
    pub fn identifier(self) -> &'static str {
        match self {
            Interpolation::Constant => "CONSTANT",
            Interpolation::Linear => "LINEAR",
            Interpolation::Bezier => "BEZIER",
            Interpolation::Sine => "SINE",
        }
    }

    /// Parse a host identifier back into a mode, if it is one we know.
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id {
            "CONSTANT" => Some(Interpolation::Constant),
            "LINEAR" => Some(Interpolation::Linear),
            "BEZIER" => Some(Interpolation::Bezier),
            "SINE" => Some(Interpolation::Sine),
            _ => None,
        }
    }
}

/// The ordered fallback chain used when the desired mode is unsupported.
///
/// This is the one configurable policy surface of negotiation: hosts with a
/// different mode vocabulary get a different chain, nothing else changes.
#[derive(Clone, Debug)]
pub struct NegotiationPolicy {
    /// Modes tried in order after the desired mode, most preferred first.
    pub fallback: Vec<Interpolation>,
}

impl Default for NegotiationPolicy {
    fn default() -> Self {
        // A smooth default first, then the universally safe linear mode.
        Self {
            fallback: vec![Interpolation::Bezier, Interpolation::Linear],
        }
    }
}

impl NegotiationPolicy {
    /// Pick the best still-supported mode. Never fails.
    ///
    /// Returns `desired` when it is supported, or when `supported` is empty
    /// (capabilities could not be determined, so the desired mode is assumed
    /// fine). Otherwise walks the fallback chain and returns the first
    /// supported entry, or the chain's last entry if none matched.
    pub fn negotiate(
        &self,
        desired: Interpolation,
        supported: &HashSet<String>,
    ) -> Interpolation {
        if supported.is_empty() || supported.contains(desired.identifier()) {
            return desired;
        }
        for &mode in &self.fallback {
            if supported.contains(mode.identifier()) {
                return mode;
            }
        }
        self.fallback.last().copied().unwrap_or(desired)
    }
}

/// Negotiate with the default fallback chain (Bezier, then Linear).
pub fn negotiate_interpolation(
    desired: Interpolation,
    supported: &HashSet<String>,
) -> Interpolation {
    NegotiationPolicy::default().negotiate(desired, supported)
}
