//! Best-effort property setting across renamed host API versions.

use std::collections::HashSet;

use crate::host::{PropertyValue, SceneHost, TargetHandle};

/// Resolves an ordered list of candidate property names against a target's
/// capability set and applies values with silent degradation.
///
/// The same scene-construction code runs against host API versions where
/// cosmetic fields were renamed ("Specular" became "Specular IOR Level") or
/// removed outright. A rename must never abort a scene build, so failures
/// here are absorbed, not raised.
pub struct CompatibilityResolver;

impl CompatibilityResolver {
    /// The first candidate present in `capabilities`, or `None` when no
    /// alias applies.
    pub fn resolve<'a>(
        capabilities: &HashSet<String>,
        candidates: &[&'a str],
    ) -> Option<&'a str> {
        candidates
            .iter()
            .copied()
            .find(|name| capabilities.contains(*name))
    }

    /// Resolve against the target's live capability set, then set.
    ///
    /// Returns whether a set took effect. Both "no alias resolved" and "the
    /// host rejected the set" degrade to `false`; neither is an error.
    pub fn apply(
        host: &mut dyn SceneHost,
        target: TargetHandle,
        candidates: &[&str],
        value: impl Into<PropertyValue>,
    ) -> bool {
        let capabilities = host.available_properties(target);
        match Self::resolve(&capabilities, candidates) {
            Some(name) => {
                let ok = host.try_set(target, name, value.into());
                if !ok {
                    log::debug!("host rejected property '{name}', degrading silently");
                }
                ok
            }
            None => {
                log::debug!(
                    "no alias of {candidates:?} is supported by the target, skipping"
                );
                false
            }
        }
    }
}
