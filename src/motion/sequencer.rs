use std::collections::HashMap;

use super::scene::{ProgressSpace, Scene, SceneError};

/// Computed visual state for every scene at one progress value.
///
/// Plain data handed to whatever renders it; values are raw curve outputs
/// (opacity fractions, pixel offsets, dash offsets) with no rounding applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequencerFrame {
    values: HashMap<&'static str, HashMap<&'static str, f64>>,
}

impl SequencerFrame {
    pub fn get(&self, scene: &str, property: &str) -> Option<f64> {
        self.values.get(scene)?.get(property).copied()
    }

    /// Lookup with a fallback, for render paths that should degrade to a
    /// static value rather than branch on `Option`.
    pub fn value_or(&self, scene: &str, property: &str, default: f64) -> f64 {
        self.get(scene, property).unwrap_or(default)
    }
}

/// Owns the ordered scene list and turns a single scroll progress value into
/// a full frame of per-scene property values.
///
/// `update` is a pure function of its argument: no timers, no accumulated
/// state, safe to call redundantly on every animation frame.
#[derive(Debug)]
pub struct Sequencer {
    scenes: Vec<Scene>,
}

impl Sequencer {
    /// Validates every scene up front. A malformed definition is a
    /// programming mistake and aborts construction with the offending scene
    /// named, instead of producing garbage during playback.
    pub fn new(scenes: Vec<Scene>) -> Result<Self, SceneError> {
        if scenes.is_empty() {
            return Err(SceneError::Empty);
        }
        let mut seen: Vec<&'static str> = Vec::with_capacity(scenes.len());
        for scene in &scenes {
            scene.validate()?;
            if seen.contains(&scene.id) {
                return Err(SceneError::DuplicateId(scene.id));
            }
            seen.push(scene.id);
        }
        Ok(Self { scenes })
    }

    pub fn update(&self, progress: f64) -> SequencerFrame {
        let global = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        let mut frame = SequencerFrame::default();
        for scene in &self.scenes {
            let local = scene.local_progress(global);
            let mut props = HashMap::with_capacity(scene.properties.len());
            for prop in &scene.properties {
                let p = match prop.space {
                    ProgressSpace::Local => local,
                    ProgressSpace::Global => global,
                };
                props.insert(prop.name, prop.curve.evaluate(p));
            }
            frame.values.insert(scene.id, props);
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scene::Scene;

    fn crossfade_pair() -> Sequencer {
        // Overlap on [0.4, 0.6] is the crossfade region.
        Sequencer::new(vec![
            Scene::builder("first", 0.0, 0.6)
                .prop("opacity", vec![(0.0, 0.0), (0.2, 1.0), (0.7, 1.0), (1.0, 0.0)])
                .build()
                .unwrap(),
            Scene::builder("second", 0.4, 1.0)
                .prop("opacity", vec![(0.0, 0.0), (0.3, 1.0)])
                .prop("translate_y", vec![(0.0, 80.0), (0.3, 0.0)])
                .global_prop("cta_opacity", vec![(0.0, 0.0), (0.9, 0.0), (1.0, 1.0)])
                .build()
                .unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn update_is_idempotent() {
        let seq = crossfade_pair();
        assert_eq!(seq.update(0.37), seq.update(0.37));
    }

    #[test]
    fn out_of_range_progress_is_clamped_and_finite() {
        let seq = crossfade_pair();
        for p in [-0.5, 0.0, 1.0, 3.0, f64::NAN] {
            let frame = seq.update(p);
            for scene in ["first", "second"] {
                let v = frame.value_or(scene, "opacity", f64::NAN);
                assert!(v.is_finite(), "p={} scene={} gave {}", p, scene, v);
            }
        }
        assert_eq!(seq.update(-0.5), seq.update(0.0));
        assert_eq!(seq.update(3.0), seq.update(1.0));
    }

    #[test]
    fn scenes_outside_their_window_sit_at_curve_edges() {
        let seq = crossfade_pair();
        // Before "second" opens, its local progress is 0.
        let frame = seq.update(0.1);
        assert_eq!(frame.get("second", "opacity"), Some(0.0));
        assert_eq!(frame.get("second", "translate_y"), Some(80.0));
        // After "first" closes, its local progress is 1.
        let frame = seq.update(0.9);
        assert_eq!(frame.get("first", "opacity"), Some(0.0));
    }

    #[test]
    fn overlap_produces_a_crossfade() {
        let seq = crossfade_pair();
        let frame = seq.update(0.5);
        let fading_out = frame.value_or("first", "opacity", 0.0);
        let fading_in = frame.value_or("second", "opacity", 0.0);
        assert!(fading_out > 0.0 && fading_out <= 1.0);
        assert!(fading_in > 0.0 && fading_in <= 1.0);
    }

    #[test]
    fn global_properties_ignore_the_window() {
        let seq = crossfade_pair();
        // Window-local progress at 0.95 would be well past the CTA ramp
        // start, but the global curve holds 0 until 0.9 of page progress.
        assert_eq!(seq.update(0.85).get("second", "cta_opacity"), Some(0.0));
        assert!(seq.update(0.95).value_or("second", "cta_opacity", 0.0) > 0.0);
    }

    #[test]
    fn registration_rejects_duplicates_and_empty_lists() {
        assert_eq!(Sequencer::new(vec![]).unwrap_err(), SceneError::Empty);
        let dup = Sequencer::new(vec![
            Scene::builder("a", 0.0, 0.5).build().unwrap(),
            Scene::builder("a", 0.5, 1.0).build().unwrap(),
        ])
        .unwrap_err();
        assert_eq!(dup, SceneError::DuplicateId("a"));
    }

    #[test]
    fn missing_lookups_fall_back() {
        let seq = crossfade_pair();
        let frame = seq.update(0.5);
        assert_eq!(frame.get("nope", "opacity"), None);
        assert_eq!(frame.value_or("first", "nope", 1.0), 1.0);
    }
}
