use std::fmt;

use super::curve::{Curve, CurveError};

/// Which progress value a property curve samples.
///
/// `Local` remaps global progress into the scene's activation window, so a
/// scene's internal motion plays out across its own [start, end] slice of the
/// scroll range. `Global` samples the raw page progress, for elements that
/// persist across scenes (a pinned CTA, a page-long progress stroke).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressSpace {
    Local,
    Global,
}

#[derive(Clone, Debug)]
pub struct SceneProperty {
    pub name: &'static str,
    pub curve: Curve,
    pub space: ProgressSpace,
}

/// One named phase of a scroll-driven timeline.
///
/// Activation windows are authored, not computed: overlapping windows are a
/// deliberate crossfade, gaps leave the scene parked at the clamped edge of
/// its own curves.
#[derive(Clone, Debug)]
pub struct Scene {
    pub id: &'static str,
    pub start: f64,
    pub end: f64,
    pub properties: Vec<SceneProperty>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneError {
    InvalidWindow {
        scene: &'static str,
        start: f64,
        end: f64,
    },
    BadCurve {
        scene: &'static str,
        property: &'static str,
        source: CurveError,
    },
    DuplicateId(&'static str),
    Empty,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidWindow { scene, start, end } => write!(
                f,
                "scene '{}' has invalid activation window [{}, {}]",
                scene, start, end
            ),
            SceneError::BadCurve {
                scene,
                property,
                source,
            } => write!(f, "scene '{}' property '{}': {}", scene, property, source),
            SceneError::DuplicateId(id) => write!(f, "duplicate scene id '{}'", id),
            SceneError::Empty => write!(f, "sequencer needs at least one scene"),
        }
    }
}

impl std::error::Error for SceneError {}

impl Scene {
    pub fn builder(id: &'static str, start: f64, end: f64) -> SceneBuilder {
        SceneBuilder {
            id,
            start,
            end,
            properties: Vec::new(),
            error: None,
        }
    }

    /// Progress within this scene's window, clamped to [0, 1]. Before the
    /// window it is 0 (scene not yet reached), after it is 1 (scene played
    /// through).
    pub fn local_progress(&self, global: f64) -> f64 {
        ((global - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    pub(super) fn validate(&self) -> Result<(), SceneError> {
        let window_ok = self.start.is_finite()
            && self.end.is_finite()
            && self.start >= 0.0
            && self.end <= 1.0
            && self.start < self.end;
        if !window_ok {
            return Err(SceneError::InvalidWindow {
                scene: self.id,
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Collects property curves for a scene; the first curve definition error is
/// held and reported when the scene is registered, so authoring mistakes
/// surface at construction instead of mid-playback.
pub struct SceneBuilder {
    id: &'static str,
    start: f64,
    end: f64,
    properties: Vec<SceneProperty>,
    error: Option<SceneError>,
}

impl SceneBuilder {
    pub fn prop(self, name: &'static str, points: Vec<(f64, f64)>) -> Self {
        self.add(name, points, ProgressSpace::Local)
    }

    pub fn global_prop(self, name: &'static str, points: Vec<(f64, f64)>) -> Self {
        self.add(name, points, ProgressSpace::Global)
    }

    fn add(mut self, name: &'static str, points: Vec<(f64, f64)>, space: ProgressSpace) -> Self {
        if self.error.is_some() {
            return self;
        }
        match Curve::new(points) {
            Ok(curve) => self.properties.push(SceneProperty { name, curve, space }),
            Err(source) => {
                self.error = Some(SceneError::BadCurve {
                    scene: self.id,
                    property: name,
                    source,
                });
            }
        }
        self
    }

    pub fn build(self) -> Result<Scene, SceneError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let scene = Scene {
            id: self.id,
            start: self.start,
            end: self.end,
            properties: self.properties,
        };
        scene.validate()?;
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_progress_maps_window_to_unit_range() {
        let scene = Scene::builder("intro", 0.2, 0.4)
            .prop("opacity", vec![(0.0, 0.0), (1.0, 1.0)])
            .build()
            .unwrap();
        assert_eq!(scene.local_progress(0.1), 0.0);
        assert_eq!(scene.local_progress(0.3), 0.5);
        assert_eq!(scene.local_progress(0.5), 1.0);
    }

    #[test]
    fn inverted_window_fails_at_build() {
        let err = Scene::builder("broken", 0.6, 0.4).build().unwrap_err();
        assert!(matches!(err, SceneError::InvalidWindow { scene: "broken", .. }));
    }

    #[test]
    fn bad_curve_is_reported_with_scene_and_property() {
        let err = Scene::builder("hero", 0.0, 0.5)
            .prop("scale", vec![(0.0, 1.0)])
            .build()
            .unwrap_err();
        match err {
            SceneError::BadCurve {
                scene, property, ..
            } => {
                assert_eq!(scene, "hero");
                assert_eq!(property, "scale");
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
