//! Scalar face measurements and the ratios derived from them.
//!
//! Widths are horizontal spans and the face height a vertical span,
//! following the upright-portrait convention of the upstream detectors.
//! Every denominator is checked before use: degenerate geometry surfaces
//! as an error instead of propagating NaN or infinity.

use crate::error::ClassifyError;
use crate::landmarks::{LandmarkScheme, LandmarkSet};

/// Base distances extracted from one landmark set, computed once per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMeasurements {
    /// Width at the cheeks, the widest mid-face span.
    pub face_width: f32,
    /// Chin to forehead-top.
    pub face_height: f32,
    /// Width at the jaw, below the cheeks.
    pub jaw_width: f32,
    /// Width between the forehead-edge outline points.
    pub forehead_width: f32,
    /// Width at the cheekbones, when the scheme defines them.
    pub cheekbone_width: Option<f32>,
    /// `min / max` of the two horizontal half-face spans, in (0, 1].
    pub symmetry: f32,
}

impl FaceMeasurements {
    /// Measure a landmark set through the given scheme.
    pub fn from_landmarks(
        landmarks: &LandmarkSet,
        scheme: &LandmarkScheme,
    ) -> Result<Self, ClassifyError> {
        scheme.validate(landmarks)?;

        let face_width = (landmarks[scheme.cheek_right].x - landmarks[scheme.cheek_left].x).abs();
        let face_height = (landmarks[scheme.chin].y - landmarks[scheme.forehead_top].y).abs();
        let jaw_width = (landmarks[scheme.jaw_right].x - landmarks[scheme.jaw_left].x).abs();
        let forehead_width =
            (landmarks[scheme.forehead_right].x - landmarks[scheme.forehead_left].x).abs();

        ensure_positive("face width", face_width)?;
        ensure_positive("face height", face_height)?;
        ensure_positive("jaw width", jaw_width)?;

        let cheekbone_width = scheme
            .cheekbones
            .map(|(left, right)| (landmarks[right].x - landmarks[left].x).abs());

        let midline_x = landmarks[scheme.midline].x;
        let left_span = (midline_x - landmarks[scheme.forehead_left].x).abs();
        let right_span = (landmarks[scheme.forehead_right].x - midline_x).abs();
        let widest = left_span.max(right_span);
        ensure_positive("half-face span", widest)?;
        let symmetry = left_span.min(right_span) / widest;

        Ok(Self {
            face_width,
            face_height,
            jaw_width,
            forehead_width,
            cheekbone_width,
            symmetry,
        })
    }

    /// Derive the ratios the rule table is written against.
    ///
    /// Denominators were checked positive at construction, so this cannot
    /// divide by zero.
    pub fn ratios(&self) -> FaceRatios {
        FaceRatios {
            width_to_height: self.face_width / self.face_height,
            jaw_to_face_width: self.jaw_width / self.face_width,
            forehead_to_jaw: self.forehead_width / self.jaw_width,
            face_to_jaw: self.face_width / self.jaw_width,
            cheekbone_to_jaw: self.cheekbone_width.map(|w| w / self.jaw_width),
            symmetry: Some(self.symmetry),
        }
    }
}

/// Dimensionless shape ratios, the classifier's working input.
///
/// Constructible directly so the rule table can be exercised without
/// synthesizing landmark geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceRatios {
    pub width_to_height: f32,
    pub jaw_to_face_width: f32,
    pub forehead_to_jaw: f32,
    pub face_to_jaw: f32,
    /// Present only for schemes with cheekbone points.
    pub cheekbone_to_jaw: Option<f32>,
    /// Present whenever a midline reference was available.
    pub symmetry: Option<f32>,
}

fn ensure_positive(quantity: &'static str, value: f32) -> Result<(), ClassifyError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ClassifyError::DegenerateMeasurement { quantity, value })
    }
}
