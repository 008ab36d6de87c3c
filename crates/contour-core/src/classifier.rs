//! Rule-based face-shape classification.
//!
//! A handful of width/height ratios are evaluated against an ordered rule
//! table; the first matching rule decides the shape and its base
//! confidence, and the symmetry ratio scales the final confidence down for
//! lopsided detections. The thresholds are empirical constants calibrated
//! against the seven coarse shape categories and are part of the contract:
//! reordering the table changes results.

use crate::error::ClassifyError;
use crate::landmarks::{LandmarkScheme, LandmarkSet};
use crate::measurements::{FaceMeasurements, FaceRatios};
use serde::{Deserialize, Serialize};

/// One of the seven coarse facial outline categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Heart,
    Long,
    Diamond,
    Triangle,
}

impl FaceShape {
    pub const ALL: [FaceShape; 7] = [
        FaceShape::Oval,
        FaceShape::Round,
        FaceShape::Square,
        FaceShape::Heart,
        FaceShape::Long,
        FaceShape::Diamond,
        FaceShape::Triangle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceShape::Oval => "oval",
            FaceShape::Round => "round",
            FaceShape::Square => "square",
            FaceShape::Heart => "heart",
            FaceShape::Long => "long",
            FaceShape::Diamond => "diamond",
            FaceShape::Triangle => "triangle",
        }
    }
}

impl std::fmt::Display for FaceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FaceShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FaceShape::ALL
            .iter()
            .copied()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| format!("unknown face shape: {s}"))
    }
}

/// Shape and confidence for one classified face. Confidence is in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub shape: FaceShape,
    pub confidence: f32,
}

type RulePredicate = fn(&FaceRatios) -> bool;

struct ShapeRule {
    shape: FaceShape,
    base_confidence: f32,
    matches: RulePredicate,
}

fn round_rule(r: &FaceRatios) -> bool {
    r.width_to_height > 0.85
        && r.jaw_to_face_width > 0.9
        && r.symmetry.map_or(true, |s| s > 0.95)
}

fn square_rule(r: &FaceRatios) -> bool {
    r.jaw_to_face_width > 0.9
        && r.forehead_to_jaw < 1.1
        && r.cheekbone_to_jaw.map_or(true, |c| c > 0.95)
}

fn heart_rule(r: &FaceRatios) -> bool {
    r.forehead_to_jaw > 1.2 && r.cheekbone_to_jaw.map_or(true, |c| c > 1.1)
}

fn long_rule(r: &FaceRatios) -> bool {
    r.width_to_height < 0.65 && r.jaw_to_face_width < 0.8
}

fn triangle_rule(r: &FaceRatios) -> bool {
    r.forehead_to_jaw < 0.9
        && r.jaw_to_face_width < 0.8
        && r.cheekbone_to_jaw.map_or(true, |c| c < 0.9)
}

fn diamond_rule(r: &FaceRatios) -> bool {
    r.face_to_jaw > 1.2
        && r.forehead_to_jaw > 0.9
        && r.forehead_to_jaw < 1.1
        && r.cheekbone_to_jaw.map_or(true, |c| c > 1.1)
}

/// Ordered rule table, evaluated first-match. Earlier rules take priority
/// when several conditions hold at once (round before square, etc.), so the
/// order here is load-bearing.
static RULES: [ShapeRule; 6] = [
    ShapeRule { shape: FaceShape::Round, base_confidence: 0.80, matches: round_rule },
    ShapeRule { shape: FaceShape::Square, base_confidence: 0.85, matches: square_rule },
    ShapeRule { shape: FaceShape::Heart, base_confidence: 0.75, matches: heart_rule },
    ShapeRule { shape: FaceShape::Long, base_confidence: 0.80, matches: long_rule },
    ShapeRule { shape: FaceShape::Triangle, base_confidence: 0.70, matches: triangle_rule },
    ShapeRule { shape: FaceShape::Diamond, base_confidence: 0.75, matches: diamond_rule },
];

/// Fallback when no rule fires on valid measurements.
const FALLBACK_SHAPE: FaceShape = FaceShape::Oval;
const FALLBACK_CONFIDENCE: f32 = 0.70;

/// Confidence scale runs from `FLOOR` at symmetry 0 up to `FLOOR + WEIGHT`
/// at perfect symmetry, so adjusted confidence never reaches zero.
const SYMMETRY_SCALE_FLOOR: f32 = 0.7;
const SYMMETRY_SCALE_WEIGHT: f32 = 0.3;

/// Stateless face-shape classifier bound to one landmark scheme.
///
/// Holds no mutable state and performs no I/O; a single instance may be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct FaceShapeClassifier {
    scheme: LandmarkScheme,
}

impl FaceShapeClassifier {
    pub fn new(scheme: LandmarkScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> &LandmarkScheme {
        &self.scheme
    }

    /// Classify one face from its landmark set.
    ///
    /// The set must match the classifier's scheme; a wrong-length set or
    /// degenerate geometry is an error, never an oval default.
    pub fn classify(&self, landmarks: &LandmarkSet) -> Result<ClassificationResult, ClassifyError> {
        let measurements = FaceMeasurements::from_landmarks(landmarks, &self.scheme)?;
        let ratios = measurements.ratios();
        let result = Self::classify_ratios(&ratios);

        tracing::debug!(
            scheme = self.scheme.name,
            width_to_height = ratios.width_to_height,
            jaw_to_face_width = ratios.jaw_to_face_width,
            forehead_to_jaw = ratios.forehead_to_jaw,
            symmetry = measurements.symmetry,
            shape = %result.shape,
            confidence = result.confidence,
            "face shape classified"
        );

        Ok(result)
    }

    /// Evaluate the rule table against already-derived ratios.
    pub fn classify_ratios(ratios: &FaceRatios) -> ClassificationResult {
        let (shape, base_confidence) = RULES
            .iter()
            .find(|rule| (rule.matches)(ratios))
            .map(|rule| (rule.shape, rule.base_confidence))
            .unwrap_or((FALLBACK_SHAPE, FALLBACK_CONFIDENCE));

        let confidence = match ratios.symmetry {
            Some(symmetry) => {
                let scale = SYMMETRY_SCALE_FLOOR + symmetry * SYMMETRY_SCALE_WEIGHT;
                (base_confidence * scale).min(1.0)
            }
            None => base_confidence,
        };

        ClassificationResult { shape, confidence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Point;

    fn ratios(width_to_height: f32, jaw_to_face_width: f32, forehead_to_jaw: f32) -> FaceRatios {
        FaceRatios {
            width_to_height,
            jaw_to_face_width,
            forehead_to_jaw,
            face_to_jaw: 1.0 / jaw_to_face_width,
            cheekbone_to_jaw: None,
            symmetry: Some(1.0),
        }
    }

    /// 68-point set with the requested spans, symmetric about x = 0.
    fn synthetic_dlib68(
        face_width: f32,
        face_height: f32,
        jaw_width: f32,
        forehead_width: f32,
    ) -> LandmarkSet {
        let mut points = vec![Point::zero(); 68];
        points[1] = Point::new(-face_width / 2.0, face_height * 0.4);
        points[15] = Point::new(face_width / 2.0, face_height * 0.4);
        points[8] = Point::new(0.0, face_height);
        points[3] = Point::new(-jaw_width / 2.0, face_height * 0.7);
        points[13] = Point::new(jaw_width / 2.0, face_height * 0.7);
        points[0] = Point::new(-forehead_width / 2.0, 0.0);
        points[16] = Point::new(forehead_width / 2.0, 0.0);
        points[27] = Point::new(0.0, face_height * 0.2);
        LandmarkSet::new(points)
    }

    #[test]
    fn test_square_scenario() {
        // widthToHeight 0.80, jawToFace 0.95, foreheadToJaw 1.05, symmetry 1.0
        let result = FaceShapeClassifier::classify_ratios(&ratios(0.80, 0.95, 1.05));
        assert_eq!(result.shape, FaceShape::Square);
        assert!((result.confidence - 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_long_scenario() {
        let result = FaceShapeClassifier::classify_ratios(&ratios(0.55, 0.70, 1.0));
        assert_eq!(result.shape, FaceShape::Long);
    }

    #[test]
    fn test_round_scenario() {
        let result = FaceShapeClassifier::classify_ratios(&ratios(0.90, 0.95, 1.15));
        assert_eq!(result.shape, FaceShape::Round);
    }

    #[test]
    fn test_heart_scenario() {
        let result = FaceShapeClassifier::classify_ratios(&ratios(0.75, 0.85, 1.30));
        assert_eq!(result.shape, FaceShape::Heart);
    }

    #[test]
    fn test_triangle_scenario() {
        let result = FaceShapeClassifier::classify_ratios(&ratios(0.70, 0.75, 0.85));
        assert_eq!(result.shape, FaceShape::Triangle);
    }

    #[test]
    fn test_diamond_scenario() {
        let result = FaceShapeClassifier::classify_ratios(&ratios(0.70, 0.70, 1.0));
        assert_eq!(result.shape, FaceShape::Diamond);
    }

    #[test]
    fn test_oval_fallback() {
        // None of the rules match these ratios.
        let result = FaceShapeClassifier::classify_ratios(&ratios(0.75, 0.85, 1.0));
        assert_eq!(result.shape, FaceShape::Oval);
        assert!((result.confidence - 0.70).abs() < 1e-6);
    }

    #[test]
    fn test_round_wins_over_square() {
        // Both the round and square conditions hold; the earlier rule fires.
        let r = ratios(0.90, 0.95, 1.0);
        let rule_hits: Vec<FaceShape> = RULES
            .iter()
            .filter(|rule| (rule.matches)(&r))
            .map(|rule| rule.shape)
            .collect();
        assert!(rule_hits.contains(&FaceShape::Round));
        assert!(rule_hits.contains(&FaceShape::Square));

        let result = FaceShapeClassifier::classify_ratios(&r);
        assert_eq!(result.shape, FaceShape::Round);
    }

    #[test]
    fn test_rule_order() {
        let order: Vec<FaceShape> = RULES.iter().map(|rule| rule.shape).collect();
        assert_eq!(
            order,
            vec![
                FaceShape::Round,
                FaceShape::Square,
                FaceShape::Heart,
                FaceShape::Long,
                FaceShape::Triangle,
                FaceShape::Diamond,
            ]
        );
    }

    #[test]
    fn test_symmetry_scales_confidence_down() {
        let mut r = ratios(0.80, 0.95, 1.05);
        let full = FaceShapeClassifier::classify_ratios(&r).confidence;

        r.symmetry = Some(0.8);
        let reduced = FaceShapeClassifier::classify_ratios(&r).confidence;

        r.symmetry = Some(0.3);
        let low = FaceShapeClassifier::classify_ratios(&r).confidence;

        assert!(full > reduced, "{full} vs {reduced}");
        assert!(reduced > low, "{reduced} vs {low}");
        // Even at zero symmetry the confidence keeps a positive floor.
        r.symmetry = Some(0.0);
        let floor = FaceShapeClassifier::classify_ratios(&r).confidence;
        assert!((floor - 0.85 * 0.7).abs() < 1e-6);
        assert!(floor > 0.0);
    }

    #[test]
    fn test_missing_symmetry_leaves_base_confidence() {
        let mut r = ratios(0.80, 0.95, 1.05);
        r.symmetry = None;
        let result = FaceShapeClassifier::classify_ratios(&r);
        assert_eq!(result.shape, FaceShape::Square);
        assert!((result.confidence - 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_confidence_bounds_across_rules() {
        for rule in &RULES {
            assert!(rule.base_confidence > 0.0 && rule.base_confidence <= 1.0);
            // Worst-case scaling at symmetry 0 stays strictly positive.
            assert!(rule.base_confidence * SYMMETRY_SCALE_FLOOR > 0.0);
        }
        assert!(FALLBACK_CONFIDENCE > 0.0 && FALLBACK_CONFIDENCE <= 1.0);
    }

    #[test]
    fn test_cheekbone_clause_can_veto_square() {
        // Square by the width ratios, but cheekbones far narrower than the
        // jaw, which the refined rule rejects; nothing else fires.
        let mut r = ratios(0.80, 0.95, 1.05);
        r.cheekbone_to_jaw = Some(0.90);
        let result = FaceShapeClassifier::classify_ratios(&r);
        assert_eq!(result.shape, FaceShape::Oval);
    }

    #[test]
    fn test_classify_from_landmarks_square() {
        let classifier = FaceShapeClassifier::new(LandmarkScheme::dlib68());
        let set = synthetic_dlib68(100.0, 125.0, 95.0, 99.75);
        let result = classifier.classify(&set).unwrap();
        assert_eq!(result.shape, FaceShape::Square);
        assert!((result.confidence - 0.85).abs() < 1e-4);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let classifier = FaceShapeClassifier::new(LandmarkScheme::dlib68());
        let set = synthetic_dlib68(90.0, 140.0, 70.0, 77.0);
        let first = classifier.classify(&set).unwrap();
        let second = classifier.classify(&set).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_rejects_degenerate_jaw() {
        let classifier = FaceShapeClassifier::new(LandmarkScheme::dlib68());
        let set = synthetic_dlib68(100.0, 125.0, 0.0, 99.75);
        let err = classifier.classify(&set).unwrap_err();
        assert!(matches!(err, ClassifyError::DegenerateMeasurement { .. }));
    }

    #[test]
    fn test_classify_rejects_wrong_length() {
        let classifier = FaceShapeClassifier::new(LandmarkScheme::dlib68());
        let set = LandmarkSet::new(vec![Point::zero(); 17]);
        let err = classifier.classify(&set).unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidLandmarkSet(_)));
    }

    #[test]
    fn test_every_result_is_a_known_shape() {
        // Sweep a coarse ratio grid; every valid input must land on one of
        // the seven shapes with confidence in (0, 1].
        for w2h in [0.5, 0.7, 0.9, 1.1] {
            for jaw in [0.6, 0.8, 0.95] {
                for forehead in [0.8, 1.0, 1.3] {
                    let result = FaceShapeClassifier::classify_ratios(&ratios(w2h, jaw, forehead));
                    assert!(FaceShape::ALL.contains(&result.shape));
                    assert!(result.confidence > 0.0 && result.confidence <= 1.0);
                }
            }
        }
    }

    #[test]
    fn test_shape_parse_roundtrip() {
        for shape in FaceShape::ALL {
            assert_eq!(shape.as_str().parse::<FaceShape>().unwrap(), shape);
        }
        assert!("oblong".parse::<FaceShape>().is_err());
    }
}
