//! contour-core — geometric face-shape classification.
//!
//! Turns a facial landmark set produced by an upstream detector into one of
//! seven coarse face-shape categories with a confidence score, using
//! threshold rules over a handful of width/height ratios.

pub mod classifier;
pub mod error;
pub mod landmarks;
pub mod measurements;

pub use classifier::{ClassificationResult, FaceShape, FaceShapeClassifier};
pub use error::ClassifyError;
pub use landmarks::{LandmarkScheme, LandmarkSet, Point};
pub use measurements::{FaceMeasurements, FaceRatios};
