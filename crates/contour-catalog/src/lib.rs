//! contour-catalog — static style suggestions per face shape.
//!
//! A fixed in-memory catalog of haircuts and beard styles tagged with the
//! face shapes they flatter, plus the filter/sort/limit queries the
//! recommendation surface is built on. The classified [`FaceShape`] is the
//! sole input on the lookup path.

mod data;
mod types;

use contour_core::FaceShape;
use std::cmp::Ordering;

pub use types::{BeardStyle, Gender, Haircut, Maintenance};

/// Top haircut picks for a face shape and audience, best rated first.
pub fn recommended_haircuts(
    shape: FaceShape,
    gender: Gender,
    limit: usize,
) -> Vec<&'static Haircut> {
    let mut suitable: Vec<&Haircut> = data::HAIRCUTS
        .iter()
        .filter(|cut| cut.suits(shape) && cut.gender.includes(gender))
        .collect();
    suitable.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    suitable.truncate(limit);

    tracing::debug!(
        shape = %shape,
        gender = %gender,
        returned = suitable.len(),
        "haircut lookup"
    );

    suitable
}

/// Every haircut styled for the given audience, in catalog order.
pub fn all_haircuts(gender: Gender) -> Vec<&'static Haircut> {
    data::HAIRCUTS
        .iter()
        .filter(|cut| cut.gender.includes(gender))
        .collect()
}

/// All haircuts for one shape and audience, unranked.
pub fn haircuts_for_shape(shape: FaceShape, gender: Gender) -> Vec<&'static Haircut> {
    data::HAIRCUTS
        .iter()
        .filter(|cut| cut.suits(shape) && cut.gender.includes(gender))
        .collect()
}

pub fn haircut_by_id(id: &str) -> Option<&'static Haircut> {
    data::HAIRCUTS.iter().find(|cut| cut.id == id)
}

/// Top beard picks for a face shape, best rated first.
pub fn recommended_beards(shape: FaceShape, limit: usize) -> Vec<&'static BeardStyle> {
    let mut suitable: Vec<&BeardStyle> =
        data::BEARDS.iter().filter(|beard| beard.suits(shape)).collect();
    suitable.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    suitable.truncate(limit);
    suitable
}

/// Short explanatory blurb for a face shape.
pub fn shape_description(shape: FaceShape) -> &'static str {
    data::shape_description(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_recommendations_respect_limit() {
        let cuts = recommended_haircuts(FaceShape::Oval, Gender::Women, 2);
        assert_eq!(cuts.len(), 2);
    }

    #[test]
    fn test_recommendations_sorted_by_rating() {
        let cuts = recommended_haircuts(FaceShape::Square, Gender::Women, 10);
        assert!(!cuts.is_empty());
        for pair in cuts.windows(2) {
            assert!(
                pair[0].rating >= pair[1].rating,
                "{} ({}) ranked above {} ({})",
                pair[0].id,
                pair[0].rating,
                pair[1].id,
                pair[1].rating
            );
        }
    }

    #[test]
    fn test_recommendations_match_shape_and_gender() {
        for cut in recommended_haircuts(FaceShape::Round, Gender::Men, 10) {
            assert!(cut.suits(FaceShape::Round));
            assert!(cut.gender == Gender::Men || cut.gender == Gender::Unisex);
        }
    }

    #[test]
    fn test_every_shape_has_recommendations() {
        for shape in FaceShape::ALL {
            for gender in [Gender::Women, Gender::Men] {
                assert!(
                    !recommended_haircuts(shape, gender, 5).is_empty(),
                    "no {gender} haircut for {shape}"
                );
            }
            assert!(
                !recommended_beards(shape, 5).is_empty(),
                "no beard style for {shape}"
            );
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut seen = HashSet::new();
        for cut in data::HAIRCUTS {
            assert!(seen.insert(cut.id), "duplicate haircut id {}", cut.id);
        }
        for beard in data::BEARDS {
            assert!(seen.insert(beard.id), "duplicate beard id {}", beard.id);
        }
    }

    #[test]
    fn test_unisex_entries_visible_to_everyone() {
        for gender in [Gender::Women, Gender::Men] {
            assert!(
                all_haircuts(gender).iter().any(|cut| cut.gender == Gender::Unisex),
                "unisex cuts missing from {gender} results"
            );
        }
    }

    #[test]
    fn test_haircut_by_id() {
        let cut = haircut_by_id("oval-w1").expect("oval-w1 exists");
        assert_eq!(cut.name, "Long Layered");
        assert!(haircut_by_id("no-such-id").is_none());
    }

    #[test]
    fn test_haircuts_for_shape_unranked_superset() {
        let all = haircuts_for_shape(FaceShape::Heart, Gender::Women);
        let ranked = recommended_haircuts(FaceShape::Heart, Gender::Women, usize::MAX);
        assert_eq!(all.len(), ranked.len());
    }

    #[test]
    fn test_shape_descriptions_non_empty() {
        for shape in FaceShape::ALL {
            assert!(!shape_description(shape).is_empty());
        }
    }
}
