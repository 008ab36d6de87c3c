//! The static catalog data.
//!
//! Entries are plain consts compiled into the binary; there is no loading
//! step and no mutation. Ratings drive the ranking in the query layer.

use crate::types::Gender::{Men, Unisex, Women};
use crate::types::Maintenance;
use crate::types::{BeardStyle, Haircut};
use contour_core::FaceShape::{self, Diamond, Heart, Long, Oval, Round, Square, Triangle};

pub(crate) static HAIRCUTS: &[Haircut] = &[
    // Oval
    Haircut {
        id: "oval-w1",
        name: "Long Layered",
        description: "Long layered hair that frames the face with movement and volume.",
        image_path: "assets/haircuts/women/oval-long-layered.jpg",
        suitable_for: &[Oval],
        attributes: &["long", "layers", "versatile"],
        rating: 4.8,
        gender: Women,
    },
    Haircut {
        id: "oval-w2",
        name: "Chin-Length Bob",
        description: "A chin-length cut that plays up the cheekbones.",
        image_path: "assets/haircuts/women/oval-bob.jpg",
        suitable_for: &[Oval, Diamond],
        attributes: &["medium", "classic", "elegant"],
        rating: 4.7,
        gender: Women,
    },
    Haircut {
        id: "oval-w3",
        name: "Pixie with Bangs",
        description: "A modern short cut that highlights the eyes and cheekbones.",
        image_path: "assets/haircuts/women/oval-pixie.jpg",
        suitable_for: &[Oval, Heart],
        attributes: &["short", "modern", "low maintenance"],
        rating: 4.6,
        gender: Women,
    },
    // Round
    Haircut {
        id: "round-w1",
        name: "Asymmetric Long Bob",
        description: "A shoulder-length cut that visually elongates the face.",
        image_path: "assets/haircuts/women/round-lob.jpg",
        suitable_for: &[Round],
        attributes: &["medium", "asymmetric", "modern"],
        rating: 4.7,
        gender: Women,
    },
    Haircut {
        id: "round-w2",
        name: "Long Layers with Side Bangs",
        description: "A cut built on vertical lines to lengthen the face.",
        image_path: "assets/haircuts/women/round-layers-side.jpg",
        suitable_for: &[Round, Square],
        attributes: &["long", "layers", "bangs"],
        rating: 4.6,
        gender: Women,
    },
    Haircut {
        id: "round-w3",
        name: "Medium Shag",
        description: "A textured cut with volume on top to visually lengthen the face.",
        image_path: "assets/haircuts/women/round-shaggy.jpg",
        suitable_for: &[Round],
        attributes: &["medium", "textured", "volume"],
        rating: 4.5,
        gender: Women,
    },
    // Square
    Haircut {
        id: "square-w1",
        name: "Soft Medium Waves",
        description: "A mid-length cut with waves that soften the angles of the face.",
        image_path: "assets/haircuts/women/square-waves.jpg",
        suitable_for: &[Square],
        attributes: &["medium", "wavy", "soft"],
        rating: 4.8,
        gender: Women,
    },
    Haircut {
        id: "square-w2",
        name: "Long Layers with Curtain Bangs",
        description: "Long layers with an open fringe that softens the forehead.",
        image_path: "assets/haircuts/women/square-long-curtain.jpg",
        suitable_for: &[Square, Diamond],
        attributes: &["long", "layers", "bangs"],
        rating: 4.7,
        gender: Women,
    },
    Haircut {
        id: "square-w3",
        name: "Textured Bob",
        description: "A bob with texture and movement that rounds off the angles.",
        image_path: "assets/haircuts/women/square-textured-bob.jpg",
        suitable_for: &[Square, Round],
        attributes: &["short", "textured", "modern"],
        rating: 4.6,
        gender: Women,
    },
    // Heart
    Haircut {
        id: "heart-w1",
        name: "Bob with Bangs",
        description: "A classic bob with a fringe that balances a wider forehead.",
        image_path: "assets/haircuts/women/heart-bob-bangs.jpg",
        suitable_for: &[Heart],
        attributes: &["medium", "bangs", "classic"],
        rating: 4.7,
        gender: Women,
    },
    Haircut {
        id: "heart-w2",
        name: "Wavy Lob",
        description: "A wavy long bob that adds fullness around the jawline.",
        image_path: "assets/haircuts/women/heart-wavy-lob.jpg",
        suitable_for: &[Heart, Diamond],
        attributes: &["medium", "wavy", "balanced"],
        rating: 4.8,
        gender: Women,
    },
    Haircut {
        id: "heart-w3",
        name: "Long Pixie",
        description: "A pixie kept longer on top than at the nape.",
        image_path: "assets/haircuts/women/heart-long-pixie.jpg",
        suitable_for: &[Heart, Oval],
        attributes: &["short", "modern", "elegant"],
        rating: 4.6,
        gender: Women,
    },
    // Long
    Haircut {
        id: "long-w1",
        name: "Bob with Straight Bangs",
        description: "A bob with a blunt fringe that visually shortens the face.",
        image_path: "assets/haircuts/women/long-bob-straight-bangs.jpg",
        suitable_for: &[Long],
        attributes: &["medium", "bangs", "structured"],
        rating: 4.7,
        gender: Women,
    },
    Haircut {
        id: "long-w2",
        name: "Shag with Curtain Bangs",
        description: "A layered shag with an open fringe that adds width.",
        image_path: "assets/haircuts/women/long-shag-curtain.jpg",
        suitable_for: &[Long, Oval],
        attributes: &["medium", "textured", "bangs"],
        rating: 4.6,
        gender: Women,
    },
    Haircut {
        id: "long-w3",
        name: "Voluminous Medium Waves",
        description: "A mid-length cut with waves that build width and trim visual length.",
        image_path: "assets/haircuts/women/long-waves.jpg",
        suitable_for: &[Long],
        attributes: &["medium", "wavy", "voluminous"],
        rating: 4.8,
        gender: Women,
    },
    // Diamond
    Haircut {
        id: "diamond-w1",
        name: "Long Layers with Side Fringe",
        description: "Long layers with a side-swept fringe that soften the angles.",
        image_path: "assets/haircuts/women/diamond-long-side.jpg",
        suitable_for: &[Diamond],
        attributes: &["long", "layers", "bangs"],
        rating: 4.7,
        gender: Women,
    },
    Haircut {
        id: "diamond-w2",
        name: "Soft Inverted Bob",
        description: "A soft bob that complements prominent cheekbones.",
        image_path: "assets/haircuts/women/diamond-soft-bob.jpg",
        suitable_for: &[Diamond, Heart],
        attributes: &["medium", "soft", "elegant"],
        rating: 4.8,
        gender: Women,
    },
    Haircut {
        id: "diamond-w3",
        name: "Pixie with Long Fringe",
        description: "A short cut with a longer fringe that softens the angles.",
        image_path: "assets/haircuts/women/diamond-pixie-bangs.jpg",
        suitable_for: &[Diamond, Oval],
        attributes: &["short", "bangs", "modern"],
        rating: 4.6,
        gender: Women,
    },
    // Triangle
    Haircut {
        id: "triangle-w1",
        name: "Voluminous Bob",
        description: "A bob with volume on top that balances a wider jaw.",
        image_path: "assets/haircuts/women/triangle-volumized-bob.jpg",
        suitable_for: &[Triangle],
        attributes: &["medium", "voluminous", "balanced"],
        rating: 4.7,
        gender: Women,
    },
    Haircut {
        id: "triangle-w2",
        name: "Short Layered Shag",
        description: "A shag cut whose layers build volume on top.",
        image_path: "assets/haircuts/women/triangle-short-shag.jpg",
        suitable_for: &[Triangle, Square],
        attributes: &["short", "layers", "textured"],
        rating: 4.6,
        gender: Women,
    },
    Haircut {
        id: "triangle-w3",
        name: "Long Layers with Top Volume",
        description: "Long layers with lift at the crown to even out proportions.",
        image_path: "assets/haircuts/women/triangle-long-top.jpg",
        suitable_for: &[Triangle, Heart],
        attributes: &["long", "layers", "voluminous"],
        rating: 4.8,
        gender: Women,
    },
    Haircut {
        id: "oval-u1",
        name: "Soft Shoulder Layers",
        description: "Shoulder-length layers that read well on anyone with even proportions.",
        image_path: "assets/haircuts/unisex/oval-shoulder-layers.jpg",
        suitable_for: &[Oval, Long],
        attributes: &["medium", "layers", "versatile"],
        rating: 4.4,
        gender: Unisex,
    },
    // Men
    Haircut {
        id: "oval-m1",
        name: "Classic Taper",
        description: "A tapered cut with a natural top; suits nearly any proportions.",
        image_path: "assets/haircuts/men/oval-taper.jpg",
        suitable_for: &[Oval, Square],
        attributes: &["short", "classic", "low maintenance"],
        rating: 4.7,
        gender: Men,
    },
    Haircut {
        id: "oval-m2",
        name: "Textured Crop",
        description: "A cropped cut with textured fringe for an even outline.",
        image_path: "assets/haircuts/men/oval-crop.jpg",
        suitable_for: &[Oval, Round],
        attributes: &["short", "textured", "modern"],
        rating: 4.5,
        gender: Men,
    },
    Haircut {
        id: "round-m1",
        name: "High Fade with Pompadour",
        description: "Height on top and tight sides to stretch a rounder face.",
        image_path: "assets/haircuts/men/round-pompadour.jpg",
        suitable_for: &[Round],
        attributes: &["short sides", "volume", "structured"],
        rating: 4.8,
        gender: Men,
    },
    Haircut {
        id: "round-m2",
        name: "Angular Quiff",
        description: "An upswept quiff that adds angles where the face is soft.",
        image_path: "assets/haircuts/men/round-quiff.jpg",
        suitable_for: &[Round, Triangle],
        attributes: &["medium", "volume", "angular"],
        rating: 4.6,
        gender: Men,
    },
    Haircut {
        id: "square-m1",
        name: "Buzz Cut",
        description: "A uniform clipper cut that leans into a strong jawline.",
        image_path: "assets/haircuts/men/square-buzz.jpg",
        suitable_for: &[Square, Oval],
        attributes: &["short", "clean", "low maintenance"],
        rating: 4.6,
        gender: Men,
    },
    Haircut {
        id: "square-m2",
        name: "Side Part",
        description: "A combed side part that softens square proportions.",
        image_path: "assets/haircuts/men/square-side-part.jpg",
        suitable_for: &[Square],
        attributes: &["short", "classic", "formal"],
        rating: 4.7,
        gender: Men,
    },
    Haircut {
        id: "heart-m1",
        name: "Medium Swept Fringe",
        description: "A forward fringe that narrows a wide forehead.",
        image_path: "assets/haircuts/men/heart-fringe.jpg",
        suitable_for: &[Heart],
        attributes: &["medium", "fringe", "soft"],
        rating: 4.6,
        gender: Men,
    },
    Haircut {
        id: "heart-m2",
        name: "Low Fade with Length on Top",
        description: "Longer top with a low fade to balance a narrow chin.",
        image_path: "assets/haircuts/men/heart-low-fade.jpg",
        suitable_for: &[Heart, Diamond],
        attributes: &["medium", "fade", "balanced"],
        rating: 4.5,
        gender: Men,
    },
    Haircut {
        id: "long-m1",
        name: "Flat-Top Crew Cut",
        description: "A flat, wide silhouette that shortens a long face.",
        image_path: "assets/haircuts/men/long-crew.jpg",
        suitable_for: &[Long],
        attributes: &["short", "flat", "structured"],
        rating: 4.5,
        gender: Men,
    },
    Haircut {
        id: "long-m2",
        name: "Medium Side-Swept Layers",
        description: "Side-swept layers that add width at the temples.",
        image_path: "assets/haircuts/men/long-side-swept.jpg",
        suitable_for: &[Long, Oval],
        attributes: &["medium", "layers", "width"],
        rating: 4.6,
        gender: Men,
    },
    Haircut {
        id: "diamond-m1",
        name: "Fringe-Forward Crop",
        description: "A fuller fringe that widens the forehead line.",
        image_path: "assets/haircuts/men/diamond-crop.jpg",
        suitable_for: &[Diamond],
        attributes: &["short", "fringe", "textured"],
        rating: 4.6,
        gender: Men,
    },
    Haircut {
        id: "diamond-m2",
        name: "Medium Waves",
        description: "Relaxed mid-length waves that soften high cheekbones.",
        image_path: "assets/haircuts/men/diamond-waves.jpg",
        suitable_for: &[Diamond, Heart],
        attributes: &["medium", "wavy", "relaxed"],
        rating: 4.5,
        gender: Men,
    },
    Haircut {
        id: "triangle-m1",
        name: "Volumized Brush-Up",
        description: "A brushed-up top that counterweights a broad jaw.",
        image_path: "assets/haircuts/men/triangle-brush-up.jpg",
        suitable_for: &[Triangle],
        attributes: &["short", "volume", "structured"],
        rating: 4.7,
        gender: Men,
    },
    Haircut {
        id: "triangle-m2",
        name: "Layered Top with Taper",
        description: "Layered length on top tapering to neat sides.",
        image_path: "assets/haircuts/men/triangle-layered-taper.jpg",
        suitable_for: &[Triangle, Square],
        attributes: &["medium", "layers", "taper"],
        rating: 4.5,
        gender: Men,
    },
];

pub(crate) static BEARDS: &[BeardStyle] = &[
    BeardStyle {
        id: "beard-oval-1",
        name: "Short Boxed Beard",
        description: "A trimmed full beard that keeps balanced proportions intact.",
        image_path: "assets/beards/short-boxed.jpg",
        suitable_for: &[Oval, Square],
        maintenance: Maintenance::Medium,
        rating: 4.7,
    },
    BeardStyle {
        id: "beard-round-1",
        name: "Extended Goatee",
        description: "A goatee drawn down the chin to lengthen a round face.",
        image_path: "assets/beards/extended-goatee.jpg",
        suitable_for: &[Round],
        maintenance: Maintenance::Medium,
        rating: 4.6,
    },
    BeardStyle {
        id: "beard-round-2",
        name: "Chin Strap with Length",
        description: "A defined strap with depth at the chin for vertical emphasis.",
        image_path: "assets/beards/chin-strap.jpg",
        suitable_for: &[Round, Triangle],
        maintenance: Maintenance::High,
        rating: 4.4,
    },
    BeardStyle {
        id: "beard-square-1",
        name: "Rounded Full Beard",
        description: "A full beard rounded at the jaw corners to soften angles.",
        image_path: "assets/beards/rounded-full.jpg",
        suitable_for: &[Square],
        maintenance: Maintenance::Medium,
        rating: 4.7,
    },
    BeardStyle {
        id: "beard-heart-1",
        name: "Full Beard",
        description: "Fullness along the jaw that fills out a narrow chin.",
        image_path: "assets/beards/full.jpg",
        suitable_for: &[Heart, Diamond],
        maintenance: Maintenance::Low,
        rating: 4.8,
    },
    BeardStyle {
        id: "beard-long-1",
        name: "Heavy Stubble",
        description: "Even stubble that adds width without adding length.",
        image_path: "assets/beards/heavy-stubble.jpg",
        suitable_for: &[Long, Oval],
        maintenance: Maintenance::Low,
        rating: 4.6,
    },
    BeardStyle {
        id: "beard-diamond-1",
        name: "Chin Curtain",
        description: "Weight along the jawline that broadens a narrow jaw.",
        image_path: "assets/beards/chin-curtain.jpg",
        suitable_for: &[Diamond],
        maintenance: Maintenance::Medium,
        rating: 4.4,
    },
    BeardStyle {
        id: "beard-triangle-1",
        name: "Balbo",
        description: "A shaped beard that draws attention up and off the jaw.",
        image_path: "assets/beards/balbo.jpg",
        suitable_for: &[Triangle, Square],
        maintenance: Maintenance::High,
        rating: 4.5,
    },
];

/// Short explanatory blurb for each face shape, shown alongside results.
pub(crate) fn shape_description(shape: FaceShape) -> &'static str {
    match shape {
        FaceShape::Oval => {
            "Oval faces are well balanced, with a slightly wider forehead and a \
             gently rounded jawline. This versatile shape works with most cuts."
        }
        FaceShape::Round => {
            "Round faces have soft features, a rounded chin and fuller cheeks. \
             Styles that add height and angles create definition."
        }
        FaceShape::Square => {
            "Square faces carry a strong, angular jawline and usually a wider \
             forehead. Styles that soften the angles while keeping proportion are ideal."
        }
        FaceShape::Heart => {
            "Heart-shaped faces pair a wider forehead and cheekbones with a \
             narrow chin. Balancing the top with fuller styles at the jawline works well."
        }
        FaceShape::Long => {
            "Long faces are taller than they are wide, with a high forehead. \
             Styles that build width and cut visual height even things out."
        }
        FaceShape::Diamond => {
            "Diamond faces have a narrow forehead and jawline with wide \
             cheekbones. Styles that add width at the forehead and jaw are most flattering."
        }
        FaceShape::Triangle => {
            "Triangular faces have a jawline wider than the forehead. Styles \
             with volume on top help balance the proportions."
        }
    }
}
