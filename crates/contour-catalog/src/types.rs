use contour_core::FaceShape;
use serde::Serialize;

/// Audience a catalog entry is styled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Women,
    Men,
    Unisex,
}

impl Gender {
    /// Whether an entry tagged with `self` belongs in results for the
    /// requested audience. Unisex entries match everyone.
    pub fn includes(&self, requested: Gender) -> bool {
        *self == requested || *self == Gender::Unisex
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Women => "women",
            Gender::Men => "men",
            Gender::Unisex => "unisex",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "women" => Ok(Gender::Women),
            "men" => Ok(Gender::Men),
            "unisex" => Ok(Gender::Unisex),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

/// Upkeep a beard style demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Maintenance {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Maintenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Maintenance::Low => "low",
            Maintenance::Medium => "medium",
            Maintenance::High => "high",
        })
    }
}

/// One haircut in the static catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Haircut {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image_path: &'static str,
    /// Face shapes this cut flatters.
    pub suitable_for: &'static [FaceShape],
    pub attributes: &'static [&'static str],
    /// Editorial rating on a 0–5 scale, used for ranking.
    pub rating: f32,
    pub gender: Gender,
}

impl Haircut {
    pub fn suits(&self, shape: FaceShape) -> bool {
        self.suitable_for.contains(&shape)
    }
}

/// One beard style in the static catalog. Beards have no gender split.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BeardStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image_path: &'static str,
    pub suitable_for: &'static [FaceShape],
    pub maintenance: Maintenance,
    pub rating: f32,
}

impl BeardStyle {
    pub fn suits(&self, shape: FaceShape) -> bool {
        self.suitable_for.contains(&shape)
    }
}
