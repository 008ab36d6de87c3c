use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use contour_catalog::{BeardStyle, Gender, Haircut};
use contour_core::{FaceShape, FaceShapeClassifier, LandmarkScheme, LandmarkSet};
use std::path::{Path, PathBuf};

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "contour", about = "Face-shape analysis and style recommendation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a face from a landmark file and suggest styles
    Analyze {
        /// JSON landmark file produced by the upstream detector
        input: PathBuf,
        /// Landmark layout of the input file
        #[arg(long, value_enum)]
        scheme: Option<SchemeArg>,
        /// Audience for haircut suggestions
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
        /// Maximum suggestions per category
        #[arg(long)]
        limit: Option<usize>,
        /// Include beard suggestions
        #[arg(long)]
        beards: bool,
        /// Emit one JSON document instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the seven face shapes with their descriptions
    Shapes,
    /// Browse the catalog for one face shape
    Styles {
        /// Face shape to browse (oval, round, square, heart, long, diamond, triangle)
        #[arg(long)]
        shape: FaceShape,
        /// Audience for haircut suggestions
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
        /// Include beard suggestions
        #[arg(long)]
        beards: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemeArg {
    Dlib68,
    Mediapipe468,
}

impl SchemeArg {
    fn to_scheme(self) -> LandmarkScheme {
        match self {
            SchemeArg::Dlib68 => LandmarkScheme::dlib68(),
            SchemeArg::Mediapipe468 => LandmarkScheme::mediapipe468(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Women,
    Men,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Women => Gender::Women,
            GenderArg::Men => Gender::Men,
        }
    }
}

/// JSON document emitted by `analyze --json`.
#[derive(serde::Serialize)]
struct Report {
    shape: FaceShape,
    confidence: f32,
    description: &'static str,
    haircuts: Vec<&'static Haircut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    beards: Option<Vec<&'static BeardStyle>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let defaults = Config::from_env();

    match cli.command {
        Commands::Analyze {
            input,
            scheme,
            gender,
            limit,
            beards,
            json,
        } => {
            let scheme = scheme.map(SchemeArg::to_scheme).unwrap_or(defaults.scheme);
            let gender = gender.map(Gender::from).unwrap_or(defaults.gender);
            let limit = limit.unwrap_or(defaults.limit);
            run_analyze(&input, scheme, gender, limit, beards, json)
        }
        Commands::Shapes => {
            for shape in FaceShape::ALL {
                println!("{shape}: {}", contour_catalog::shape_description(shape));
            }
            Ok(())
        }
        Commands::Styles {
            shape,
            gender,
            beards,
        } => {
            let gender = gender.map(Gender::from).unwrap_or(defaults.gender);
            print_suggestions(shape, gender, usize::MAX, beards);
            Ok(())
        }
    }
}

fn run_analyze(
    input: &Path,
    scheme: LandmarkScheme,
    gender: Gender,
    limit: usize,
    beards: bool,
    json: bool,
) -> Result<()> {
    let landmarks = read_landmarks(input)?;
    tracing::debug!(
        path = %input.display(),
        points = landmarks.len(),
        scheme = scheme.name,
        "landmark file loaded"
    );

    let classifier = FaceShapeClassifier::new(scheme);
    let result = classifier.classify(&landmarks)?;

    let haircuts = contour_catalog::recommended_haircuts(result.shape, gender, limit);
    let beard_picks = beards.then(|| contour_catalog::recommended_beards(result.shape, limit));

    if json {
        let report = Report {
            shape: result.shape,
            confidence: result.confidence,
            description: contour_catalog::shape_description(result.shape),
            haircuts,
            beards: beard_picks,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "face shape: {} (confidence {:.0}%)",
        result.shape,
        result.confidence * 100.0
    );
    println!("{}", contour_catalog::shape_description(result.shape));
    println!();

    print_haircuts(&haircuts);
    if let Some(picks) = beard_picks {
        println!();
        print_beards(&picks);
    }

    Ok(())
}

fn read_landmarks(input: &Path) -> Result<LandmarkSet> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("reading landmark file {}", input.display()))?;
    let landmarks: LandmarkSet =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", input.display()))?;
    Ok(landmarks)
}

fn print_suggestions(shape: FaceShape, gender: Gender, limit: usize, beards: bool) {
    println!("{shape}: {}", contour_catalog::shape_description(shape));
    println!();
    print_haircuts(&contour_catalog::recommended_haircuts(shape, gender, limit));
    if beards {
        println!();
        print_beards(&contour_catalog::recommended_beards(shape, limit));
    }
}

fn print_haircuts(haircuts: &[&Haircut]) {
    if haircuts.is_empty() {
        println!("no matching haircuts in the catalog");
        return;
    }
    println!("haircuts:");
    for (i, cut) in haircuts.iter().enumerate() {
        println!("  {}. {} [{:.1}]", i + 1, cut.name, cut.rating);
        println!("     {}", cut.description);
    }
}

fn print_beards(beards: &[&BeardStyle]) {
    if beards.is_empty() {
        println!("no matching beard styles in the catalog");
        return;
    }
    println!("beard styles:");
    for (i, beard) in beards.iter().enumerate() {
        println!(
            "  {}. {} [{:.1}, {} maintenance]",
            i + 1,
            beard.name,
            beard.rating,
            beard.maintenance
        );
        println!("     {}", beard.description);
    }
}
