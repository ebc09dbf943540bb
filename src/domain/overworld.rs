//! Built-in overworld domain: grass, road, and a nine-piece water body
//!
//! The water categories tile a lake out of edge pieces (L/M/R columns
//! crossed with bottom/middle/overhang rows), so the rule table is uneven
//! on purpose: edge pieces only accept the pieces that continue the shore.

use crate::algorithm::seeding::Seed;
use crate::domain::model::{Direction, Domain};
use crate::io::error::Result;

/// Category anchoring water bodies; used by the default center seed
pub const WATER_CENTER: &str = "waterMM";

/// Build the overworld category vocabulary and adjacency table
///
/// Tile indices reference the external overworld tileset; road carries four
/// interchangeable variants for texture variety.
///
/// # Errors
///
/// Returns an error if the rule table fails domain validation; the
/// declarations below are total, so this only fires if they are edited
/// inconsistently.
pub fn domain() -> Result<Domain> {
    use Direction::{East, North, South, West};

    Domain::builder()
        .category("grass", &[0])
        .category("waterLB", &[4])
        .category("waterMB", &[5])
        .category("waterRB", &[6])
        .category("waterLM", &[12])
        .category("waterMM", &[13])
        .category("waterRM", &[14])
        .category("waterLO", &[20])
        .category("waterMO", &[21])
        .category("waterRO", &[22])
        .category("road", &[46, 47, 39, 38])
        .rule(
            "grass",
            North,
            &["grass", "road", "waterLO", "waterMO", "waterRO"],
        )
        .rule(
            "grass",
            South,
            &["grass", "road", "waterLB", "waterMB", "waterRB"],
        )
        .rule(
            "grass",
            East,
            &["grass", "road", "waterLM", "waterLO", "waterLB"],
        )
        .rule(
            "grass",
            West,
            &["grass", "road", "waterRM", "waterRO", "waterRB"],
        )
        .rule("waterLB", North, &["grass"])
        .rule("waterLB", South, &["waterLM", "waterLO"])
        .rule("waterLB", East, &["waterMM"])
        .rule("waterLB", West, &["grass"])
        .rule("waterMB", North, &["grass"])
        .rule("waterMB", South, &["waterMM"])
        .rule("waterMB", East, &["waterMB", "waterRB"])
        .rule("waterMB", West, &["waterMB", "waterLB"])
        .rule("waterRB", North, &["grass"])
        .rule("waterRB", South, &["waterRM", "waterRO"])
        .rule("waterRB", East, &["grass"])
        .rule("waterRB", West, &["waterMB", "waterLB"])
        .rule("waterLO", North, &["waterLM"])
        .rule("waterLO", South, &["grass"])
        .rule("waterLO", East, &["waterMO", "waterRO"])
        .rule("waterLO", West, &["grass"])
        .rule("waterMO", North, &["waterMM"])
        .rule("waterMO", South, &["grass"])
        .rule("waterMO", East, &["waterMO", "waterRO"])
        .rule("waterMO", West, &["waterMO", "waterLO"])
        .rule("waterRO", North, &["waterRM", "waterRB"])
        .rule("waterRO", South, &["grass"])
        .rule("waterRO", East, &["grass"])
        .rule("waterRO", West, &["waterMO", "waterLO"])
        .rule("waterRM", North, &["waterRM", "waterRB"])
        .rule("waterRM", South, &["waterRM", "waterRO"])
        .rule("waterRM", East, &["grass"])
        .rule("waterRM", West, &["waterMM"])
        .rule("waterMM", North, &["waterMB"])
        .rule("waterMM", South, &["waterMO"])
        .rule("waterMM", East, &["waterRM"])
        .rule("waterMM", West, &["waterLM"])
        .rule("waterLM", North, &["waterLM", "waterLB"])
        .rule("waterLM", South, &["waterLM", "waterLO"])
        .rule("waterLM", East, &["waterMM"])
        .rule("waterLM", West, &["grass"])
        .rule("road", North, &["road", "grass"])
        .rule("road", South, &["road", "grass"])
        .rule("road", East, &["road", "grass"])
        .rule("road", West, &["road", "grass"])
        .build()
}

/// Default seeding: anchor a water-body center at the middle of the map
///
/// Biases generation toward a connected lake instead of scattered water
/// fragments that mostly contradict.
pub fn center_seed(width: usize, height: usize) -> Vec<Seed> {
    vec![Seed::new(width / 2, height / 2, WATER_CENTER)]
}
