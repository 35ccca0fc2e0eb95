//! Value objects - small records owned by the scenario entities

mod correctness;
mod explanations;
mod move_point;
mod overlay;

pub use correctness::{CorrectnessMarker, DistractorRank};
pub use explanations::Explanations;
pub use move_point::MovePoint;
pub use overlay::{PlacedLogo, TextAnnotation};
