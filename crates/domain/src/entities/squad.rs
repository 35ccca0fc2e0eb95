//! Squad - a sub-unit of a team with an ordered movement path

use crate::value_objects::MovePoint;

/// A squad and the path it follows, start to end.
///
/// The path is a plain ordered sequence; how it is keyed in the file is the
/// codec's business.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Squad {
    move_points: Vec<MovePoint>,
    members: Vec<String>,
    marker_icon: Option<String>,
}

impl Squad {
    pub fn new() -> Self {
        Self::default()
    }

    /// A squad with the editor's starter path: three points along y = 100.
    pub fn with_default_path() -> Self {
        let move_points = (0..3)
            .map(|i| MovePoint::new(100.0 + f64::from(i) * 100.0, 100.0))
            .collect();
        Self {
            move_points,
            ..Self::default()
        }
    }

    /// Reconstruct from stored data
    pub fn from_parts(
        move_points: Vec<MovePoint>,
        members: Vec<String>,
        marker_icon: Option<String>,
    ) -> Self {
        Self {
            move_points,
            members,
            marker_icon,
        }
    }

    // Read-only accessors

    pub fn move_points(&self) -> &[MovePoint] {
        &self.move_points
    }

    /// Waypoint at `index`, or `None` past the end of the path.
    pub fn point(&self, index: usize) -> Option<&MovePoint> {
        self.move_points.get(index)
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn marker_icon(&self) -> Option<&str> {
        self.marker_icon.as_deref()
    }

    // Builder-style methods

    pub fn with_points(mut self, points: impl IntoIterator<Item = MovePoint>) -> Self {
        self.move_points = points.into_iter().collect();
        self
    }

    pub fn with_members<S: Into<String>>(mut self, members: impl IntoIterator<Item = S>) -> Self {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_marker_icon(mut self, icon: impl Into<String>) -> Self {
        self.marker_icon = Some(icon.into());
        self
    }

    // Mutation (editor)

    pub fn add_point(&mut self, point: MovePoint) {
        self.move_points.push(point);
    }

    pub fn point_mut(&mut self, index: usize) -> Option<&mut MovePoint> {
        self.move_points.get_mut(index)
    }

    pub fn remove_point(&mut self, index: usize) -> Option<MovePoint> {
        if index < self.move_points.len() {
            Some(self.move_points.remove(index))
        } else {
            None
        }
    }

    pub fn add_member(&mut self, name: impl Into<String>) {
        self.members.push(name.into());
    }

    pub fn set_marker_icon(&mut self, icon: Option<String>) {
        self.marker_icon = icon;
    }
}
