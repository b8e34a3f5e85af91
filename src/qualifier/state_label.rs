use serde::{Deserialize, Serialize};

/// Occupancy state reported for a tracked object in one frame.
///
/// Variants are declared in ascending precedence, so when several signals
/// apply to the same object the label is their maximum:
/// `Arrived > Left > Move > None`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum StateLabel {
    /// Nothing notable
    #[default]
    #[serde(rename = "")]
    None,
    /// Centroid moved more than the motion threshold since the previous frame
    #[serde(rename = "MOVE")]
    Move,
    /// Most recent identity to vacate the stall, still within its memory window
    #[serde(rename = "LEFT")]
    Left,
    /// Box overlaps the monitored stall
    #[serde(rename = "ARRIVED")]
    Arrived,
}

impl StateLabel {
    /// Label as emitted downstream; `None` is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Move => "MOVE",
            Self::Left => "LEFT",
            Self::Arrived => "ARRIVED",
        }
    }

    /// Combine independent signals using the precedence order.
    pub fn resolve(moved: bool, recently_left: bool, arrived: bool) -> Self {
        [
            (moved, Self::Move),
            (recently_left, Self::Left),
            (arrived, Self::Arrived),
        ]
        .into_iter()
        .filter_map(|(signal, label)| signal.then_some(label))
        .max()
        .unwrap_or_default()
    }
}

impl std::fmt::Display for StateLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
