use crate::snake::Position;

/// Snake segment positions captured right before the latest step.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct StepSnapshot {
    segments: Vec<Position>,
}

impl StepSnapshot {
    #[must_use]
    pub fn new(segments: Vec<Position>) -> Self {
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }
}

/// Segment position in fractional grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendedPosition {
    pub x: f64,
    pub y: f64,
}

/// Blends each current segment from where it was before the step.
///
/// Segment `i` moves from `snapshot[i]` to `current[i]`. When the snake grew
/// during the step it has one more segment than the snapshot; that new tail
/// starts from the snapshot's last segment so it unrolls out of the old tail.
/// `t` is clamped to `[0, 1]`.
#[must_use]
pub fn interpolated_segments(
    snapshot: &StepSnapshot,
    current: &[Position],
    t: f64,
) -> Vec<BlendedPosition> {
    let t = t.clamp(0.0, 1.0);
    let previous = snapshot.segments();
    let fallback = previous.last().copied();

    current
        .iter()
        .enumerate()
        .map(|(index, to)| {
            let from = previous.get(index).copied().or(fallback).unwrap_or(*to);
            BlendedPosition {
                x: lerp(f64::from(from.x), f64::from(to.x), t),
                y: lerp(f64::from(from.y), f64::from(to.y), t),
            }
        })
        .collect()
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
