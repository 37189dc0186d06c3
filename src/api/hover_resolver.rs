use ordered_float::OrderedFloat;

use crate::interaction::CursorPosition;

use super::PlacedPoint;

/// Linear scan for the point closest to the cursor in normalized space.
///
/// Distance ordering only, so the square root is omitted. Ties resolve to
/// the earliest point in iteration order. Point sets are tens of entries at
/// most, which is why there is no spatial index here.
#[must_use]
pub(super) fn nearest_point_index(
    cursor: CursorPosition,
    points: &[PlacedPoint],
) -> Option<usize> {
    let mut best: Option<(OrderedFloat<f64>, usize)> = None;
    for (index, point) in points.iter().enumerate() {
        let dx = point.x_pct - cursor.x;
        let dy = point.y_pct - cursor.y;
        let distance = OrderedFloat(dx * dx + dy * dy);
        match best {
            Some((current, _)) if current <= distance => {}
            _ => best = Some((distance, index)),
        }
    }
    best.map(|(_, index)| index)
}
