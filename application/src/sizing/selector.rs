use domain::error::{DomainError, DomainResult};
use domain::size::{AvailableSizes, Size};

/// Picks the frame size to convert.
///
/// Without a desired size the largest frame wins. With one, an exact match
/// wins, then the squarest and smallest frame covering it in both
/// dimensions, and finally the largest frame.
pub fn select_size(available: &AvailableSizes, desired: Option<Size>) -> DomainResult<Size> {
    let largest = available.largest().ok_or(DomainError::NoSizesAvailable)?;

    let Some(desired) = desired else {
        return Ok(largest);
    };

    if available.contains(&desired) {
        return Ok(desired);
    }

    let nearest_larger = available
        .iter()
        .filter(|candidate| candidate.covers(&desired))
        .min_by_key(|candidate| {
            (
                candidate.skew(),
                candidate.area(),
                candidate.width(),
                candidate.height(),
            )
        });

    Ok(nearest_larger.copied().unwrap_or(largest))
}
