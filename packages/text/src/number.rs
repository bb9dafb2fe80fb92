/// Limit `value` to `[min, max]`.
///
/// The lower bound is applied first, so `max` wins when `min > max`.
/// Unordered values such as NaN pass through unchanged.
pub fn clip<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let lower = if value < min { min } else { value };
    if lower > max {
        max
    } else {
        lower
    }
}
