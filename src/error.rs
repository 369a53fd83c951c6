/// Errors reported for bad input or violated preconditions.
///
/// Every fallible operation is all-or-nothing: an `Err` return
/// leaves the target unchanged.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("width and height must be positive real numbers or unlimited")]
    InvalidDimensions,
    #[error("widget size must consist of positive real numbers")]
    InvalidSize,
    #[error("index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no font has been assigned")]
    NoFont,
    #[error("fill amount {0} is not in the range [0, 1]")]
    FillOutOfRange(f32),
    #[error("widget id does not refer to a live widget")]
    DanglingWidget,
    #[error("this widget is not a frame")]
    NotAFrame,
    #[error("drag constraint area may not have zero size")]
    EmptyConstraintArea,
}
