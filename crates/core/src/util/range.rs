use crate::Meter;
use derive_more::Display;
use std::{
    fmt::{Debug, Display},
    marker::PhantomData,
    ops,
};

/// A type of value that we can create ranges of, where a range has a min and
/// max. Usually, the type parameter `I` isn't necessary, because it's just
/// `Self`. It's useful for newtypes that hold an `f64`, e.g. [Meter]. In that
/// case, the type param is whatever internal type you use for the math.
pub trait Rangeable<I = Self>:
    Copy
    + Debug
    + Display
    + PartialOrd
    + From<I>
    + Into<I>
    + ops::Add<Self, Output = Self>
    + ops::Sub<Self, Output = Self>
    + ops::Mul<I, Output = Self>
    + ops::Div<I, Output = Self>
{
    fn zero() -> Self;
}

impl Rangeable for f32 {
    fn zero() -> Self {
        0.0
    }
}

impl Rangeable for f64 {
    fn zero() -> Self {
        0.0
    }
}

impl Rangeable<f64> for Meter {
    fn zero() -> Self {
        0.0.into()
    }
}

/// A range between two numeric values, inclusive on both ends.
///
/// ## Type Parameters
///
/// - `T` represents the type of values represented by this range, e.g. `f64` or
///   `Meter`
/// - `I` represents the underlying primitive type that we use for numeric
///   comparisons. E.g. for `Meter` we map down to `f64`, but for `f64` it's
///   still just `f64`
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct NumRange<T: Rangeable<I>, I = T> {
    pub min: T,
    pub max: T,
    phantom: PhantomData<I>,
}

impl<T: Into<I> + Rangeable<I>, I> NumRange<T, I> {
    pub const fn new(min: T, max: T) -> Self {
        Self {
            min,
            max,
            phantom: PhantomData,
        }
    }

    /// Create a [RangeValue] in this range, which is convenient for chaining
    /// operations on a single value.
    pub fn value(self, value: T) -> RangeValue<T, I> {
        RangeValue { value, range: self }
    }

    /// Max minus min
    pub fn span(&self) -> T {
        self.max - self.min
    }

    /// Check if a value is in this range. Ranges are inclusive on both ends.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Map a value from this range to the target range. If the span of this
    /// range is zero, we can't properly map the value because we don't know
    /// where on the target range it should fall. In that case, we just always
    /// return the **minimum** of the target range.
    pub fn map_to(&self, dest_range: &Self, value: T) -> T {
        let span = self.span();
        if span > T::zero() {
            // Map down to [0,1], then map back up to the target range
            let normalized = (value - self.min) / span.into();
            dest_range.min + (normalized * dest_range.span().into())
        } else {
            dest_range.min
        }
    }

    /// Force a value into this range. If it's already in the range, return
    /// that value. If it's outside the range, return the bound (lower or upper)
    /// that's closest to the value.
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// An alternative interface for [NumRange] that makes it easy to chain
/// operations on a single value.
///
/// ```
/// use terra_plot::NumRange;
///
/// let range: NumRange<f64> = NumRange::new(10.0, 20.0);
/// let value = range
///     .value(15.0)
///     .map_to(NumRange::new(0.0, 20.0))
///     .inner();
/// assert_eq!(value, 10.0);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct RangeValue<T: Rangeable<I>, I> {
    value: T,
    range: NumRange<T, I>,
}

impl<T: Into<I> + Rangeable<I>, I: Debug> RangeValue<T, I> {
    /// Get the value from this struct
    pub fn inner(self) -> T {
        self.value
    }

    /// Map this value from the current range to a new range.
    pub fn map_to(self, range: NumRange<T, I>) -> Self {
        let new_value = self.range.map_to(&range, self.value);
        Self {
            range,
            value: new_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_span() {
        let range: NumRange<f64> = NumRange::new(1.0, 3.0);
        assert_approx_eq!(range.span(), 2.0);
    }

    #[test]
    fn test_contains() {
        let range: NumRange<f64> = NumRange::new(1.0, 3.0);
        assert!(!range.contains(0.9));
        assert!(range.contains(1.0));
        assert!(range.contains(2.0));
        assert!(range.contains(3.0));
        assert!(!range.contains(3.1));

        // Test a zero-length span, it should contain exactly one value
        let range: NumRange<f64> = NumRange::new(1.0, 1.0);
        assert!(!range.contains(0.9));
        assert!(range.contains(1.0));
        assert!(!range.contains(1.1));

        let range: NumRange<Meter, f64> =
            NumRange::new(Meter(-100.0), Meter(100.0));
        assert!(range.contains(Meter(0.0)));
        assert!(!range.contains(Meter(100.1)));
    }

    #[test]
    fn test_map_to() {
        let input_range: NumRange<f64> = NumRange::new(1.0, 3.0);
        let output_range: NumRange<f64> = NumRange::new(20.0, 40.0);
        assert_approx_eq!(input_range.map_to(&output_range, 0.0), 10.0);
        assert_approx_eq!(input_range.map_to(&output_range, 1.0), 20.0);
        assert_approx_eq!(input_range.map_to(&output_range, 2.0), 30.0);
        assert_approx_eq!(input_range.map_to(&output_range, 3.0), 40.0);
        assert_approx_eq!(input_range.map_to(&output_range, 6.0), 70.0);

        // Zero-length span always maps to the min of the output range
        let input_range: NumRange<f64> = NumRange::new(1.0, 1.0);
        assert_approx_eq!(input_range.map_to(&output_range, 0.0), 20.0);
        assert_approx_eq!(input_range.map_to(&output_range, 1.5), 20.0);
    }

    #[test]
    fn test_value_chain() {
        let range: NumRange<f64> = NumRange::new(10.0, 20.0);
        let unit = NumRange::new(0.0, 1.0);
        assert_approx_eq!(range.value(15.0).map_to(unit).inner(), 0.5);
        assert_approx_eq!(range.value(5.0).map_to(unit).inner(), -0.5);
    }

    #[test]
    fn test_clamp() {
        let range: NumRange<f64> = NumRange::new(1.0, 3.0);
        assert_approx_eq!(range.clamp(0.0), 1.0);
        assert_approx_eq!(range.clamp(2.0), 2.0);
        assert_approx_eq!(range.clamp(6.0), 3.0);
    }
}
