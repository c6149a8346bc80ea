// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::Float;

/// A half-open interval `[start, end)` over floating point bounds.
///
/// Neighborhood boundaries sit on midpoints between integer positions, so
/// they are not representable by integer intervals. This type keeps the
/// closed-open convention (start inclusive, end exclusive) so that
/// consecutive neighborhoods tile a road without overlapping.
///
/// # Invariants
/// Both bounds are finite and `start_inclusive <= end_exclusive`.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct HalfOpenInterval<F>
where
    F: Float,
{
    start_inclusive: F,
    end_exclusive: F,
}

impl<F> HalfOpenInterval<F>
where
    F: Float,
{
    /// Creates a new `HalfOpenInterval`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is not finite or if `start_inclusive > end_exclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use roadside_core::math::interval::HalfOpenInterval;
    ///
    /// let iv = HalfOpenInterval::new(0.0, 4.5);
    /// assert_eq!(iv.length(), 4.5);
    /// ```
    #[inline]
    pub fn new(start_inclusive: F, end_exclusive: F) -> Self {
        assert!(
            start_inclusive.is_finite() && end_exclusive.is_finite(),
            "Invalid interval: bounds must be finite"
        );
        assert!(
            start_inclusive <= end_exclusive,
            "Invalid interval: start_inclusive must be less than or equal to end_exclusive"
        );
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Creates a new `HalfOpenInterval` if the bounds are valid.
    ///
    /// Returns `None` if a bound is not finite or `start_inclusive > end_exclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use roadside_core::math::interval::HalfOpenInterval;
    ///
    /// assert!(HalfOpenInterval::try_new(0.0, 10.0).is_some());
    /// assert!(HalfOpenInterval::try_new(10.0, 0.0).is_none());
    /// assert!(HalfOpenInterval::try_new(0.0, f64::NAN).is_none());
    /// ```
    #[inline]
    pub fn try_new(start_inclusive: F, end_exclusive: F) -> Option<Self> {
        if start_inclusive.is_finite()
            && end_exclusive.is_finite()
            && start_inclusive <= end_exclusive
        {
            Some(Self {
                start_inclusive,
                end_exclusive,
            })
        } else {
            None
        }
    }

    /// Creates a new `HalfOpenInterval` without checking invariants in release builds.
    ///
    /// The caller must ensure both bounds are finite and `start_inclusive <= end_exclusive`.
    #[inline]
    pub fn new_unchecked(start_inclusive: F, end_exclusive: F) -> Self {
        debug_assert!(
            start_inclusive <= end_exclusive,
            "Invalid interval: start_inclusive must be less than or equal to end_exclusive"
        );
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub fn start(&self) -> F {
        self.start_inclusive
    }

    /// Returns the exclusive end bound.
    #[inline]
    pub fn end(&self) -> F {
        self.end_exclusive
    }

    /// Returns the length of the interval (`end - start`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use roadside_core::math::interval::HalfOpenInterval;
    ///
    /// let iv = HalfOpenInterval::new(4.5, 10.0);
    /// assert_eq!(iv.length(), 5.5);
    /// ```
    #[inline]
    pub fn length(&self) -> F {
        self.end_exclusive - self.start_inclusive
    }

    /// Returns `true` if the interval covers no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_inclusive >= self.end_exclusive
    }

    /// Returns `true` if `value` is contained in `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use roadside_core::math::interval::HalfOpenInterval;
    ///
    /// let iv = HalfOpenInterval::new(0.0, 4.5);
    /// assert!(iv.contains_point(0.0));
    /// assert!(iv.contains_point(4.4));
    /// assert!(!iv.contains_point(4.5));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: F) -> bool {
        self.start_inclusive <= value && value < self.end_exclusive
    }

    /// Returns `true` if the intervals overlap on a non-empty range.
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start_inclusive < other.end_exclusive && other.start_inclusive < self.end_exclusive
    }

    /// Returns `true` if the intervals share a boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use roadside_core::math::interval::HalfOpenInterval;
    ///
    /// let a = HalfOpenInterval::new(0.0, 4.5);
    /// let b = HalfOpenInterval::new(4.5, 10.0);
    /// assert!(a.adjacent(b));
    /// assert!(!a.intersects(b));
    /// ```
    #[inline]
    pub fn adjacent(&self, other: Self) -> bool {
        self.end_exclusive == other.start_inclusive || other.end_exclusive == self.start_inclusive
    }
}

/// Returns the real-valued midpoint of two integer coordinates.
///
/// Both coordinates are converted before dividing, so odd sums keep their
/// fractional half instead of being truncated.
///
/// # Examples
///
/// ```rust
/// # use roadside_core::math::interval::midpoint;
///
/// assert_eq!(midpoint::<f64>(2, 7), 4.5);
/// assert_eq!(midpoint::<f64>(-3, 3), 0.0);
/// ```
#[inline]
pub fn midpoint<F>(a: i64, b: i64) -> F
where
    F: Float,
{
    let a = F::from(a).unwrap_or_else(F::nan);
    let b = F::from(b).unwrap_or_else(F::nan);
    (a + b) / (F::one() + F::one())
}

impl<F> Default for HalfOpenInterval<F>
where
    F: Float,
{
    fn default() -> Self {
        Self {
            start_inclusive: F::zero(),
            end_exclusive: F::zero(),
        }
    }
}

impl<F> std::fmt::Debug for HalfOpenInterval<F>
where
    F: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HalfOpenInterval")
            .field("start_inclusive", &self.start_inclusive)
            .field("end_exclusive", &self.end_exclusive)
            .finish()
    }
}

impl<F> std::fmt::Display for HalfOpenInterval<F>
where
    F: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start_inclusive, self.end_exclusive)
    }
}
