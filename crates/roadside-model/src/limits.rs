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

//! Bounds applied while constructing a road.
//!
//! The defaults match the classic road description format: a road length in
//! `[3, 1_000_000]`, between 2 and 10 000 cities, and city names of at most
//! 255 characters. Tests and tools can widen or narrow them through the
//! chained setters.

/// Smallest accepted road length by default.
pub const DEFAULT_MIN_LENGTH: i64 = 3;
/// Largest accepted road length by default.
pub const DEFAULT_MAX_LENGTH: i64 = 1_000_000;
/// Smallest accepted city count by default.
pub const DEFAULT_MIN_CITIES: usize = 2;
/// Largest accepted city count by default.
pub const DEFAULT_MAX_CITIES: usize = 10_000;
/// Longest city name (in characters) kept by default.
pub const DEFAULT_MAX_NAME_LEN: usize = 255;

/// Construction bounds for a `Road`.
///
/// # Examples
///
/// ```rust
/// # use roadside_model::limits::RoadLimits;
///
/// let limits = RoadLimits::default().city_count_bounds(1, 5);
/// assert_eq!(limits.min_cities(), 1);
/// assert_eq!(limits.max_cities(), 5);
/// assert_eq!(limits.max_length(), 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadLimits {
    min_length: i64,
    max_length: i64,
    min_cities: usize,
    max_cities: usize,
    max_name_len: usize,
}

impl Default for RoadLimits {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            min_cities: DEFAULT_MIN_CITIES,
            max_cities: DEFAULT_MAX_CITIES,
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

impl RoadLimits {
    /// Creates limits with the default bounds.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive bounds for the road length.
    #[inline]
    pub fn length_bounds(mut self, min: i64, max: i64) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Sets the inclusive bounds for the declared number of cities.
    #[inline]
    pub fn city_count_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_cities = min;
        self.max_cities = max;
        self
    }

    /// Sets the maximum number of characters kept from a city name.
    #[inline]
    pub fn name_limit(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }

    #[inline]
    pub fn min_length(&self) -> i64 {
        self.min_length
    }

    #[inline]
    pub fn max_length(&self) -> i64 {
        self.max_length
    }

    #[inline]
    pub fn min_cities(&self) -> usize {
        self.min_cities
    }

    #[inline]
    pub fn max_cities(&self) -> usize {
        self.max_cities
    }

    #[inline]
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// Returns `true` if `length` lies within the length bounds.
    #[inline]
    pub fn accepts_length(&self, length: i64) -> bool {
        (self.min_length..=self.max_length).contains(&length)
    }

    /// Returns `true` if `count` lies within the city count bounds.
    ///
    /// Negative counts are never accepted.
    #[inline]
    pub fn accepts_city_count(&self, count: i64) -> bool {
        usize::try_from(count).is_ok_and(|c| (self.min_cities..=self.max_cities).contains(&c))
    }
}

impl std::fmt::Display for RoadLimits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RoadLimits(length: [{}, {}], cities: [{}, {}], name_len: {})",
            self.min_length, self.max_length, self.min_cities, self.max_cities, self.max_name_len
        )
    }
}
