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

//! Per-city neighborhoods.
//!
//! Sorting the cities by position, each city owns the half-open stretch of
//! road between the midpoints to its neighbors. The first city's stretch
//! starts at `0` and the last city's ends at the road length, so the
//! neighborhoods tile `[0, T)` without gaps or overlap.

use roadside_core::math::interval::{HalfOpenInterval, midpoint};
use roadside_model::road::{City, Road};

/// The stretch of road assigned to one city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighborhood<'a> {
    city: &'a City,
    interval: HalfOpenInterval<f64>,
}

impl<'a> Neighborhood<'a> {
    /// Returns the city owning this neighborhood.
    #[inline]
    pub fn city(&self) -> &'a City {
        self.city
    }

    /// Returns the interval `[left, right)` covered by the neighborhood.
    #[inline]
    pub fn interval(&self) -> HalfOpenInterval<f64> {
        self.interval
    }

    /// Returns the length of the neighborhood.
    #[inline]
    pub fn length(&self) -> f64 {
        self.interval.length()
    }
}

impl std::fmt::Display for Neighborhood<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} = {}",
            self.city.name(),
            self.interval,
            self.length()
        )
    }
}

/// Computes the neighborhood of every city, ordered by ascending position.
///
/// The road must satisfy its construction invariants; unique positions are
/// only re-checked by a debug assertion.
///
/// # Examples
///
/// ```rust
/// # use roadside_model::loading::RoadLoader;
/// # use roadside_neighborhood::neighborhood::compute_neighborhoods;
///
/// let road = RoadLoader::new().from_str("20\n4\n2 A\n7 B\n13 C\n18 D\n").unwrap();
/// let lengths: Vec<f64> = compute_neighborhoods(&road).iter().map(|n| n.length()).collect();
/// assert_eq!(lengths, vec![4.5, 5.5, 5.5, 4.5]);
/// ```
pub fn compute_neighborhoods(road: &Road) -> Vec<Neighborhood<'_>> {
    let mut sorted: Vec<&City> = road.cities().iter().collect();
    sorted.sort_unstable_by_key(|c| c.position());

    debug_assert!(
        sorted.windows(2).all(|w| w[0].position() < w[1].position()),
        "called `compute_neighborhoods` on a road with duplicate positions"
    );

    let n = sorted.len();
    let road_end = road.length() as f64;

    let neighborhoods: Vec<Neighborhood<'_>> = sorted
        .iter()
        .enumerate()
        .map(|(i, &city)| {
            let left = if i == 0 {
                0.0
            } else {
                midpoint(sorted[i - 1].position(), city.position())
            };
            let right = if i + 1 == n {
                road_end
            } else {
                midpoint(city.position(), sorted[i + 1].position())
            };
            Neighborhood {
                city,
                interval: HalfOpenInterval::new_unchecked(left, right),
            }
        })
        .collect();

    tracing::trace!(num_cities = n, "computed neighborhoods");
    neighborhoods
}

/// Returns the first neighborhood of minimal length in the given order.
///
/// Later neighborhoods only replace the current best when strictly shorter, so
/// exact ties resolve to the earliest entry.
pub(crate) fn first_minimum<'n, 'a>(
    neighborhoods: &'n [Neighborhood<'a>],
) -> Option<&'n Neighborhood<'a>> {
    neighborhoods.iter().fold(None, |best, candidate| match best {
        Some(b) if b.length() <= candidate.length() => Some(b),
        _ => Some(candidate),
    })
}
