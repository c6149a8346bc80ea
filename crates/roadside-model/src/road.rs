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

use crate::{
    error::{ConstraintError, FormatError},
    index::CityIndex,
    limits::RoadLimits,
};
use rustc_hash::FxHashMap;

/// A named city at an integer position along a road.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct City {
    index: CityIndex,
    position: i64,
    name: String,
}

impl City {
    /// Returns the index of this city in read order.
    #[inline]
    pub fn index(&self) -> CityIndex {
        self.index
    }

    /// Returns the offset of this city along the road.
    #[inline]
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Returns the city name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.name, self.position)
    }
}

/// An immutable road of length `T` holding its cities in read order.
///
/// A `Road` can only be obtained from `RoadBuilder::build` (or a loader built
/// on top of it), so every instance satisfies:
/// - the length and declared city count lie within the limits it was built with,
/// - every position lies strictly between `0` and the length,
/// - positions are unique,
/// - exactly `declared_cities` cities are present.
#[derive(Clone, PartialEq, Eq)]
pub struct Road {
    length: i64,
    declared_cities: usize,
    cities: Vec<City>, // read order, len = declared_cities
}

impl Road {
    /// Returns the road length `T`.
    #[inline]
    pub fn length(&self) -> i64 {
        self.length
    }

    /// Returns the city count `N` declared by the input.
    #[inline]
    pub fn declared_cities(&self) -> usize {
        self.declared_cities
    }

    /// Returns the number of cities on the road.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the road holds no cities.
    ///
    /// Only possible when built with limits that allow zero cities.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns all cities in read order.
    #[inline]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Returns the city at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn city(&self, index: CityIndex) -> &City {
        let i = index.get();
        assert!(
            i < self.num_cities(),
            "called `Road::city` with city index out of bounds: the len is {} but the index is {}",
            self.num_cities(),
            i
        );
        &self.cities[i]
    }

    /// Returns the city positions in read order.
    #[inline]
    pub fn positions(&self) -> impl ExactSizeIterator<Item = i64> + '_ {
        self.cities.iter().map(City::position)
    }
}

impl std::fmt::Debug for Road {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Road")
            .field("length", &self.length)
            .field("declared_cities", &self.declared_cities)
            .field("cities", &self.cities)
            .finish()
    }
}

impl std::fmt::Display for Road {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Road(length: {}, num_cities: {})",
            self.length,
            self.num_cities()
        )
    }
}

/// Incrementally validates cities and produces a `Road`.
///
/// Header bounds are checked by `new`, each city by `add_city`, and the final
/// count by `build`. Each step fails on the first violation.
///
/// # Examples
///
/// ```rust
/// # use roadside_model::{limits::RoadLimits, road::RoadBuilder};
///
/// let mut builder = RoadBuilder::new(20, 2, &RoadLimits::default()).unwrap();
/// builder.add_city(7, "B").unwrap();
/// builder.add_city(2, "A").unwrap();
/// let road = builder.build().unwrap();
/// assert_eq!(road.num_cities(), 2);
/// assert_eq!(road.cities()[0].name(), "B");
/// ```
#[derive(Debug, Clone)]
pub struct RoadBuilder {
    length: i64,
    declared_cities: usize,
    max_name_len: usize,
    cities: Vec<City>,
    occupied: FxHashMap<i64, CityIndex>,
}

impl RoadBuilder {
    /// Creates a builder for a road of `length` expecting `declared_cities` cities.
    ///
    /// Fails if either value lies outside `limits`.
    pub fn new(
        length: i64,
        declared_cities: i64,
        limits: &RoadLimits,
    ) -> Result<Self, FormatError> {
        if !limits.accepts_length(length) {
            return Err(FormatError::LengthOutOfBounds {
                length,
                min: limits.min_length(),
                max: limits.max_length(),
            });
        }
        if !limits.accepts_city_count(declared_cities) {
            return Err(FormatError::CityCountOutOfBounds {
                count: declared_cities,
                min: limits.min_cities(),
                max: limits.max_cities(),
            });
        }

        // `accepts_city_count` rejects negative counts.
        let declared_cities = declared_cities as usize;

        Ok(Self {
            length,
            declared_cities,
            max_name_len: limits.max_name_len(),
            cities: Vec::with_capacity(declared_cities),
            occupied: FxHashMap::with_capacity_and_hasher(declared_cities, Default::default()),
        })
    }

    /// Returns the road length.
    #[inline]
    pub fn length(&self) -> i64 {
        self.length
    }

    /// Returns the declared city count.
    #[inline]
    pub fn declared_cities(&self) -> usize {
        self.declared_cities
    }

    /// Returns the number of cities added so far.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` once all declared cities have been added.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.cities.len() >= self.declared_cities
    }

    /// Adds a city and returns its read-order index.
    ///
    /// The name is trimmed and cut to the configured maximum number of characters.
    pub fn add_city(&mut self, position: i64, name: &str) -> Result<CityIndex, ConstraintError> {
        if self.is_complete() {
            return Err(ConstraintError::CapacityExceeded {
                declared: self.declared_cities,
            });
        }
        if position <= 0 || position >= self.length {
            return Err(ConstraintError::PositionOutOfRange {
                position,
                length: self.length,
            });
        }
        if let Some(&first) = self.occupied.get(&position) {
            return Err(ConstraintError::DuplicatePosition { position, first });
        }

        let name = truncate_chars(name.trim(), self.max_name_len);
        if name.is_empty() {
            return Err(ConstraintError::EmptyName { position });
        }

        let index = CityIndex::new(self.cities.len());
        self.occupied.insert(position, index);
        self.cities.push(City {
            index,
            position,
            name,
        });
        Ok(index)
    }

    /// Finishes the road.
    ///
    /// Fails with `FormatError::MissingRecords` if fewer cities than declared were added.
    pub fn build(self) -> Result<Road, FormatError> {
        if self.cities.len() < self.declared_cities {
            return Err(FormatError::MissingRecords {
                declared: self.declared_cities,
                found: self.cities.len(),
            });
        }

        Ok(Road {
            length: self.length,
            declared_cities: self.declared_cities,
            cities: self.cities,
        })
    }
}

impl std::fmt::Display for RoadBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RoadBuilder(length: {}, cities: {}/{})",
            self.length,
            self.cities.len(),
            self.declared_cities
        )
    }
}

fn truncate_chars(name: &str, max_chars: usize) -> String {
    match name.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            tracing::warn!(
                name = %name,
                max_chars,
                "city name exceeds the maximum length and was truncated"
            );
            name[..cut].trim_end().to_owned()
        }
        None => name.to_owned(),
    }
}
