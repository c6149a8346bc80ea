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

//! Plain-text summary of a road and its minimum neighborhood.

use crate::{
    error::{AnalysisError, QueryError},
    neighborhood::{compute_neighborhoods, first_minimum},
    query::NeighborhoodQuery,
};
use roadside_model::road::Road;
use std::path::Path;

/// The figures reported for one road file.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    length: i64,
    num_cities: usize,
    min_neighborhood_length: f64,
    city: String,
}

impl Report {
    /// Finds the minimum neighborhood of `road` and the city that owns it.
    pub fn from_road(road: &Road) -> Result<Self, AnalysisError> {
        let neighborhoods = compute_neighborhoods(road);
        let min = first_minimum(&neighborhoods).ok_or(AnalysisError::EmptyRoad)?;

        Ok(Self {
            length: road.length(),
            num_cities: road.declared_cities(),
            min_neighborhood_length: min.length(),
            city: min.city().name().to_owned(),
        })
    }

    #[inline]
    pub fn length(&self) -> i64 {
        self.length
    }

    #[inline]
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    #[inline]
    pub fn min_neighborhood_length(&self) -> f64 {
        self.min_neighborhood_length
    }

    #[inline]
    pub fn city(&self) -> &str {
        &self.city
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Road length: {}", self.length)?;
        writeln!(f, "Number of cities: {}", self.num_cities)?;
        writeln!(
            f,
            "Shortest neighborhood: {:.2}",
            self.min_neighborhood_length
        )?;
        writeln!(f, "City with shortest neighborhood: {}", self.city)
    }
}

impl NeighborhoodQuery {
    /// Loads the road at `path` and builds its `Report`.
    pub fn report<P: AsRef<Path>>(&self, path: P) -> Result<Report, QueryError> {
        let road = self.road(path)?;
        Ok(Report::from_road(&road)?)
    }
}
