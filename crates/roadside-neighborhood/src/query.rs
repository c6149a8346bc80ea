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

//! Minimum-neighborhood queries.
//!
//! The road-level functions work on an already loaded `Road`. The
//! `NeighborhoodQuery` methods (and the free `*_at` shorthands using the
//! default loader) parse a fresh road from a path for every call and discard
//! it afterwards, so no two calls share state.

use crate::{
    error::{AnalysisError, QueryError},
    neighborhood::{compute_neighborhoods, first_minimum},
};
use roadside_model::{
    loading::RoadLoader,
    road::{City, Road},
};
use std::path::Path;

/// Returns the length of the shortest neighborhood on `road`.
///
/// # Errors
///
/// Returns `AnalysisError::EmptyRoad` if the road has no cities.
///
/// # Examples
///
/// ```rust
/// # use roadside_model::loading::RoadLoader;
/// # use roadside_neighborhood::query::min_neighborhood_length;
///
/// let road = RoadLoader::new().from_str("20\n4\n2 A\n7 B\n13 C\n18 D\n").unwrap();
/// assert_eq!(min_neighborhood_length(&road).unwrap(), 4.5);
/// ```
pub fn min_neighborhood_length(road: &Road) -> Result<f64, AnalysisError> {
    let neighborhoods = compute_neighborhoods(road);
    first_minimum(&neighborhoods)
        .map(|n| n.length())
        .ok_or(AnalysisError::EmptyRoad)
}

/// Returns the city with the shortest neighborhood on `road`.
///
/// On exact ties the city with the smallest position wins.
///
/// # Errors
///
/// Returns `AnalysisError::EmptyRoad` if the road has no cities.
pub fn city_with_min_neighborhood(road: &Road) -> Result<&City, AnalysisError> {
    let neighborhoods = compute_neighborhoods(road);
    let city = first_minimum(&neighborhoods)
        .map(|n| n.city())
        .ok_or(AnalysisError::EmptyRoad)?;

    tracing::debug!(city = %city, "found city with minimum neighborhood");
    Ok(city)
}

/// Runs neighborhood queries against road files using a configured loader.
///
/// # Examples
///
/// ```rust,no_run
/// # use roadside_model::{limits::RoadLimits, loading::RoadLoader};
/// # use roadside_neighborhood::query::NeighborhoodQuery;
///
/// let query = NeighborhoodQuery::new(RoadLoader::new().limits(RoadLimits::default()));
/// let name = query.city_with_min_neighborhood("roads/sample.txt")?;
/// println!("{}", name);
/// # Ok::<(), roadside_neighborhood::error::QueryError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborhoodQuery {
    loader: RoadLoader,
}

impl NeighborhoodQuery {
    /// Creates a query runner that loads roads with `loader`.
    #[inline]
    pub fn new(loader: RoadLoader) -> Self {
        Self { loader }
    }

    /// Returns the loader used for every query.
    #[inline]
    pub fn loader(&self) -> &RoadLoader {
        &self.loader
    }

    /// Loads the road at `path`.
    #[inline]
    pub fn road<P: AsRef<Path>>(&self, path: P) -> Result<Road, QueryError> {
        Ok(self.loader.from_path(path)?)
    }

    /// Loads the road at `path` and returns its shortest neighborhood length.
    pub fn min_neighborhood_length<P: AsRef<Path>>(&self, path: P) -> Result<f64, QueryError> {
        let road = self.road(path)?;
        Ok(min_neighborhood_length(&road)?)
    }

    /// Loads the road at `path` and returns the name of the city with the
    /// shortest neighborhood.
    pub fn city_with_min_neighborhood<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<String, QueryError> {
        let road = self.road(path)?;
        let city = city_with_min_neighborhood(&road)?;
        Ok(city.name().to_owned())
    }
}

/// Loads the road at `path` with the default limits.
#[inline]
pub fn road_at<P: AsRef<Path>>(path: P) -> Result<Road, QueryError> {
    NeighborhoodQuery::default().road(path)
}

/// Shorthand for `NeighborhoodQuery::min_neighborhood_length` with the default loader.
#[inline]
pub fn min_neighborhood_length_at<P: AsRef<Path>>(path: P) -> Result<f64, QueryError> {
    NeighborhoodQuery::default().min_neighborhood_length(path)
}

/// Shorthand for `NeighborhoodQuery::city_with_min_neighborhood` with the default loader.
#[inline]
pub fn city_with_min_neighborhood_at<P: AsRef<Path>>(path: P) -> Result<String, QueryError> {
    NeighborhoodQuery::default().city_with_min_neighborhood(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadside_model::{
        error::{ConstraintError, FormatError, RoadLoaderError},
        limits::RoadLimits,
        road::RoadBuilder,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "20\n4\n2 A\n7 B\n13 C\n18 D\n";

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn load(s: &str) -> Road {
        RoadLoader::new().from_str(s).unwrap()
    }

    fn empty_road() -> Road {
        let limits = RoadLimits::default().city_count_bounds(0, 10);
        RoadBuilder::new(10, 0, &limits).unwrap().build().unwrap()
    }

    #[test]
    fn test_sample_queries() {
        let road = load(SAMPLE);
        assert_eq!(min_neighborhood_length(&road), Ok(4.5));
        assert_eq!(city_with_min_neighborhood(&road).unwrap().name(), "A");
    }

    #[test]
    fn test_tie_resolves_to_smallest_position() {
        // Read order puts D first, but A sits further left.
        let road = load("20\n4\n18 D\n13 C\n7 B\n2 A\n");
        assert_eq!(city_with_min_neighborhood(&road).unwrap().name(), "A");
    }

    #[test]
    fn test_interior_minimum() {
        let spread = load("100\n4\n10 West\n48 Mid\n52 Mid East\n90 East\n");
        assert_eq!(min_neighborhood_length(&spread), Ok(21.0));
        let packed = load("100\n4\n30 West\n48 Mid\n52 Mid East\n70 East\n");
        assert_eq!(min_neighborhood_length(&packed), Ok(11.0));
        assert_eq!(city_with_min_neighborhood(&packed).unwrap().name(), "Mid");
    }

    #[test]
    fn test_empty_road_is_an_error() {
        let road = empty_road();
        assert_eq!(min_neighborhood_length(&road), Err(AnalysisError::EmptyRoad));
        assert_eq!(
            city_with_min_neighborhood(&road),
            Err(AnalysisError::EmptyRoad)
        );
    }

    #[test]
    fn test_path_queries() {
        let file = write_temp(SAMPLE);
        assert_eq!(min_neighborhood_length_at(file.path()).unwrap(), 4.5);
        assert_eq!(city_with_min_neighborhood_at(file.path()).unwrap(), "A");
        assert_eq!(road_at(file.path()).unwrap().length(), 20);
    }

    #[test]
    fn test_path_query_with_empty_road_reports_analysis_error() {
        let file = write_temp("10\n0\n");
        let query = NeighborhoodQuery::new(
            RoadLoader::new().limits(RoadLimits::default().city_count_bounds(0, 10)),
        );
        assert_eq!(query.road(file.path()).unwrap().num_cities(), 0);
        assert!(matches!(
            query.min_neighborhood_length(file.path()),
            Err(QueryError::Analysis(AnalysisError::EmptyRoad))
        ));
    }

    #[test]
    fn test_path_queries_report_load_errors() {
        let dup = write_temp("20\n3\n5 A\n9 B\n5 C\n");
        match min_neighborhood_length_at(dup.path()) {
            Err(QueryError::Load(e)) => assert!(matches!(
                e.as_constraint(),
                Some(ConstraintError::DuplicatePosition { position: 5, .. })
            )),
            other => panic!("expected a load error, got {:?}", other),
        }

        let short = write_temp("20\n5\n2 A\n7 B\n13 C\n");
        match city_with_min_neighborhood_at(short.path()) {
            Err(QueryError::Load(e)) => assert_eq!(
                e.as_format(),
                Some(&FormatError::MissingRecords {
                    declared: 5,
                    found: 3
                })
            ),
            other => panic!("expected a load error, got {:?}", other),
        }

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            city_with_min_neighborhood_at(dir.path().join("missing.txt")),
            Err(QueryError::Load(RoadLoaderError::Io(_)))
        ));
    }
}
