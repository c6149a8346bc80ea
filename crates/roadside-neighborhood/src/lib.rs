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

//! # Roadside Neighborhood
//!
//! Neighborhood analysis over a validated `Road`.
//!
//! Every city owns the half-open stretch of road between the midpoints to its
//! immediate neighbors, clipped to `[0, T)`. This crate computes those
//! stretches and answers which city owns the shortest one.
//!
//! ## Modules
//!
//! - `neighborhood`: `compute_neighborhoods`, producing one `Neighborhood` per
//!   city in ascending position order.
//! - `query`: `min_neighborhood_length` and `city_with_min_neighborhood` on a
//!   loaded road, plus path-based variants through `NeighborhoodQuery`.
//! - `report`: a plain-text `Report` combining the road header with both query
//!   results.
//! - `error`: `AnalysisError` for inapplicable queries and `QueryError`, which
//!   separates load failures from analysis failures.

pub mod error;
pub mod neighborhood;
pub mod query;
pub mod report;
