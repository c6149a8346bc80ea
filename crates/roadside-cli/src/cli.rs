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

use anyhow::Context;
use clap::Parser;
use roadside_model::{limits::RoadLimits, loading::RoadLoader};
use roadside_neighborhood::{query::NeighborhoodQuery, report::Report};
use std::path::PathBuf;

/// Report the city with the shortest neighborhood on a road.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "roadside", version, about)]
pub struct Args {
    /// Road description file (length, city count, then one `position name` per line).
    pub path: PathBuf,

    /// Write the report to this file instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn", value_name = "LEVEL")]
    pub log_level: String,

    /// Maximum number of characters kept from each city name.
    #[arg(long, value_name = "CHARS")]
    pub max_name_len: Option<usize>,
}

impl Args {
    /// Builds the query runner configured by these arguments.
    pub fn query(&self) -> NeighborhoodQuery {
        let mut limits = RoadLimits::default();
        if let Some(len) = self.max_name_len {
            limits = limits.name_limit(len);
        }
        NeighborhoodQuery::new(RoadLoader::new().limits(limits))
    }
}

/// Loads the road, builds the report and writes it out.
pub fn run(args: &Args) -> anyhow::Result<Report> {
    let report = args
        .query()
        .report(&args.path)
        .with_context(|| format!("failed to analyze {}", args.path.display()))?;

    tracing::info!(
        length = report.length(),
        cities = report.num_cities(),
        min = report.min_neighborhood_length(),
        city = report.city(),
        "analysis complete"
    );

    match &args.output {
        Some(out) => {
            std::fs::write(out, report.to_string())
                .with_context(|| format!("failed to write report to {}", out.display()))?;
            tracing::info!(path = %out.display(), "report written");
        }
        None => print!("{}", report),
    }

    Ok(report)
}
