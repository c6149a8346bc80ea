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

//! # Roadside Model
//!
//! **The road and city model, and the loader that builds it from text.**
//!
//! A `Road` is a segment of length `T` holding `N` named cities at unique
//! integer positions strictly inside `(0, T)`. Roads are immutable and can only
//! be produced through validation, so downstream analysis never re-checks them.
//!
//! ## Modules
//!
//! * **`index`**: `CityIndex`, a strongly typed index into a road's read-order city list.
//! * **`limits`**: `RoadLimits`, the configurable bounds for length, city count and name length.
//! * **`road`**: `City`, `Road`, and the validating `RoadBuilder`.
//! * **`loading`**: `RoadLoader`, which parses road description files into a `Road`.
//! * **`error`**: `FormatError`, `ConstraintError` and the loader's `RoadLoaderError`.

pub mod error;
pub mod index;
pub mod limits;
pub mod loading;
pub mod road;
