// Copyright (c) 2024 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The error module contains the errors returned by datum resolution and
//! height conversion.

use alloc::string::String;
use thiserror::Error;

/// The errors returned by this crate.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// The datum identifier is not one of the known datums.
    #[error("unsupported datum: {0}")]
    UnsupportedDatum(String),

    /// The integration step is not a positive, finite number of metres.
    #[error("invalid integration step: {0} m")]
    InvalidStep(f64),

    /// The normalising gravity is not a positive, finite value.
    #[error("invalid reference gravity: {0} m/s^2")]
    InvalidReferenceGravity(f64),

    /// The height table bounds do not bracket zero ellipsoidal height.
    #[error("invalid height bounds: min {min} m, max {max} m")]
    InvalidHeightBounds { min: f64, max: f64 },

    /// A strict lookup fell outside the heights covered by the table.
    #[error("height {height} m is outside the table range [{min}, {max}] m")]
    OutOfRange { height: f64, min: f64, max: f64 },

    /// The queried height is NaN or infinite.
    #[error("non-finite height: {0}")]
    NonFiniteHeight(f64),
}

/// The `Result` type returned by this crate.
pub type Result<T> = core::result::Result<T, Error>;
