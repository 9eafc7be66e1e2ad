// Copyright (c) 2024-2025 Ken Barker

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

//! datum-gravity
//!
//! A library for calculating normal gravity and geopotential heights on the
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! and [GRS 80](https://geodesy.geology.ohio-state.edu/course/refpapers/00740128.pdf)
//! reference ellipsoids.
//!
//! ## Reference datums
//!
//! A datum is defined by a reference ellipsoid and its physical constants:
//!
//! - the Semimajor axis `a` and the inverse flattening `1/f`;
//! - the geocentric gravitational constant `GM`;
//! - the angular velocity of the Earth `ω`;
//! - the normal gravity at the equator `γa` and at the poles `γb`.
//!
//! `DatumParameters` derives the flattening, Eccentricity, Semiminor axis
//! and the auxiliary constant `m = ω²a²b/GM` from them once, on construction.
//! The parameters of a known datum are obtained from its `DatumKind` by
//! `datum::resolve`.
//!
//! ## Normal gravity
//!
//! Normal gravity is the theoretical gravity of the level ellipsoid,
//! it excludes local gravity anomalies, tides and time variations.
//! `NormalGravity` calculates it at a latitude and ellipsoidal height.
//!
//! ## Geopotential height
//!
//! Geopotential height measures equal increments of gravitational potential
//! rather than equal geometric distances.
//! `GeopotentialConverter` integrates normal gravity along the local vertical
//! at a latitude into a table of ellipsoidal and geopotential heights and
//! interpolates it in either direction.
//!
//! # Examples
//! ```
//! use datum_gravity::{datum, DatumKind, Degrees, GeopotentialConverter, Metres, NormalGravity};
//!
//! let wgs84 = datum::resolve(DatumKind::Wgs84).unwrap();
//! let gravity = NormalGravity::new(wgs84);
//! let g = gravity.gravity(Degrees(45.0), Metres(0.0));
//! assert!((g - 9.806_2).abs() < 1.0e-4);
//!
//! let mut converter =
//!     GeopotentialConverter::new(gravity, Degrees(45.0), Metres(10_000.0), Metres(100.0)).unwrap();
//! let geopotential = converter.to_geopotential(Metres(8_848.0)).unwrap();
//! let height = converter.to_ellipsoid(geopotential).unwrap();
//! assert!((height.0 - 8_848.0).abs() < 1.0e-6);
//! ```
//!
//! ## Design
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle` and
//!   `Degrees` and perform trigonometric calculations;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [thiserror](https://crates.io/crates/thiserror) - to define `Error`;
//! - [tracing](https://crates.io/crates/tracing) - to log height table builds.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications, it requires an allocator for
//! the height tables.

#![cfg_attr(not(test), no_std)]

extern crate alloc;
extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod datum;
pub mod error;
pub mod geopotential;
pub mod gravity;

pub use angle_sc::{Angle, Degrees};
pub use datum::{DatumKind, DatumParameters, GRS80_DATUM, WGS84_DATUM};
pub use error::{Error, Result};
pub use geopotential::{
    ConverterConfig, GeopotentialConverter, HeightSample, HeightTable, RangePolicy,
    STANDARD_GRAVITY,
};
pub use gravity::NormalGravity;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;
