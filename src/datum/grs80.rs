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

//! The grs80 module contains the Geodetic Reference System 1980 defining
//! parameters from H. Moritz,
//! [Geodetic Reference System 1980](https://geodesy.geology.ohio-state.edu/course/refpapers/00740128.pdf).

use icao_units::si::Metres;

/// The GRS 80 Semimajor axis measured in metres.
pub const A: Metres = Metres(6_378_137.0);

/// The reciprocal of the GRS 80 flattening.
pub const INVERSE_F: f64 = 298.257_222_101;

/// The GRS 80 geocentric gravitational constant in m³/s².
pub const GM: f64 = 3_986_005.0e8;

/// The GRS 80 angular velocity of the Earth in radians/second.
pub const OMEGA: f64 = 7_292_115.0e-11;

/// The GRS 80 normal gravity at the equator in m/s².
pub const GAMMA_A: f64 = 9.780_326_771_5;

/// The GRS 80 normal gravity at the poles in m/s².
pub const GAMMA_B: f64 = 9.832_186_368_5;
