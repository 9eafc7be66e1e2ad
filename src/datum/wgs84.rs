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

//! The wgs84 module contains the WGS 84 (G873) defining parameters from the
//! NIMA [WGS 84 Technical Report 8350.2](https://earth-info.nga.mil/php/download.php?file=coord-wgs84)
//! Tables 3.1 and 3.4.

use icao_units::si::Metres;

/// The WGS 84 Semimajor axis measured in metres.  
/// This is the radius at the equator.
pub const A: Metres = Metres(6_378_137.0);

/// The reciprocal of the WGS 84 flattening.
pub const INVERSE_F: f64 = 298.257_223_563;

/// The WGS 84 geocentric gravitational constant, including the mass of the
/// atmosphere, in m³/s².
pub const GM: f64 = 3_986_004.418e8;

/// The WGS 84 nominal mean angular velocity of the Earth in radians/second.
pub const OMEGA: f64 = 7_292_115.0e-11;

/// The WGS 84 normal gravity at the equator in m/s².
pub const GAMMA_A: f64 = 9.780_325_335_9;

/// The WGS 84 normal gravity at the poles in m/s².
pub const GAMMA_B: f64 = 9.832_184_937_8;
