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

//! The gravity module contains the normal gravity model of a reference datum.
//!
//! Normal gravity on the surface of the ellipsoid is calculated with the
//! series expansion of the international gravity formula:
//!
//! `γ(φ) = γa (1 + c1 sin²φ + c2 sin⁴φ + c3 sin⁶φ + c4 sin⁸φ)`
//!
//! and is reduced to an ellipsoidal height `h` by the second order factor:
//!
//! `1 - 2/a (1 + f + m - 2f sin²φ) h + 3/a² h²`
//!
//! See H. Moritz, [Geodetic Reference System 1980](https://geodesy.geology.ohio-state.edu/course/refpapers/00740128.pdf),
//! Eqs. 4.2 and 4.3.
//!
//! Note: the series coefficients are those fitted to GRS 80 and are used
//! for every datum. The WGS 84 values differ from them well below the
//! 0.1 µGal accuracy of the series.

#![allow(clippy::suboptimal_flops)]

use crate::datum::{self, DatumKind, DatumParameters};
use crate::error::Result;
use angle_sc::{Angle, Degrees};
use icao_units::si::Metres;
use unit_sphere::LatLong;

/// The coefficients of the normal gravity series in powers of `sin²φ`.
pub const SERIES_COEFFICIENTS: [f64; 5] = [
    1.0,
    0.005_279_041_4,
    0.000_023_271_8,
    0.000_000_126_2,
    0.000_000_000_7,
];

/// Evaluate a polynomial using Horner's method.
/// * `coeffs` - the polynomial coefficients, lowest power first.
/// * `x` - the variable.
#[must_use]
fn evaluate_polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs
        .split_last()
        .map_or(0.0, |(last, elements)| {
            elements
                .iter()
                .rev()
                .fold(*last, |result, element| result * x + element)
        })
}

/// Calculate the square of the sine of a latitude.
/// * `lat` - the latitude.
#[must_use]
fn calculate_sq_sin(lat: Degrees) -> f64 {
    let sin_lat = Angle::from(lat).sin().0;
    sin_lat * sin_lat
}

/// Calculate the normal gravity on the surface of an ellipsoid.
/// * `gamma_a` - the normal gravity at the equator in m/s².
/// * `sq_sin_lat` - the square of the sine of the latitude.
/// # Examples
/// ```
/// use datum_gravity::datum::wgs84;
/// use datum_gravity::gravity::calculate_surface_gravity;
///
/// assert_eq!(wgs84::GAMMA_A, calculate_surface_gravity(wgs84::GAMMA_A, 0.0));
/// ```
#[must_use]
pub fn calculate_surface_gravity(gamma_a: f64, sq_sin_lat: f64) -> f64 {
    gamma_a * evaluate_polynomial(&SERIES_COEFFICIENTS, sq_sin_lat)
}

/// Calculate the factor that reduces surface normal gravity to an
/// ellipsoidal height.
/// * `a` - the Semimajor axis.
/// * `f` - the flattening ratio.
/// * `m` - the auxiliary constant `ω²a²b/GM`.
/// * `sq_sin_lat` - the square of the sine of the latitude.
/// * `height` - the ellipsoidal height.
/// # Examples
/// ```
/// use datum_gravity::Metres;
/// use datum_gravity::gravity::calculate_height_factor;
///
/// let a = Metres(6_378_137.0);
/// assert_eq!(1.0, calculate_height_factor(a, 0.0033, 0.0034, 0.5, Metres(0.0)));
/// assert!(calculate_height_factor(a, 0.0033, 0.0034, 0.5, Metres(1000.0)) < 1.0);
/// ```
#[must_use]
pub fn calculate_height_factor(a: Metres, f: f64, m: f64, sq_sin_lat: f64, height: Metres) -> f64 {
    let h = height.0;
    let linear = 2.0 * (1.0 + f + m - 2.0 * f * sq_sin_lat) / a.0;
    1.0 - linear * h + 3.0 * h * h / (a.0 * a.0)
}

/// The normal gravity model of a datum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalGravity {
    /// The parameters of the datum.
    datum: DatumParameters,
}

impl NormalGravity {
    /// Constructor.
    /// * `datum` - the parameters of the datum.
    #[must_use]
    pub const fn new(datum: DatumParameters) -> Self {
        Self { datum }
    }

    /// Construct the normal gravity model of a known datum.
    /// * `kind` - the datum.
    /// # Errors
    /// `Error::UnsupportedDatum` if `kind` cannot be resolved.
    pub fn from_kind(kind: DatumKind) -> Result<Self> {
        datum::resolve(kind).map(Self::new)
    }

    /// The parameters of the datum.
    #[must_use]
    pub const fn datum(&self) -> &DatumParameters {
        &self.datum
    }

    /// Calculate the normal gravity on the surface of the ellipsoid.
    /// * `lat` - the geodetic latitude.
    ///
    /// returns normal gravity in m/s².
    #[must_use]
    pub fn surface_gravity(&self, lat: Degrees) -> f64 {
        calculate_surface_gravity(self.datum.gamma_a(), calculate_sq_sin(lat))
    }

    /// Calculate the normal gravity at an ellipsoidal height.
    /// * `lat` - the geodetic latitude, it is not range checked.
    /// * `height` - the ellipsoidal height.
    ///
    /// returns normal gravity in m/s².
    /// # Examples
    /// ```
    /// use datum_gravity::{Degrees, Metres, NormalGravity, DatumParameters};
    ///
    /// let gravity = NormalGravity::new(DatumParameters::wgs84());
    /// let g45 = gravity.gravity(Degrees(45.0), Metres(0.0));
    /// assert!((g45 - 9.806_197_763).abs() < 1.0e-9);
    /// ```
    #[must_use]
    pub fn gravity(&self, lat: Degrees, height: Metres) -> f64 {
        let sq_sin_lat = calculate_sq_sin(lat);
        let factor = calculate_height_factor(
            self.datum.a(),
            self.datum.f(),
            self.datum.m(),
            sq_sin_lat,
            height,
        );
        factor * calculate_surface_gravity(self.datum.gamma_a(), sq_sin_lat)
    }

    /// Calculate the normal gravity at a position and ellipsoidal height.
    /// * `position` - the position, only its latitude is used.
    /// * `height` - the ellipsoidal height.
    #[must_use]
    pub fn gravity_at(&self, position: &LatLong, height: Metres) -> f64 {
        self.gravity(position.lat(), height)
    }
}
