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

//! The datum module contains the reference ellipsoid parameters of the
//! supported geodetic datums.
//!
//! A `DatumParameters` is built from a datum's defining constants: the
//! Semimajor axis, the inverse flattening, the geocentric gravitational
//! constant, the angular velocity and the normal gravity at the equator and
//! poles. The dependent constants are derived once, on construction.
//!
//! The standard datums are resolved by their `DatumKind` through `resolve`.

#![allow(clippy::suboptimal_flops)]

pub mod grs80;
pub mod wgs84;

use crate::error::{Error, Result};
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use icao_units::si::Metres;
use once_cell::sync::Lazy;

/// Calculate the flattening ratio of an ellipsoid from its inverse.
/// * `inverse_f` - the reciprocal of the flattening.
/// # Examples
/// ```
/// use datum_gravity::datum::{calculate_flattening, wgs84};
///
/// assert_eq!(1.0 / 298.257_223_563, calculate_flattening(wgs84::INVERSE_F));
/// ```
#[must_use]
pub fn calculate_flattening(inverse_f: f64) -> f64 {
    1.0 / inverse_f
}

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use datum_gravity::Metres;
/// use datum_gravity::datum::{calculate_flattening, calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(wgs84::A, calculate_flattening(wgs84::INVERSE_F)));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use datum_gravity::datum::{calculate_flattening, calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// let f = calculate_flattening(wgs84::INVERSE_F);
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(f));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid.
/// * `e_2` - the square of the Eccentricity.
#[must_use]
pub fn calculate_sq_2nd_eccentricity(e_2: f64) -> f64 {
    e_2 / (1.0 - e_2)
}

/// Calculate the auxiliary constant `m = ω²a²b/GM` of a level ellipsoid.
/// * `a`, `b` - the Semimajor and Semiminor axes.
/// * `gm` - the geocentric gravitational constant.
/// * `omega` - the angular velocity.
#[must_use]
pub fn calculate_physical_constant_m(a: Metres, b: Metres, gm: f64, omega: f64) -> f64 {
    omega * omega * a.0 * a.0 * b.0 / gm
}

/// The geodetic datums.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatumKind {
    /// WGS 84 in its default realization, currently G873.
    Wgs84,
    /// The WGS 84 (G873) realization.
    Wgs84G873,
    /// The Geodetic Reference System 1980.
    Grs80,
    /// An unidentified datum, it cannot be resolved.
    Unknown,
}

impl fmt::Display for DatumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wgs84 => "WGS84",
            Self::Wgs84G873 => "WGS84(G873)",
            Self::Grs80 => "GRS80",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// The names accepted by `DatumKind::from_str`, compared ignoring ASCII case.
const DATUM_NAMES: [(&str, DatumKind); 6] = [
    ("WGS84", DatumKind::Wgs84),
    ("WGS 84", DatumKind::Wgs84),
    ("WGS84(G873)", DatumKind::Wgs84G873),
    ("WGS 84 (G873)", DatumKind::Wgs84G873),
    ("GRS80", DatumKind::Grs80),
    ("GRS 80", DatumKind::Grs80),
];

impl FromStr for DatumKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        DATUM_NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, kind)| *kind)
            .ok_or_else(|| Error::UnsupportedDatum(String::from(name)))
    }
}

/// The parameters of a reference datum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatumParameters {
    /// The datum that the parameters define.
    kind: DatumKind,

    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The reciprocal of the flattening.
    inverse_f: f64,
    /// The geocentric gravitational constant.
    gm: f64,
    /// The angular velocity of the Earth.
    omega: f64,
    /// The normal gravity at the equator.
    gamma_a: f64,
    /// The normal gravity at the poles.
    gamma_b: f64,

    /// The flattening of the ellipsoid, a ratio.
    f: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The Eccentricity of the ellipsoid.
    e: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The auxiliary constant `m`.
    m: f64,
}

impl DatumParameters {
    /// Constructor.
    /// * `kind` - the datum the parameters define.
    /// * `a` - the Semimajor axis.
    /// * `inverse_f` - the reciprocal of the flattening.
    /// * `gm` - the geocentric gravitational constant in m³/s².
    /// * `omega` - the angular velocity in radians/second.
    /// * `gamma_a`, `gamma_b` - the normal gravity at the equator and poles in m/s².
    #[must_use]
    pub fn new(
        kind: DatumKind,
        a: Metres,
        inverse_f: f64,
        gm: f64,
        omega: f64,
        gamma_a: f64,
        gamma_b: f64,
    ) -> Self {
        let f = calculate_flattening(inverse_f);
        let e_2 = calculate_sq_eccentricity(f);
        let b = calculate_minor_axis(a, f);
        Self {
            kind,
            a,
            inverse_f,
            gm,
            omega,
            gamma_a,
            gamma_b,
            f,
            e_2,
            e: libm::sqrt(e_2),
            ep_2: calculate_sq_2nd_eccentricity(e_2),
            b,
            m: calculate_physical_constant_m(a, b, gm, omega),
        }
    }

    /// Construct the parameters of WGS 84 in its default realization.
    #[must_use]
    pub fn wgs84() -> Self {
        Self {
            kind: DatumKind::Wgs84,
            ..Self::wgs84_g873()
        }
    }

    /// Construct the parameters of the WGS 84 (G873) realization.
    #[must_use]
    pub fn wgs84_g873() -> Self {
        Self::new(
            DatumKind::Wgs84G873,
            wgs84::A,
            wgs84::INVERSE_F,
            wgs84::GM,
            wgs84::OMEGA,
            wgs84::GAMMA_A,
            wgs84::GAMMA_B,
        )
    }

    /// Construct the parameters of GRS 80.
    #[must_use]
    pub fn grs80() -> Self {
        Self::new(
            DatumKind::Grs80,
            grs80::A,
            grs80::INVERSE_F,
            grs80::GM,
            grs80::OMEGA,
            grs80::GAMMA_A,
            grs80::GAMMA_B,
        )
    }

    /// The datum that the parameters define.
    #[must_use]
    pub const fn kind(&self) -> DatumKind {
        self.kind
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The reciprocal of the flattening.
    #[must_use]
    pub const fn inverse_f(&self) -> f64 {
        self.inverse_f
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e(&self) -> f64 {
        self.e
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The geocentric gravitational constant in m³/s².
    #[must_use]
    pub const fn gm(&self) -> f64 {
        self.gm
    }

    /// The angular velocity of the Earth in radians/second.
    #[must_use]
    pub const fn omega(&self) -> f64 {
        self.omega
    }

    /// The normal gravity at the equator in m/s².
    #[must_use]
    pub const fn gamma_a(&self) -> f64 {
        self.gamma_a
    }

    /// The normal gravity at the poles in m/s².
    #[must_use]
    pub const fn gamma_b(&self) -> f64 {
        self.gamma_b
    }

    /// The auxiliary constant `m = ω²a²b/GM`.
    #[must_use]
    pub const fn m(&self) -> f64 {
        self.m
    }
}

/// The datum factories, one entry per resolvable `DatumKind`.
const DATUM_FACTORIES: [(DatumKind, fn() -> DatumParameters); 3] = [
    (DatumKind::Wgs84, DatumParameters::wgs84),
    (DatumKind::Wgs84G873, DatumParameters::wgs84_g873),
    (DatumKind::Grs80, DatumParameters::grs80),
];

/// Resolve the parameters of a datum.
/// * `kind` - the datum.
///
/// returns the `DatumParameters` of the datum, or `Error::UnsupportedDatum`
/// if `kind` has no parameters.
/// # Errors
/// `Error::UnsupportedDatum` for `DatumKind::Unknown`.
/// # Examples
/// ```
/// use datum_gravity::datum::{resolve, DatumKind};
///
/// let grs80 = resolve(DatumKind::Grs80).unwrap();
/// assert_eq!(298.257_222_101, grs80.inverse_f());
/// assert!(resolve(DatumKind::Unknown).is_err());
/// ```
pub fn resolve(kind: DatumKind) -> Result<DatumParameters> {
    DATUM_FACTORIES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, factory)| factory())
        .ok_or_else(|| Error::UnsupportedDatum(kind.to_string()))
}

/// A static instance of the WGS 84 `DatumParameters`.
pub static WGS84_DATUM: Lazy<DatumParameters> = Lazy::new(DatumParameters::wgs84);

/// A static instance of the GRS 80 `DatumParameters`.
pub static GRS80_DATUM: Lazy<DatumParameters> = Lazy::new(DatumParameters::grs80);
