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

//! The geopotential module converts between ellipsoidal height and
//! geopotential height along the local vertical at a fixed latitude.
//!
//! Geopotential height is the integral of normal gravity over ellipsoidal
//! height, normalised by a reference gravity so that it is measured in metres:
//!
//! `H(h) = (1/g0) ∫ γ(φ, h) dh`
//!
//! The integral is evaluated with the trapezoidal rule on a `HeightTable`,
//! which is then linearly interpolated in either direction.
//!
//! A `GeopotentialConverter` owns its table. The table is:
//! - rebuilt from zero height, on the next query, after the latitude changes;
//! - extended, never shrunk, when a query or a new bound lies beyond it.

use crate::error::{Error, Result};
use crate::gravity::NormalGravity;
use alloc::vec::Vec;
use angle_sc::Degrees;
use icao_units::si::Metres;
use tracing::{debug, trace};

/// Standard gravity, the conventional reference for geopotential height, in m/s².
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// The default integration step.
pub const DEFAULT_INTEGRAL_STEP: Metres = Metres(100.0);

/// A pair of corresponding ellipsoidal and geopotential heights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightSample {
    ellipsoid_height: Metres,
    geopotential_height: Metres,
}

impl HeightSample {
    /// Constructor.
    #[must_use]
    pub const fn new(ellipsoid_height: Metres, geopotential_height: Metres) -> Self {
        Self {
            ellipsoid_height,
            geopotential_height,
        }
    }

    /// The ellipsoidal height.
    #[must_use]
    pub const fn ellipsoid_height(&self) -> Metres {
        self.ellipsoid_height
    }

    /// The geopotential height.
    #[must_use]
    pub const fn geopotential_height(&self) -> Metres {
        self.geopotential_height
    }
}

/// Linearly interpolate between the samples bracketing `x`.
/// * `samples` - samples strictly increasing in both `key` and `value`.
/// * `x` - the value of `key` to interpolate at.
///
/// returns None if `x` lies outside the samples.
#[allow(clippy::float_cmp)]
fn interpolate(
    samples: &[HeightSample],
    x: f64,
    key: fn(&HeightSample) -> f64,
    value: fn(&HeightSample) -> f64,
) -> Option<f64> {
    let first = samples.first()?;
    let last = samples.last()?;
    if x < key(first) || key(last) < x {
        return None;
    }

    let index = samples.partition_point(|sample| key(sample) < x);
    let upper = samples.get(index)?;
    if key(upper) == x {
        return Some(value(upper));
    }

    let lower = samples.get(index.checked_sub(1)?)?;
    let t = (x - key(lower)) / (key(upper) - key(lower));
    Some(value(lower) + t * (value(upper) - value(lower)))
}

const fn ellipsoid_key(sample: &HeightSample) -> f64 {
    sample.ellipsoid_height.0
}

const fn geopotential_key(sample: &HeightSample) -> f64 {
    sample.geopotential_height.0
}

/// A table of `HeightSample`s ordered by increasing ellipsoidal height.
///
/// The table always contains the sample at zero height once built and is
/// strictly increasing in both heights.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeightTable {
    samples: Vec<HeightSample>,
}

impl HeightTable {
    /// The samples of the table.
    #[must_use]
    pub fn samples(&self) -> &[HeightSample] {
        &self.samples
    }

    /// The number of samples in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the table has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The lowest and highest ellipsoidal heights in the table.
    #[must_use]
    pub fn ellipsoid_range(&self) -> (Metres, Metres) {
        let (min, max) = self.range(ellipsoid_key);
        (Metres(min), Metres(max))
    }

    /// The lowest and highest geopotential heights in the table.
    #[must_use]
    pub fn geopotential_range(&self) -> (Metres, Metres) {
        let (min, max) = self.range(geopotential_key);
        (Metres(min), Metres(max))
    }

    /// Interpolate the geopotential height at an ellipsoidal height.
    ///
    /// returns None if the height is outside the table.
    #[must_use]
    pub fn geopotential_height(&self, ellipsoid_height: Metres) -> Option<Metres> {
        interpolate(
            &self.samples,
            ellipsoid_height.0,
            ellipsoid_key,
            geopotential_key,
        )
        .map(Metres)
    }

    /// Interpolate the ellipsoidal height at a geopotential height.
    ///
    /// returns None if the height is outside the table.
    #[must_use]
    pub fn ellipsoid_height(&self, geopotential_height: Metres) -> Option<Metres> {
        interpolate(
            &self.samples,
            geopotential_height.0,
            geopotential_key,
            ellipsoid_key,
        )
        .map(Metres)
    }

    fn range(&self, key: fn(&HeightSample) -> f64) -> (f64, f64) {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => (key(first), key(last)),
            _ => (0.0, 0.0),
        }
    }

    /// Clear the table back to the sample at zero height.
    fn reset(&mut self) {
        self.samples.clear();
        self.samples
            .push(HeightSample::new(Metres(0.0), Metres(0.0)));
    }

    /// Integrate upward from the highest sample to ellipsoidal height `to`.
    /// * `to` - the height to extend the table to.
    /// * `step` - the integration step.
    /// * `integrand` - gravity divided by the reference gravity at a height.
    ///
    /// returns the number of samples added.
    fn extend_upward(&mut self, to: f64, step: f64, integrand: impl Fn(f64) -> f64) -> usize {
        let Some(last) = self.samples.last().copied() else {
            return 0;
        };

        let mut height = last.ellipsoid_height.0;
        let mut geopotential = last.geopotential_height.0;
        let mut value = integrand(height);
        let mut count = 0;
        while height < to {
            let next = if height + step < to { height + step } else { to };
            if next <= height {
                break;
            }
            let next_value = integrand(next);
            geopotential += 0.5 * (value + next_value) * (next - height);
            self.samples
                .push(HeightSample::new(Metres(next), Metres(geopotential)));
            height = next;
            value = next_value;
            count += 1;
        }
        count
    }

    /// Integrate downward from the lowest sample to ellipsoidal height `to`.
    ///
    /// returns the number of samples added.
    fn extend_downward(&mut self, to: f64, step: f64, integrand: impl Fn(f64) -> f64) -> usize {
        let Some(first) = self.samples.first().copied() else {
            return 0;
        };

        let mut height = first.ellipsoid_height.0;
        let mut geopotential = first.geopotential_height.0;
        let mut value = integrand(height);
        let mut lower = Vec::new();
        while to < height {
            let next = if to < height - step { height - step } else { to };
            if height <= next {
                break;
            }
            let next_value = integrand(next);
            geopotential -= 0.5 * (value + next_value) * (height - next);
            lower.push(HeightSample::new(Metres(next), Metres(geopotential)));
            height = next;
            value = next_value;
        }

        let count = lower.len();
        lower.reverse();
        self.samples.splice(0..0, lower);
        count
    }
}

/// The behaviour of a lookup outside the heights covered by the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RangePolicy {
    /// Extend the table to cover the height.
    #[default]
    Extend,
    /// Fail with `Error::OutOfRange`.
    Strict,
}

/// The configuration of a `GeopotentialConverter`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConverterConfig {
    /// The lowest ellipsoidal height to tabulate, at or below zero.
    pub min_ellipsoid_height: Metres,
    /// The highest ellipsoidal height to tabulate, at or above zero.
    pub max_ellipsoid_height: Metres,
    /// The integration step, positive.
    pub integral_step: Metres,
    /// The gravity that geopotential is divided by to give metres, in m/s².
    pub reference_gravity: f64,
    /// The behaviour of lookups outside the table.
    pub range_policy: RangePolicy,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            min_ellipsoid_height: Metres(0.0),
            max_ellipsoid_height: Metres(0.0),
            integral_step: DEFAULT_INTEGRAL_STEP,
            reference_gravity: STANDARD_GRAVITY,
            range_policy: RangePolicy::Extend,
        }
    }
}

impl ConverterConfig {
    /// Validate the configuration.
    /// # Errors
    /// - `Error::InvalidStep` if the integration step is not positive and finite.
    /// - `Error::InvalidReferenceGravity` if the reference gravity is not
    ///   positive and finite.
    /// - `Error::InvalidHeightBounds` if the bounds do not bracket zero.
    pub fn validate(&self) -> Result<()> {
        let step = self.integral_step.0;
        if !(step.is_finite() && 0.0 < step) {
            return Err(Error::InvalidStep(step));
        }

        let g0 = self.reference_gravity;
        if !(g0.is_finite() && 0.0 < g0) {
            return Err(Error::InvalidReferenceGravity(g0));
        }

        let min = self.min_ellipsoid_height.0;
        let max = self.max_ellipsoid_height.0;
        if !(min.is_finite() && max.is_finite() && min <= 0.0 && 0.0 <= max) {
            return Err(Error::InvalidHeightBounds { min, max });
        }

        Ok(())
    }
}

/// Converts between ellipsoidal and geopotential heights at a latitude.
#[derive(Clone, Debug)]
pub struct GeopotentialConverter {
    /// The normal gravity model of the datum.
    gravity: NormalGravity,
    /// The latitude of the local vertical.
    latitude: Degrees,
    config: ConverterConfig,
    table: HeightTable,
    /// Whether the table must be rebuilt before the next lookup.
    is_stale: bool,
}

impl GeopotentialConverter {
    /// Construct a converter and build its table.
    /// * `gravity` - the normal gravity model of the datum.
    /// * `latitude` - the latitude of the local vertical.
    /// * `max_ellipsoid_height` - the highest ellipsoidal height to tabulate.
    /// * `integral_step` - the integration step.
    /// # Errors
    /// `Error::InvalidStep` if `integral_step` is not positive,
    /// `Error::InvalidHeightBounds` if `max_ellipsoid_height` is negative.
    /// # Examples
    /// ```
    /// use datum_gravity::{Degrees, GeopotentialConverter, Metres, NormalGravity, DatumParameters};
    ///
    /// let gravity = NormalGravity::new(DatumParameters::wgs84());
    /// let mut converter =
    ///     GeopotentialConverter::new(gravity, Degrees(45.0), Metres(10_000.0), Metres(10.0)).unwrap();
    ///
    /// let h = converter.to_geopotential(Metres(5_000.0)).unwrap();
    /// assert!(h.0 < 5_000.0);
    /// assert!((converter.to_ellipsoid(h).unwrap().0 - 5_000.0).abs() < 1.0e-6);
    /// ```
    pub fn new(
        gravity: NormalGravity,
        latitude: Degrees,
        max_ellipsoid_height: Metres,
        integral_step: Metres,
    ) -> Result<Self> {
        Self::with_config(
            gravity,
            latitude,
            ConverterConfig {
                max_ellipsoid_height,
                integral_step,
                ..ConverterConfig::default()
            },
        )
    }

    /// Construct a converter from a full configuration and build its table.
    /// # Errors
    /// Any error from `ConverterConfig::validate`.
    pub fn with_config(
        gravity: NormalGravity,
        latitude: Degrees,
        config: ConverterConfig,
    ) -> Result<Self> {
        config.validate()?;

        let mut converter = Self {
            gravity,
            latitude,
            config,
            table: HeightTable::default(),
            is_stale: true,
        };
        converter.refresh();
        Ok(converter)
    }

    /// The normal gravity model of the datum.
    #[must_use]
    pub const fn gravity_model(&self) -> &NormalGravity {
        &self.gravity
    }

    /// The latitude of the local vertical.
    #[must_use]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// The current configuration, including any bounds the table has been
    /// extended to.
    #[must_use]
    pub const fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Set the latitude of the local vertical.
    ///
    /// A different latitude invalidates the table, it is rebuilt on the
    /// next lookup.
    #[allow(clippy::float_cmp)]
    pub fn set_latitude(&mut self, latitude: Degrees) {
        if self.latitude.0 != latitude.0 {
            trace!(from = self.latitude.0, to = latitude.0, "latitude changed");
            self.latitude = latitude;
            self.is_stale = true;
        }
    }

    /// Raise the highest ellipsoidal height to tabulate.
    ///
    /// The table is extended upward from its current maximum, a lower
    /// height leaves the table unchanged.
    /// # Errors
    /// `Error::InvalidHeightBounds` if `max_ellipsoid_height` is negative or
    /// not finite.
    pub fn set_max_ellipsoid_height(&mut self, max_ellipsoid_height: Metres) -> Result<()> {
        let max = max_ellipsoid_height.0;
        if !(max.is_finite() && 0.0 <= max) {
            return Err(Error::InvalidHeightBounds {
                min: self.config.min_ellipsoid_height.0,
                max,
            });
        }

        self.refresh();
        self.cover_ellipsoid_height(max);
        Ok(())
    }

    /// The height table, rebuilt first if the latitude has changed.
    pub fn table(&mut self) -> &HeightTable {
        self.refresh();
        &self.table
    }

    /// Convert an ellipsoidal height to a geopotential height.
    /// * `ellipsoid_height` - the ellipsoidal height.
    /// # Errors
    /// - `Error::NonFiniteHeight` if the height is NaN or infinite.
    /// - `Error::OutOfRange` if the height is outside the table and the
    ///   range policy is `Strict`.
    pub fn to_geopotential(&mut self, ellipsoid_height: Metres) -> Result<Metres> {
        let height = ellipsoid_height.0;
        if !height.is_finite() {
            return Err(Error::NonFiniteHeight(height));
        }

        self.refresh();
        if self.config.range_policy == RangePolicy::Extend {
            self.cover_ellipsoid_height(height);
        }

        self.table.geopotential_height(ellipsoid_height).ok_or_else(|| {
            let (min, max) = self.table.ellipsoid_range();
            Error::OutOfRange {
                height,
                min: min.0,
                max: max.0,
            }
        })
    }

    /// Convert a geopotential height to an ellipsoidal height.
    /// * `geopotential_height` - the geopotential height.
    /// # Errors
    /// - `Error::NonFiniteHeight` if the height is NaN or infinite.
    /// - `Error::OutOfRange` if the height is outside the table and the
    ///   range policy is `Strict`.
    pub fn to_ellipsoid(&mut self, geopotential_height: Metres) -> Result<Metres> {
        let height = geopotential_height.0;
        if !height.is_finite() {
            return Err(Error::NonFiniteHeight(height));
        }

        self.refresh();
        if self.config.range_policy == RangePolicy::Extend {
            self.cover_geopotential_height(height);
        }

        self.table.ellipsoid_height(geopotential_height).ok_or_else(|| {
            let (min, max) = self.table.geopotential_range();
            Error::OutOfRange {
                height,
                min: min.0,
                max: max.0,
            }
        })
    }

    /// Gravity divided by the reference gravity at an ellipsoidal height,
    /// at the current latitude.
    fn integrand(&self) -> impl Fn(f64) -> f64 {
        let gravity = self.gravity;
        let latitude = self.latitude;
        let g0 = self.config.reference_gravity;
        move |height| gravity.gravity(latitude, Metres(height)) / g0
    }

    /// Rebuild the table from zero height if it is stale.
    fn refresh(&mut self) {
        if !self.is_stale {
            return;
        }

        let step = self.config.integral_step.0;
        let integrand = self.integrand();
        self.table.reset();
        self.table
            .extend_upward(self.config.max_ellipsoid_height.0, step, &integrand);
        self.table
            .extend_downward(self.config.min_ellipsoid_height.0, step, &integrand);
        self.is_stale = false;

        debug!(
            latitude = self.latitude.0,
            min = self.config.min_ellipsoid_height.0,
            max = self.config.max_ellipsoid_height.0,
            samples = self.table.len(),
            "built height table"
        );
    }

    /// Extend the table, and its configured bounds, to an ellipsoidal height.
    fn cover_ellipsoid_height(&mut self, height: f64) {
        let (min, max) = self.table.ellipsoid_range();
        let step = self.config.integral_step.0;
        let integrand = self.integrand();
        if max.0 < height {
            let count = self.table.extend_upward(height, step, integrand);
            self.config.max_ellipsoid_height = Metres(height);
            debug!(from = max.0, to = height, samples = count, "extended height table upward");
        } else if height < min.0 {
            let count = self.table.extend_downward(height, step, integrand);
            self.config.min_ellipsoid_height = Metres(height);
            debug!(from = min.0, to = height, samples = count, "extended height table downward");
        }
    }

    /// Extend the table until it covers a geopotential height.
    ///
    /// Each pass extends by the ellipsoidal height estimated from the
    /// gravity at the end of the table plus one step.
    fn cover_geopotential_height(&mut self, height: f64) {
        let integrand = self.integrand();
        let step = self.config.integral_step.0;
        loop {
            let (min, max) = self.table.geopotential_range();
            let (low, high) = self.table.ellipsoid_range();
            if max.0 < height {
                let to = high.0 + (height - max.0) / integrand(high.0) + step;
                self.cover_ellipsoid_height(to);
            } else if height < min.0 {
                let to = low.0 - (min.0 - height) / integrand(low.0) - step;
                self.cover_ellipsoid_height(to);
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datum::DatumParameters;
    use alloc::string::ToString;
    use angle_sc::is_within_tolerance;

    fn wgs84_converter(latitude: f64, max: f64, step: f64) -> GeopotentialConverter {
        let gravity = NormalGravity::new(DatumParameters::wgs84());
        GeopotentialConverter::new(gravity, Degrees(latitude), Metres(max), Metres(step)).unwrap()
    }

    fn assert_strictly_increasing(table: &HeightTable) {
        for pair in table.samples().windows(2) {
            assert!(pair[0].ellipsoid_height().0 < pair[1].ellipsoid_height().0);
            assert!(pair[0].geopotential_height().0 < pair[1].geopotential_height().0);
        }
    }

    #[test]
    fn test_interpolate() {
        let samples = [
            HeightSample::new(Metres(0.0), Metres(0.0)),
            HeightSample::new(Metres(10.0), Metres(20.0)),
            HeightSample::new(Metres(20.0), Metres(30.0)),
        ];

        assert_eq!(
            Some(0.0),
            interpolate(&samples, 0.0, ellipsoid_key, geopotential_key)
        );
        assert_eq!(
            Some(10.0),
            interpolate(&samples, 5.0, ellipsoid_key, geopotential_key)
        );
        assert_eq!(
            Some(20.0),
            interpolate(&samples, 10.0, ellipsoid_key, geopotential_key)
        );
        assert_eq!(
            Some(25.0),
            interpolate(&samples, 15.0, ellipsoid_key, geopotential_key)
        );
        assert_eq!(
            Some(15.0),
            interpolate(&samples, 25.0, geopotential_key, ellipsoid_key)
        );
        assert_eq!(
            None,
            interpolate(&samples, 20.5, ellipsoid_key, geopotential_key)
        );
        assert_eq!(
            None,
            interpolate(&samples, -0.5, ellipsoid_key, geopotential_key)
        );
        assert_eq!(None, interpolate(&[], 0.0, ellipsoid_key, geopotential_key));
    }

    #[test]
    fn test_invalid_configuration() {
        let gravity = NormalGravity::new(DatumParameters::wgs84());
        let lat = Degrees(45.0);

        for step in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = GeopotentialConverter::new(gravity, lat, Metres(1000.0), Metres(step));
            assert!(matches!(result, Err(Error::InvalidStep(_))));
        }

        assert_eq!(
            Some(Error::InvalidHeightBounds {
                min: 0.0,
                max: -1.0
            }),
            GeopotentialConverter::new(gravity, lat, Metres(-1.0), Metres(10.0)).err()
        );

        let config = ConverterConfig {
            min_ellipsoid_height: Metres(10.0),
            max_ellipsoid_height: Metres(100.0),
            ..ConverterConfig::default()
        };
        assert!(matches!(
            GeopotentialConverter::with_config(gravity, lat, config),
            Err(Error::InvalidHeightBounds { .. })
        ));

        let config = ConverterConfig {
            reference_gravity: 0.0,
            ..ConverterConfig::default()
        };
        assert_eq!(
            Some(Error::InvalidReferenceGravity(0.0)),
            GeopotentialConverter::with_config(gravity, lat, config).err()
        );
    }

    #[test]
    fn test_build_table() {
        let mut converter = wgs84_converter(45.0, 10_000.0, 100.0);
        let table = converter.table();

        assert_eq!(101, table.len());
        assert_eq!(
            HeightSample::new(Metres(0.0), Metres(0.0)),
            table.samples()[0]
        );
        assert_eq!(Metres(10_000.0), table.ellipsoid_range().1);
        assert!(is_within_tolerance(
            9_983.831_507_059_118,
            table.geopotential_range().1 .0,
            1.0e-8
        ));
        assert_strictly_increasing(table);
    }

    #[test]
    fn test_build_table_partial_last_step() {
        let mut converter = wgs84_converter(45.0, 250.0, 100.0);
        let heights: Vec<f64> = converter
            .table()
            .samples()
            .iter()
            .map(|s| s.ellipsoid_height().0)
            .collect();

        assert_eq!(vec![0.0, 100.0, 200.0, 250.0], heights);
    }

    #[test]
    fn test_empty_range_table() {
        let mut converter = wgs84_converter(45.0, 0.0, 100.0);

        assert_eq!(1, converter.table().len());
        assert_eq!(Metres(0.0), converter.to_geopotential(Metres(0.0)).unwrap());
    }

    #[test]
    fn test_quadrature_converges() {
        let reference = wgs84_converter(45.0, 10_000.0, 1.0)
            .to_geopotential(Metres(10_000.0))
            .unwrap()
            .0;
        let fine = wgs84_converter(45.0, 10_000.0, 10.0)
            .to_geopotential(Metres(10_000.0))
            .unwrap()
            .0;
        let coarse = wgs84_converter(45.0, 10_000.0, 1_000.0)
            .to_geopotential(Metres(10_000.0))
            .unwrap()
            .0;

        assert!(libm::fabs(fine - reference) < libm::fabs(coarse - reference));
        assert!(is_within_tolerance(9_983.831_505_830_194, reference, 1.0e-6));
    }

    #[test]
    fn test_round_trip() {
        let mut converter = wgs84_converter(30.0, 10_000.0, 100.0);

        for h in [0.0, 0.5, 1_234.5, 5_000.0, 9_999.9, 10_000.0] {
            let geopotential = converter.to_geopotential(Metres(h)).unwrap();
            let result = converter.to_ellipsoid(geopotential).unwrap();
            assert!(is_within_tolerance(h, result.0, 1.0e-6));
        }
    }

    #[test]
    fn test_geopotential_height_below_ellipsoid_height() {
        // normal gravity is below standard gravity at the equator
        let mut converter = wgs84_converter(0.0, 10_000.0, 100.0);
        let geopotential = converter.to_geopotential(Metres(5_000.0)).unwrap();

        assert!(geopotential.0 < 5_000.0);
        assert!(4_900.0 < geopotential.0);
    }

    #[test]
    fn test_latitude_change_rebuilds_table() {
        let mut converter = wgs84_converter(45.0, 2_000.0, 100.0);
        let at_45 = converter.to_geopotential(Metres(1_500.0)).unwrap();

        converter.set_latitude(Degrees(0.0));
        assert_eq!(Degrees(0.0).0, converter.latitude().0);
        let at_0 = converter.to_geopotential(Metres(1_500.0)).unwrap();
        assert!(at_0.0 < at_45.0);

        let mut expected = wgs84_converter(0.0, 2_000.0, 100.0);
        assert_eq!(expected.table().samples(), converter.table().samples());
    }

    #[test]
    fn test_set_same_latitude_keeps_table() {
        let mut converter = wgs84_converter(45.0, 1_000.0, 100.0);
        converter.to_geopotential(Metres(1_500.0)).unwrap();
        converter.set_latitude(Degrees(45.0));

        assert_eq!(Metres(1_500.0), converter.table().ellipsoid_range().1);
    }

    #[test]
    fn test_extend_on_demand() {
        let mut converter = wgs84_converter(45.0, 1_000.0, 100.0);
        let result = converter.to_geopotential(Metres(2_550.0)).unwrap();

        assert_eq!(Metres(2_550.0), converter.config().max_ellipsoid_height);
        assert_strictly_increasing(converter.table());

        let mut expected = wgs84_converter(45.0, 2_550.0, 100.0);
        assert_eq!(expected.table().samples(), converter.table().samples());
        assert_eq!(expected.to_geopotential(Metres(2_550.0)).unwrap(), result);
    }

    #[test]
    fn test_extension_survives_latitude_change() {
        let mut converter = wgs84_converter(45.0, 1_000.0, 100.0);
        converter.to_geopotential(Metres(3_000.0)).unwrap();
        converter.set_latitude(Degrees(60.0));

        assert_eq!(Metres(3_000.0), converter.table().ellipsoid_range().1);
    }

    #[test]
    fn test_set_max_ellipsoid_height() {
        let mut converter = wgs84_converter(45.0, 1_000.0, 100.0);

        converter.set_max_ellipsoid_height(Metres(5_000.0)).unwrap();
        assert_eq!(51, converter.table().len());

        // the table never shrinks
        converter.set_max_ellipsoid_height(Metres(500.0)).unwrap();
        assert_eq!(51, converter.table().len());
        assert_eq!(Metres(5_000.0), converter.config().max_ellipsoid_height);

        assert!(matches!(
            converter.set_max_ellipsoid_height(Metres(-1.0)),
            Err(Error::InvalidHeightBounds { .. })
        ));
    }

    #[test]
    fn test_negative_heights() {
        let mut converter = wgs84_converter(45.0, 1_000.0, 100.0);
        let geopotential = converter.to_geopotential(Metres(-400.0)).unwrap();

        assert!(is_within_tolerance(-400.006_726_570_341_5, geopotential.0, 1.0e-9));
        assert_eq!(Metres(-400.0), converter.config().min_ellipsoid_height);
        assert_eq!(Metres(-400.0), converter.table().ellipsoid_range().0);
        assert_strictly_increasing(converter.table());

        let result = converter.to_ellipsoid(Metres(-250.0)).unwrap();
        assert!(-250.0 < result.0 && result.0 < -249.0);
    }

    #[test]
    fn test_to_ellipsoid_extends_table() {
        let mut converter = wgs84_converter(45.0, 1_000.0, 100.0);
        let result = converter.to_ellipsoid(Metres(20_000.0)).unwrap();

        assert!(20_000.0 < result.0);
        assert!(20_000.0 <= converter.table().geopotential_range().1 .0);
        assert_strictly_increasing(converter.table());
        assert!(is_within_tolerance(
            20_000.0,
            converter.to_geopotential(result).unwrap().0,
            1.0e-6
        ));

        let result = converter.to_ellipsoid(Metres(-100.0)).unwrap();
        assert!(result.0 < -100.0);
    }

    #[test]
    fn test_strict_range_policy() {
        let gravity = NormalGravity::new(DatumParameters::grs80());
        let config = ConverterConfig {
            max_ellipsoid_height: Metres(1_000.0),
            range_policy: RangePolicy::Strict,
            ..ConverterConfig::default()
        };
        let mut converter =
            GeopotentialConverter::with_config(gravity, Degrees(45.0), config).unwrap();

        assert_eq!(
            Err(Error::OutOfRange {
                height: 1_500.0,
                min: 0.0,
                max: 1_000.0
            }),
            converter.to_geopotential(Metres(1_500.0))
        );
        assert!(matches!(
            converter.to_geopotential(Metres(-1.0)),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            converter.to_ellipsoid(Metres(1_000.0)),
            Err(Error::OutOfRange { .. })
        ));
        assert!(converter.to_geopotential(Metres(1_000.0)).is_ok());
        assert_eq!(11, converter.table().len());
    }

    #[test]
    fn test_non_finite_heights() {
        let mut converter = wgs84_converter(45.0, 1_000.0, 100.0);

        assert!(matches!(
            converter.to_geopotential(Metres(f64::NAN)),
            Err(Error::NonFiniteHeight(_))
        ));
        assert_eq!(
            "non-finite height: inf",
            converter
                .to_ellipsoid(Metres(f64::INFINITY))
                .unwrap_err()
                .to_string()
        );
    }
}
