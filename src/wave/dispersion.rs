// wave-runup/src/wave/dispersion.rs
//
// Linear wave theory relations between period, wavelength and depth.

use crate::constants::{DISPERSION_MAX_ITERATIONS, DISPERSION_TOLERANCE, GRAVITY};
use libm::tanh;
use std::f64::consts::PI;

/// L0 = g T² / 2π
pub fn deep_water_wavelength(tp: f64) -> f64 {
    GRAVITY * tp * tp / (2. * PI)
}

/// Inverse of [`deep_water_wavelength`].
pub fn deep_water_period(lp: f64) -> f64 {
    (2. * PI * lp / GRAVITY).sqrt()
}

/// Solves ω² = g k tanh(kh) for k with Newton-Raphson, starting from the
/// deep-water wavenumber.
pub fn wavenumber(tp: f64, h: f64) -> f64 {
    let omega2 = (2. * PI / tp).powi(2);
    let mut k = 2. * PI / deep_water_wavelength(tp);
    for iteration in 0..DISPERSION_MAX_ITERATIONS {
        let t = tanh(k * h);
        let f = omega2 - GRAVITY * k * t;
        let f_prime = -GRAVITY * t - GRAVITY * k * h * (1. - t * t);
        let next = k - f / f_prime;
        log::trace!("dispersion iteration {}: k={} -> {}", iteration, k, next);
        if ((next - k) / k).abs() <= DISPERSION_TOLERANCE {
            return next;
        }
        k = next;
    }
    log::warn!(
        "Wavenumber for Tp={} h={} did not converge in {} iterations, using k={}",
        tp,
        h,
        DISPERSION_MAX_ITERATIONS,
        k
    );
    k
}

/// Peak wavelength from period, at depth `h` when given, otherwise deep water.
pub fn wavelength(tp: f64, h: Option<f64>) -> f64 {
    match h {
        Some(h) => 2. * PI / wavenumber(tp, h),
        None => deep_water_wavelength(tp),
    }
}

/// Peak period from wavelength, at depth `h` when given, otherwise deep water.
pub fn period(lp: f64, h: Option<f64>) -> f64 {
    match h {
        Some(h) => (2. * PI * lp / (GRAVITY * tanh(2. * PI * h / lp))).sqrt(),
        None => deep_water_period(lp),
    }
}
