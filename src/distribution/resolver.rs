//! Parameter to distribution translation
//!
//! Storage parameterization per family, with `mean` and `dist_par1` the
//! stored fields:
//!
//! - gamma: `dist_par1` is the shape k, scale is k / mean
//! - beta: `dist_par1` is the alpha shape, b is alpha/mean - alpha
//! - lognormal: `dist_par1` is the error factor EF = P95/P50;
//!   sigma = ln(EF) / z95, median = mean * exp(-sigma^2 / 2)
//! - normal: `dist_par1` is the standard deviation

use statrs::distribution::{Beta, ContinuousCDF, Gamma, LogNormal, Normal};
use statrs::statistics::Distribution as StatDistribution;

use super::errors::{DistributionError, DistributionResult};
use crate::model::{DistKind, Param};

/// One-sided z-score of the 95th percentile, the half-width of the 90%
/// interval an error factor describes.
const Z95: f64 = 1.64485363;

/// A fully specified continuous distribution in the statistics library's
/// native parameterization.
#[derive(Debug, Clone)]
pub enum ResolvedDistribution {
    Gamma(Gamma),
    Beta(Beta),
    Lognormal(LogNormal),
    Normal(Normal),
}

impl ResolvedDistribution {
    pub fn kind(&self) -> DistKind {
        match self {
            ResolvedDistribution::Gamma(_) => DistKind::Gamma,
            ResolvedDistribution::Beta(_) => DistKind::Beta,
            ResolvedDistribution::Lognormal(_) => DistKind::Lognormal,
            ResolvedDistribution::Normal(_) => DistKind::Normal,
        }
    }

    /// Library-computed mean of the resolved distribution.
    pub fn mean(&self) -> Option<f64> {
        match self {
            ResolvedDistribution::Gamma(d) => d.mean(),
            ResolvedDistribution::Beta(d) => d.mean(),
            ResolvedDistribution::Lognormal(d) => d.mean(),
            ResolvedDistribution::Normal(d) => d.mean(),
        }
    }

    /// Cumulative distribution function at `x`.
    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            ResolvedDistribution::Gamma(d) => d.cdf(x),
            ResolvedDistribution::Beta(d) => d.cdf(x),
            ResolvedDistribution::Lognormal(d) => d.cdf(x),
            ResolvedDistribution::Normal(d) => d.cdf(x),
        }
    }
}

/// Resolves a parameter's declared distribution.
///
/// Returns `Ok(None)` when the distribution code is unset or not
/// recognized; other tools write codes this crate does not interpret, and
/// an unconfigured distribution is a normal state, not an error. Stored
/// values that contradict the declared family are an error.
pub fn resolve_distribution(param: &Param) -> DistributionResult<Option<ResolvedDistribution>> {
    let Some(kind) = param.dist_kind() else {
        return Ok(None);
    };

    let resolved = match kind {
        DistKind::Gamma => resolve_gamma(param)?,
        DistKind::Beta => resolve_beta(param)?,
        DistKind::Lognormal => resolve_lognormal(param)?,
        DistKind::Normal => resolve_normal(param)?,
    };
    Ok(Some(resolved))
}

fn resolve_gamma(param: &Param) -> DistributionResult<ResolvedDistribution> {
    let mean = require(param, "gamma", "Mean", param.mean)?;
    let shape = require(param, "gamma", "DistPar1", param.dist_par1)?;

    if mean <= 0.0 {
        return Err(DistributionError::invalid(
            param,
            "gamma",
            format!("mean {} must be positive to derive the scale", mean),
        ));
    }
    let scale = shape / mean;
    if scale <= 0.0 {
        return Err(DistributionError::invalid(
            param,
            "gamma",
            format!("derived scale {} is not positive", scale),
        ));
    }

    Gamma::new(shape, 1.0 / scale)
        .map(ResolvedDistribution::Gamma)
        .map_err(|e| DistributionError::invalid(param, "gamma", e.to_string()))
}

fn resolve_beta(param: &Param) -> DistributionResult<ResolvedDistribution> {
    let mean = require(param, "beta", "Mean", param.mean)?;
    let alpha = require(param, "beta", "DistPar1", param.dist_par1)?;

    if mean <= 0.0 {
        return Err(DistributionError::invalid(
            param,
            "beta",
            format!("mean {} must be positive to derive the b shape", mean),
        ));
    }
    if alpha <= 0.0 {
        return Err(DistributionError::invalid(
            param,
            "beta",
            format!("alpha shape {} is not positive", alpha),
        ));
    }
    let b = alpha / mean - alpha;
    if b <= 0.0 {
        return Err(DistributionError::invalid(
            param,
            "beta",
            format!("derived b shape {} is not positive", b),
        ));
    }

    Beta::new(alpha, b)
        .map(ResolvedDistribution::Beta)
        .map_err(|e| DistributionError::invalid(param, "beta", e.to_string()))
}

fn resolve_lognormal(param: &Param) -> DistributionResult<ResolvedDistribution> {
    let mean = require(param, "lognormal", "Mean", param.mean)?;
    let ef = require(param, "lognormal", "DistPar1", param.dist_par1)?;

    if ef <= 0.0 {
        return Err(DistributionError::invalid(
            param,
            "lognormal",
            format!("error factor {} must be positive", ef),
        ));
    }
    let sigma = ef.ln() / Z95;
    if sigma <= 0.0 {
        return Err(DistributionError::invalid(
            param,
            "lognormal",
            format!("error factor {} must exceed 1", ef),
        ));
    }
    if mean <= 0.0 {
        return Err(DistributionError::invalid(
            param,
            "lognormal",
            format!("mean {} must be positive to derive the median", mean),
        ));
    }
    let median = mean * (-(sigma * sigma) / 2.0).exp();

    LogNormal::new(median.ln(), sigma)
        .map(ResolvedDistribution::Lognormal)
        .map_err(|e| DistributionError::invalid(param, "lognormal", e.to_string()))
}

fn resolve_normal(param: &Param) -> DistributionResult<ResolvedDistribution> {
    let mean = require(param, "normal", "Mean", param.mean)?;
    let std_dev = require(param, "normal", "DistPar1", param.dist_par1)?;

    if std_dev <= 0.0 {
        return Err(DistributionError::invalid(
            param,
            "normal",
            format!("standard deviation {} is not positive", std_dev),
        ));
    }

    Normal::new(mean, std_dev)
        .map(ResolvedDistribution::Normal)
        .map_err(|e| DistributionError::invalid(param, "normal", e.to_string()))
}

fn require(
    param: &Param,
    dist: &'static str,
    field: &'static str,
    value: Option<f64>,
) -> DistributionResult<f64> {
    value.ok_or_else(|| DistributionError::missing_field(param, dist, field))
}
