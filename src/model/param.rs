//! Stochastic parameter records
//!
//! Parameters hold the numeric inputs of quantification: probabilities,
//! failure rates, repair and test intervals, and the CCF factors. The
//! uncertainty of a parameter is stored the way an analyst states it
//! (mean plus one shape or spread value plus a distribution code); the
//! translation to a statistics library's parameterization lives in
//! `crate::distribution`, nowhere else.

use serde::{Deserialize, Serialize};

use super::audit::AuditTrail;

/// Identity of a parameter: `(kind code, num)`.
pub type ParamKey = (i16, i32);

/// Discriminator for the polymorphic parameter hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum ParamKind {
    Probability,
    FailureRate,
    Frequency,
    Mttr,
    TestInterval,
    MissionTime,
    BetaFactor,
    Alpha2Factor,
    Alpha3Factor,
    Alpha4Factor,
    Alpha5Factor,
    Alpha6Factor,
    Alpha7Factor,
    Alpha8Factor,
}

impl ParamKind {
    pub const ALL: [ParamKind; 14] = [
        ParamKind::Probability,
        ParamKind::FailureRate,
        ParamKind::Frequency,
        ParamKind::Mttr,
        ParamKind::TestInterval,
        ParamKind::MissionTime,
        ParamKind::BetaFactor,
        ParamKind::Alpha2Factor,
        ParamKind::Alpha3Factor,
        ParamKind::Alpha4Factor,
        ParamKind::Alpha5Factor,
        ParamKind::Alpha6Factor,
        ParamKind::Alpha7Factor,
        ParamKind::Alpha8Factor,
    ];

    /// The persisted discriminator code.
    pub const fn code(self) -> i16 {
        match self {
            ParamKind::Probability => 14,
            ParamKind::FailureRate => 15,
            ParamKind::Frequency => 16,
            ParamKind::Mttr => 17,
            ParamKind::TestInterval => 18,
            ParamKind::MissionTime => 20,
            ParamKind::BetaFactor => 43,
            ParamKind::Alpha2Factor => 47,
            ParamKind::Alpha3Factor => 48,
            ParamKind::Alpha4Factor => 49,
            ParamKind::Alpha5Factor => 56,
            ParamKind::Alpha6Factor => 57,
            ParamKind::Alpha7Factor => 58,
            ParamKind::Alpha8Factor => 59,
        }
    }

    pub fn from_code(code: i16) -> Option<ParamKind> {
        ParamKind::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub const fn class_name(self) -> &'static str {
        match self {
            ParamKind::Probability => "ProbabilityParams",
            ParamKind::FailureRate => "FailureRateParams",
            ParamKind::Frequency => "FrequencyParams",
            ParamKind::Mttr => "MttrParams",
            ParamKind::TestInterval => "TestIntervalParams",
            ParamKind::MissionTime => "MissionTimeParams",
            ParamKind::BetaFactor => "BetaFactorParams",
            ParamKind::Alpha2Factor => "Alpha2FactorParams",
            ParamKind::Alpha3Factor => "Alpha3FactorParams",
            ParamKind::Alpha4Factor => "Alpha4FactorParams",
            ParamKind::Alpha5Factor => "Alpha5FactorParams",
            ParamKind::Alpha6Factor => "Alpha6FactorParams",
            ParamKind::Alpha7Factor => "Alpha7FactorParams",
            ParamKind::Alpha8Factor => "Alpha8FactorParams",
        }
    }
}

impl TryFrom<i16> for ParamKind {
    type Error = String;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        ParamKind::from_code(code).ok_or_else(|| format!("unknown param kind code {}", code))
    }
}

impl From<ParamKind> for i16 {
    fn from(kind: ParamKind) -> i16 {
        kind.code()
    }
}

/// Recognized distribution families.
///
/// The distribution column is an open enumeration: other tools may write
/// codes this crate does not know, so `Param` keeps the raw code and this
/// typed view is derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistKind {
    Lognormal,
    Beta,
    Gamma,
    Normal,
}

impl DistKind {
    /// The persisted distribution code.
    pub const fn code(self) -> i16 {
        match self {
            DistKind::Lognormal => 1,
            DistKind::Beta => 2,
            DistKind::Gamma => 3,
            DistKind::Normal => 4,
        }
    }

    pub fn from_code(code: i16) -> Option<DistKind> {
        match code {
            1 => Some(DistKind::Lognormal),
            2 => Some(DistKind::Beta),
            3 => Some(DistKind::Gamma),
            4 => Some(DistKind::Normal),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            DistKind::Lognormal => "lognormal",
            DistKind::Beta => "beta",
            DistKind::Gamma => "gamma",
            DistKind::Normal => "normal",
        }
    }
}

/// A stochastic parameter record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub kind: ParamKind,
    pub num: i32,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    /// Raw distribution code; see [`DistKind`] for the recognized values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist_type: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist_par1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist_par2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist_par3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p05: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p95: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var_coeff: Option<f64>,
    #[serde(default)]
    pub audit: AuditTrail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
}

impl Param {
    pub fn key(&self) -> ParamKey {
        (self.kind.code(), self.num)
    }

    /// The typed distribution family, if the stored code is recognized.
    pub fn dist_kind(&self) -> Option<DistKind> {
        self.dist_type.and_then(DistKind::from_code)
    }
}
