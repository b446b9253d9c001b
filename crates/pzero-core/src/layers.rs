//! Target and layer records.
//!
//! Offensive layers cross the wire as flat records with a `"type"` string.
//! Parsing them into [`OffensiveLayer`] goes through [`RawOffensiveLayer`],
//! which is the only place an unrecognised kind can surface.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::wire;

/// The defended point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Degrees, [-90, 90].
    #[serde(deserialize_with = "wire::number")]
    pub latitude: f64,
    /// Degrees, [-180, 180].
    #[serde(deserialize_with = "wire::number")]
    pub longitude: f64,
    /// Blast resistance in psi. Non-positive values yield non-finite results.
    #[serde(deserialize_with = "wire::number")]
    pub hardness: f64,
}

impl Target {
    pub fn new(latitude: f64, longitude: f64, hardness: f64) -> Self {
        Self {
            latitude,
            longitude,
            hardness,
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        use crate::constants::*;
        Self::new(
            DEFAULT_TARGET_LATITUDE,
            DEFAULT_TARGET_LONGITUDE,
            DEFAULT_TARGET_HARDNESS,
        )
    }
}

/// Physical model an offensive layer is evaluated with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffensiveKind {
    /// Kill probability given directly.
    Notional { sspk: f64 },
    /// Surface burst: kill probability derived from yield, CEP and target hardness.
    GroundBurst {
        /// Yield in kilotons.
        yield_kt: f64,
        /// Circular error probable in meters.
        cep: f64,
    },
}

impl OffensiveKind {
    pub const NOTIONAL: &'static str = "notional";
    pub const GROUND_BURST: &'static str = "ground-burst";

    /// Wire tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            OffensiveKind::Notional { .. } => Self::NOTIONAL,
            OffensiveKind::GroundBurst { .. } => Self::GROUND_BURST,
        }
    }
}

/// One stage of attacking warheads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOffensiveLayer", into = "RawOffensiveLayer")]
pub struct OffensiveLayer {
    pub name: String,
    /// `None` until a kind is chosen; unconfigured layers are left out of aggregation.
    pub kind: Option<OffensiveKind>,
    /// Probability the warhead functions, [0, 1].
    pub reliability: f64,
    /// Warheads assigned to this layer; `None` while left blank.
    pub number: Option<u32>,
}

impl OffensiveLayer {
    pub fn notional(name: impl Into<String>, sspk: f64, reliability: f64, number: u32) -> Self {
        Self {
            name: name.into(),
            kind: Some(OffensiveKind::Notional { sspk }),
            reliability,
            number: Some(number),
        }
    }

    pub fn ground_burst(
        name: impl Into<String>,
        yield_kt: f64,
        cep: f64,
        reliability: f64,
        number: u32,
    ) -> Self {
        Self {
            name: name.into(),
            kind: Some(OffensiveKind::GroundBurst { yield_kt, cep }),
            reliability,
            number: Some(number),
        }
    }

    /// A freshly added layer with nothing filled in yet.
    pub fn unconfigured(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            reliability: f64::NAN,
            number: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.kind.is_some()
    }
}

/// Offensive layer exactly as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOffensiveLayer {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_number", skip_serializing_if = "Option::is_none")]
    pub reliability: Option<f64>,
    #[serde(default, deserialize_with = "wire::opt_count", skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, deserialize_with = "wire::opt_number", skip_serializing_if = "Option::is_none")]
    pub sspk: Option<f64>,
    #[serde(
        rename = "yield",
        default,
        deserialize_with = "wire::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub yield_kt: Option<f64>,
    #[serde(default, deserialize_with = "wire::opt_number", skip_serializing_if = "Option::is_none")]
    pub cep: Option<f64>,
}

impl TryFrom<RawOffensiveLayer> for OffensiveLayer {
    type Error = EngineError;

    fn try_from(raw: RawOffensiveLayer) -> Result<Self, Self::Error> {
        // Blank numeric fields are not computable, not invalid.
        let field = |v: Option<f64>| v.unwrap_or(f64::NAN);

        let kind = match raw.kind.as_deref() {
            None | Some("") => None,
            Some(OffensiveKind::NOTIONAL) => Some(OffensiveKind::Notional {
                sspk: field(raw.sspk),
            }),
            Some(OffensiveKind::GROUND_BURST) => Some(OffensiveKind::GroundBurst {
                yield_kt: field(raw.yield_kt),
                cep: field(raw.cep),
            }),
            Some(other) => {
                return Err(EngineError::UnknownLayerKind {
                    layer: raw.name,
                    kind: other.to_string(),
                })
            }
        };

        Ok(Self {
            name: raw.name,
            kind,
            reliability: field(raw.reliability),
            number: raw.number,
        })
    }
}

impl From<OffensiveLayer> for RawOffensiveLayer {
    fn from(layer: OffensiveLayer) -> Self {
        let finite = |v: f64| v.is_finite().then_some(v);

        let mut raw = RawOffensiveLayer {
            name: layer.name,
            kind: layer.kind.map(|k| k.tag().to_string()),
            reliability: finite(layer.reliability),
            number: layer.number,
            ..Default::default()
        };
        match layer.kind {
            Some(OffensiveKind::Notional { sspk }) => raw.sspk = finite(sspk),
            Some(OffensiveKind::GroundBurst { yield_kt, cep }) => {
                raw.yield_kt = finite(yield_kt);
                raw.cep = finite(cep);
            }
            None => {}
        }
        raw
    }
}

/// One stage of interceptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefensiveLayer {
    #[serde(default)]
    pub name: String,
    /// Probability no common-mode failure prevents the engagement.
    #[serde(default = "not_computable", deserialize_with = "wire::number")]
    pub tracking: f64,
    /// Per-interceptor kill probability.
    #[serde(default = "not_computable", deserialize_with = "wire::number")]
    pub sspk: f64,
    /// Interceptors fired per engagement.
    #[serde(default, deserialize_with = "wire::count")]
    pub interceptors: u32,
    /// Engagement radius in meters. Display only.
    #[serde(default, deserialize_with = "wire::opt_number", skip_serializing_if = "Option::is_none")]
    pub range: Option<f64>,
}

impl DefensiveLayer {
    pub fn new(name: impl Into<String>, tracking: f64, sspk: f64, interceptors: u32) -> Self {
        Self {
            name: name.into(),
            tracking,
            sspk,
            interceptors,
            range: None,
        }
    }

    pub fn with_range(mut self, range: f64) -> Self {
        self.range = Some(range);
        self
    }
}

fn not_computable() -> f64 {
    f64::NAN
}
