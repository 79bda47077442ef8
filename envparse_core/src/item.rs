//! Typed environment records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of an extracted fact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Temperature,
    PowerStatus,
    PowerUsage,
}

impl RecordKind {
    /// Order in which matchers are tried against a line. The first match
    /// consumes the line, so a power-usage row can never be reported twice.
    pub const PRECEDENCE: [Self; 3] = [Self::Temperature, Self::PowerStatus, Self::PowerUsage];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::PowerStatus => "power_status",
            Self::PowerUsage => "power_usage",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The measured part of a record; each variant carries only its own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reading {
    /// Degrees Celsius as reported by the device.
    Temperature { value: f64 },
    /// Power supply health with the raw status word kept for display.
    PowerStatus { ok: bool, status: String },
    /// Module power figure, passed through in the device's unit.
    PowerUsage { value: f64, ok: bool },
}

/// One observed fact from a device's environment output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentItem {
    pub name: String,
    #[serde(flatten)]
    pub reading: Reading,
}

impl EnvironmentItem {
    #[must_use]
    pub fn temperature(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            reading: Reading::Temperature { value },
        }
    }

    #[must_use]
    pub fn power_status(name: impl Into<String>, ok: bool, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reading: Reading::PowerStatus {
                ok,
                status: status.into(),
            },
        }
    }

    #[must_use]
    pub fn power_usage(name: impl Into<String>, value: f64, ok: bool) -> Self {
        Self {
            name: name.into(),
            reading: Reading::PowerUsage { value, ok },
        }
    }

    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self.reading {
            Reading::Temperature { .. } => RecordKind::Temperature,
            Reading::PowerStatus { .. } => RecordKind::PowerStatus,
            Reading::PowerUsage { .. } => RecordKind::PowerUsage,
        }
    }

    /// Numeric value, absent for power-status records.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self.reading {
            Reading::Temperature { value } | Reading::PowerUsage { value, .. } => Some(value),
            Reading::PowerStatus { .. } => None,
        }
    }

    /// Health flag, absent for temperature records.
    #[must_use]
    pub const fn ok(&self) -> Option<bool> {
        match self.reading {
            Reading::PowerStatus { ok, .. } | Reading::PowerUsage { ok, .. } => Some(ok),
            Reading::Temperature { .. } => None,
        }
    }

    /// Raw status word, only kept for power-status records.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        match &self.reading {
            Reading::PowerStatus { status, .. } => Some(status),
            Reading::Temperature { .. } | Reading::PowerUsage { .. } => None,
        }
    }
}
