//! Device operating-system dialects with a known `show environment` layout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A device CLI output convention.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub enum Dialect {
    /// Classic IOS: fixed-column tables with an `AC` power column.
    Ios,
    /// IOS-XE: slot-labeled sensor rows (`P0  Temp: Inlet ...`).
    IosXe,
    /// NX-OS: numeric tables, including per-module power usage.
    NxOs,
}

impl Dialect {
    pub const ALL: [Self; 3] = [Self::Ios, Self::IosXe, Self::NxOs];

    /// Returns the identifier used to select this dialect.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "IOS",
            Self::IosXe => "IOSXE",
            Self::NxOs => "NXOS",
        }
    }

    /// The device command whose output the dialect's patterns recognize.
    #[must_use]
    pub const fn command(&self) -> &'static str {
        "show environment"
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IOS" => Ok(Self::Ios),
            "IOSXE" => Ok(Self::IosXe),
            "NXOS" => Ok(Self::NxOs),
            _ => Err(Error::UnsupportedDialect(s.to_string())),
        }
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.as_str().to_string()
    }
}

impl TryFrom<String> for Dialect {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.as_str().parse::<Dialect>().ok(), Some(dialect));
        }
    }

    #[test]
    fn identifiers_must_match_exactly() {
        for id in ["nxos", " IOS ", "IosXe", "IOSXE\n"] {
            let err = id.parse::<Dialect>().err();
            assert!(
                matches!(err, Some(Error::UnsupportedDialect(ref d)) if d == id),
                "{id:?} should be unsupported"
            );
        }
    }

    #[test]
    fn unknown_identifier_is_unsupported() {
        let err = "JUNOS".parse::<Dialect>().err();
        assert!(matches!(err, Some(Error::UnsupportedDialect(ref d)) if d == "JUNOS"));
    }
}
