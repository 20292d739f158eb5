//! Property and refrigerant identifiers.

use core::fmt;

/// Intensive properties recognized by the lookup interface.
///
/// Any two independent properties identify a state; quality 0/1 selects the
/// saturation dome boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Pressure [Pa]
    Pressure,
    /// Temperature [K]
    Temperature,
    /// Specific enthalpy [J/kg]
    Enthalpy,
    /// Specific entropy [J/(kg·K)]
    Entropy,
    /// Vapor quality (mass fraction of vapor, dimensionless)
    Quality,
}

impl Property {
    /// CoolProp-style single-letter key, for backends and log messages.
    pub fn key(self) -> &'static str {
        match self {
            Property::Pressure => "P",
            Property::Temperature => "T",
            Property::Enthalpy => "H",
            Property::Entropy => "S",
            Property::Quality => "Q",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Refrigerants known to the workspace.
///
/// The cold-storage fleet runs on R-134a today; the enum leaves room for
/// other working fluids without touching the provider interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refrigerant {
    R134a,
}

impl Refrigerant {
    pub fn canonical_id(self) -> &'static str {
        match self {
            Refrigerant::R134a => "R134a",
        }
    }

    /// Critical temperature [K]; queries must stay well below this.
    pub fn critical_temperature_k(self) -> f64 {
        match self {
            Refrigerant::R134a => 374.21,
        }
    }
}

impl fmt::Display for Refrigerant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_keys() {
        assert_eq!(Property::Pressure.key(), "P");
        assert_eq!(Property::Quality.key(), "Q");
        assert_eq!(Property::Enthalpy.to_string(), "H");
    }

    #[test]
    fn refrigerant_id() {
        assert_eq!(Refrigerant::R134a.to_string(), "R134a");
        assert!(Refrigerant::R134a.critical_temperature_k() > 340.0);
    }
}
