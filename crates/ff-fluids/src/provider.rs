//! Property provider trait.

use crate::error::FluidResult;
use crate::property::{Property, Refrigerant};
use ff_core::units::{Pressure, SpecEnthalpy, SpecEntropy, Temperature, k, pa};

/// Narrow lookup interface over a refrigerant equation of state.
///
/// Given two independent intensive properties, a provider resolves any other
/// requested property consistent with the refrigerant's real equation of
/// state, including the two-phase saturation dome (quality 0 = saturated
/// liquid, quality 1 = saturated vapor, selectable by temperature or
/// pressure).
///
/// Implementations must be thread-safe (Send + Sync): the telemetry grid is
/// evaluated in parallel against a single shared provider handle. All values
/// crossing `lookup` are raw SI (Pa, K, J/kg, J/(kg·K), dimensionless
/// quality); the provided helper methods put uom types at the call sites that
/// have them.
pub trait PropertyProvider: Send + Sync {
    /// Backend name (for debugging/logging).
    fn name(&self) -> &str;

    /// Resolve `output` from two known properties.
    fn lookup(
        &self,
        refrigerant: Refrigerant,
        output: Property,
        input1: (Property, f64),
        input2: (Property, f64),
    ) -> FluidResult<f64>;

    /// Saturation pressure at a given temperature.
    fn saturation_pressure(&self, r: Refrigerant, t: Temperature) -> FluidResult<Pressure> {
        let p = self.lookup(
            r,
            Property::Pressure,
            (Property::Temperature, t.value),
            (Property::Quality, 1.0),
        )?;
        Ok(pa(p))
    }

    /// Enthalpy on the saturation dome at a given temperature and quality.
    fn saturation_enthalpy_at_t(
        &self,
        r: Refrigerant,
        t: Temperature,
        quality: f64,
    ) -> FluidResult<SpecEnthalpy> {
        self.lookup(
            r,
            Property::Enthalpy,
            (Property::Temperature, t.value),
            (Property::Quality, quality),
        )
    }

    /// Entropy on the saturation dome at a given temperature and quality.
    fn saturation_entropy_at_t(
        &self,
        r: Refrigerant,
        t: Temperature,
        quality: f64,
    ) -> FluidResult<SpecEntropy> {
        self.lookup(
            r,
            Property::Entropy,
            (Property::Temperature, t.value),
            (Property::Quality, quality),
        )
    }

    /// Enthalpy on the saturation dome at a given pressure and quality.
    fn saturation_enthalpy_at_p(
        &self,
        r: Refrigerant,
        p: Pressure,
        quality: f64,
    ) -> FluidResult<SpecEnthalpy> {
        self.lookup(
            r,
            Property::Enthalpy,
            (Property::Pressure, p.value),
            (Property::Quality, quality),
        )
    }

    /// Entropy on the saturation dome at a given pressure and quality.
    fn saturation_entropy_at_p(
        &self,
        r: Refrigerant,
        p: Pressure,
        quality: f64,
    ) -> FluidResult<SpecEntropy> {
        self.lookup(
            r,
            Property::Entropy,
            (Property::Pressure, p.value),
            (Property::Quality, quality),
        )
    }

    /// Saturation temperature at a given pressure.
    fn saturation_temperature(&self, r: Refrigerant, p: Pressure) -> FluidResult<Temperature> {
        let t = self.lookup(
            r,
            Property::Temperature,
            (Property::Pressure, p.value),
            (Property::Quality, 1.0),
        )?;
        Ok(k(t))
    }

    /// Enthalpy at a (pressure, entropy) state — the isentropic solve.
    fn enthalpy_at_ps(
        &self,
        r: Refrigerant,
        p: Pressure,
        s: SpecEntropy,
    ) -> FluidResult<SpecEnthalpy> {
        self.lookup(
            r,
            Property::Enthalpy,
            (Property::Pressure, p.value),
            (Property::Entropy, s),
        )
    }

    /// Entropy at a (pressure, enthalpy) state.
    fn entropy_at_ph(
        &self,
        r: Refrigerant,
        p: Pressure,
        h: SpecEnthalpy,
    ) -> FluidResult<SpecEntropy> {
        self.lookup(
            r,
            Property::Entropy,
            (Property::Pressure, p.value),
            (Property::Enthalpy, h),
        )
    }

    /// Temperature at a (pressure, enthalpy) state.
    fn temperature_at_ph(
        &self,
        r: Refrigerant,
        p: Pressure,
        h: SpecEnthalpy,
    ) -> FluidResult<Temperature> {
        let t = self.lookup(
            r,
            Property::Temperature,
            (Property::Pressure, p.value),
            (Property::Enthalpy, h),
        )?;
        Ok(k(t))
    }

    /// Vapor quality at a (pressure, enthalpy) state.
    ///
    /// The returned value is the flash fraction `(h − h_f)/(h_g − h_f)` and
    /// may fall outside [0,1] for states outside the dome; callers decide how
    /// to report that.
    fn quality_at_ph(&self, r: Refrigerant, p: Pressure, h: SpecEnthalpy) -> FluidResult<f64> {
        self.lookup(
            r,
            Property::Quality,
            (Property::Pressure, p.value),
            (Property::Enthalpy, h),
        )
    }
}
