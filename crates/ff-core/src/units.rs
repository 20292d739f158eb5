// ff-core/src/units.rs

use uom::si::f64::{
    MassRate as UomMassRate, Power as UomPower, Pressure as UomPressure,
    TemperatureInterval as UomTemperatureInterval,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type MassRate = UomMassRate;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [J/(kg·K)].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEntropy = f64;

pub const CELSIUS_OFFSET: f64 = 273.15;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Absolute temperature from degrees Celsius.
#[inline]
pub fn c(v: f64) -> Temperature {
    k(v + CELSIUS_OFFSET)
}

/// Temperature interval in kelvin (equivalently, Celsius degrees).
#[inline]
pub fn dk(v: f64) -> TempInterval {
    use uom::si::temperature_interval::kelvin;
    TempInterval::new::<kelvin>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

/// Celsius value of an absolute temperature.
#[inline]
pub fn to_celsius(t: Temperature) -> f64 {
    t.value - CELSIUS_OFFSET
}
