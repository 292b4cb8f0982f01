// chill-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, HeatCapacity as UomHeatCapacity, Length as UomLength,
    MassDensity as UomMassDensity, Power as UomPower, Pressure as UomPressure,
    SpecificHeatCapacity as UomSpecificHeatCapacity,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
    Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type HeatCapacity = UomHeatCapacity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type SpecificHeatCapacity = UomSpecificHeatCapacity;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;
pub type Volume = UomVolume;

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

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn cm2(v: f64) -> Area {
    use uom::si::area::square_centimeter;
    Area::new::<square_centimeter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn cm3(v: f64) -> Volume {
    use uom::si::volume::cubic_centimeter;
    Volume::new::<cubic_centimeter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn j_per_kg_k(v: f64) -> SpecificHeatCapacity {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(v)
}

#[inline]
pub fn j_per_k(v: f64) -> HeatCapacity {
    use uom::si::heat_capacity::joule_per_kelvin;
    HeatCapacity::new::<joule_per_kelvin>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

pub fn kelvin_to_celsius(t_k: f64) -> f64 {
    t_k - 273.15
}

pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    t_c + 273.15
}

pub fn kelvin_to_fahrenheit(t_k: f64) -> f64 {
    (t_k - 273.15) * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_kelvin(t_f: f64) -> f64 {
    (t_f - 32.0) * 5.0 / 9.0 + 273.15
}

pub mod constants {
    /// Stefan-Boltzmann constant [W/(m²·K⁴)]
    pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;
    /// Boltzmann constant [J/K]
    pub const BOLTZMANN: f64 = 1.380_649e-23;
    /// Universal gas constant [J/(mol·K)]
    pub const GAS_CONSTANT: f64 = 8.314_462_618;
    /// Standard atmosphere [Pa]
    pub const STANDARD_ATMOSPHERE_PA: f64 = 101_325.0;

    pub const MINUTE_S: f64 = 60.0;
    pub const HOUR_S: f64 = 3_600.0;
    pub const DAY_S: f64 = 86_400.0;

    #[inline]
    pub fn atm() -> super::Pressure {
        super::pa(STANDARD_ATMOSPHERE_PA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _l = m(2.0);
        let _a = m2(0.5);
        let _dt = s(0.1);
        let _w = w(12.0);
        let _atm = constants::atm();
    }

    #[test]
    fn small_units_scale_to_si() {
        assert!((cm3(10.0).value - 1.0e-5).abs() < 1e-18);
        assert!((cm2(10.0).value - 1.0e-3).abs() < 1e-15);
        assert_eq!(j_per_k(2430.0).value, 2430.0);
        assert_eq!(j_per_kg_k(900.0).value, 900.0);
        assert_eq!(kg_per_m3(2700.0).value, 2700.0);
    }

    #[test]
    fn temperature_scales_round_trip() {
        assert!((kelvin_to_celsius(273.15)).abs() < 1e-12);
        assert!((celsius_to_kelvin(kelvin_to_celsius(300.0)) - 300.0).abs() < 1e-12);
        assert!((kelvin_to_fahrenheit(373.15) - 212.0).abs() < 1e-9);
        assert!((fahrenheit_to_kelvin(32.0) - 273.15).abs() < 1e-12);
    }
}
