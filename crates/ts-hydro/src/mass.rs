//! Empirical unit mass of a rotor plus its power take-off.

use ts_core::PhysicalContext;
use ts_core::units::{Force, Length, Mass, Power, kg};

/// Rotor mass from a quadratic fit in radius (m).
pub fn rotor_mass(radius: Length) -> Mass {
    let r = radius.value;
    kg(11.199_999_28 * r * r + 16.377_142_33 * r - 7.44)
}

/// Power take-off mass from a linear fit in rated power, evaluated on the watt value.
pub fn pto_mass(rated_power: Power) -> Mass {
    kg(0.015_016_93 * rated_power.value + 1.516_741_08)
}

pub fn unit_mass(radius: Length, rated_power: Power) -> Mass {
    rotor_mass(radius) + pto_mass(rated_power)
}

/// Weight of the complete unit under the context's gravity.
pub fn unit_weight(ctx: &PhysicalContext, radius: Length, rated_power: Power) -> Force {
    unit_mass(radius, rated_power) * ctx.gravity
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_core::numeric::{Tolerances, nearly_equal};
    use ts_core::units::{m, watts};

    #[test]
    fn rotor_mass_fit() {
        let mass = rotor_mass(m(1.0));
        assert!(nearly_equal(mass.value, 11.19999928 + 16.37714233 - 7.44, Tolerances::default()));
    }

    #[test]
    fn pto_mass_fit() {
        let mass = pto_mass(watts(1000.0));
        assert!(nearly_equal(mass.value, 15.01693 + 1.51674108, Tolerances::default()));
    }

    #[test]
    fn weight_is_mass_times_gravity() {
        let ctx = PhysicalContext::default();
        let w = unit_weight(&ctx, m(2.0), watts(5000.0));
        let mass = unit_mass(m(2.0), watts(5000.0));
        assert!(nearly_equal(w.value, mass.value * 9.8, Tolerances::default()));
        assert!(w.value > 0.0);
    }
}
