//! Result types for beam analysis

use serde::{Deserialize, Serialize};

/// The two integration constants of the simply-supported beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryConstants {
    /// Shear at `x = 0`
    pub start_shear: f64,
    /// Slope at `x = 0`
    pub start_slope: f64,
}

/// Response quantities at one station
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseValues {
    /// Station (distance from the start of the beam)
    pub x: f64,
    /// Shear force
    pub shear: f64,
    /// Bending moment
    pub moment: f64,
    /// Slope (rotation)
    pub slope: f64,
    /// Transverse deflection
    pub deflection: f64,
}

/// Signed extreme of a response quantity and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Extreme {
    /// Value with the largest magnitude (sign preserved)
    pub value: f64,
    /// Station where it occurs
    pub x: f64,
}

impl Extreme {
    fn consider(&mut self, value: f64, x: f64) {
        if value.abs() > self.value.abs() {
            self.value = value;
            self.x = x;
        }
    }
}

/// Summary of a sampled response diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DiagramSummary {
    pub max_shear: Extreme,
    pub max_moment: Extreme,
    pub max_slope: Extreme,
    pub max_deflection: Extreme,
}

impl DiagramSummary {
    /// Scan sampled stations for the extreme of each quantity.
    ///
    /// Ties keep the first station encountered.
    pub fn from_stations(stations: &[ResponseValues]) -> Self {
        let mut summary = Self::default();
        for row in stations {
            summary.max_shear.consider(row.shear, row.x);
            summary.max_moment.consider(row.moment, row.x);
            summary.max_slope.consider(row.slope, row.x);
            summary.max_deflection.consider(row.deflection, row.x);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(x: f64, shear: f64, moment: f64) -> ResponseValues {
        ResponseValues {
            x,
            shear,
            moment,
            slope: 0.0,
            deflection: 0.0,
        }
    }

    #[test]
    fn test_summary_keeps_sign_of_extreme() {
        let stations = [row(0.0, -5.0, 0.0), row(5.0, 5.0, -25.0), row(10.0, 5.0, 0.0)];
        let summary = DiagramSummary::from_stations(&stations);

        assert_eq!(summary.max_shear, Extreme { value: -5.0, x: 0.0 });
        assert_eq!(summary.max_moment, Extreme { value: -25.0, x: 5.0 });
        assert_eq!(summary.max_deflection, Extreme::default());
    }
}
