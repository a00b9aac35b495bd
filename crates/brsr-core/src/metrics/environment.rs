use super::percentage::{intensity, percentage_with_precision, NOT_APPLICABLE};
use crate::record::{coerce::to_number, resolve};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub(crate) const TURNOVER_PATHS: &[&str] = &[
    "sa_business_details.turnover",
    "sa_csr_details.turnover",
    "turnover",
];

pub(crate) const RENEWABLE_ENERGY_PATHS: &[&str] = &[
    "essential_indicators.energy_consumption.renewable_energy",
    "essential_indicators.total_renewable_energy",
];
pub(crate) const NON_RENEWABLE_ENERGY_PATHS: &[&str] = &[
    "essential_indicators.energy_consumption.non_renewable_energy",
    "essential_indicators.total_non_renewable_energy",
];
pub(crate) const WATER_PATHS: &[&str] = &[
    "essential_indicators.water_consumption.total_consumption",
    "essential_indicators.total_water_consumption",
];
pub(crate) const SCOPE_1_PATHS: &[&str] = &[
    "essential_indicators.ghg_emissions.scope_1",
    "essential_indicators.scope_1_emissions",
];
pub(crate) const SCOPE_2_PATHS: &[&str] = &[
    "essential_indicators.ghg_emissions.scope_2",
    "essential_indicators.scope_2_emissions",
];

pub const ENERGY_INTENSITY_UNIT: &str = "GJ per rupee of turnover";
pub const WATER_INTENSITY_UNIT: &str = "KL per rupee of turnover";
pub const GHG_INTENSITY_UNIT: &str = "tCO2e per rupee of turnover";

/// Environmental ratios. Every ratio reads `N/A` when turnover is not positive
/// or its numerator was never disclosed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalMetrics {
    pub turnover: f64,
    pub total_energy_consumption: f64,
    pub total_ghg_emissions: f64,
    pub renewable_energy_share: String,
    pub energy_intensity: String,
    pub water_intensity: String,
    pub ghg_intensity: String,
}

pub(crate) fn environmental_metrics(
    general: &Value,
    environment: &Value,
    decimals: usize,
) -> EnvironmentalMetrics {
    let turnover = to_number(resolve(general, TURNOVER_PATHS));

    let renewable = resolve(environment, RENEWABLE_ENERGY_PATHS);
    let non_renewable = resolve(environment, NON_RENEWABLE_ENERGY_PATHS);
    let water = resolve(environment, WATER_PATHS);
    let scope_1 = resolve(environment, SCOPE_1_PATHS);
    let scope_2 = resolve(environment, SCOPE_2_PATHS);

    let total_energy_consumption = to_number(renewable) + to_number(non_renewable);
    let total_ghg_emissions = to_number(scope_1) + to_number(scope_2);
    let has_turnover = turnover > 0.0;

    let renewable_energy_share = if has_turnover && renewable.is_some() {
        percentage_with_precision(to_number(renewable), total_energy_consumption, decimals)
    } else {
        NOT_APPLICABLE.to_string()
    };

    let energy_intensity = if renewable.is_some() || non_renewable.is_some() {
        intensity(total_energy_consumption, turnover, ENERGY_INTENSITY_UNIT)
    } else {
        NOT_APPLICABLE.to_string()
    };

    let water_intensity = match water {
        Some(value) => intensity(to_number(Some(value)), turnover, WATER_INTENSITY_UNIT),
        None => NOT_APPLICABLE.to_string(),
    };

    let ghg_intensity = if scope_1.is_some() || scope_2.is_some() {
        intensity(total_ghg_emissions, turnover, GHG_INTENSITY_UNIT)
    } else {
        NOT_APPLICABLE.to_string()
    };

    EnvironmentalMetrics {
        turnover,
        total_energy_consumption,
        total_ghg_emissions,
        renewable_energy_share,
        energy_intensity,
        water_intensity,
        ghg_intensity,
    }
}
