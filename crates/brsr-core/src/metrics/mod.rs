mod demographics;
mod environment;
pub mod percentage;

pub use demographics::{HeadcountTotals, WomenRepresentation, WomenShare};
pub use environment::{
    EnvironmentalMetrics, ENERGY_INTENSITY_UNIT, GHG_INTENSITY_UNIT, WATER_INTENSITY_UNIT,
};
pub use percentage::{percentage, percentage_with_precision, NOT_APPLICABLE};

pub(crate) use environment::{
    NON_RENEWABLE_ENERGY_PATHS, RENEWABLE_ENERGY_PATHS, SCOPE_1_PATHS, SCOPE_2_PATHS,
    TURNOVER_PATHS, WATER_PATHS,
};

use crate::record::{DisclosureRecord, Principle};
use demographics::{
    headcount, women_representation, DIFFERENTLY_ABLED_EMPLOYEE_PATHS,
    DIFFERENTLY_ABLED_WORKER_PATHS, EMPLOYEE_PATHS, WORKER_PATHS,
};
use serde::{Deserialize, Serialize};

/// Precision settings for derived percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub percentage_decimals: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            percentage_decimals: percentage::DEFAULT_PERCENTAGE_DECIMALS,
        }
    }
}

/// Values computed from raw counts; rebuilt from scratch on every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub employees: HeadcountTotals,
    pub workers: HeadcountTotals,
    pub differently_abled_employees: HeadcountTotals,
    pub differently_abled_workers: HeadcountTotals,
    pub women_representation: WomenRepresentation,
    pub environment: EnvironmentalMetrics,
}

/// Stateless calculator; never fails, absorbing missing inputs as zero.
#[derive(Debug, Clone, Default)]
pub struct DerivedMetricsCalculator {
    config: MetricsConfig,
}

impl DerivedMetricsCalculator {
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    pub fn compute(&self, record: &DisclosureRecord) -> DerivedMetrics {
        let general = record.general_disclosures();
        let decimals = self.config.percentage_decimals;

        DerivedMetrics {
            employees: headcount(general, EMPLOYEE_PATHS, decimals),
            workers: headcount(general, WORKER_PATHS, decimals),
            differently_abled_employees: headcount(
                general,
                DIFFERENTLY_ABLED_EMPLOYEE_PATHS,
                decimals,
            ),
            differently_abled_workers: headcount(
                general,
                DIFFERENTLY_ABLED_WORKER_PATHS,
                decimals,
            ),
            women_representation: women_representation(general, decimals),
            environment: environment::environmental_metrics(
                general,
                record.principle(Principle::Environment),
                decimals,
            ),
        }
    }
}

/// Derived metrics with default precision.
pub fn compute_derived_metrics(record: &DisclosureRecord) -> DerivedMetrics {
    DerivedMetricsCalculator::default().compute(record)
}
