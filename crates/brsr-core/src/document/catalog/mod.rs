//! Fixed, ordered question lists for every report section.

mod general;
mod management;
mod principles;

pub(crate) use general::GENERAL_DISCLOSURES;
pub(crate) use management::MANAGEMENT_PROCESS;
pub(crate) use principles::principle_groups;

use super::format::Format;
use crate::metrics::{DerivedMetrics, HeadcountTotals, NOT_APPLICABLE};

/// Questions rendered under one level-2 heading.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QuestionGroup {
    pub title: &'static str,
    pub questions: &'static [QuestionSpec],
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct QuestionSpec {
    pub label: &'static str,
    pub paths: &'static [&'static str],
    pub render: Render,
    pub fallback: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Render {
    /// Key-value node from the resolved field.
    Field(Format),
    /// Key-value node preferring a derived metric over the disclosed figure.
    Metric(MetricRef),
    /// Table with one row per list element.
    List(&'static [Column]),
    /// Fixed three-row headcount table from the derived metrics.
    Headcount(HeadcountRef),
    /// Fixed table with one row per principle.
    PrincipleMatrix(&'static [Column]),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Column {
    pub header: &'static str,
    pub paths: &'static [&'static str],
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MetricRef {
    BoardWomen,
    KmpWomen,
    RenewableEnergyShare,
    EnergyIntensity,
    WaterIntensity,
    GhgIntensity,
}

impl MetricRef {
    pub fn derived(self, metrics: &DerivedMetrics) -> &str {
        match self {
            Self::BoardWomen => &metrics.women_representation.board_percentage,
            Self::KmpWomen => &metrics.women_representation.kmp_percentage,
            Self::RenewableEnergyShare => &metrics.environment.renewable_energy_share,
            Self::EnergyIntensity => &metrics.environment.energy_intensity,
            Self::WaterIntensity => &metrics.environment.water_intensity,
            Self::GhgIntensity => &metrics.environment.ghg_intensity,
        }
    }

    /// Format of the self-reported figure used when the derived value is `N/A`.
    pub const fn disclosed_format(self) -> Format {
        match self {
            Self::BoardWomen | Self::KmpWomen | Self::RenewableEnergyShare => Format::Percent,
            Self::EnergyIntensity | Self::WaterIntensity | Self::GhgIntensity => Format::Number,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeadcountRef {
    Employees,
    Workers,
    DifferentlyAbledEmployees,
    DifferentlyAbledWorkers,
}

impl HeadcountRef {
    pub fn totals(self, metrics: &DerivedMetrics) -> &HeadcountTotals {
        match self {
            Self::Employees => &metrics.employees,
            Self::Workers => &metrics.workers,
            Self::DifferentlyAbledEmployees => &metrics.differently_abled_employees,
            Self::DifferentlyAbledWorkers => &metrics.differently_abled_workers,
        }
    }
}

const fn field(
    label: &'static str,
    paths: &'static [&'static str],
    format: Format,
) -> QuestionSpec {
    QuestionSpec {
        label,
        paths,
        render: Render::Field(format),
        fallback: NOT_APPLICABLE,
    }
}

pub(crate) const fn text(label: &'static str, paths: &'static [&'static str]) -> QuestionSpec {
    field(label, paths, Format::Text)
}

pub(crate) const fn yes_no(label: &'static str, paths: &'static [&'static str]) -> QuestionSpec {
    field(label, paths, Format::YesNo)
}

pub(crate) const fn number(label: &'static str, paths: &'static [&'static str]) -> QuestionSpec {
    field(label, paths, Format::Number)
}

pub(crate) const fn percent(label: &'static str, paths: &'static [&'static str]) -> QuestionSpec {
    field(label, paths, Format::Percent)
}

pub(crate) const fn metric(
    label: &'static str,
    paths: &'static [&'static str],
    metric: MetricRef,
) -> QuestionSpec {
    QuestionSpec {
        label,
        paths,
        render: Render::Metric(metric),
        fallback: NOT_APPLICABLE,
    }
}

pub(crate) const fn list(
    label: &'static str,
    paths: &'static [&'static str],
    columns: &'static [Column],
    fallback: &'static str,
) -> QuestionSpec {
    QuestionSpec {
        label,
        paths,
        render: Render::List(columns),
        fallback,
    }
}

pub(crate) const fn headcount(label: &'static str, headcount: HeadcountRef) -> QuestionSpec {
    QuestionSpec {
        label,
        paths: &[],
        render: Render::Headcount(headcount),
        fallback: NOT_APPLICABLE,
    }
}

pub(crate) const fn principle_matrix(
    label: &'static str,
    paths: &'static [&'static str],
    columns: &'static [Column],
) -> QuestionSpec {
    QuestionSpec {
        label,
        paths,
        render: Render::PrincipleMatrix(columns),
        fallback: NOT_APPLICABLE,
    }
}

pub(crate) const fn column(
    header: &'static str,
    paths: &'static [&'static str],
    format: Format,
) -> Column {
    Column {
        header,
        paths,
        format,
    }
}
