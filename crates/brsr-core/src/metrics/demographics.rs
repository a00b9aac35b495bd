use super::percentage::percentage_with_precision;
use crate::record::{coerce::to_number, lookup, resolve};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub(crate) const EMPLOYEE_PATHS: &[&str] = &["sa_employee_details", "sa_employees"];
pub(crate) const WORKER_PATHS: &[&str] = &["sa_workers_details", "sa_workers"];
pub(crate) const DIFFERENTLY_ABLED_EMPLOYEE_PATHS: &[&str] = &[
    "sa_differently_abled_details.employees",
    "sa_differently_abled_employees",
];
pub(crate) const DIFFERENTLY_ABLED_WORKER_PATHS: &[&str] = &[
    "sa_differently_abled_details.workers",
    "sa_differently_abled_workers",
];
const WOMEN_REPRESENTATION_PATHS: &[&str] =
    &["sa_women_representation_details", "sa_women_representation"];

const PERMANENT_MALE: &[&str] = &["permanent_male"];
const PERMANENT_FEMALE: &[&str] = &["permanent_female"];
const OTHER_MALE: &[&str] = &["other_than_permanent_male", "other_male"];
const OTHER_FEMALE: &[&str] = &["other_than_permanent_female", "other_female"];

/// Headcount breakdown for one category of personnel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadcountTotals {
    pub permanent_male: f64,
    pub permanent_female: f64,
    pub other_male: f64,
    pub other_female: f64,
    pub permanent_total: f64,
    pub other_total: f64,
    pub total_male: f64,
    pub total_female: f64,
    pub grand_total: f64,
    pub women_percentage: WomenShare,
}

/// Share of women per employment type, measured against the computed totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WomenShare {
    pub permanent: String,
    pub other: String,
    pub total: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WomenRepresentation {
    pub board_total_members: f64,
    pub board_number_of_women: f64,
    pub board_percentage: String,
    pub kmp_total_personnel: f64,
    pub kmp_number_of_women: f64,
    pub kmp_percentage: String,
}

pub(crate) fn headcount(general: &Value, paths: &[&str], decimals: usize) -> HeadcountTotals {
    let block = resolve(general, paths);
    let leaf = |aliases: &[&str]| to_number(block.and_then(|b| resolve(b, aliases)));

    let permanent_male = leaf(PERMANENT_MALE);
    let permanent_female = leaf(PERMANENT_FEMALE);
    let other_male = leaf(OTHER_MALE);
    let other_female = leaf(OTHER_FEMALE);

    let permanent_total = permanent_male + permanent_female;
    let other_total = other_male + other_female;
    let total_male = permanent_male + other_male;
    let total_female = permanent_female + other_female;
    let grand_total = permanent_total + other_total;

    HeadcountTotals {
        permanent_male,
        permanent_female,
        other_male,
        other_female,
        permanent_total,
        other_total,
        total_male,
        total_female,
        grand_total,
        women_percentage: WomenShare {
            permanent: percentage_with_precision(permanent_female, permanent_total, decimals),
            other: percentage_with_precision(other_female, other_total, decimals),
            total: percentage_with_precision(total_female, grand_total, decimals),
        },
    }
}

pub(crate) fn women_representation(general: &Value, decimals: usize) -> WomenRepresentation {
    let block = resolve(general, WOMEN_REPRESENTATION_PATHS);
    let field = |path: &str| to_number(block.and_then(|b| lookup(b, path)));

    let board_total_members = field("board_total_members");
    let board_number_of_women = field("board_number_of_women");
    let kmp_total_personnel = field("kmp_total_personnel");
    let kmp_number_of_women = field("kmp_number_of_women");

    WomenRepresentation {
        board_total_members,
        board_number_of_women,
        board_percentage: percentage_with_precision(
            board_number_of_women,
            board_total_members,
            decimals,
        ),
        kmp_total_personnel,
        kmp_number_of_women,
        kmp_percentage: percentage_with_precision(
            kmp_number_of_women,
            kmp_total_personnel,
            decimals,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sums_leaf_counts_into_totals() {
        let general = json!({
            "sa_employee_details": {
                "permanent_male": 1502,
                "permanent_female": 86,
                "other_than_permanent_male": 0,
                "other_than_permanent_female": 0
            }
        });

        let totals = headcount(&general, EMPLOYEE_PATHS, 2);
        assert_eq!(totals.permanent_total, 1588.0);
        assert_eq!(totals.other_total, 0.0);
        assert_eq!(totals.total_male, 1502.0);
        assert_eq!(totals.total_female, 86.0);
        assert_eq!(totals.grand_total, 1588.0);
        assert_eq!(totals.women_percentage.permanent, "5.42%");
        assert_eq!(totals.women_percentage.other, "N/A");
    }

    #[test]
    fn coerces_string_counts_and_missing_leaves() {
        let general = json!({
            "sa_workers_details": {
                "permanent_male": "40",
                "permanent_female": "ten",
                "other_male": 5
            }
        });

        let totals = headcount(&general, WORKER_PATHS, 2);
        assert_eq!(totals.permanent_total, 40.0);
        assert_eq!(totals.other_total, 5.0);
        assert_eq!(totals.grand_total, 45.0);
        assert_eq!(totals.women_percentage.total, "0.00%");
    }

    #[test]
    fn board_share_uses_disclosed_totals() {
        let general = json!({
            "sa_women_representation_details": {
                "board_total_members": 8,
                "board_number_of_women": 2,
                "kmp_total_personnel": 0,
                "kmp_number_of_women": 0
            }
        });

        let women = women_representation(&general, 2);
        assert_eq!(women.board_percentage, "25.00%");
        assert_eq!(women.kmp_percentage, "N/A");
    }
}
