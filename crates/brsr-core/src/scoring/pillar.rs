use super::config::ScoreMaxima;
use crate::record::Principle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Environmental,
    Social,
    Governance,
}

impl Pillar {
    pub const fn ordered() -> [Self; 3] {
        [Self::Environmental, Self::Social, Self::Governance]
    }

    pub const fn of(principle: Principle) -> Self {
        match principle {
            Principle::SustainableProducts | Principle::Environment => Self::Environmental,
            Principle::EmployeeWellbeing | Principle::HumanRights | Principle::ConsumerValue => {
                Self::Social
            }
            Principle::EthicsTransparency
            | Principle::StakeholderResponsiveness
            | Principle::PolicyAdvocacy
            | Principle::InclusiveGrowth => Self::Governance,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Environmental => "Environmental",
            Self::Social => "Social",
            Self::Governance => "Governance",
        }
    }

    pub const fn maximum(self, maxima: &ScoreMaxima) -> i32 {
        match self {
            Self::Environmental => maxima.environmental,
            Self::Social => maxima.social,
            Self::Governance => maxima.governance,
        }
    }

    pub fn principles(self) -> impl Iterator<Item = Principle> {
        Principle::ordered()
            .into_iter()
            .filter(move |principle| Pillar::of(*principle) == self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(pillar: Pillar) -> Vec<u8> {
        pillar.principles().map(Principle::number).collect()
    }

    #[test]
    fn assigns_principles_to_fixed_pillars() {
        assert_eq!(numbers(Pillar::Environmental), vec![2, 6]);
        assert_eq!(numbers(Pillar::Social), vec![3, 5, 9]);
        assert_eq!(numbers(Pillar::Governance), vec![1, 4, 7, 8]);
    }
}
