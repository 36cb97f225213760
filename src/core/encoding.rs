//! Integer codes the classifier expects for each categorical field.

use crate::domain::categories::{
    ChestPain, ExerciseAngina, FastingBloodSugar, RestingEcg, Sex, StSlope, Thalassemia,
};

pub trait CategoricalCode: Copy {
    fn code(self) -> u8;
}

impl CategoricalCode for Sex {
    fn code(self) -> u8 {
        match self {
            Sex::Male => 1,
            Sex::Female => 0,
        }
    }
}

impl CategoricalCode for ChestPain {
    fn code(self) -> u8 {
        match self {
            ChestPain::TypicalAngina => 1,
            ChestPain::AtypicalAngina => 2,
            ChestPain::NonAnginalPain => 3,
            ChestPain::Asymptomatic => 4,
        }
    }
}

impl CategoricalCode for FastingBloodSugar {
    fn code(self) -> u8 {
        match self {
            FastingBloodSugar::Yes => 1,
            FastingBloodSugar::No => 0,
        }
    }
}

impl CategoricalCode for RestingEcg {
    fn code(self) -> u8 {
        match self {
            RestingEcg::Normal => 0,
            RestingEcg::StTAbnormality => 1,
            RestingEcg::LeftVentricularHypertrophy => 2,
        }
    }
}

impl CategoricalCode for ExerciseAngina {
    fn code(self) -> u8 {
        match self {
            ExerciseAngina::Yes => 1,
            ExerciseAngina::No => 0,
        }
    }
}

impl CategoricalCode for StSlope {
    fn code(self) -> u8 {
        match self {
            StSlope::Upsloping => 1,
            StSlope::Flat => 2,
            StSlope::Downsloping => 3,
        }
    }
}

impl CategoricalCode for Thalassemia {
    fn code(self) -> u8 {
        match self {
            Thalassemia::Normal => 1,
            Thalassemia::FixedDefect => 2,
            Thalassemia::ReversibleDefect => 3,
        }
    }
}

pub fn encode<T: CategoricalCode>(value: T) -> f64 {
    f64::from(value.code())
}
