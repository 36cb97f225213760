pub mod cli;
pub mod form;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::categories::{
    ChestPain, ExerciseAngina, FastingBloodSugar, RestingEcg, Sex, StSlope, Thalassemia,
};
#[cfg(feature = "cli")]
use crate::domain::model::RawInput;
#[cfg(feature = "cli")]
use crate::domain::ports::InputSource;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Args, Parser};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "heart-risk")]
#[command(about = "Heart attack risk check: cholesterol and heart-rate rules plus a model verdict")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Model artifact, overrides [model] path from the config
    #[arg(long)]
    pub model: Option<String>,

    /// Read form values from a .toml or .json patient file instead of flags
    #[arg(long, conflicts_with = "form")]
    pub input: Option<PathBuf>,

    /// Print the verdict as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(flatten)]
    pub form: FormArgs,
}

/// One flag per form field, defaulting to the form's preset values.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
#[group(id = "form", multiple = true)]
pub struct FormArgs {
    #[arg(long, help = form::AGE.label, default_value_t = form::AGE.default)]
    pub age: u32,

    #[arg(long, help = "Sex", default_value_t = Sex::default())]
    pub sex: Sex,

    #[arg(long = "chest-pain", help = "Chest Pain Type", default_value_t = ChestPain::default())]
    pub chest_pain: ChestPain,

    #[arg(long = "resting-bp", help = form::RESTING_BP.label, default_value_t = form::RESTING_BP.default)]
    pub resting_bp: u32,

    #[arg(long, help = form::CHOLESTEROL.label, default_value_t = form::CHOLESTEROL.default)]
    pub cholesterol: u32,

    #[arg(
        long = "fasting-blood-sugar",
        help = "Fasting Blood Sugar > 120 mg/dl",
        default_value_t = FastingBloodSugar::default()
    )]
    pub fasting_blood_sugar: FastingBloodSugar,

    #[arg(
        long = "resting-ecg",
        help = "Resting Electrocardiographic results",
        default_value_t = RestingEcg::default()
    )]
    pub resting_ecg: RestingEcg,

    #[arg(long = "max-heart-rate", help = form::MAX_HEART_RATE.label, default_value_t = form::MAX_HEART_RATE.default)]
    pub max_heart_rate: u32,

    #[arg(
        long = "exercise-angina",
        help = "Exercise Induced Angina",
        default_value_t = ExerciseAngina::default()
    )]
    pub exercise_angina: ExerciseAngina,

    #[arg(long = "st-depression", help = form::ST_DEPRESSION.label, default_value_t = form::ST_DEPRESSION.default)]
    pub st_depression: f64,

    #[arg(long, help = "Slope of the Peak Exercise ST Segment", default_value_t = StSlope::default())]
    pub slope: StSlope,

    #[arg(long = "vessel-count", help = form::VESSEL_COUNT.label, default_value_t = form::VESSEL_COUNT.default)]
    pub vessel_count: u32,

    #[arg(long, help = "Thalassemia", default_value_t = Thalassemia::default())]
    pub thalassemia: Thalassemia,
}

#[cfg(feature = "cli")]
impl From<&FormArgs> for RawInput {
    fn from(args: &FormArgs) -> Self {
        RawInput {
            age: args.age,
            sex: args.sex,
            chest_pain: args.chest_pain,
            resting_bp: args.resting_bp,
            cholesterol: args.cholesterol,
            fasting_blood_sugar: args.fasting_blood_sugar,
            resting_ecg: args.resting_ecg,
            max_heart_rate: args.max_heart_rate,
            exercise_angina: args.exercise_angina,
            st_depression: args.st_depression,
            slope: args.slope,
            vessel_count: args.vessel_count,
            thalassemia: args.thalassemia,
        }
    }
}

#[cfg(feature = "cli")]
impl InputSource for FormArgs {
    fn collect(&self) -> Result<RawInput> {
        Ok(form::clamp_to_form(RawInput::from(self)))
    }
}
