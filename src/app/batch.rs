use crate::config::form;
use crate::core::engine::RiskEngine;
use crate::domain::model::{
    ModelOutcome, PatientRecord, RawInput, RiskLabel, RuleOutcome, Statement,
};
use crate::domain::ports::Classifier;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::{Read, Write};

/// One output row per patient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRecord {
    pub row: usize,
    pub cholesterol_rule: Option<RuleOutcome>,
    pub heart_rate_rule: Option<RuleOutcome>,
    /// `risk`, `no_risk`, `unavailable`, or empty when prediction failed.
    pub model: Option<String>,
    pub model_message: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub model_risk: usize,
    pub model_missing: usize,
}

/// Scores every patient in a CSV through a [`RiskEngine`].
pub struct BatchScorer<C: Classifier> {
    engine: RiskEngine<C>,
}

impl<C: Classifier> BatchScorer<C> {
    pub fn new(engine: RiskEngine<C>) -> Self {
        Self { engine }
    }

    pub fn score<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<BatchSummary> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
        let mut writer = csv::Writer::from_writer(output);
        let mut summary = BatchSummary::default();

        for (index, row) in reader.deserialize::<PatientRecord>().enumerate() {
            let input = form::clamp_to_form(RawInput::try_from(row?)?);
            let verdict = self.engine.evaluate(&input);

            let mut record = BatchRecord {
                row: index + 1,
                cholesterol_rule: None,
                heart_rate_rule: None,
                model: None,
                model_message: None,
            };
            for statement in verdict.statements() {
                match statement {
                    Statement::Cholesterol(outcome) => record.cholesterol_rule = Some(*outcome),
                    Statement::HeartRate(outcome) => record.heart_rate_rule = Some(*outcome),
                    Statement::Model(outcome) => {
                        record.model = Some(model_column(*outcome).to_string());
                        record.model_message = Some(statement.message().to_string());
                    }
                }
            }

            match verdict.model_outcome() {
                Some(ModelOutcome::Predicted(RiskLabel::Risk)) => summary.model_risk += 1,
                Some(_) => {}
                None => summary.model_missing += 1,
            }
            summary.rows += 1;

            writer.serialize(&record)?;
        }

        writer.flush()?;
        tracing::info!(
            "Scored {} patients ({} flagged by the model, {} without a model verdict)",
            summary.rows,
            summary.model_risk,
            summary.model_missing
        );
        Ok(summary)
    }
}

fn model_column(outcome: ModelOutcome) -> &'static str {
    match outcome {
        ModelOutcome::Predicted(RiskLabel::Risk) => "risk",
        ModelOutcome::Predicted(RiskLabel::NoRisk) => "no_risk",
        ModelOutcome::Unavailable => "unavailable",
    }
}
