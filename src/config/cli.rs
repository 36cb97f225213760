use crate::config::form;
use crate::domain::model::{PatientRecord, RawInput, Statement, Verdict};
use crate::domain::ports::{InputSource, VerdictSink};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct VerdictReport<'a> {
    statements: &'a [Statement],
    messages: Vec<&'static str>,
}

/// Writes verdicts to any `Write`, stdout by default.
pub struct ConsoleDisplay<W: Write = std::io::Stdout> {
    out: W,
    format: DisplayFormat,
}

impl ConsoleDisplay {
    pub fn stdout(format: DisplayFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W, format: DisplayFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> VerdictSink for ConsoleDisplay<W> {
    fn render(&mut self, verdict: &Verdict) -> Result<()> {
        match self.format {
            DisplayFormat::Text => {
                for statement in verdict.statements() {
                    writeln!(self.out, "{}", statement)?;
                }
            }
            DisplayFormat::Json => {
                let report = VerdictReport {
                    statements: verdict.statements(),
                    messages: verdict.messages(),
                };
                serde_json::to_writer_pretty(&mut self.out, &report)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Form values read from a `.json` or `.toml` patient file.
#[derive(Debug, Clone)]
pub struct PatientFile {
    path: PathBuf,
}

impl PatientFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InputSource for PatientFile {
    fn collect(&self) -> Result<RawInput> {
        tracing::debug!("Reading patient file {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)?;

        let is_json = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let record: PatientRecord = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Ok(form::clamp_to_form(RawInput::try_from(record)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::categories::{ChestPain, Thalassemia};
    use crate::domain::model::{ModelOutcome, RuleOutcome};
    use crate::utils::error::{ErrorCategory, RiskError};
    use tempfile::TempDir;

    fn sample_verdict() -> Verdict {
        let mut verdict = Verdict::new();
        verdict.push(Statement::Cholesterol(RuleOutcome::Risk));
        verdict.push(Statement::HeartRate(RuleOutcome::NoRisk));
        verdict.push(Statement::Model(ModelOutcome::Unavailable));
        verdict
    }

    #[test]
    fn test_text_display_writes_one_line_per_statement() {
        let mut display = ConsoleDisplay::new(Vec::new(), DisplayFormat::Text);
        display.render(&sample_verdict()).unwrap();

        let output = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(
            output,
            "Cholesterol is high: Risk of heart attack.\n\
             Heart rate is safe for your age: No Heart Attack Risk.\n\
             The model predicts: No Heart Attack Risk (0 = No risk).\n"
        );
    }

    #[test]
    fn test_json_display_keeps_structure() {
        let mut display = ConsoleDisplay::new(Vec::new(), DisplayFormat::Json);
        display.render(&sample_verdict()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&display.into_inner()).unwrap();
        assert_eq!(value["statements"][0]["source"], "cholesterol");
        assert_eq!(value["statements"][2]["outcome"], "unavailable");
        assert_eq!(
            value["messages"][1],
            "Heart rate is safe for your age: No Heart Attack Risk."
        );
    }

    #[test]
    fn test_patient_file_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patient.toml");
        std::fs::write(
            &path,
            "age = 58\nchest_pain = \"Atypical Angina\"\nthal = \"Reversable Defect\"\n",
        )
        .unwrap();

        let input = PatientFile::new(&path).collect().unwrap();

        assert_eq!(input.age, 58);
        assert_eq!(input.chest_pain, ChestPain::AtypicalAngina);
        assert_eq!(input.thalassemia, Thalassemia::ReversibleDefect);
        assert_eq!(input.cholesterol, 200);
    }

    fn assert_unknown_label(err: RiskError, expected_field: &str, expected_value: &str) {
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity().exit_code(), 2);
        match err {
            RiskError::UnknownCategory { field, value, .. } => {
                assert_eq!(field, expected_field);
                assert_eq!(value, expected_value);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_patient_file_json_rejects_unknown_label() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patient.json");
        std::fs::write(&path, r#"{"sex": "Unknown"}"#).unwrap();

        let err = PatientFile::new(&path).collect().unwrap_err();
        assert!(err.recovery_suggestion().contains("Male, Female"));
        assert_unknown_label(err, "sex", "Unknown");
    }

    #[test]
    fn test_patient_file_toml_rejects_unknown_label() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patient.toml");
        std::fs::write(&path, "age = 50\nthal = \"Reversible Defect\"\n").unwrap();

        let err = PatientFile::new(&path).collect().unwrap_err();
        assert!(err
            .recovery_suggestion()
            .contains("Normal, Fixed Defect, Reversable Defect"));
        assert_unknown_label(err, "thalassemia", "Reversible Defect");
    }

    #[test]
    fn test_patient_file_values_are_clamped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patient.toml");
        std::fs::write(&path, "chol = 900\nca = 7\noldpeak = -1.5\n").unwrap();

        let input = PatientFile::new(&path).collect().unwrap();

        assert_eq!(input.cholesterol, 700);
        assert_eq!(input.vessel_count, 4);
        assert_eq!(input.st_depression, 0.0);
    }

    #[test]
    fn test_patient_file_malformed_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patient.toml");
        std::fs::write(&path, "age = \"old\"\n").unwrap();

        assert!(matches!(
            PatientFile::new(&path).collect(),
            Err(RiskError::TomlError(_))
        ));
    }

    #[test]
    fn test_patient_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert!(PatientFile::new(temp_dir.path().join("nope.toml"))
            .collect()
            .is_err());
    }
}
