use anyhow::Result;
use heart_risk::domain::model::FEATURE_NAMES;
use heart_risk::{BatchScorer, ClassifierHandle, LogisticModel, RiskEngine, RiskError};
use tempfile::TempDir;

const PATIENTS: &str = "\
age,sex,cp,trestbps,chol,fbs,restecg,thalach,exang,oldpeak,slope,ca,thal
63,Male,Typical Angina,145,233,Yes,Left ventricular hypertrophy,150,No,2.3,Downsloping,0,Fixed Defect
37,Male,Non-anginal pain,130,250,No,Normal,187,No,3.5,Downsloping,0,Normal
30,Female,Atypical Angina,120,180,No,Normal,90,No,0.0,Upsloping,0,Normal
";

/// Weight only on "ca" (vessel count): any coloured vessel flags the patient.
fn write_vessel_model(dir: &std::path::Path) -> Result<std::path::PathBuf> {
    let mut coefficients = vec![0.0; FEATURE_NAMES.len()];
    coefficients[11] = 4.0;

    let path = dir.join("model.json");
    std::fs::write(
        &path,
        serde_json::json!({
            "model_type": "logistic_regression",
            "format_version": 1,
            "feature_names": FEATURE_NAMES,
            "coefficients": coefficients,
            "intercept": -2.0
        })
        .to_string(),
    )?;
    Ok(path)
}

#[test]
fn test_batch_scoring_from_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let model_path = write_vessel_model(temp_dir.path())?;
    let input_path = temp_dir.path().join("patients.csv");
    let output_path = temp_dir.path().join("scored.csv");
    std::fs::write(&input_path, PATIENTS)?;

    let mut scorer = BatchScorer::new(RiskEngine::new(ClassifierHandle::load(&model_path)));
    let summary = scorer.score(
        std::fs::File::open(&input_path)?,
        std::fs::File::create(&output_path)?,
    )?;

    assert_eq!(summary.rows, 3);
    assert_eq!(summary.model_risk, 0);
    assert_eq!(summary.model_missing, 0);

    let mut reader = csv::Reader::from_path(&output_path)?;
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][1], "risk");
    assert_eq!(&rows[2][1], "no_risk");
    assert_eq!(&rows[2][2], "no_risk");
    assert_eq!(&rows[2][3], "no_risk");
    Ok(())
}

#[test]
fn test_batch_without_model() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut scorer = BatchScorer::new(RiskEngine::new(ClassifierHandle::load(
        temp_dir.path().join("missing.json"),
    )));
    let mut output = Vec::new();

    let summary = scorer.score(PATIENTS.as_bytes(), &mut output)?;

    assert_eq!(summary.rows, 3);
    let scored = String::from_utf8(output)?;
    assert!(scored
        .lines()
        .skip(1)
        .all(|line| line.contains(",unavailable,")));
    Ok(())
}

#[test]
fn test_out_of_range_values_are_clamped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let model_path = write_vessel_model(temp_dir.path())?;
    // ca = 9 is clamped to the form maximum of 4 and still flags the patient
    let patients = "age,chol,thalach,ca\n200,150,40,9\n";

    let mut scorer = BatchScorer::new(RiskEngine::new(ClassifierHandle::load(&model_path)));
    let mut output = Vec::new();
    let summary = scorer.score(patients.as_bytes(), &mut output)?;

    assert_eq!(summary.model_risk, 1);
    let scored = String::from_utf8(output)?;
    // age 120 -> target 50, heart rate 60 -> risk
    assert!(scored.lines().nth(1).is_some_and(|line| line.starts_with("1,no_risk,risk,risk,")));
    Ok(())
}

#[test]
fn test_unknown_label_in_csv_row_names_the_field() -> Result<()> {
    let patients = "age,sex,cp,chol\n50,Male,Crushing,180\n";
    let mut scorer: BatchScorer<LogisticModel> =
        BatchScorer::new(RiskEngine::new(ClassifierHandle::Absent));

    let err = scorer
        .score(patients.as_bytes(), Vec::<u8>::new())
        .unwrap_err();

    assert!(matches!(
        &err,
        RiskError::UnknownCategory { field, value, expected }
            if field == "chest pain type"
                && value == "Crushing"
                && expected == "Typical Angina, Atypical Angina, Non-anginal pain, Asymptomatic"
    ));
    assert_eq!(err.severity().exit_code(), 2);
    Ok(())
}
