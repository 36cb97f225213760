use crate::core::classifier::ClassifierHandle;
use crate::core::features;
use crate::core::logistic::LogisticModel;
use crate::core::rules::{cholesterol_rule, heart_rate_rule};
use crate::domain::model::{ModelOutcome, RawInput, Statement, Verdict};
use crate::domain::ports::{Classifier, InputSource, VerdictSink};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Evaluating,
}

/// Runs the rule checks and the classifier for one "Predict" trigger.
pub struct RiskEngine<C: Classifier = LogisticModel> {
    classifier: ClassifierHandle<C>,
    state: EngineState,
}

impl<C: Classifier> RiskEngine<C> {
    pub fn new(classifier: ClassifierHandle<C>) -> Self {
        Self {
            classifier,
            state: EngineState::Idle,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_present()
    }

    pub fn evaluate(&mut self, input: &RawInput) -> Verdict {
        self.state = EngineState::Evaluating;
        let mut verdict = Verdict::new();

        verdict.push(Statement::Cholesterol(cholesterol_rule(input.cholesterol)));
        verdict.push(Statement::HeartRate(heart_rate_rule(
            input.age,
            input.max_heart_rate,
        )));

        match self.classifier.classifier() {
            Some(classifier) => {
                let features = features::build(input);
                tracing::debug!("Feature vector: {:?}", features.values());

                match classifier.predict(&features) {
                    Ok(label) => verdict.push(Statement::Model(ModelOutcome::Predicted(label))),
                    // The model line is dropped; the rule lines still stand.
                    Err(e) => tracing::warn!("Prediction skipped: {}", e),
                }
            }
            None => {
                tracing::debug!("No classifier loaded, using default verdict");
                verdict.push(Statement::Model(ModelOutcome::Unavailable));
            }
        }

        self.state = EngineState::Idle;
        verdict
    }

    /// Collect form values, evaluate them and hand the verdict to the display.
    pub fn run<I, S>(&mut self, source: &I, sink: &mut S) -> Result<Verdict>
    where
        I: InputSource,
        S: VerdictSink,
    {
        tracing::info!("Collecting form input");
        let input = source.collect()?;

        tracing::info!("Evaluating risk");
        let verdict = self.evaluate(&input);
        tracing::info!("Verdict has {} statements", verdict.statements().len());

        sink.render(&verdict)?;
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{EncodedFeatures, RiskLabel, RuleOutcome};
    use crate::utils::error::RiskError;

    struct FixedClassifier(RiskLabel);

    impl Classifier for FixedClassifier {
        fn predict(&self, _features: &EncodedFeatures) -> Result<RiskLabel> {
            Ok(self.0)
        }
    }

    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn predict(&self, _features: &EncodedFeatures) -> Result<RiskLabel> {
            Err(RiskError::PredictionError {
                message: "boom".to_string(),
            })
        }
    }

    struct FixedInput(RawInput);

    impl InputSource for FixedInput {
        fn collect(&self) -> Result<RawInput> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        rendered: Vec<Verdict>,
    }

    impl VerdictSink for RecordingSink {
        fn render(&mut self, verdict: &Verdict) -> Result<()> {
            self.rendered.push(verdict.clone());
            Ok(())
        }
    }

    fn input(cholesterol: u32, age: u32, max_heart_rate: u32) -> RawInput {
        RawInput {
            cholesterol,
            age,
            max_heart_rate,
            ..RawInput::default()
        }
    }

    #[test]
    fn test_absent_classifier_uses_default_verdict() {
        let mut engine: RiskEngine<FixedClassifier> = RiskEngine::new(ClassifierHandle::Absent);

        let verdict = engine.evaluate(&input(180, 30, 90));

        assert_eq!(
            verdict.statements(),
            &[
                Statement::Cholesterol(RuleOutcome::NoRisk),
                Statement::HeartRate(RuleOutcome::NoRisk),
                Statement::Model(ModelOutcome::Unavailable),
            ]
        );
        assert_eq!(
            verdict.messages(),
            vec![
                "Cholesterol is in the safe range: No Heart Attack Risk.",
                "Heart rate is safe for your age: No Heart Attack Risk.",
                "The model predicts: No Heart Attack Risk (0 = No risk).",
            ]
        );
    }

    #[test]
    fn test_heart_rate_above_target_is_flagged_without_model() {
        let mut engine: RiskEngine<FixedClassifier> = RiskEngine::new(ClassifierHandle::Absent);

        // target at 30 years is 95
        let verdict = engine.evaluate(&input(180, 30, 100));

        assert_eq!(verdict.statements()[1], Statement::HeartRate(RuleOutcome::Risk));
    }

    #[test]
    fn test_absent_classifier_ignores_feature_values() {
        let mut engine: RiskEngine<FixedClassifier> = RiskEngine::new(ClassifierHandle::Absent);
        for sample in [input(0, 0, 60), input(700, 120, 250), RawInput::default()] {
            let verdict = engine.evaluate(&sample);
            assert_eq!(verdict.model_outcome(), Some(ModelOutcome::Unavailable));
        }
    }

    #[test]
    fn test_present_classifier_label_is_reported() {
        let mut risky = RiskEngine::new(ClassifierHandle::Present(FixedClassifier(RiskLabel::Risk)));
        let verdict = risky.evaluate(&input(250, 40, 90));
        assert_eq!(
            verdict.statements(),
            &[
                Statement::Cholesterol(RuleOutcome::Risk),
                Statement::HeartRate(RuleOutcome::Risk),
                Statement::Model(ModelOutcome::Predicted(RiskLabel::Risk)),
            ]
        );

        let mut safe = RiskEngine::new(ClassifierHandle::Present(FixedClassifier(RiskLabel::NoRisk)));
        let verdict = safe.evaluate(&input(250, 40, 90));
        assert_eq!(
            verdict.model_outcome(),
            Some(ModelOutcome::Predicted(RiskLabel::NoRisk))
        );
    }

    #[test]
    fn test_prediction_failure_omits_model_statement() {
        let mut engine = RiskEngine::new(ClassifierHandle::Present(FailingClassifier));

        let verdict = engine.evaluate(&input(180, 30, 100));

        assert_eq!(verdict.statements().len(), 2);
        assert_eq!(verdict.model_outcome(), None);
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_repeated_evaluation_is_identical() {
        let mut engine = RiskEngine::new(ClassifierHandle::Present(FixedClassifier(RiskLabel::Risk)));
        let sample = input(210, 55, 120);

        let first = engine.evaluate(&sample);
        let second = engine.evaluate(&sample);

        assert_eq!(first, second);
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_run_renders_collected_input() {
        let mut engine: RiskEngine<FixedClassifier> = RiskEngine::new(ClassifierHandle::Absent);
        let mut sink = RecordingSink::default();
        let source = FixedInput(input(250, 30, 90));

        let verdict = engine.run(&source, &mut sink).unwrap();

        assert_eq!(sink.rendered, vec![verdict.clone()]);
        assert_eq!(verdict.statements()[0], Statement::Cholesterol(RuleOutcome::Risk));
        assert_eq!(verdict.statements()[1], Statement::HeartRate(RuleOutcome::NoRisk));
        assert!(!engine.has_classifier());
    }
}
