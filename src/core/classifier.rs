use crate::core::logistic::LogisticModel;
use crate::domain::ports::Classifier;
use std::path::Path;

/// The process's one classifier, or its absence. Loaded once, never reloaded.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierHandle<C = LogisticModel> {
    Absent,
    Present(C),
}

impl ClassifierHandle<LogisticModel> {
    /// Load the model artifact. Any failure yields `Absent` instead of an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match LogisticModel::from_file(path) {
            Ok(model) => {
                tracing::info!("Loaded classifier from {}", path.display());
                ClassifierHandle::Present(model)
            }
            Err(e) => {
                tracing::warn!(
                    "Classifier unavailable ({}): {}. Falling back to the default verdict",
                    path.display(),
                    e
                );
                ClassifierHandle::Absent
            }
        }
    }
}

impl<C: Classifier> ClassifierHandle<C> {
    pub fn is_present(&self) -> bool {
        matches!(self, ClassifierHandle::Present(_))
    }

    pub fn classifier(&self) -> Option<&C> {
        match self {
            ClassifierHandle::Present(classifier) => Some(classifier),
            ClassifierHandle::Absent => None,
        }
    }
}

impl<C> From<Option<C>> for ClassifierHandle<C> {
    fn from(classifier: Option<C>) -> Self {
        match classifier {
            Some(classifier) => ClassifierHandle::Present(classifier),
            None => ClassifierHandle::Absent,
        }
    }
}
