//! Question-set configuration module
//!
//! Question sets are fixed at configuration time: the built-in stress and
//! anxiety sets ship with the crate, and alternative sets can be loaded
//! from a YAML file. Files are parsed into raw spec structs and converted
//! through the domain constructors so every invariant (non-empty sets,
//! ascending thresholds, at least two options per question) holds.
//!
//! # Example
//!
//! ```no_run
//! use mindspace::config::AssessmentConfig;
//! use mindspace::domain::assessment::TestKind;
//!
//! let config = AssessmentConfig::built_in();
//! let stress = config.question_set(TestKind::Stress).expect("built-in set");
//! println!("{} questions", stress.len());
//! ```

mod defaults;
mod error;
mod file;

pub use error::ConfigError;
pub use file::{BandSpec, ConfigFile, OptionSpec, QuestionSetSpec, QuestionSpec, ThresholdSpec};

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::assessment::{QuestionSet, TestKind};

/// Root assessment configuration: one question set per test kind.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    sets: HashMap<TestKind, Arc<QuestionSet>>,
}

impl AssessmentConfig {
    /// Configuration with the built-in stress and anxiety sets.
    pub fn built_in() -> Self {
        let mut sets = HashMap::new();
        sets.insert(TestKind::Stress, defaults::stress_set());
        sets.insert(TestKind::Anxiety, defaults::anxiety_set());
        Self { sets }
    }

    /// Loads question sets from a YAML file.
    ///
    /// Kinds missing from the file fall back to the built-in sets.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or a
    /// set in it violates a domain invariant.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Loads question sets from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_yaml::from_str(text)?;

        let mut config = Self::built_in();
        for spec in file.question_sets {
            let kind = spec.kind;
            let set = spec.into_domain()?;
            config.sets.insert(kind, Arc::new(set));
        }
        Ok(config)
    }

    /// Returns the question set for a kind.
    pub fn question_set(&self, kind: TestKind) -> Option<Arc<QuestionSet>> {
        self.sets.get(&kind).cloned()
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self::built_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Band;
    use crate::domain::foundation::Points;
    use std::io::Write;

    #[test]
    fn built_in_config_has_both_kinds() {
        let config = AssessmentConfig::built_in();
        assert!(config.question_set(TestKind::Stress).is_some());
        assert!(config.question_set(TestKind::Anxiety).is_some());
    }

    #[test]
    fn built_in_stress_set_has_ten_questions() {
        let set = AssessmentConfig::built_in()
            .question_set(TestKind::Stress)
            .unwrap();
        assert_eq!(set.len(), 10);
        assert_eq!(set.max_score(), Points::new(30));
    }

    #[test]
    fn built_in_anxiety_set_has_fifteen_questions() {
        let set = AssessmentConfig::built_in()
            .question_set(TestKind::Anxiety)
            .unwrap();
        assert_eq!(set.len(), 15);
        assert_eq!(set.max_score(), Points::new(45));
    }

    #[test]
    fn built_in_scales_match_the_portal_thresholds() {
        let config = AssessmentConfig::built_in();
        let stress = config.question_set(TestKind::Stress).unwrap();
        assert_eq!(stress.classify(Points::new(13)), Band::Low);
        assert_eq!(stress.classify(Points::new(27)), Band::High);

        let anxiety = config.question_set(TestKind::Anxiety).unwrap();
        assert_eq!(anxiety.classify(Points::new(15)), Band::Low);
        assert_eq!(anxiety.classify(Points::new(31)), Band::High);
    }

    const VALID_YAML: &str = r#"
question_sets:
  - kind: stress
    bands:
      thresholds:
        - upper: 3
          band: low
        - upper: 6
          band: medium
      overflow: high
    questions:
      - prompt: "Câu hỏi thứ nhất?"
        options:
          - label: "Không"
            points: 0
          - label: "Có"
            points: 3
      - prompt: "Câu hỏi thứ hai?"
        options:
          - label: "Không"
            points: 0
          - label: "Có"
            points: 3
"#;

    #[test]
    fn yaml_overrides_one_kind_and_keeps_the_other() {
        let config = AssessmentConfig::from_yaml_str(VALID_YAML).unwrap();

        let stress = config.question_set(TestKind::Stress).unwrap();
        assert_eq!(stress.len(), 2);
        assert_eq!(stress.classify(Points::new(4)), Band::Medium);

        // Anxiety still the built-in set
        let anxiety = config.question_set(TestKind::Anxiety).unwrap();
        assert_eq!(anxiety.len(), 15);
    }

    #[test]
    fn yaml_file_roundtrips_through_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID_YAML.as_bytes()).unwrap();

        let config = AssessmentConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.question_set(TestKind::Stress).unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = AssessmentConfig::from_yaml_file("/nonexistent/sets.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let result = AssessmentConfig::from_yaml_str("question_sets: [not a set");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn single_option_question_is_rejected() {
        let yaml = r#"
question_sets:
  - kind: anxiety
    bands:
      thresholds:
        - upper: 1
          band: low
      overflow: high
    questions:
      - prompt: "Chỉ một lựa chọn?"
        options:
          - label: "Có"
            points: 1
"#;
        let result = AssessmentConfig::from_yaml_str(yaml);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn descending_thresholds_are_rejected() {
        let yaml = r#"
question_sets:
  - kind: stress
    bands:
      thresholds:
        - upper: 10
          band: low
        - upper: 5
          band: medium
      overflow: high
    questions:
      - prompt: "Câu hỏi?"
        options:
          - label: "Không"
            points: 0
          - label: "Có"
            points: 1
"#;
        let result = AssessmentConfig::from_yaml_str(yaml);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
