// src/data.rs

use crate::config::AppConfig;
use crate::error::QuizError;
use crate::model::{Catalog, Category, Question};
use serde::Deserialize;
use std::collections::BTreeMap;

const EMBEDDED_CATALOG: &str = include_str!("data/brand_questions.yaml");

#[derive(Deserialize)]
struct CatalogFile {
    weights: BTreeMap<Category, f64>,
    questions: Vec<Question>,
}

/// Parses and validates a YAML catalog.
pub fn parse_catalog(yaml: &str) -> Result<Catalog, QuizError> {
    let file: CatalogFile = serde_yaml::from_str(yaml)?;
    Catalog::new(file.questions, file.weights)
}

/// Catalog compiled into the binary.
pub fn read_catalog_embedded() -> Result<Catalog, QuizError> {
    parse_catalog(EMBEDDED_CATALOG)
}

/// Loads the catalog named by the config, falling back to the embedded one.
pub fn load_catalog(config: &AppConfig) -> Result<Catalog, QuizError> {
    match &config.catalog_path {
        Some(path) => {
            log::info!("loading catalog from {}", path.display());
            let content = std::fs::read_to_string(path)?;
            parse_catalog(&content)
        }
        None => read_catalog_embedded(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = read_catalog_embedded().expect("embedded catalog");
        assert_eq!(catalog.len(), 5);

        let categories: Vec<Category> = catalog.questions().iter().map(|q| q.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Goals,
                Category::Positioning,
                Category::Presence,
                Category::ContentCreation,
                Category::ProfitPotential,
            ]
        );
        for q in catalog.questions() {
            let values: Vec<u32> = q.options.iter().map(|o| o.value).collect();
            assert_eq!(values, vec![1, 2, 5]);
        }

        let total: f64 = catalog.weights().values().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn missing_weight_fails_at_load() {
        let yaml = r#"
weights:
  Goals: 1.0
questions:
  - question: "q1"
    category: Goals
    options: [{ text: "a", value: 1 }]
  - question: "q2"
    category: Presence
    options: [{ text: "a", value: 1 }]
"#;
        let err = parse_catalog(yaml).unwrap_err();
        assert!(matches!(err, QuizError::MissingWeight(Category::Presence)));
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let yaml = r#"
weights:
  Goals: 1.0
questions:
  - question: "q1"
    category: Charisma
    options: [{ text: "a", value: 1 }]
"#;
        assert!(matches!(parse_catalog(yaml), Err(QuizError::Yaml(_))));
    }

    #[test]
    fn rejects_empty_and_malformed_questions() {
        let empty = "weights: { Goals: 1.0 }\nquestions: []\n";
        assert!(matches!(parse_catalog(empty), Err(QuizError::EmptyCatalog)));

        let no_options = r#"
weights: { Goals: 1.0 }
questions:
  - { question: "q", category: Goals, options: [] }
"#;
        assert!(matches!(
            parse_catalog(no_options),
            Err(QuizError::NoOptions { index: 0 })
        ));

        let zero_value = r#"
weights: { Goals: 1.0 }
questions:
  - { question: "q", category: Goals, options: [{ text: "a", value: 0 }] }
"#;
        assert!(matches!(
            parse_catalog(zero_value),
            Err(QuizError::ReservedOptionValue { index: 0 })
        ));

        let duplicate = r#"
weights: { Goals: 1.0 }
questions:
  - { question: "q", category: Goals, options: [{ text: "a", value: 2 }, { text: "b", value: 2 }] }
"#;
        assert!(matches!(
            parse_catalog(duplicate),
            Err(QuizError::DuplicateOptionValue { index: 0, value: 2 })
        ));
    }

    #[test]
    fn rejects_non_positive_weights() {
        let yaml = r#"
weights: { Goals: 0.0 }
questions:
  - { question: "q", category: Goals, options: [{ text: "a", value: 1 }] }
"#;
        assert!(matches!(
            parse_catalog(yaml),
            Err(QuizError::InvalidWeight { category: Category::Goals, .. })
        ));
    }

    #[test]
    fn load_catalog_reads_override_file() {
        let path = std::env::temp_dir().join(format!("brand_quiz_catalog_{}.yaml", std::process::id()));
        std::fs::write(
            &path,
            "weights: { Presence: 1.0 }\nquestions:\n  - { question: \"only\", category: Presence, options: [{ text: \"x\", value: 3 }] }\n",
        )
        .expect("write temp catalog");

        let config = AppConfig {
            catalog_path: Some(path.clone()),
            ..AppConfig::default()
        };
        let catalog = load_catalog(&config).expect("catalog from file");
        let _ = std::fs::remove_file(&path);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.weight(Category::Presence), Some(1.0));
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let config = AppConfig {
            catalog_path: Some("/definitely/not/here.yaml".into()),
            ..AppConfig::default()
        };
        assert!(matches!(load_catalog(&config), Err(QuizError::Io(_))));
    }
}
