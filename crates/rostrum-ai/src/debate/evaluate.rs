//! Rubric evaluation records for scored arguments.

use serde::{Deserialize, Serialize};

/// Structured rubric returned by the model for a single argument.
///
/// Every field is optional: the model sometimes omits a criterion, and a
/// missing criterion simply does not contribute to the final average.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgumentScores {
    pub idee_principale: Option<String>,
    pub logique: Option<f64>,
    pub preuves: Option<f64>,
    pub force_argumentative: Option<f64>,
    pub structure: Option<f64>,
    pub clarte_style: Option<f64>,
}

impl ArgumentScores {
    /// Criterion values present on this record, in rubric order.
    pub fn criterion_values(&self) -> impl Iterator<Item = f64> + '_ {
        [
            self.logique,
            self.preuves,
            self.force_argumentative,
            self.structure,
            self.clarte_style,
        ]
        .into_iter()
        .flatten()
    }
}

/// One evaluation produced in scoring mode, resolved once at parse time.
#[derive(Debug, Clone)]
pub enum EvaluationRecord {
    /// Model reply that parsed as the rubric object.
    Scored(ArgumentScores),
    /// Unparseable reply kept verbatim; excluded from numeric aggregation.
    Raw(String),
}

impl EvaluationRecord {
    /// Resolve a model reply into a record. Parse failures are recovered
    /// here, never surfaced to the caller.
    pub fn from_model_reply(reply: &str) -> Self {
        match serde_json::from_str::<ArgumentScores>(reply) {
            Ok(scores) => Self::Scored(scores),
            Err(_) => Self::Raw(reply.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rubric_reply_parses_as_scored() {
        let reply = r#"{
            "idee_principale": "le télétravail augmente la productivité",
            "logique": 15,
            "preuves": 12,
            "force_argumentative": 14,
            "structure": 13,
            "clarte_style": 16
        }"#;

        let record = EvaluationRecord::from_model_reply(reply);
        let EvaluationRecord::Scored(scores) = record else {
            panic!("expected a scored record");
        };
        assert_eq!(scores.logique, Some(15.0));
        assert_eq!(scores.criterion_values().count(), 5);
        assert_eq!(scores.criterion_values().sum::<f64>(), 70.0);
    }

    #[test]
    fn partial_rubric_tolerates_missing_criteria() {
        let record = EvaluationRecord::from_model_reply(r#"{"logique": 10, "preuves": 8}"#);
        let EvaluationRecord::Scored(scores) = record else {
            panic!("expected a scored record");
        };
        assert_eq!(scores.criterion_values().count(), 2);
        assert!(scores.idee_principale.is_none());
    }

    #[test]
    fn malformed_reply_falls_back_to_raw() {
        let reply = "Voici mon analyse : l'argument est plutôt solide.";
        let record = EvaluationRecord::from_model_reply(reply);
        assert!(matches!(record, EvaluationRecord::Raw(raw) if raw == reply));
    }

    #[test]
    fn mistyped_criterion_falls_back_to_raw() {
        let record = EvaluationRecord::from_model_reply(r#"{"logique": "quinze"}"#);
        assert!(matches!(record, EvaluationRecord::Raw(_)));
    }
}
