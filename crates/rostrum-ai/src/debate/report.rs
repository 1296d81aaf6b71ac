//! Final score aggregation and report synthesis.

use super::evaluate::EvaluationRecord;

/// Maximum value of a single rubric criterion.
const CRITERION_MAX: f64 = 20.0;

pub(crate) const NO_ARGUMENTS: &str = "Aucun argument à évaluer.";
pub(crate) const NO_SCORE: &str = "Impossible de calculer le score.";

/// Average of all present criterion values across records, scaled to /100
/// and rounded to two decimals. `None` when no (record, criterion) pair
/// contributed.
pub fn aggregate_score(evaluations: &[EvaluationRecord]) -> Option<f64> {
    let mut total = 0.0;
    let mut count = 0u32;

    for record in evaluations {
        if let EvaluationRecord::Scored(scores) = record {
            for value in scores.criterion_values() {
                total += value;
                count += 1;
            }
        }
    }

    if count == 0 {
        return None;
    }

    let score = total / (f64::from(count) * CRITERION_MAX) * 100.0;
    Some((score * 100.0).round() / 100.0)
}

/// Synthesize the end-of-debate report for a session's evaluations.
///
/// The strengths/weaknesses/advice sections are fixed template text; only
/// the global score is derived from the evaluations.
pub(crate) fn final_report(evaluations: &[EvaluationRecord]) -> String {
    if evaluations.is_empty() {
        return NO_ARGUMENTS.to_string();
    }

    let Some(score) = aggregate_score(evaluations) else {
        return NO_SCORE.to_string();
    };

    format!(
        "🎯 **Score final du débat : {score:.2}/100**\n\
         \n\
         ✅ **Points forts**\n\
         - Analyse basée sur les arguments fournis\n\
         \n\
         ❌ **Points à améliorer**\n\
         - Cohérence\n\
         - Structure\n\
         - Preuves\n\
         \n\
         📘 **Conseils**\n\
         - Utilise des exemples concrets\n\
         - Structure tes arguments (idée → justification → preuve)\n\
         - Améliore la clarté et la logique interne\n"
    )
}

#[cfg(test)]
mod tests {
    use super::super::evaluate::ArgumentScores;
    use super::*;

    fn all_tens() -> EvaluationRecord {
        EvaluationRecord::Scored(ArgumentScores {
            idee_principale: Some("idée".into()),
            logique: Some(10.0),
            preuves: Some(10.0),
            force_argumentative: Some(10.0),
            structure: Some(10.0),
            clarte_style: Some(10.0),
        })
    }

    #[test]
    fn no_evaluations_reports_nothing_to_evaluate() {
        assert_eq!(final_report(&[]), NO_ARGUMENTS);
    }

    #[test]
    fn raw_only_evaluations_cannot_be_scored() {
        let records = vec![EvaluationRecord::Raw("texte libre".into())];
        assert_eq!(aggregate_score(&records), None);
        assert_eq!(final_report(&records), NO_SCORE);
    }

    #[test]
    fn two_all_ten_records_average_to_fifty() {
        let records = vec![all_tens(), all_tens()];
        assert_eq!(aggregate_score(&records), Some(50.0));
        assert!(final_report(&records).contains("50.00/100"));
    }

    #[test]
    fn raw_records_are_excluded_from_the_average() {
        let records = vec![all_tens(), EvaluationRecord::Raw("pas de JSON".into())];
        assert_eq!(aggregate_score(&records), Some(50.0));
    }

    #[test]
    fn missing_criteria_do_not_dilute_the_average() {
        let records = vec![EvaluationRecord::Scored(ArgumentScores {
            logique: Some(20.0),
            preuves: Some(10.0),
            ..ArgumentScores::default()
        })];
        // 30 points over 2 contributing criteria of 20 each
        assert_eq!(aggregate_score(&records), Some(75.0));
    }

    #[test]
    fn score_rounds_to_two_decimals() {
        let records = vec![EvaluationRecord::Scored(ArgumentScores {
            logique: Some(10.0),
            preuves: Some(10.0),
            force_argumentative: Some(10.0),
            ..ArgumentScores::default()
        })];
        // 30 / 60 = 50%, exact; now a case with a repeating fraction:
        let uneven = vec![EvaluationRecord::Scored(ArgumentScores {
            logique: Some(10.0),
            preuves: Some(10.0),
            structure: Some(5.0),
            ..ArgumentScores::default()
        })];
        assert_eq!(aggregate_score(&records), Some(50.0));
        // 25 / 60 * 100 = 41.666... → 41.67
        assert_eq!(aggregate_score(&uneven), Some(41.67));
    }
}
