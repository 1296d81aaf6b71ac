//! Prompt text for the two debate modes.

/// DebateMaster instructions sent with every generation request.
pub(crate) const SYSTEM_PROMPT: &str = r#"Tu es DebateMaster, un expert en argumentation et en débats.

--------------------------------------------------------
MODE 1 = "train"
Objectif : entraîner l'utilisateur à débattre.
- Réponds comme un expert du débat
- Propose des arguments logiques
- Contredis ou soutiens selon la discussion
- Donne des conseils si l'utilisateur fait une erreur
- Ne donne JAMAIS de score dans ce mode

--------------------------------------------------------
MODE 2 = "score"
Objectif : évaluer la qualité argumentative de l'utilisateur.
À chaque message utilisateur :
- Analyse l'idée principale
- Analyse la cohérence logique
- Analyse l'utilisation de preuves
- Analyse la force argumentative
- Analyse la clarté du style
- Génère une mini-évaluation (score 0-20 pour chaque critère)
Stocke tout cela mais NE RÉVÈLE PAS encore le score.

Quand l'utilisateur dit "fin du débat" :
- Fournis un rapport complet :
  * Score global /100
  * Forces
  * Faiblesses
  * Conseils d'amélioration
  * Exemple de meilleure réponse possible
--------------------------------------------------------
Tu adaptes ton comportement selon le mode."#;

/// Assemble the full prompt for a generation request: instructions, the
/// active mode, the rendered recent history, and the current message.
pub(crate) fn debate_prompt(mode: &str, context: &str, message: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\nMODE ACTUEL : {mode}\n\n{context}\nUtilisateur : {message}")
}

/// Analysis prompt asking the model for a JSON rubric evaluation of one
/// user argument.
pub(crate) fn evaluation_prompt(message: &str) -> String {
    format!(
        r#"Analyse ce message d'utilisateur pour un débat :

Message : "{message}"

Donne une analyse sous forme de JSON avec :
- idee_principale (texte)
- logique (score 0-20)
- preuves (score 0-20)
- force_argumentative (score 0-20)
- structure (score 0-20)
- clarte_style (score 0-20)"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debate_prompt_layers_mode_context_and_message() {
        let prompt = debate_prompt("train", "User: salut\n", "mon argument");
        assert!(prompt.starts_with(SYSTEM_PROMPT));
        assert!(prompt.contains("MODE ACTUEL : train"));
        assert!(prompt.contains("User: salut\n"));
        assert!(prompt.ends_with("Utilisateur : mon argument"));
    }

    #[test]
    fn evaluation_prompt_names_every_criterion() {
        let prompt = evaluation_prompt("le nucléaire est indispensable");
        assert!(prompt.contains("le nucléaire est indispensable"));
        for field in [
            "idee_principale",
            "logique",
            "preuves",
            "force_argumentative",
            "structure",
            "clarte_style",
        ] {
            assert!(prompt.contains(field), "missing rubric field {field}");
        }
    }
}
