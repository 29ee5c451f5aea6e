//! Text-to-language classification.

use tracing::debug;

/// Raw classifier output: an ISO 639 code and the classifier's confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub code: String,
    pub confidence: f64,
}

/// Anything that can guess the language of a block of plain text.
pub trait LanguageClassifier {
    fn classify(&self, text: &str) -> Option<Classification>;
}

/// Trigram classifier backed by `whatlang`. Returns ISO 639-3 codes.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangClassifier;

impl LanguageClassifier for WhatlangClassifier {
    fn classify(&self, text: &str) -> Option<Classification> {
        if text.trim().is_empty() {
            return None;
        }
        let info = whatlang::detect(text)?;
        debug!(
            "Classifier: {} (confidence {:.2}, reliable: {})",
            info.lang().code(),
            info.confidence(),
            info.is_reliable()
        );
        Some(Classification {
            code: info.lang().code().to_string(),
            confidence: info.confidence(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_french_dialogue() {
        let text = "Je ne sais pas ce que tu veux dire. Nous devons partir avant \
                    la tombée de la nuit, sinon ils vont nous retrouver. \
                    Est-ce que tu as vu mon frère ce matin ?";
        let result = WhatlangClassifier.classify(text).unwrap();
        assert_eq!(result.code, "fra");
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(WhatlangClassifier.classify("   \n").is_none());
    }
}
