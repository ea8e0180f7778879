use std::collections::HashMap;

use log::debug;

use super::error::SentimentError;

/// Polarity scorer used by the analyzer.
///
/// Implementations return a value roughly in -1.0..=1.0. Errors are never
/// propagated past the analyzer, which maps them to a neutral sentiment.
pub trait SentimentScorer: Send + Sync {
    fn polarity(&self, text: &str) -> Result<f64, SentimentError>;
}

const POLARITY_LEXICON: &[(&str, f64)] = &[
    // positive
    ("excellent", 1.0),
    ("awesome", 1.0),
    ("wonderful", 1.0),
    ("perfect", 1.0),
    ("best", 1.0),
    ("fantastic", 0.4),
    ("great", 0.8),
    ("happy", 0.8),
    ("welcome", 0.8),
    ("successful", 0.75),
    ("good", 0.7),
    ("amazing", 0.6),
    ("nice", 0.6),
    ("congratulations", 0.6),
    ("love", 0.5),
    ("glad", 0.5),
    ("pleased", 0.5),
    ("excited", 0.4),
    ("appreciate", 0.4),
    ("free", 0.4),
    ("success", 0.3),
    ("thanks", 0.2),
    ("thank", 0.2),
    // negative
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("hate", -0.8),
    ("annoying", -0.8),
    ("disappointed", -0.75),
    ("bad", -0.7),
    ("frustrated", -0.7),
    ("unhappy", -0.6),
    ("sorry", -0.5),
    ("unfortunately", -0.5),
    ("wrong", -0.5),
    ("failed", -0.5),
    ("angry", -0.5),
    ("sad", -0.5),
    ("poor", -0.4),
    ("broken", -0.4),
    ("overdue", -0.4),
    ("cancelled", -0.4),
    ("failure", -0.3),
    ("problem", -0.3),
    ("late", -0.3),
    ("delay", -0.3),
    ("issue", -0.2),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("very", 1.3),
    ("really", 1.3),
    ("super", 1.3),
    ("highly", 1.3),
    ("truly", 1.2),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "nothing", "hardly"];

/// Tokens after a negation during which it still applies
const NEGATION_WINDOW: usize = 3;

/// Lexicon and rule based polarity scorer.
///
/// Polarity is the mean of the polar words found. An intensifier scales the
/// word right after it, and a negation within a short window flips and halves
/// the next polar word.
pub struct LexiconSentiment {
    lexicon: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl LexiconSentiment {
    pub fn new() -> Self {
        LexiconSentiment {
            lexicon: POLARITY_LEXICON.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    fn is_negation(token: &str) -> bool {
        NEGATIONS.contains(&token) || token.ends_with("n't")
    }
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconSentiment {
    fn polarity(&self, text: &str) -> Result<f64, SentimentError> {
        let mut scores = Vec::new();
        let mut modifier = 1.0;
        let mut negation_left = 0usize;

        let tokens = text
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .map(|t| t.trim_matches('\''));

        for token in tokens {
            if Self::is_negation(token) {
                negation_left = NEGATION_WINDOW;
                continue;
            }

            if let Some(factor) = self.intensifiers.get(token) {
                modifier *= factor;
                continue;
            }

            if let Some(value) = self.lexicon.get(token) {
                let mut score = (value * modifier).clamp(-1.0, 1.0);
                if negation_left > 0 {
                    score *= -0.5;
                }
                scores.push(score);
                negation_left = 0;
            } else {
                negation_left = negation_left.saturating_sub(1);
            }
            modifier = 1.0;
        }

        if scores.is_empty() {
            return Ok(0.0);
        }

        let polarity = scores.iter().sum::<f64>() / scores.len() as f64;
        debug!("Polarity {:.3} from {} polar word(s)", polarity, scores.len());

        if !polarity.is_finite() {
            return Err(SentimentError::NonFinite(polarity));
        }

        Ok(polarity)
    }
}
