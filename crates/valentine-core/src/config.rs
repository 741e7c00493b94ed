//! Card text and tuning, loaded from JSON.
//!
//! Every field has a default, so a config file only needs the fields it
//! changes:
//!
//! ```json
//! { "question": "Will you go out with me?", "confetti": { "count": 40 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::backdrop::BackdropSpec;
use crate::confetti::ConfettiSpec;
use crate::error::{CardError, CardResult};
use crate::state::{CardTuning, DEFAULT_EVASION_RANGE};

/// Upper bound on confetti particles per burst.
pub const MAX_CONFETTI: usize = 200;

/// Upper bound on `evasion_range`, in pixels.
pub const MAX_EVASION_RANGE: f64 = 10_000.0;

/// Upper bound on hearts plus roses in the backdrop.
pub const MAX_BACKDROP_GLYPHS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub question: String,
    pub subtitle: String,
    pub accept_label: String,
    pub decline_label: String,
    pub success_title: String,
    pub success_message: String,
    pub reset_label: String,
    /// Glyph pulsing above the question
    pub envelope: String,
    /// Glyph that follows the cursor while asking
    pub follower: String,
    /// Path or URL of the celebration image; the bundled one when unset
    pub image: Option<String>,
    /// Half-width of the square the decline control evades within, in pixels
    pub evasion_range: f64,
    pub confetti: ConfettiSpec,
    pub backdrop: BackdropSpec,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            question: "Will you be my Valentine?".to_string(),
            subtitle: "I promise it'll be sweet, just like you 🍫💕".to_string(),
            accept_label: "Yes! 💕".to_string(),
            decline_label: "No 😢".to_string(),
            success_title: "You made me the happiest bubu! 💕".to_string(),
            success_message: "I knew you'd say yes! (Aao puchi lelo)🌹".to_string(),
            reset_label: "Ask Again".to_string(),
            envelope: "💌".to_string(),
            follower: "💕".to_string(),
            image: None,
            evasion_range: DEFAULT_EVASION_RANGE,
            confetti: ConfettiSpec::default(),
            backdrop: BackdropSpec::default(),
        }
    }
}

impl CardConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> CardResult<Self> {
        let config: CardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "Loaded card config");
        Ok(config)
    }

    pub fn validate(&self) -> CardResult<()> {
        if self.question.trim().is_empty() {
            return Err(CardError::InvalidConfig("question is empty".to_string()));
        }
        if !self.evasion_range.is_finite() || self.evasion_range <= 0.0 {
            return Err(CardError::InvalidConfig(format!(
                "evasion_range must be a positive number, got {}",
                self.evasion_range
            )));
        }
        if self.evasion_range > MAX_EVASION_RANGE {
            return Err(CardError::InvalidConfig(format!(
                "evasion_range {} exceeds {}",
                self.evasion_range, MAX_EVASION_RANGE
            )));
        }
        let glyphs = self.backdrop.hearts.saturating_add(self.backdrop.roses);
        if glyphs > MAX_BACKDROP_GLYPHS {
            return Err(CardError::InvalidConfig(format!(
                "backdrop has {} glyphs, at most {} allowed",
                glyphs, MAX_BACKDROP_GLYPHS
            )));
        }
        if self.confetti.count > MAX_CONFETTI {
            return Err(CardError::InvalidConfig(format!(
                "confetti.count {} exceeds {}",
                self.confetti.count, MAX_CONFETTI
            )));
        }
        if self.confetti.count > 0 && self.confetti.glyphs.is_empty() {
            return Err(CardError::InvalidConfig(
                "confetti.glyphs is empty but confetti.count is not zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The parts of the config the state machine needs.
    pub fn tuning(&self) -> CardTuning {
        CardTuning {
            evasion_range: self.evasion_range,
            confetti: self.confetti.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> CardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.question, "Will you be my Valentine?");
        assert_eq!(config.tuning(), CardTuning::default());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            CardConfig::from_json(r#"{ "question": "Prom?", "confetti": { "count": 5 } }"#)
                .unwrap();
        assert_eq!(config.question, "Prom?");
        assert_eq!(config.confetti.count, 5);
        assert_eq!(config.confetti.glyphs.len(), 10);
        assert_eq!(config.reset_label, "Ask Again");
    }

    #[test]
    fn empty_question_rejected() {
        let err = CardConfig::from_json(r#"{ "question": "   " }"#).unwrap_err();
        assert!(matches!(err, CardError::InvalidConfig(_)));
    }

    #[test]
    fn bad_evasion_range_rejected() {
        for json in [r#"{ "evasion_range": 0 }"#, r#"{ "evasion_range": -5.0 }"#] {
            assert!(matches!(
                CardConfig::from_json(json),
                Err(CardError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn huge_evasion_range_rejected() {
        let err = CardConfig::from_json(r#"{ "evasion_range": 1e308 }"#).unwrap_err();
        assert!(matches!(err, CardError::InvalidConfig(_)));

        let at_limit = format!(r#"{{ "evasion_range": {} }}"#, MAX_EVASION_RANGE);
        assert!(CardConfig::from_json(&at_limit).is_ok());
    }

    #[test]
    fn backdrop_limits() {
        let huge = r#"{ "backdrop": { "hearts": 100000000 } }"#;
        assert!(matches!(
            CardConfig::from_json(huge),
            Err(CardError::InvalidConfig(_))
        ));

        let overflow = format!(
            r#"{{ "backdrop": {{ "hearts": {}, "roses": {} }} }}"#,
            usize::MAX,
            usize::MAX
        );
        assert!(CardConfig::from_json(&overflow).is_err());

        let at_limit = format!(
            r#"{{ "backdrop": {{ "hearts": {}, "roses": 0 }} }}"#,
            MAX_BACKDROP_GLYPHS
        );
        assert!(CardConfig::from_json(&at_limit).is_ok());
    }

    #[test]
    fn confetti_limits() {
        let too_many = format!(r#"{{ "confetti": {{ "count": {} }} }}"#, MAX_CONFETTI + 1);
        assert!(CardConfig::from_json(&too_many).is_err());

        let no_glyphs = r#"{ "confetti": { "count": 3, "glyphs": [] } }"#;
        assert!(CardConfig::from_json(no_glyphs).is_err());

        let none = r#"{ "confetti": { "count": 0, "glyphs": [] } }"#;
        assert!(CardConfig::from_json(none).is_ok());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            CardConfig::from_json("{ question: }"),
            Err(CardError::Parse(_))
        ));
    }

    #[test]
    fn pretty_json_roundtrips() {
        let config = CardConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert_eq!(CardConfig::from_json(&json).unwrap(), config);
    }
}
