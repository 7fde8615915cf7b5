//! Label lookup and placeholder substitution.
//!
//! Labels are addressed by dotted keys (`"error.transaction_error"`) into a
//! nested JSON bundle. Unknown keys resolve to the key itself so a missing
//! translation still shows something traceable.

use crate::types::Substitutions;
use serde_json::Value;
use thiserror::Error as ThisError;

const EN_BUNDLE: &str = include_str!("en.json");

///
/// I18nError
///

#[derive(Debug, ThisError)]
pub enum I18nError {
    #[error("invalid i18n bundle: {0}")]
    InvalidBundle(String),
}

///
/// I18n
///

#[derive(Clone, Debug)]
pub struct I18n {
    bundle: Value,
}

impl I18n {
    pub fn from_json(json: &str) -> Result<Self, I18nError> {
        let bundle: Value =
            serde_json::from_str(json).map_err(|e| I18nError::InvalidBundle(e.to_string()))?;

        if !bundle.is_object() {
            return Err(I18nError::InvalidBundle("root must be an object".to_string()));
        }

        Ok(Self { bundle })
    }

    /// The label for `label_key`, or the key itself.
    #[must_use]
    pub fn translate(&self, label_key: &str) -> String {
        label_key
            .split('.')
            .try_fold(&self.bundle, |node, part| node.get(part))
            .and_then(Value::as_str)
            .map_or_else(|| label_key.to_string(), ToString::to_string)
    }

    #[must_use]
    pub fn translate_with(&self, label_key: &str, substitutions: &Substitutions) -> String {
        replace_placeholders(&self.translate(label_key), substitutions)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self {
            bundle: serde_json::from_str(EN_BUNDLE).unwrap_or(Value::Null),
        }
    }
}

/// Replace every occurrence of each key (e.g. `$name`) by its value.
/// Longer keys go first so `$identifier` is not eaten by `$id`.
#[must_use]
pub fn replace_placeholders(text: &str, substitutions: &Substitutions) -> String {
    let mut keys: Vec<&String> = substitutions.keys().collect();
    keys.sort_by_key(|k| std::cmp::Reverse(k.len()));

    keys.into_iter().fold(text.to_string(), |acc, key| {
        acc.replace(key.as_str(), &substitutions[key])
    })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn subs(pairs: &[(&str, &str)]) -> Substitutions {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn default_bundle_parses() {
        let i18n = I18n::default();

        assert_eq!(
            i18n.translate("error__attach_wallet.no_name"),
            "The hardware wallet needs a name."
        );
    }

    #[test]
    fn unknown_keys_fall_back_to_key() {
        let i18n = I18n::default();

        assert_eq!(i18n.translate("error.nope"), "error.nope");
        assert_eq!(i18n.translate("error"), "error");
    }

    #[test]
    fn substitutes_placeholders() {
        let i18n = I18n::default();
        let text = i18n.translate_with(
            "error__ledger.incorrect_identifier",
            &subs(&[("$identifier", "test"), ("$ledgerIdentifier", "abc")]),
        );

        assert_eq!(
            text,
            "Wallet account identifier doesn't match. Expected test, received abc."
        );
    }

    #[test]
    fn longer_keys_win() {
        let text = replace_placeholders("$id / $identifier", &subs(&[("$id", "1"), ("$identifier", "2")]));

        assert_eq!(text, "1 / 2");
    }

    #[test]
    fn rejects_non_object_bundle() {
        assert!(I18n::from_json("[]").is_err());
        assert!(I18n::from_json("{").is_err());
    }
}
