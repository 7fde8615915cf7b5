use derive_more::Display;
use std::collections::BTreeMap;

pub type Substitutions = BTreeMap<String, String>;

///
/// ToastId
/// Unique per toasts store.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ToastId(pub u64);

///
/// ToastLevel
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ToastLevel {
    Success,
    Info,
    Warn,
    Error,
    /// Owned by a long-running flow; survives `toasts_reset`.
    Custom,
}

///
/// ToastMsg
/// What a service asks to show; the text is resolved through i18n.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ToastMsg {
    pub label_key: String,
    pub level: ToastLevel,
    pub detail: Option<String>,
    pub substitutions: Option<Substitutions>,
    pub duration_ms: Option<u64>,
    pub spinner: bool,
}

impl ToastMsg {
    pub fn new(label_key: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            label_key: label_key.into(),
            level,
            detail: None,
            substitutions: None,
            duration_ms: None,
            spinner: false,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn with_substitutions(mut self, substitutions: Substitutions) -> Self {
        self.substitutions = Some(substitutions);
        self
    }

    #[must_use]
    pub const fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub const fn with_spinner(mut self) -> Self {
        self.spinner = true;
        self
    }
}

///
/// Toast
/// A displayed message.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub text: String,
    pub level: ToastLevel,
    pub duration_ms: Option<u64>,
    pub spinner: bool,
    pub created_at_ms: u64,
}

impl Toast {
    #[must_use]
    pub const fn is_expired(&self, now_ms: u64) -> bool {
        match self.duration_ms {
            Some(duration) => self.created_at_ms.saturating_add(duration) <= now_ms,
            None => false,
        }
    }
}
