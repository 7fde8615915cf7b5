use crate::{
    AppContext, log,
    log::Topic,
    store::NewToast,
    types::{Substitutions, ToastId, ToastLevel, ToastMsg},
};
use std::fmt::Display;

///
/// ErrorToast
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorToast {
    pub label_key: String,
    pub err: Option<String>,
    pub substitutions: Option<Substitutions>,
}

impl ErrorToast {
    pub fn new(label_key: impl Into<String>) -> Self {
        Self {
            label_key: label_key.into(),
            err: None,
            substitutions: None,
        }
    }

    #[must_use]
    pub fn with_err(mut self, err: impl Display) -> Self {
        self.err = Some(err.to_string());
        self
    }

    #[must_use]
    pub fn with_substitutions(mut self, substitutions: Substitutions) -> Self {
        self.substitutions = Some(substitutions);
        self
    }
}

fn map_toast_text(ctx: &AppContext, msg: &ToastMsg) -> String {
    let label = match &msg.substitutions {
        Some(substitutions) => ctx.i18n().translate_with(&msg.label_key, substitutions),
        None => ctx.i18n().translate(&msg.label_key),
    };

    match &msg.detail {
        Some(detail) => format!("{label} {detail}"),
        None => label,
    }
}

fn to_new_toast(ctx: &AppContext, msg: &ToastMsg) -> NewToast {
    NewToast {
        text: map_toast_text(ctx, msg),
        level: msg.level,
        duration_ms: msg.duration_ms,
        spinner: msg.spinner,
    }
}

pub fn toasts_show(ctx: &AppContext, msg: ToastMsg) -> ToastId {
    let toast = to_new_toast(ctx, &msg);

    ctx.stores().toasts.show(toast, ctx.clock().now_ms())
}

/// A success message that hides itself after the configured duration.
pub fn toasts_success(
    ctx: &AppContext,
    label_key: &str,
    substitutions: Option<Substitutions>,
) -> ToastId {
    let mut msg = ToastMsg::new(label_key, ToastLevel::Success)
        .with_duration_ms(ctx.config().toasts.default_duration_ms);
    msg.substitutions = substitutions;

    toasts_show(ctx, msg)
}

/// An error message, kept until dismissed. The error, if any, is logged and
/// appended to the text.
pub fn toasts_error(ctx: &AppContext, toast: ErrorToast) -> ToastId {
    if let Some(err) = &toast.err {
        log!(Topic::Toasts, Error, "{}: {err}", toast.label_key);
    }

    let mut msg = ToastMsg::new(toast.label_key, ToastLevel::Error);
    msg.detail = toast.err;
    msg.substitutions = toast.substitutions;

    toasts_show(ctx, msg)
}

pub fn toasts_hide(ctx: &AppContext, id: ToastId) {
    ctx.stores().toasts.hide(id);
}

pub fn toasts_update(ctx: &AppContext, id: ToastId, content: ToastMsg) {
    let toast = to_new_toast(ctx, &content);

    if !ctx.stores().toasts.replace(id, toast) {
        log!(Topic::Toasts, Debug, "toast {id} already gone");
    }
}

/// Clears every toast except the custom ones a running flow still owns.
pub fn toasts_reset(ctx: &AppContext) {
    ctx.stores().toasts.reset_keeping(&[ToastLevel::Custom]);
}

/// Hides toasts whose duration has elapsed.
pub fn toasts_prune_expired(ctx: &AppContext) -> usize {
    ctx.stores().toasts.prune_expired(ctx.clock().now_ms())
}
