//! Submit-time validation gating for forms marked `.needs-validation`.
//!
//! The CSS framework renders field errors once a form carries
//! `was-validated`; this module only decides when to block the submit and
//! when to add that class.

#[cfg(test)]
#[path = "form_validation_test.rs"]
mod form_validation_test;

pub const WAS_VALIDATED_CLASS: &str = "was-validated";

/// What to do with a submit event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitDecision {
    /// Prevent the submission and stop the event from propagating.
    pub cancel: bool,
    /// Add [`WAS_VALIDATED_CLASS`] to the form.
    pub mark_validated: bool,
}

/// Invalid forms are cancelled; every submitted form is marked validated.
#[must_use]
pub fn submit_decision(valid: bool) -> SubmitDecision {
    SubmitDecision { cancel: !valid, mark_validated: true }
}

/// Bind submit gating to every form matching `selector`.
///
/// Returns the number of forms bound. Matches that are not `<form>` elements
/// are skipped.
///
/// # Errors
///
/// Fails when `selector` is invalid or a listener cannot be attached.
#[cfg(feature = "hydrate")]
pub fn install(document: &web_sys::Document, selector: &str) -> Result<usize, crate::error::UiError> {
    use wasm_bindgen::JsCast;

    let mut bound = 0;
    for element in crate::util::dom::query_all(document, selector)? {
        let Some(form) = element.dyn_ref::<web_sys::HtmlFormElement>().cloned() else {
            continue;
        };
        let target = form.clone();
        crate::util::dom::listen(&form, "submit", move |event| {
            let decision = submit_decision(target.check_validity());
            if decision.cancel {
                event.prevent_default();
                event.stop_propagation();
            }
            if decision.mark_validated {
                if let Err(e) = target.class_list().add_1(WAS_VALIDATED_CLASS) {
                    log::warn!("marking form validated failed: {e:?}");
                }
            }
        })?;
        bound += 1;
    }
    Ok(bound)
}
