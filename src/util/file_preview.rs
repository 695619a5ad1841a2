//! Evidence upload preview.
//!
//! When the evidence file input changes, the help text right after it shows
//! how many files are selected, or the upload instructions again once the
//! selection is cleared.

#[cfg(test)]
#[path = "file_preview_test.rs"]
mod file_preview_test;

/// Class the sibling help element must carry to be rewritten.
pub const HELP_TEXT_CLASS: &str = "form-text";

pub const DEFAULT_INSTRUCTIONS: &str =
    "You can upload multiple files (images or PDFs). Max size: 16MB per file.";

/// Content of the help text under the file input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HelpText {
    Selected(u32),
    Instructions,
}

impl HelpText {
    #[must_use]
    pub fn for_count(count: u32) -> Self {
        if count > 0 { Self::Selected(count) } else { Self::Instructions }
    }

    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::Selected(count) => format!("{count} file(s) selected"),
            Self::Instructions => DEFAULT_INSTRUCTIONS.to_owned(),
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Selected(_) => "fas fa-check-circle text-success me-1",
            Self::Instructions => "fas fa-paperclip me-1",
        }
    }

    /// Markup written into the help element.
    #[must_use]
    pub fn to_html(self) -> String {
        format!(r#"<i class="{}"></i>{}"#, self.icon_class(), self.message())
    }
}

/// Bind the preview to the file input with id `input_id`.
///
/// Returns `false` when the page has no such input.
///
/// # Errors
///
/// Fails when the change listener cannot be attached.
#[cfg(feature = "hydrate")]
pub fn install(document: &web_sys::Document, input_id: &str) -> Result<bool, crate::error::UiError> {
    use wasm_bindgen::JsCast;

    let Some(input) = document
        .get_element_by_id(input_id)
        .and_then(|el| el.dyn_ref::<web_sys::HtmlInputElement>().cloned())
    else {
        return Ok(false);
    };
    let target = input.clone();
    crate::util::dom::listen(&input, "change", move |_| {
        let count = target.files().map_or(0, |files| files.length());
        let Some(help) = target.next_element_sibling() else {
            return;
        };
        if help.class_list().contains(HELP_TEXT_CLASS) {
            help.set_inner_html(&HelpText::for_count(count).to_html());
        }
    })?;
    Ok(true)
}
