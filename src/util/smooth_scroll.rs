//! Smooth scrolling for in-page anchor links.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

/// Selector for the in-page target of `href`, if the link points at one.
///
/// A bare `#` names no element and keeps the browser's default behavior.
#[must_use]
pub fn fragment_selector(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Bind smooth scrolling to every anchor matching `selector`.
///
/// Returns the number of anchors bound. Clicks whose target does not exist
/// (or whose fragment is not a valid selector) keep the default jump.
///
/// # Errors
///
/// Fails when `selector` is invalid or a listener cannot be attached.
#[cfg(feature = "hydrate")]
pub fn install(document: &web_sys::Document, selector: &str) -> Result<usize, crate::error::UiError> {
    let anchors = crate::util::dom::query_all(document, selector)?;
    for anchor in &anchors {
        let link = anchor.clone();
        let doc = document.clone();
        crate::util::dom::listen(anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target_selector) = fragment_selector(&href) else {
                return;
            };
            let target = match doc.query_selector(target_selector) {
                Ok(Some(target)) => target,
                Ok(None) => return,
                Err(e) => {
                    log::debug!("{href} is not a selector: {e:?}");
                    return;
                }
            };
            event.prevent_default();
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(anchors.len())
}
