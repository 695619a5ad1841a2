use super::*;

#[test]
fn three_files_show_selected_count() {
    let text = HelpText::for_count(3);
    assert_eq!(text, HelpText::Selected(3));
    assert_eq!(text.message(), "3 file(s) selected");
}

#[test]
fn one_file_uses_same_wording() {
    assert_eq!(HelpText::for_count(1).message(), "1 file(s) selected");
}

#[test]
fn zero_files_revert_to_instructions() {
    let text = HelpText::for_count(0);
    assert_eq!(text, HelpText::Instructions);
    assert_eq!(text.message(), DEFAULT_INSTRUCTIONS);
}

#[test]
fn selected_markup_has_success_icon() {
    assert_eq!(
        HelpText::Selected(3).to_html(),
        r#"<i class="fas fa-check-circle text-success me-1"></i>3 file(s) selected"#
    );
}

#[test]
fn instructions_markup_has_paperclip_icon() {
    let html = HelpText::Instructions.to_html();
    assert!(html.starts_with(r#"<i class="fas fa-paperclip me-1"></i>"#));
    assert!(html.ends_with("Max size: 16MB per file."));
}
