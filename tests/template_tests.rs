use vault_copy::template::{has_content_token, render, Token, TEMPLATE_RAW, TEMPLATE_STANDARD};
use vault_copy::vault::VaultFile;

#[test]
fn test_standard_template_renders_header_content_and_rule() {
    let file = VaultFile::new("dir/note.md");
    let rendered = render("**File:** {{path}}\\n\\n{{content}}\\n\\n---\\n\\n", &file, "hello");

    assert_eq!(rendered, "**File:** dir/note.md\n\nhello\n\n---\n\n");
    assert_eq!(render(TEMPLATE_STANDARD, &file, "hello"), rendered);
}

#[test]
fn test_every_token_is_substituted() {
    let file = VaultFile::new("projects/rust/plan.draft.md");
    let template = "{{path}}|{{folder}}|{{fileName}}|{{fileExt}}|{{content}}";

    assert_eq!(
        render(template, &file, "body"),
        "projects/rust/plan.draft.md|projects/rust|plan.draft|md|body"
    );
}

#[test]
fn test_all_occurrences_are_replaced() {
    let file = VaultFile::new("a.md");

    assert_eq!(render("{{fileName}}-{{fileName}}-{{fileName}}", &file, ""), "a-a-a");
    assert_eq!(render("{{content}}{{content}}", &file, "x"), "xx");
}

#[test]
fn test_root_level_file_has_empty_folder() {
    let file = VaultFile::new("inbox.md");

    assert_eq!(file.parent, None);
    assert_eq!(render("[{{folder}}]", &file, ""), "[]");
}

#[test]
fn test_file_without_extension() {
    let file = VaultFile::new("scripts/Makefile");

    assert_eq!(render("{{fileName}}.{{fileExt}}", &file, ""), "Makefile.");
}

#[test]
fn test_content_is_inserted_verbatim() {
    let file = VaultFile::new("code.md");
    let content = "println!(\"a\\nb\"); {{path}}";

    assert_eq!(render(TEMPLATE_RAW, &file, content), format!("{}\n\n", content));
}

#[test]
fn test_unrecognised_braces_and_backslashes_are_kept() {
    let file = VaultFile::new("x.md");

    assert_eq!(
        render("{{unknown}} {single} C:\\temp \\\\n {{", &file, ""),
        "{{unknown}} {single} C:\\temp \\\n {{"
    );
}

#[test]
fn test_template_without_content_token() {
    let file = VaultFile::new("x.md");

    assert!(!has_content_token("**File:** {{path}}\\n"));
    assert!(has_content_token(TEMPLATE_RAW));
    assert_eq!(render("static\\n", &file, "ignored"), "static\n");
}

#[test]
fn test_rendering_is_idempotent() {
    let file = VaultFile::new("dir/sub/note.md");
    let first = render(TEMPLATE_STANDARD, &file, "same content");
    let second = render(TEMPLATE_STANDARD, &file, "same content");

    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_token_parsing_accepts_names_and_placeholders() {
    assert_eq!("content".parse::<Token>().unwrap(), Token::Content);
    assert_eq!("{{fileExt}}".parse::<Token>().unwrap(), Token::FileExt);
    assert_eq!(" fileName ".parse::<Token>().unwrap(), Token::FileName);
    assert!("extension".parse::<Token>().is_err());
    assert_eq!(Token::Folder.to_string(), "{{folder}}");
}
