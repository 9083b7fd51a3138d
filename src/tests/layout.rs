use super::ReferenceRewrite;
use std::borrow::Cow;

fn corne() -> ReferenceRewrite {
    ReferenceRewrite::new(
        "zmk,physical-layout",
        "foostan_corne_5col_layout",
        "default_layout",
    )
    .unwrap()
}

#[test]
fn test_rewrites_chosen_node() {
    let text = "chosen { zmk,physical-layout = &foostan_corne_5col_layout; };";
    assert_eq!(
        corne().apply(text),
        "chosen { zmk,physical-layout = &default_layout; };"
    );
}

#[test]
fn test_preserves_spacing_and_accepts_missing_ampersand() {
    let text = "zmk,physical-layout=foostan_corne_5col_layout ;";
    assert_eq!(corne().apply(text), "zmk,physical-layout=&default_layout ;");
}

#[test]
fn test_other_attributes_untouched() {
    let text = "layout-ref = &foostan_corne_5col_layout;";
    assert_eq!(corne().apply(text), text);
    assert_eq!(corne().count(text), 0);
}

#[test]
fn test_longer_reference_untouched() {
    let text = "zmk,physical-layout = &foostan_corne_5col_layout_v2;";
    assert_eq!(corne().apply(text), text);
}

#[test]
fn test_every_occurrence_is_replaced() {
    let text = "a { zmk,physical-layout = &foostan_corne_5col_layout; };\n\
                b { zmk,physical-layout = &foostan_corne_5col_layout; };";
    let rewrite = corne();

    assert_eq!(rewrite.count(text), 2);
    assert!(!rewrite.apply(text).contains("foostan"));
}

#[test]
fn test_normalized_text_is_borrowed() {
    let text = "zmk,physical-layout = &default_layout;";
    assert!(matches!(corne().apply(text), Cow::Borrowed(_)));
}
