use super::*;

#[test]
fn helpers_build_matching_variants() {
    assert!(matches!(
        ScrollsyncError::validation("x"),
        ScrollsyncError::Validation(_)
    ));
    assert!(matches!(
        ScrollsyncError::animation("x"),
        ScrollsyncError::Animation(_)
    ));
    assert!(matches!(
        ScrollsyncError::evaluation("x"),
        ScrollsyncError::Evaluation(_)
    ));
    assert!(matches!(
        ScrollsyncError::serde("x"),
        ScrollsyncError::Serde(_)
    ));
}

#[test]
fn display_includes_category_and_message() {
    let e = ScrollsyncError::validation("counter id must be non-empty");
    assert_eq!(
        e.to_string(),
        "validation error: counter id must be non-empty"
    );
}

#[test]
fn anyhow_errors_pass_through() {
    let inner = anyhow::anyhow!("platform gone");
    let e = ScrollsyncError::from(inner);
    assert!(matches!(e, ScrollsyncError::Other(_)));
    assert_eq!(e.to_string(), "platform gone");
}
