use protoschema_diagnostic::{Report, Severity};

use crate::error::{DuplicateConstantName, DuplicateTag, Error, MissingArgument};

#[test]
fn duplicate_tag_message() {
    let error = DuplicateTag { tag: 1, qualified_name: "pkg.Color".to_string() };

    assert_eq!(error.to_string(), "Duplicate tag 1 in pkg.Color");

    let diagnostic = error.report();
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.message, "Duplicate tag 1 in pkg.Color");
    assert!(diagnostic
        .help_message
        .as_deref()
        .is_some_and(|help| help.contains("allow_alias")));
}

#[test]
fn duplicate_constant_name_message() {
    let error = DuplicateConstantName {
        name: "X".to_string(),
        qualified_name: "pkg".to_string(),
    };

    assert_eq!(error.to_string(), "Duplicate enum constant X in scope pkg");
    assert_eq!(error.report().message, error.to_string());
}

#[test]
fn error_is_transparent() {
    let error = Error::from(MissingArgument { parameter: "qualified_name" });

    assert_eq!(error.to_string(), "`qualified_name` is required");
    assert_eq!(
        error.report().message,
        "`qualified_name` is required to build an enum declaration"
    );
    assert_eq!(
        error.as_missing_argument(),
        Some(&MissingArgument { parameter: "qualified_name" })
    );
}
