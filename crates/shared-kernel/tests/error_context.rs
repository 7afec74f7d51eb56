// crates/shared-kernel/tests/error_context.rs
use sphinx_filtration_shared_kernel::{DomainError, ErrorContext, FiltrationError};

fn misconfigured() -> std::result::Result<(), DomainError> {
    Err(DomainError::logic("Default min value must not be greater than default max value."))
}

#[test]
fn context_wraps_and_formats() {
    let err = misconfigured().context("resolving \"price\"").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("resolving \"price\""));
    assert!(display.contains("Logic error:"));
}

#[test]
fn classification_looks_through_context_layers() {
    let err = misconfigured()
        .context("inner")
        .with_context(|| "outer".to_string())
        .unwrap_err();

    assert!(err.is_logic());
    assert!(!err.is_invalid_argument());
    assert!(!err.is_invalid_handler());
    assert!(matches!(err.root(), FiltrationError::Domain(DomainError::Logic { .. })));
}

#[test]
fn invalid_argument_names_the_option() {
    let err = DomainError::invalid_argument("default_float_step", "must be greater than 0");
    assert_eq!(
        err.to_string(),
        "Invalid argument for \"default_float_step\": must be greater than 0"
    );
}
