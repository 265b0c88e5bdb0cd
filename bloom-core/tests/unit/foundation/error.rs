use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BloomError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BloomError::tuning("x").to_string().contains("tuning error:"));
}

#[test]
fn io_errors_convert() {
    let err = BloomError::from(std::io::Error::other("socket gone"));
    assert!(err.to_string().contains("socket gone"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BloomError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
