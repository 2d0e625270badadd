use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ClockfaceError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ClockfaceError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        ClockfaceError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        ClockfaceError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        ClockfaceError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ClockfaceError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
