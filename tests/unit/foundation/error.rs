use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        KbanimError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        KbanimError::params("x")
            .to_string()
            .contains("parameter error:")
    );
    assert!(KbanimError::config("x").to_string().contains("config error:"));
    assert!(
        KbanimError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = KbanimError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: KbanimError = serde_json::from_str::<u8>("nope").unwrap_err().into();
    assert!(matches!(err, KbanimError::Serde(_)));
}
