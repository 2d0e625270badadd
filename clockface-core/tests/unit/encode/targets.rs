use super::*;

#[test]
fn with_stem_names_both_artifacts() {
    let t = OutputTargets::with_stem("overlay_clock");
    assert_eq!(t.video, Some(PathBuf::from("overlay_clock.mp4")));
    assert_eq!(t.gif, Some(PathBuf::from("overlay_clock.gif")));
    assert_eq!(t.build_sinks().len(), 2);
}

#[test]
fn build_sinks_skips_missing_targets() {
    let t = OutputTargets {
        video: None,
        gif: Some(PathBuf::from("a.gif")),
        overwrite: true,
    };
    let sinks = t.build_sinks();
    assert_eq!(sinks.len(), 1);
    assert_eq!(sinks[0].label(), "a.gif");

    assert!(OutputTargets::default().is_empty());
}

#[test]
fn deserializes_partial_json() {
    let t: OutputTargets = serde_json::from_str(r#"{ "gif": "x.gif" }"#).unwrap();
    assert_eq!(t.video, None);
    assert!(t.overwrite);
}
