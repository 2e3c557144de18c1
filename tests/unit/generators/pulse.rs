use super::*;
use serde_json::json;

fn geometry() -> KeyboardGeometry {
    KeyboardGeometry::new(5, 17, vec![1, 2, 3], vec![4, 5])
}

#[test]
fn frame_count_is_colors_times_frames_per_transition() {
    let params = PulseParams {
        frames_per_transition: 12,
        colors: vec![Rgb::RED, Rgb::GREEN, Rgb::BLUE],
    };
    let anim = pulse(&geometry(), &params).unwrap();
    assert_eq!(anim.frame_count(), 36);
    let settings = anim.settings.to_string();
    assert!(settings.contains("loop"));
    assert!(settings.contains("pfunc:interp"));
}

#[test]
fn each_frame_sets_both_edges_to_the_same_color() {
    let anim = pulse(&geometry(), &PulseParams::default()).unwrap();
    assert_eq!(
        anim.frames[0].to_string(),
        "P[r:0,c:-2%](255,0,0),P[r:5,c:102%](255,0,0)"
    );
    for frame in &anim.frames {
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.commands[0].color, frame.commands[1].color);
    }
}

#[test]
fn params_parse_positionally() {
    let values = [json!(4), json!([[0, 0, 255], "#00ff00"])];
    let p = PulseParams::from_params(&Params::new("pulse", &values)).unwrap();
    assert_eq!(p.frames_per_transition, 4);
    assert_eq!(p.colors, vec![Rgb::BLUE, Rgb::GREEN]);

    let p = PulseParams::from_params(&Params::empty("pulse")).unwrap();
    assert_eq!(p, PulseParams::default());
}

#[test]
fn bad_params_are_rejected() {
    let too_many = [json!(1), json!([]), json!(3)];
    assert!(PulseParams::from_params(&Params::new("pulse", &too_many)).is_err());

    let wrong_type = [json!("fast")];
    assert!(PulseParams::from_params(&Params::new("pulse", &wrong_type)).is_err());

    let one_color = [json!(3), json!([[255, 0, 0]])];
    let p = PulseParams::from_params(&Params::new("pulse", &one_color)).unwrap();
    assert!(pulse(&geometry(), &p).is_err());
}

#[test]
fn huge_transition_counts_are_rejected() {
    let values = [json!(u64::MAX)];
    let p = PulseParams::from_params(&Params::new("pulse", &values)).unwrap();
    assert!(matches!(
        pulse(&geometry(), &p),
        Err(crate::foundation::error::KbanimError::Validation(_))
    ));
}
