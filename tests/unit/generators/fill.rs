use super::*;
use serde_json::json;

fn geometry() -> KeyboardGeometry {
    KeyboardGeometry::new(4, 15, vec![1, 2, 3], vec![10, 11])
}

#[test]
fn fill_is_one_static_frame_keyed_then_blank() {
    let anim = fill(&geometry(), &FillParams::default());
    assert_eq!(anim.frame_count(), 1);
    assert_eq!(
        anim.frames[0].to_string(),
        "P[1](255,255,255),P[2](255,255,255),P[3](255,255,255),P[10](0,0,255),P[11](0,0,255)"
    );
    assert_eq!(anim.settings.frame_delay, Some(STATIC_FRAME_DELAY));
}

#[test]
fn regions_split_at_first_blank_led_by_default() {
    let anim = regions(&geometry(), &RegionsParams::default());
    let colors: Vec<Rgb> = anim.frames[0].commands.iter().map(|c| c.color).collect();
    assert_eq!(
        colors,
        [DEFAULT_TOP, DEFAULT_TOP, DEFAULT_TOP, DEFAULT_BASE, DEFAULT_BASE]
    );
}

#[test]
fn regions_honor_explicit_boundary() {
    let values = [json!([255, 0, 0]), json!([0, 255]), json!(3)];
    let params = RegionsParams::from_params(&Params::new("regions", &values)).unwrap();
    assert_eq!(params.boundary, Some(3));
    assert_eq!(params.base, Rgb::GREEN);

    let anim = regions(&geometry(), &params);
    assert_eq!(
        anim.frames[0].to_string(),
        "P[1](255,0,0),P[2](255,0,0),P[3](0,255,0),P[10](0,255,0),P[11](0,255,0)"
    );
}

#[test]
fn regions_without_blank_leds_is_all_top() {
    let geometry = KeyboardGeometry::new(1, 1, vec![5, 6], vec![]);
    let anim = regions(&geometry, &RegionsParams::default());
    assert!(anim.frames[0].commands.iter().all(|c| c.color == DEFAULT_TOP));
}

#[test]
fn fill_rejects_extra_params() {
    let values = [json!("#ffffff"), json!("#000000"), json!(1)];
    assert!(FillParams::from_params(&Params::new("fill", &values)).is_err());
}
