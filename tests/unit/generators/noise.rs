use super::*;
use serde_json::json;

fn geometry() -> KeyboardGeometry {
    KeyboardGeometry::new(3, 9, vec![4, 1, 2], vec![7, 8])
}

#[test]
fn levels_stay_gray_and_under_the_ceiling() {
    let params = NoiseParams {
        frames: 50,
        ceiling: 40,
    };
    let anim = noise(&geometry(), &params).unwrap();
    assert_eq!(anim.frame_count(), 50);
    for frame in &anim.frames {
        assert_eq!(frame.len(), 5);
        for cmd in &frame.commands {
            let Rgb { r, g, b } = cmd.color;
            assert!(r <= 40);
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }
}

#[test]
fn every_led_is_addressed_by_id_in_ascending_order() {
    let anim = noise(&geometry(), &NoiseParams::default()).unwrap();
    assert_eq!(anim.frame_count(), DEFAULT_FRAMES);
    let targets: Vec<String> = anim.frames[0]
        .commands
        .iter()
        .map(|c| c.target.to_string())
        .collect();
    assert_eq!(targets, ["1", "2", "4", "7", "8"]);
}

#[test]
fn zero_ceiling_is_all_black() {
    let params = NoiseParams {
        frames: 3,
        ceiling: 0,
    };
    let anim = noise(&geometry(), &params).unwrap();
    assert!(
        anim.frames
            .iter()
            .flat_map(|f| &f.commands)
            .all(|c| c.color == Rgb::BLACK)
    );
}

#[test]
fn zero_frames_and_bad_ceiling_are_rejected() {
    let params = NoiseParams {
        frames: 0,
        ceiling: 10,
    };
    assert!(noise(&geometry(), &params).is_err());

    let values = [json!(5), json!(300)];
    assert!(NoiseParams::from_params(&Params::new("noise", &values)).is_err());
}

#[test]
fn frame_count_is_capped() {
    let params = NoiseParams {
        frames: MAX_FRAMES + 1,
        ceiling: 10,
    };
    assert!(noise(&geometry(), &params).is_err());
}
