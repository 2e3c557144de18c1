use super::*;

fn geometry() -> KeyboardGeometry {
    KeyboardGeometry::new(4, 15, vec![1, 2], vec![10, 11, 12, 13])
}

#[test]
fn falloff_runs_from_color_to_black() {
    assert!(falloff_slots(Rgb::WHITE, 0).is_empty());
    assert_eq!(falloff_slots(Rgb::WHITE, 1), vec![Rgb::WHITE]);
    assert_eq!(
        falloff_slots(Rgb::WHITE, 3),
        vec![Rgb::WHITE, Rgb::gray(128), Rgb::BLACK]
    );
}

#[test]
fn one_frame_per_ring_led_with_slots_shifting_by_one() {
    let anim = rotate(&geometry(), &RotateParams::default());
    assert_eq!(anim.frame_count(), 4);

    let slots = falloff_slots(DEFAULT_RING, 4);
    let ring_colors = |frame: usize| -> Vec<Rgb> {
        anim.frames[frame].commands[2..].iter().map(|c| c.color).collect()
    };
    assert_eq!(ring_colors(0), slots);
    assert_eq!(ring_colors(1), vec![slots[3], slots[0], slots[1], slots[2]]);
    assert_eq!(ring_colors(3), vec![slots[1], slots[2], slots[3], slots[0]]);
}

#[test]
fn keys_hold_a_constant_color() {
    let anim = rotate(&geometry(), &RotateParams::default());
    for frame in &anim.frames {
        assert_eq!(frame.len(), 6);
        assert!(frame.commands[..2].iter().all(|c| c.color == DEFAULT_KEYS));
    }
}

#[test]
fn no_ring_still_produces_a_frame() {
    let geometry = KeyboardGeometry::new(1, 1, vec![1, 2], vec![]);
    let anim = rotate(&geometry, &RotateParams::default());
    assert_eq!(anim.frame_count(), 1);
    assert_eq!(anim.frames[0].len(), 2);
}
