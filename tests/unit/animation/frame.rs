use super::*;

#[test]
fn frame_joins_commands_with_commas() {
    let mut frame = Frame::new();
    frame.push(PixelTarget::Id(1), Rgb::RED);
    frame.fill_ids(&[2, 3], Rgb::BLUE);
    assert_eq!(frame.len(), 3);
    assert_eq!(
        frame.to_string(),
        "P[1](255,0,0),P[2](0,0,255),P[3](0,0,255)"
    );
    assert_eq!(Frame::new().to_string(), "");
}

#[test]
fn settings_string_orders_fields() {
    let s = AnimationSettings::looping(3).interpolated();
    assert_eq!(s.to_string(), "framedelay:3, loop, replace:all, pfunc:interp");

    let s = AnimationSettings {
        frame_stretch: true,
        replace: Some(ReplaceMode::Stack),
        pfunc: Some(PixelFunc::Off),
        ..AnimationSettings::default()
    };
    assert_eq!(s.to_string(), "framestretch, replace:stack, pfunc:off");
    assert_eq!(AnimationSettings::default().to_string(), "");
}

#[test]
fn animation_frame_strings_follow_frame_order() {
    let frames = vec![
        [PixelCommand::new(PixelTarget::Id(1), Rgb::RED)]
            .into_iter()
            .collect::<Frame>(),
        [PixelCommand::new(PixelTarget::Id(1), Rgb::GREEN)]
            .into_iter()
            .collect::<Frame>(),
    ];
    let anim = Animation::new(AnimationSettings::looping(1), frames);
    assert_eq!(anim.frame_count(), 2);
    assert_eq!(
        anim.frame_strings(),
        vec!["P[1](255,0,0)".to_string(), "P[1](0,255,0)".to_string()]
    );
}
