use super::*;
use crate::animation::{
    frame::{AnimationSettings, Frame},
    pixel::PixelTarget,
};
use crate::foundation::color::Rgb;

fn sample_config() -> KeyboardConfig {
    serde_json::from_str(
        r#"{
            "header": { "Author": "someone", "Layout": "Board", "KLL": "0.5" },
            "matrix": [
                { "code": "0x01", "layers": { "0": { "key": "ESC", "label": "Esc" } } },
                { "code": "0x02", "layers": { "0": { "key": "2", "label": "2" } } },
                { "code": "0x03", "layers": { "0": { "key": "1", "label": "1" } } },
                { "code": "0x04", "layers": {
                    "0": { "key": "3", "label": "3" },
                    "1": { "key": "F3", "label": "F3" }
                } },
                { "code": "0x05", "layers": { "0": { "key": "Q", "label": "" } } }
            ],
            "leds": [ { "id": 1, "scanCode": "0x01" }, { "id": 2 } ],
            "defines": [ { "name": "x", "value": 1 } ]
        }"#,
    )
    .unwrap()
}

fn one_frame() -> Animation {
    let mut frame = Frame::new();
    frame.push(PixelTarget::Id(1), Rgb::RED);
    Animation::new(AnimationSettings::looping(2), vec![frame])
}

#[test]
fn unknown_fields_survive_a_round_trip() {
    let config = sample_config();
    let s = serde_json::to_string(&config).unwrap();
    let v: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert_eq!(v["defines"][0]["name"], "x");
    assert_eq!(v["header"]["KLL"], "0.5");
    assert_eq!(v["matrix"][0]["code"], "0x01");
    assert_eq!(v["leds"][0]["scanCode"], "0x01");
}

#[test]
fn merge_inserts_wire_strings() {
    let mut config = sample_config();
    let mut anims = BTreeMap::new();
    anims.insert("glow".to_string(), one_frame());
    config.merge_animations(&anims);

    let entry = &config.animations["glow"];
    assert_eq!(entry.settings, "framedelay:2, loop, replace:all");
    assert_eq!(entry.frames, vec!["P[1](255,0,0)".to_string()]);
}

#[test]
fn triggers_follow_pool_order_and_skip_bound_keys() {
    let mut config = sample_config();
    let mut anims = BTreeMap::new();
    for name in ["a", "b", "c", "d"] {
        anims.insert(name.to_string(), one_frame());
    }
    config.merge_animations(&anims);

    let names: Vec<String> = anims.keys().cloned().collect();
    let assigned = config.assign_triggers(&names);

    // Pool order is 1, 2, 3, ... Q; "3" already has a trigger-layer binding, Q matches by key.
    let labels: Vec<&str> = assigned.iter().map(|a| a.key_label.as_str()).collect();
    assert_eq!(labels, vec!["1", "2", "Q"]);
    assert_eq!(assigned[0].animation, "a");

    let key_one = &config.matrix[2];
    assert_eq!(key_one.layers[TRIGGER_LAYER].key, "A[a](start)");
    assert_eq!(key_one.layers[TRIGGER_LAYER].label, "a");
    assert_eq!(key_one.triggers.len(), 4);
    assert_eq!(key_one.triggers[0].state, AnimationState::Start);
    assert!(
        key_one.triggers[1..]
            .iter()
            .all(|t| t.state == AnimationState::Stop && t.animation != "a")
    );

    // Pre-existing binding untouched, "d" left unbound.
    assert_eq!(config.matrix[3].layers[TRIGGER_LAYER].key, "F3");
    assert!(config.matrix[3].triggers.is_empty());
    assert!(config.matrix[0].triggers.is_empty());
}

#[test]
fn trigger_action_display_is_kll() {
    let t = TriggerAction {
        animation: "pulse".to_string(),
        state: AnimationState::Stop,
    };
    assert_eq!(t.to_string(), "A[pulse](stop)");
}

#[test]
fn stamp_header_sets_date_variant_and_generator() {
    let mut config = sample_config();
    let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    config.stamp_header("pulse", date);
    assert_eq!(config.header.date.as_deref(), Some("2024-03-09"));
    assert_eq!(config.header.variant.as_deref(), Some("pulse"));
    assert!(config.header.generator.as_deref().unwrap().starts_with("kbanim "));
    assert_eq!(config.header.author.as_deref(), Some("someone"));
    assert_eq!(config.layout_name(), "Board");
    assert_eq!(KeyboardConfig::default().layout_name(), "keyboard");
}
