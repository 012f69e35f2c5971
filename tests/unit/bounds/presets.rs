use super::*;

#[test]
fn canvas_sizes() {
    assert_eq!(CanvasPreset::Hd720.size(), Size::new(1280.0, 720.0));
    assert_eq!(CanvasPreset::Vertical1080.size(), Size::new(1080.0, 1920.0));
    let custom = CanvasPreset::Custom {
        width: 0.0,
        height: 500.0,
    };
    assert_eq!(custom.size(), Size::new(1.0, 500.0));
}

#[test]
fn custom_margins_are_clamped() {
    let zone = SafeZonePreset::Custom(Margins {
        top: -0.2,
        right: 0.9,
        bottom: f64::NAN,
        left: 0.1,
    });
    assert_eq!(
        zone.margins(),
        Margins {
            top: 0.0,
            right: 0.45,
            bottom: 0.0,
            left: 0.1,
        }
    );
}

#[test]
fn social_zone_reserves_more_at_bottom() {
    let m = SafeZonePreset::Social.margins();
    assert!(m.bottom > m.top);
    assert_eq!(SafeZonePreset::None.margins(), Margins::uniform(0.0));
}

#[test]
fn presets_parse_from_tags() {
    let zone: SafeZonePreset =
        serde_json::from_str(r#"{"type":"custom","top":0.2,"left":0.05}"#).unwrap();
    assert_eq!(
        zone.margins(),
        Margins {
            top: 0.2,
            right: 0.0,
            bottom: 0.0,
            left: 0.05,
        }
    );
    let canvas: CanvasPreset = serde_json::from_str(r#"{"type":"square1080"}"#).unwrap();
    assert_eq!(canvas, CanvasPreset::Square1080);
}
