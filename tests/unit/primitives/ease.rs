use super::*;

#[test]
fn linear_midpoint_is_exact() {
    assert_eq!(get_easing("linear").apply(0.5), 0.5);
}

#[test]
fn table_has_thirty_one_curves() {
    assert_eq!(Ease::all().len(), 31);
}

#[test]
fn endpoints_are_exact_for_every_curve() {
    for ease in Ease::all() {
        assert_eq!(ease.apply(0.0), 0.0, "{ease}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease}");
        assert_eq!(ease.apply(-3.0), 0.0, "{ease}");
        assert_eq!(ease.apply(7.0), 1.0, "{ease}");
    }
}

#[test]
fn non_overshooting_curves_stay_in_unit_range() {
    for ease in Ease::all().into_iter().filter(|e| !e.overshoots()) {
        for i in 0..=100 {
            let v = ease.apply(i as f64 / 100.0);
            assert!((0.0..=1.0 + 1e-12).contains(&v), "{ease} at {i}: {v}");
        }
    }
}

#[test]
fn back_out_overshoots() {
    let ease = get_easing("back.out");
    let peak = (1..100)
        .map(|i| ease.apply(i as f64 / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.05);
}

#[test]
fn in_out_is_symmetric() {
    for ease in [
        get_easing("power2.inOut"),
        get_easing("sine.inOut"),
        get_easing("circ.inOut"),
    ] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12, "{ease}");
        let a = ease.apply(0.2);
        let b = ease.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-12, "{ease}");
    }
}

#[test]
fn monotonic_spot_check() {
    for name in ["power1.in", "power3.out", "sine.out", "expo.inOut", "circ.in"] {
        let ease = get_easing(name);
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b && b < c, "{name}");
    }
}

#[test]
fn names_round_trip_through_lookup() {
    for ease in Ease::all() {
        assert_eq!(Ease::from_name(&ease.name()), Some(ease));
    }
}

#[test]
fn aliases_and_parameters_parse() {
    assert_eq!(Ease::from_name("quad.in"), Some(Ease::Power(1, EaseDir::In)));
    assert_eq!(Ease::from_name("power3"), Some(Ease::Power(3, EaseDir::Out)));
    assert_eq!(
        Ease::from_name("back.out(2.5)"),
        Some(Ease::Back {
            dir: EaseDir::Out,
            overshoot: 2.5
        })
    );
    assert_eq!(
        Ease::from_name("elastic.inOut(1.2, 0.5)"),
        Some(Ease::Elastic {
            dir: EaseDir::InOut,
            amplitude: 1.2,
            period: 0.5
        })
    );
    assert_eq!(Ease::from_name("sine.out(3)"), None);
    assert_eq!(Ease::from_name("back.out(x)"), None);
    assert_eq!(Ease::from_name("wobble.out"), None);
}

#[test]
fn unknown_names_fall_back() {
    assert_eq!(get_easing("definitely-not-a-curve"), Ease::FALLBACK);
    assert_eq!(get_easing("power2.sideways"), Ease::FALLBACK);
    let e: Ease = serde_json::from_value(serde_json::json!("nope")).unwrap();
    assert_eq!(e, Ease::FALLBACK);
}

#[test]
fn serializes_by_name() {
    let v = serde_json::to_value(Ease::back(EaseDir::Out)).unwrap();
    assert_eq!(v, serde_json::json!("back.out"));
    let e: Ease = serde_json::from_value(serde_json::json!("expo.in")).unwrap();
    assert_eq!(e, Ease::Expo(EaseDir::In));
}

#[test]
fn arc_is_zero_at_ends() {
    assert!(arc(0.0).abs() < 1e-12);
    assert!(arc(1.0).abs() < 1e-12);
    assert!((arc(0.5) - 1.0).abs() < 1e-12);
}
