use super::*;

fn cfg(mode: StaggerMode) -> StaggerConfig {
    StaggerConfig {
        mode,
        delay_ms: 100.0,
        seed: 3,
    }
}

#[test]
fn forward_and_reverse_are_mirrors() {
    assert_eq!(
        stagger_delays(4, &cfg(StaggerMode::Forward)),
        vec![0.0, 100.0, 200.0, 300.0]
    );
    assert_eq!(
        stagger_delays(4, &cfg(StaggerMode::Reverse)),
        vec![300.0, 200.0, 100.0, 0.0]
    );
}

#[test]
fn center_weighted_starts_in_the_middle() {
    assert_eq!(
        stagger_delays(5, &cfg(StaggerMode::Center)),
        vec![200.0, 100.0, 0.0, 100.0, 200.0]
    );
    assert_eq!(
        stagger_delays(4, &cfg(StaggerMode::Center)),
        vec![150.0, 50.0, 50.0, 150.0]
    );
}

#[test]
fn random_is_stable_and_bounded() {
    let c = cfg(StaggerMode::Random);
    let a = stagger_delays(8, &c);
    assert_eq!(a, stagger_delays(8, &c));
    assert!(a.iter().all(|d| (0.0..=700.0).contains(d)));
    let other = StaggerConfig { seed: 4, ..c };
    assert_ne!(a, stagger_delays(8, &other));
}

#[test]
fn empty_and_single_groups() {
    assert!(stagger_delays(0, &cfg(StaggerMode::Forward)).is_empty());
    for mode in [
        StaggerMode::Forward,
        StaggerMode::Reverse,
        StaggerMode::Center,
        StaggerMode::Random,
    ] {
        assert_eq!(stagger_delays(1, &cfg(mode)), vec![0.0]);
    }
}
