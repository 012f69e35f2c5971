use super::*;

#[test]
fn noise_is_deterministic() {
    for i in 0..50 {
        let x = i as f64 * 0.37 - 5.0;
        assert_eq!(noise1d(x, 7).to_bits(), noise1d(x, 7).to_bits());
        assert_eq!(
            noise2d(x, x * 0.5, 7).to_bits(),
            noise2d(x, x * 0.5, 7).to_bits()
        );
        assert_eq!(fbm(x, 3, 4, 0.5).to_bits(), fbm(x, 3, 4, 0.5).to_bits());
    }
}

#[test]
fn noise_is_bounded() {
    for i in 0..2000 {
        let x = i as f64 * 0.113 - 100.0;
        let a = noise1d(x, 11);
        let b = noise2d(x, -x * 0.7, 11);
        let c = fbm(x, 11, 6, 0.6);
        let d = fbm2d(x, x * 0.3, 11, 3, 0.5);
        for v in [a, b, c, d] {
            assert!((-1.0..=1.0).contains(&v), "{v} out of range");
        }
    }
}

#[test]
fn noise_hits_lattice_values_at_integers() {
    // At integer coordinates the interpolation weight is zero.
    let a = noise1d(3.0, 5);
    let b = noise1d(3.0 + 1e-9, 5);
    assert!((a - b).abs() < 1e-6);
}

#[test]
fn noise_is_continuous() {
    let mut prev = noise1d(0.0, 2);
    for i in 1..1000 {
        let v = noise1d(i as f64 * 0.001, 2);
        assert!((v - prev).abs() < 0.01);
        prev = v;
    }
}

#[test]
fn seeds_decorrelate() {
    let differs = (0..20)
        .filter(|i| noise1d(*i as f64 + 0.5, 1) != noise1d(*i as f64 + 0.5, 2))
        .count();
    assert!(differs > 15);
}

#[test]
fn octave_count_is_clamped() {
    assert_eq!(fbm(1.3, 4, 64, 0.5), fbm(1.3, 4, MAX_OCTAVES, 0.5));
    assert_eq!(fbm(1.3, 4, 0, 0.5), fbm(1.3, 4, 1, 0.5));
    assert_eq!(fbm(1.3, 4, 1, 0.5), noise1d(1.3, 4));
}
