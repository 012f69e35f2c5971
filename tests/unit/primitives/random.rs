use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = SeededRng::new(123);
    let mut b = SeededRng::new(123);
    for _ in 0..100 {
        assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
    }
}

#[test]
fn rng_output_is_in_unit_interval() {
    let mut rng = SeededRng::new(0);
    for _ in 0..10_000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
        let s = rng.next_signed();
        assert!((-1.0..1.0).contains(&s));
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = SeededRng::new(1);
    let mut b = SeededRng::new(2);
    let same = (0..16).filter(|_| a.next_u32() == b.next_u32()).count();
    assert!(same < 2);
}

#[test]
fn hash_avalanches_neighbours() {
    assert_eq!(hash(0), 0);
    let a = hash(1);
    let b = hash(2);
    assert_ne!(a, b);
    assert!((a ^ b).count_ones() > 8);
}

#[test]
fn hash_combine_truncates_to_milli_units() {
    assert_eq!(hash_combine(&[1.0001, 2.0]), hash_combine(&[1.0004, 2.0]));
    assert_ne!(hash_combine(&[1.001, 2.0]), hash_combine(&[1.002, 2.0]));
    assert_ne!(hash_combine(&[1.0, 2.0]), hash_combine(&[2.0, 1.0]));
    assert_ne!(hash_combine(&[-1.0]), hash_combine(&[1.0]));
}

#[test]
fn hash_str_is_stable() {
    assert_eq!(hash_str("logo"), hash_str("logo"));
    assert_ne!(hash_str("logo"), hash_str("title"));
}

#[test]
fn pick_covers_all_items_and_handles_empty() {
    let mut rng = SeededRng::new(9);
    let items = [1, 2, 3];
    let mut seen = [false; 3];
    for _ in 0..200 {
        let v = *rng.pick(&items).unwrap();
        seen[v - 1] = true;
    }
    assert!(seen.iter().all(|s| *s));
    let empty: [u8; 0] = [];
    assert!(rng.pick(&empty).is_none());
}
