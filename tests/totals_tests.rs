use collision_engine::CollisionTotals;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_getters_sum_all_adds() {
    let mut totals = CollisionTotals::new();
    let mut rng = StdRng::seed_from_u64(42);

    let mut expected = [0u64; 5];
    for _ in 0..200 {
        let n = rng.gen_range(0..10u64);
        match rng.gen_range(0..5) {
            0 => {
                totals.add_searches(n);
                expected[0] += n;
            }
            1 => {
                totals.add_impulses(n);
                expected[1] += n;
            }
            2 => {
                totals.add_collisions(n);
                expected[2] += n;
            }
            3 => {
                totals.add_steps(n);
                expected[3] += n;
            }
            _ => {
                totals.add_backups(n);
                expected[4] += n;
            }
        }
    }

    assert_eq!(totals.get_searches(), expected[0]);
    assert_eq!(totals.get_impulses(), expected[1]);
    assert_eq!(totals.get_collisions(), expected[2]);
    assert_eq!(totals.get_steps(), expected[3]);
    assert_eq!(totals.get_backups(), expected[4]);
}

#[test]
fn test_counters_never_decrease() {
    let mut totals = CollisionTotals::new();
    let mut rng = StdRng::seed_from_u64(7);

    let mut previous = totals.get_steps();
    for _ in 0..100 {
        totals.add_steps(rng.gen_range(0..5u64));
        assert!(totals.get_steps() >= previous);
        previous = totals.get_steps();
    }
}

#[test]
fn test_end_to_end_counter_sequence() {
    let mut totals = CollisionTotals::new();
    totals.add_steps(3);
    totals.add_searches(2);

    assert_eq!(totals.get_steps(), 3);
    assert_eq!(totals.get_searches(), 2);
    assert_eq!(totals.get_collisions(), 0);

    totals.reset();

    assert_eq!(totals.get_searches(), 0);
    assert_eq!(totals.get_impulses(), 0);
    assert_eq!(totals.get_collisions(), 0);
    assert_eq!(totals.get_steps(), 0);
    assert_eq!(totals.get_backups(), 0);
}

#[test]
fn test_reset_after_arbitrary_history() {
    let mut totals = CollisionTotals::new();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..50 {
        totals.add_searches(rng.gen_range(0..100u64));
        totals.add_impulses(rng.gen_range(0..100u64));
        totals.add_collisions(rng.gen_range(0..100u64));
        totals.add_steps(rng.gen_range(0..100u64));
        totals.add_backups(rng.gen_range(0..100u64));
    }

    totals.reset();
    assert!(totals.is_zero());
}

#[test]
fn test_diagnostic_string() {
    let mut totals = CollisionTotals::new();
    totals.add_searches(3);
    totals.add_impulses(2);
    totals.add_collisions(2);
    totals.add_steps(40);
    totals.add_backups(1);

    assert_eq!(
        format!("{}", totals),
        "CollisionTotals{searches: 3, impulses: 2, collisions: 2, steps: 40, backups: 1}"
    );

    totals.reset();
    assert_eq!(
        format!("{}", totals),
        "CollisionTotals{searches: 0, impulses: 0, collisions: 0, steps: 0, backups: 0}"
    );
}
