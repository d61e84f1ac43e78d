use liarsdice_ai::probability::{CANDIDATE_TRIALS, estimate};
use liarsdice_engine::hand::Hand;
use liarsdice_engine::rng::seeded;

#[test]
fn estimate_is_non_increasing_in_count() {
    let hand = Hand::from_faces(&[3, 3, 1, 5, 6]).unwrap();
    for wild in [false, true] {
        for face in 1..=6u8 {
            let mut last = 1.0;
            for count in 1..=16u32 {
                // same seed per count: the same simulated tables are judged
                // against a rising bar
                let p = estimate(count, face, &hand, 15, wild, 1_000, &mut seeded(9)).unwrap();
                assert!((0.0..=1.0).contains(&p));
                assert!(
                    p <= last,
                    "face {} wild {}: p({}) = {} > {}",
                    face,
                    wild,
                    count,
                    p,
                    last
                );
                last = p;
            }
            assert_eq!(last, 0.0, "16 dice cannot all show up among 15");
        }
    }
}

#[test]
fn unknown_dice_exclude_the_whole_own_hand() {
    // five own dice, none a 4; ten unknown. Eleven 4s is impossible.
    let hand = Hand::from_faces(&[1, 2, 3, 5, 6]).unwrap();
    let p = estimate(11, 4, &hand, 15, false, CANDIDATE_TRIALS, &mut seeded(1)).unwrap();
    assert_eq!(p, 0.0);
    let p = estimate(10, 4, &hand, 15, false, CANDIDATE_TRIALS, &mut seeded(1)).unwrap();
    assert!(p < 0.01);
}

#[test]
fn wild_ones_raise_the_estimate() {
    let hand = Hand::from_faces(&[2, 4]).unwrap();
    let plain = estimate(4, 5, &hand, 12, false, 5_000, &mut seeded(21)).unwrap();
    let wild = estimate(4, 5, &hand, 12, true, 5_000, &mut seeded(21)).unwrap();
    assert!(wild > plain, "wild {} should beat plain {}", wild, plain);
}
