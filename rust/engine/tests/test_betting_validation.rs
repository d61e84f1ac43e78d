use liarsdice_engine::errors::GameError;
use liarsdice_engine::ledger::BidLedger;
use liarsdice_engine::player::PlayerId;
use liarsdice_engine::rules::{validate_bid, Bid};

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);

#[test]
fn opening_bid_on_fresh_ledger_is_accepted() {
    let mut ledger = BidLedger::new(15);
    let bid = ledger.propose(4, 4, P0).unwrap();
    assert_eq!(bid, Bid::new(4, 4));
    assert_eq!(ledger.current(), Some(&Bid::new(4, 4)));
}

#[test]
fn higher_face_wins_despite_lower_count() {
    let mut ledger = BidLedger::new(15);
    ledger.propose(4, 4, P0).unwrap();
    assert_eq!(ledger.propose(3, 5, P1), Ok(Bid::new(3, 5)));
}

#[test]
fn repeating_the_standing_bid_is_rejected() {
    let mut ledger = BidLedger::new(15);
    ledger.propose(4, 4, P0).unwrap();
    let err = ledger.propose(4, 4, P1).unwrap_err();
    assert_eq!(
        err,
        GameError::NotAnEscalation {
            proposed: Bid::new(4, 4),
            current: Bid::new(4, 4),
        }
    );
    // rejected proposals leave the ledger alone
    assert_eq!(ledger.current(), Some(&Bid::new(4, 4)));
    assert_eq!(ledger.owner(), Some(P0));
    assert_eq!(ledger.previous(), None);
}

#[test]
fn higher_face_accepted_for_every_count_up_to_total() {
    let current = Bid::new(7, 2);
    for face in 3..=6u8 {
        for count in 1..=12u32 {
            assert_eq!(
                validate_bid(12, Some(&current), count, face),
                Ok(Bid::new(count, face)),
                "{} x {}s should beat {}",
                count,
                face,
                current
            );
        }
    }
}

#[test]
fn same_face_needs_strictly_more_dice() {
    let current = Bid::new(5, 4);
    for count in 1..=5u32 {
        assert!(matches!(
            validate_bid(12, Some(&current), count, 4),
            Err(GameError::NotAnEscalation { .. })
        ));
    }
    for count in 6..=12u32 {
        assert!(validate_bid(12, Some(&current), count, 4).is_ok());
    }
}

#[test]
fn lower_face_never_escalates_regardless_of_count() {
    let current = Bid::new(1, 5);
    for face in 1..5u8 {
        for count in 1..=20u32 {
            assert!(matches!(
                validate_bid(20, Some(&current), count, face),
                Err(GameError::NotAnEscalation { .. })
            ));
        }
    }
}

#[test]
fn count_is_checked_before_face() {
    assert_eq!(
        validate_bid(10, None, 0, 9),
        Err(GameError::InvalidCount { count: 0, total: 10 })
    );
    assert_eq!(
        validate_bid(10, None, 11, 3),
        Err(GameError::InvalidCount {
            count: 11,
            total: 10
        })
    );
    assert_eq!(
        validate_bid(10, None, 3, 0),
        Err(GameError::InvalidFace { face: 0 })
    );
    assert_eq!(
        validate_bid(10, None, 3, 7),
        Err(GameError::InvalidFace { face: 7 })
    );
}

#[test]
fn face_check_runs_before_escalation_check() {
    let current = Bid::new(3, 6);
    assert_eq!(
        validate_bid(10, Some(&current), 4, 7),
        Err(GameError::InvalidFace { face: 7 })
    );
}

#[test]
fn count_equal_to_total_dice_is_legal() {
    assert_eq!(validate_bid(10, None, 10, 6), Ok(Bid::new(10, 6)));
}

#[test]
fn ones_can_be_bid() {
    let mut ledger = BidLedger::new(10);
    assert!(ledger.propose(2, 1, P0).is_ok());
    assert!(ledger.propose(3, 1, P1).is_ok());
}

#[test]
fn rule_violations_are_recoverable() {
    let mut ledger = BidLedger::new(5);
    for err in [
        ledger.propose(6, 3, P0).unwrap_err(),
        ledger.propose(2, 8, P0).unwrap_err(),
    ] {
        assert!(err.is_recoverable(), "{} should be recoverable", err);
    }
    assert!(ledger.current().is_none());
}
