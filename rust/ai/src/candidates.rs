use liarsdice_engine::dice::MAX_FACE;
use liarsdice_engine::rules::Bid;

/// Every bid that legally escalates `current` with at most `total_dice` dice.
///
/// Higher faces may use any count from 1 up; the current face needs a larger
/// count. Empty when `current` is already `total_dice` sixes.
pub fn candidates(current: &Bid, total_dice: u32) -> Vec<Bid> {
    let mut out: Vec<Bid> = ((current.count + 1)..=total_dice)
        .map(|count| Bid::new(count, current.face))
        .collect();
    for face in current.face.saturating_add(1)..=MAX_FACE {
        out.extend((1..=total_dice).map(|count| Bid::new(count, face)));
    }
    out
}
