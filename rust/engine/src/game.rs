use crate::player::PlayerId;

/// Seating order of the players still in the game and whose turn it is.
///
/// Eliminated players are removed from the rotation entirely, so `advance`
/// never lands on a player without dice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOrder {
    seats: Vec<PlayerId>,
    current: usize,
}

impl TurnOrder {
    pub fn new(seats: Vec<PlayerId>) -> Self {
        Self { seats, current: 0 }
    }

    pub fn current(&self) -> Option<PlayerId> {
        self.seats.get(self.current).copied()
    }

    pub fn active_count(&self) -> usize {
        self.seats.len()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.seats.contains(&id)
    }

    /// Passes the turn to the next seat and returns who now acts.
    pub fn advance(&mut self) -> Option<PlayerId> {
        if self.seats.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.seats.len();
        self.current()
    }

    /// Makes `id` the player to act. Returns `false` if they are not seated.
    pub fn set_current(&mut self, id: PlayerId) -> bool {
        match self.seats.iter().position(|&s| s == id) {
            Some(idx) => {
                self.current = idx;
                true
            }
            None => false,
        }
    }

    /// Takes `id` out of the rotation. If it was their turn, the turn passes
    /// to the next seat after them.
    pub fn remove(&mut self, id: PlayerId) {
        let Some(idx) = self.seats.iter().position(|&s| s == id) else {
            return;
        };
        self.seats.remove(idx);
        if idx < self.current {
            self.current -= 1;
        }
        if self.current >= self.seats.len() {
            self.current = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(n: usize) -> TurnOrder {
        TurnOrder::new((0..n).map(PlayerId).collect())
    }

    #[test]
    fn advance_wraps_around() {
        let mut t = order(3);
        assert_eq!(t.current(), Some(PlayerId(0)));
        assert_eq!(t.advance(), Some(PlayerId(1)));
        assert_eq!(t.advance(), Some(PlayerId(2)));
        assert_eq!(t.advance(), Some(PlayerId(0)));
    }

    #[test]
    fn removing_current_passes_turn_to_next_seat() {
        let mut t = order(4);
        t.set_current(PlayerId(2));
        t.remove(PlayerId(2));
        assert_eq!(t.current(), Some(PlayerId(3)));
        t.remove(PlayerId(3));
        assert_eq!(t.current(), Some(PlayerId(0)));
        assert_eq!(t.active_count(), 2);
    }

    #[test]
    fn removing_earlier_seat_keeps_current_player() {
        let mut t = order(3);
        t.set_current(PlayerId(2));
        t.remove(PlayerId(0));
        assert_eq!(t.current(), Some(PlayerId(2)));
        assert!(!t.contains(PlayerId(0)));
        assert!(!t.set_current(PlayerId(0)));
    }
}
