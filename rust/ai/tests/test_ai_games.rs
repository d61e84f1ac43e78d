use liarsdice_ai::agent::{ProbabilisticAI, Profile};
use liarsdice_ai::policy::PolicyParams;
use liarsdice_ai::{Opponent, create_ai};
use liarsdice_engine::engine::{ActionResult, Engine, GameConfig};
use liarsdice_engine::player::Action;

fn quick(profile: Profile, seed: u64) -> Box<dyn Opponent> {
    Box::new(ProbabilisticAI::new(profile, seed).with_params(PolicyParams {
        decision_trials: 500,
        candidate_trials: 100,
        max_probes: 9,
    }))
}

fn play_out(engine: &mut Engine, seats: &mut [Box<dyn Opponent>]) -> usize {
    let mut turns = 0;
    while !engine.is_over() {
        turns += 1;
        assert!(turns < 5_000, "game should finish");
        let player = engine.current_player().unwrap();
        let action = seats[player.0]
            .decide(&engine.view(player).unwrap())
            .unwrap();
        engine
            .apply_action(player, action)
            .expect("policy only produces legal actions");
    }
    turns
}

#[test]
fn computer_players_finish_a_game() {
    for wild in [false, true] {
        let config = GameConfig {
            players: 3,
            dice_per_player: 3,
            wild_ones: wild,
        };
        let mut engine = Engine::new(config, vec!["A", "B", "C"], Some(11)).unwrap();
        let mut seats = vec![
            quick(Profile::Gambler, 1),
            quick(Profile::Lucky, 2),
            quick(Profile::Skeptic, 3),
        ];
        play_out(&mut engine, &mut seats);
        let winner = engine.winner().expect("someone wins");
        assert!(engine.player(winner).unwrap().is_active());
        assert_eq!(engine.ledger().total_dice() as usize, {
            engine.player(winner).unwrap().hand().dice_count()
        });
    }
}

#[test]
fn seeded_games_replay_identically() {
    let run = || {
        let config = GameConfig {
            players: 2,
            dice_per_player: 2,
            wild_ones: false,
        };
        let mut engine = Engine::new(config, vec!["A", "B"], Some(5)).unwrap();
        let mut seats = vec![quick(Profile::Random, 8), quick(Profile::Lucky, 9)];
        let turns = play_out(&mut engine, &mut seats);
        (turns, engine.winner())
    };
    assert_eq!(run(), run());
}

#[test]
fn factory_players_open_every_cycle_with_a_bid() {
    let config = GameConfig {
        players: 2,
        dice_per_player: 2,
        wild_ones: false,
    };
    let mut engine = Engine::new(config, vec!["A", "B"], Some(3)).unwrap();
    let mut ai = create_ai("skeptic", 4).unwrap();
    let player = engine.current_player().unwrap();
    let action = ai.decide(&engine.view(player).unwrap()).unwrap();
    assert!(matches!(action, Action::Bid { .. }));
    assert!(matches!(
        engine.apply_action(player, action),
        Ok(ActionResult::BidPlaced(_))
    ));
}
