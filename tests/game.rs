//! Game integration tests.

extern crate alloc;

use alloc::collections::VecDeque;

use dudo::{
    Action, Bid, Delivery, Event, Game, GameOptions, GamePhase, GrowthLimit, Hand, HandDealer,
    MoveError, MoveOutcome, PlayerId, StartError, WildRule,
};

/// Deals scripted hands in order, one script per `deal` call.
///
/// Missing dice are filled with sixes, so an exhausted script still deals
/// hands of the requested size.
#[derive(Default)]
struct ScriptedDealer {
    scripts: VecDeque<Vec<u8>>,
}

impl ScriptedDealer {
    fn new(scripts: &[&[u8]]) -> Self {
        Self {
            scripts: scripts.iter().map(|dice| dice.to_vec()).collect(),
        }
    }
}

impl HandDealer for ScriptedDealer {
    fn deal(&mut self, size: u8) -> Hand {
        let mut dice = self.scripts.pop_front().unwrap_or_default();
        dice.resize(size as usize, 6);
        Hand::new(dice)
    }
}

fn start(players: &[PlayerId], max_dice: u8, dealer: &mut ScriptedDealer) -> Game {
    let options = GameOptions::default().with_max_dice(max_dice);
    Game::start(options, players, dealer).unwrap().0
}

fn events_for(deliveries: &[Delivery], player: PlayerId) -> Vec<&Event> {
    deliveries
        .iter()
        .filter(|d| d.recipient == player)
        .map(|d| &d.event)
        .collect()
}

fn position(deliveries: &[Delivery], pred: impl Fn(&Delivery) -> bool) -> usize {
    deliveries.iter().position(pred).unwrap()
}

#[test]
fn start_deals_hands_and_prompts_first_player() {
    let mut dealer = ScriptedDealer::new(&[&[1, 2, 3, 4, 5], &[6, 5, 4, 3, 2]]);
    let (game, deliveries) =
        Game::start(GameOptions::default().with_max_dice(5), &[1, 2], &mut dealer).unwrap();

    let expected = vec![
        Delivery {
            recipient: 1,
            event: Event::GameStarted(vec![1, 2]),
        },
        Delivery {
            recipient: 2,
            event: Event::GameStarted(vec![1, 2]),
        },
        Delivery {
            recipient: 1,
            event: Event::NewHand(Hand::new(vec![1, 2, 3, 4, 5])),
        },
        Delivery {
            recipient: 2,
            event: Event::NewHand(Hand::new(vec![6, 5, 4, 3, 2])),
        },
        Delivery {
            recipient: 1,
            event: Event::Move,
        },
    ];
    assert_eq!(deliveries, expected);

    assert_eq!(game.players(), &[1, 2]);
    assert_eq!(game.remaining_players(), &[1, 2]);
    assert_eq!(game.active_player(), Some(1));
    assert_eq!(game.standing_bid(), None);
    assert_eq!(game.phase(), GamePhase::RoundOpen);
    assert_eq!(game.hand(1).map(Hand::remaining), Some(5));
    assert_eq!(game.hand(2).map(Hand::remaining), Some(5));
    assert_eq!(game.total_dice(), 10);
}

#[test]
fn start_errors() {
    let mut dealer = ScriptedDealer::default();

    assert_eq!(
        Game::start(GameOptions::default(), &[], &mut dealer).unwrap_err(),
        StartError::NoPlayers
    );
    assert_eq!(
        Game::start(GameOptions::default().with_max_dice(0), &[1, 2], &mut dealer).unwrap_err(),
        StartError::NoDice
    );
    assert_eq!(
        Game::start(GameOptions::default(), &[1, 2, 1], &mut dealer).unwrap_err(),
        StartError::DuplicatePlayer
    );
}

#[test]
fn single_player_game_finishes_immediately() {
    let mut dealer = ScriptedDealer::default();
    let (mut game, deliveries) =
        Game::start(GameOptions::default(), &[7], &mut dealer).unwrap();

    assert_eq!(
        events_for(&deliveries, 7),
        vec![&Event::GameStarted(vec![7]), &Event::Winner(7)]
    );
    assert!(game.is_finished());
    assert_eq!(game.winner(), Some(7));
    assert_eq!(game.hand(7), None);

    let deliveries = game.play_move(&mut dealer, 7, Action::outbid(1, 3));
    assert_eq!(
        deliveries,
        vec![Delivery {
            recipient: 7,
            event: Event::UnauthorizedMove,
        }]
    );
}

#[test]
fn out_of_turn_move_only_notifies_the_offender() {
    let mut dealer = ScriptedDealer::default();
    let mut game = start(&[1, 2, 3], 5, &mut dealer);
    let before = game.clone();

    let deliveries = game.play_move(&mut dealer, 2, Action::outbid(1, 3));

    assert_eq!(
        deliveries,
        vec![Delivery {
            recipient: 2,
            event: Event::UnauthorizedMove,
        }]
    );
    assert_eq!(game, before);
    assert_eq!(
        game.check_move(2, &Action::outbid(1, 3)),
        Err(MoveError::NotYourTurn)
    );
}

#[test]
fn opening_on_wild_face_is_an_invalid_bid() {
    let mut dealer = ScriptedDealer::default();
    let mut game = start(&[1, 2], 5, &mut dealer);
    let before = game.clone();

    let deliveries = game.play_move(&mut dealer, 1, Action::outbid(3, 1));

    assert_eq!(
        deliveries,
        vec![Delivery {
            recipient: 1,
            event: Event::InvalidBid,
        }]
    );
    assert_eq!(game, before);
    assert_eq!(game.active_player(), Some(1));
}

#[test]
fn challenge_without_a_bid_is_illegal() {
    let mut dealer = ScriptedDealer::default();
    let mut game = start(&[1, 2], 5, &mut dealer);
    let before = game.clone();

    for action in [Action::Dudo, Action::Calza] {
        assert_eq!(
            game.check_move(1, &action),
            Err(MoveError::NoStandingBid)
        );
        let deliveries = game.play_move(&mut dealer, 1, action);
        assert_eq!(
            deliveries,
            vec![Delivery {
                recipient: 1,
                event: Event::IllegalMove,
            }]
        );
    }
    assert_eq!(game, before);
}

#[test]
fn accepted_bid_is_announced_and_passes_the_turn() {
    let mut dealer = ScriptedDealer::default();
    let mut game = start(&[1, 2, 3], 5, &mut dealer);

    let deliveries = game.play_move(&mut dealer, 1, Action::outbid(2, 3));

    let announcement = Event::LastMove {
        actor: 1,
        outcome: MoveOutcome::Outbid(Bid::new(2, 3)),
    };
    let expected: Vec<Delivery> = [1, 2, 3]
        .into_iter()
        .map(|recipient| Delivery {
            recipient,
            event: announcement.clone(),
        })
        .chain([Delivery {
            recipient: 2,
            event: Event::Move,
        }])
        .collect();
    assert_eq!(deliveries, expected);
    assert_eq!(game.standing_bid(), Some(Bid::new(2, 3)));
    assert_eq!(game.active_player(), Some(2));
    assert_eq!(game.phase(), GamePhase::Bidding);
}

#[test]
fn repeating_the_standing_bid_is_rejected() {
    let mut dealer = ScriptedDealer::default();
    let mut game = start(&[1, 2], 5, &mut dealer);
    game.play_move(&mut dealer, 1, Action::outbid(2, 3));

    let deliveries = game.play_move(&mut dealer, 2, Action::outbid(2, 3));

    assert_eq!(events_for(&deliveries, 2), vec![&Event::InvalidBid]);
    assert!(events_for(&deliveries, 1).is_empty());
    assert_eq!(game.standing_bid(), Some(Bid::new(2, 3)));
    assert_eq!(game.active_player(), Some(2));

    // a real raise from the same player still goes through
    game.play_move(&mut dealer, 2, Action::outbid(2, 4));
    assert_eq!(game.standing_bid(), Some(Bid::new(2, 4)));
    assert_eq!(game.active_player(), Some(1));
}

#[test]
fn turn_order_wraps_around() {
    let mut dealer = ScriptedDealer::default();
    let mut game = start(&[1, 2, 3], 5, &mut dealer);

    game.play_move(&mut dealer, 1, Action::outbid(1, 2));
    game.play_move(&mut dealer, 2, Action::outbid(1, 3));
    game.play_move(&mut dealer, 3, Action::outbid(1, 4));

    assert_eq!(game.active_player(), Some(1));
}

#[test]
fn successful_dudo_costs_the_bidder_a_die() {
    let mut dealer = ScriptedDealer::new(&[
        &[4, 4, 2, 2, 2],
        &[3, 3, 3, 5, 5],
        &[6, 6, 6, 6, 6],
    ]);
    let mut game = start(&[1, 2, 3], 5, &mut dealer);
    game.play_move(&mut dealer, 1, Action::outbid(3, 4));
    assert_eq!(game.face_frequency(4), 2);
    let total = game.total_dice();

    let deliveries = game.play_move(&mut dealer, 2, Action::Dudo);

    assert_eq!(game.total_dice(), total - 1);
    assert_eq!(game.hand(1).map(Hand::remaining), Some(4));
    assert_eq!(game.hand(2).map(Hand::remaining), Some(5));
    assert_eq!(game.active_player(), Some(1));
    assert_eq!(game.standing_bid(), None);
    assert_eq!(game.phase(), GamePhase::RoundOpen);

    let revealed = Event::RevealPlayersHands(vec![
        (1, Hand::new(vec![4, 4, 2, 2, 2])),
        (2, Hand::new(vec![3, 3, 3, 5, 5])),
        (3, Hand::new(vec![6, 6, 6, 6, 6])),
    ]);
    for player in [1, 2, 3] {
        let events = events_for(&deliveries, player);
        assert_eq!(
            events[0],
            &Event::LastMove {
                actor: 2,
                outcome: MoveOutcome::Dudo { success: true },
            }
        );
        assert_eq!(events[1], &revealed);
        assert!(matches!(events[2], Event::NewHand(_)));
    }
    assert_eq!(deliveries.last().map(|d| d.recipient), Some(1));
    assert_eq!(deliveries.last().map(|d| &d.event), Some(&Event::Move));
}

#[test]
fn failed_dudo_costs_the_challenger_a_die() {
    let mut dealer = ScriptedDealer::new(&[&[4, 4, 2, 2, 2], &[3, 3, 3, 5, 5]]);
    let mut game = start(&[1, 2], 5, &mut dealer);
    game.play_move(&mut dealer, 1, Action::outbid(2, 4));

    let deliveries = game.play_move(&mut dealer, 2, Action::Dudo);

    assert_eq!(
        events_for(&deliveries, 1)[0],
        &Event::LastMove {
            actor: 2,
            outcome: MoveOutcome::Dudo { success: false },
        }
    );
    assert_eq!(game.hand(1).map(Hand::remaining), Some(5));
    assert_eq!(game.hand(2).map(Hand::remaining), Some(4));
    assert_eq!(game.active_player(), Some(2));
}

#[test]
fn dudo_from_first_seat_challenges_the_last_seat() {
    let mut dealer = ScriptedDealer::new(&[&[2, 2, 2], &[2, 2, 2], &[2, 2, 2]]);
    let mut game = start(&[1, 2, 3], 3, &mut dealer);
    game.play_move(&mut dealer, 1, Action::outbid(1, 2));
    game.play_move(&mut dealer, 2, Action::outbid(1, 3));
    game.play_move(&mut dealer, 3, Action::outbid(1, 4));

    game.play_move(&mut dealer, 1, Action::Dudo);

    assert_eq!(game.hand(3).map(Hand::remaining), Some(2));
    assert_eq!(game.active_player(), Some(3));
}

// Wild dice are not counted toward other faces unless the table opts in.
// This changes who wins a challenge, so both rules are pinned here.
#[test]
fn wild_dice_do_not_count_toward_other_faces_by_default() {
    let scripts: &[&[u8]] = &[&[1, 1, 1, 1, 1], &[4, 2, 2, 2, 2]];

    let mut dealer = ScriptedDealer::new(scripts);
    let mut game = start(&[1, 2], 5, &mut dealer);
    game.play_move(&mut dealer, 1, Action::outbid(2, 4));
    assert_eq!(game.face_frequency(4), 1);
    let deliveries = game.play_move(&mut dealer, 2, Action::Dudo);
    assert_eq!(
        events_for(&deliveries, 2)[0],
        &Event::LastMove {
            actor: 2,
            outcome: MoveOutcome::Dudo { success: true },
        }
    );

    let mut dealer = ScriptedDealer::new(scripts);
    let options = GameOptions::default().with_wilds(WildRule::CountTowardAll);
    let (mut game, _) = Game::start(options, &[1, 2], &mut dealer).unwrap();
    game.play_move(&mut dealer, 1, Action::outbid(2, 4));
    assert_eq!(game.face_frequency(4), 6);
    let deliveries = game.play_move(&mut dealer, 2, Action::Dudo);
    assert_eq!(
        events_for(&deliveries, 2)[0],
        &Event::LastMove {
            actor: 2,
            outcome: MoveOutcome::Dudo { success: false },
        }
    );
}

#[test]
fn exact_calza_grows_the_caller_when_unbounded() {
    let mut dealer = ScriptedDealer::new(&[&[5, 5, 2, 2, 2], &[5, 3, 3, 3, 3]]);
    let options = GameOptions::default().with_growth(GrowthLimit::Unbounded);
    let (mut game, _) = Game::start(options, &[1, 2], &mut dealer).unwrap();
    game.play_move(&mut dealer, 1, Action::outbid(3, 5));
    let total = game.total_dice();

    let deliveries = game.play_move(&mut dealer, 2, Action::Calza);

    assert_eq!(
        events_for(&deliveries, 1)[0],
        &Event::LastMove {
            actor: 2,
            outcome: MoveOutcome::Calza { success: true },
        }
    );
    assert_eq!(game.total_dice(), total + 1);
    assert_eq!(game.hand(2).map(Hand::remaining), Some(6));
    assert_eq!(game.active_player(), Some(2));
}

#[test]
fn exact_calza_is_capped_at_max_dice_by_default() {
    let mut dealer = ScriptedDealer::new(&[&[5, 5, 2, 2, 2], &[5, 3, 3, 3, 3]]);
    let mut game = start(&[1, 2], 5, &mut dealer);
    game.play_move(&mut dealer, 1, Action::outbid(3, 5));

    game.play_move(&mut dealer, 2, Action::Calza);

    assert_eq!(game.hand(2).map(Hand::remaining), Some(5));
    assert_eq!(game.total_dice(), 10);
}

#[test]
fn exact_calza_recovers_a_lost_die_under_the_cap() {
    let mut dealer = ScriptedDealer::new(&[&[4, 4, 2, 2, 2], &[3, 3, 3, 5, 5]]);
    let mut game = start(&[1, 2], 5, &mut dealer);
    // player 2 loses a failed dudo and opens the next round on four dice
    game.play_move(&mut dealer, 1, Action::outbid(2, 4));
    game.play_move(&mut dealer, 2, Action::Dudo);
    assert_eq!(game.hand(2).map(Hand::remaining), Some(4));

    // every die dealt from here on is a six: 9 sixes in play
    game.play_move(&mut dealer, 2, Action::outbid(8, 6));
    game.play_move(&mut dealer, 1, Action::outbid(9, 6));
    game.play_move(&mut dealer, 2, Action::Calza);

    assert_eq!(game.hand(2).map(Hand::remaining), Some(5));
    assert_eq!(game.active_player(), Some(2));
}

#[test]
fn wrong_calza_costs_the_caller_a_die() {
    let mut dealer = ScriptedDealer::new(&[&[5, 5, 2, 2, 2], &[5, 3, 3, 3, 3]]);
    let mut game = start(&[1, 2], 5, &mut dealer);
    game.play_move(&mut dealer, 1, Action::outbid(2, 5));
    let total = game.total_dice();

    let deliveries = game.play_move(&mut dealer, 2, Action::Calza);

    assert_eq!(
        events_for(&deliveries, 2)[0],
        &Event::LastMove {
            actor: 2,
            outcome: MoveOutcome::Calza { success: false },
        }
    );
    assert_eq!(game.total_dice(), total - 1);
    assert_eq!(game.hand(2).map(Hand::remaining), Some(4));
    assert_eq!(game.active_player(), Some(2));
}

#[test]
fn reveal_precedes_every_new_hand() {
    let mut dealer = ScriptedDealer::default();
    let mut game = start(&[1, 2, 3], 5, &mut dealer);
    game.play_move(&mut dealer, 1, Action::outbid(2, 3));

    let deliveries = game.play_move(&mut dealer, 2, Action::Dudo);

    for player in [1, 2, 3] {
        let events = events_for(&deliveries, player);
        let reveals = events
            .iter()
            .filter(|e| matches!(e, Event::RevealPlayersHands(_)))
            .count();
        assert_eq!(reveals, 1);

        let reveal = position(&deliveries, |d| {
            d.recipient == player && matches!(d.event, Event::RevealPlayersHands(_))
        });
        let new_hand = position(&deliveries, |d| {
            d.recipient == player && matches!(d.event, Event::NewHand(_))
        });
        assert!(reveal < new_hand);
    }
}

#[test]
fn last_die_lost_ends_the_game() {
    let mut dealer = ScriptedDealer::new(&[&[3], &[5]]);
    let mut game = start(&[1, 2], 1, &mut dealer);
    game.play_move(&mut dealer, 1, Action::outbid(1, 3));

    let deliveries = game.play_move(&mut dealer, 2, Action::Dudo);

    let for_player_1 = events_for(&deliveries, 1);
    assert_eq!(
        for_player_1,
        vec![
            &Event::LastMove {
                actor: 2,
                outcome: MoveOutcome::Dudo { success: false },
            },
            &Event::RevealPlayersHands(vec![(1, Hand::new(vec![3])), (2, Hand::new(vec![5]))]),
            &Event::Loser(2),
            &Event::Winner(1),
        ]
    );
    assert_eq!(events_for(&deliveries, 2).len(), 4);
    assert!(!deliveries.iter().any(|d| d.event == Event::Move));

    assert!(game.is_finished());
    assert_eq!(game.phase(), GamePhase::Finished);
    assert_eq!(game.winner(), Some(1));
    assert_eq!(game.remaining_players(), &[1]);
    assert_eq!(game.active_player(), None);
    assert_eq!(game.standing_bid(), None);
    assert_eq!(game.hand(1), None);
    assert_eq!(game.players(), &[1, 2]);

    for player in [1, 2] {
        let deliveries = game.play_move(&mut dealer, player, Action::Dudo);
        assert_eq!(
            deliveries,
            vec![Delivery {
                recipient: player,
                event: Event::UnauthorizedMove,
            }]
        );
    }
}

#[test]
fn next_survivor_opens_when_the_loser_is_knocked_out() {
    let mut dealer = ScriptedDealer::new(&[&[2], &[3], &[4]]);
    let mut game = start(&[1, 2, 3], 1, &mut dealer);
    game.play_move(&mut dealer, 1, Action::outbid(1, 5));
    game.play_move(&mut dealer, 2, Action::outbid(1, 6));

    let deliveries = game.play_move(&mut dealer, 3, Action::Dudo);

    assert!(deliveries.iter().any(|d| d.event == Event::Loser(2)));
    assert_eq!(game.remaining_players(), &[1, 3]);
    assert_eq!(game.hand(2), None);
    assert_eq!(game.active_player(), Some(3));
    assert_eq!(game.phase(), GamePhase::RoundOpen);

    // rotation now skips the eliminated seat
    game.play_move(&mut dealer, 3, Action::outbid(1, 2));
    assert_eq!(game.active_player(), Some(1));
}

#[test]
fn check_move_agrees_with_play_move() {
    let mut dealer = ScriptedDealer::default();
    let mut game = start(&[1, 2], 5, &mut dealer);

    assert_eq!(game.check_move(1, &Action::outbid(1, 2)), Ok(()));
    assert_eq!(
        game.check_move(1, &Action::outbid(0, 2)),
        Err(MoveError::InvalidBid(dudo::BidError::ZeroCount))
    );

    game.play_move(&mut dealer, 1, Action::outbid(3, 2));
    assert_eq!(game.check_move(2, &Action::Dudo), Ok(()));
    assert_eq!(game.check_move(2, &Action::Calza), Ok(()));
    assert_eq!(
        game.check_move(2, &Action::outbid(3, 2)),
        Err(MoveError::InvalidBid(dudo::BidError::SameBid))
    );
}
