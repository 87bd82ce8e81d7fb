//! CLI dudo example: you against a table of simple bots.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use dudo::{
    Action, Bid, Delivery, Event, Game, GameOptions, Hand, MoveOutcome, PlayerId, RandomDealer,
    WILD_FACE,
};

const HUMAN: PlayerId = 1;

fn main() {
    println!("Dudo CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut dealer = RandomDealer::new(seed);

    let Some(bots) = prompt_usize("Number of bots (1-5): ") else {
        return;
    };
    let players: Vec<PlayerId> = (1..=bots.clamp(1, 5) as PlayerId + 1).collect();

    let (mut game, deliveries) = match Game::start(GameOptions::default(), &players, &mut dealer) {
        Ok(started) => started,
        Err(err) => {
            println!("Start error: {err}");
            return;
        }
    };
    show(&deliveries);

    while let Some(actor) = game.active_player() {
        let action = if actor == HUMAN {
            let Some(action) = prompt_action() else {
                println!("Goodbye.");
                return;
            };
            action
        } else {
            bot_action(&game, actor)
        };

        let deliveries = game.play_move(&mut dealer, actor, action);
        show(&deliveries);
    }
}

fn show(deliveries: &[Delivery]) {
    for delivery in deliveries.iter().filter(|d| d.recipient == HUMAN) {
        match &delivery.event {
            Event::GameStarted(players) => println!("Game started with players {players:?}"),
            Event::NewHand(hand) => println!("\nYour dice: {}", format_hand(hand)),
            Event::Move => println!("Your move."),
            Event::LastMove { actor, outcome } => println!("{}", format_move(*actor, outcome)),
            Event::RevealPlayersHands(hands) => {
                for (player, hand) in hands {
                    println!("  player {player}: {}", format_hand(hand));
                }
            }
            Event::Loser(player) => println!("Player {player} is out of dice."),
            Event::Winner(player) if *player == HUMAN => println!("You win!"),
            Event::Winner(player) => println!("Player {player} wins."),
            Event::UnauthorizedMove => println!("It is not your turn."),
            Event::InvalidBid => println!("That bid does not raise the current one."),
            Event::IllegalMove => println!("There is no bid to challenge yet."),
        }
    }
}

fn format_move(actor: PlayerId, outcome: &MoveOutcome) -> String {
    let who = if actor == HUMAN {
        "You".to_string()
    } else {
        format!("Player {actor}")
    };
    match outcome {
        MoveOutcome::Outbid(bid) => format!("{who} bid {}", format_bid(*bid)),
        MoveOutcome::Dudo { success } => {
            format!("{who} called dudo ({})", verdict(*success))
        }
        MoveOutcome::Calza { success } => {
            format!("{who} called calza ({})", verdict(*success))
        }
    }
}

const fn verdict(success: bool) -> &'static str {
    if success { "right" } else { "wrong" }
}

fn format_bid(bid: Bid) -> String {
    format!("{} x {}", bid.count, bid.face)
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.dice()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn prompt_action() -> Option<Action> {
    loop {
        let input = prompt_line("Bid '<count> <face>', (d)udo or (c)alza: ");
        match input.as_str() {
            "q" | "quit" => return None,
            "d" | "dudo" => return Some(Action::Dudo),
            "c" | "calza" => return Some(Action::Calza),
            _ => {}
        }

        let mut parts = input.split_whitespace().map(str::parse::<u8>);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(count)), Some(Ok(face)), None) => return Some(Action::outbid(count, face)),
            _ => println!("Could not read that move."),
        }
    }
}

/// Expected number of dice showing `face`, from `actor`'s point of view.
fn expected_count(game: &Game, actor: PlayerId, face: u8) -> f64 {
    let Some(own) = game.hand(actor) else {
        return 0.0;
    };
    let unseen = game.total_dice() - own.dice().len();
    #[expect(
        clippy::cast_precision_loss,
        reason = "dice counts are far below f64 precision limits"
    )]
    let (own_count, unseen) = (own.count_face(face) as f64, unseen as f64);
    own_count + unseen / 6.0
}

fn bot_action(game: &Game, actor: PlayerId) -> Action {
    let Some(standing) = game.standing_bid() else {
        let face = game
            .hand(actor)
            .and_then(|hand| (2..=6).max_by_key(|&face| hand.count_face(face)))
            .unwrap_or(2);
        return Action::outbid(1, face);
    };

    if f64::from(standing.count) > expected_count(game, actor, standing.face) + 1.0 {
        return Action::Dudo;
    }

    let candidates = [
        Action::outbid(standing.count, standing.face + 1),
        Action::outbid(standing.count + 1, standing.face),
        Action::outbid(standing.count.div_ceil(2), WILD_FACE),
        Action::outbid(standing.count + 1, 2),
    ];
    candidates
        .into_iter()
        .find(|action| {
            game.check_move(actor, action).is_ok()
                && match action {
                    Action::Outbid(bid) => {
                        f64::from(bid.count) <= expected_count(game, actor, bid.face) + 1.0
                    }
                    _ => false,
                }
        })
        .unwrap_or(Action::Dudo)
}
