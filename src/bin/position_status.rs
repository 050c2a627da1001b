use std::env;

use chess_core::board::{parse_move, GameState};
use chess_core::game::Game;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: position_status [--fen <position>] <move1> <move2> ...");
        return;
    }

    let mut moves = &args[1..];
    let mut game = Game::new();
    if moves[0] == "--fen" {
        let Some(fen) = moves.get(1) else {
            eprintln!("Error: --fen needs a position string");
            std::process::exit(2);
        };
        game = match Game::from_fen(fen) {
            Ok(game) => game,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(2);
            }
        };
        moves = &moves[2..];
    }

    for text in moves {
        let result = parse_move(text)
            .map_err(|e| e.to_string())
            .and_then(|(from, to, promotion)| {
                game.attempt_move(from, to, promotion)
                    .map_err(|e| e.to_string())
            });
        if let Err(e) = result {
            eprintln!("Error: {text}: {e}");
            std::process::exit(2);
        }
    }

    let state: &GameState = game.state();
    let legal_moves = game.legal_moves();
    println!("fen: {}", game.snapshot());
    println!("side_to_move: {}", state.side_to_move());
    println!("status: {}", game.status());
    println!("legal_moves: {}", legal_moves.len());
    println!("material: {}", game.material_balance());
    for line in game.history().score_sheet() {
        println!("{line}");
    }
    for mv in &legal_moves {
        println!("{} {}", mv, state.move_to_san(mv));
    }
}
