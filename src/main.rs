use std::env;
use std::process;

use crossterm::style::{style, Stylize};
use n_puzzle::{spawn_solve, Game, GridConfig};

fn main() {
    env_logger::init();

    let num_columns = match env::args().nth(1).map(|arg| arg.parse::<usize>()) {
        None => 3,
        Some(Ok(num_columns)) => num_columns,
        Some(Err(_)) => {
            eprintln!("usage: n-puzzle [num_columns]");
            process::exit(2);
        }
    };

    let config = match GridConfig::new(num_columns) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    };

    let mut game = Game::new(config);
    println!("Initial Puzzle:\n{}", game.state());

    game.shuffle(&mut rand::thread_rng());
    println!("Shuffled Puzzle:\n{}", game.state());

    let mut solution = match spawn_solve(game.state().clone(), config).wait() {
        Ok(Some(solution)) => solution,
        Ok(None) => {
            eprintln!("No solution exists for this arrangement");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };
    println!("Found optimal solution with: {} moves", solution.num_moves());

    let moves = solution.moves(num_columns);
    solution.pop();
    for direction in moves {
        if let Some(next) = solution.pop() {
            game.show(next);
            println!("{}\n{}", style(direction).bold(), game.state());
        }
    }
}
