//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Generate a random puzzle at a chosen difficulty
//! - Display the puzzle, solution, and seed
//! - Regenerate a puzzle from a printed seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty (easy, medium, hard, expert):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty expert
//! ```
//!
//! Regenerate a specific puzzle from its 64-hex-character seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <SEED>
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use rudoku_core::{Grid, Position};
use rudoku_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
            Level::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty (clue count) of the generated puzzle.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: Level,

    /// Regenerate the puzzle identified by a 64-hex-character seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    let args = Args::parse();
    let difficulty = Difficulty::from(args.difficulty);
    let generator = PuzzleGenerator::new();

    let puzzle = match &args.seed {
        Some(seed) => match seed.parse::<PuzzleSeed>() {
            Ok(seed) => generator.generate_with_seed(difficulty, seed),
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        None => generator.generate(difficulty),
    };

    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!(
        "Difficulty: {} ({} clues)",
        puzzle.difficulty,
        puzzle.problem.filled_count()
    );
    println!();
    println!("Problem:");
    print_grid(&puzzle.problem);
    println!();
    println!("Solution:");
    print_grid(&puzzle.solution);
}

fn print_grid(grid: &Grid) {
    for row in 0..9 {
        print!("  ");
        for col in 0..9 {
            match grid[Position::new(row, col)] {
                Some(digit) => print!("{digit}"),
                None => print!("."),
            }
        }
        println!();
    }
}
