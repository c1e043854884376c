use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use spinners::Spinner;

use thistlethwaite::error::Error;
use thistlethwaite::scramble::{gen_scramble, scramble_from_str, scramble_to_str};
use thistlethwaite::selftest::run_self_tests;
use thistlethwaite::{generate_all_tables, CubeState, Solver};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "solves a scramble using Thistlethwaite's four-phase algorithm")]
    Solve {
        #[arg(short, long)]
        scramble: String,

        #[arg(short, long, default_value = "tables")]
        table_dir: PathBuf,
    },

    #[command(about = "generates a random scramble")]
    Scramble {
        #[arg(short, long, default_value_t = 25)]
        length: usize,
    },

    #[command(about = "builds and writes the four phase tables to disk")]
    GenTables {
        #[arg(short, long, default_value = "tables")]
        table_dir: PathBuf,
    },

    #[command(about = "runs the solver against fixture and random scrambles")]
    SelfTest {
        #[arg(short, long, default_value = "tables")]
        table_dir: PathBuf,

        #[arg(short, long, default_value = "scrambles")]
        scramble_dir: PathBuf,
    },
}

fn solve(scramble: &str, table_dir: &PathBuf) -> Result<(), Error> {
    let moves = scramble_from_str(scramble)?;
    let mut state = CubeState::new_solved();
    state.apply_turns(&moves);

    let solver = Solver::new(table_dir);

    let mut spinner = Spinner::new(spinners::Spinners::Dots, "Solving".to_owned());
    let started = Instant::now();
    let solution = solver.solve(&state);
    let elapsed = started.elapsed();
    spinner.stop_with_newline();

    println!("Solution: {}", scramble_to_str(&solution));
    println!("Move count: {}", solution.len());
    println!("Solve time: {elapsed:?}");

    Ok(())
}

fn scramble(length: usize) {
    let mut rng = rand::thread_rng();
    let moves = gen_scramble(&mut rng, length);
    println!("Scramble: {}", scramble_to_str(&moves));
}

fn gen_tables(table_dir: &PathBuf) -> Result<(), Error> {
    generate_all_tables(table_dir)
}

fn self_test(table_dir: &PathBuf, scramble_dir: &PathBuf) -> Result<(), Error> {
    let report = run_self_tests(table_dir, scramble_dir)?;
    println!(
        "{} scrambles, all_solved={}, moves best/avg/worst = {}/{:.1}/{}, wall_time_ms best/avg/worst = {:.2}/{:.2}/{:.2}",
        report.results.len(),
        report.all_solved,
        report.best_move_count,
        report.average_move_count,
        report.worst_move_count,
        report.best_wall_time_ms,
        report.average_wall_time_ms,
        report.worst_wall_time_ms,
    );
    for result in &report.results {
        if !result.solved {
            println!("  FAILED: {}", result.label);
        }
    }
    Ok(())
}

fn main() {
    let program = Cli::parse();

    let result = match &program.command {
        Some(Commands::Solve { scramble, table_dir }) => solve(scramble, table_dir),
        Some(Commands::Scramble { length }) => {
            scramble(*length);
            Ok(())
        }
        Some(Commands::GenTables { table_dir }) => gen_tables(table_dir),
        Some(Commands::SelfTest { table_dir, scramble_dir }) => self_test(table_dir, scramble_dir),
        None => Ok(()),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
