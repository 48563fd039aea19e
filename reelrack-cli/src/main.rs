//! reelrack CLI
//!
//! Interactive shell for managing a personal movie collection backed by
//! SQLite, with OMDb metadata lookup and static website generation.

use std::path::PathBuf;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

mod actions;
mod error;
mod prompt;

use error::CliError;

#[derive(Parser)]
#[command(name = "reelrack")]
#[command(about = "Track your movie collection from the terminal", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, default_value = "data/movies.db")]
    db: PathBuf,

    /// Directory holding the website template and generated index.html
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,
}

const MENU: &str = "\nMenu:
0. Exit
1. List movies
2. Add movie
3. Delete movie
4. Update movie
5. Stats
6. Random movie
7. Search movie
8. Movies sorted by rating
9. Movies sorted by year
10. Filter movies
11. Generate website";

/// Number of menu entries, including exit.
const MENU_ENTRIES: usize = 12;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    if let Some(parent) = cli.db.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = reelrack_db::open_database(&cli.db)
        .map_err(|e| CliError::Database(e.to_string()))?;

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::Runtime(e.to_string()))?;

    println!(
        "{}",
        "********** My Movies Database **********".if_supports_color(Stdout, |t| t.bold()),
    );

    loop {
        println!("{MENU}");
        let input = prompt::read_line(&format!("\nEnter choice (0-{}): ", MENU_ENTRIES - 1));

        let choice: usize = match input.parse() {
            Ok(n) => n,
            Err(_) => {
                println!(
                    "Invalid choice, please select a number between 0 and {}",
                    MENU_ENTRIES - 1
                );
                continue;
            }
        };

        if choice == 0 {
            println!("Bye!");
            return Ok(());
        }
        if choice >= MENU_ENTRIES {
            println!(
                "Invalid choice, please select a number between 0 and {}",
                MENU_ENTRIES - 1
            );
            continue;
        }

        // Each action works on a fresh snapshot; a failed read means "no
        // data available", not an empty collection.
        let snapshot = match reelrack_db::get_all_movies(&conn) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::error!("snapshot read failed: {e}");
                println!("The database failed to load the requested data");
                continue;
            }
        };

        match choice {
            1 => actions::list_movies(&snapshot),
            2 => actions::add_movie(&conn, &snapshot, &rt),
            3 => actions::delete_movie(&conn, &snapshot),
            4 => actions::update_movie(&conn, &snapshot),
            5 => actions::stats(&snapshot),
            6 => actions::random_movie(&snapshot),
            7 => actions::search_movies(&snapshot),
            8 => actions::sorted_by_rating(&snapshot),
            9 => actions::sorted_by_year(&snapshot),
            10 => actions::filter(&snapshot),
            11 => actions::generate_website(&snapshot, &cli.static_dir),
            _ => unreachable!("choice bounds checked above"),
        }
    }
}
