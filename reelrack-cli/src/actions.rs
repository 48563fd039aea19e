//! One handler per menu entry.
//!
//! Each handler receives the snapshot read by the menu loop, performs its
//! prompts and view calls, and reports every outcome to the user; nothing
//! here propagates an error back to the loop.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelrack_core::{
    MAX_RATING, MAX_YEAR, MIN_RATING, MIN_YEAR, Movie, validate_title, views,
};
use reelrack_db::Connection;
use reelrack_omdb::{LookupError, OmdbClient};

use crate::prompt;

/// Menu 1: list every movie with year and rating.
pub(crate) fn list_movies(snapshot: &[Movie]) {
    println!("\n{} movies in total", snapshot.len());
    for movie in snapshot {
        println!("{} ({}): {}", movie.title, movie.year, movie.rating);
    }
    prompt::pause();
}

/// Menu 2: look up a new title with the metadata provider and insert it.
pub(crate) fn add_movie(conn: &Connection, snapshot: &[Movie], rt: &tokio::runtime::Runtime) {
    let title = loop {
        let input = prompt::read_line("Enter new movie name: ");
        match validate_title(&input) {
            Ok(()) => break input,
            Err(e) => println!("{e}"),
        }
    };

    if snapshot.iter().any(|m| m.title == title) {
        println!("Movie \"{title}\" already exists!");
        prompt::pause();
        return;
    }

    let api_key = match reelrack_omdb::load_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{} {}", glyph_err(), e);
            eprintln!();
            eprintln!("Set the OMDB_API_KEY environment variable, or add");
            eprintln!("[omdb] api_key = \"...\" to the credentials file.");
            prompt::pause();
            return;
        }
    };

    let client = match OmdbClient::new(api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {}", glyph_err(), e);
            prompt::pause();
            return;
        }
    };

    let pb = spinner();
    pb.set_message(format!("Looking up \"{title}\"..."));
    let looked_up = rt.block_on(client.lookup(&title));
    pb.finish_and_clear();

    let info = match looked_up {
        Ok(info) => info,
        Err(LookupError::NotFound { title }) => {
            println!("Movie \"{title}\" was not found");
            prompt::pause();
            return;
        }
        Err(e) => {
            warn!("lookup failed: {e}");
            println!("API service not available at the moment, try again later");
            prompt::pause();
            return;
        }
    };

    // The provider's canonical title may collide even when the queried one
    // did not.
    if snapshot.iter().any(|m| m.title == info.title) {
        println!("Movie \"{}\" already exists!", info.title);
        prompt::pause();
        return;
    }

    let movie = match Movie::new(info.title, info.year, info.rating, info.poster_url) {
        Ok(movie) => movie,
        Err(e) => {
            println!("{} Provider returned an invalid record: {e}", glyph_warn());
            prompt::pause();
            return;
        }
    };

    match reelrack_db::insert_movie(conn, &movie) {
        Ok(()) => println!(
            "{} Movie '{}' added successfully.",
            glyph_ok(),
            movie.title
        ),
        Err(e) => eprintln!("{} {}", glyph_err(), e),
    }
    prompt::pause();
}

/// Menu 3: delete a movie by exact title.
pub(crate) fn delete_movie(conn: &Connection, snapshot: &[Movie]) {
    let title = prompt::read_line("Enter movie name to delete: ");
    if !snapshot.iter().any(|m| m.title == title) {
        println!("Movie \"{title}\" doesn't exist!");
        prompt::pause();
        return;
    }

    match reelrack_db::delete_movie(conn, &title) {
        Ok(_) => println!("{} Movie '{title}' deleted successfully.", glyph_ok()),
        Err(e) => eprintln!("{} {}", glyph_err(), e),
    }
    prompt::pause();
}

/// Menu 4: rewrite the rating of an existing movie.
pub(crate) fn update_movie(conn: &Connection, snapshot: &[Movie]) {
    let title = prompt::read_line("Enter movie name: ");
    if !snapshot.iter().any(|m| m.title == title) {
        println!("Movie \"{title}\" does not exist!");
        prompt::pause();
        return;
    }

    let rating = prompt::prompt_bounded("Enter new movie rating: ", MIN_RATING, MAX_RATING);

    match reelrack_db::update_rating(conn, &title, rating) {
        Ok(_) => println!("{} Movie '{title}' updated successfully.", glyph_ok()),
        Err(e) => eprintln!("{} {}", glyph_err(), e),
    }
    prompt::pause();
}

/// Menu 5: average, median, best, and worst ratings.
pub(crate) fn stats(snapshot: &[Movie]) {
    match views::stats(snapshot) {
        Ok(s) => {
            println!("Average rating: {:.1}", s.average);
            println!("Median rating: {:.1}", s.median);
            println!("Best movie: {}, {}", s.best.title, s.best.rating);
            println!("Worst movie: {}, {}", s.worst.title, s.worst.rating);
        }
        Err(e) => println!("{e}"),
    }
    prompt::pause();
}

/// Menu 6: a uniformly random pick.
pub(crate) fn random_movie(snapshot: &[Movie]) {
    match views::random_pick(snapshot) {
        Ok(movie) => println!(
            "\nYour movie for tonight: {}, it's rated {}",
            movie.title, movie.rating
        ),
        Err(e) => println!("{e}"),
    }
    prompt::pause();
}

/// Menu 7: case-insensitive substring search.
pub(crate) fn search_movies(snapshot: &[Movie]) {
    let query = prompt::read_line("Enter part of movie name: ");
    println!();
    for movie in views::search(snapshot, &query) {
        println!("{}, {}", movie.title, movie.rating);
    }
    prompt::pause();
}

/// Menu 8: all movies, highest rating first.
pub(crate) fn sorted_by_rating(snapshot: &[Movie]) {
    println!();
    print_listing(&views::sort_by_rating(snapshot));
    prompt::pause();
}

/// Menu 9: all movies by year, direction chosen by the user.
pub(crate) fn sorted_by_year(snapshot: &[Movie]) {
    let latest_first = prompt::prompt_yes_no("Do you want the latest movies first? (Y/N) ");
    println!();
    print_listing(&views::sort_by_year(snapshot, latest_first));
    prompt::pause();
}

/// Menu 10: rating floor plus inclusive year window, all optional.
pub(crate) fn filter(snapshot: &[Movie]) {
    let min_rating = prompt::prompt_bounded_or_default(
        "Enter minimum rating (leave blank for no minimum rating): ",
        MIN_RATING,
        MAX_RATING,
        MIN_RATING,
    );
    let start_year = prompt::prompt_bounded_int_or_default(
        "Enter start year (leave blank for no start year): ",
        MIN_YEAR,
        MAX_YEAR,
        MIN_YEAR,
    );
    let end_year = prompt::prompt_bounded_int_or_default(
        "Enter end year (leave blank for no end year): ",
        MIN_YEAR,
        MAX_YEAR,
        MAX_YEAR,
    );

    println!();
    print_listing(&views::filter_movies(
        snapshot,
        min_rating,
        start_year,
        end_year,
    ));
    prompt::pause();
}

/// Menu 11: write the static gallery.
pub(crate) fn generate_website(snapshot: &[Movie], static_dir: &Path) {
    match reelrack_web::generate_website(snapshot, static_dir) {
        Ok(target) => println!(
            "{} Website was generated successfully: {}",
            glyph_ok(),
            target.display()
        ),
        Err(e) => eprintln!("{} {}", glyph_err(), e),
    }
    prompt::pause();
}

fn print_listing(movies: &[Movie]) {
    for movie in movies {
        println!("{} ({}): {}", movie.title, movie.year, movie.rating);
    }
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("/-\\|"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn glyph_ok() -> String {
    format!("{}", "\u{2714}".if_supports_color(Stdout, |t| t.green()))
}

fn glyph_err() -> String {
    format!("{}", "\u{2718}".if_supports_color(Stdout, |t| t.red()))
}

fn glyph_warn() -> String {
    format!("{}", "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()))
}
