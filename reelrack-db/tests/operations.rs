use reelrack_core::Movie;
use reelrack_db::*;

fn test_movie(title: &str, year: i32, rating: f64) -> Movie {
    Movie::new(title, year, rating, Some(format!("http://posters/{title}.jpg"))).unwrap()
}

#[test]
fn insert_then_read_round_trips() {
    let conn = open_memory().unwrap();
    let movie = test_movie("Titanic", 1997, 7.9);
    insert_movie(&conn, &movie).unwrap();

    let snapshot = get_all_movies(&conn).unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0], movie);
}

#[test]
fn duplicate_insert_is_refused() {
    let conn = open_memory().unwrap();
    let movie = test_movie("Titanic", 1997, 7.9);
    insert_movie(&conn, &movie).unwrap();

    let err = insert_movie(&conn, &movie).unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { ref title } if title == "Titanic"));

    // The original row is untouched
    let snapshot = get_all_movies(&conn).unwrap();
    assert_eq!(snapshot.len(), 1);
}

#[test]
fn delete_removes_row() {
    let conn = open_memory().unwrap();
    insert_movie(&conn, &test_movie("Troy", 2004, 7.2)).unwrap();

    assert!(delete_movie(&conn, "Troy").unwrap());
    assert!(get_all_movies(&conn).unwrap().is_empty());
}

#[test]
fn delete_of_absent_title_is_a_noop() {
    let conn = open_memory().unwrap();
    assert!(!delete_movie(&conn, "Nope").unwrap());
}

#[test]
fn delete_is_exact_match() {
    let conn = open_memory().unwrap();
    insert_movie(&conn, &test_movie("Troy", 2004, 7.2)).unwrap();

    assert!(!delete_movie(&conn, "troy").unwrap());
    assert_eq!(get_all_movies(&conn).unwrap().len(), 1);
}

#[test]
fn update_changes_only_the_rating() {
    let conn = open_memory().unwrap();
    let movie = test_movie("X", 2001, 8.1);
    insert_movie(&conn, &movie).unwrap();

    assert!(update_rating(&conn, "X", 9.3).unwrap());

    let updated = find_movie(&conn, "X").unwrap().unwrap();
    assert_eq!(updated.rating, 9.3);
    assert_eq!(updated.year, movie.year);
    assert_eq!(updated.poster_url, movie.poster_url);
}

#[test]
fn update_of_absent_title_reports_no_match() {
    let conn = open_memory().unwrap();
    assert!(!update_rating(&conn, "Nope", 5.0).unwrap());
}
