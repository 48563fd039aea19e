use reelrack_core::Movie;
use reelrack_db::*;

fn seed(conn: &rusqlite::Connection) {
    for (title, year, rating) in [("Caca1", 2001, 8.1), ("Caca2", 2002, 8.2), ("Caca3", 2003, 8.3)]
    {
        let movie = Movie::new(title, year, rating, None).unwrap();
        insert_movie(conn, &movie).unwrap();
    }
}

#[test]
fn snapshot_preserves_insertion_order() {
    let conn = open_memory().unwrap();
    seed(&conn);

    let titles: Vec<String> = get_all_movies(&conn)
        .unwrap()
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(titles, ["Caca1", "Caca2", "Caca3"]);
}

#[test]
fn find_movie_is_exact_and_case_sensitive() {
    let conn = open_memory().unwrap();
    seed(&conn);

    assert!(find_movie(&conn, "Caca1").unwrap().is_some());
    assert!(find_movie(&conn, "caca1").unwrap().is_none());
    assert!(find_movie(&conn, "Caca").unwrap().is_none());
}

#[test]
fn movie_count_tracks_rows() {
    let conn = open_memory().unwrap();
    assert_eq!(movie_count(&conn).unwrap(), 0);
    seed(&conn);
    assert_eq!(movie_count(&conn).unwrap(), 3);
    delete_movie(&conn, "Caca2").unwrap();
    assert_eq!(movie_count(&conn).unwrap(), 2);
}

#[test]
fn poster_url_round_trips_as_null_or_value() {
    let conn = open_memory().unwrap();
    let with = Movie::new("With", 2000, 5.0, Some("http://p/x.jpg".to_string())).unwrap();
    let without = Movie::new("Without", 2001, 6.0, None).unwrap();
    insert_movie(&conn, &with).unwrap();
    insert_movie(&conn, &without).unwrap();

    assert_eq!(
        find_movie(&conn, "With").unwrap().unwrap().poster_url,
        Some("http://p/x.jpg".to_string())
    );
    assert_eq!(find_movie(&conn, "Without").unwrap().unwrap().poster_url, None);
}
