//! Static HTML gallery generation for the movie collection.
//!
//! Takes a collection snapshot and writes `index.html` under the static
//! directory. A template file with placeholder keywords can restyle the
//! page; without one the built-in default template is used. An empty
//! snapshot produces an empty grid, never an error.

pub mod error;

pub use error::RenderError;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use reelrack_core::Movie;

/// Placeholder for the page title in the template.
pub const TITLE_KEYWORD: &str = "__TEMPLATE_TITLE__";
/// Placeholder for the movie grid in the template.
pub const MOVIE_GRID_KEYWORD: &str = "__TEMPLATE_MOVIE_GRID__";
/// Template filename looked up under the static directory.
pub const TEMPLATE_FILENAME: &str = "index_template.html";
/// Output filename written under the static directory.
pub const TARGET_FILENAME: &str = "index.html";

const PAGE_TITLE: &str = "My Movie Collection";

const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8"/>
    <title>__TEMPLATE_TITLE__</title>
    <style>
        body { font-family: sans-serif; background: #f4f4f4; margin: 2em; }
        h1 { text-align: center; }
        .movie-grid { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 1.5em; justify-content: center; }
        .movie { width: 160px; text-align: center; }
        .movie-poster { width: 128px; height: 193px; object-fit: cover; box-shadow: 0 2px 8px rgba(0,0,0,0.3); }
        .movie-title { font-weight: bold; margin-top: 0.5em; }
        .movie-year { color: #666; }
    </style>
</head>
<body>
    <h1>__TEMPLATE_TITLE__</h1>
    <ol class="movie-grid">__TEMPLATE_MOVIE_GRID__
    </ol>
</body>
</html>
"#;

/// Generate the website from a snapshot and write it under `static_dir`.
///
/// Reads `<static_dir>/index_template.html` when present, otherwise the
/// built-in template. Returns the path of the written `index.html`.
pub fn generate_website(snapshot: &[Movie], static_dir: &Path) -> Result<PathBuf, RenderError> {
    let template = load_template(static_dir)?;
    if !template.contains(MOVIE_GRID_KEYWORD) {
        return Err(RenderError::Template(format!(
            "template is missing the {MOVIE_GRID_KEYWORD} placeholder"
        )));
    }

    let page = template
        .replace(TITLE_KEYWORD, PAGE_TITLE)
        .replace(MOVIE_GRID_KEYWORD, &format_movie_grid(snapshot));

    fs::create_dir_all(static_dir)?;
    let target = static_dir.join(TARGET_FILENAME);
    fs::write(&target, page)?;
    debug!("wrote {} movies to {}", snapshot.len(), target.display());
    Ok(target)
}

/// Convert the snapshot into the `<li>` grid entries for the template.
pub fn format_movie_grid(snapshot: &[Movie]) -> String {
    let mut output = String::new();
    for movie in snapshot {
        let poster = movie.poster_url.as_deref().unwrap_or("");
        output.push('\n');
        output.push_str("\t\t<li>\n");
        output.push_str("\t\t\t<div class=\"movie\">\n");
        output.push_str(&format!(
            "\t\t\t\t<img class=\"movie-poster\" src=\"{}\" title=\"\"/>\n",
            escape_html(poster)
        ));
        output.push_str(&format!(
            "\t\t\t\t<div class=\"movie-title\">{}</div>\n",
            escape_html(&movie.title)
        ));
        output.push_str(&format!(
            "\t\t\t\t<div class=\"movie-year\">{}</div>\n",
            movie.year
        ));
        output.push_str("\t\t\t</div>\n");
        output.push_str("\t\t</li>\n");
    }
    output
}

fn load_template(static_dir: &Path) -> Result<String, RenderError> {
    let path = static_dir.join(TEMPLATE_FILENAME);
    if path.exists() {
        Ok(fs::read_to_string(&path)?)
    } else {
        Ok(DEFAULT_TEMPLATE.to_string())
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, year: i32, poster: Option<&str>) -> Movie {
        Movie::new(title, year, 7.0, poster.map(String::from)).unwrap()
    }

    #[test]
    fn grid_contains_title_year_and_poster() {
        let grid = format_movie_grid(&[movie("Troy", 2004, Some("http://p/troy.jpg"))]);
        assert!(grid.contains("<div class=\"movie-title\">Troy</div>"));
        assert!(grid.contains("<div class=\"movie-year\">2004</div>"));
        assert!(grid.contains("src=\"http://p/troy.jpg\""));
    }

    #[test]
    fn grid_escapes_markup_in_titles() {
        let grid = format_movie_grid(&[movie("<b>Bold & Brash</b>", 2000, None)]);
        assert!(grid.contains("&lt;b&gt;Bold &amp; Brash&lt;/b&gt;"));
        assert!(!grid.contains("<b>"));
    }

    #[test]
    fn empty_snapshot_yields_empty_grid() {
        assert_eq!(format_movie_grid(&[]), "");
    }

    #[test]
    fn generate_writes_index_html() {
        let dir = tempfile::tempdir().unwrap();
        let target = generate_website(&[movie("Troy", 2004, None)], dir.path()).unwrap();

        assert_eq!(target, dir.path().join(TARGET_FILENAME));
        let page = std::fs::read_to_string(&target).unwrap();
        assert!(page.contains("Troy"));
        assert!(page.contains(PAGE_TITLE));
        assert!(!page.contains(MOVIE_GRID_KEYWORD));
        assert!(!page.contains(TITLE_KEYWORD));
    }

    #[test]
    fn generate_succeeds_on_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let target = generate_website(&[], dir.path()).unwrap();
        assert!(target.exists());
    }

    #[test]
    fn custom_template_is_used_when_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(TEMPLATE_FILENAME),
            "<html>__TEMPLATE_TITLE__|__TEMPLATE_MOVIE_GRID__</html>",
        )
        .unwrap();

        let target = generate_website(&[], dir.path()).unwrap();
        let page = std::fs::read_to_string(&target).unwrap();
        assert!(page.starts_with("<html>"));
        assert!(page.contains(PAGE_TITLE));
    }

    #[test]
    fn template_without_grid_placeholder_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(TEMPLATE_FILENAME), "<html>no grid</html>").unwrap();

        assert!(matches!(
            generate_website(&[], dir.path()),
            Err(RenderError::Template(_))
        ));
    }
}
