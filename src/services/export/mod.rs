//! Export Formatter - renders an already filtered catalog listing
//!
//! The handed-in sequence is never re-filtered or re-sorted: every encoder
//! reads the same [`ExportTable`], so rows and values match across formats.

mod docx;
mod pdf;
mod text;

use std::path::PathBuf;

use crate::domain::{DomainError, Movie};

pub const COLUMNS: [&str; 5] = ["Title", "Year", "Genre", "Price", "Duration"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Pdf,
    Document,
}

impl ExportFormat {
    /// Parses the `export` query parameter (`txt`, `pdf`, `docx`)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "txt" | "text" => Some(ExportFormat::Text),
            "pdf" => Some(ExportFormat::Pdf),
            "docx" | "document" => Some(ExportFormat::Document),
            _ => None,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Document => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Document => "docx",
        }
    }
}

/// Rendering settings that come from configuration
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// TrueType font covering the catalog's script (PDF only)
    pub font_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub title: String,
    pub year: String,
    pub genre: String,
    pub price: String,
    pub duration: Option<String>,
}

impl ExportRow {
    fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.release_year.to_string(),
            genre: movie.genre.clone(),
            price: movie.price.to_string(),
            duration: (movie.duration > 0).then(|| format!("{} min", movie.duration)),
        }
    }

    pub fn cells(&self) -> [&str; 5] {
        [
            &self.title,
            &self.year,
            &self.genre,
            &self.price,
            self.duration.as_deref().unwrap_or(""),
        ]
    }
}

/// Format-neutral view of the listing shared by all encoders
#[derive(Debug, Clone)]
pub struct ExportTable {
    pub title: String,
    pub count_line: String,
    pub rows: Vec<ExportRow>,
}

impl ExportTable {
    pub fn from_movies(movies: &[Movie]) -> Self {
        Self {
            title: "Movie catalog".to_string(),
            count_line: format!("Movies found: {}", movies.len()),
            rows: movies.iter().map(ExportRow::from_movie).collect(),
        }
    }
}

pub fn export(
    movies: &[Movie],
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<ExportPayload, DomainError> {
    let table = ExportTable::from_movies(movies);

    let bytes = match format {
        ExportFormat::Text => text::render(&table),
        ExportFormat::Pdf => pdf::render(&table, options)?,
        ExportFormat::Document => docx::render(&table)?,
    };

    tracing::info!(
        format = format.extension(),
        rows = table.rows.len(),
        bytes = bytes.len(),
        "Catalog exported"
    );

    Ok(ExportPayload {
        bytes,
        content_type: format.content_type(),
        filename: format!("movies.{}", format.extension()),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn movie(id: i32, title: &str, year: i32, genre: &str, price: i32) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            release_year: year,
            genre: genre.to_string(),
            duration: 100 + id,
            price,
            poster: None,
            description: String::new(),
            trailer: None,
        }
    }

    pub(crate) fn sample() -> Vec<Movie> {
        vec![
            movie(3, "Брат", 1997, "криминал", 300),
            movie(1, "Сталкер", 1979, "драма", 450),
            movie(2, "Москва слезам не верит", 1980, "мелодрама", 250),
        ]
    }

    #[test]
    fn test_table_keeps_input_order_and_values() {
        let movies = sample();
        let table = ExportTable::from_movies(&movies);

        assert_eq!(table.rows.len(), movies.len());
        assert_eq!(table.count_line, "Movies found: 3");
        let titles: Vec<&str> = table.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Брат", "Сталкер", "Москва слезам не верит"]);
        assert_eq!(
            table.rows[1].cells(),
            ["Сталкер", "1979", "драма", "450", "101 min"]
        );
    }

    #[test]
    fn test_non_positive_duration_is_omitted() {
        let mut m = movie(1, "Short", 2001, "doc", 10);
        m.duration = 0;
        let row = ExportRow::from_movie(&m);
        assert_eq!(row.duration, None);
        assert_eq!(row.cells()[4], "");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(ExportFormat::parse("txt"), Some(ExportFormat::Text));
        assert_eq!(ExportFormat::parse("PDF"), Some(ExportFormat::Pdf));
        assert_eq!(ExportFormat::parse("docx"), Some(ExportFormat::Document));
        assert_eq!(ExportFormat::parse("xlsx"), None);
    }

    #[test]
    fn test_every_format_accepts_empty_listing() {
        let options = ExportOptions::default();
        for format in [ExportFormat::Text, ExportFormat::Pdf, ExportFormat::Document] {
            let payload = export(&[], format, &options).expect("empty export");
            assert!(!payload.bytes.is_empty());
            assert_eq!(payload.content_type, format.content_type());
            assert_eq!(payload.filename, format!("movies.{}", format.extension()));
        }
    }
}
