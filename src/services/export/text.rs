//! Plain-text listing

use std::fmt::Write;

use super::ExportTable;

/// UTF-8 byte order mark, written before the title
const BOM: char = '\u{FEFF}';

pub(super) fn render(table: &ExportTable) -> Vec<u8> {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(&table.title);
    out.push('\n');
    out.push_str(&table.count_line);
    out.push_str("\n\n");

    for (index, row) in table.rows.iter().enumerate() {
        // Writing to a String never fails
        let _ = writeln!(out, "{}. {}", index + 1, row.title);
        let _ = writeln!(out, "   Year: {}", row.year);
        let _ = writeln!(out, "   Genre: {}", row.genre);
        let _ = writeln!(out, "   Price: {}", row.price);
        if let Some(duration) = &row.duration {
            let _ = writeln!(out, "   Duration: {}", duration);
        }
        out.push('\n');
    }

    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::export::tests::sample;

    fn rendered(movies: &[crate::domain::Movie]) -> String {
        let bytes = render(&ExportTable::from_movies(movies));
        String::from_utf8(bytes).expect("utf-8 output")
    }

    #[test]
    fn test_starts_with_bom() {
        let text = rendered(&sample());
        assert!(text.starts_with('\u{FEFF}'));
        assert_eq!(&text.as_bytes()[..3], &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn test_numbered_blocks_follow_input_order() {
        let text = rendered(&sample());
        let brat = text.find("1. Брат").expect("first block");
        let stalker = text.find("2. Сталкер").expect("second block");
        let moscow = text.find("3. Москва слезам не верит").expect("third block");
        assert!(brat < stalker && stalker < moscow);
        assert!(text.contains("   Genre: мелодрама"));
        assert!(text.contains("   Duration: 101 min"));
        assert!(!text.contains("4. "));
    }

    #[test]
    fn test_empty_listing_has_header_only() {
        let text = rendered(&[]);
        assert!(text.contains("Movies found: 0"));
        assert!(!text.contains("1. "));
    }
}
