//! Plain-text rendering of the dashboard tables.
//!
//! The column constants double as the serialization contract: each name
//! matches the serde rename on the corresponding row struct, and the
//! tests pin the two together.

use crate::stats::{AlbumYearCount, MonthlyTopAlbum, TOP_ALBUMS_PER_MONTH};

/// Columns of the albums-per-year table, in print order.
pub const ALBUMS_BY_YEAR_COLUMNS: [&str; 2] = ["Year", "Album Count"];

/// Columns of the monthly top-albums table, in print order.
pub const TOP_ALBUMS_COLUMNS: [&str; 5] = ["Month", "Rank", "Artist", "Album", "Total Plays"];

const EMPTY_TABLE: &str = "(no data)";

/// Renders the distinct-albums-per-year table.
pub fn render_albums_by_year(rows: &[AlbumYearCount]) -> String {
    let mut lines = vec!["Total Album Releases by Year".to_string()];

    if rows.is_empty() {
        lines.push(EMPTY_TABLE.to_string());
        return lines.join("\n");
    }

    let header = format!(
        "{:>4} | {:>11}",
        ALBUMS_BY_YEAR_COLUMNS[0], ALBUMS_BY_YEAR_COLUMNS[1]
    );
    let rule = "-".repeat(header.len());
    lines.push(header);
    lines.push(rule);
    for row in rows {
        lines.push(format!("{:>4} | {:>11}", row.year, row.album_count));
    }

    lines.join("\n")
}

/// Renders the monthly top-albums table for the given year.
///
/// Rows must already be in month-then-rank order, as produced by
/// [`top_albums_current_year`]. A rule line is inserted before each
/// month's rank-1 row after the first, separating the month groups.
///
/// [`top_albums_current_year`]: crate::stats::top_albums_current_year
pub fn render_top_albums(reference_year: i32, rows: &[MonthlyTopAlbum]) -> String {
    let mut lines = vec![format!(
        "Top {} Albums of {} (by Total Plays)",
        TOP_ALBUMS_PER_MONTH, reference_year
    )];

    if rows.is_empty() {
        lines.push(EMPTY_TABLE.to_string());
        return lines.join("\n");
    }

    let month_width = column_width(TOP_ALBUMS_COLUMNS[0], rows.iter().map(|r| r.month.name()));
    let artist_width = column_width(TOP_ALBUMS_COLUMNS[2], rows.iter().map(|r| r.artist.as_str()));
    let album_width = column_width(TOP_ALBUMS_COLUMNS[3], rows.iter().map(|r| r.album.as_str()));

    let header = format!(
        "{:<month_width$} | {:>4} | {:<artist_width$} | {:<album_width$} | {:>11}",
        TOP_ALBUMS_COLUMNS[0],
        TOP_ALBUMS_COLUMNS[1],
        TOP_ALBUMS_COLUMNS[2],
        TOP_ALBUMS_COLUMNS[3],
        TOP_ALBUMS_COLUMNS[4],
    );
    let rule = "-".repeat(header.len());
    lines.push(header);
    lines.push(rule.clone());

    for (index, row) in rows.iter().enumerate() {
        if row.rank == 1 && index > 0 {
            lines.push(rule.clone());
        }
        lines.push(format!(
            "{:<month_width$} | {:>4} | {:<artist_width$} | {:<album_width$} | {:>11}",
            row.month.name(),
            row.rank,
            row.artist,
            row.album,
            row.total_plays,
        ));
    }

    lines.join("\n")
}

/// Width of a column: the widest value, but never narrower than the header.
fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(str::len).fold(header.len(), usize::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Month;

    fn year_row(year: i32, album_count: usize) -> AlbumYearCount {
        AlbumYearCount { year, album_count }
    }

    fn month_row(month: Month, rank: u32, artist: &str, album: &str, plays: u64) -> MonthlyTopAlbum {
        MonthlyTopAlbum {
            month,
            rank,
            artist: artist.to_string(),
            album: album.to_string(),
            total_plays: plays,
        }
    }

    #[test]
    fn test_yearly_columns_match_serialized_names() {
        let value = serde_json::to_value(year_row(2024, 3)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), ALBUMS_BY_YEAR_COLUMNS.len());
        for column in ALBUMS_BY_YEAR_COLUMNS {
            assert!(object.contains_key(column), "missing column {column}");
        }
    }

    #[test]
    fn test_monthly_columns_match_serialized_names() {
        let value = serde_json::to_value(month_row(Month::March, 1, "A", "X", 15)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), TOP_ALBUMS_COLUMNS.len());
        for column in TOP_ALBUMS_COLUMNS {
            assert!(object.contains_key(column), "missing column {column}");
        }
        assert_eq!(object["Month"], "March");
    }

    #[test]
    fn test_yearly_table_lists_rows_in_given_order() {
        let text = render_albums_by_year(&[year_row(2023, 2), year_row(2024, 1)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Total Album Releases by Year");
        assert!(lines[1].contains("Year"));
        assert!(lines[1].contains("Album Count"));
        assert!(lines[2].starts_with('-'));
        assert!(lines[3].starts_with("2023"));
        assert!(lines[4].starts_with("2024"));
    }

    #[test]
    fn test_monthly_table_rules_off_each_month_group() {
        let rows = vec![
            month_row(Month::March, 1, "A", "X", 15),
            month_row(Month::March, 2, "B", "Y", 9),
            month_row(Month::July, 1, "C", "Z", 4),
        ];
        let text = render_top_albums(2024, &rows);
        let rules = text.lines().filter(|line| line.starts_with('-')).count();
        // One under the header, one before July's first row.
        assert_eq!(rules, 2);

        let lines: Vec<&str> = text.lines().collect();
        let july = lines.iter().position(|l| l.starts_with("July")).unwrap();
        assert!(lines[july - 1].starts_with('-'));
    }

    #[test]
    fn test_monthly_table_title_names_the_year() {
        let rows = vec![month_row(Month::May, 1, "A", "X", 1)];
        let text = render_top_albums(2026, &rows);
        assert!(text.starts_with("Top 5 Albums of 2026 (by Total Plays)"));
    }

    #[test]
    fn test_empty_tables_render_placeholder() {
        assert!(render_albums_by_year(&[]).contains(EMPTY_TABLE));
        assert!(render_top_albums(2024, &[]).contains(EMPTY_TABLE));
    }

    #[test]
    fn test_columns_are_aligned() {
        let rows = vec![
            month_row(Month::September, 1, "Long Artist Name", "X", 120),
            month_row(Month::September, 2, "B", "Long Album Title", 9),
        ];
        let text = render_top_albums(2024, &rows);
        let positions: Vec<usize> = text
            .lines()
            .filter(|line| line.contains(" | "))
            .map(|line| line.find(" | ").unwrap())
            .collect();
        assert!(positions.len() >= 3);
        assert!(positions.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
