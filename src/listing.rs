//! Plain-text rendering of the book collection for the terminal shell.

use bookhunt_common::display::{format_rating, format_status, or_missing};
use bookhunt_db::Book;

const HEADERS: [&str; 7] = ["ID", "Title", "Author", "Genre", "Year", "Rating", "Status"];

/// Heading line shown above the table.
pub fn collection_heading(count: usize) -> String {
    let noun = if count == 1 { "book" } else { "books" };
    format!("Your Book Collection ({} {})", count, noun)
}

fn row_cells(book: &Book) -> [String; 7] {
    [
        book.id.to_string(),
        book.title.clone(),
        book.author.clone(),
        or_missing(book.genre.as_deref()),
        or_missing(book.year),
        format_rating(book.rating),
        format_status(&book.status),
    ]
}

/// Render books as an aligned table, one row per book in the given order.
pub fn render_table(books: &[Book]) -> String {
    let rows: Vec<[String; 7]> = books.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.iter().map(|h| h.to_string()), &widths);
    push_line(&mut out, widths.iter().map(|w| "-".repeat(*w)), &widths);
    for row in rows {
        push_line(&mut out, row.into_iter(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize; 7]) {
    let line = cells
        .zip(widths.iter())
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
