//! Server-rendered HTML views.
//!
//! Every page shares one layout with the site navigation. All user-provided
//! text (book fields, flash messages, echoed queries) goes through
//! [`escape`] before it reaches a page.

use libris_core::models::Book;

const SITE_NAME: &str = "Libris";

/// Replace the HTML-significant characters in text interpolated into pages.
pub fn escape(text: &str) -> String {
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

/// Wrap page content in the shared layout.
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - {site}</title>
</head>
<body>
<nav>
<a href="/">Home</a> |
<a href="/books">All Books</a> |
<a href="/books/add">Add Book</a> |
<a href="/books/remove">Remove Book</a> |
<a href="/search">Search</a> |
<a href="/about">About</a>
</nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        site = SITE_NAME,
        body = body,
    )
}

fn flash_banner(message: Option<&str>) -> String {
    match message {
        Some(msg) => format!("<p class=\"flash\">{}</p>\n", escape(msg)),
        None => String::new(),
    }
}

fn book_table(books: &[Book]) -> String {
    let rows: String = books
        .iter()
        .map(|book| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                book.id,
                escape(&book.name),
                escape(&book.author),
                escape(&book.year),
            )
        })
        .collect();

    format!(
        "<table>\n\
         <thead><tr><th>Id</th><th>Name</th><th>Author</th><th>Year</th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n\
         </table>",
        rows = rows,
    )
}

pub fn home() -> String {
    layout(
        "Home",
        "<h1>Welcome to Libris</h1>\n\
         <p>A small catalog for keeping track of books. Add books, remove them\n\
         by name, browse the full list, or search by name or author.</p>",
    )
}

pub fn about() -> String {
    layout(
        "About",
        "<h1>About</h1>\n\
         <p>Libris keeps its catalog in memory: nothing is written to disk and\n\
         the list starts empty every time the server starts.</p>",
    )
}

pub fn book_list(books: &[Book]) -> String {
    let body = if books.is_empty() {
        "<h1>All Books</h1>\n<p>The catalog is empty.</p>".to_string()
    } else {
        format!("<h1>All Books</h1>\n{}", book_table(books))
    };
    layout("All Books", &body)
}

pub fn add_book_form(flash: Option<&str>) -> String {
    let body = format!(
        "{flash}<h1>Add Book</h1>\n\
         <form method=\"post\" action=\"/books/add\">\n\
         <label>Name <input type=\"text\" name=\"name\"></label><br>\n\
         <label>Author <input type=\"text\" name=\"author\"></label><br>\n\
         <label>Year <input type=\"text\" name=\"year\"></label><br>\n\
         <button type=\"submit\">Add</button>\n\
         </form>",
        flash = flash_banner(flash),
    );
    layout("Add Book", &body)
}

pub fn remove_book_form(flash: Option<&str>) -> String {
    let body = format!(
        "{flash}<h1>Remove Book</h1>\n\
         <p>Removal matches the name exactly, including case.</p>\n\
         <form method=\"post\" action=\"/books/remove\">\n\
         <label>Name <input type=\"text\" name=\"name\"></label><br>\n\
         <button type=\"submit\">Remove</button>\n\
         </form>",
        flash = flash_banner(flash),
    );
    layout("Remove Book", &body)
}

pub fn search_home() -> String {
    layout(
        "Search",
        "<h1>Search</h1>\n\
         <form method=\"get\" action=\"/search/name\">\n\
         <label>Name <input type=\"text\" name=\"name\"></label>\n\
         <button type=\"submit\">Search by name</button>\n\
         </form>\n\
         <form method=\"get\" action=\"/search/author\">\n\
         <label>Author <input type=\"text\" name=\"author\"></label>\n\
         <button type=\"submit\">Search by author</button>\n\
         </form>",
    )
}

pub fn search_results(field: &str, query: &str, books: &[Book]) -> String {
    let heading = format!(
        "<h1>Search Results</h1>\n<p>Books whose {} equals \"{}\":</p>\n",
        escape(field),
        escape(query),
    );
    let body = if books.is_empty() {
        format!("{}<p>No matching books found.</p>", heading)
    } else {
        format!("{}{}", heading, book_table(books))
    };
    layout("Search Results", &body)
}

pub fn not_found() -> String {
    layout("Not Found", "<h1>Page not found</h1>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book(id: u64, name: &str, author: &str, year: &str) -> Book {
        Book {
            id,
            year: year.to_string(),
            name: name.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn escape_replaces_html_significant_characters() {
        assert_eq!(
            escape("<script>alert(\"x&y\")</script>"),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("O'Brien"), "O&#39;Brien");
    }

    #[test]
    fn escape_leaves_plain_text_untouched_including_unicode() {
        assert_eq!(escape("Dune Messiah"), "Dune Messiah");
        assert_eq!(escape("S\u{0142}awomir Mro\u{017c}ek"), "S\u{0142}awomir Mro\u{017c}ek");
    }

    #[test]
    fn book_list_shows_empty_state() {
        let page = book_list(&[]);
        assert!(page.contains("The catalog is empty."));
        assert!(!page.contains("<table>"));
    }

    #[test]
    fn book_list_renders_one_row_per_book() {
        let books = vec![
            sample_book(1, "Dune", "Frank Herbert", "1965"),
            sample_book(2, "Foundation", "Isaac Asimov", "1951"),
        ];
        let page = book_list(&books);
        assert!(page.contains("<td>Dune</td>"));
        assert!(page.contains("<td>Foundation</td>"));
        assert_eq!(page.matches("<tr><td>").count(), 2);
    }

    #[test]
    fn book_rows_escape_user_text() {
        let books = vec![sample_book(1, "<b>Dune</b>", "A & B", "1965")];
        let page = book_list(&books);
        assert!(page.contains("&lt;b&gt;Dune&lt;/b&gt;"));
        assert!(page.contains("A &amp; B"));
        assert!(!page.contains("<b>Dune</b>"));
    }

    #[test]
    fn forms_show_flash_message_when_present() {
        let page = add_book_form(Some("Book added successfully"));
        assert!(page.contains("Book added successfully"));

        let quiet = add_book_form(None);
        assert!(!quiet.contains("class=\"flash\""));
    }

    #[test]
    fn search_results_echo_the_escaped_query() {
        let page = search_results("name", "<dune>", &[]);
        assert!(page.contains("&lt;dune&gt;"));
        assert!(page.contains("No matching books found."));
    }

    #[test]
    fn every_page_carries_the_navigation() {
        for page in [home(), about(), search_home(), not_found()] {
            assert!(page.contains("<a href=\"/books\">All Books</a>"));
        }
    }
}
