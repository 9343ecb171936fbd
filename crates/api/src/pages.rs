//! Minimal server-side HTML rendering.
//!
//! Pages are built with `format!` and every piece of user data passes
//! through [`escape`] before it is interpolated.

use axum::http::StatusCode;
use axum::response::Html;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::query::FlashParams;

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Percent-encode a value for use in a URL query string or path segment.
pub fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

const NAV: &[(&str, &str)] = &[
    ("/peliculas/page", "Películas"),
    ("/personajes/page", "Personajes"),
    ("/directores/page", "Directores"),
    ("/curiosidades/page", "Curiosidades"),
    ("/dashboard/page", "Dashboard"),
    ("/buscar/page", "Buscar"),
];

/// Wrap `body` (already HTML) in the shared page chrome.
pub fn layout(title: &str, body: &str) -> Html<String> {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| format!(r#"<a href="{href}">{label}</a>"#))
        .collect::<Vec<_>>()
        .join(" | ");

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>{title} - Filmoteca</title>
</head>
<body>
<nav>{nav}</nav>
<h1>{title}</h1>
{body}
</body>
</html>"#,
        title = escape(title),
    ))
}

/// Success/error banner for the `mensaje` and `error` query parameters.
pub fn flash(params: &FlashParams) -> String {
    let mut out = String::new();
    if let Some(msg) = params.mensaje.as_deref().filter(|m| !m.is_empty()) {
        out.push_str(&format!(r#"<p class="mensaje">{}</p>"#, escape(msg)));
    }
    if let Some(err) = params.error.as_deref().filter(|m| !m.is_empty()) {
        out.push_str(&format!(r#"<p class="error">{}</p>"#, escape(err)));
    }
    out
}

/// Render a table. Header labels are escaped; row cells are inserted as-is
/// so callers can embed links and forms, and must escape their own data.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "<p>Sin registros.</p>".to_string();
    }

    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h)))
        .collect();
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row.iter().map(|c| format!("<td>{c}</td>")).collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    format!("<table>\n<thead><tr>{head}</tr></thead>\n<tbody>{body}</tbody>\n</table>")
}

/// A one-button form posting `_method` to `action`.
pub fn method_button(action: &str, method: &str, label: &str) -> String {
    format!(
        r#"<form method="post" action="{action}"><input type="hidden" name="_method" value="{method}"><button type="submit">{label}</button></form>"#,
        action = escape(action),
        method = escape(method),
        label = escape(label),
    )
}

/// Dedicated error page for failures while serving an HTML route.
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let body = format!(
        r#"<p class="error">{}</p><p><a href="/peliculas/page">Volver</a></p>"#,
        escape(message)
    );
    let title = format!("Error {}", status.as_u16());
    layout(&title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn encode_handles_spaces_and_accents() {
        assert_eq!(encode("Película eliminada"), "Pel%C3%ADcula%20eliminada");
    }

    #[test]
    fn flash_skips_empty_values() {
        let params = FlashParams {
            mensaje: Some(String::new()),
            error: None,
        };
        assert_eq!(flash(&params), "");
    }

    #[test]
    fn table_without_rows_says_so() {
        assert_eq!(table(&["Id"], &[]), "<p>Sin registros.</p>");
    }

    #[test]
    fn error_page_carries_status_and_message() {
        let Html(html) = error_page(StatusCode::NOT_FOUND, "Film with id 9 not found");
        assert!(html.contains("Error 404"));
        assert!(html.contains("Film with id 9 not found"));
    }
}
