//! Word wrapping by display width.

use unicode_width::UnicodeWidthStr;

/// Wrap styled runs into rows of at most `width` columns.
///
/// `prefix_first` opens the first row and `prefix_next` every continuation
/// row, both drawn in `prefix_style`. Whitespace at a row start is dropped.
/// A word wider than a row is kept whole on its own row.
pub fn wrap_runs<S: Copy>(
    runs: &[(String, S)],
    width: usize,
    prefix_first: &str,
    prefix_next: &str,
    prefix_style: S,
) -> Vec<Vec<(String, S)>> {
    let mut tokens: Vec<(String, S)> = Vec::new();
    for (text, style) in runs {
        split_tokens(text, *style, &mut tokens);
    }

    let mut rows = Vec::new();
    let mut current = Vec::new();
    let mut current_width = start_row(prefix_first, prefix_style, &mut current);
    let mut has_word = false;

    for (text, style) in tokens {
        let token_width = text.width();
        let is_ws = text.chars().all(char::is_whitespace);

        if has_word && current_width + token_width > width {
            rows.push(std::mem::take(&mut current));
            current_width = start_row(prefix_next, prefix_style, &mut current);
            has_word = false;
        }

        if is_ws && !has_word {
            continue;
        }

        current_width += token_width;
        current.push((text, style));
        if !is_ws {
            has_word = true;
        }
    }

    rows.push(current);
    rows
}

/// Wrap plain text into rows of at most `width` columns.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    wrap_runs(&[(text.to_string(), ())], width, "", "", ())
        .into_iter()
        .map(|row| row.into_iter().map(|(t, ())| t).collect::<String>())
        .map(|row| row.trim_end().to_string())
        .collect()
}

/// Pad `text` on the left so it sits centred in `width` columns.
pub fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn start_row<S: Copy>(prefix: &str, style: S, row: &mut Vec<(String, S)>) -> usize {
    row.clear();
    if prefix.is_empty() {
        0
    } else {
        row.push((prefix.to_string(), style));
        prefix.width()
    }
}

fn split_tokens<S: Copy>(text: &str, style: S, out: &mut Vec<(String, S)>) {
    let mut buf = String::new();
    let mut ws_state: Option<bool> = None;

    for ch in text.chars() {
        let is_ws = ch.is_whitespace();
        match ws_state {
            Some(state) if state == is_ws => buf.push(ch),
            Some(_) => {
                out.push((std::mem::take(&mut buf), style));
                buf.push(ch);
                ws_state = Some(is_ws);
            }
            None => {
                buf.push(ch);
                ws_state = Some(is_ws);
            }
        }
    }

    if !buf.is_empty() {
        out.push((buf, style));
    }
}
