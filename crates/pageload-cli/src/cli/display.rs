//! Text display: print a page with its markup tags removed.

use std::io::{self, Write};

/// Drops everything between `<` and `>` (inclusive). No entity decoding.
pub fn strip_tags(body: &str) -> String {
    let mut in_tag = false;
    let mut text = String::with_capacity(body.len());
    for c in body.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

pub fn display(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(strip_tags(text).as_bytes())?;
    out.flush()
}
