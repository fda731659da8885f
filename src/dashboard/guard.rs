//! Read-only guard for the free-text SQL box.
//!
//! The box executes whatever the user types against the live database, so
//! everything that is not a single SELECT-shaped statement is rejected up
//! front. Postgres runs DML nested inside CTEs, so an accepted statement is
//! also scanned for write keywords appearing as bare words outside string
//! literals, quoted identifiers, and comments.

use crate::error::{CourtsideError, Result};

/// Statement keywords the SQL box accepts.
const READ_ONLY_KEYWORDS: &[&str] = &["select", "with", "explain"];

/// Keywords rejected anywhere in the statement. The first four are valid
/// inside a data-modifying CTE; the rest guard against anything else slipping
/// past the first-keyword check.
const WRITE_KEYWORDS: &[&str] = &[
    "insert", "update", "delete", "merge", "truncate", "drop", "alter", "create", "grant",
    "revoke", "copy",
];

/// Reject anything that is not a single read-only statement.
pub fn ensure_read_only(sql: &str) -> Result<()> {
    let scan = scan(sql);

    let Some(first) = scan.words.first() else {
        return forbidden("empty statement");
    };

    if scan.multiple_statements {
        return forbidden("multiple statements are not allowed");
    }

    if !READ_ONLY_KEYWORDS.contains(&first.as_str()) {
        return forbidden("statement must start with SELECT, WITH, or EXPLAIN");
    }

    // EXPLAIN ANALYZE executes the statement it explains, bare or inside the
    // option list.
    if first == "explain" && scan.words.iter().any(|w| w == "analyze") {
        return forbidden("EXPLAIN ANALYZE executes the statement");
    }

    if let Some(word) = scan
        .words
        .iter()
        .find(|w| WRITE_KEYWORDS.contains(&w.as_str()))
    {
        return forbidden(&format!(
            "{} is not allowed in a read-only statement",
            word.to_uppercase()
        ));
    }

    Ok(())
}

fn forbidden(reason: &str) -> Result<()> {
    Err(CourtsideError::ForbiddenStatement {
        reason: reason.to_string(),
    })
}

struct Scan {
    /// Lowercased bare words, in order.
    words: Vec<String>,
    /// A semicolon with more content after it.
    multiple_statements: bool,
}

/// Walk the statement, collecting words and skipping `'...'` literals (with
/// `''` escapes), `"..."` identifiers, `--` line comments, and `/* */` block
/// comments.
fn scan(sql: &str) -> Scan {
    let mut words = Vec::new();
    let mut multiple_statements = false;
    let mut after_semicolon = false;
    let mut word = String::new();
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if after_semicolon {
                multiple_statements = true;
            }
            word.push(c.to_ascii_lowercase());
            continue;
        }

        if !word.is_empty() {
            words.push(std::mem::take(&mut word));
        }

        match c {
            '\'' => {
                if after_semicolon {
                    multiple_statements = true;
                }
                while let Some(n) = chars.next() {
                    if n == '\'' {
                        // '' is an escaped quote, not the end
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                        } else {
                            break;
                        }
                    }
                }
            }
            '"' => {
                if after_semicolon {
                    multiple_statements = true;
                }
                for n in chars.by_ref() {
                    if n == '"' {
                        break;
                    }
                }
            }
            '-' if chars.peek() == Some(&'-') => {
                for n in chars.by_ref() {
                    if n == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = ' ';
                for n in chars.by_ref() {
                    if prev == '*' && n == '/' {
                        break;
                    }
                    prev = n;
                }
            }
            ';' => after_semicolon = true,
            c if c.is_whitespace() => {}
            _ => {
                if after_semicolon {
                    multiple_statements = true;
                }
            }
        }
    }

    if !word.is_empty() {
        words.push(word);
    }

    Scan {
        words,
        multiple_statements,
    }
}
