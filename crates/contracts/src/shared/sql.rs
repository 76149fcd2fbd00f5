//! Lexical helpers applied to user-written SELECT statements before they are
//! sent to the query backend.
//!
//! Everything here works on raw text with regular expressions, not on a SQL
//! grammar. Keywords inside string literals or comments are seen like any
//! other word, and nested subqueries are not understood.

use once_cell::sync::Lazy;
use regex::Regex;

/// Row limit appended to queries that do not carry their own `LIMIT`.
pub const DEFAULT_ROW_LIMIT: u32 = 50;

/// Statements containing any of these words are rejected.
pub const PROHIBITED_KEYWORDS: [&str; 9] = [
    "INSERT", "UPDATE", "DELETE", "DROP", "CREATE", "ALTER", "TRUNCATE", "GRANT", "REVOKE",
];

static TABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(FROM|JOIN)\s+(\w+)").expect("valid table regex"));

static SELECT_LIST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\bSELECT\b(.*?)(\bFROM\b|$)").expect("valid select list regex"));

static ALIAS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+as\s+").expect("valid alias regex"));

static DISTINCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^distinct\s+").expect("valid distinct regex"));

static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(select|from|where|and|or|join|left|right|inner|outer|group by|order by|having|offset|as|on|in|between|like|is|null|not|distinct|union|all|create|table|drop|alter|index|primary|key|foreign|references|default|constraint|values|set)\b",
    )
    .expect("valid keyword regex")
});

static LITERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'(?:[^']|'')*'?").expect("valid literal regex"));

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Outcome of validating editor input, shown inline under the SQL editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryValidation {
    pub is_valid: bool,
    pub message: String,
}

/// Returns true when the statement starts with `SELECT` and contains none of
/// [`PROHIBITED_KEYWORDS`] anywhere in the text.
///
/// The check is a plain substring search on the uppercased text, so the
/// keywords also match inside identifiers (`updated_at`, `created_by`),
/// string literals and comments. Such statements are rejected.
pub fn is_select_only(text: &str) -> bool {
    let normalized = text.trim().to_uppercase();
    if !normalized.starts_with("SELECT") {
        return false;
    }
    !PROHIBITED_KEYWORDS
        .iter()
        .any(|keyword| normalized.contains(keyword))
}

/// Validates editor input for the SQL tab.
pub fn validate_select(text: &str) -> QueryValidation {
    if text.trim().is_empty() {
        return QueryValidation {
            is_valid: false,
            message: "Please enter a SQL query".to_string(),
        };
    }

    if !is_select_only(text) {
        return QueryValidation {
            is_valid: false,
            message: "Only SELECT statements are allowed".to_string(),
        };
    }

    QueryValidation {
        is_valid: true,
        message: "Valid SELECT query".to_string(),
    }
}

/// Strips one trailing semicolon, appends `LIMIT 50` when the query has no
/// `LIMIT` of its own, and terminates the result with a semicolon.
pub fn add_limit_if_needed(query: &str) -> String {
    let trimmed = query.trim();
    let mut processed = trimmed.strip_suffix(';').unwrap_or(trimmed).to_string();

    if !trimmed.to_uppercase().contains("LIMIT") {
        processed.push_str(&format!(" LIMIT {}", DEFAULT_ROW_LIMIT));
    }

    processed.push(';');
    processed
}

/// Wraps the identifier following every `FROM` / `JOIN` in double quotes so
/// that mixed-case table names survive PostgreSQL case folding.
pub fn quote_table_names(query: &str) -> String {
    TABLE_RE
        .replace_all(query, |caps: &regex::Captures| {
            format!("{} \"{}\"", &caps[1], &caps[2])
        })
        .into_owned()
}

/// Double-quotes the column list between `SELECT` and `FROM`.
///
/// Already quoted columns and function calls are kept as they are; an alias
/// introduced with `AS` is quoted on both sides (only the alias side for a
/// function call). A bare `*` leaves the query untouched.
pub fn quote_column_names(query: &str) -> String {
    let caps = match SELECT_LIST_RE.captures(query) {
        Some(c) => c,
        None => return query.to_string(),
    };

    let whole = match caps.get(0) {
        Some(m) => m,
        None => return query.to_string(),
    };
    let columns_part = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
    let has_from = caps.get(2).map(|m| !m.as_str().is_empty()).unwrap_or(false);

    if columns_part.is_empty() || columns_part == "*" {
        return query.to_string();
    }

    let (distinct, columns_part) = match DISTINCT_RE.find(columns_part) {
        Some(m) => ("DISTINCT ", &columns_part[m.end()..]),
        None => ("", columns_part),
    };

    let processed = split_top_level(columns_part)
        .into_iter()
        .map(|column| quote_column(column.trim()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut result = String::with_capacity(query.len() + 16);
    result.push_str(&query[..whole.start()]);
    result.push_str("SELECT ");
    result.push_str(distinct);
    result.push_str(&processed);
    if has_from {
        result.push_str(" FROM");
    }
    result.push_str(&query[whole.end()..]);
    result
}

fn quote_column(column: &str) -> String {
    if column == "*" || column.is_empty() {
        return column.to_string();
    }

    if column.len() > 1 && column.starts_with('"') && column.ends_with('"') {
        return column.to_string();
    }

    let mut parts = ALIAS_RE.splitn(column, 2);
    let expr = parts.next().unwrap_or("").trim();
    if let Some(alias) = parts.next() {
        let alias = alias.trim().trim_matches('"');
        let expr = if expr.contains('(') || expr.starts_with('"') {
            expr.to_string()
        } else {
            format!("\"{}\"", expr)
        };
        return format!("{} AS \"{}\"", expr, alias);
    }

    if column.contains('(') {
        return column.to_string();
    }

    format!("\"{}\"", column)
}

/// Splits on commas that are not nested in parentheses or quotes.
fn split_top_level(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut in_single = false;
    let mut in_double = false;
    let mut start = 0;

    for (i, ch) in list.char_indices() {
        match ch {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '(' if !in_single && !in_double => depth += 1,
            ')' if !in_single && !in_double => depth -= 1,
            ',' if depth == 0 && !in_single && !in_double => {
                parts.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&list[start..]);
    parts
}

/// The editor pipeline: limit, then table quoting, then column quoting.
pub fn prepare_select(query: &str) -> String {
    let limited = add_limit_if_needed(query);
    let tables = quote_table_names(&limited);
    quote_column_names(&tables)
}

/// Uppercases common SQL keywords, leaving identifiers and single-quoted
/// literals alone.
pub fn uppercase_keywords(text: &str) -> String {
    let upper = |part: &str| {
        KEYWORD_RE
            .replace_all(part, |caps: &regex::Captures| caps[0].to_uppercase())
            .into_owned()
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for literal in LITERAL_RE.find_iter(text) {
        out.push_str(&upper(&text[last..literal.start()]));
        out.push_str(literal.as_str());
        last = literal.end();
    }
    out.push_str(&upper(&text[last..]));
    out
}

/// SQL returned by the prompt API, made readable for display: one line,
/// keywords in capitals.
pub fn format_generated_sql(sql: &str) -> String {
    uppercase_keywords(&collapse_whitespace(sql))
}

/// Collapses newlines and whitespace runs to single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// Query issued when a table is picked from the sidebar.
pub fn select_all_from(table: &str) -> String {
    format!("SELECT * FROM {} LIMIT {}", table, DEFAULT_ROW_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_select_only() {
        assert!(is_select_only("SELECT * FROM t"));
        assert!(is_select_only("  select id from t  "));
        assert!(!is_select_only("DROP TABLE t"));
        assert!(!is_select_only("select 1; DELETE FROM t"));
        assert!(!is_select_only("WITH x AS (SELECT 1) SELECT * FROM x"));
    }

    #[test]
    fn test_is_select_only_rejects_keyword_inside_identifiers() {
        assert!(!is_select_only("SELECT updated_at FROM t"));
        assert!(!is_select_only("SELECT created_by FROM t"));
        assert!(!is_select_only("SELECT * FROM t WHERE note = 'drop'"));
        assert!(is_select_only("SELECT valid_from, total FROM t"));
    }

    #[test]
    fn test_validate_select_messages() {
        let empty = validate_select("   ");
        assert!(!empty.is_valid);
        assert_eq!(empty.message, "Please enter a SQL query");

        let update = validate_select("UPDATE t SET a = 1");
        assert!(!update.is_valid);
        assert_eq!(update.message, "Only SELECT statements are allowed");

        let ok = validate_select("SELECT 1");
        assert!(ok.is_valid);
        assert_eq!(ok.message, "Valid SELECT query");
    }

    #[test]
    fn test_add_limit_if_needed() {
        assert_eq!(add_limit_if_needed("SELECT * FROM t"), "SELECT * FROM t LIMIT 50;");
        assert_eq!(add_limit_if_needed("SELECT * FROM t;"), "SELECT * FROM t LIMIT 50;");
        assert_eq!(
            add_limit_if_needed("SELECT * FROM t limit 10"),
            "SELECT * FROM t limit 10;"
        );
        assert_eq!(
            add_limit_if_needed("  SELECT * FROM t LIMIT 5;  "),
            "SELECT * FROM t LIMIT 5;"
        );
    }

    #[test]
    fn test_add_limit_is_idempotent() {
        let once = add_limit_if_needed("SELECT * FROM t");
        let twice = add_limit_if_needed(&once);
        assert_eq!(once, twice);
        assert_eq!(twice.matches("LIMIT").count(), 1);
    }

    #[test]
    fn test_quote_table_names() {
        assert_eq!(
            quote_table_names("SELECT * FROM users JOIN orders ON users.id = orders.user_id"),
            "SELECT * FROM \"users\" JOIN \"orders\" ON users.id = orders.user_id"
        );
        assert_eq!(
            quote_table_names("select * from Users"),
            "select * from \"Users\""
        );
        assert_eq!(
            quote_table_names("SELECT * FROM \"Users\""),
            "SELECT * FROM \"Users\""
        );
    }

    #[test]
    fn test_quote_column_names() {
        assert_eq!(
            quote_column_names("SELECT id, name as n FROM t"),
            "SELECT \"id\", \"name\" AS \"n\" FROM t"
        );
        assert_eq!(quote_column_names("SELECT * FROM t"), "SELECT * FROM t");
    }

    #[test]
    fn test_quote_column_names_keeps_quoted_and_functions() {
        assert_eq!(
            quote_column_names("SELECT \"Id\", COUNT(*), round(price, 2) AS p FROM t"),
            "SELECT \"Id\", COUNT(*), round(price, 2) AS \"p\" FROM t"
        );
    }

    #[test]
    fn test_quote_column_names_without_from() {
        assert_eq!(quote_column_names("SELECT a, b"), "SELECT \"a\", \"b\"");
    }

    #[test]
    fn test_quote_column_names_distinct() {
        assert_eq!(
            quote_column_names("SELECT DISTINCT city FROM t"),
            "SELECT DISTINCT \"city\" FROM t"
        );
    }

    #[test]
    fn test_prepare_select_pipeline() {
        assert_eq!(
            prepare_select("select id, email from Users"),
            "SELECT \"id\", \"email\" FROM \"Users\" LIMIT 50;"
        );
    }

    #[test]
    fn test_select_list_stops_at_from_keyword_only() {
        assert_eq!(
            quote_column_names("SELECT valid_from, id FROM t"),
            "SELECT \"valid_from\", \"id\" FROM t"
        );
        assert_eq!(
            prepare_select("SELECT valid_from, id FROM t"),
            "SELECT \"valid_from\", \"id\" FROM \"t\" LIMIT 50;"
        );
        assert_eq!(
            quote_column_names("SELECT fromage, id"),
            "SELECT \"fromage\", \"id\""
        );
    }

    #[test]
    fn test_uppercase_keywords() {
        assert_eq!(
            uppercase_keywords("select name from users where age > 1 order by name"),
            "SELECT name FROM users WHERE age > 1 ORDER BY name"
        );
    }

    #[test]
    fn test_uppercase_keywords_skips_literals() {
        assert_eq!(
            uppercase_keywords("select * from t where note = 'as is' and tag in ('or')"),
            "SELECT * FROM t WHERE note = 'as is' AND tag IN ('or')"
        );
    }

    #[test]
    fn test_format_generated_sql() {
        assert_eq!(
            format_generated_sql("select city,\n  count(*) as n\nfrom customers\ngroup by city"),
            "SELECT city, count(*) AS n FROM customers GROUP BY city"
        );
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("SELECT *\n  FROM t\n WHERE a = 1\n"),
            "SELECT * FROM t WHERE a = 1"
        );
    }

    #[test]
    fn test_select_all_from() {
        assert_eq!(select_all_from("orders"), "SELECT * FROM orders LIMIT 50");
    }
}
