use leptos::prelude::*;
use thaw::*;

/// Read-only SQL display with keyword highlighting and a copy button.
#[component]
pub fn SqlViewer(
    #[prop(into)]
    sql: Signal<String>,
    /// Shown while `sql` is empty.
    #[prop(optional, into)]
    placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "No generated SQL query yet.".to_string());

    view! {
        <div class="sql-viewer-container">
            {move || {
                let text = sql.get();
                if text.trim().is_empty() {
                    return view! {
                        <div class="sql-placeholder">
                            <p class="text-muted">{placeholder.clone()}</p>
                        </div>
                    }
                        .into_any();
                }

                let to_copy = text.clone();
                view! {
                    <div class="sql-content">
                        <Flex gap=FlexGap::Small>
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| {
                                    if let Some(window) = web_sys::window() {
                                        let _ = window.navigator().clipboard().write_text(&to_copy);
                                    }
                                }
                            >
                                "Copy"
                            </Button>
                        </Flex>
                        <pre class="sql-query">
                            <code>
                                {highlight_sql(&text)
                                    .into_iter()
                                    .map(|token| match token.class {
                                        Some(class) => view! { <span class=class>{token.text}</span> }.into_any(),
                                        None => token.text.into_any(),
                                    })
                                    .collect_view()}
                            </code>
                        </pre>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

const KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "GROUP", "ORDER", "BY", "HAVING", "JOIN", "LEFT", "RIGHT", "INNER",
    "OUTER", "FULL", "CROSS", "ON", "AND", "OR", "AS", "IN", "BETWEEN", "IS", "NULL", "NOT", "LIKE",
    "ILIKE", "DISTINCT", "LIMIT", "OFFSET", "CASE", "WHEN", "THEN", "ELSE", "END", "UNION", "ALL",
    "WITH", "ASC", "DESC",
];

const FUNCTIONS: &[&str] = &[
    "SUM", "COUNT", "AVG", "MIN", "MAX", "COALESCE", "CAST", "UPPER", "LOWER", "ROUND",
    "DATE_TRUNC", "EXTRACT", "NOW",
];

#[derive(Debug, Clone, PartialEq)]
pub struct SqlToken {
    pub text: String,
    pub class: Option<&'static str>,
}

/// Split `sql` into display tokens. Adjacent unclassified text is merged.
pub fn highlight_sql(sql: &str) -> Vec<SqlToken> {
    let chars: Vec<char> = sql.chars().collect();
    let mut tokens: Vec<SqlToken> = Vec::new();
    let mut i = 0;

    let push = |tokens: &mut Vec<SqlToken>, text: String, class: Option<&'static str>| {
        if class.is_none() {
            if let Some(last) = tokens.last_mut().filter(|t| t.class.is_none()) {
                last.text.push_str(&text);
                return;
            }
        }
        tokens.push(SqlToken { text, class });
    };

    while i < chars.len() {
        let ch = chars[i];
        if ch == '\'' {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i] != '\'' {
                i += 1;
            }
            i = (i + 1).min(chars.len());
            push(&mut tokens, chars[start..i].iter().collect(), Some("sql-string"));
        } else if ch.is_ascii_alphabetic() || ch == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let upper = word.to_uppercase();
            let class = if KEYWORDS.contains(&upper.as_str()) {
                Some("sql-keyword")
            } else if FUNCTIONS.contains(&upper.as_str()) {
                Some("sql-function")
            } else {
                None
            };
            push(&mut tokens, word, class);
        } else if ch.is_ascii_digit() {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            push(&mut tokens, chars[start..i].iter().collect(), Some("sql-number"));
        } else {
            push(&mut tokens, ch.to_string(), None);
            i += 1;
        }
    }

    tokens
}
