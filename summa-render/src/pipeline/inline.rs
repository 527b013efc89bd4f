//! Regex passes
//!
//! Each function is one global replacement over the whole text. None of them understands the
//! HTML that earlier passes produced, which is why their position in [`super::PASSES`] matters.
//! Patterns run in CRLF mode: `.` never crosses a line break and `$` matches before `\r\n`, so
//! every construct here is matched within a single line except fenced code.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("valid pass pattern")
}

static H3: Lazy<Regex> = Lazy::new(|| pattern(r"(?mR)^### (.*)$"));
static H2: Lazy<Regex> = Lazy::new(|| pattern(r"(?mR)^## (.*)$"));
static H1: Lazy<Regex> = Lazy::new(|| pattern(r"(?mR)^# (.*)$"));

static BOLD_STARS: Lazy<Regex> = Lazy::new(|| pattern(r"(?R)\*\*(.+?)\*\*"));
static BOLD_UNDERSCORES: Lazy<Regex> = Lazy::new(|| pattern(r"(?R)__(.+?)__"));

static ITALIC_STAR: Lazy<Regex> = Lazy::new(|| pattern(r"(?R)\*(.+?)\*"));
static ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| pattern(r"(?R)_(.+?)_"));

static LINK: Lazy<Regex> = Lazy::new(|| pattern(r"!?\[([^\]\n]+)\]\(([^)\n]+)\)"));
static IMAGE: Lazy<Regex> = Lazy::new(|| pattern(r"!\[([^\]\n]*)\]\(([^)\n]+)\)"));

static FENCED_CODE: Lazy<Regex> = Lazy::new(|| pattern(r"(?s)```(\w*)\r?\n(.*?)```"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| pattern(r"`([^`\n]+)`"));

static RULE: Lazy<Regex> = Lazy::new(|| pattern(r"(?mR)^(?:---|\*\*\*)$"));
static BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| pattern(r"(?mR)^> (.*)$"));

/// `### `, `## ` and `# ` lines, longest marker first.
pub fn headers(input: &str) -> String {
    let text = H3.replace_all(input, "<h3>${1}</h3>");
    let text = H2.replace_all(&text, "<h2>${1}</h2>");
    H1.replace_all(&text, "<h1>${1}</h1>").into_owned()
}

/// `**x**` and `__x__`.
pub fn bold(input: &str) -> String {
    let text = BOLD_STARS.replace_all(input, "<strong>${1}</strong>");
    BOLD_UNDERSCORES
        .replace_all(&text, "<strong>${1}</strong>")
        .into_owned()
}

/// `*x*` and `_x_`. Must follow [`bold`].
pub fn italic(input: &str) -> String {
    let text = ITALIC_STAR.replace_all(input, "<em>${1}</em>");
    ITALIC_UNDERSCORE
        .replace_all(&text, "<em>${1}</em>")
        .into_owned()
}

/// `[text](url)`. Image syntax is left for [`images`].
pub fn links(input: &str) -> String {
    LINK.replace_all(input, |caps: &Captures| {
        if caps[0].starts_with('!') {
            return caps[0].to_string();
        }
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            &caps[2], &caps[1]
        )
    })
    .into_owned()
}

/// `![alt](url)`.
pub fn images(input: &str) -> String {
    IMAGE
        .replace_all(input, r#"<img src="${2}" alt="${1}" />"#)
        .into_owned()
}

/// Fenced code blocks with an optional language tag. Must precede [`inline_code`].
pub fn fenced_code(input: &str) -> String {
    FENCED_CODE
        .replace_all(input, |caps: &Captures| {
            let language = match &caps[1] {
                "" => "plaintext",
                tag => tag,
            };
            format!(
                r#"<pre><code class="language-{language}">{}</code></pre>"#,
                caps[2].trim()
            )
        })
        .into_owned()
}

/// `` `code` `` spans.
pub fn inline_code(input: &str) -> String {
    INLINE_CODE
        .replace_all(input, "<code>${1}</code>")
        .into_owned()
}

/// Lines that are exactly `---` or `***`.
pub fn rules(input: &str) -> String {
    RULE.replace_all(input, "<hr>").into_owned()
}

/// `> ` lines. Consecutive quote lines stay separate elements.
pub fn blockquotes(input: &str) -> String {
    BLOCKQUOTE
        .replace_all(input, "<blockquote>${1}</blockquote>")
        .into_owned()
}
