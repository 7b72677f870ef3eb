//! Template rendering shared by the title and the plugin output
//!
//! Templates are rendered with Handlebars. Templates written for Go's
//! `text/template` are accepted too: their actions are rewritten into the
//! equivalent Handlebars before rendering.
//!
//! | Go                          | Handlebars               |
//! |-----------------------------|--------------------------|
//! | `{{ .NumTasks }}`           | `{{NumTasks}}`           |
//! | `{{ . }}`                   | `{{this}}`               |
//! | `{{ if (le .N 50) }}`       | `{{#if (lte N 50)}}`     |
//! | `{{ range .Tasks }}`        | `{{#each Tasks}}`        |
//! | `{{ with .Title }}`         | `{{#with Title}}`        |
//! | `{{ else }}` / `{{ end }}`  | `{{else}}` / `{{/each}}` |
//! | `{{- x -}}`                 | `{{~x~}}`                |
//!
//! Handlebars actions pass through unchanged, so both syntaxes can be mixed
//! as long as every Go block is closed with `{{ end }}`.

use std::borrow::Cow;
use std::sync::LazyLock;

use handlebars::{Handlebars, RenderError};
use regex::{Captures, Regex};
use serde::Serialize;

static ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(-\s)?\s*(.*?)\s*(\s-)?\}\}").expect("template pattern is a valid regex")
});

static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[\s(])\.([A-Za-z_]\w*(?:\.[A-Za-z_]\w*)*)").expect("template pattern is a valid regex")
});

static DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[\s(])\.($|[\s)])").expect("template pattern is a valid regex"));

static COMPARISON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\()(le|ge)(\s)").expect("template pattern is a valid regex"));

/// Handlebars registry used for every template.
///
/// Strict mode turns references to missing fields into errors, and output is
/// not HTML-escaped since it is plain text.
#[must_use]
pub fn engine() -> Handlebars<'static> {
    let mut engine = Handlebars::new();
    engine.set_strict_mode(true);
    engine.register_escape_fn(handlebars::no_escape);
    engine
}

/// Render `template` against `data`
pub fn render<T: Serialize>(template: &str, data: &T) -> Result<String, RenderError> {
    engine().render_template(&translate(template), data)
}

/// Rewrite Go `text/template` actions into Handlebars.
///
/// Handlebars actions come back unchanged.
#[must_use]
pub fn translate(template: &str) -> Cow<'_, str> {
    let mut blocks = Vec::new();
    ACTION.replace_all(template, |caps: &Captures<'_>| {
        translate_action(&caps[2], &mut blocks).map_or_else(
            || caps[0].to_string(),
            |inner| {
                let open = if caps.get(1).is_some() { "~" } else { "" };
                let close = if caps.get(3).is_some() { "~" } else { "" };
                format!("{{{{{open}{inner}{close}}}}}")
            },
        )
    })
}

/// Handlebars equivalent of one action body, `None` to keep it as written
fn translate_action(body: &str, blocks: &mut Vec<&'static str>) -> Option<String> {
    if body.is_empty() || body.starts_with(['#', '/', '!', '>', '^', '&', '{', '~']) || body == "else" {
        return None;
    }

    if body == "end" {
        return blocks.pop().map(|block| format!("/{block}"));
    }

    if let Some(rest) = body.strip_prefix("else ") {
        return Some(format!("else {}", expression(rest.trim())));
    }

    for (go, block) in [("if", "if"), ("range", "each"), ("with", "with")] {
        if let Some(rest) = body.strip_prefix(go)
            && rest.starts_with(char::is_whitespace)
        {
            blocks.push(block);
            return Some(format!("#{block} {}", expression(rest.trim())));
        }
    }

    Some(expression(body))
}

/// Rewrite dotted field paths and comparison helpers in an expression
fn expression(expr: &str) -> String {
    let expr = FIELD.replace_all(expr, "${1}${2}");
    let expr = DOT.replace_all(&expr, "${1}this${2}").into_owned();
    COMPARISON.replace_all(&expr, "${1}${2}te${3}").into_owned()
}
