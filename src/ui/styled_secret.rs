//! Secrets rendered as styled JSON lines
//!
//! Produces indented JSON with the same layout as `serde_json`'s pretty
//! printer, but as ratatui spans so keys, strings and nulls can be colored.

use super::theme::Theme;
use crate::store::Secret;
use ratatui::text::{Line, Span};
use serde_json::Value;
use std::mem;

const INDENT: &str = "  ";

/// Secret pane content ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSecret {
    /// Lines of styled text
    pub lines: Vec<Line<'static>>,
    /// Pane title, usually the secret path
    pub title: String,
}

impl StyledSecret {
    /// Render a secret as colored JSON
    #[must_use]
    pub fn secret(path: &str, secret: &Secret, theme: &Theme) -> Self {
        let value = serde_json::to_value(secret).unwrap_or(Value::Null);
        Self {
            lines: json_lines(&value, theme),
            title: format!(" {path} "),
        }
    }

    /// Show a failed read in place of the secret
    #[must_use]
    pub fn error(path: &str, message: &str, theme: &Theme) -> Self {
        Self {
            lines: vec![Line::styled(message.to_string(), theme.error_style())],
            title: format!(" {path} "),
        }
    }

    /// Placeholder when nothing is selected
    #[must_use]
    pub fn empty(theme: &Theme) -> Self {
        Self {
            lines: vec![Line::styled("No matching secrets", theme.dimmed_style())],
            title: String::from(" Secret "),
        }
    }
}

/// Split a JSON value into styled lines
#[must_use]
pub fn json_lines(value: &Value, theme: &Theme) -> Vec<Line<'static>> {
    let mut writer = JsonWriter {
        theme,
        lines: Vec::new(),
        current: Vec::new(),
    };
    writer.value(value, 0);
    writer.newline();
    writer.lines
}

struct JsonWriter<'t> {
    theme: &'t Theme,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl JsonWriter<'_> {
    fn raw(&mut self, text: impl Into<String>) {
        self.current.push(Span::raw(text.into()));
    }

    fn newline(&mut self) {
        self.lines.push(Line::from(mem::take(&mut self.current)));
    }

    fn indent(&mut self, depth: usize) {
        if depth > 0 {
            self.raw(INDENT.repeat(depth));
        }
    }

    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self
                .current
                .push(Span::styled("null", self.theme.json_null_style())),
            Value::String(_) => self
                .current
                .push(Span::styled(value.to_string(), self.theme.json_string_style())),
            Value::Bool(_) | Value::Number(_) => self.raw(value.to_string()),
            Value::Array(items) if items.is_empty() => self.raw("[]"),
            Value::Object(map) if map.is_empty() => self.raw("{}"),
            Value::Array(items) => {
                self.raw("[");
                self.newline();
                for (i, item) in items.iter().enumerate() {
                    self.indent(depth + 1);
                    self.value(item, depth + 1);
                    if i + 1 < items.len() {
                        self.raw(",");
                    }
                    self.newline();
                }
                self.indent(depth);
                self.raw("]");
            }
            Value::Object(map) => {
                self.raw("{");
                self.newline();
                for (i, (key, item)) in map.iter().enumerate() {
                    self.indent(depth + 1);
                    self.current.push(Span::styled(
                        Value::String(key.clone()).to_string(),
                        self.theme.json_key_style(),
                    ));
                    self.raw(": ");
                    self.value(item, depth + 1);
                    if i + 1 < map.len() {
                        self.raw(",");
                    }
                    self.newline();
                }
                self.indent(depth);
                self.raw("}");
            }
        }
    }
}
