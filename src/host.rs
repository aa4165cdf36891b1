use std::io::Write;

use crate::config::SelectorConfig;
use crate::error::Result;
use crate::types::StylesheetChoice;

/// A stylesheet resolved to the URL it is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetLink {
    pub choice: StylesheetChoice,
    pub href: String,
}

impl StylesheetLink {
    pub fn new(choice: StylesheetChoice, config: &SelectorConfig) -> Self {
        Self {
            choice,
            href: format!("{}{}{}", config.base_url, choice.as_str(), config.suffix),
        }
    }

    /// `<link>` element that makes a page load this stylesheet.
    pub fn to_markup(&self) -> String {
        format!(
            r#"<link rel="stylesheet" type="text/css" href="{}">"#,
            escape_attribute(&self.href)
        )
    }
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Whatever the page is being built into. Receives at most one stylesheet
/// per selection and does not report whether the resource exists.
pub trait StylesheetHost {
    fn load_stylesheet(&mut self, link: &StylesheetLink) -> Result<()>;
}

/// Writes one `<link>` line per stylesheet into a page being generated.
pub struct MarkupWriter<W> {
    out: W,
}

impl<W: Write> MarkupWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StylesheetHost for MarkupWriter<W> {
    fn load_stylesheet(&mut self, link: &StylesheetLink) -> Result<()> {
        writeln!(self.out, "{}", link.to_markup())?;
        Ok(())
    }
}

/// Keeps every requested stylesheet in memory.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub links: Vec<StylesheetLink>,
}

impl StylesheetHost for RecordingHost {
    fn load_stylesheet(&mut self, link: &StylesheetLink) -> Result<()> {
        self.links.push(link.clone());
        Ok(())
    }
}
