// ABOUTME: Renders markdown answers into styled terminal lines using pulldown-cmark

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn render_markdown(source: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut writer = MarkdownWriter::default();
    for event in Parser::new_ext(source, options) {
        writer.handle(event);
    }
    writer.finish()
}

#[derive(Default)]
struct MarkdownWriter {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    styles: Vec<Style>,
    // One entry per open list; Some(n) is the next number of an ordered list
    lists: Vec<Option<u64>>,
    link_targets: Vec<String>,
    quote_depth: usize,
    in_code_block: bool,
    // Set right after a list marker so a loose item's paragraph stays on the marker's line
    at_item_start: bool,
}

impl MarkdownWriter {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) | Event::Html(text) => self.text(&text),
            Event::Code(code) => {
                let style = self.style().fg(Color::Yellow);
                self.push_span(code.to_string(), style);
            }
            Event::SoftBreak => {
                let style = self.style();
                self.push_span(" ".to_string(), style);
            }
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(32),
                    Style::default().fg(Color::DarkGray),
                )));
                self.blank_line();
            }
            Event::TaskListMarker(done) => {
                let marker = if done { "[x] " } else { "[ ] " };
                let style = self.style();
                self.push_span(marker.to_string(), style);
            }
            Event::FootnoteReference(name) => {
                let style = self.style().fg(Color::DarkGray);
                self.push_span(format!("[^{name}]"), style);
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph if self.at_item_start => {}
            Tag::Paragraph | Tag::TableHead | Tag::TableRow => self.flush_line(),
            Tag::Heading(level, ..) => {
                self.flush_line();
                let mut style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
                if level == HeadingLevel::H1 {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                self.push_style(style);
            }
            Tag::BlockQuote => {
                self.flush_line();
                self.quote_depth += 1;
                self.push_style(Style::default().add_modifier(Modifier::ITALIC));
            }
            Tag::CodeBlock(_) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Tag::List(start) => {
                self.flush_line();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(Some(number)) => {
                        let marker = format!("{number}. ");
                        *number += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.push_span(format!("{indent}{marker}"), Style::default().fg(Color::Cyan));
                self.at_item_start = true;
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT));
            }
            Tag::Link(_, dest, _) => {
                self.link_targets.push(dest.to_string());
                self.push_style(
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            Tag::Image(_, dest, _) => {
                self.link_targets.push(dest.to_string());
                self.push_style(Style::default().fg(Color::Magenta));
                let style = self.style();
                self.push_span("[image: ".to_string(), style);
            }
            Tag::Table(_) => self.flush_line(),
            Tag::TableCell => {
                if !self.spans.is_empty() {
                    self.push_span(" │ ".to_string(), Style::default().fg(Color::DarkGray));
                }
            }
            Tag::FootnoteDefinition(name) => {
                self.flush_line();
                self.push_span(format!("[^{name}]: "), Style::default().fg(Color::DarkGray));
            }
        }
    }

    fn end(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if self.lists.is_empty() {
                    self.blank_line();
                } else {
                    self.flush_line();
                }
            }
            Tag::Heading(..) => {
                self.pop_style();
                self.blank_line();
            }
            Tag::BlockQuote => {
                self.flush_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.pop_style();
                if self.quote_depth == 0 {
                    self.blank_line();
                }
            }
            Tag::CodeBlock(_) => {
                self.in_code_block = false;
                self.blank_line();
            }
            Tag::List(_) => {
                self.flush_line();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            Tag::Item | Tag::TableHead | Tag::TableRow | Tag::FootnoteDefinition(_) => {
                self.flush_line();
            }
            Tag::Emphasis | Tag::Strong | Tag::Strikethrough => self.pop_style(),
            Tag::Link(..) => {
                self.pop_style();
                if let Some(dest) = self.link_targets.pop() {
                    self.push_span(format!(" ({dest})"), Style::default().fg(Color::DarkGray));
                }
            }
            Tag::Image(..) => {
                let style = self.style();
                self.push_span("]".to_string(), style);
                self.pop_style();
                self.link_targets.pop();
            }
            Tag::Table(_) => self.blank_line(),
            Tag::TableCell => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_code_block {
            let style = Style::default().fg(Color::Green);
            for line in text.lines() {
                self.push_span(format!("  {line}"), style);
                self.flush_line();
            }
            return;
        }
        let style = self.style();
        self.push_span(text.to_string(), style);
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or_default()
    }

    fn push_style(&mut self, style: Style) {
        let combined = self.style().patch(style);
        self.styles.push(combined);
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn push_span(&mut self, text: String, style: Style) {
        self.at_item_start = false;
        if self.spans.is_empty() && self.quote_depth > 0 {
            self.spans.push(Span::styled(
                "│ ".repeat(self.quote_depth),
                Style::default().fg(Color::DarkGray),
            ));
        }
        self.spans.push(Span::styled(text, style));
    }

    fn flush_line(&mut self) {
        if !self.spans.is_empty() {
            let spans = std::mem::take(&mut self.spans);
            self.lines.push(Line::from(spans));
        }
    }

    fn blank_line(&mut self) {
        self.flush_line();
        if self.lines.last().is_some_and(|line| line.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        while self.lines.last().is_some_and(|line| line.width() == 0) {
            self.lines.pop();
        }
        self.lines
    }
}
