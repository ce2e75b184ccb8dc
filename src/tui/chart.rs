//! Spending-by-category chart
//!
//! A proportional chart where each slice is one category's share of total
//! spending, labelled with the category and its percentage to one decimal.

use std::io::Write;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::terminal::{init_terminal, restore_terminal};
use crate::display::{format_bar, format_percentage, left_align, truncate};
use crate::error::{TrackerError, TrackerResult};

/// One labelled share of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    /// Share of the total, 0-100
    pub percentage: f64,
}

impl ChartSlice {
    /// "Food 62.5%"
    pub fn caption(&self) -> String {
        format!("{} {}", self.label, format_percentage(self.percentage))
    }
}

/// Something that can present a proportional chart to the user
pub trait ChartRenderer {
    /// Show the chart and return once the user has dismissed it
    fn render(&mut self, title: &str, slices: &[ChartSlice]) -> TrackerResult<()>;
}

const SLICE_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

/// Full-screen chart drawn with ratatui; any key closes it
#[derive(Debug, Default)]
pub struct TerminalChart;

impl TerminalChart {
    pub fn new() -> Self {
        Self
    }

    fn draw(frame: &mut Frame, title: &str, slices: &[ChartSlice]) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL);
        let inner = block.inner(frame.area());
        frame.render_widget(block, frame.area());

        let mut constraints: Vec<Constraint> = slices.iter().map(|_| Constraint::Length(1)).collect();
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        let rows = Layout::vertical(constraints).split(inner);

        for (i, slice) in slices.iter().enumerate() {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(SLICE_COLORS[i % SLICE_COLORS.len()]))
                .ratio((slice.percentage / 100.0).clamp(0.0, 1.0))
                .label(slice.caption());
            frame.render_widget(gauge, rows[i]);
        }

        let hint = Paragraph::new(Line::from("Press any key to return"))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, rows[rows.len() - 1]);
    }
}

impl ChartRenderer for TerminalChart {
    fn render(&mut self, title: &str, slices: &[ChartSlice]) -> TrackerResult<()> {
        let mut terminal = init_terminal()?;

        let result = (|| -> TrackerResult<()> {
            terminal
                .draw(|frame| Self::draw(frame, title, slices))
                .map_err(|e| TrackerError::Tui(e.to_string()))?;

            loop {
                match event::read().map_err(|e| TrackerError::Tui(e.to_string()))? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => break,
                    Event::Resize(_, _) => {
                        terminal
                            .draw(|frame| Self::draw(frame, title, slices))
                            .map_err(|e| TrackerError::Tui(e.to_string()))?;
                    }
                    _ => {}
                }
            }
            Ok(())
        })();

        restore_terminal()?;
        result
    }
}

/// Plain-text bars, used when output isn't an interactive terminal
pub struct TextChart<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> TextChart<W> {
    pub fn new(out: W) -> Self {
        Self { out, width: 30 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartRenderer for TextChart<W> {
    fn render(&mut self, title: &str, slices: &[ChartSlice]) -> TrackerResult<()> {
        let label_width = slices
            .iter()
            .map(|s| s.label.chars().count().min(20))
            .max()
            .unwrap_or(0);

        writeln!(self.out, "{}", title)?;
        for slice in slices {
            writeln!(
                self.out,
                "{} {} {}",
                left_align(&truncate(&slice.label, 20), label_width),
                format_bar(slice.percentage, 100.0, self.width),
                format_percentage(slice.percentage)
            )?;
        }
        Ok(())
    }
}
