//! Chart overlay view - modal line chart for one stock.

use crate::types::{ChartSpec, PointColor};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph},
    Frame,
};

use super::Theme;

/// Compute the centered modal area for the overlay.
pub fn modal_area(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Render the chart overlay into the modal area.
///
/// The area is cleared first, so whatever chart was shown before is fully
/// replaced by this spec.
pub fn render(frame: &mut Frame, modal: Rect, spec: &ChartSpec, theme: &Theme) {
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(spec.title.clone(), theme.title()))
        .border_style(theme.border());

    if spec.is_empty() {
        let empty = Paragraph::new("No data recorded yet")
            .style(theme.muted())
            .block(block);
        frame.render_widget(empty, modal);
        return;
    }

    let points: Vec<(f64, f64)> = spec
        .prices
        .iter()
        .enumerate()
        .map(|(i, price)| (i as f64, *price))
        .collect();

    let rising = points_of_class(&points, spec, PointColor::Rising);
    let falling = points_of_class(&points, spec, PointColor::Falling);
    let baseline = points_of_class(&points, spec, PointColor::Baseline);

    // Muted connecting line under one scatter dataset per color class.
    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme.muted())
            .data(&points),
        Dataset::default()
            .name("start")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(theme.point_color(PointColor::Baseline)))
            .data(&baseline),
        Dataset::default()
            .name("up")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(theme.point_color(PointColor::Rising)))
            .data(&rising),
        Dataset::default()
            .name("down")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(theme.point_color(PointColor::Falling)))
            .data(&falling),
    ];

    let (min, max) = spec.price_bounds();
    let x_max = spec.len().saturating_sub(1).max(1) as f64;

    let mut x_labels = Vec::new();
    if let Some(first) = spec.labels.first() {
        x_labels.push(Span::styled(first.clone(), theme.muted()));
    }
    if spec.len() > 1 {
        if let Some(last) = spec.labels.last() {
            x_labels.push(Span::styled(last.clone(), theme.muted()));
        }
    }

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("time")
                .style(theme.muted())
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("price")
                .style(theme.muted())
                .bounds([min, max])
                .labels(vec![
                    Span::styled(format!("{:.2}", min), theme.muted()),
                    Span::styled(format!("{:.2}", max), theme.muted()),
                ]),
        );

    frame.render_widget(chart, modal);
}

fn points_of_class(
    points: &[(f64, f64)],
    spec: &ChartSpec,
    class: PointColor,
) -> Vec<(f64, f64)> {
    points
        .iter()
        .zip(&spec.colors)
        .filter(|(_, color)| **color == class)
        .map(|(point, _)| *point)
        .collect()
}
