//! TUI layout and widget rendering from the frame buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use crate::view::sink::{charts, slots};
use crate::view::{RANK_SLOTS, SlotStyle};

use super::runtime::App;
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let device_rows = app.controller.registry().len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // header
            Constraint::Length(device_rows), // device cards
            Constraint::Min(10),             // charts
            Constraint::Length(6),           // stats + ranking
            Constraint::Length(1),           // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_devices(frame, app, chunks[1]);
    render_charts(frame, app, chunks[2]);
    render_panels(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);
}

/// Header bar: title, clock, view mode, run state.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state_label = if app.paused { "PAUSED" } else { "RUNNING" };
    let time = app.frame.slot_text(slots::CURRENT_TIME).unwrap_or("--:--:--");

    let header = Line::from(vec![
        Span::styled(
            " HOME-DASH ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {time} | view={} | tick={} | {state_label} ",
            app.controller.mode(),
            app.controller.tick_count(),
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Device cards: one line per device, painted from the status/power slots.
fn render_devices(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .controller
        .registry()
        .devices()
        .iter()
        .enumerate()
        .map(|(i, device)| {
            let status_slot = app.frame.slot(&slots::device_status(&device.id));
            let power_slot = app.frame.slot(&slots::device_power(&device.id));
            let status = status_slot.map_or("?", |v| v.text.as_str());
            let power = power_slot.map_or("?", |v| v.text.as_str());
            let color = style::slot_color(status_slot.and_then(|v| v.style));
            Line::from(vec![
                Span::raw(format!(" [{}] {} {:<18} ", i + 1, device.icon, device.name)),
                Span::styled(format!("{status:<4}"), Style::default().fg(color)),
                Span::styled(format!("{power:>9}"), Style::default().fg(color)),
            ])
        })
        .collect();

    let block = Block::default().title(" Devices ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_charts(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_power_chart(frame, app, chunks[0]);
    render_peak_chart(frame, app, chunks[1]);
}

/// Primary weekly/monthly consumption bar chart.
fn render_power_chart(frame: &mut Frame, app: &App, area: Rect) {
    let Some(spec) = app.frame.chart(charts::POWER) else {
        return;
    };
    let data: Vec<(&str, u64)> = spec
        .categories
        .iter()
        .zip(spec.values.iter())
        .map(|(label, &kwh)| (label.as_str(), kwh.round().max(0.0) as u64))
        .collect();

    let title = format!(" Consumption ({}) ", app.controller.mode());
    let bar_width = (area.width.saturating_sub(2) / data.len().max(1) as u16)
        .saturating_sub(1)
        .clamp(3, 9);
    let chart = BarChart::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .data(&data)
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(style::chart_color(spec.color)))
        .value_style(Style::default().fg(style::HEADER_FG));
    frame.render_widget(chart, area);
}

/// Hourly peak-hours area chart.
fn render_peak_chart(frame: &mut Frame, app: &App, area: Rect) {
    let Some(spec) = app.frame.chart(charts::PEAK_HOURS) else {
        return;
    };
    let points: Vec<(f64, f64)> = spec
        .values
        .iter()
        .enumerate()
        .map(|(i, &kwh)| (i as f64, f64::from(kwh)))
        .collect();
    let y_bounds = style::auto_bounds_y(&spec.values);

    let datasets = vec![
        Dataset::default()
            .name(spec.series_label.as_str())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style::chart_color(spec.color)))
            .data(&points),
    ];

    let x_hi = (points.len().saturating_sub(1)) as f64;
    let y_label_hi = format!("{:.1}", y_bounds[1]);
    let chart = Chart::new(datasets)
        .block(Block::default().title(" Peak Hours ").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("hour")
                .bounds([0.0, x_hi.max(1.0)])
                .labels(vec!["0".to_string(), "12".to_string(), "23".to_string()]),
        )
        .y_axis(
            Axis::default()
                .title("kWh")
                .bounds(y_bounds)
                .labels(vec!["0".to_string(), y_label_hi]),
        );
    frame.render_widget(chart, area);
}

/// Statistics and ranking panels, painted from their slots.
fn render_panels(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let slot = |id: &str| app.frame.slot_text(id).unwrap_or("-").to_string();
    let accent = Style::default().fg(style::slot_color(Some(SlotStyle::Accent)));

    let stats_lines = vec![
        Line::from(vec![
            Span::raw("  Total:   "),
            Span::styled(slot(slots::TOTAL_POWER), accent),
        ]),
        Line::from(vec![
            Span::raw("  Average: "),
            Span::styled(slot(slots::AVG_POWER), accent),
        ]),
        Line::from(vec![
            Span::raw("  Peak:    "),
            Span::styled(
                format!("{} ({})", slot(slots::PEAK_TIME), slot(slots::PEAK_VALUE)),
                accent,
            ),
        ]),
    ];
    let stats_block = Block::default().title(" Statistics ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(stats_lines).block(stats_block), chunks[0]);

    let rank_lines: Vec<Line> = (1..=RANK_SLOTS)
        .map(|position| {
            Line::from(format!(
                "  {position}. {:<18} {:>9}",
                slot(&slots::rank_name(position)),
                slot(&slots::rank_power(position)),
            ))
        })
        .collect();
    let rank_block = Block::default()
        .title(" Top Consumers ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(rank_lines).block(rank_block), chunks[1]);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  Space:Pause  w/m:View  1-9:Toggle device  r:Restart",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
