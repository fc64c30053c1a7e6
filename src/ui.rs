use std::io::{self, Stdout};

use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame, Terminal,
};

use crate::app::App;
use crate::constants::{BAUD_RATE, OUTPUT_FILE, PORT};
use crate::util::{format_elapsed, padded_range, value_bounds};

pub const TEMP_COLOR: Color = Color::Red;
pub const HUMIDITY_COLOR: Color = Color::Blue;
pub const CO2_COLOR: Color = Color::Rgb(255, 165, 0);
pub const VOLTAGE_COLOR: Color = Color::Green;
pub const CURRENT_COLOR: Color = Color::Magenta;

pub type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn init() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

pub fn restore(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

pub fn draw(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(5),  // status header
                Constraint::Min(6),     // temp / humidity
                Constraint::Min(6),     // co2
                Constraint::Min(6),     // voltage / current
                Constraint::Length(1),  // key hints
            ]
            .as_ref(),
        )
        .split(f.size());

    draw_header(f, main_chunks[0], app);

    let window = app.window();
    let temps = window.series(|s| s.temperature);
    let humidities = window.series(|s| s.humidity);
    let ppms = window.series(|s| s.co2_ppm);
    let voltages = window.series(|s| s.voltage);
    let currents = window.series(|s| s.current_ma);
    let x_bounds = window.time_bounds();

    draw_panel(
        f,
        main_chunks[1],
        " Temperature / Humidity ",
        x_bounds,
        &[
            ("Temp (°C)", TEMP_COLOR, &temps),
            ("Humidity (%)", HUMIDITY_COLOR, &humidities),
        ],
    );
    draw_panel(
        f,
        main_chunks[2],
        " CO2 (PPM) ",
        x_bounds,
        &[("CO2 (PPM)", CO2_COLOR, &ppms)],
    );
    draw_panel(
        f,
        main_chunks[3],
        " Voltage / Current ",
        x_bounds,
        &[
            ("Voltage (V)", VOLTAGE_COLOR, &voltages),
            ("Current (mA)", CURRENT_COLOR, &currents),
        ],
    );

    let hints = Paragraph::new(format!(
        " q: quit | raw lines → {OUTPUT_FILE} | summary charts saved on exit"
    ))
    .style(Style::default().bg(Color::Rgb(20, 20, 20)).fg(Color::White));
    f.render_widget(hints, main_chunks[4]);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let stats = app.stats();
    let elapsed = (Local::now() - stats.started_at).num_seconds().max(0);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let latest = match app.window().latest() {
        Some(s) => Line::from(vec![
            Span::styled(format!("{:.1} °C ", s.temperature), Style::default().fg(TEMP_COLOR)),
            Span::styled(format!("{:.1} % ", s.humidity), Style::default().fg(HUMIDITY_COLOR)),
            Span::styled(format!("{:.0} PPM ", s.co2_ppm), Style::default().fg(CO2_COLOR)),
            Span::styled(format!("{:.2} V ", s.voltage), Style::default().fg(VOLTAGE_COLOR)),
            Span::styled(format!("{:.1} mA", s.current_ma), Style::default().fg(CURRENT_COLOR)),
            Span::styled(format!("  @ t={}s", s.timestamp), label),
        ]),
        None => Line::from(Span::styled("no samples yet", label)),
    };

    let text = vec![
        Line::from(vec![
            Span::styled("lines ", label),
            Span::styled(stats.lines_total.to_string(), value),
            Span::styled("  samples ", label),
            Span::styled(stats.samples_ok.to_string(), value),
            Span::styled("  skipped ", label),
            Span::styled(stats.skipped.to_string(), value),
            Span::styled("  window ", label),
            Span::styled(
                format!("{}/{}", app.window().len(), app.window().capacity()),
                value,
            ),
            Span::styled("  elapsed ", label),
            Span::styled(format_elapsed(elapsed), value),
        ]),
        latest,
        Line::from(vec![
            Span::styled("last  ", label),
            Span::raw(app.last_line().to_string()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Sensor Monitor [{PORT} @ {BAUD_RATE}] "))
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    x_bounds: Option<(f64, f64)>,
    series: &[(&str, Color, &[(f64, f64)])],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_type(BorderType::Rounded);

    let Some((x_min, x_max)) = x_bounds else {
        let placeholder = Paragraph::new("waiting for data…")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    };
    let (x_lo, x_hi) = padded_range(x_min, x_max);

    let slices: Vec<&[(f64, f64)]> = series.iter().map(|(_, _, points)| *points).collect();
    let (y_min, y_max) = value_bounds(&slices).unwrap_or((0.0, 1.0));
    let (y_lo, y_hi) = padded_range(y_min, y_max);

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(name, color, points)| {
            Dataset::default()
                .name(name.to_string())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Time (s)")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_lo, x_hi])
                .labels(vec![
                    Span::raw(format!("{x_min:.0}")),
                    Span::raw(format!("{x_max:.0}")),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([y_lo, y_hi])
                .labels(vec![
                    Span::raw(format!("{y_lo:.1}")),
                    Span::raw(format!("{y_hi:.1}")),
                ]),
        );
    f.render_widget(chart, area);
}
