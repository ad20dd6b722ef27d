//! Terminal rendering for one refresh cycle.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::calc;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(f.area());

    draw_system(f, app, chunks[0]);
    draw_processes(f, app, chunks[1]);
}

/// Ratios feed straight into gauges, which reject values outside [0,1];
/// sampling races and zeroed totals get clamped here, at the edge.
fn safe_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn draw_system(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = &app.snapshot;

    let block = Block::default()
        .title(" System ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let cpu = safe_ratio(snapshot.cpu);
    let cpu_gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(cpu)
        .label(format!("CPU {:5.1}%", cpu * 100.0));
    f.render_widget(cpu_gauge, rows[0]);

    let memory = safe_ratio(snapshot.memory);
    let memory_gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::DarkGray))
        .ratio(memory)
        .label(format!("Mem {:5.1}%", memory * 100.0));
    f.render_widget(memory_gauge, rows[1]);

    let label = Style::default().fg(Color::DarkGray);
    let info = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("OS: ", label),
            Span::raw(snapshot.os.clone()),
        ]),
        Line::from(vec![
            Span::styled("Kernel: ", label),
            Span::raw(snapshot.kernel.clone()),
        ]),
        Line::from(vec![
            Span::styled("Uptime: ", label),
            Span::raw(calc::format_elapsed(snapshot.uptime_seconds)),
        ]),
        Line::from(vec![
            Span::styled("Processes: ", label),
            Span::raw(format!(
                "{} total, {} running",
                snapshot.total_processes, snapshot.running_processes
            )),
        ]),
    ]);
    f.render_widget(info, rows[2]);
}

fn draw_processes(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(" Processes ({}) ", app.processes.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let header = Row::new(vec!["PID", "USER", "CPU%", "VSZ(MB)", "TIME+", "COMMAND"]).style(
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.processes.iter().map(|p| {
        Row::new(vec![
            p.pid.to_string(),
            p.user.clone(),
            format!("{:5.1}", safe_ratio(p.cpu) * 100.0),
            (p.memory_kb / 1024).to_string(),
            calc::format_elapsed(p.uptime_seconds),
            p.command.replace('\0', " "),
        ])
    });

    let widths = [
        Constraint::Length(7),
        Constraint::Length(10),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
