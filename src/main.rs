//! proctop: terminal system monitor over the Linux /proc pseudo-filesystem.
//!
//! Renders system-wide CPU/memory utilization, uptime, and a per-process
//! table refreshed once per second. Run: `proctop`, quit with `q`.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::stdout;
use std::time::{Duration, Instant};

use proctop::app::App;
use proctop::calc;
use proctop::config::ProcPaths;
use proctop::ui;

/// proctop: system and per-process statistics from /proc
#[derive(Parser, Debug)]
#[command(name = "proctop")]
#[command(version)]
#[command(about = "Terminal system monitor over /proc", long_about = None)]
struct Cli {
    /// Print one snapshot as plain text and exit
    #[arg(long)]
    once: bool,
}

const REFRESH: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.once {
        print_once();
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    let mut app = App::new(ProcPaths::default());
    app.refresh();
    let mut last_refresh = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Poll input between refreshes so `q` stays responsive
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                {
                    return Ok(());
                }
            }
        }

        if last_refresh.elapsed() >= REFRESH {
            app.refresh();
            last_refresh = Instant::now();
        }
    }
}

fn print_once() {
    let mut app = App::new(ProcPaths::default());
    app.refresh();

    let s = &app.snapshot;
    println!("OS:        {}", s.os);
    println!("Kernel:    {}", s.kernel);
    println!("CPU:       {:.1}%", s.cpu * 100.0);
    println!("Memory:    {:.1}%", s.memory * 100.0);
    println!("Uptime:    {}", calc::format_elapsed(s.uptime_seconds));
    println!(
        "Processes: {} total, {} running",
        s.total_processes, s.running_processes
    );
    println!();
    println!(
        "{:>7} {:<10} {:>6} {:>8} {:>9}  COMMAND",
        "PID", "USER", "CPU%", "VSZ(MB)", "TIME+"
    );
    for row in app.processes.iter().take(15) {
        println!(
            "{:>7} {:<10} {:>6.1} {:>8} {:>9}  {}",
            row.pid,
            row.user,
            row.cpu * 100.0,
            row.memory_kb / 1024,
            calc::format_elapsed(row.uptime_seconds),
            row.command.replace('\0', " ")
        );
    }
}
