mod app;
mod charts;
mod constants;
mod error;
mod sample;
mod serial;
mod sink;
mod ui;
mod util;
mod window;

use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use app::App;
use constants::{MAX_POINTS, OUTPUT_FILE, RENDER_PAUSE};
use error::MonitorError;
use serial::LineSource;
use sink::RawLog;

fn main() -> Result<(), MonitorError> {
    env_logger::init();

    // Raw mode turns Ctrl+C into a key event, so the signal handler and the
    // quit keys set the same flag.
    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || r.store(false, Ordering::SeqCst))
        .expect("Error setting Ctrl+C handler");

    let port = serial::open_port()?;
    let mut source = LineSource::new(port);
    let mut sink = RawLog::create(Path::new(OUTPUT_FILE))?;
    let mut app = App::new(MAX_POINTS);

    let mut terminal = ui::init()?;
    let res = run_loop(&mut terminal, &mut app, &mut source, &mut sink, &running);
    ui::restore(&mut terminal)?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    // Shared cleanup path: close the transport, flush the log, save charts.
    drop(source);
    let lines_logged = sink.lines_written();
    match sink.finish() {
        Ok(log_path) => println!(
            "Serial connection closed. Raw log saved to {} ({lines_logged} lines).",
            log_path.display()
        ),
        Err(err) => eprintln!("Error: {err}"),
    }

    match charts::save_all(app.window(), Path::new(".")) {
        Ok(paths) => {
            for path in paths {
                println!("Saved {}", path.display());
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_loop<R: Read>(
    terminal: &mut ui::Term,
    app: &mut App,
    source: &mut LineSource<R>,
    sink: &mut RawLog,
    running: &AtomicBool,
) -> Result<(), MonitorError> {
    while running.load(Ordering::SeqCst) {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(RENDER_PAUSE)? {
            if let Event::Key(key) = event::read()? {
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if key.code == KeyCode::Char('q') || key.code == KeyCode::Esc || ctrl_c {
                    break;
                }
            }
        }

        // Blocks up to the read timeout; a timeout just redraws.
        if let Some(line) = source.next_line()? {
            if line.is_empty() {
                continue;
            }
            sink.append(&line)?;
            app.ingest(&line);
        }
    }

    log::info!("acquisition stopped");
    Ok(())
}
