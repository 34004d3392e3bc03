use std::fs::File;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind, MouseEventKind};
use crossterm::{cursor, execute, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use tablist::{render_lines, Content, Event, TabDescriptor, TabList, TabListOptions};

const VIEWPORT: u16 = 40;
/// Screen row the strip window is drawn on (below the header).
const STRIP_ROW: u16 = 1;
/// Screen column where the strip window begins, after the backward marker.
const STRIP_START: u16 = 2;

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut list = TabList::new(
        TabListOptions::new()
            .viewport_width(VIEWPORT)
            .header("Event overview — arrows or mouse, 'q' quits")
            .tab(TabDescriptor::new("Shakemap").content("Ground shaking intensity."))
            .tab(TabDescriptor::new("Origin").content("Hypocenter, magnitude, review status."))
            .tab(TabDescriptor::new("Waveforms").content_with(|| {
                log::debug!("[demo] producing waveform content");
                Content::Text("Waveform downloads (produced lazily on first view).".into())
            }))
            .tab(TabDescriptor::new("Tectonic Summary").content("Regional tectonic setting."))
            .tab(TabDescriptor::new("Impact").content("Felt reports and estimated losses.")),
    );

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut list, &mut stdout);

    execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;

    result
}

fn run(list: &mut TabList, stdout: &mut io::Stdout) -> io::Result<()> {
    loop {
        draw(list, stdout)?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                code => {
                    let event = Event::Key {
                        target: Some(list.nav_id().to_string()),
                        key: code.into(),
                        modifiers: key.modifiers.into(),
                    };
                    list.process_event(&event);
                }
            },

            CrosstermEvent::Mouse(mouse) => {
                let x = mouse.column;
                match mouse.kind {
                    MouseEventKind::Down(button) => {
                        let target = if mouse.row == STRIP_ROW {
                            strip_target(list, x)
                        } else {
                            None
                        };
                        list.process_event(&Event::Click {
                            target,
                            x,
                            y: mouse.row,
                            button: button.into(),
                        });
                    }
                    MouseEventKind::Drag(button) => {
                        list.process_event(&Event::Drag {
                            target: None,
                            x,
                            y: mouse.row,
                            button: button.into(),
                        });
                    }
                    MouseEventKind::Up(button) => {
                        list.process_event(&Event::Release {
                            target: None,
                            x,
                            y: mouse.row,
                            button: button.into(),
                        });
                    }
                    _ => {}
                }
            }

            _ => {}
        }
    }
}

/// Map a screen column on the strip row to a component target.
fn strip_target(list: &TabList, x: u16) -> Option<String> {
    if x < STRIP_START {
        return Some(list.backward_id().to_string());
    }
    if x >= STRIP_START + list.viewport_width() {
        return Some(list.forward_id().to_string());
    }
    let local = x - STRIP_START;
    Some(
        list.tab_at(local)
            .unwrap_or_else(|| list.nav_id().to_string()),
    )
}

fn draw(list: &TabList, stdout: &mut io::Stdout) -> io::Result<()> {
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    for (row, line) in render_lines(list).iter().enumerate() {
        execute!(stdout, cursor::MoveTo(0, row as u16))?;
        write!(stdout, "{line}")?;
    }
    stdout.flush()
}
