use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::ExecutableCommand;
use log::{info, warn};
use std::io::stdout;
use std::thread;
use std::time::Duration;

use ttybraille::cli::Args;
use ttybraille::demo::{Scene, FRAMES_PER_STYLE};
use ttybraille::{AnsiTerminal, BrailleCanvas, SharedTerminal, Terminal, Theme};

const DEFAULT_COLUMNS: u16 = 80;
const DEFAULT_ROWS: u16 = 24;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let theme = load_theme(&args)?;

    let terminal = SharedTerminal::new(AnsiTerminal::stdout());
    terminal
        .lock()
        .setup()
        .context("Failed to prepare terminal")?;

    let (columns, rows) = canvas_size(&args, &terminal);
    let mut canvas = BrailleCanvas::new(args.border, args.border, columns, rows)
        .context("Failed to create canvas")?;
    info!(
        "Animating {} frames on a {}x{} canvas with theme '{}'",
        args.frames, columns, rows, theme.name
    );

    stdout()
        .execute(Hide)?
        .execute(Clear(ClearType::All))
        .context("Failed to clear screen")?;

    let result = animate(&args, &theme, &terminal, &mut canvas);

    // leave the prompt below the canvas
    let bottom = args.border.saturating_add(rows);
    stdout()
        .execute(SetAttribute(Attribute::Reset))?
        .execute(MoveTo(0, bottom))?
        .execute(Show)
        .context("Failed to restore terminal")?;
    println!();

    result
}

fn load_theme(args: &Args) -> Result<Theme> {
    let mut theme = match &args.theme_file {
        Some(path) => Theme::load(path)?,
        None => Theme::load_by_name(&args.theme)?,
    };

    // a fixed colour on the command line means no cycling
    if args.foreground.is_some() || args.background.is_some() {
        theme.cycle.clear();
    }
    if let Some(foreground) = args.foreground {
        theme.foreground = foreground;
    }
    if let Some(background) = args.background {
        theme.background = background;
    }

    Ok(theme)
}

fn canvas_size(
    args: &Args,
    terminal: &SharedTerminal<AnsiTerminal<std::io::Stdout>>,
) -> (u16, u16) {
    let (term_cols, term_rows) = match terminal.lock().size() {
        Ok(size) => size,
        Err(e) => {
            warn!("Could not query terminal size, using defaults: {}", e);
            (DEFAULT_COLUMNS, DEFAULT_ROWS)
        }
    };

    let margin = args.border.saturating_mul(2);
    let columns = args
        .columns
        .unwrap_or_else(|| term_cols.saturating_sub(margin))
        .max(1);
    let rows = args
        .rows
        .unwrap_or_else(|| term_rows.saturating_sub(margin))
        .max(1);

    (columns, rows)
}

fn animate(
    args: &Args,
    theme: &Theme,
    terminal: &SharedTerminal<AnsiTerminal<std::io::Stdout>>,
    canvas: &mut BrailleCanvas,
) -> Result<()> {
    let scene = Scene::new(args.frames);
    let delay = Duration::from_millis(args.delay);

    for frame in 0..scene.frames() {
        theme.apply(canvas, frame / FRAMES_PER_STYLE);
        scene.draw(canvas, frame);

        terminal
            .render_canvas(canvas)
            .with_context(|| format!("Failed to render frame {}", frame))?;
        thread::sleep(delay);
    }

    Ok(())
}
