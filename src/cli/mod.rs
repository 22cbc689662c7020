use clap::Parser;
use std::path::PathBuf;

use crate::terminal::{Background, Foreground};

#[derive(Parser, Debug)]
#[command(name = "ttybraille")]
#[command(version)]
#[command(about = "Animate shapes drawn with Braille characters", long_about = None)]
pub struct Args {
    /// Theme name (default, mono, rainbow or a <name>.yaml in a theme directory)
    #[arg(short, long, default_value = "rainbow")]
    pub theme: String,

    /// Theme file path, overrides --theme
    #[arg(long, value_name = "FILE")]
    pub theme_file: Option<PathBuf>,

    /// Fixed glyph colour, disables the theme cycle
    #[arg(long, value_enum)]
    pub foreground: Option<Foreground>,

    /// Fixed background colour, disables the theme cycle
    #[arg(long, value_enum)]
    pub background: Option<Background>,

    /// Number of frames to animate
    #[arg(short, long, default_value = "100")]
    pub frames: usize,

    /// Delay between frames (milliseconds)
    #[arg(short, long, default_value = "250")]
    pub delay: u64,

    /// Canvas width in columns (terminal width minus border if not provided)
    #[arg(short = 'c', long)]
    pub columns: Option<u16>,

    /// Canvas height in rows (terminal height minus border if not provided)
    #[arg(short = 'r', long)]
    pub rows: Option<u16>,

    /// Empty cells kept around the canvas
    #[arg(short, long, default_value = "1")]
    pub border: u16,
}

#[derive(Parser, Debug)]
#[command(name = "braille_dump")]
#[command(about = "Print one frame of the demo scene as plain Braille text", long_about = None)]
pub struct DumpArgs {
    /// Frame to draw
    #[arg(long, default_value = "0")]
    pub frame: usize,

    /// Frames in a full sweep of the scene
    #[arg(long, default_value = "100")]
    pub frames: usize,

    /// Canvas width in columns
    #[arg(short = 'c', long, default_value = "40")]
    pub columns: u16,

    /// Canvas height in rows
    #[arg(short = 'r', long, default_value = "12")]
    pub rows: u16,

    /// Print each non-blank cell with its position instead of the grid
    #[arg(long)]
    pub cells: bool,
}
