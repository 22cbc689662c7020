use anyhow::{Context, Result};
use clap::Parser;

use ttybraille::cli::DumpArgs;
use ttybraille::demo::Scene;
use ttybraille::BrailleCanvas;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = DumpArgs::parse();

    let mut canvas =
        BrailleCanvas::new(0, 0, args.columns, args.rows).context("Failed to create canvas")?;
    Scene::new(args.frames).draw(&mut canvas, args.frame);

    if args.cells {
        canvas.render_with(|cell| {
            let codepoint = cell.glyph.chars().next().map_or(0, u32::from);
            println!(
                "{:3},{:3} U+{:04X} {}",
                cell.col, cell.row, codepoint, cell.glyph
            );
        });
        return Ok(());
    }

    // Assemble the grid through the per-cell callback, '.' for empty cells
    let mut glyphs: Vec<(usize, usize, String)> = Vec::new();
    canvas.render_with(|cell| {
        glyphs.push((
            usize::from(cell.col),
            usize::from(cell.row),
            cell.glyph.to_string(),
        ));
    });

    let width = usize::from(canvas.width());
    let mut grid = vec![vec!["."; width]; usize::from(canvas.height())];
    for (col, row, glyph) in &glyphs {
        grid[*row][*col] = glyph.as_str();
    }

    println!(
        "Canvas ({}x{} cells, {}x{} pixels), frame {}:",
        canvas.width(),
        canvas.height(),
        canvas.pixel_width(),
        canvas.pixel_height(),
        args.frame
    );
    println!("{}", "=".repeat(width + 5));

    for (y, row) in grid.iter().enumerate() {
        println!("{:3} |{}|", y, row.concat());
    }
    println!("{}", "=".repeat(width + 5));
    println!("Pixels on: {}", canvas.pixels().lit_count());

    Ok(())
}
