use camino::{Utf8Path, Utf8PathBuf};
use presetgeom::{FillMode, ShapeDescriptor, registry};
use rayon::prelude::*;
use std::fs;

/// Cell size of the gallery grid, in pixels
const CELL: f64 = 160.0;
const COLUMNS: usize = 8;
/// Box sizes each preset is drawn at: square, wide, tall
const SIZES: [(f64, f64); 3] = [(120.0, 120.0), (140.0, 70.0), (70.0, 140.0)];

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [OUT]   Render every preset into one SVG (default target/gallery.svg)");
        eprintln!("  shapes          List registered preset names");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => {
            let out = args
                .get(2)
                .map(Utf8PathBuf::from)
                .unwrap_or_else(default_gallery_path);
            if let Err(e) = gallery(&out) {
                eprintln!("Failed to write {out}: {e}");
                std::process::exit(1);
            }
        }
        "shapes" => {
            for name in registry().shape_types() {
                println!("{name}");
            }
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn default_gallery_path() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or(Utf8Path::new("."))
        .join("target/gallery.svg")
}

/// One gallery cell: the preset at one size, centred, with its name below.
fn render_cell(index: usize, shape_type: &str, (w, h): (f64, f64)) -> String {
    let col = index % COLUMNS;
    let row = index / COLUMNS;
    let x = col as f64 * CELL + (CELL - w) / 2.0;
    let y = row as f64 * (CELL + 20.0) + (CELL - h) / 2.0;
    let id = format!("cell{index}");

    // Cycle through the three fill modes so the paint-server references
    // are exercised too.
    let fill = match index % 3 {
        0 => FillMode::solid("#9dc3e6"),
        1 => FillMode::gradient(),
        _ => FillMode::image(),
    };
    let descriptor = ShapeDescriptor::new(shape_type, w, h)
        .with_fill(fill)
        .with_id(&id);
    let fragment = registry().render(&descriptor);

    let mut out = String::new();
    out.push_str(&format!("<g transform='translate({x},{y})'>"));
    out.push_str(&format!(
        "<linearGradient id='linGrd_{id}'><stop offset='0' stop-color='#f4b183'/><stop offset='1' stop-color='#c55a11'/></linearGradient>"
    ));
    out.push_str(&format!(
        "<pattern id='imgPtrn_{id}' width='8' height='8' patternUnits='userSpaceOnUse'><rect width='8' height='8' fill='#e2f0d9'/><circle cx='4' cy='4' r='2' fill='#70ad47'/></pattern>"
    ));
    out.push_str(&fragment);
    out.push_str("</g>");
    out.push_str(&format!(
        "<text x='{}' y='{}' font-size='11' text-anchor='middle' font-family='sans-serif'>{shape_type} {w}x{h}</text>",
        col as f64 * CELL + CELL / 2.0,
        row as f64 * (CELL + 20.0) + CELL + 12.0,
    ));
    out
}

fn gallery(out: &Utf8Path) -> std::io::Result<()> {
    let shapes = registry().shape_types();
    let jobs: Vec<(usize, &str, (f64, f64))> = shapes
        .iter()
        .flat_map(|&name| SIZES.iter().map(move |&size| (name, size)))
        .enumerate()
        .map(|(i, (name, size))| (i, name, size))
        .collect();

    eprintln!("Rendering {} cells for {} presets...", jobs.len(), shapes.len());

    let cells: Vec<String> = jobs
        .par_iter()
        .map(|&(i, name, size)| render_cell(i, name, size))
        .collect();

    let rows = jobs.len().div_ceil(COLUMNS);
    let width = COLUMNS as f64 * CELL;
    let height = rows as f64 * (CELL + 20.0);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' viewBox='0 0 {width} {height}'>\n"
    ));
    for cell in cells {
        svg.push_str(&cell);
        svg.push('\n');
    }
    svg.push_str("</svg>\n");

    if let Some(parent) = out.parent() {
        if !parent.as_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out, svg)?;
    eprintln!("Gallery written to {out}");
    Ok(())
}
