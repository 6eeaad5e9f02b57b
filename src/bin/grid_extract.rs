use grid_extractor::config::{load_config, RuntimeConfig};
use grid_extractor::io::write_json_file;
use grid_extractor::{ExtractError, Extraction, GridExtractor, JsonLineSource};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    extract(&config).map_err(|e| e.to_string())
}

fn extract(config: &RuntimeConfig) -> Result<(), ExtractError> {
    let mut source = JsonLineSource::new(&config.input);
    let extractor = GridExtractor::new(config.extractor.clone());
    let extraction = extractor.process_source(&mut source)?;

    print_text_summary(&extraction);

    match &config.output.json_out {
        Some(path) => {
            write_json_file(path, &extraction)?;
            println!("\nJSON report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&extraction)?;
            println!("\nJSON report:\n{json}");
        }
    }
    Ok(())
}

fn print_text_summary(out: &Extraction) {
    println!("Extraction summary");
    println!("  image: {}x{}", out.dims.width, out.dims.height);
    println!("  threshold_px: {:.2}", out.distance_threshold);
    println!(
        "  candidates: {} (horizontal={} vertical={} dropped={})",
        out.trace.counts.total,
        out.trace.counts.horizontal,
        out.trace.counts.vertical,
        out.trace.counts.dropped
    );
    println!(
        "  consensus: horizontal={} vertical={}",
        out.horizontals.len(),
        out.verticals.len()
    );
    for (i, line) in out.horizontals.iter().enumerate() {
        println!(
            "    H{i}: ({}, {}) -> ({}, {}) w={}",
            line.endpoint_a.x, line.endpoint_a.y, line.endpoint_b.x, line.endpoint_b.y, line.weight
        );
    }
    for (i, line) in out.verticals.iter().enumerate() {
        println!(
            "    V{i}: ({}, {}) -> ({}, {}) w={}",
            line.endpoint_a.x, line.endpoint_a.y, line.endpoint_b.x, line.endpoint_b.y, line.weight
        );
    }
    println!(
        "  grid: {}x{} points, {} cells",
        out.grid.rows,
        out.grid.cols,
        out.grid.cells().count()
    );
    for h in 0..out.grid.rows {
        if let Some(row) = out.grid.row(h) {
            let cells: Vec<String> = row.iter().map(|p| format!("({},{})", p.x, p.y)).collect();
            println!("    {}", cells.join(" "));
        }
    }
    let stages: Vec<String> = out
        .trace
        .stage_ms
        .iter()
        .map(|(stage, ms)| format!("{}={:.3}", stage.label(), ms))
        .collect();
    println!(
        "\nTimings (ms): {} total={:.3}",
        stages.join(" "),
        out.trace.total_ms
    );
}

fn usage() -> String {
    "Usage: grid_extract <config.json>".to_string()
}
