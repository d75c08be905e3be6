//!
//! The usual workflow end to end: load two columns from a CSV file, put the raw data
//! next to a normalized copy with a fitted line, and save the figure.
//!
//! Run with `RUST_LOG=quickfig=debug` to see what the library is doing.
//!
use std::io::Write;

use quickfig::{
    panel::Axis,
    series::ErrorBounds,
    transforms::{normalize, restrict_domain},
    Error, Figure, FigureOptions, FitOptions, LegendLocation, Marker, SaveOptions, Style,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    //
    // Write a small data set to disk so the demo is self-contained
    let dir = std::env::temp_dir().join("quickfig-demo");
    std::fs::create_dir_all(&dir).expect("create demo directory");
    let csv = dir.join("discharge.csv");
    let mut file = std::fs::File::create(&csv).expect("create csv");
    writeln!(file, "time, voltage").expect("write header");
    for i in 0..20 {
        let t = f64::from(i) * 0.5;
        writeln!(file, "{t}, {}", 12.0 - 0.8 * t + 0.3 * (t * 3.0).sin()).expect("write row");
    }
    drop(file);

    //
    // Load it back - a missing column would show up as a diagnostic, not a crash
    let loaded = Figure::load_xy(&csv, "time", "voltage");
    for diagnostic in loaded.diagnostics() {
        eprintln!("{diagnostic}");
    }
    let (time, voltage) = loaded.into_value();

    //
    // Two panels side by side sharing fonts and labels
    let options = FigureOptions::grid(1, 2)
        .with_title("Battery discharge")
        .with_tag("discharge")
        .with_labels("Time (h)", "Voltage (V)");
    let mut figure = Figure::new(options)?.into_result()?;

    //
    // Left: the raw data with error bars
    let errors = ErrorBounds::symmetric(vec![0.2; time.len()]);
    figure.add_error_series(0, 0, &time, &voltage, Some(errors), None, Some("measured"), None)?;
    figure.show_legend(0, 0, LegendLocation::UpperRight, None)?;

    //
    // Right: the middle of the run, normalized, with a fitted line and its equation
    let (time, voltage) = restrict_domain(&time, &voltage, 1.0, 8.0)?;
    let voltage = normalize(&voltage)?;
    figure.set_axis_label(0, 1, Axis::Y, "Normalized voltage")?;
    figure.add_series(0, 1, &time, &voltage, Some("normalized"), Some(Style::scatter(Marker::Circle)))?;

    let fit = figure
        .fit_linear(0, 1, &time, &voltage, &FitOptions::linear().annotate_at(1.5, 0.1).returning())?
        .into_value();
    if let Some(fit) = fit {
        println!("Fitted: {}", fit.equation);
    }
    figure.show_legend(0, 1, LegendLocation::LowerLeft, Some(8.0))?;

    //
    // Save as SVG next to the data; failures come back as diagnostics
    let saved = figure.save(&SaveOptions::default().with_directory(&dir));
    for diagnostic in saved.diagnostics() {
        eprintln!("{diagnostic}");
    }
    if let Some(path) = saved.into_value() {
        println!("Saved to {}", path.display());
    }

    figure.close();
    Ok(())
}
