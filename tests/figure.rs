use std::io::Write;

use quickfig::{
    assert_all_close,
    export::plan_path,
    panel::Axis,
    transforms::{normalize, restrict_domain, translate},
    DiagnosticKind, Error, Figure, FigureOptions, FitOptions, ImageFormat, LegendLocation,
    SaveOptions,
};

fn grid(rows: usize, cols: usize) -> Figure {
    Figure::new(FigureOptions::grid(rows, cols))
        .expect("valid grid")
        .into_result()
        .expect("no diagnostics")
}

#[test]
fn single_panel_ignores_indices() {
    let mut figure = grid(1, 1);
    figure.set_axis_label(4, 9, Axis::X, "anything").unwrap();

    for (row, col) in [(0, 0), (3, 0), (0, 7), (100, 100)] {
        assert_eq!(figure.panel(row, col).unwrap().label(Axis::X), "anything");
    }
}

#[test]
fn single_row_and_column_use_one_index() {
    let mut row = grid(1, 4);
    row.set_axis_label(99, 2, Axis::Y, "third").unwrap();
    assert_eq!(row.panel(0, 2).unwrap().label(Axis::Y), "third");
    assert!(matches!(row.panel(0, 4), Err(Error::PanelOutOfBounds { .. })));

    let mut column = grid(3, 1);
    column.set_axis_label(1, 99, Axis::Y, "second").unwrap();
    assert_eq!(column.panel(1, 0).unwrap().label(Axis::Y), "second");
    assert!(matches!(column.panel(3, 0), Err(Error::PanelOutOfBounds { .. })));
}

#[test]
fn general_grid_panels_are_distinct_and_stable() {
    let mut figure = grid(2, 2);
    for row in 0..2 {
        for col in 0..2 {
            figure
                .set_axis_label(row, col, Axis::X, format!("{row},{col}"))
                .unwrap();
        }
    }

    for row in 0..2 {
        for col in 0..2 {
            let expected = format!("{row},{col}");
            assert_eq!(figure.panel(row, col).unwrap().label(Axis::X), expected);
            assert_eq!(figure.panel(row, col).unwrap().label(Axis::X), expected);
        }
    }
    assert!(matches!(figure.panel(1, 2), Err(Error::PanelOutOfBounds { .. })));
}

#[test]
fn linear_fit_reports_equation() {
    let mut figure = grid(2, 1);
    let x: Vec<f64> = (0..25).map(|i| f64::from(i) * 0.4).collect();
    let y: Vec<f64> = x.iter().map(|x| 2.0 * x + 3.0).collect();

    let result = figure
        .fit_linear(1, 0, &x, &y, &FitOptions::linear().returning())
        .unwrap()
        .into_result()
        .unwrap()
        .expect("result requested");

    assert_all_close!(result.coefficients(), [2.0, 3.0], 1e-9);
    assert_eq!(result.equation, "2.0x + 3.0");
    assert_eq!(result.curve_x.first(), Some(&0.0));
    assert_eq!(figure.panel(1, 0).unwrap().series().len(), 1);
    assert!(figure.panel(0, 0).unwrap().series().is_empty());
}

#[test]
fn fit_result_only_when_requested() {
    let mut figure = grid(1, 1);
    let outcome = figure
        .fit_polynomial(0, 0, &[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], &FitOptions::polynomial(2))
        .unwrap();
    assert!(outcome.is_clean());
    assert!(outcome.into_value().is_none());
}

#[test]
fn series_transforms() {
    assert_eq!(normalize(&[2.0, 4.0, 6.0]).unwrap(), vec![0.0, 0.5, 1.0]);
    assert!(matches!(normalize(&[1.0, 1.0]), Err(Error::ConstantSeries(_))));

    let (x, y) = restrict_domain(
        &[0.0, 1.0, 2.0, 3.0, 4.0],
        &[0.0, 10.0, 20.0, 30.0, 40.0],
        1.0,
        3.0,
    )
    .unwrap();
    assert_eq!((x, y), (vec![2.0], vec![20.0]));

    assert_eq!(translate(&[1.0, 2.0, 3.0], 5.0), vec![6.0, 7.0, 8.0]);
}

#[test]
fn invalid_limit_keeps_previous() {
    let mut figure = grid(1, 1);
    assert!(figure
        .set_axis_limit(0, 0, Axis::Y, -1.0..1.0)
        .unwrap()
        .is_clean());

    let outcome = figure.set_axis_limit(0, 0, Axis::Y, 1.0..-1.0).unwrap();
    assert!(outcome.has(DiagnosticKind::InvalidAxisRange));
    assert!(outcome.into_result().is_err());
    assert_eq!(figure.panel(0, 0).unwrap().limit(Axis::Y), Some(&(-1.0..1.0)));
}

#[test]
fn annotate_without_position_still_draws_curve() {
    let mut figure = grid(1, 1);
    let options = FitOptions {
        annotate: true,
        ..FitOptions::linear()
    };
    let outcome = figure
        .fit_linear(0, 0, &[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0], &options)
        .unwrap();

    assert_eq!(outcome.diagnostics().len(), 1);
    assert_eq!(outcome.diagnostics()[0].kind(), DiagnosticKind::AnnotationSkipped);

    let panel = figure.panel(0, 0).unwrap();
    assert_eq!(panel.series().len(), 1);
    assert!(panel.annotations().is_empty());
}

#[test]
fn save_name_comes_from_tag() {
    let figure = Figure::new(FigureOptions::default().with_tag("run.v2"))
        .unwrap()
        .into_value();

    let path = plan_path(figure.tag(), &SaveOptions::default()).into_value();
    assert_eq!(path.to_str(), Some("run.v2.svg"));

    let options = SaveOptions::default().with_format(ImageFormat::Png);
    let path = plan_path(figure.tag(), &options).into_value();
    assert_eq!(path.to_str(), Some("run.v2.png"));

    let options = SaveOptions::default().with_filename("final.svg");
    let path = plan_path(figure.tag(), &options).into_value();
    assert_eq!(path.to_str(), Some("final.svg"));
}

fn smoke_figure() -> Figure {
    let mut figure = Figure::new(FigureOptions::grid(1, 2).with_title("Smoke").with_tag("smoke"))
        .unwrap()
        .into_value();
    figure
        .add_series(0, 0, &[0.0, 1.0, 2.0], &[1.0, 0.5, 2.0], Some("data"), None)
        .unwrap();
    figure.show_legend(0, 0, LegendLocation::Best, None).unwrap();

    let x: Vec<f64> = (0..10).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|x| 2.0 * x + 3.0).collect();
    let fit = figure
        .fit_linear(0, 1, &x, &y, &FitOptions::linear().annotate_at(1.0, 18.0))
        .unwrap();
    assert!(fit.is_clean());
    figure
}

#[test]
fn rendered_svg_shows_equation() {
    let svg = smoke_figure().render_svg().unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Smoke"));
    assert!(svg.contains("2.0x + 3.0"));
}

#[test]
fn save_svg_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = smoke_figure().save(&SaveOptions::default().with_directory(dir.path()));
    assert!(outcome.is_clean(), "{:?}", outcome.diagnostics());

    let path = outcome.into_value().expect("saved");
    assert_eq!(path, dir.path().join("smoke.svg"));
    assert!(path.is_file());

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("2.0x + 3.0"));
}

#[cfg(feature = "png")]
#[test]
fn save_png_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = SaveOptions::default()
        .with_directory(dir.path())
        .with_format(ImageFormat::Png)
        .with_dpi(50.0);

    let outcome = smoke_figure().save(&options);
    assert!(outcome.is_clean(), "{:?}", outcome.diagnostics());

    let path = outcome.into_value().expect("saved");
    assert_eq!(path, dir.path().join("smoke.png"));
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn csv_missing_column_is_lenient() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "time,voltage").unwrap();
    writeln!(file, "0,1.5").unwrap();
    writeln!(file, "1,2.5").unwrap();

    let outcome = Figure::load_columns(file.path(), &["time", "current"]);
    assert!(outcome.has(DiagnosticKind::MissingColumn));
    let columns = outcome.into_value();
    assert_eq!(columns[0], vec![0.0, 1.0]);
    assert!(columns[1].is_empty());

    let (x, y) = Figure::load_xy(file.path(), "time", "voltage").into_result().unwrap();
    assert_eq!(x, vec![0.0, 1.0]);
    assert_eq!(y, vec![1.5, 2.5]);
}
