use braille_trends::{
    ChartConfig, DataPoint, Palette, Rasterizer, Resampler, Series, Timeframe,
    core::data::read_csv_fast,
    render::{Owner, value_to_row},
    render_chart,
};
use chrono::{Days, NaiveDate};

fn daily(label: &str, values: &[i32]) -> Series {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    Series::new(
        label,
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| DataPoint {
                date: start + Days::new(i as u64),
                value,
            })
            .collect(),
    )
}

fn plain(width: usize, height: usize) -> ChartConfig {
    ChartConfig::builder(width)
        .height(height)
        .timeframe(Timeframe::Quarter)
        .geo("GB")
        .updated(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
        .styled(false)
        .build()
        .unwrap()
}

#[test]
fn peak_series_end_to_end() {
    let series = daily("rust", &[10, 20, 100, 50, 10]);

    let samples = Resampler::new(20).resample(&series.values());
    assert_eq!(samples.len(), 20);
    assert!((samples[0] - 10.0).abs() < 1e-9);
    assert!((samples[19] - 10.0).abs() < 1e-9);
    // piecewise linear: rising through the first half, falling after
    assert!(samples[..11].windows(2).all(|w| w[0] <= w[1]));
    assert!(samples[10..].windows(2).all(|w| w[0] >= w[1]));

    let (peak_col, peak) = samples
        .iter()
        .copied()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    assert_eq!(value_to_row(peak, 16), 0);

    let grid = Rasterizer::new(10, 4).ownership(&[samples]).unwrap();
    let top_row: Vec<usize> = (0..20).filter(|&c| grid.get(0, c).is_some()).collect();
    assert_eq!(top_row, vec![peak_col]);
    assert_eq!(grid.get(0, peak_col), Some(Owner::line(0)));

    let summary = series.summary().unwrap();
    assert_eq!(summary.peak_value, 100);
    assert_eq!(summary.peak_date, NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
    assert_eq!(summary.current_value, 10);
    assert!((summary.avg_value - 38.0).abs() < f64::EPSILON);

    let frame = render_chart(&[series], &plain(10, 4)).unwrap();
    assert_eq!(frame.body.len(), 4);
    assert!(
        frame
            .footer
            .iter()
            .any(|l| l == "  Peak: 100 (Mar 03, 2024)   Current: 10   Avg: 38.0")
    );
}

#[test]
fn crossing_series_both_render() {
    let a = daily("a", &[0, 100]);
    let b = daily("b", &[100, 0]);
    let resampler = Resampler::new(2);
    let samples = resampler.resample_all(&[a.values(), b.values()]);

    let r = Rasterizer::new(1, 4);
    let grid = r.ownership(&samples).unwrap();
    assert_eq!(grid.get(0, 0), Some(Owner::line(1)));
    assert_eq!(grid.get(15, 0), Some(Owner::line(0)));
    assert_eq!(grid.get(0, 1), Some(Owner::line(0)));
    assert_eq!(grid.get(15, 1), Some(Owner::line(1)));

    let rows = r.rasterize(&samples, &Palette::default()).unwrap();
    assert_eq!(rows.len(), 4);

    let frame = render_chart(&[a, b], &plain(1, 4)).unwrap();
    assert_eq!(frame.body.len(), 4);
}

#[test]
fn csv_to_frame() {
    let csv = "date,rust,go\n2024-01-07,45,60\n2024-01-14,50,\n2024-01-21,100,20\n";
    let series = read_csv_fast(csv.as_bytes()).unwrap();
    let frame = render_chart(&series, &plain(40, 18)).unwrap();

    assert_eq!(frame.body.len(), 18);
    assert!(frame.body[0].starts_with("  100 "));
    assert!(frame.body[17].starts_with("    0 "));
    assert!(frame.header[1].contains("UNITED KINGDOM"));
    assert!(frame.header[1].contains("Jan 2024 – Jan 2024"));
    assert!(frame.x_axis.trim_start().starts_with("Jan '24"));
    assert_eq!(frame.footer.iter().filter(|l| l.contains('●')).count(), 2);
    // every body row: 5 label columns, a gutter, 40 glyphs
    assert!(frame.body.iter().all(|l| l.chars().count() == 46));
}

#[test]
fn empty_series_renders_flat_floor() {
    let frame = render_chart(&[daily("none", &[])], &plain(12, 3)).unwrap();
    assert_eq!(frame.x_axis.trim(), "");
    assert!(frame.footer.iter().any(|l| l.contains("No data")));
    // zero line on the bottom pixel row of the last character row
    assert!(frame.body[2].ends_with(&"⣀".repeat(12)));
    assert!(frame.body[0].ends_with(&" ".repeat(12)));
}

#[test]
fn independent_renders_do_not_share_state() {
    let cfg = plain(20, 6);
    let one = render_chart(&[daily("x", &[1, 90, 3])], &cfg).unwrap();
    let _other = render_chart(&[daily("y", &[100, 100])], &cfg).unwrap();
    let again = render_chart(&[daily("x", &[1, 90, 3])], &cfg).unwrap();
    assert_eq!(one, again);
}
