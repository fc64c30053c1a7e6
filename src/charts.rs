use std::fmt::Display;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::constants::{CO2_CHART, COMBINED_CHART, TEMP_HUMIDITY_CHART, VOLTAGE_CURRENT_CHART};
use crate::error::MonitorError;
use crate::util::{padded_range, value_bounds};
use crate::window::SampleWindow;

const TEMP_RGB: RGBColor = RED;
const HUMIDITY_RGB: RGBColor = BLUE;
const CO2_RGB: RGBColor = RGBColor(255, 165, 0);
const VOLTAGE_RGB: RGBColor = GREEN;
const CURRENT_RGB: RGBColor = RGBColor(128, 0, 128);

struct SeriesSpec<'a> {
    label: &'a str,
    color: RGBColor,
    points: &'a [(f64, f64)],
}

/// Write the combined chart plus the three standalone charts for the final
/// window snapshot. Returns the paths written.
pub fn save_all(window: &SampleWindow, dir: &Path) -> Result<Vec<PathBuf>, MonitorError> {
    if window.is_empty() {
        log::warn!("no samples in window; summary charts will be empty");
    }

    let temps = window.series(|s| s.temperature);
    let humidities = window.series(|s| s.humidity);
    let ppms = window.series(|s| s.co2_ppm);
    let voltages = window.series(|s| s.voltage);
    let currents = window.series(|s| s.current_ma);

    let temp_humidity = [
        SeriesSpec { label: "Temp (°C)", color: TEMP_RGB, points: &temps },
        SeriesSpec { label: "Humidity (%)", color: HUMIDITY_RGB, points: &humidities },
    ];
    let co2 = [SeriesSpec { label: "CO2 (PPM)", color: CO2_RGB, points: &ppms }];
    let voltage_current = [
        SeriesSpec { label: "Voltage (V)", color: VOLTAGE_RGB, points: &voltages },
        SeriesSpec { label: "Current (mA)", color: CURRENT_RGB, points: &currents },
    ];

    let combined = dir.join(COMBINED_CHART);
    {
        let root = BitMapBackend::new(&combined, (1000, 1200)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;
        let panels = root.split_evenly((3, 1));
        draw_panel(&panels[0], "Temperature and Humidity vs Time", "Temp / Humidity", &temp_humidity)?;
        draw_panel(&panels[1], "CO2 Concentration vs Time", "CO2 (PPM)", &co2)?;
        draw_panel(&panels[2], "Voltage and Current vs Time", "Voltage / Current", &voltage_current)?;
        root.present().map_err(chart_err)?;
    }

    let paths = vec![
        combined,
        save_single(dir.join(TEMP_HUMIDITY_CHART), "Temperature and Humidity vs Time", "Temp / Humidity", &temp_humidity)?,
        save_single(dir.join(CO2_CHART), "CO2 Concentration vs Time", "CO2 (PPM)", &co2)?,
        save_single(dir.join(VOLTAGE_CURRENT_CHART), "Voltage and Current vs Time", "Voltage / Current", &voltage_current)?,
    ];
    Ok(paths)
}

fn save_single(
    path: PathBuf,
    title: &str,
    y_desc: &str,
    series: &[SeriesSpec],
) -> Result<PathBuf, MonitorError> {
    {
        let root = BitMapBackend::new(&path, (800, 500)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;
        draw_panel(&root, title, y_desc, series)?;
        root.present().map_err(chart_err)?;
    }
    Ok(path)
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    title: &str,
    y_desc: &str,
    series: &[SeriesSpec],
) -> Result<(), MonitorError> {
    let (x_lo, x_hi) = x_range(series);
    let slices: Vec<&[(f64, f64)]> = series.iter().map(|s| s.points).collect();
    let (y_min, y_max) = value_bounds(&slices).unwrap_or((0.0, 1.0));
    let (y_lo, y_hi) = padded_range(y_min, y_max);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc(y_desc)
        .draw()
        .map_err(chart_err)?;

    for spec in series {
        let color = spec.color;
        chart
            .draw_series(LineSeries::new(spec.points.iter().copied(), &color))
            .map_err(chart_err)?
            .label(spec.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(chart_err)?;

    Ok(())
}

/// X span across all series, with a default when there are no points yet.
fn x_range(series: &[SeriesSpec]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for spec in series {
        for &(x, _) in spec.points {
            if x < lo {
                lo = x;
            }
            if x > hi {
                hi = x;
            }
        }
    }
    if lo > hi {
        return (0.0, 1.0);
    }
    padded_range(lo, hi)
}

fn chart_err<E: Display>(err: E) -> MonitorError {
    MonitorError::Chart(err.to_string())
}
