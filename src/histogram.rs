use std::fs;
use std::path::Path;

use plotly::color::Rgb;
use plotly::common::{Line, Marker, Title};
use plotly::histogram::{Bins, HistFunc};
use plotly::layout::{Axis, Layout};
use plotly::{Histogram, ImageFormat, Plot};

use crate::errors::HistogramaError;

// The original figure is 10in x 6in at 100 dpi
const WIDTH: usize = 1000;
const HEIGHT: usize = 600;

/// Where a plot can be written, keyed by file extension.
enum Output {
    Static(ImageFormat),
    Html,
}

fn output_kind(path: &Path) -> Result<Output, HistogramaError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => Ok(Output::Static(ImageFormat::PNG)),
        Some("jpg") | Some("jpeg") => Ok(Output::Static(ImageFormat::JPEG)),
        Some("webp") => Ok(Output::Static(ImageFormat::WEBP)),
        Some("svg") => Ok(Output::Static(ImageFormat::SVG)),
        Some("pdf") => Ok(Output::Static(ImageFormat::PDF)),
        Some("html") => Ok(Output::Html),
        Some(other) => Err(HistogramaError::OutputWrite {
            path: path.display().to_string(),
            reason: format!("unsupported image format `{}`", other),
        }),
        None => Err(HistogramaError::OutputWrite {
            path: path.display().to_string(),
            reason: "missing file extension".to_string(),
        }),
    }
}

/// One bar per hour of day, bin edges on the hour, `[h, h+1)`.
fn build_plot(hours: &[i8], title: &str) -> Plot {
    let trace = Histogram::new(hours.to_vec())
        .hist_func(HistFunc::Count)
        .x_bins(Bins::new(0.0, 24.0, 1.0))
        .marker(
            Marker::new()
                .color(Rgb::new(135, 206, 235))
                .line(Line::new().color(Rgb::new(0, 0, 0)).width(1.0)),
        );
    let layout = Layout::new()
        .title(Title::with_text(title))
        .x_axis(
            Axis::new()
                .title(Title::with_text("Hora del dia"))
                .range(vec![0.0, 24.0])
                .dtick(1.0),
        )
        .y_axis(
            Axis::new()
                .title(Title::with_text("Numero de ocurrencias"))
                .show_grid(true),
        )
        .width(WIDTH)
        .height(HEIGHT);
    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

fn nonempty(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}

/// Render the hour histogram to `output`.  The extension picks the
/// format: png, jpg, webp, svg and pdf go through the Kaleido export
/// backend, html writes a self-contained interactive page.
pub fn render(hours: &[i8], title: &str, output: &Path) -> Result<(), HistogramaError> {
    let kind = output_kind(output)?;
    let plot = build_plot(hours, title);

    // Probe the destination first; the renderer reports nothing useful
    // for an unwritable path
    fs::write(output, b"").map_err(|e| HistogramaError::OutputWrite {
        path: output.display().to_string(),
        reason: e.to_string(),
    })?;

    let written = match kind {
        Output::Static(format) => {
            // Kaleido normalizes the extension, e.g. jpg -> jpeg
            let normalized = output.with_extension(format.to_string());
            let _ = plot.write_image(output, format, WIDTH, HEIGHT, 1.0);
            if nonempty(&normalized) {
                normalized
            } else {
                output.to_path_buf()
            }
        }
        Output::Html => {
            plot.write_html(output);
            output.to_path_buf()
        }
    };

    if nonempty(&written) {
        Ok(())
    } else {
        Err(HistogramaError::OutputWrite {
            path: output.display().to_string(),
            reason: "renderer produced no output".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use plotly::ImageFormat;

    use crate::errors::HistogramaError;
    use crate::histogram::{build_plot, output_kind, render, Output};

    #[test]
    fn extension_selects_format() {
        assert!(matches!(
            output_kind(Path::new("histograma.png")),
            Ok(Output::Static(ImageFormat::PNG))
        ));
        assert!(matches!(
            output_kind(Path::new("charts/plot.JPG")),
            Ok(Output::Static(ImageFormat::JPEG))
        ));
        assert!(matches!(
            output_kind(Path::new("plot.html")),
            Ok(Output::Html)
        ));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        assert!(matches!(
            output_kind(Path::new("plot.bmp")),
            Err(HistogramaError::OutputWrite { .. })
        ));
        assert!(matches!(
            output_kind(Path::new("plot")),
            Err(HistogramaError::OutputWrite { .. })
        ));
    }

    #[test]
    fn histogram_trace_with_hourly_bins() {
        let plot = build_plot(&[0, 1, 1, 23], "Ocurrencias por hora");
        let value = serde_json::to_value(&plot).unwrap();
        assert_eq!(value["data"][0]["type"], "histogram");
        assert_eq!(value["data"][0]["xbins"]["start"], 0.0);
        assert_eq!(value["data"][0]["xbins"]["end"], 24.0);
        assert_eq!(value["data"][0]["xbins"]["size"], 1.0);
        assert_eq!(value["layout"]["title"]["text"], "Ocurrencias por hora");
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], "Hora del dia");
    }

    #[test]
    fn unwritable_output_path() {
        let err = render(&[1, 2, 2], "test", Path::new("no/such/dir/plot.html")).unwrap_err();
        assert!(matches!(err, HistogramaError::OutputWrite { .. }));
    }

    #[test]
    fn writes_html() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("histograma.html");
        render(&[0, 1, 1, 23], "Ocurrencias por hora", &out).unwrap();
        assert!(out.metadata().unwrap().len() > 0);
    }

    #[test]
    #[ignore] // needs the Kaleido binary
    fn writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("histograma.png");
        render(&[9, 9, 9, 14], "Ocurrencias por hora", &out).unwrap();
        assert!(out.metadata().unwrap().len() > 0);
    }
}
