use adxlink_core::AxisWindows;
use anyhow::Result;
use plotters::prelude::*;
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};

const SERIES_COLORS: [RGBColor; 3] = [RED, GREEN, BLUE];

/// Draws the three axis traces into an RGB bitmap the window can show.
pub fn render(windows: &AxisWindows, width: u32, height: u32) -> Result<Image> {
    let mut pixels = SharedPixelBuffer::<Rgb8Pixel>::new(width, height);
    {
        let backend = BitMapBackend::with_buffer(pixels.make_mut_bytes(), (width, height));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)?;

        let (y_lo, y_hi) = windows.y_range();
        let mut chart = ChartBuilder::on(&root)
            .caption("Real-Time Accelerometer Data", ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..windows.capacity() as f64, y_lo..y_hi)?;

        chart
            .configure_mesh()
            .x_desc("Samples")
            .y_desc("Acceleration (g)")
            .draw()?;

        for ((label, window), color) in windows.axes().into_iter().zip(SERIES_COLORS) {
            let points = window.iter().enumerate().map(|(i, &v)| (i as f64, v));
            chart
                .draw_series(LineSeries::new(points, color))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
    }
    Ok(Image::from_rgb8(pixels))
}
