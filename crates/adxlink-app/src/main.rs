slint::include_modules!();

mod chart;

use adxlink_app::init_logging;
use adxlink_core::{AxisWindows, FrameReader, SerialConfig, SerialError};
use adxlink_decode::{decode_scaled, TRIAXIAL_FRAME_LEN};
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const PLOT_PORT: &str = "/dev/ttyUSB4";
const PLOT_BAUD: u32 = 9600;
const WINDOW_SIZE: usize = 100;
const REFRESH_INTERVAL: Duration = Duration::from_millis(50);
const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 600;

fn main() -> Result<()> {
    init_logging();

    let port = SerialConfig::new(PLOT_PORT, PLOT_BAUD).open()?;
    let mut reader = FrameReader::<_, TRIAXIAL_FRAME_LEN>::new(port);
    let mut windows = AxisWindows::new(WINDOW_SIZE);
    let mut samples: u64 = 0;

    let app = MainWindow::new()?;
    app.set_chart(chart::render(&windows, CHART_WIDTH, CHART_HEIGHT)?);
    app.set_status(status_line(samples).into());

    // A read failure ends the event loop and is returned from main.
    let failure: Rc<RefCell<Option<SerialError>>> = Rc::new(RefCell::new(None));

    let app_weak = app.as_weak();
    let failure_clone = failure.clone();
    let timer = slint::Timer::default();
    timer.start(slint::TimerMode::Repeated, REFRESH_INTERVAL, move || {
        let Some(app) = app_weak.upgrade() else {
            return;
        };
        match reader.poll_frame() {
            Ok(Some(frame)) => {
                windows.push(decode_scaled(&frame));
                samples += 1;
                match chart::render(&windows, CHART_WIDTH, CHART_HEIGHT) {
                    Ok(image) => app.set_chart(image),
                    Err(e) => log::warn!("chart redraw failed: {e:#}"),
                }
                app.set_status(status_line(samples).into());
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("serial read failed: {e}");
                *failure_clone.borrow_mut() = Some(e);
                let _ = slint::quit_event_loop();
            }
        }
    });

    app.run()?;
    drop(timer);

    let failure = failure.borrow_mut().take();
    match failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn status_line(samples: u64) -> String {
    format!("{PLOT_PORT} @ {PLOT_BAUD} baud, {samples} samples")
}
