use std::error::Error;

use log::{debug, error};
use show_image::{create_window, run_context, ImageInfo, ImageView, WindowOptions};

use super::{render_rgb, Figure, RenderError};

/// Open the figure in a window and block until the window is closed
///
/// The figure is rasterised before the window system is started, so rendering
/// failures are still returned to the caller. Once the window is up, control
/// never comes back: the process exits when the window is closed. Must be
/// called from the main thread.
pub fn show(figure: &Figure) -> Result<(), RenderError> {
    let (width, height) = figure.pixel_size();
    let buffer = render_rgb(figure)?;
    let title = figure.window_title();
    debug!("Opening {}x{} window '{}'", width, height, title);

    run_context(move || -> Result<(), Box<dyn Error>> {
        let options = WindowOptions::new().set_size([width, height]);
        let window = create_window(title, options)?;
        window.set_image("figure", ImageView::new(ImageInfo::rgb8(width, height), &buffer))?;
        if let Err(e) = window.wait_until_destroyed() {
            error!("Display window failed: {}", e);
            return Err(e.into());
        }
        Ok(())
    })
}
