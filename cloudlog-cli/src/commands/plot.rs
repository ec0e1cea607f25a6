//! Implementation of the 'plot' subcommand.

use crate::cli::PlotArgs;

use cloudlog_core::{CloudLog, CoreResult, ImageFileRenderer};

use log::debug;

/// Publishes `args.image` through the facade. Returns the stored plot filename.
pub fn run_plot(log: &CloudLog, args: &PlotArgs) -> CoreResult<String> {
    let renderer = ImageFileRenderer::new(&args.image);
    let plot_file = log.publish_plot(&renderer, args.notify, args.caption.as_deref())?;
    debug!("Published {} as {}", args.image.display(), plot_file);
    Ok(plot_file)
}
