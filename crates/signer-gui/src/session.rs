use std::path::{Path, PathBuf};

use signer_core::config::ViewerConfig;
use signer_core::coords::FileSink;
use signer_core::template::TemplateImage;
use signer_core::viewport::ViewportController;

use crate::convert::template_to_color_image;
use crate::input::WheelAccumulator;

/// One opened template: its controller, GPU texture and coordinate sink.
pub struct ViewerSession {
    pub path: PathBuf,
    pub controller: ViewportController,
    pub texture: egui::TextureHandle,
    pub sink: FileSink,
    pub wheel: WheelAccumulator,
    pub zoom_step: f64,
}

impl ViewerSession {
    pub fn open(ctx: &egui::Context, path: &Path, config: &ViewerConfig) -> anyhow::Result<Self> {
        let template = TemplateImage::open(path)?;

        let max_side = ctx.input(|i| i.max_texture_side);
        let (image, texture_scale) = template_to_color_image(&template, max_side);
        if texture_scale < 1.0 {
            tracing::warn!(
                scale = texture_scale,
                max_side,
                "template exceeds texture limit, display is downscaled"
            );
        }
        let texture = ctx.load_texture("template", image, egui::TextureOptions::LINEAR);

        let mut controller = ViewportController::new(template, config.show_grid);
        controller.set_scroll_unit(config.scroll_unit_px);

        tracing::info!(
            path = %path.display(),
            width = controller.image().width(),
            height = controller.image().height(),
            "template opened"
        );

        Ok(Self {
            path: path.to_path_buf(),
            controller,
            texture,
            sink: FileSink::new(config.coords_path.clone()),
            wheel: WheelAccumulator::default(),
            zoom_step: config.zoom_step,
        })
    }
}
