use signer_core::template::TemplateImage;

/// Convert a template to an egui ColorImage, downscaling it when it exceeds
/// the GPU texture limit. Returns the image and the applied scale factor.
pub fn template_to_color_image(
    template: &TemplateImage,
    max_side: usize,
) -> (egui::ColorImage, f32) {
    let (w, h) = (template.width() as usize, template.height() as usize);
    let longest = w.max(h);

    let (rgba, scale) = if longest > max_side {
        let scale = max_side as f32 / longest as f32;
        let tw = ((w as f32 * scale).floor() as u32).max(1);
        let th = ((h as f32 * scale).floor() as u32).max(1);
        (template.resize(tw, th), scale)
    } else {
        (template.pixels().to_rgba8(), 1.0)
    };

    let size = [rgba.width() as usize, rgba.height() as usize];
    (
        egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()),
        scale,
    )
}
