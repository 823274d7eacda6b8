use crate::detector::core::{Event, LoadedImage, NoticeLevel, Phase, State};
use crate::detector::main::Detector;
use crate::detector::theme::{
    COLOR_MUTED, COLOR_NEGATIVE, COLOR_POSITIVE, COLOR_PRIMARY, COLOR_WARNING,
};
use crate::preview::Preview;
use crate::result_policy::label;
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "tiff", "tif"];

pub struct DetectorApp {
    detector: Detector,
    preview: Option<(Arc<Preview>, egui::TextureHandle)>,
}

impl DetectorApp {
    pub fn new(detector: Detector) -> Self {
        Self {
            detector,
            preview: None,
        }
    }

    fn sync_preview(&mut self, ctx: &egui::Context) {
        let Some(image) = &self.detector.state().image else {
            self.preview = None;
            return;
        };

        if !preview_changed(self.preview.as_ref().map(|(preview, _)| preview), image) {
            return;
        }

        let color_image =
            egui::ColorImage::from_rgba_unmultiplied(image.preview.size, &image.preview.rgba);
        let texture = ctx.load_texture(
            image.path.display().to_string(),
            color_image,
            egui::TextureOptions::default(),
        );
        self.preview = Some((image.preview.clone(), texture));
    }

    fn pick_image() -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select an MRI image")
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .add_filter("PNG", &["png"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .add_filter("All files", &["*"])
            .pick_file()
    }
}

/// Reloading the same path yields a fresh preview, so the texture follows the allocation.
fn preview_changed(cached: Option<&Arc<Preview>>, image: &LoadedImage) -> bool {
    !cached.is_some_and(|preview| Arc::ptr_eq(preview, &image.preview))
}

impl eframe::App for DetectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.detector.poll();

        if self.detector.state().is_busy() {
            ctx.request_repaint();
        }

        self.sync_preview(ctx);

        let mut events = Vec::new();

        draw_header(ctx);
        draw_footer(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let state = self.detector.state();

            ui.group(|ui| {
                ui.set_min_height(260.0);
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("MRI image").strong());
                    match &self.preview {
                        Some((_, texture)) => {
                            ui.add(
                                egui::Image::new(texture).max_size(egui::vec2(400.0, 240.0)),
                            );
                        }
                        None => {
                            ui.add_space(80.0);
                            ui.label(
                                egui::RichText::new(
                                    "No image loaded\n\nClick 'Load MRI image' to get started",
                                )
                                .color(COLOR_MUTED),
                            );
                        }
                    }
                });
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let load = ui.add_enabled(
                    !state.is_busy(),
                    egui::Button::new("Load MRI image").fill(COLOR_PRIMARY),
                );
                if load.clicked() {
                    if let Some(path) = Self::pick_image() {
                        events.push(Event::ImageSelected(path));
                    }
                }

                let analyze_label = if state.phase == Phase::Analyzing {
                    "Analyzing..."
                } else {
                    "Analyze"
                };
                let analyze = ui.add_enabled(
                    state.can_analyze(),
                    egui::Button::new(analyze_label).fill(COLOR_NEGATIVE),
                );
                if analyze.clicked() {
                    events.push(Event::AnalyzeRequested);
                }

                if state.is_busy() {
                    ui.spinner();
                }
                if let Phase::Loading { path } = &state.phase {
                    ui.label(
                        egui::RichText::new(format!("Loading {}", path.display()))
                            .color(COLOR_MUTED),
                    );
                }
            });

            ui.add_space(8.0);

            draw_results(ui, state);
        });

        for event in events {
            self.detector.dispatch(event);
        }
    }
}

fn draw_header(ctx: &egui::Context) {
    egui::TopBottomPanel::top("header")
        .frame(egui::Frame::default().fill(COLOR_PRIMARY).inner_margin(16.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Brain Tumor Detector")
                        .size(24.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.label(
                    egui::RichText::new("Brain tumor detection with artificial intelligence")
                        .color(egui::Color32::from_rgb(224, 231, 255)),
                );
            });
        });
}

fn draw_footer(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.small(
                egui::RichText::new("Inference by tract | For educational and research use only")
                    .color(COLOR_MUTED),
            );
        });
    });
}

fn draw_results(ui: &mut egui::Ui, state: &State) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Analysis results").strong());

        if let Some(notice) = &state.notice {
            let color = match notice.level {
                NoticeLevel::Info => COLOR_MUTED,
                NoticeLevel::Warning => COLOR_WARNING,
                NoticeLevel::Error => COLOR_POSITIVE,
            };
            ui.label(egui::RichText::new(&notice.message).color(color));
        }

        match &state.report {
            Some(report) => {
                let color = if report.result.is_positive {
                    COLOR_POSITIVE
                } else {
                    COLOR_NEGATIVE
                };
                ui.label(
                    egui::RichText::new(label(report.result.is_positive))
                        .size(18.0)
                        .strong()
                        .color(color),
                );
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.label(egui::RichText::new(&report.text).monospace().color(color));
                });
            }
            None if state.notice.is_none() => {
                ui.label(egui::RichText::new("Waiting for analysis...").color(COLOR_MUTED));
            }
            None => {}
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(path: &str, preview: Arc<Preview>) -> LoadedImage {
        LoadedImage {
            path: PathBuf::from(path),
            preview,
        }
    }

    fn grey_preview() -> Arc<Preview> {
        Arc::new(Preview {
            size: [1, 1],
            rgba: vec![128, 128, 128, 255],
        })
    }

    #[test]
    fn test_new_image_needs_texture() {
        assert!(preview_changed(None, &loaded("scan.png", grey_preview())));
    }

    #[test]
    fn test_same_preview_keeps_texture() {
        let preview = grey_preview();

        assert!(!preview_changed(
            Some(&preview),
            &loaded("scan.png", preview.clone())
        ));
    }

    #[test]
    fn test_reloaded_path_replaces_texture() {
        let cached = grey_preview();
        let reloaded = loaded("scan.png", grey_preview());

        assert_eq!(*cached, *reloaded.preview);
        assert!(preview_changed(Some(&cached), &reloaded));
    }
}
