use std::path::{Path, PathBuf};

use egui::{Color32, CornerRadius, Frame, RichText, Slider, Ui};
use egui_phosphor::regular;

use crate::ui::audio_player::PreviewState;

/// Audio preview widget: shows the file name and playback controls
#[derive(Debug)]
pub struct Audio {
    pub label: String,
    /// Whether the user may replace the audio (upload); preview only otherwise
    pub interactive: bool,
    player: PreviewState,
    last_error: Option<String>,
}

impl Audio {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            interactive: true,
            player: PreviewState::new(),
            last_error: None,
        }
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn source(&self) -> Option<&Path> {
        self.player.source.as_deref()
    }

    /// Point the preview at a file, or clear it with `None`
    pub fn set_source(&mut self, source: Option<PathBuf>) {
        self.last_error = None;
        self.player.set_source(source);
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing
    }

    pub fn show(&mut self, ui: &mut Ui) {
        self.player.update_from_backend();
        if self.player.is_playing {
            ui.ctx().request_repaint();
        }

        Frame::new()
            .inner_margin(8.0)
            .fill(ui.visuals().faint_bg_color)
            .corner_radius(CornerRadius::same(6))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&self.label).weak().size(12.0));

                let Some(source) = self.player.source.clone() else {
                    ui.label(
                        RichText::new(format!("{} -", regular::MUSIC_NOTES))
                            .size(16.0)
                            .color(ui.visuals().weak_text_color()),
                    );
                    return;
                };

                let name = source
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| source.display().to_string());
                ui.label(
                    RichText::new(name)
                        .color(ui.visuals().strong_text_color())
                        .size(14.0),
                )
                .on_hover_text(source.display().to_string());

                ui.horizontal(|ui| {
                    let (play_icon, play_color) = if self.player.is_playing {
                        (regular::PAUSE_CIRCLE, Color32::from_rgb(255, 200, 100))
                    } else {
                        (regular::PLAY_CIRCLE, Color32::from_rgb(100, 255, 150))
                    };
                    let play = egui::Button::new(RichText::new(play_icon).size(22.0).color(play_color));
                    if ui.add(play).clicked() {
                        if let Err(e) = self.player.toggle_play() {
                            log::error!("Preview playback failed: {e}");
                            self.last_error = Some(e.to_string());
                        }
                    }

                    let can_stop = self.player.is_playing || self.player.current_position > 0.0;
                    let stop = egui::Button::new(RichText::new(regular::STOP_CIRCLE).size(22.0));
                    if ui.add_enabled(can_stop, stop).clicked() {
                        self.player.stop();
                    }

                    ui.label(RichText::new(self.player.format_position()).monospace());

                    let mut progress = self.player.progress();
                    let seek = ui
                        .scope(|ui| {
                            ui.spacing_mut().slider_width = (ui.available_width() - 140.0).max(60.0);
                            ui.add_enabled(
                                self.player.total_duration > 0.0,
                                Slider::new(&mut progress, 0.0..=1.0).show_value(false),
                            )
                        })
                        .inner;
                    if seek.drag_stopped() || seek.clicked() {
                        self.player.set_position(progress * self.player.total_duration);
                    }

                    ui.label(RichText::new(self.player.format_duration()).monospace());

                    let volume_icon = if self.player.is_muted || self.player.volume <= 0.0 {
                        regular::SPEAKER_NONE
                    } else if self.player.volume < 0.5 {
                        regular::SPEAKER_LOW
                    } else {
                        regular::SPEAKER_HIGH
                    };
                    if ui.button(RichText::new(volume_icon).size(16.0)).clicked() {
                        self.player.toggle_mute();
                    }
                });

                if let Some(error) = &self.last_error {
                    ui.colored_label(Color32::RED, error);
                }
            });
    }
}
