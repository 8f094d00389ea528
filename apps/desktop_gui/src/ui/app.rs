use arboard::Clipboard;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use editor_core::{Edit, EditorRow, InputField, InputKind};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{err_label, UiError, UiErrorContext, UiEvent},
    orchestration::dispatch_backend_command,
    reducer::EditorScreen,
};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub api_url: String,
}

pub struct ParamsEditorApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    api_url: String,
    screen: EditorScreen,
}

impl ParamsEditorApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            api_url: startup.api_url,
            screen: EditorScreen::new(),
        };
        app.request_load();
        app
    }

    fn request_load(&mut self) {
        self.screen.begin_reload();
        if !dispatch_backend_command(&self.cmd_tx, BackendCommand::Load, &mut self.screen.status) {
            // Nobody will answer; leave the loading state with the queue error shown.
            let message = self.screen.status.clone();
            self.screen.handle_event(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                message,
            )));
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.screen.handle_event(event);
        }
    }

    fn print_model(&mut self) {
        let model = self.screen.snapshot();
        match serde_json::to_string(&model) {
            Ok(json) => {
                tracing::info!(values = model.param_values.len(), "model snapshot: {json}");
                self.screen.status = "Model written to the log".to_string();
            }
            Err(err) => tracing::error!("failed to serialize model snapshot: {err}"),
        }
    }

    fn copy_model_json(&mut self) {
        let result = serde_json::to_string_pretty(&self.screen.snapshot())
            .map_err(|err| err.to_string())
            .and_then(|json| {
                Clipboard::new()
                    .and_then(|mut clipboard| clipboard.set_text(json))
                    .map_err(|err| err.to_string())
            });
        match result {
            Ok(()) => self.screen.status = "Model JSON copied to clipboard".to_string(),
            Err(err) => {
                self.screen.error = Some(UiError::from_message(
                    UiErrorContext::Clipboard,
                    format!("clipboard unavailable: {err}"),
                ));
            }
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(err) = self.screen.error.clone() else {
            return;
        };

        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(111, 53, 53))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}: {}",
                            err_label(err.category()),
                            err.message()
                        ))
                        .color(egui::Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.screen.error = None;
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_loading_screen(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.35);
                ui.spinner();
                ui.heading("Loading…");
                ui.label(egui::RichText::new(&self.api_url).weak());
            });
        });
    }

    fn show_actions(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("editor_actions").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Print model").clicked() {
                    self.print_model();
                }
                if ui.button("Copy JSON").clicked() {
                    self.copy_model_json();
                }
                if ui.button("Reload").clicked() {
                    self.request_load();
                }
                ui.separator();
                ui.label(egui::RichText::new(&self.screen.status).weak());
            });
            ui.add_space(6.0);
        });
    }

    fn show_editor(&mut self, ctx: &egui::Context) {
        let rows = self.screen.rows();
        let changed = self.screen.changed_ids();
        let mut edits = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);

            if rows.is_empty() {
                ui.label(egui::RichText::new("No parameters to edit").weak());
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("params_grid")
                    .num_columns(2)
                    .striped(true)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        for (row_index, row) in rows.iter().enumerate() {
                            let changed = changed.contains(&row.param_id);
                            render_row(ui, row_index, row, changed, &mut edits);
                            ui.end_row();
                        }
                    });
            });
        });

        for edit in edits {
            self.screen.apply_edit(&edit);
        }
    }
}

/// Widget id of one input. The model may repeat a parameter id, so the row
/// position is part of the salt.
fn input_salt(row_index: usize, input: &InputField) -> egui::Id {
    egui::Id::new(("param_input", row_index, input.key.to_string()))
}

fn render_row(
    ui: &mut egui::Ui,
    row_index: usize,
    row: &EditorRow,
    changed: bool,
    edits: &mut Vec<Edit>,
) {
    let label = egui::RichText::new(&row.label).strong();
    ui.label(if changed { label.italics() } else { label })
        .on_hover_text(format!("parameter {}", row.param_id));

    ui.horizontal(|ui| {
        for input in &row.inputs {
            let mut text = input.value.clone();
            let edit = egui::TextEdit::singleline(&mut text)
                .id_salt(input_salt(row_index, input));
            let edit = match input.kind {
                InputKind::Number => edit
                    .desired_width(90.0)
                    .horizontal_align(egui::Align::Max),
                InputKind::Text => edit.desired_width(if row.inputs.len() > 1 { 90.0 } else { 220.0 }),
            };
            if ui.add(edit).changed() {
                edits.push(Edit::new(input.key, text));
            }
        }
    });
}

impl eframe::App for ParamsEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        if self.screen.is_loading() {
            self.show_loading_screen(ctx);
        } else {
            self.show_actions(ctx);
            self.show_editor(ctx);
        }

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor_core::ParamsEditor;
    use shared::{
        domain::ParamId,
        protocol::{Model, ParameterValue},
    };

    #[test]
    fn repeated_param_ids_get_distinct_input_ids() {
        let model = Model {
            param_values: vec![
                ParameterValue::new(ParamId(7), "a"),
                ParameterValue::new(ParamId(7), "b"),
            ],
        };
        let editor = ParamsEditor::new(&[], model);
        let rows = editor.rows(&editor.initial_values());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].inputs[0].key, rows[1].inputs[0].key);

        let first = input_salt(0, &rows[0].inputs[0]);
        let second = input_salt(1, &rows[1].inputs[0]);
        assert_ne!(first, second);
        assert_eq!(first, input_salt(0, &rows[0].inputs[0]));
    }
}
