//! Application Controller fuer zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Host-Events und Use-Cases auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent ueber Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Fuehrt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Zeichnen ===
            AppCommand::BeginStroke { world_pos } => handlers::drawing::begin_stroke(state, world_pos),
            AppCommand::ExtendStroke { world_pos } => {
                handlers::drawing::extend_stroke(state, world_pos)
            }
            AppCommand::FinishStroke => handlers::drawing::finish_stroke(state),

            // === Radieren ===
            AppCommand::EraseStrokeAt { world_pos, radius } => {
                handlers::erasing::erase_stroke_at(state, world_pos, radius)
            }
            AppCommand::ErasePartialAt { world_pos, radius } => {
                handlers::erasing::erase_partial_at(state, world_pos, radius)
            }
            AppCommand::FinishErase => handlers::erasing::finish_erase(state),

            // === Werkzeug & Konfiguration ===
            AppCommand::SetEditorTool { tool } => handlers::tooling::set_editor_tool(state, tool),
            AppCommand::SetEraserMode { mode } => handlers::tooling::set_eraser_mode(state, mode),
            AppCommand::SetPenColor { color } => handlers::tooling::set_pen_color(state, color),
            AppCommand::SetPenWidth { width } => handlers::tooling::set_pen_width(state, width),
            AppCommand::SetEraserRadius { radius } => {
                handlers::tooling::set_eraser_radius(state, radius)
            }
            AppCommand::ClearSketch => handlers::tooling::clear_sketch(state),
            AppCommand::ApplyOptions { options } => {
                handlers::tooling::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::tooling::reset_options(state)?,
        }

        Ok(())
    }
}
