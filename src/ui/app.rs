//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::rules::{winning_line, Outcome};
use crate::{EngineConfig, GameMode, Mark, SearchMode};

use super::board_view::BoardView;
use super::game_state::{GameState, AI_MOVE_INTERVAL};
use super::theme::*;

/// Modes offered at startup and in the Game menu
const MODE_CHOICES: [(&str, GameMode); 4] = [
    ("Player vs Player", GameMode::PvP),
    (
        "Player vs AI (greedy)",
        GameMode::PvE {
            human: Mark::Player1,
            ai: SearchMode::Greedy,
        },
    ),
    (
        "AI (greedy) vs AI (forward pruning)",
        GameMode::EvE {
            player1: SearchMode::Greedy,
            player2: SearchMode::ForwardPruning,
        },
    ),
    (
        "Player vs AI (forward pruning)",
        GameMode::PvE {
            human: Mark::Player1,
            ai: SearchMode::ForwardPruning,
        },
    ),
];

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    config: EngineConfig,
    /// Mode picker shown until the first game is chosen
    choosing_mode: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EngineConfig) -> Self {
        Self {
            state: GameState::new(GameMode::default(), config),
            board_view: BoardView::default(),
            config,
            choosing_mode: true,
        }
    }

    fn start_game(&mut self, mode: GameMode) {
        log::info!("new game: {}", mode.label());
        self.state = GameState::new(mode, self.config);
        self.choosing_mode = false;
    }

    /// Startup window listing the game modes
    fn render_mode_picker(&mut self, ctx: &Context) {
        let mut picked = None;
        egui::Window::new("New game")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RichText::new("Choose a game mode").size(14.0));
                ui.add_space(8.0);
                for (label, mode) in MODE_CHOICES {
                    if ui.add_sized([260.0, 28.0], egui::Button::new(label)).clicked() {
                        picked = Some(mode);
                    }
                }
            });
        if let Some(mode) = picked {
            self.start_game(mode);
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for (label, mode) in MODE_CHOICES {
                        if ui.button(format!("New Game ({})", label)).clicked() {
                            self.start_game(mode);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Restart (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.state.game.mode().label());
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_ai_card(ui);

                if let Some(text) = self.state.outcome_message() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &text);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let game = &self.state.game;
            let active = game.active();
            let (symbol, accent) = match active {
                Mark::Player1 => ("O", PLAYER1_MARK),
                Mark::Player2 => ("X", PLAYER2_MARK),
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(symbol).size(28.0).strong().color(accent));
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(active.to_string()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", STATUS_BUSY)
                    } else if game.is_over() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_turn() {
                        ("AI to move", STATUS_BUSY)
                    } else {
                        ("Your turn", STATUS_READY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Last engine result
    fn render_ai_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .strong()
                        .color(STATUS_BUSY),
                );
            }

            match &self.state.last_ai_result {
                Some(result) => {
                    ui.label(
                        RichText::new(format!("{:?}", result.search_type))
                            .size(11.0)
                            .strong()
                            .color(STATUS_READY),
                    );
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    ui.label(
                        RichText::new(format!("{}ms, {} nodes", result.time_ms, result.nodes))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                    if let Some(pos) = result.best_move {
                        ui.label(
                            RichText::new(format!("-> ({}, {})", pos.x, pos.y))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                }
                None => {
                    ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, text: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(text).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let game = &self.state.game;
            let last = game.last_move();
            let line = match (game.outcome(), last) {
                (Outcome::Win(mark), Some((pos, _))) => winning_line(game.board(), pos, mark),
                _ => None,
            };
            let turn = (self.state.is_human_turn() && !self.state.is_ai_thinking()).then(|| game.active());

            let clicked = self
                .board_view
                .show(ui, game.board(), turn, last.map(|(pos, _)| pos), line);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_mark(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.state.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.choosing_mode {
            CentralPanel::default().show(ctx, |_ui| {});
            self.render_mode_picker(ctx);
            return;
        }

        self.handle_input(ctx);

        // Apply first, then the frame below shows the new position
        self.state.check_ai_result();
        if self.state.is_ai_turn() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        } else if self.state.is_ai_turn() {
            ctx.request_repaint_after(AI_MOVE_INTERVAL);
        }
    }
}
