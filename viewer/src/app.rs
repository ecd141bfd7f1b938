use crate::constants::{
    MESSAGE_COLOR_ERROR, MESSAGE_COLOR_INFO, SIDE_PANEL_WIDTH, SPACING_MEDIUM, SPACING_SMALL,
};
use crate::painter::EguiTarget;
use chessboard::{AssetRegistry, Board, BoardState, ClickOutcome, Layout};

/// 側欄顯示的訊息
#[derive(Debug)]
enum Message {
    Info(String),
    Error(String),
}

/// 棋盤視窗
pub struct ChessApp {
    board: Board,
    layout: Layout,
    assets: AssetRegistry,
    message: Option<Message>,
}

impl ChessApp {
    pub fn new(mut board: Board, layout: Layout, assets: AssetRegistry) -> Self {
        board.initial_setup(&layout, &assets);
        Self {
            board,
            layout,
            assets,
            message: None,
        }
    }

    fn handle_click(&mut self, x: i32, y: i32) {
        match self.board.click(x, y) {
            Ok(ClickOutcome::Ignored) => {}
            Ok(ClickOutcome::Selected(pos)) => {
                self.message = Some(Message::Info(format!("選取 {pos}")));
            }
            Ok(ClickOutcome::Moved { from, to, captured }) => {
                let text = match captured {
                    Some(piece) => format!("{from} → {to}，吃掉{}{}", piece.color(), piece.kind()),
                    None => format!("{from} → {to}"),
                };
                self.message = Some(Message::Info(text));
            }
            Err(err) => {
                log::warn!("忽略點擊: {err}");
                self.message = Some(Message::Error(err.to_string()));
            }
        }
    }

    fn reset(&mut self) {
        self.board.initial_setup(&self.layout, &self.assets);
        self.message = Some(Message::Info("重新開局".to_string()));
    }

    fn render_side_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("棋盤");
        ui.add_space(SPACING_SMALL);

        let state = match self.board.state() {
            BoardState::Idle => "狀態：等待選取".to_string(),
            BoardState::Selected(pos) => format!("狀態：已選取 {pos}"),
        };
        ui.label(state);
        ui.label(format!("棋子數：{}", self.board.occupied_count()));

        ui.add_space(SPACING_MEDIUM);
        if ui.button("重新開局").clicked() {
            self.reset();
        }

        ui.add_space(SPACING_MEDIUM);
        ui.separator();
        match &self.message {
            Some(Message::Info(text)) => {
                ui.colored_label(MESSAGE_COLOR_INFO, text);
            }
            Some(Message::Error(text)) => {
                ui.colored_label(MESSAGE_COLOR_ERROR, text);
            }
            None => {}
        }
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let size = self.board.pixel_size() as f32;
        let (response, painter) = ui.allocate_painter(egui::vec2(size, size), egui::Sense::click());
        let origin = response.rect.min;

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let relative = pointer - origin;
                self.handle_click(relative.x.floor() as i32, relative.y.floor() as i32);
            }
        }

        let mut target = EguiTarget::new(ui, &painter, origin);
        self.board.draw(&mut target);
    }
}

impl eframe::App for ChessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("board_side_panel")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| self.render_side_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.render_board(ui));
        });
    }
}
