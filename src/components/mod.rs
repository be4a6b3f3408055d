pub mod app;
pub mod game_view;
pub mod stats_panel;

pub use app::App;
pub use game_view::GameView;
pub use stats_panel::StatsPanel;
