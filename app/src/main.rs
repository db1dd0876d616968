//! Haven - a simulated secure-browser shell for the terminal
//!
//! Nothing is fetched and nothing is persisted; the shell drives a single
//! in-memory state tree and redraws after every key event.

mod app;
mod ui;

use app::App;

fn main() -> anyhow::Result<()> {
    // Logging writes to stderr, which shares the terminal with the UI.
    // Enable it only when the user opts in (and presumably redirects):
    //   HAVEN_LOG=1 RUST_LOG=debug haven 2>haven.log
    if std::env::var_os("HAVEN_LOG").is_some() {
        haven_core::init_logging();
    }

    let terminal = ratatui::init();
    let result = App::new().run(terminal);
    ratatui::restore();
    result
}
