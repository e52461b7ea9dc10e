pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod logging;
pub mod spotify;

// Re-export commonly used items
pub use app::{AppError, PlotOutcome, Settings, normalize_seed, run_crawl, run_plot};
pub use args::{Args, Command, CrawlArgs, PlotArgs};
pub use display::format_number;
pub use spotify::SpotifyClient;
