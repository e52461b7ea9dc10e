use artistnet::colors::ColorScheme;
use artistnet::display::{display_crawl_info, display_crawl_report, display_plot_summary};
use artistnet::logging::init_logging;
use artistnet::{AppError, Args, Command, run_crawl, run_plot};
use clap::Parser;

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = init_logging() {
        eprintln!("{} {}", colors.error("❌ Logging setup failed:"), error);
    }

    if let Err(error) = run(args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), AppError> {
    match args.command {
        Command::Crawl(crawl_args) => {
            display_crawl_info(&crawl_args.seed, &crawl_args.to_config(), colors);
            let report = run_crawl(&crawl_args)?;
            display_crawl_report(&report, colors);
        }
        Command::Plot(plot_args) => {
            let outcome = run_plot(&plot_args)?;
            display_plot_summary(&outcome, colors);
        }
    }
    Ok(())
}
