use artistnet_core::{ArtifactPaths, CrawlConfig, CrawlStats, MiningReport, StopReason};

use crate::app::PlotOutcome;
use crate::colors::ColorScheme;

pub fn display_crawl_info(seed: &str, config: &CrawlConfig, colors: &ColorScheme) {
    println!(
        "🎵 Crawling related artists of {}",
        colors.artist_name(&format!("\"{}\"", seed))
    );
    println!(
        "⚙️  Breadth {} | popularity >= {} | population {}",
        colors.number(&config.breadth_limit.to_string()),
        colors.number(&config.min_popularity.to_string()),
        colors.number(&population_label(config.max_population_size))
    );

    if config.include_collaborators {
        println!("🤝 Expanding through top-track collaborators");
    }
    if config.weighted {
        println!("⚖️  Writing rank-derived edge weights");
    }
}

pub fn display_crawl_report(report: &MiningReport, colors: &ColorScheme) {
    println!("\n---\n");
    println!("{}", format_stop_reason(&report.result.stop_reason, colors));
    println!(
        "{} Discovered {} artists joined by {} edges",
        colors.stats("📊"),
        colors.number(&format_number(report.result.total_discovered())),
        colors.number(&format_number(report.result.total_edges()))
    );
    display_artifacts(&report.paths, report.artists_stored, colors);
    display_crawl_statistics(&report.result.stats, colors);
}

pub fn display_plot_summary(outcome: &PlotOutcome, colors: &ColorScheme) {
    println!(
        "{} Rebuilt network with {} artists and {} edges",
        colors.success("✅"),
        colors.number(&format_number(outcome.graph.node_count())),
        colors.number(&format_number(outcome.graph.edge_count()))
    );
    println!(
        "🖼️  DOT file: {}",
        colors.path(&outcome.dot_path.display().to_string())
    );
    println!("   Render it with: dot -Tsvg {} -o network.svg", outcome.dot_path.display());
}

pub fn format_stop_reason(reason: &StopReason, colors: &ColorScheme) -> String {
    match reason {
        StopReason::Exhausted => format!("{} No new artists left to explore", colors.success("✅")),
        StopReason::PopulationCapReached { size } => format!(
            "{} Reached the population limit of {} artists",
            colors.success("✅"),
            colors.number(&format_number(*size))
        ),
        StopReason::Interrupted(error) => format!(
            "{} Crawl interrupted ({}), progress was saved",
            colors.warning("⚠️"),
            colors.error(&error.to_string())
        ),
    }
}

fn display_artifacts(paths: &ArtifactPaths, artists_stored: usize, colors: &ColorScheme) {
    println!("💾 Edge list: {}", colors.path(&paths.edgelist.display().to_string()));
    println!(
        "💾 Attributes: {} ({} artists stored)",
        colors.path(&paths.attributes.display().to_string()),
        colors.number(&format_number(artists_stored))
    );
}

fn display_crawl_statistics(stats: &CrawlStats, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Expanded {} artists, screened {} candidates ({} unpopular) in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(stats.nodes_expanded)),
        colors.number(&format_number(stats.candidates_seen)),
        colors.number(&format_number(stats.rejected_unpopular)),
        colors.number(&format!("{:.3}", stats.duration_ms as f64 / 1000.0))
    );
}

fn population_label(max_population_size: Option<usize>) -> String {
    match max_population_size {
        Some(size) => format_number(size),
        None => "unbounded".to_string(),
    }
}

/// Groups digits by thousands: `1234567` becomes `1,234,567`.
pub fn format_number(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
