use artistnet_core::miner::DEFAULT_OUTPUT_DIR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "artistnet")]
#[command(about = "Discover the network of related artists around a seed artist")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Crawl related artists breadth-first and save the network
    Crawl(CrawlArgs),
    /// Rebuild a saved network and render it as a Graphviz DOT file
    Plot(PlotArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct CrawlArgs {
    /// Seed artist (Spotify URI, open.spotify.com link or bare id)
    pub seed: String,

    /// Related artists and top tracks considered per artist
    #[arg(short = 'b', long, value_name = "COUNT", default_value = "5")]
    pub breadth_limit: usize,

    /// Only admit artists with popularity >= threshold (0-100)
    #[arg(short = 'p', long, value_name = "POPULARITY", default_value = "65")]
    pub min_popularity: u32,

    /// Stop once this many artists have been discovered
    #[arg(short = 'n', long, value_name = "COUNT", default_value = "100", conflicts_with = "unbounded")]
    pub max_population: usize,

    /// Crawl until no new artists are found
    #[arg(long)]
    pub unbounded: bool,

    /// Do not expand through artists credited on top tracks
    #[arg(long)]
    pub no_collaborators: bool,

    /// Write rank-derived weights into the edge list
    #[arg(short, long)]
    pub weighted: bool,

    /// Quiet mode - do not log every visited artist
    #[arg(short, long)]
    pub quiet: bool,

    /// Attributes kept for every artist
    #[arg(short, long, value_delimiter = ',', default_value = "name,popularity")]
    pub attributes: Vec<String>,

    /// Directory receiving the edge list and attributes
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// File name for the outputs (defaults to the seed artist's name)
    #[arg(short, long, value_name = "NAME")]
    pub fname: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct PlotArgs {
    /// Name the network was saved under
    pub name: String,

    /// Directory holding the saved network
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Where to write the DOT file (defaults to <DIR>/<NAME>.dot)
    #[arg(long, value_name = "PATH")]
    pub dot: Option<PathBuf>,
}
