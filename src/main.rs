use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use graph_gen::clique::clique_grid;
use graph_gen::community::communities;
use graph_gen::config::{DEFAULT_P1, DEFAULT_P2};
use graph_gen::logger::init_logger;
use graph_gen::writer::save_graph;

#[derive(Parser)]
#[command(name = "graph_gen", version, about = "Generate directed test graphs as adjacency lists")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an h x w grid of k-cliques joined by bridge edges
    Clique {
        /// Output file path
        output: String,
        /// Grid height in blocks
        h: u32,
        /// Grid width in blocks
        w: u32,
        /// Vertices per clique block
        k: u32,
    },
    /// Generate a randomized graph with planted communities
    Communities {
        /// Output file path
        output: String,
        /// Number of communities
        num_com: u32,
        /// Vertices per community
        com_size: u32,
        /// Intra-community edge probability
        #[arg(long, default_value_t = DEFAULT_P1)]
        p1: f64,
        /// Background edge probability
        #[arg(long, default_value_t = DEFAULT_P2)]
        p2: f64,
        /// Seed for the random source; omitted means a fresh seed per run
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    let (graph, output) = match cli.command {
        Commands::Clique { output, h, w, k } => {
            info!("generating clique grid: h={}, w={}, k={}", h, w, k);
            (clique_grid(h, w, k), output)
        }
        Commands::Communities { output, num_com, com_size, p1, p2, seed } => {
            info!(
                "generating communities: num_com={}, com_size={}, p1={}, p2={}, seed={:?}",
                num_com, com_size, p1, p2, seed
            );
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            (communities(num_com, com_size, p1, p2, &mut rng), output)
        }
    };

    save_graph(&graph, &output)
        .with_context(|| format!("failed to write graph to {}", output))?;
    info!("wrote {} vertices, {} edges to {}", graph.v_size, graph.e_size, output);
    Ok(())
}
