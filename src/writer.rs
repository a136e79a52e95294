use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::config::WRITE_BUFFER_SIZE;
use crate::graph::Graph;

/// Serialize a graph as an adjacency list: one line per vertex in
/// ascending id order, the id followed by its out-neighbors ascending,
/// space separated. An isolated vertex emits just its id. Lines are
/// joined by '\n' with no trailing newline.
pub fn write_adjacency_list<W: Write>(graph: &Graph, mut sink: W) -> std::io::Result<()> {
    let mut first_line = true;
    for (vertex_id, neighbors) in &graph.adj_map {
        if !first_line {
            sink.write_all(b"\n")?;
        }
        first_line = false;
        if neighbors.is_empty() {
            write!(sink, "{}", vertex_id)?;
        } else {
            write!(sink, "{} {}", vertex_id, neighbors.iter().join(" "))?;
        }
    }
    sink.flush()
}

/// Persist a graph to a file at the given path, overwriting.
pub fn save_graph(graph: &Graph, path: impl AsRef<Path>) -> std::io::Result<()> {
    let graph_file = File::create(path)?;
    let graph_writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, graph_file);
    write_adjacency_list(graph, graph_writer)
}
