use log::debug;

use crate::graph::{Graph, VInt};

/// Which end of a bridge edge an anchor vertex plays within its block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeRole {
    HorizontalSource,
    HorizontalTarget,
    VerticalSource,
    VerticalTarget,
}

/// Pick the local offset (in [0, k)) of the anchor vertex for a bridge
/// role in a block of size k.
pub type AnchorFn = fn(k: VInt, role: BridgeRole) -> VInt;

/// Default anchor placement. For every k >= 1 the offsets stay inside
/// the block: k/2 < k and k/4 + k/2 < k; with k == 1 all roles collapse
/// to offset 0, so degenerate single-vertex blocks still bridge.
pub fn default_anchor(k: VInt, role: BridgeRole) -> VInt {
    match role {
        BridgeRole::HorizontalSource => k / 2,
        BridgeRole::HorizontalTarget => 0,
        BridgeRole::VerticalSource => k / 4 + k / 2,
        BridgeRole::VerticalTarget => k / 4,
    }
}

/// Build an h x w grid of k-cliques. Block i owns vertices
/// [k*i, k*i+k) and is fully connected in both directions; neighboring
/// grid cells are joined by one bidirectional bridge edge each, placed
/// by the default anchor selector. Deterministic for fixed (h, w, k).
pub fn clique_grid(h: VInt, w: VInt, k: VInt) -> Graph {
    clique_grid_with_anchor(h, w, k, default_anchor)
}

/// Same as [`clique_grid`] but with a caller-supplied anchor selector,
/// so the bridge topology rule is swappable instead of baked in.
pub fn clique_grid_with_anchor(h: VInt, w: VInt, k: VInt, anchor: AnchorFn) -> Graph {
    let mut graph = Graph::with_vertices(h * w * k);

    // Fully connect every block.
    for clique_num in 0..h * w {
        let base = k * clique_num;
        for p in 0..k {
            for q in 0..k {
                if p != q {
                    graph.insert_edge(base + p, base + q);
                }
            }
        }
    }

    // Bridge each cell to its right neighbor. Blocks are numbered
    // row-major, so the right neighbor of (i, j) is clique_num + 1.
    for i in 0..h {
        for j in 0..w.saturating_sub(1) {
            let clique_num = w * i + j;
            let u = k * clique_num + anchor(k, BridgeRole::HorizontalSource);
            let v = k * (clique_num + 1) + anchor(k, BridgeRole::HorizontalTarget);
            graph.insert_edge_both(u, v);
        }
    }

    // Bridge each cell to the one below it, clique_num + w.
    for i in 0..h.saturating_sub(1) {
        for j in 0..w {
            let clique_num = w * i + j;
            let u = k * clique_num + anchor(k, BridgeRole::VerticalSource);
            let v = k * (clique_num + w) + anchor(k, BridgeRole::VerticalTarget);
            graph.insert_edge_both(u, v);
        }
    }

    debug!(
        "clique grid generated: h={}, w={}, k={}, |V|={}, |E|={}",
        h, w, k, graph.v_size, graph.e_size
    );
    graph
}
