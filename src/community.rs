use log::debug;
use rand::Rng;

use crate::graph::{Graph, VInt};

/// Build a planted-community graph: num_com communities of com_size
/// vertices each, community c owning [com_size*c, com_size*c+com_size).
/// Every ordered pair (u, v), u != v, gets one uniform draw r in [0, 1):
/// r <= p2 installs the pair as background connectivity, otherwise
/// r <= p1 installs it only when both vertices share a community. Each
/// hit installs both directions, so the result is symmetric.
///
/// Note each unordered pair is drawn for twice, once per orientation;
/// both draws can install the same bidirectional edge. The density this
/// yields is the contract, so do not collapse the loop to one draw per
/// pair. Draw order is u ascending outer, v ascending inner, which is
/// what makes a seeded rng reproduce the same graph.
///
/// p2 <= p1 is the intended regime (dense inside, sparse across) but is
/// left to the caller.
pub fn communities<R: Rng>(
    num_com: VInt,
    com_size: VInt,
    p1: f64,
    p2: f64,
    rng: &mut R,
) -> Graph {
    let n = num_com * com_size;
    let mut graph = Graph::with_vertices(n);
    for u in 0..n {
        for v in 0..n {
            if u == v {
                continue;
            }
            let r: f64 = rng.gen();
            if r <= p2 || (r <= p1 && u / com_size == v / com_size) {
                graph.insert_edge_both(u, v);
            }
        }
    }
    debug!(
        "community graph generated: num_com={}, com_size={}, p1={}, p2={}, |V|={}, |E|={}",
        num_com, com_size, p1, p2, graph.v_size, graph.e_size
    );
    graph
}
