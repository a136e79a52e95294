use std::collections::{BTreeMap, BTreeSet};

pub type VInt = u32;

/// In-memory directed graph, the value every generator produces.
/// Vertices are dense integer ids starting from 0; the adjacency map
/// keeps both the vertex set and the out-neighbor sets sorted, so the
/// writer can stream it without any extra ordering pass.
#[derive(Default)]
pub struct Graph {
    pub(crate) adj_map: BTreeMap<VInt, BTreeSet<VInt>>,
    pub v_size: u32,
    pub e_size: u32,
}

impl Graph {
    pub fn new() -> Graph {
        // Create a new empty Graph.
        Graph {
            adj_map: BTreeMap::new(),
            v_size: 0u32,
            e_size: 0u32,
        }
    }

    /// Create a graph that already contains vertices 0..v_count with no
    /// edges. Generators register the full vertex range up front so that
    /// isolated vertices still get their line in the output file.
    pub fn with_vertices(v_count: u32) -> Graph {
        let mut graph = Graph::new();
        for vertex_id in 0..v_count {
            graph.add_vertex(vertex_id);
        }
        graph
    }

    /// Register a vertex. Re-adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, vertex_id: VInt) {
        if !self.adj_map.contains_key(&vertex_id) {
            self.adj_map.insert(vertex_id, BTreeSet::new());
            self.v_size += 1;
        }
    }

    /// Insert the directed edge (u -> v). Both endpoints are registered
    /// if missing. Self-loops are never stored, and inserting the same
    /// edge twice leaves the graph unchanged.
    pub fn insert_edge(&mut self, u: VInt, v: VInt) {
        if u == v {
            return;
        }
        self.add_vertex(u);
        self.add_vertex(v);
        // add_vertex made sure key u exists, use unwrap.
        if self.adj_map.get_mut(&u).unwrap().insert(v) {
            self.e_size += 1;
        }
    }

    /// Insert both (u -> v) and (v -> u).
    pub fn insert_edge_both(&mut self, u: VInt, v: VInt) {
        self.insert_edge(u, v);
        self.insert_edge(v, u);
    }

    pub fn has_edge(&self, u: &VInt, v: &VInt) -> bool {
        // Check whether this graph has directed edge (u -> v).
        match self.adj_map.get(u) {
            Some(neighbors) => neighbors.contains(v),
            None => false,
        }
    }

    pub fn get_neighbor(&self, vertex_id: &VInt) -> Vec<VInt> {
        // Get the out-neighbors of a vertex, ascending.
        match self.adj_map.get(vertex_id) {
            Some(neighbors) => neighbors.iter().copied().collect(),
            None => vec![],
        }
    }

    pub fn out_degree(&self, vertex_id: &VInt) -> usize {
        match self.adj_map.get(vertex_id) {
            Some(neighbors) => neighbors.len(),
            None => 0,
        }
    }
}

#[cfg(test)]
mod test_graph {
    use crate::graph::Graph;

    #[test]
    fn test_insert_edge() {
        let mut graph = Graph::new();
        graph.insert_edge(0, 1);
        graph.insert_edge(1, 0);
        graph.insert_edge(1, 2);
        assert_eq!(graph.v_size, 3);
        assert_eq!(graph.e_size, 3);
        assert!(graph.has_edge(&0, &1));
        assert!(graph.has_edge(&1, &0));
        assert!(!graph.has_edge(&2, &1));
    }

    #[test]
    fn test_insert_edge_idempotent() {
        let mut graph = Graph::new();
        graph.insert_edge(3, 7);
        graph.insert_edge(3, 7);
        graph.insert_edge_both(3, 7);
        assert_eq!(graph.e_size, 3);
        assert_eq!(graph.get_neighbor(&3), vec![7]);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut graph = Graph::new();
        graph.insert_edge(5, 5);
        assert_eq!(graph.v_size, 0);
        assert_eq!(graph.e_size, 0);
    }

    #[test]
    fn test_isolated_vertices() {
        let graph = Graph::with_vertices(4);
        assert_eq!(graph.v_size, 4);
        assert_eq!(graph.e_size, 0);
        for vertex_id in 0..4 {
            assert_eq!(graph.out_degree(&vertex_id), 0);
        }
    }

    #[test]
    fn test_neighbor_order() {
        let mut graph = Graph::new();
        graph.insert_edge(0, 9);
        graph.insert_edge(0, 2);
        graph.insert_edge(0, 5);
        // BTreeSet keeps the list ascending no matter the insert order.
        assert_eq!(graph.get_neighbor(&0), vec![2, 5, 9]);
    }
}
