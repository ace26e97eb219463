//! Connected-component discovery.
//!
//! Nodes and edges are referenced only by their integer ids; adjacency is
//! rebuilt from the edge list on every call and never stored.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use super::{Edge, EdgeId, NodeId};

/// Adjacency lists: node -> `(neighbor, edge)` for every incident edge.
///
/// Parallel edges produce one entry each.
pub type Adjacency = BTreeMap<NodeId, Vec<(NodeId, EdgeId)>>;

/// Build the adjacency map of an edge list. `O(E)`.
pub fn adjacency(edges: &[Edge]) -> Adjacency {
    let mut adj: Adjacency = BTreeMap::new();
    for edge in edges {
        adj.entry(edge.node1).or_default().push((edge.node2, edge.id));
        adj.entry(edge.node2).or_default().push((edge.node1, edge.id));
    }
    adj
}

/// Split an edge list into electrically independent groups.
///
/// Breadth-first flood fill from the lowest unvisited node. Every group is
/// deduplicated by stable edge index (each edge is reached once from each
/// end) and sorted by it, so parallel edges are kept apart. Groups are
/// returned in order of their lowest node. `O(N + E)` overall.
pub fn connected_components(edges: &[Edge]) -> Vec<Vec<EdgeId>> {
    let adj = adjacency(edges);
    let mut visited: HashSet<NodeId> = HashSet::with_capacity(adj.len());
    let mut components = Vec::new();

    for &start in adj.keys() {
        if !visited.insert(start) {
            continue;
        }

        let mut group = BTreeSet::new();
        let mut queue = VecDeque::from([start]);

        while let Some(node) = queue.pop_front() {
            for &(neighbor, edge) in adj.get(&node).into_iter().flatten() {
                group.insert(edge);
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        components.push(group.into_iter().collect());
    }

    components
}
