//! Dense projection of the unified graph at the output boundary.

use causeway_core::AdjacencyResult;

use super::unified::UnifiedGraph;

/// Project `graph` into an adjacency result over its node order.
///
/// `matrix[i][j]` holds the edge weight of `columns[j] -> columns[i]`, and
/// `0.0` where there is no edge.
pub fn to_adjacency(graph: &UnifiedGraph) -> AdjacencyResult {
    let order: Vec<_> = graph.graph.node_indices().collect();
    let n = order.len();
    let position: std::collections::HashMap<_, _> =
        order.iter().enumerate().map(|(pos, &idx)| (idx, pos)).collect();

    let mut matrix = vec![vec![0.0; n]; n];
    for edge in graph.graph.edge_indices() {
        if let Some((from, to)) = graph.graph.edge_endpoints(edge) {
            let j = position[&from];
            let i = position[&to];
            matrix[i][j] = graph.graph[edge];
        }
    }

    let columns = order
        .iter()
        .map(|&idx| graph.graph[idx].label.clone())
        .collect();

    AdjacencyResult { matrix, columns }
}
