use std::collections::VecDeque;

use tracing::debug;

use crate::graph::Graph;

/// Shortest chain of friends from `from` to `to`, both ends included.
///
/// Returns `None` when either name is empty or unknown, or when no chain
/// exists. Ties between equally short chains are broken by adjacency order.
pub fn shortest_chain(graph: &Graph, from: &str, to: &str) -> Option<Vec<String>> {
    if from.is_empty() || to.is_empty() {
        return None;
    }
    let source = graph.lookup(from)?;
    let target = graph.lookup(to)?;
    if source == target {
        return Some(vec![graph.name(source).to_string()]);
    }

    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut visited = vec![false; graph.len()];
    let mut predecessor: Vec<Option<usize>> = vec![None; graph.len()];
    let mut distance: Vec<Option<usize>> = vec![None; graph.len()];

    visited[source] = true;
    distance[source] = Some(0);
    queue.push_back(source);

    'search: while let Some(current) = queue.pop_front() {
        for &friend in graph.friends(current) {
            if !visited[friend] {
                visited[friend] = true;
                predecessor[friend] = Some(current); // remember who found this friend
                distance[friend] = distance[current].map(|d| d + 1);
                if friend == target {
                    break 'search; // first arrival is a shortest chain
                }
                queue.push_back(friend);
            }
        }
    }

    if !visited[target] {
        debug!(from, to, "no chain between people");
        return None;
    }
    debug!(from, to, hops = ?distance[target], "found chain");

    // walk back from the target, then flip into source -> target order
    let mut chain = Vec::new();
    let mut step = Some(target);
    while let Some(idx) = step {
        chain.push(graph.name(idx).to_string());
        step = predecessor[idx];
    }
    chain.reverse();
    Some(chain)
}
