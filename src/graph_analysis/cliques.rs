use std::collections::VecDeque;

use tracing::debug;

use crate::graph::Graph;

/// Groups the people attending `school` into friend circles: each group is
/// everyone reachable from its first member through friends at the same
/// school, listed in breadth-first discovery order.
///
/// `None` for an empty school name; an empty list when nobody attends it.
pub fn cliques(graph: &Graph, school: &str) -> Option<Vec<Vec<String>>> {
    if school.is_empty() {
        return None;
    }
    let school = school.to_lowercase();
    let attends = |idx: usize| graph.person(idx).school.as_deref() == Some(school.as_str());

    let mut visited = vec![false; graph.len()];
    let mut groups = Vec::new();
    for seed in 0..graph.len() {
        // each unvisited schoolmate starts a new group
        if !visited[seed] && attends(seed) {
            groups.push(bfs_clique(graph, seed, &attends, &mut visited));
        }
    }

    debug!(school = %school, groups = groups.len(), "found cliques");
    Some(groups)
}

fn bfs_clique(
    graph: &Graph,
    seed: usize,
    attends: &impl Fn(usize) -> bool,
    visited: &mut [bool],
) -> Vec<String> {
    let mut queue = VecDeque::new();
    let mut members = vec![graph.name(seed).to_string()];
    visited[seed] = true;
    queue.push_back(seed);

    while let Some(current) = queue.pop_front() {
        for &friend in graph.friends(current) {
            // only walk through schoolmates nobody has grouped yet
            if !visited[friend] && attends(friend) {
                visited[friend] = true;
                members.push(graph.name(friend).to_string()); // discovery order
                queue.push_back(friend);
            }
        }
    }
    members
}
