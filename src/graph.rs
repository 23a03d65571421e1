//! The friendship graph: a fixed array of people with index-based adjacency lists.

use std::collections::HashMap;

use crate::error::{GraphError, Result};

/// One member of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    /// Lowercased school, `None` for people who attend none.
    pub school: Option<String>,
    pub friends: Vec<usize>,
}

/// Static snapshot of people and friendships. Built once through
/// [`GraphBuilder`] and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    people: Vec<Person>,
    index: HashMap<String, usize>, // lowercased name -> position in `people`
}

impl Graph {
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, idx: usize) -> &Person {
        &self.people[idx]
    }

    pub fn name(&self, idx: usize) -> &str {
        &self.people[idx].name
    }

    pub fn friends(&self, idx: usize) -> &[usize] {
        &self.people[idx].friends
    }

    pub fn degree(&self, idx: usize) -> usize {
        self.people[idx].friends.len()
    }

    /// Case-insensitive name lookup.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.index.get(&name.to_lowercase()).copied()
    }

    /// Number of undirected friendships.
    pub fn friendship_count(&self) -> usize {
        self.people.iter().map(|p| p.friends.len()).sum::<usize>() / 2
    }
}

/// Accumulates people and friendships, validating the graph invariants on `build`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    people: Vec<Person>,
    index: HashMap<String, usize>,
    friendships: Vec<(String, String)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_person(&mut self, name: &str, school: Option<&str>) -> Result<usize> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GraphError::EmptyName);
        }
        let key = name.to_lowercase();
        if self.index.contains_key(&key) {
            return Err(GraphError::DuplicatePerson(name.to_string()));
        }
        let idx = self.people.len();
        self.people.push(Person {
            name: name.to_string(),
            school: school
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
            friends: Vec::new(),
        });
        self.index.insert(key, idx);
        Ok(idx)
    }

    /// Records a friendship; endpoints are resolved when the graph is built,
    /// so people may be added after the friendships that mention them.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> &mut Self {
        self.friendships
            .push((a.trim().to_string(), b.trim().to_string()));
        self
    }

    pub fn build(mut self) -> Result<Graph> {
        for (a, b) in std::mem::take(&mut self.friendships) {
            let from = self.resolve(&a)?;
            let to = self.resolve(&b)?;
            if from == to {
                return Err(GraphError::SelfFriendship(a));
            }
            // repeated friendships collapse into one edge
            if self.people[from].friends.contains(&to) {
                continue;
            }
            self.people[from].friends.push(to);
            self.people[to].friends.push(from); // undirected
        }
        Ok(Graph {
            people: self.people,
            index: self.index,
        })
    }

    fn resolve(&self, name: &str) -> Result<usize> {
        self.index
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| GraphError::UnknownPerson(name.to_string()))
    }
}
