//! End-to-end: write a friends file, load it, run every query.

use std::io::Write;

use friends::{cliques, connectors, load_friends_file, shortest_chain, GraphError};

const FRIENDS: &str = "\
15
sam|y|rutgers
jane|y|rutgers
michele|y|cornell
sergei|y|rutgers
ricardo|y|rutgers
kaitlin|n
samir|n
aparna|y|rutgers
ming|y|penn state
nick|y|rutgers
bob|y|rutgers
heather|y|ucla
rachel|n
rahul|y|rutgers
aparna2|n
sam|jane
jane|bob
jane|kaitlin
kaitlin|nick
bob|ricardo
ricardo|nick
samir|aparna
aparna|sergei
sergei|samir
aparna|ming
michele|rachel
rachel|heather
heather|rahul
rahul|aparna2
";

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_query() {
    let file = write_fixture(FRIENDS);
    let graph = load_friends_file(file.path()).unwrap();
    assert_eq!(graph.len(), 15);
    assert_eq!(graph.friendship_count(), 14);

    assert_eq!(
        shortest_chain(&graph, "sam", "nick").unwrap(),
        vec!["sam", "jane", "kaitlin", "nick"]
    );
    assert_eq!(shortest_chain(&graph, "sam", "ming"), None);
    assert_eq!(
        shortest_chain(&graph, "Michele", "APARNA2").unwrap(),
        vec!["michele", "rachel", "heather", "rahul", "aparna2"]
    );

    assert_eq!(
        cliques(&graph, "rutgers").unwrap(),
        vec![
            vec!["sam", "jane", "bob", "ricardo", "nick"],
            vec!["sergei", "aparna"],
            vec!["rahul"],
        ]
    );
    assert_eq!(cliques(&graph, "Cornell").unwrap(), vec![vec!["michele"]]);
    assert_eq!(cliques(&graph, "mit").unwrap(), Vec::<Vec<String>>::new());

    assert_eq!(
        connectors(&graph),
        vec!["jane", "aparna", "heather", "rachel", "rahul"]
    );
}

#[test]
fn test_missing_file() {
    let err = load_friends_file("/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, GraphError::Io { .. }));
}

#[test]
fn test_malformed_file() {
    let file = write_fixture("2\nsam|y|rutgers\njane|maybe\n");
    let err = load_friends_file(file.path()).unwrap_err();
    assert!(matches!(err, GraphError::Malformed { line: 3, .. }));
    assert!(err.to_string().starts_with("line 3:"));
}
