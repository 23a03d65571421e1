//! Reads the pipe-delimited friends file into a [`Graph`].
//!
//! The file starts with the number of people, followed by that many person
//! lines (`name|y|school` or `name|n`) and then one `name|name` line per
//! friendship.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::info;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphBuilder};

pub fn load_friends_file(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GraphError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let graph = parse_friends(file)?;
    info!(
        path = %path.display(),
        people = graph.len(),
        friendships = graph.friendship_count(),
        "loaded friends file"
    );
    Ok(graph)
}

pub fn parse_friends<R: Read>(input: R) -> Result<Graph> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(input);

    let mut records = reader
        .records()
        .filter(|r| !matches!(r, Ok(rec) if rec.iter().all(str::is_empty))); // whitespace-only lines

    let first = records.next().transpose()?.ok_or_else(|| GraphError::Malformed {
        line: 1,
        reason: "missing person count".to_string(),
    })?;
    let count = parse_count(&first)?;

    let mut builder = GraphBuilder::new();
    for seen in 0..count {
        let record = records.next().transpose()?.ok_or_else(|| GraphError::Malformed {
            line: line_of(&first) + seen as u64 + 1,
            reason: format!("expected {count} people, found {seen}"),
        })?;
        let (name, school) = parse_person(&record)?;
        builder.add_person(name, school)?;
    }

    for record in records {
        let record = record?;
        let [a, b] = fields::<2>(&record).ok_or_else(|| GraphError::Malformed {
            line: line_of(&record),
            reason: "friendship must be `name|name`".to_string(),
        })?;
        builder.add_friendship(a, b);
    }

    builder.build()
}

fn parse_count(record: &StringRecord) -> Result<usize> {
    fields::<1>(record)
        .and_then(|[n]| n.parse().ok())
        .ok_or_else(|| GraphError::Malformed {
            line: line_of(record),
            reason: format!("invalid person count `{}`", join(record)),
        })
}

fn parse_person(record: &StringRecord) -> Result<(&str, Option<&str>)> {
    let malformed = |reason: String| GraphError::Malformed {
        line: line_of(record),
        reason,
    };
    match (record.get(0), record.get(1), record.get(2), record.len()) {
        (Some(name), Some(flag), None, 2) if flag.eq_ignore_ascii_case("n") => Ok((name, None)),
        (Some(name), Some(flag), Some(school), 3) if flag.eq_ignore_ascii_case("y") => {
            if school.is_empty() {
                Err(malformed(format!("{name} is marked as attending an empty school")))
            } else {
                Ok((name, Some(school)))
            }
        }
        _ => Err(malformed(format!(
            "person must be `name|y|school` or `name|n`, got `{}`",
            join(record)
        ))),
    }
}

fn fields<const N: usize>(record: &StringRecord) -> Option<[&str; N]> {
    if record.len() != N {
        return None;
    }
    let mut out = [""; N];
    for (slot, field) in out.iter_mut().zip(record.iter()) {
        *slot = field;
    }
    Some(out)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn join(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join("|")
}
