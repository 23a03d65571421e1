use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use friends::{cliques, connectors, load_friends_file, shortest_chain, Graph};

/// Query a friendship graph file.
#[derive(Parser)]
#[command(name = "friends", version)]
struct Cli {
    /// Friends file: a person count, `name|y|school` or `name|n` lines, then `name|name` friendships
    file: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Shortest chain of friends between two people
    Chain {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        from: String,
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        to: String,
    },
    /// Friend circles within a school
    Cliques {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        school: String,
    },
    /// People whose removal splits a friend group
    Connectors,
    /// Counts of people, friendships and schools
    Summary,
}

#[derive(Serialize)]
struct Summary {
    people: usize,
    friendships: usize,
    schools: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("FRIENDS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let graph = load_friends_file(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;

    match cli.command {
        Command::Chain { from, to } => {
            let chain = shortest_chain(&graph, &from, &to);
            if cli.json {
                print_json(&chain)?;
            } else {
                match chain {
                    Some(chain) => println!("{}", chain.join(" -- ")),
                    None => println!("No chain between {from} and {to}"),
                }
            }
        }
        Command::Cliques { school } => {
            let Some(groups) = cliques(&graph, &school) else {
                anyhow::bail!("school name must not be empty");
            };
            if cli.json {
                print_json(&groups)?;
            } else if groups.is_empty() {
                println!("Nobody attends {school}");
            } else {
                for (i, group) in groups.iter().enumerate() {
                    println!("Clique {}: {}", i + 1, group.join(", "));
                }
            }
        }
        Command::Connectors => {
            let names = connectors(&graph);
            if cli.json {
                print_json(&names)?;
            } else if names.is_empty() {
                println!("No connectors");
            } else {
                println!("Connectors: {}", names.join(", "));
            }
        }
        Command::Summary => {
            let summary = summarize(&graph);
            if cli.json {
                print_json(&summary)?;
            } else {
                println!("People: {}", summary.people);
                println!("Friendships: {}", summary.friendships);
                println!("Schools: {}", summary.schools.join(", "));
            }
        }
    }
    Ok(())
}

fn summarize(graph: &Graph) -> Summary {
    let schools: BTreeSet<String> = graph
        .people()
        .iter()
        .filter_map(|p| p.school.clone())
        .collect();
    Summary {
        people: graph.len(),
        friendships: graph.friendship_count(),
        schools: schools.into_iter().collect(),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cliques() {
        let cli =
            Cli::try_parse_from(["friends", "people.txt", "cliques", "Rutgers", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(&cli.command, Command::Cliques { school } if school == "Rutgers"));
    }

    #[test]
    fn test_empty_school_is_rejected() {
        assert!(Cli::try_parse_from(["friends", "people.txt", "cliques", ""]).is_err());
    }

    #[test]
    fn test_empty_chain_name_is_rejected() {
        assert!(Cli::try_parse_from(["friends", "people.txt", "chain", "sam", ""]).is_err());
        assert!(Cli::try_parse_from(["friends", "people.txt", "chain", "sam", "jane"]).is_ok());
    }
}
