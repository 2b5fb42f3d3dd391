//! Command-line surface
//!
//! ```text
//! algotrace <PROBLEM> [INPUT]... [--approach <APPROACH>] [--print | --json]
//! algotrace --list
//! ```
//!
//! With no `INPUT` the problem's built-in example runs.

use crate::algorithms::problems::{Approach, Problem, RunRequest};
use crate::config::{Config, OutputMode};
use crate::input::{parse_input, InputError};
use clap::Parser;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(
    name = "algotrace",
    version,
    about = "Step forward and backward through recorded executions of classic algorithms",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Problem to run, e.g. `anagrams` or `max-path-sum` (see --list)
    #[arg(required_unless_present = "list")]
    pub problem: Option<String>,

    /// Problem input. Strings are verbatim, everything else is JSON.
    #[arg(allow_negative_numbers = true)]
    pub input: Vec<String>,

    /// brute-force, set, iterative or recursive
    #[arg(long, short)]
    pub approach: Option<String>,

    /// Milliseconds between autoplay steps
    #[arg(long)]
    pub autoplay_ms: Option<u64>,

    /// Print every step instead of opening the player
    #[arg(long, conflicts_with = "json")]
    pub print: bool,

    /// Print the whole run as JSON
    #[arg(long)]
    pub json: bool,

    /// List the available problems and exit
    #[arg(long)]
    pub list: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown problem '{0}' (run with --list to see them)")]
    UnknownProblem(String),

    #[error("unknown approach '{0}': expected brute-force, set, iterative or recursive")]
    UnknownApproach(String),

    #[error("no problem given")]
    MissingProblem,

    #[error(transparent)]
    Input(#[from] InputError),
}

impl Cli {
    /// Environment configuration with this invocation's flags applied
    pub fn config(&self) -> Config {
        let output = if self.json {
            OutputMode::Json
        } else if self.print {
            OutputMode::Text
        } else {
            OutputMode::Tui
        };
        Config::from_env()
            .with_autoplay_ms(self.autoplay_ms)
            .with_output(output)
    }

    /// Resolve names and parse input into a run request
    pub fn request(&self) -> Result<RunRequest, CliError> {
        let slug = self.problem.as_deref().ok_or(CliError::MissingProblem)?;
        let problem =
            Problem::from_slug(slug).ok_or_else(|| CliError::UnknownProblem(slug.to_string()))?;
        let approach = self
            .approach
            .as_deref()
            .map(|a| Approach::from_slug(a).ok_or_else(|| CliError::UnknownApproach(a.to_string())))
            .transpose()?;

        let input = if self.input.is_empty() {
            problem.sample_input()
        } else {
            parse_input(problem, &self.input)?
        };
        Ok(RunRequest::new(problem, approach, input))
    }
}

/// The problem catalogue, one line per problem
pub fn catalogue() -> String {
    let mut out = String::new();
    for problem in Problem::ALL {
        let approaches: Vec<&str> = problem.approaches().iter().map(|a| a.slug()).collect();
        let approaches = if approaches.is_empty() {
            String::new()
        } else {
            format!(" [{}]", approaches.join("|"))
        };
        out.push_str(&format!(
            "{:<24} {}{}\n    input: {}\n",
            problem.slug(),
            problem.title(),
            approaches,
            problem.input_kind().usage()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::problems::RunInput;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("algotrace").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_sample_used_without_input() {
        let request = parse(&["anagrams"]).request().unwrap();
        assert_eq!(request.problem, Problem::Anagrams);
        assert_eq!(request.input, Problem::Anagrams.sample_input());
        assert_eq!(request.approach, None);
    }

    #[test]
    fn test_input_and_approach() {
        let request = parse(&["pair-sum", "[1, -3, 4]", "-2", "--approach", "brute-force"])
            .request()
            .unwrap();
        assert_eq!(request.input, RunInput::NumbersWithTarget(vec![1, -3, 4], -2));
        assert_eq!(request.approach, Some(Approach::BruteForce));
    }

    #[test]
    fn test_unknown_problem() {
        let err = parse(&["bogo-sort"]).request().unwrap_err();
        assert!(matches!(err, CliError::UnknownProblem(_)));
    }

    #[test]
    fn test_output_flags() {
        assert_eq!(parse(&["sum-list", "--json"]).config().output, OutputMode::Json);
        assert_eq!(parse(&["sum-list", "--print"]).config().output, OutputMode::Text);
        assert!(Cli::try_parse_from(["algotrace", "sum-list", "--print", "--json"]).is_err());
    }

    #[test]
    fn test_catalogue_lists_every_problem() {
        let listing = catalogue();
        for problem in Problem::ALL {
            assert!(listing.contains(problem.slug()));
        }
    }
}
