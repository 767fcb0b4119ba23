//! selkit CLI
//!
//! Builds a selector from fragment and combinator tokens and prints it.
//!
//! Usage:
//!   selkit element=div id=main class=container + element=table
//!   selkit element=a 'attr=href$=".png"' pseudo-class=focus --specificity
//!   selkit element=ul '>' element=li --json
//!
//! Fragment tokens are `kind=value`, where kind is one of `element`, `id`,
//! `class`, `attr`, `pseudo-class`, `pseudo-element`. Combinator tokens are
//! `+`, `~`, `>`, and `desc` (or a single space) for the descendant combinator.

use std::io::{self, Write};
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use selkit_css::{Combinator, FragmentKind, Selector, SelectorHandle};

#[derive(Parser, Debug)]
#[command(name = "selkit", version, about = "Build and validate CSS selectors")]
struct Cli {
    /// Fragments (`kind=value`) and combinators (`+`, `~`, `>`, `desc`), in order
    #[arg(required = true)]
    tokens: Vec<String>,

    /// Print the fragment tree as JSON instead of the selector string
    #[arg(long)]
    json: bool,

    /// Also print the selector's specificity
    #[arg(long)]
    specificity: bool,
}

enum Token<'a> {
    Fragment(FragmentKind, &'a str),
    Combinator(Combinator),
}

fn classify(token: &str) -> Result<Token<'_>> {
    if token == "desc" {
        return Ok(Token::Combinator(Combinator::Descendant));
    }
    if let Ok(combinator) = Combinator::from_symbol(token) {
        return Ok(Token::Combinator(combinator));
    }

    let (kind, value) = token
        .split_once('=')
        .ok_or_else(|| anyhow!("expected `kind=value` or a combinator, got '{token}'"))?;
    let kind = FragmentKind::from_str(kind)
        .with_context(|| format!("unknown fragment kind '{kind}'"))?;
    Ok(Token::Fragment(kind, value))
}

/// Build compound selectors left to right, then combine them right-nested.
fn build(tokens: &[String]) -> Result<SelectorHandle> {
    let mut compounds: Vec<Selector> = Vec::new();
    let mut combinators: Vec<Combinator> = Vec::new();
    let mut current = Selector::new();

    for token in tokens {
        match classify(token)? {
            Token::Fragment(kind, value) => {
                current = current
                    .push(kind, value)
                    .with_context(|| format!("cannot add '{token}'"))?;
            }
            Token::Combinator(combinator) => {
                if current.is_empty() {
                    bail!("combinator '{combinator}' has no selector on its left");
                }
                compounds.push(std::mem::take(&mut current));
                combinators.push(combinator);
            }
        }
    }

    if current.is_empty() {
        bail!("expected a selector after the last combinator");
    }

    let mut handle = SelectorHandle::from(current);
    while let (Some(left), Some(combinator)) = (compounds.pop(), combinators.pop()) {
        handle = SelectorHandle::from(left).combine(combinator, handle);
    }
    Ok(handle)
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let handle = build(&cli.tokens)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&handle).context("failed to serialize selector")?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(out, "{handle}")?;
    }

    if cli.specificity {
        writeln!(out, "{} {}", "specificity:".dimmed(), handle.specificity())?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selkit_css::Specificity;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_flags_after_tokens_are_parsed_as_flags() {
        let cli = Cli::try_parse_from([
            "selkit",
            "element=ul",
            ">",
            "element=li",
            "--json",
            "--specificity",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(cli.specificity);
        assert_eq!(cli.tokens, tokens(&["element=ul", ">", "element=li"]));
    }

    #[test]
    fn test_flags_before_tokens() {
        let cli = Cli::try_parse_from(["selkit", "--json", "element=a"]).unwrap();
        assert!(cli.json);
        assert!(!cli.specificity);
        assert_eq!(cli.tokens, tokens(&["element=a"]));
    }

    #[test]
    fn test_tokens_are_required() {
        assert!(Cli::try_parse_from(["selkit", "--json"]).is_err());
    }

    #[test]
    fn test_run_prints_selector() {
        let output = run_args(&["selkit", "element=div", "id=main", "+", "element=table"]).unwrap();
        assert_eq!(output, "div#main + table\n");
    }

    #[test]
    fn test_run_prints_specificity() {
        let output = run_args(&["selkit", "element=a", "class=x", "--specificity"]).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("a.x"));
        let line = lines.next().unwrap();
        assert!(line.contains("specificity:"));
        assert!(line.ends_with("(0, 1, 1)"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_run_prints_json_tree() {
        let output = run_args(&["selkit", "element=ul", ">", "class=item", "--json"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["combined"]["combinator"], "child");
        assert_eq!(
            json["combined"]["left"]["compound"]["fragments"][0],
            serde_json::json!({"kind": "element", "value": "ul"})
        );
        assert_eq!(
            json["combined"]["right"]["compound"]["fragments"][0],
            serde_json::json!({"kind": "class", "value": "item"})
        );
    }

    #[test]
    fn test_pretty_json_shape() {
        let handle = build(&tokens(&["element=p"])).unwrap();
        let json = serde_json::to_string_pretty(&handle).unwrap();
        assert!(json.starts_with("{\n  \"compound\": {\n    \"fragments\": ["));
        assert!(json.contains("\"kind\": \"element\""));
        assert!(json.contains("\"value\": \"p\""));
    }

    #[test]
    fn test_run_reports_build_errors() {
        let err = run_args(&["selkit", "class=x", "id=y"]).unwrap_err();
        assert!(format!("{err:#}").contains("id after class"));
    }

    #[test]
    fn test_build_compound() {
        let handle = build(&tokens(&["element=a", r#"attr=href$=".png""#, "pseudo-class=focus"]))
            .unwrap();
        assert_eq!(handle.stringify(), r#"a[href$=".png"]:focus"#);
    }

    #[test]
    fn test_build_combined_right_nested() {
        let handle = build(&tokens(&[
            "element=div",
            "+",
            "element=table",
            "~",
            "element=tr",
            "desc",
            "element=td",
        ]))
        .unwrap();
        assert_eq!(handle.stringify(), "div + table ~ tr   td");
        assert_eq!(handle.compound_count(), 4);
        assert_eq!(handle.specificity(), Specificity(0, 0, 4));
    }

    #[test]
    fn test_build_reports_order_error() {
        let err = build(&tokens(&["class=x", "id=y"])).unwrap_err();
        assert!(format!("{err:#}").contains("cannot add 'id=y'"));
        assert!(format!("{err:#}").contains("id after class"));
    }

    #[test]
    fn test_build_rejects_dangling_combinators() {
        assert!(build(&tokens(&["+", "element=a"])).is_err());
        assert!(build(&tokens(&["element=a", ">"])).is_err());
        assert!(build(&tokens(&["element=a", ">", "~", "element=b"])).is_err());
    }

    #[test]
    fn test_build_rejects_unknown_tokens() {
        assert!(build(&tokens(&["tag=div"])).is_err());
        assert!(build(&tokens(&["*"])).is_err());
    }
}
