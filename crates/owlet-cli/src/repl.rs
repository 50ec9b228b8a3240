//! Interactive question REPL.

use anyhow::Result;
use colored::Colorize;
use owlet_core::{Engine, QueryResult, QuestionResult};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::Path;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs the interactive loop until `.quit` or EOF.
pub fn run(engine: &Engine, data_path: &Path) -> Result<()> {
    println!("\n{}", format!("Owlet v{VERSION} - ontology REPL").bold().cyan());
    println!("Ontology: {}", data_path.display().to_string().green());
    println!(
        "Type {} for commands, {} to exit\n",
        ".help".yellow(),
        ".quit".yellow()
    );

    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("owlet> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match line {
                    ".quit" | ".exit" => break,
                    ".help" => print_help(),
                    ".stats" => print_stats(engine),
                    command if command.starts_with('.') => {
                        println!(
                            "{} unknown command '{command}', try {}",
                            "error:".red(),
                            ".help".yellow()
                        );
                    }
                    question => print_answer(&engine.process(question)),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("bye");
    Ok(())
}

fn print_help() {
    println!("Questions:");
    println!("  is <H> a type of <T>?          subclass");
    println!("  is <H> a <T>?  /  is <H> an <T>?   instance");
    println!("  is <H> considered to be <T>?   attribute");
    println!("Commands:");
    println!("  .stats   entity/edge/cache counters");
    println!("  .help    this message");
    println!("  .quit    exit");
}

fn print_stats(engine: &Engine) {
    let stats = engine.stats();
    println!("entities:   {}", stats.entities);
    println!("edges:      {}", stats.edges);
    println!(
        "cache:      {} hits / {} misses ({:.0}% hit rate), {} evictions",
        stats.cache.hits,
        stats.cache.misses,
        stats.cache.hit_rate() * 100.0,
        stats.cache.evictions
    );
}

fn print_answer(answer: &QueryResult) {
    let verdict = match answer.result {
        QuestionResult::Yes => answer.result.to_string().green().bold(),
        QuestionResult::No => answer.result.to_string().red().bold(),
        QuestionResult::DontKnow => answer.result.to_string().yellow().bold(),
    };

    let mut line = format!(
        "{verdict}  ({:.2} confidence, {:.2} ms, {} visited{})",
        answer.confidence,
        answer.execution_time_ms,
        answer.entities_visited,
        if answer.cache_hit { ", cached" } else { "" }
    );
    if let Some(explanation) = &answer.explanation {
        line.push_str(&format!("\n  {}", explanation.dimmed()));
    }
    println!("{line}");
}
