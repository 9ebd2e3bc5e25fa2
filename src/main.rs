// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use docsift::{IndexStore, KeyOutcome, Palette, SearchConfig};

mod cli;
use cli::display::{self, Painter, Role, Screen, BOX_WIDTH};
use cli::{Cli, Commands, ScriptStep};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            keys,
            json,
        } => run_search(&index, &query, limit, &keys, json),
        Commands::Inspect { index } => run_inspect(&index),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_store(index: &str) -> Result<IndexStore> {
    let path = Path::new(index);

    #[cfg(feature = "parallel")]
    if path.is_dir() {
        use indicatif::{ProgressBar, ProgressStyle};

        let progress = ProgressBar::new(0);
        progress.set_style(
            ProgressStyle::with_template(
                "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
            )
            .context("invalid progress template")?
            .progress_chars("━━╸"),
        );
        progress.set_prefix("Loading");
        let store = docsift::store::load_path_with_progress(path, &progress)
            .with_context(|| format!("failed to load index {}", index))?;
        progress.finish_and_clear();
        return Ok(store);
    }

    docsift::load_path(path).with_context(|| format!("failed to load index {}", index))
}

fn run_search(
    index: &str,
    query: &str,
    limit: Option<usize>,
    keys: &[ScriptStep],
    json: bool,
) -> Result<()> {
    let mut config = SearchConfig::from_env().context("invalid DOCSIFT_* environment")?;
    if let Some(limit) = limit {
        config = config.with_max_results(limit);
        config.validate()?;
    }

    let store = load_store(index)?;
    let open_on = |query: &str| {
        let mut palette = Palette::new(&store, config.clone());
        palette.open();
        palette.set_query(query);
        palette
    };
    // `view` keeps the results on screen after the script closes `palette`.
    let view = open_on(query);
    let mut palette = open_on(query);

    let mut steps = Vec::with_capacity(keys.len());
    let mut committed = None;
    let mut highlight = None;
    let mut navigate = |url: &str| committed = Some(url.to_string());

    for step in keys {
        if palette.is_open() {
            highlight = palette.cursor().selected();
        }
        let outcome = match step.key_event() {
            Some(event) => palette.handle_key(event, &mut navigate),
            None => match step {
                ScriptStep::Hover(row) if palette.hover(*row) => {
                    KeyOutcome::Moved(palette.cursor().selected())
                }
                _ => KeyOutcome::Ignored,
            },
        };
        steps.push((outcome, palette.cursor().as_index()));
    }
    if palette.is_open() {
        highlight = palette.cursor().selected();
    }

    let stdout = io::stdout();
    let mut screen = Screen::new(stdout.lock(), Painter::detect());

    if json {
        let output = serde_json::json!({
            "query": query,
            "groups": view.groups(),
            "steps": steps
                .iter()
                .map(|(outcome, cursor)| serde_json::json!({
                    "outcome": outcome.name(),
                    "cursor": cursor,
                }))
                .collect::<Vec<_>>(),
            "cursor": palette.cursor().as_index(),
            "committed": committed,
        });
        screen.line(&serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    print_results(&mut screen, &view, query, highlight)?;

    if !steps.is_empty() {
        let painter = screen.painter();
        screen.line("")?;
        for (step, (outcome, _)) in keys.iter().zip(&steps) {
            let label = display::pad_right(&format!("{:?}", step), 10);
            screen.line(&format!("  {} {}", label, painter.outcome(outcome)))?;
        }
    }

    Ok(())
}

/// Result boxes, with ▶ on `highlight`: the row the script left highlighted,
/// or the one it committed or closed on.
fn print_results<W: Write>(
    screen: &mut Screen<W>,
    palette: &Palette,
    query: &str,
    highlight: Option<usize>,
) -> Result<()> {
    let painter = screen.painter();
    screen.title(&format!("docsift: \"{}\"", query))?;

    let groups = palette.groups();
    if groups.is_empty() {
        screen.line("  No results found.")?;
        return Ok(());
    }

    // Rows are numbered by match position, which is what the cursor and
    // `hover:N` address, not by position on screen.
    let matches = palette.matches();
    for group in groups.iter() {
        screen.section_top(group.label)?;
        for entry in &group.entries {
            let row = matches.iter().position(|m| m.id == entry.id);
            screen.row(&format!(
                " {} {:>2}  {}",
                painter.cursor_marker(row.is_some() && row == highlight),
                row.unwrap_or_default(),
                painter.bold(Role::Title, &entry.title)
            ))?;
            screen.row(&format!("      {}", painter.paint(Role::Link, &entry.url)))?;

            let excerpt = display::truncate_text(&palette.excerpt_for(entry), BOX_WIDTH - 8);
            screen.row(&format!("      {}", painter.dim(&excerpt)))?;
        }
        screen.section_bot()?;
    }
    Ok(())
}

fn run_inspect(index: &str) -> Result<()> {
    let store = load_store(index)?;
    let config = SearchConfig::from_env().context("invalid DOCSIFT_* environment")?;

    let stdout = io::stdout();
    let mut screen = Screen::new(stdout.lock(), Painter::detect());
    screen.title(&format!("docsift index: {}", index))?;

    screen.section_top("SUMMARY")?;
    screen.row(&format!("  Documents   {}", store.len()))?;
    screen.row(&format!("  Tags        {}", store.tag_count()))?;
    if let Ok(meta) = fs::metadata(index) {
        if meta.is_file() {
            screen.row(&format!("  Size        {}", display::format_size(meta.len())))?;
        }
    }
    screen.section_bot()?;

    screen.section_top("CATEGORIES")?;
    for (label, count) in store.categories(&config.fallback_category) {
        let label = display::truncate_text(&label, 60);
        screen.row(&format!("  {} {}", display::pad_right(&label, 62), count))?;
    }
    screen.section_bot()?;

    Ok(())
}
