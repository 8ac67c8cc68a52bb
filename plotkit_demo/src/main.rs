// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recipe demos for Plotkit.
//!
//! Usage: `plotkit_demo [OUT_DIR] [RECIPE_ID...]`
//!
//! Every recipe (or only the listed ones) is rendered to `OUT_DIR/<id>.svg`, and an
//! `index.html` groups them by category. `OUT_DIR` defaults to `plotkit_demo_out`.
//! Set `RUST_LOG` to change the log filter (default `info`).

mod figure;
mod recipes;
mod svg;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use crate::recipes::Recipe;

const DEFAULT_OUT_DIR: &str = "plotkit_demo_out";

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args_os().skip(1);
    let out_dir = args
        .next()
        .map_or_else(|| PathBuf::from(DEFAULT_OUT_DIR), PathBuf::from);
    let selected = select_recipes(args.map(|a| a.to_string_lossy().into_owned()))?;

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let groups = recipes::categorized(&selected);
    for (category, members) in &groups {
        for recipe in members {
            write_recipe(&out_dir, recipe)
                .with_context(|| format!("rendering recipe `{}` ({category})", recipe.id))?;
        }
    }

    let index = out_dir.join("index.html");
    std::fs::write(&index, render_index(&groups))
        .with_context(|| format!("writing {}", index.display()))?;
    tracing::info!(path = %index.display(), recipes = selected.len(), "wrote demo index");
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// All recipes when `ids` is empty, otherwise the named ones in the given order.
fn select_recipes(ids: impl Iterator<Item = String>) -> Result<Vec<Recipe>> {
    let ids: Vec<String> = ids.collect();
    if ids.is_empty() {
        return Ok(recipes::RECIPES.to_vec());
    }
    let mut selected = Vec::with_capacity(ids.len());
    for id in &ids {
        let Some(recipe) = recipes::find(id) else {
            bail!("unknown recipe id `{id}`");
        };
        selected.push(*recipe);
    }
    Ok(selected)
}

fn write_recipe(out_dir: &Path, recipe: &Recipe) -> Result<()> {
    let figure = (recipe.build)();
    let list = figure.render(false)?;
    let svg = svg::to_svg_string(&list, figure.size);
    let path = out_dir.join(format!("{}.svg", recipe.id));
    std::fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(
        id = recipe.id,
        plottables = figure.plottables().len(),
        ops = list.len(),
        path = %path.display(),
        "wrote recipe"
    );
    Ok(())
}

fn render_index(groups: &[(&'static str, Vec<&Recipe>)]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Plotkit recipes</title></head>\n<body>\n",
    );
    for (category, members) in groups {
        let _ = writeln!(html, "<h2>{category}</h2>");
        for recipe in members {
            let _ = writeln!(
                html,
                "<h3 id=\"{id}\">{title}</h3>\n<p>{desc}</p>\n<img src=\"{id}.svg\" alt=\"{title}\">",
                id = recipe.id,
                title = recipe.title,
                desc = recipe.description,
            );
        }
    }
    html.push_str("</body></html>\n");
    html
}
