use anyhow::Context;
use colored::*;
use tracing::{info_span, warn};

use crate::terminal::{colors, print};
use dirule_adapters::{Napkin, Notebook};
use dirule_common::{Config, DiError};
use dirule_core::domain::Poem;
use dirule_core::ports::Storage;

const GOPHERS: &str = "Gophers are incredibly smart";
const LIMERICK: &str = "A gopher who lived in a hole / dug tunnels too deep for a mole";

pub fn poem(cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("poem");
    let _guard = span.enter();

    print::header("poem", cfg.quiet);

    // Wiring: the adapters live here, the poem only ever borrows them.
    let notebook = Notebook::new();
    let napkin = Napkin::new();
    let mut poem = Poem::new().on_missing(cfg.missing_key);

    poem.set_storage(&notebook);
    poem.write(GOPHERS);
    poem.save("gophers").context("saving the first poem")?;
    report_save(&poem, "gophers");

    poem.set_storage(&napkin);
    poem.write(LIMERICK);
    poem.save("limerick").context("saving the second poem")?;
    report_save(&poem, "limerick");

    // The napkin ignores the name and hands back its only scribble.
    load(&mut poem, "gophers")?;

    poem.set_storage(&notebook);
    load(&mut poem, "gophers")?;
    load(&mut poem, "absent")?;

    print_contents(&notebook, &napkin);
    Ok(())
}

fn report_save(poem: &Poem, name: &str) {
    print::aligned_line(
        "Saved",
        format!(
            "{} as {} in the {}",
            print::quote(&poem.text()),
            name.color(colors::SECONDARY),
            poem.storage_kind().unwrap_or("void")
        ),
    );
}

fn load(poem: &mut Poem, name: &str) -> anyhow::Result<()> {
    let kind = poem.storage_kind().unwrap_or("void");
    match poem.load(name) {
        Ok(true) => print::aligned_line(
            "Loaded",
            format!(
                "{} from {} in the {}",
                print::quote(&poem.text()),
                name.color(colors::SECONDARY),
                kind
            ),
        ),
        Ok(false) => print::aligned_line(
            "Loaded",
            format!(
                "{} has nothing under {}, poem is now empty",
                kind,
                name.color(colors::SECONDARY)
            ),
        ),
        Err(err @ DiError::KeyNotFound { .. }) => warn!("{} in the {}", err, kind),
        Err(err) => return Err(err).with_context(|| format!("loading {name}")),
    }
    Ok(())
}

fn print_contents(notebook: &Notebook, napkin: &Napkin) {
    print::blank();
    print::tree_head(0, notebook.kind());
    let pages: Vec<(String, ColoredString)> = notebook
        .names()
        .into_iter()
        .filter_map(|name| {
            let content = notebook.load(&name)?;
            Some((name, print::quote(&String::from_utf8_lossy(&content))))
        })
        .collect();
    print::as_tree_one_level(pages);

    print::tree_head(1, napkin.kind());
    let scribble: ColoredString = match napkin.load("") {
        Some(content) => print::quote(&String::from_utf8_lossy(&content)),
        None => "blank".color(colors::SEPARATOR),
    };
    print::as_tree_one_level(vec![("scribble".to_string(), scribble)]);
}
