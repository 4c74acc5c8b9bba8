use anyhow::Context;
use colored::*;
use tracing::info_span;

use crate::terminal::{colors, print};
use dirule_adapters::{Newscaster, Preacher, SalesPromoter};
use dirule_common::Config;
use dirule_core::domain::Announcement;
use dirule_core::ports::Speaker;

const MESSAGE: &str = "Gophers are incredibly smart.";

pub fn announce(cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("announce");
    let _guard = span.enter();

    print::header("announcement", cfg.quiet);

    let newscaster = Newscaster::default();
    let preacher = Preacher;
    let promoter = SalesPromoter;

    // The first speaker comes in through the constructor, the rest through the setter.
    let mut announcement = Announcement::with_speaker(&newscaster);
    announcement.deliver(MESSAGE);
    print::aligned_line("Message", print::quote(announcement.message()));
    print::blank();

    let speakers: [&dyn Speaker; 3] = [&newscaster, &preacher, &promoter];
    for (idx, speaker) in speakers.into_iter().enumerate() {
        announcement.set_speaker(speaker);
        let said = announcement
            .announce()
            .with_context(|| format!("announcing through the {}", speaker.kind()))?;

        print::tree_head(idx, announcement.speaker_kind().unwrap_or("nobody"));
        print::as_tree_one_level(vec![("says".to_string(), said.color(colors::QUOTE))]);
        if idx + 1 != speakers.len() {
            print::blank();
        }
    }
    Ok(())
}
