#![cfg(test)]
use dirule_adapters::{Newscaster, Preacher, SalesPromoter};
use dirule_common::DiError;
use dirule_core::domain::Announcement;
use dirule_core::ports::Speaker;

const MESSAGE: &str = "Gophers are incredibly smart";

#[test]
fn announcement_without_speaker_fails() {
    let mut announcement = Announcement::new();
    announcement.deliver(MESSAGE);
    assert_eq!(
        announcement.announce(),
        Err(DiError::UnsetDependency {
            capability: "speaker"
        })
    );
}

/// Every speaker gets the message verbatim, whatever it does with it afterwards.
#[test]
fn every_speaker_carries_the_message() {
    let newscaster = Newscaster::new("GNN");
    let speakers: [&dyn Speaker; 2] = [&newscaster, &Preacher];

    let mut announcement = Announcement::new();
    announcement.deliver(MESSAGE);
    for speaker in speakers {
        announcement.set_speaker(speaker);
        let said = announcement.announce().unwrap();
        assert!(said.contains(MESSAGE), "{} said {said:?}", speaker.kind());
        assert_eq!(announcement.speaker_kind(), Some(speaker.kind()));
    }

    announcement.set_speaker(&SalesPromoter);
    let said = announcement.announce().unwrap();
    assert!(said.contains(&MESSAGE.to_uppercase()));
}

#[test]
fn setting_the_same_speaker_twice_changes_nothing() {
    let preacher = Preacher;
    let mut once = Announcement::with_speaker(&preacher);
    let mut twice = Announcement::new();
    twice.set_speaker(&preacher);
    twice.set_speaker(&preacher);

    once.deliver(MESSAGE);
    twice.deliver(MESSAGE);
    assert_eq!(once.announce(), twice.announce());
}
