#![cfg(test)]
use dirule_adapters::{Napkin, Notebook};
use dirule_common::{DiError, MissingKeyPolicy};
use dirule_core::domain::Poem;
use dirule_core::ports::Storage;

const GOPHERS: &str = "Gophers are incredibly smart";

/// A poem built without storage, given a notebook later, lands in that notebook once.
#[test]
fn injected_notebook_receives_the_poem() {
    let notebook = Notebook::new();

    let mut poem = Poem::new();
    poem.set_storage(&notebook);
    poem.write(GOPHERS);
    poem.save("gophers").unwrap();

    assert_eq!(notebook.len(), 1);
    assert_eq!(notebook.load("gophers").as_deref(), Some(GOPHERS.as_bytes()));
}

/// One poem, two storages: each keeps what was saved while it was injected.
#[test]
fn swapping_storages_keeps_them_independent() {
    let notebook = Notebook::new();
    let napkin = Napkin::new();
    let mut poem = Poem::new();

    poem.set_storage(&notebook);
    poem.write("poem-A");
    poem.save("k").unwrap();

    poem.set_storage(&napkin);
    poem.write("poem-B");
    poem.save("k").unwrap();

    assert_eq!(notebook.load("k").as_deref(), Some(&b"poem-A"[..]));
    assert_eq!(napkin.load("k").as_deref(), Some(&b"poem-B"[..]));
    assert_eq!(napkin.load("any other key").as_deref(), Some(&b"poem-B"[..]));

    poem.set_storage(&notebook);
    assert_eq!(poem.load("k"), Ok(true));
    assert_eq!(poem.text(), "poem-A");
}

#[test]
fn poem_without_storage_cannot_save() {
    let mut poem = Poem::new();
    poem.write(GOPHERS);
    assert_eq!(
        poem.save("gophers"),
        Err(DiError::UnsetDependency {
            capability: "storage"
        })
    );
}

#[test]
fn one_notebook_backs_many_poems() {
    let notebook = Notebook::new();
    let mut first = Poem::with_storage(&notebook);
    let mut second = Poem::with_storage(&notebook);

    first.write("roses");
    first.save("shared").unwrap();
    second.load("shared").unwrap();
    assert_eq!(second.text(), "roses");

    second.write("violets");
    second.save("shared").unwrap();
    first.load("shared").unwrap();
    assert_eq!(first.text(), "violets");
}

#[test]
fn napkin_reads_back_under_any_name() {
    let napkin = Napkin::new();
    let mut poem = Poem::with_storage(&napkin);
    poem.write("haiku");
    poem.save("k1").unwrap();

    poem.write("");
    assert_eq!(poem.load("k2"), Ok(true));
    assert_eq!(poem.text(), "haiku");
}

#[test]
fn unknown_name_follows_the_policy() {
    let notebook = Notebook::new();
    notebook.save("blank", b"");

    let mut lenient = Poem::with_storage(&notebook);
    lenient.write("draft");
    assert_eq!(lenient.load("absent"), Ok(false));
    assert!(lenient.content().is_empty());
    assert_eq!(lenient.load("blank"), Ok(true));

    let mut strict = Poem::with_storage(&notebook).on_missing(MissingKeyPolicy::Fail);
    strict.write("draft");
    assert!(matches!(
        strict.load("absent"),
        Err(DiError::KeyNotFound { ref name }) if name == "absent"
    ));
    assert_eq!(strict.text(), "draft");
    assert_eq!(strict.load("blank"), Ok(true));
    assert!(strict.content().is_empty());
}
