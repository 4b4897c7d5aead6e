use super::*;

use pagereveal::{reveal, MissingElement, RevealError, Revealed};

use pagereveal_web::document::WebDocument;
use pagereveal_web::options::RevealOptions;

#[wasm_bindgen_test]
fn shows_search_list_and_marks_body() {
    let document = document();
    let (table, sections) = hidden_table(&document, "search_list", &["tbody"]);

    pagereveal_web::reveal().unwrap();

    assert_eq!(display(&table), "table");
    assert_eq!(sections[0].class_name(), "fade-in");

    table.remove();
}

#[wasm_bindgen_test]
fn revealing_twice_does_not_duplicate_class() {
    let document = document();
    let (table, sections) = hidden_table(&document, "twice", &["tbody"]);
    let web_document = WebDocument::from(document);

    assert_eq!(
        reveal(&web_document, &config("twice")),
        Ok(Revealed { marked: true })
    );
    assert_eq!(
        reveal(&web_document, &config("twice")),
        Ok(Revealed { marked: false })
    );
    assert_eq!(sections[0].class_list().length(), 1);

    table.remove();
}

#[wasm_bindgen_test]
fn marks_only_first_body() {
    let document = document();
    let (table, sections) = hidden_table(&document, "two_bodies", &["thead", "tbody", "tbody"]);

    reveal(&WebDocument::from(document), &config("two_bodies")).unwrap();

    assert_eq!(sections[0].class_name(), "");
    assert_eq!(sections[1].class_name(), "fade-in");
    assert_eq!(sections[2].class_name(), "");

    table.remove();
}

#[wasm_bindgen_test]
fn without_table_errors_and_mutates_nothing() {
    let document = document();
    let (table, sections) = hidden_table(&document, "present", &["tbody"]);

    assert_eq!(
        reveal(&WebDocument::from(document), &config("absent")),
        Err(RevealError::ElementNotFound(MissingElement::Table {
            id: "absent".to_string()
        }))
    );
    assert_eq!(display(&table), "none");
    assert_eq!(sections[0].class_name(), "");

    table.remove();
}

#[wasm_bindgen_test]
fn without_body_shows_table_then_errors() {
    let document = document();
    let (table, sections) = hidden_table(&document, "bodiless", &["thead"]);

    assert_eq!(
        reveal(&WebDocument::from(document), &config("bodiless")),
        Err(RevealError::ElementNotFound(MissingElement::Body {
            table_id: "bodiless".to_string(),
            tag: "tbody".to_string()
        }))
    );
    assert_eq!(display(&table), "table");
    assert_eq!(sections[0].class_name(), "");

    table.remove();
}

#[wasm_bindgen_test]
fn reveal_with_throws_for_missing_table() {
    let mut options = RevealOptions::new();
    options.set_table_id("nowhere".to_string());

    assert!(pagereveal_web::reveal_with(&options).is_err());
}

#[wasm_bindgen_test]
fn set_log_level_rejects_unknown_level() {
    assert!(pagereveal_web::set_log_level("debug").is_ok());
    assert!(pagereveal_web::set_log_level("verbose").is_err());
}
