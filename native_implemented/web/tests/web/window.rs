use super::*;

use std::cell::Cell;
use std::rc::Rc;

use web_sys::Event;

use pagereveal::PageRevealController;

use pagereveal_web::document::WebDocument;
use pagereveal_web::window::{add_content_loaded_listener, on_content_loaded, ContentLoaded};

fn dispatch_content_loaded(document: &Document) {
    let event = Event::new("DOMContentLoaded").unwrap();
    document.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn on_content_loaded_after_parsing_runs_immediately() {
    let document = document();
    let called = Rc::new(Cell::new(false));
    let callback_called = called.clone();

    assert_ne!(document.ready_state(), "loading");
    assert_eq!(
        on_content_loaded(&document, move |_| callback_called.set(true)),
        Ok(ContentLoaded::Immediate)
    );
    assert!(called.get());
}

#[wasm_bindgen_test]
fn install_after_parsing_reveals_immediately() {
    let document = document();
    let (table, sections) = hidden_table(&document, "installed", &["tbody"]);

    assert_eq!(
        pagereveal_web::install(config("installed")),
        Ok(ContentLoaded::Immediate)
    );
    assert_eq!(display(&table), "table");
    assert_eq!(sections[0].class_name(), "fade-in");

    table.remove();
}

#[wasm_bindgen_test]
fn content_loaded_listener_runs_once_per_registration() {
    let document = document();
    let calls = Rc::new(Cell::new(0));
    let callback_calls = calls.clone();

    add_content_loaded_listener(&document, move |_| {
        callback_calls.set(callback_calls.get() + 1)
    })
    .unwrap();
    assert_eq!(calls.get(), 0);

    dispatch_content_loaded(&document);
    assert_eq!(calls.get(), 1);

    dispatch_content_loaded(&document);
    assert_eq!(calls.get(), 1);
}

#[wasm_bindgen_test]
fn content_loaded_listener_reveals_table() {
    let document = document();
    let (table, sections) = hidden_table(&document, "deferred", &["tbody"]);
    let controller = PageRevealController::new(config("deferred"));

    add_content_loaded_listener(&document, move |document| {
        controller.trigger(&WebDocument::from(document)).unwrap();
    })
    .unwrap();
    assert_eq!(display(&table), "none");

    dispatch_content_loaded(&document);

    assert_eq!(display(&table), "table");
    assert_eq!(sections[0].class_name(), "fade-in");

    table.remove();
}
