//! End-to-end scenarios for accidental RDFa suppression
//!
//! Streams are replayed through `IgnoreAccidentalRdfa` into a recording
//! sink, the way an extractor host drives the pipeline.

mod common;

use common::{context, doc, for_context, labels, rdfa_context, Stream};
use triplesieve::{
    replay, ContextRouter, CountingHandler, HandlerEvent, IgnoreAccidentalRdfa, NTriplesWriter,
    RecordingHandler, TripleHandler, XHTML_VOCAB_NS,
};

fn run(events: Vec<HandlerEvent>) -> Vec<HandlerEvent> {
    let mut policy = IgnoreAccidentalRdfa::new(RecordingHandler::new());
    replay(events, &mut policy).unwrap();
    policy.into_inner().into_events()
}

// === Scenario: Only boilerplate seen, context vanishes ===
#[test]
fn boilerplate_only_rdfa_context_is_invisible() {
    let rdfa = rdfa_context("rdfa");
    let events = Stream::new()
        .start()
        .open(&rdfa)
        .namespace(&rdfa, "xhv", XHTML_VOCAB_NS)
        .boilerplate(&rdfa, "stylesheet")
        .close(&rdfa)
        .end()
        .shutdown()
        .build();

    let out = run(events);
    assert!(for_context(&out, &rdfa.id).is_empty());
    assert_eq!(labels(&out), vec!["start", "end", "shutdown"]);
}

// === Scenario: A real statement releases the whole context ===
#[test]
fn non_boilerplate_statement_releases_context_in_order() {
    let rdfa = rdfa_context("rdfa");
    let events = Stream::new()
        .start()
        .open(&rdfa)
        .namespace(&rdfa, "xhv", XHTML_VOCAB_NS)
        .boilerplate(&rdfa, "stylesheet")
        .triple(&rdfa, "http://purl.org/dc/terms/title", "Home")
        .close(&rdfa)
        .end()
        .build();

    let out = run(events);
    assert_eq!(
        labels(&out),
        vec![
            "start",
            "open:rdfa",
            "ns:rdfa:xhv",
            "triple:rdfa:stylesheet",
            "triple:rdfa:Home",
            "close:rdfa",
            "end",
        ]
    );
}

// === Scenario: Unscrutinized context keeps its exact position ===
#[test]
fn interleaved_contexts_keep_their_positions() {
    let title = context("a", "html-head-title");
    let rdfa = rdfa_context("b");
    let events = Stream::new()
        .start()
        .open(&title)
        .open(&rdfa)
        .triple(&title, "http://purl.org/dc/terms/title", "a1")
        .boilerplate(&rdfa, "b1")
        .triple(&title, "http://purl.org/dc/terms/title", "a2")
        .boilerplate(&rdfa, "b2")
        .triple(&rdfa, "http://xmlns.com/foaf/0.1/name", "b3")
        .triple(&title, "http://purl.org/dc/terms/title", "a3")
        .triple(&rdfa, "http://xmlns.com/foaf/0.1/name", "b4")
        .close(&rdfa)
        .close(&title)
        .end()
        .build();

    let out = run(events);
    assert_eq!(
        labels(&out),
        vec![
            "start",
            "open:a",
            "triple:a:a1",
            "triple:a:a2",
            // b flushes as one block at its unblock point
            "open:b",
            "triple:b:b1",
            "triple:b:b2",
            "triple:b:b3",
            "triple:a:a3",
            "triple:b:b4",
            "close:b",
            "close:a",
            "end",
        ]
    );
}

// === Scenario: Each document is judged on its own ===
#[test]
fn decisions_do_not_leak_across_documents() {
    let rdfa = rdfa_context("rdfa");
    let mut events = Stream::new()
        .start()
        .open(&rdfa)
        .triple(&rdfa, "http://purl.org/dc/terms/title", "first")
        .close(&rdfa)
        .end()
        .build();
    events.extend(
        Stream::new()
            .start()
            .open(&rdfa)
            .boilerplate(&rdfa, "icon")
            .close(&rdfa)
            .end()
            .build(),
    );

    let out = run(events);
    assert_eq!(
        labels(&out),
        vec![
            "start",
            "open:rdfa",
            "triple:rdfa:first",
            "close:rdfa",
            "end",
            "start",
            "end",
        ]
    );
}

// === Scenario: Context left open at end of document ===
#[test]
fn unclosed_rdfa_context_is_dropped_at_end_document() {
    let rdfa = rdfa_context("rdfa");
    let title = context("t", "html-head-title");
    let events = Stream::new()
        .start()
        .open(&title)
        .open(&rdfa)
        .boilerplate(&rdfa, "alternate")
        .triple(&title, "http://purl.org/dc/terms/title", "t1")
        .end()
        .build();

    let out = run(events);
    assert_eq!(
        labels(&out),
        vec!["start", "open:t", "triple:t:t1", "close:t", "end"]
    );
}

// === Scenario: Pipeline into a writer produces only surviving statements ===
#[test]
fn ntriples_output_contains_only_surviving_statements() {
    let rdfa = rdfa_context("rdfa");
    let noise = rdfa_context("noise");
    let events = Stream::new()
        .start()
        .open(&noise)
        .boilerplate(&noise, "stylesheet")
        .close(&noise)
        .open(&rdfa)
        .triple(&rdfa, "http://purl.org/dc/terms/title", "Home")
        .close(&rdfa)
        .end()
        .shutdown()
        .build();

    let mut policy =
        IgnoreAccidentalRdfa::new(CountingHandler::new(NTriplesWriter::new(Vec::new())));
    replay(events, &mut policy).unwrap();

    let counting = policy.into_inner();
    assert_eq!(counting.counts().triples, 1);
    assert_eq!(counting.counts().contexts, 1);
    let text = String::from_utf8(counting.into_inner().into_inner()).unwrap();
    assert_eq!(
        text,
        "<http://example.org/page.html> <http://purl.org/dc/terms/title> \"Home\" .\n"
    );
}

// === Scenario: Policies compose as boxed handlers ===
#[test]
fn router_accepts_boxed_downstream() {
    let sink: Box<dyn TripleHandler> = Box::new(RecordingHandler::new());
    let mut router = ContextRouter::new(sink);
    let ctx = context("a", "html-head-title");
    router.start_document(&doc()).unwrap();
    router.open_context(&ctx).unwrap();
    router.close_context(&ctx).unwrap();
    router.end_document(&doc()).unwrap();
    assert_eq!(router.open_contexts(), 0);
}
