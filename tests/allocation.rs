//! Query trees and compiled iterators release every allocation they make
//!
//! A counting global allocator tracks live bytes per thread, so the test
//! harness running other threads does not disturb the numbers.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use quern::config::IndexSettings;
use quern::index::Index;
use quern::models::Document;
use quern::query::QueryNode;
use quern::schema::{FieldOptions, FieldTypes, Schema};

struct CountingAllocator;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
}

fn track(delta: isize) {
    let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + delta));
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            track(layout.size() as isize);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        track(-(layout.size() as isize));
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            track(new_size as isize - layout.size() as isize);
        }
        new_ptr
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

fn live_bytes() -> isize {
    LIVE_BYTES.with(Cell::get)
}

fn build_tree(schema: &Schema) -> QueryNode {
    let mut root = QueryNode::union();
    for i in 0..16 {
        let mut phrase = QueryNode::phrase(i % 2 == 0);
        phrase
            .add_child(QueryNode::token(schema, Some("title"), &format!("word{}", i)).unwrap())
            .unwrap();
        phrase
            .add_child(QueryNode::prefix(schema, None, "wor").unwrap())
            .unwrap();
        phrase
            .add_child(QueryNode::numeric(schema, "price", 0.0, i as f64, true, false).unwrap())
            .unwrap();

        let mut tag = QueryNode::tag(schema, "color").unwrap();
        tag.add_child(QueryNode::token(schema, None, "red").unwrap())
            .unwrap();
        tag.add_child(QueryNode::lex_range(schema, None, Some("a"), None).unwrap())
            .unwrap();
        phrase.add_child(tag).unwrap();

        root.add_child(phrase).unwrap();
    }
    root
}

fn build_index() -> Index {
    let mut index = Index::new("alloc", IndexSettings::default());
    index
        .create_field("title", FieldTypes::TEXT, FieldOptions::empty())
        .unwrap();
    index
        .create_field("price", FieldTypes::NUMERIC, FieldOptions::empty())
        .unwrap();
    index
        .create_field("color", FieldTypes::TAG, FieldOptions::empty())
        .unwrap();
    for i in 0..32 {
        index
            .add_document(
                Document::new(format!("doc:{}", i), 1.0, None)
                    .with_text("title", format!("word{} words working", i % 16))
                    .with_number("price", (i % 8) as f64)
                    .with_text("color", if i % 3 == 0 { "red" } else { "blue" }),
            )
            .unwrap();
    }
    index
}

fn compile_and_drain(index: &Index) -> usize {
    let mut results = index.compile(build_tree(index.schema()));
    let mut matched = 0;
    while results.next_key().is_some() {
        matched += 1;
    }
    results.rewind();
    matched
}

#[test]
fn test_trees_and_iterators_free_everything() {
    let index = build_index();

    // dropping an uncompiled tree
    let before = live_bytes();
    let tree = build_tree(index.schema());
    assert_eq!(tree.node_count(), 1 + 16 * 7);
    assert!(live_bytes() > before);
    drop(tree);
    assert_eq!(live_bytes(), before);

    // detached children are freed once the caller drops them
    let before = live_bytes();
    let mut tree = build_tree(index.schema());
    let detached = tree.clear_children().unwrap();
    drop(tree);
    assert!(live_bytes() > before);
    drop(detached);
    assert_eq!(live_bytes(), before);

    // warm up lazily initialised logging callsites before measuring
    let expected = compile_and_drain(&index);
    assert!(expected > 0);

    let before = live_bytes();
    assert_eq!(compile_and_drain(&index), expected);
    assert_eq!(live_bytes(), before);
}
