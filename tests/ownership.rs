//! Allocation balance across read, evaluate and drop.
//!
//! A counting global allocator tracks live allocations per thread. Reading
//! the syntax tree into values, evaluating them, rendering the result and
//! dropping it must leave the live count where it started: every value the
//! evaluator or a builtin discards is released, and nothing is released
//! twice. Fixed cases cover the success path of each builtin; generated
//! expressions cover the rest.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};

use lioliosh::{
    ast::Node,
    interpreter::{evaluator::core::evaluate, parser::parse, reader::read},
};
use proptest::prelude::*;

struct CountingAllocator;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

fn adjust(delta: isize) {
    // `try_with` fails only during thread teardown, when nothing is measured.
    let _ = LIVE.try_with(|live| live.set(live.get() + delta));
}

fn live() -> isize {
    LIVE.with(Cell::get)
}

// SAFETY: every call is forwarded unchanged to the system allocator.
unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            adjust(1);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        adjust(-1);
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

/// Live allocations left behind by reading, evaluating, rendering and
/// dropping `tree` once.
fn allocation_delta(tree: &Node) -> isize {
    // The first run settles one-time allocations (such as log callsite
    // registration) that outlive the evaluation.
    drop(evaluate(read(tree)).to_string());

    let before = live();
    let rendered = evaluate(read(tree)).to_string();
    drop(rendered);
    live() - before
}

fn assert_balanced(source: &str) {
    let tree = parse(source).unwrap_or_else(|e| panic!("{source:?} failed to parse: {e}"));
    assert_eq!(allocation_delta(&tree), 0, "allocation imbalance evaluating {source}");
}

#[test]
fn list_builtins_release_what_they_discard() {
    assert_balanced("(tail {1 2 3})");
    assert_balanced("(tail {(+ 1 2) {4 5} 6})");
    assert_balanced("(head {(+ 1 2) 4})");
    assert_balanced("(head {{1 2} {3}})");
    assert_balanced("(join {1} {2 3})");
    assert_balanced("(join {} {{1}} {(- 2)} {})");
    assert_balanced("(cons 1 {2})");
    assert_balanced("(cons 1 {})");
    assert_balanced("(eval {+ 1 2})");
    assert_balanced("(eval {head {7 8}})");
    assert_balanced("(list 1 {2})");
    assert_balanced("(list {} 3)");
}

#[test]
fn numeric_builtins_release_their_arguments() {
    assert_balanced("(+ 1 2 3)");
    assert_balanced("(- 5)");
    assert_balanced("(* 2 (^ 2 3))");
    assert_balanced("(/ 1 0 (head {9}))");
    assert_balanced("(% 7 0 2)");
    assert_balanced("(max 1 (min 2 3) 4)");
}

#[test]
fn failures_release_the_whole_expression() {
    assert_balanced("(head {})");
    assert_balanced("(tail 1 {2})");
    assert_balanced("(join {1} 2 {3})");
    assert_balanced("(cons {1} {2})");
    assert_balanced("(1 {2} (+ 3 4))");
    assert_balanced("(+ 1 (/ 1 0) (head {}))");
}

const OPERATORS: &[&str] = &["list", "head", "tail", "join", "cons", "eval", "min", "max", "+",
                             "-", "*", "/", "%", "^", "add", "div", "mod"];

fn number() -> impl Strategy<Value = String> {
    prop_oneof![(-20i32..20).prop_map(|n| n.to_string()),
                (-50.0..50.0f64).prop_map(|x| format!("{x:.2}")),]
}

/// Random source text mixing operators, numbers, ordered and quoted groups.
///
/// Besides arbitrary groups, the generator favours calls that type-check,
/// so the success paths of the list builtins run with nested arguments.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![3 => number(),
                           1 => prop::sample::select(OPERATORS).prop_map(str::to_string),];

    leaf.prop_recursive(4, 64, 5, |inner| {
            let quoted = prop::collection::vec(inner.clone(), 0..5)
                .prop_map(|items| format!("{{{}}}", items.join(" ")));
            let non_empty = prop::collection::vec(inner.clone(), 1..5)
                .prop_map(|items| format!("{{{}}}", items.join(" ")));

            prop_oneof![2 => (prop::sample::select(OPERATORS),
                              prop::collection::vec(inner.clone(), 0..5))
                                 .prop_map(|(op, args)| format!("({op} {})", args.join(" "))),
                        1 => prop::collection::vec(inner.clone(), 0..5)
                                 .prop_map(|items| format!("({})", items.join(" "))),
                        1 => quoted.clone(),
                        2 => (prop::sample::select(&["head", "tail"][..]), non_empty.clone())
                                 .prop_map(|(op, list)| format!("({op} {list})")),
                        2 => (number(), quoted.clone())
                                 .prop_map(|(n, list)| format!("(cons {n} {list})")),
                        2 => prop::collection::vec(quoted.clone(), 1..4)
                                 .prop_map(|lists| format!("(join {})", lists.join(" "))),
                        1 => (prop::sample::select(&["+", "*", "max"][..]), non_empty)
                                 .prop_map(|(op, body)| format!("(eval (join {{{op}}} {body}))")),
                        1 => prop::collection::vec(inner, 0..4)
                                 .prop_map(|items| format!("(list {})", items.join(" "))),]
        })
}

proptest! {
    #[test]
    fn evaluation_releases_every_value(source in expression()) {
        let tree = parse(&source).expect("generated source parses");
        prop_assert_eq!(allocation_delta(&tree), 0, "allocation imbalance evaluating {}", source);
    }
}
