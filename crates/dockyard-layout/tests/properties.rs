//! Property-based invariant tests for the docking layout.
//!
//! Verifies, after an arbitrary sequence of commands, drags and tear-outs:
//! 1. Structure: no orphans, empty containers or single-child panels remain
//!    and every composite's visibility matches its children
//! 2. Geometry only covers visible panels and panes
//! 3. Round trip: serialize → deserialize → serialize is byte-identical and
//!    the reloaded layout is itself clean
//! 4. Activating the active content again is a silent no-op

use dockyard_common::{NodeId, Orientation, Point};
use dockyard_layout::{
    check_invariants, deserialize_layout, serialize_layout, ContentData, ContentKind,
    DockCommand, DockingManager, DockingOptions, LayoutTree, SplitPosition,
};
use proptest::prelude::*;

// ── Operations ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum ContentOp {
    Float,
    Dock,
    DockAsDocument,
    Hide,
    Show,
    Close,
    ToggleAutoHide,
    Activate,
}

impl ContentOp {
    fn command(self, content: NodeId) -> DockCommand {
        match self {
            ContentOp::Float => DockCommand::Float(content),
            ContentOp::Dock => DockCommand::Dock(content),
            ContentOp::DockAsDocument => DockCommand::DockAsDocument(content),
            ContentOp::Hide => DockCommand::Hide(content),
            ContentOp::Show => DockCommand::Show(content),
            ContentOp::Close => DockCommand::Close(content),
            ContentOp::ToggleAutoHide => DockCommand::ToggleAutoHide(content),
            ContentOp::Activate => DockCommand::Activate(content),
        }
    }
}

/// Targets are picked by index modulo the current candidates, so every
/// generated sequence stays meaningful as the layout changes.
#[derive(Debug, Clone)]
enum Op {
    Content(ContentOp, usize),
    Select {
        pane: usize,
        index: usize,
    },
    Split {
        content: usize,
        orientation: Orientation,
        position: SplitPosition,
    },
    Drag {
        window: usize,
        to: (u16, u16),
    },
    TearOut {
        content: usize,
        to: (u16, u16),
    },
    AddDocument,
}

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_content_op() -> impl Strategy<Value = ContentOp> {
    prop_oneof![
        Just(ContentOp::Float),
        Just(ContentOp::Dock),
        Just(ContentOp::DockAsDocument),
        Just(ContentOp::Hide),
        Just(ContentOp::Show),
        Just(ContentOp::Close),
        Just(ContentOp::ToggleAutoHide),
        Just(ContentOp::Activate),
    ]
}

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn arb_position() -> impl Strategy<Value = SplitPosition> {
    prop_oneof![Just(SplitPosition::Before), Just(SplitPosition::After)]
}

fn arb_pointer() -> impl Strategy<Value = (u16, u16)> {
    (0u16..1280, 0u16..800)
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (arb_content_op(), 0usize..64).prop_map(|(op, i)| Op::Content(op, i)),
        1 => (0usize..16, 0usize..4).prop_map(|(pane, index)| Op::Select { pane, index }),
        1 => (0usize..64, arb_orientation(), arb_position()).prop_map(
            |(content, orientation, position)| Op::Split {
                content,
                orientation,
                position,
            }
        ),
        2 => (0usize..8, arb_pointer()).prop_map(|(window, to)| Op::Drag { window, to }),
        1 => (0usize..64, arb_pointer()).prop_map(|(content, to)| Op::TearOut { content, to }),
        1 => Just(Op::AddDocument),
    ]
}

fn arb_options() -> impl Strategy<Value = DockingOptions> {
    (any::<bool>(), any::<bool>()).prop_map(|(allow_mixed_orientation, keep_document_area)| {
        DockingOptions {
            allow_mixed_orientation,
            keep_document_area,
            ..DockingOptions::default()
        }
    })
}

// ── Fixtures ──────────────────────────────────────────────────────────

fn pane_with(tree: &mut LayoutTree, kind: ContentKind, titles: &[&str]) {
    let pane = tree.new_pane(kind);
    for title in titles {
        let content = tree.new_content(ContentData::new(kind, *title));
        tree.insert_child_at(pane, usize::MAX, content);
    }
    let root_panel = tree.root_panel();
    tree.insert_child_at(root_panel, usize::MAX, pane);
}

/// Tools on the left, documents in the middle, output on the right.
fn workbench(options: DockingOptions) -> DockingManager {
    let mut tree = LayoutTree::with_options(options);
    pane_with(&mut tree, ContentKind::Anchorable, &["Explorer", "Outline"]);
    pane_with(
        &mut tree,
        ContentKind::Document,
        &["main.rs", "lib.rs", "mod.rs"],
    );
    pane_with(&mut tree, ContentKind::Anchorable, &["Terminal", "Problems"]);
    tree.drain_events();
    DockingManager::with_tree(tree)
}

fn pick<T: Copy>(items: &[T], i: usize) -> Option<T> {
    (!items.is_empty()).then(|| items[i % items.len()])
}

fn point((x, y): (u16, u16)) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

fn apply(manager: &mut DockingManager, op: &Op) {
    let tree = manager.tree();
    let contents = tree.contents_under(tree.root());
    match *op {
        Op::Content(kind, i) => {
            if let Some(content) = pick(&contents, i) {
                manager.execute(kind.command(content));
            }
        }
        Op::Select { pane, index } => {
            let panes: Vec<NodeId> = tree
                .descendants(tree.root())
                .into_iter()
                .filter(|n| tree.pane(*n).is_some())
                .collect();
            if let Some(pane) = pick(&panes, pane) {
                manager.execute(DockCommand::Select { pane, index });
            }
        }
        Op::Split {
            content,
            orientation,
            position,
        } => {
            let Some(content) = pick(&contents, content) else {
                return;
            };
            let Some(pane) = tree.parent(content).filter(|p| tree.pane(*p).is_some()) else {
                return;
            };
            manager.execute(DockCommand::Split {
                pane,
                content,
                orientation,
                position,
            });
        }
        Op::Drag { window, to } => {
            let Some(window) = pick(&tree.floating_windows(), window) else {
                return;
            };
            let Some(bounds) = tree.floating(window).map(|w| w.bounds) else {
                return;
            };
            let to = point(to);
            manager.begin_drag(window, Point::new(bounds.x + 10.0, bounds.y + 10.0));
            manager.drag_move(to);
            manager.drag_release(to);
        }
        Op::TearOut { content, to } => {
            let Some(content) = pick(&contents, content) else {
                return;
            };
            let to = point(to);
            if manager.begin_content_drag(content, Point::new(640.0, 400.0)).is_some() {
                manager.drag_move(to);
                manager.drag_release(to);
            }
        }
        Op::AddDocument => {
            let Some(pane) = tree.first_document_pane() else {
                return;
            };
            let tree = manager.tree_mut();
            let document = tree.new_document("scratch.rs");
            tree.insert_child_at(pane, usize::MAX, document);
        }
    }
}

fn run(options: DockingOptions, ops: &[Op]) -> DockingManager {
    let mut manager = workbench(options);
    for op in ops {
        apply(&mut manager, op);
    }
    manager
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Structure survives any operation sequence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn operations_keep_the_tree_clean(
        options in arb_options(),
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let mut manager = workbench(options);
        for (step, op) in ops.iter().enumerate() {
            apply(&mut manager, op);
            let violations = check_invariants(manager.tree());
            prop_assert!(
                violations.is_empty(),
                "step {} ({:?}) broke the layout: {:?}",
                step,
                op,
                violations
            );
        }
        prop_assert!(!manager.is_dragging());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Geometry only covers visible nodes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn geometry_skips_hidden_nodes(ops in prop::collection::vec(arb_op(), 0..30)) {
        let manager = run(DockingOptions::default(), &ops);
        let tree = manager.tree();
        let mut snapshots = vec![manager.compute_layout()];
        for window in tree.floating_windows() {
            snapshots.extend(manager.compute_window_layout(window));
        }
        for snapshot in &snapshots {
            for entry in &snapshot.entries {
                prop_assert!(tree.is_visible(entry.node), "{} is laid out while hidden", entry.node);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Serialization round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn serialization_round_trips(
        options in arb_options(),
        ops in prop::collection::vec(arb_op(), 0..30),
    ) {
        let manager = run(options.clone(), &ops);
        let xml = serialize_layout(manager.tree()).expect("serialize");
        let loaded = deserialize_layout(&xml, options).expect("deserialize");
        prop_assert_eq!(check_invariants(&loaded), vec![]);
        let again = serialize_layout(&loaded).expect("reserialize");
        prop_assert_eq!(&again, &xml);
        prop_assert_eq!(loaded.active_content(), manager.tree().active_content());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Idempotent activation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn reactivating_is_silent(ops in prop::collection::vec(arb_op(), 0..30)) {
        let mut manager = run(DockingOptions::default(), &ops);
        manager.drain_events();
        if let Some(active) = manager.tree().active_content() {
            prop_assert!(!manager.execute(DockCommand::Activate(active)));
            prop_assert!(manager.drain_events().is_empty());
            prop_assert_eq!(manager.tree().active_content(), Some(active));
        }
    }
}
