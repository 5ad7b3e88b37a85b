//! Property tests for hint label allocation and resolution.

use std::collections::HashSet;

use pagenav_core::element::{ElementId, ElementRole};
use pagenav_core::event::KeyEvent;
use pagenav_core::geometry::{Point, Rect, Viewport, ViewportSource};
use pagenav_hints::{
    Activation, ClickOptions, ContentTree, ElementActions, ElementNode, HintEngine, HintOutcome,
    MarkerHandle, MarkerLayer,
};
use proptest::prelude::*;

struct Page {
    nodes: Vec<ElementNode>,
    markers: HashSet<MarkerHandle>,
    next: u64,
    clicked: Option<ElementId>,
}

impl Page {
    fn with_links(n: usize) -> Self {
        let nodes = (0..n)
            .map(|i| {
                let row = (i / 40) as f64;
                let col = (i % 40) as f64;
                ElementNode::new(
                    ElementId(i as u64),
                    ElementRole::Link,
                    Rect::new(col * 20.0, row * 20.0, 15.0, 15.0),
                )
            })
            .collect();
        Self {
            nodes,
            markers: HashSet::new(),
            next: 0,
            clicked: None,
        }
    }
}

impl ViewportSource for Page {
    fn viewport(&self) -> Viewport {
        Viewport {
            width: 800.0,
            height: 800.0,
            document_width: 800.0,
            document_height: 800.0,
            ..Viewport::default()
        }
    }
}

impl ContentTree for Page {
    fn actionable_nodes(&self) -> Vec<ElementNode> {
        self.nodes.clone()
    }
}

impl MarkerLayer for Page {
    fn place_marker(&mut self, _text: &str, _at: Point) -> MarkerHandle {
        self.next += 1;
        let handle = MarkerHandle(self.next);
        self.markers.insert(handle);
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.markers.remove(&handle);
    }
}

impl ElementActions for Page {
    fn focus_text_entry(&mut self, _id: ElementId) {}

    fn focus_editable(&mut self, _id: ElementId) {}

    fn click(&mut self, id: ElementId, _options: ClickOptions) {
        self.clicked = Some(id);
    }
}

proptest! {
    #[test]
    fn label_count_is_min_of_n_and_capacity(n in 1usize..=700) {
        let mut page = Page::with_links(n);
        let mut engine = HintEngine::default();
        let expected = n.min(625);
        prop_assert_eq!(engine.activate(&mut page, false), Activation::Started { labels: expected });

        let codes: HashSet<&str> = engine.labels().iter().map(|l| l.code.as_str()).collect();
        prop_assert_eq!(codes.len(), expected);
        prop_assert!(codes.iter().all(|c| c.len() == 2 && !c.contains('f')));
        prop_assert_eq!(page.markers.len(), expected);
    }

    #[test]
    fn typing_a_code_resolves_its_element(n in 1usize..=625, pick in any::<prop::sample::Index>()) {
        let mut page = Page::with_links(n);
        let mut engine = HintEngine::default();
        engine.activate(&mut page, false);
        let label = engine.labels()[pick.index(n)].clone();

        let mut chars = label.code.chars();
        let first = chars.next().unwrap();
        let second = chars.next().unwrap();
        prop_assert_eq!(engine.handle_key(&mut page, &KeyEvent::char(first)), HintOutcome::Pending);
        prop_assert_eq!(
            engine.handle_key(&mut page, &KeyEvent::char(second)),
            HintOutcome::Resolved { element: label.element.id }
        );
        prop_assert_eq!(page.clicked, Some(label.element.id));
        prop_assert!(page.markers.is_empty());
        prop_assert!(!engine.is_active());
    }
}

#[test]
fn real_alphabet_covers_three_elements_uniquely() {
    let mut page = Page::with_links(3);
    let mut engine = HintEngine::default();
    engine.activate(&mut page, false);
    let codes: Vec<&str> = engine.labels().iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["aa", "ab", "ac"]);
}

#[test]
fn restricted_alphabet_leaves_overflow_unlabelled() {
    use pagenav_hints::{HintAlphabet, HintConfig};

    let mut page = Page::with_links(5);
    let alphabet = HintAlphabet::new("ab").unwrap();
    let mut engine = HintEngine::new(HintConfig::with_alphabet(alphabet));
    assert_eq!(
        engine.activate(&mut page, false),
        Activation::Started { labels: 4 }
    );
    let labelled: Vec<u64> = engine.labels().iter().map(|l| l.element.id.0).collect();
    assert_eq!(labelled, vec![0, 1, 2, 3]);
}
