/*
 * diff_properties.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Coverage properties of the index-aligned diff.
 */

use kindred_analysis::diff;
use kindred_post_types::{EditorBlock, Heading, Paragraph, PostDocument};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn arb_block() -> impl Strategy<Value = EditorBlock> {
    prop_oneof![
        "[a-c]{1,2}".prop_map(|t| EditorBlock::from(Paragraph::text(t))),
        (1u8..3, "[a-c]{1,2}").prop_map(|(l, t)| EditorBlock::from(Heading::new(l, t))),
    ]
}

fn arb_document() -> impl Strategy<Value = PostDocument> {
    prop::collection::vec(arb_block(), 0..6).prop_map(PostDocument::new)
}

proptest! {
    #[test]
    fn every_position_is_classified_at_most_once(old in arb_document(), new in arb_document()) {
        let summary = diff(&old, &new);
        let len = old.len().max(new.len());

        let mut seen = BTreeSet::new();
        for index in summary
            .added_blocks
            .iter()
            .chain(&summary.removed_blocks)
            .chain(&summary.modified_blocks)
        {
            prop_assert!(*index < len);
            prop_assert!(seen.insert(*index), "index {} classified twice", index);
        }

        let unchanged = (0..len).filter(|i| !seen.contains(i)).count();
        prop_assert_eq!(seen.len() + unchanged, len);
        for i in (0..len).filter(|i| !seen.contains(i)) {
            prop_assert_eq!(&old.blocks[i], &new.blocks[i]);
        }

        prop_assert_eq!(summary.added_blocks.len(), new.len().saturating_sub(old.len()));
        prop_assert_eq!(summary.removed_blocks.len(), old.len().saturating_sub(new.len()));
        prop_assert_eq!(
            summary.has_significant_changes,
            !seen.is_empty()
        );
    }

    #[test]
    fn diff_against_itself_is_empty(doc in arb_document()) {
        prop_assert!(!diff(&doc, &doc).has_significant_changes);
    }

    #[test]
    fn diff_is_mirrored(old in arb_document(), new in arb_document()) {
        let forward = diff(&old, &new);
        let backward = diff(&new, &old);
        prop_assert_eq!(&forward.added_blocks, &backward.removed_blocks);
        prop_assert_eq!(&forward.removed_blocks, &backward.added_blocks);
        prop_assert_eq!(&forward.modified_blocks, &backward.modified_blocks);
    }
}

#[test]
fn summary_json_snapshot() {
    let old = PostDocument::new(vec![Paragraph::text("a").into()]);
    let new = PostDocument::new(vec![Paragraph::text("b").into(), Paragraph::text("c").into()]);
    let json = serde_json::to_string(&diff(&old, &new)).unwrap();
    insta::assert_snapshot!(json, @r#"{"addedBlocks":[1],"removedBlocks":[],"modifiedBlocks":[0],"hasSignificantChanges":true}"#);
}
