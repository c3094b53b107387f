//! Property tests for managed block editing

use colorizer_content::{BlockMarkers, ManagedBlock, remove, upsert};
use proptest::prelude::*;

const START: &str = "/* adw-gtk3 Colorizer Extension Start */";
const END: &str = "/* adw-gtk3 Colorizer Extension End */";

fn markers() -> BlockMarkers {
    BlockMarkers::new(START, END)
}

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// User-owned file content that never contains our markers
fn user_content() -> impl Strategy<Value = String> {
    "[a-z0-9 {}:;.@#\\n-]{0,200}"
        .prop_filter("must not contain markers", |s| {
            !s.contains(START) && !s.contains(END)
        })
}

/// Generated block bodies: declaration-like lines
fn block_body() -> impl Strategy<Value = String> {
    "[a-z0-9 @#_;-]{1,60}"
}

proptest! {
    #[test]
    fn upsert_yields_exactly_one_block(original in user_content(), body in block_body()) {
        let result = upsert(&original, &ManagedBlock::new(markers(), body)).unwrap();
        prop_assert_eq!(count_occurrences(&result, START), 1);
        prop_assert_eq!(count_occurrences(&result, END), 1);
    }

    #[test]
    fn repeated_upserts_never_duplicate(
        original in user_content(),
        bodies in prop::collection::vec(block_body(), 1..6),
    ) {
        let mut content = original;
        for body in bodies {
            content = upsert(&content, &ManagedBlock::new(markers(), body)).unwrap();
            prop_assert_eq!(count_occurrences(&content, START), 1);
            prop_assert_eq!(count_occurrences(&content, END), 1);
        }
    }

    #[test]
    fn upsert_is_idempotent(original in user_content(), body in block_body()) {
        let block = ManagedBlock::new(markers(), body);
        let once = upsert(&original, &block).unwrap();
        let twice = upsert(&once, &block).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn upsert_then_remove_restores_trimmed_original(
        original in user_content(),
        body in block_body(),
    ) {
        let upserted = upsert(&original, &ManagedBlock::new(markers(), body)).unwrap();
        let remaining = remove(&upserted, &markers()).unwrap().unwrap();
        prop_assert_eq!(remaining, original.trim_end().to_string());
    }

    #[test]
    fn remove_without_block_is_a_no_op(original in user_content()) {
        prop_assert_eq!(remove(&original, &markers()).unwrap(), None);
    }
}
