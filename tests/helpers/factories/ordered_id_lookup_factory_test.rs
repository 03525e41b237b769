use crate::neighbor::{NeighborLookup, Neighbors};
use crate::test_helpers::factory::Factory;

#[tokio::test]
async fn answers_for_owned_foreign_and_absent_ids() {
    let lookup = Factory::ordered_id_lookup()
        .with_ids(&["x1", "x2", "x3"])
        .create();

    let owned = lookup.lookup(Some("x2")).await.expect("lookup");
    assert!(owned.has_current);
    assert_eq!(owned.neighbors, Neighbors::new(Some("x1"), Some("x3")));

    let foreign = lookup.lookup(Some("y9")).await.expect("lookup");
    assert!(!foreign.has_current);
    assert_eq!(foreign.neighbors, Neighbors::new(Some("x3"), None));

    let boundary = lookup.lookup(None).await.expect("lookup");
    assert!(!boundary.has_current);
    assert_eq!(boundary.neighbors, Neighbors::new(None, Some("x1")));
}
