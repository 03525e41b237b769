use crate::source::{Addressing, PageSource};
use crate::test_helpers::factory::Factory;

#[tokio::test]
async fn builds_named_rows() {
    let factory = Factory::memory_source().with_name("b").with_len(3);
    assert_eq!(factory.rows(), vec!["b:1", "b:2", "b:3"]);

    let source = factory.with_addressing(Addressing::Offset).create();
    assert_eq!(source.name(), "b");
    assert_eq!(source.addressing(), Addressing::Offset);
    assert_eq!(source.count().await.expect("count"), 3);
}
