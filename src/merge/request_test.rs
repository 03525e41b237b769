use crate::merge::PageRequest;

#[test]
fn clamps_zero_page_and_page_size() {
    let request = PageRequest::new(0, 0);
    assert_eq!(request.page(), 1);
    assert_eq!(request.page_size(), 1);
    assert!(!request.padding_mode());
    assert_eq!(request, PageRequest::default());
}

#[test]
fn computes_offset_and_end() {
    let request = PageRequest::new(3, 10).with_padding(true);
    assert_eq!(request.offset(), 20);
    assert_eq!(request.end(), 30);
    assert!(request.padding_mode());
}

#[test]
fn first_page_starts_at_zero() {
    let request = PageRequest::new(1, 25);
    assert_eq!(request.offset(), 0);
    assert_eq!(request.end(), 25);
}
