use super::*;

#[test]
fn small_amounts_have_no_separator() {
    assert_eq!(inr(0), "₹0");
    assert_eq!(inr(999), "₹999");
}

#[test]
fn thousands_are_grouped() {
    assert_eq!(inr(1_000), "₹1,000");
    assert_eq!(inr(45_000), "₹45,000");
}

#[test]
fn millions_group_twice() {
    assert_eq!(inr(1_234_567), "₹1,234,567");
}

#[test]
fn exact_group_boundaries() {
    assert_eq!(inr(100), "₹100");
    assert_eq!(inr(100_000), "₹100,000");
}
