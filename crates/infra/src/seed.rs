//! Demo catalog loaded at startup.

use rust_decimal::Decimal;

use catalog_products::ProductDraft;

/// Three products so a fresh service has something to list.
pub fn demo_products() -> Vec<ProductDraft> {
    vec![
        ProductDraft::new(
            "Mechanical Keyboard",
            "Tenkeyless keyboard with hot-swappable switches",
            Decimal::new(8999, 2),
        ),
        ProductDraft::new(
            "Wireless Mouse",
            "Ergonomic mouse with a rechargeable battery",
            Decimal::new(3450, 2),
        ),
        ProductDraft::new(
            "USB-C Hub",
            "Seven-port hub with HDMI and card reader",
            Decimal::new(4999, 2),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_products_are_valid() {
        let drafts = demo_products();
        assert_eq!(drafts.len(), 3);
        for draft in drafts {
            assert!(draft.validate().is_ok(), "invalid seed: {draft:?}");
        }
    }
}
