//! Modal dialog state for the UI.

use crate::state::types::Product;

/// Active modal dialog, if any.
///
/// Exactly one modal can be open at a time; while open it consumes all key
/// and mouse input, which also freezes list navigation underneath (the
/// terminal analog of suspending background scroll).
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Modal {
    /// No modal open.
    #[default]
    None,
    /// Full review detail for one product.
    Review {
        /// Product whose review is rendered.
        product: Box<Product>,
        /// Vertical scroll offset within the modal body.
        scroll: u16,
    },
    /// Informational alert with a non-interactive message.
    Alert {
        /// Message text to display.
        message: String,
    },
    /// Keybinding help overlay.
    Help,
}

impl Modal {
    /// Whether any modal is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// What: Open the review modal for a product.
    ///
    /// Inputs:
    /// - `product`: Product to render.
    ///
    /// Output:
    /// - Replaces the current modal with a fresh `Review` at scroll zero.
    pub fn open_review(&mut self, product: Product) {
        *self = Self::Review {
            product: Box::new(product),
            scroll: 0,
        };
    }

    /// What: Close the current modal.
    ///
    /// Inputs: none.
    ///
    /// Output:
    /// - Transitions to `None`; idempotent when already closed.
    pub fn close(&mut self) {
        *self = Self::None;
    }

    /// Adjust the review scroll offset by `delta` lines, saturating at zero.
    pub fn scroll_review(&mut self, delta: i32) {
        if let Self::Review { scroll, .. } = self {
            let cur = i32::from(*scroll);
            *scroll = u16::try_from((cur + delta).max(0)).unwrap_or(u16::MAX);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Review modal open/close state machine
    ///
    /// - Input: Open with a product, close twice
    /// - Output: `is_open` true after open, false after close; second close
    ///   is a no-op
    fn modal_open_close_idempotent() {
        let mut m = Modal::default();
        assert!(!m.is_open());

        m.open_review(Product {
            id: "p1".into(),
            title: "Widget".into(),
            ..Product::default()
        });
        assert!(m.is_open());
        assert!(matches!(&m, Modal::Review { product, scroll: 0 } if product.id == "p1"));

        m.close();
        assert!(!m.is_open());
        m.close();
        assert!(!m.is_open());
        assert_eq!(m, Modal::None);
    }

    #[test]
    /// What: Review scroll saturates at zero and accumulates downward
    ///
    /// - Input: Scroll up from zero, then down by three
    /// - Output: Offset stays at zero, then reaches three
    fn modal_review_scroll_saturates() {
        let mut m = Modal::default();
        m.open_review(Product::default());
        m.scroll_review(-2);
        assert!(matches!(m, Modal::Review { scroll: 0, .. }));
        m.scroll_review(3);
        assert!(matches!(m, Modal::Review { scroll: 3, .. }));
        // Scrolling a non-review modal is a no-op
        let mut help = Modal::Help;
        help.scroll_review(5);
        assert_eq!(help, Modal::Help);
    }
}
