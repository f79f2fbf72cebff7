#![forbid(unsafe_code)]

//! Toast stacking layout engine.
//!
//! Pure geometry: given the preferred sizes of the visible toasts (in
//! presentation order, oldest first) and the container's dimensions, compute
//! one frame per toast. The most recent toast anchors at the bottom of the
//! container; earlier toasts stack above it.
//!
//! # Invariants
//!
//! - Output length equals input length and output index `i` is the frame
//!   for input index `i`.
//! - Item widths, heights, and horizontal positions are rounded to whole
//!   units to avoid sub-pixel seams between stacked surfaces.
//! - Item width never exceeds the available width (container minus safe
//!   area minus padding), and never goes negative.
//!
//! # Failure Modes
//!
//! - A container smaller than the insets yields zero-width (or
//!   zero-height) frames, never negative ones.

use scrim_core::geometry::{EdgeInsets, Rect, Size};

/// Layout parameters for a toast stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    /// Preferred item width; clamped to the available width.
    pub target_width: f32,
    /// Vertical gap between stacked items.
    pub spacing: f32,
    /// Padding between the safe area and the items.
    pub padding: EdgeInsets,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self {
            target_width: 600.0,
            spacing: 16.0,
            padding: EdgeInsets::all(16.0),
        }
    }
}

impl StackLayout {
    /// Item width inside the given container: the target width clamped to
    /// what remains after safe area and padding, rounded to whole units.
    pub fn item_width(&self, container: Size, safe_area: EdgeInsets) -> f32 {
        let available =
            container.width - safe_area.horizontal() - self.padding.horizontal();
        self.target_width.min(available).max(0.0).round()
    }

    /// Sizing box for an item that has not yet claimed a vertical slot:
    /// clamped width, full available height.
    pub fn preheat_size(&self, container: Size, safe_area: EdgeInsets) -> Size {
        let height =
            container.height - safe_area.vertical() - self.padding.vertical();
        Size::new(
            self.item_width(container, safe_area),
            height.max(0.0).round(),
        )
    }

    /// Compute one frame per item.
    ///
    /// `sizes` is the preferred content size of each visible toast in
    /// presentation order (oldest first). Vertical offsets accumulate in
    /// reverse-insertion order — the newest item sits at the bottom — and
    /// the result is restored to input order before returning.
    pub fn presented_frames(
        &self,
        container: Size,
        safe_area: EdgeInsets,
        sizes: &[Size],
    ) -> Vec<Rect> {
        let _span = tracing::debug_span!(
            "toast_stack_layout",
            items = sizes.len(),
            container_w = container.width,
            container_h = container.height,
        )
        .entered();

        let width = self.item_width(container, safe_area);
        let x = (container.width / 2.0 - width / 2.0).round();

        let mut bottom = container.height - safe_area.bottom - self.padding.bottom;
        let mut frames: Vec<Rect> = Vec::with_capacity(sizes.len());

        for size in sizes.iter().rev() {
            let height = size.height.max(0.0).round();
            let y = bottom - height;
            frames.push(Rect::new(x, y, width, height));
            bottom = y - self.spacing;
        }

        frames.reverse();
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sizes(heights: &[f32]) -> Vec<Size> {
        heights.iter().map(|&h| Size::new(340.0, h)).collect()
    }

    #[test]
    fn two_toast_reference_layout() {
        // Container 400x800, no insets, padding 16, toasts A(50) then B(80).
        let layout = StackLayout::default();
        let frames = layout.presented_frames(
            Size::new(400.0, 800.0),
            EdgeInsets::ZERO,
            &sizes(&[50.0, 80.0]),
        );

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1], Rect::new(16.0, 704.0, 368.0, 80.0));
        assert_eq!(frames[0], Rect::new(16.0, 638.0, 368.0, 50.0));
    }

    #[test]
    fn width_clamps_to_available() {
        let layout = StackLayout::default();
        let width = layout.item_width(Size::new(400.0, 800.0), EdgeInsets::ZERO);
        assert_eq!(width, 368.0);

        // Wide container: target width wins.
        let width = layout.item_width(Size::new(1200.0, 800.0), EdgeInsets::ZERO);
        assert_eq!(width, 600.0);
    }

    #[test]
    fn width_accounts_for_safe_area() {
        let layout = StackLayout::default();
        let width = layout.item_width(Size::new(400.0, 800.0), EdgeInsets::all(20.0));
        assert_eq!(width, 400.0 - 40.0 - 32.0);
    }

    #[test]
    fn undersized_container_yields_zero_width() {
        let layout = StackLayout::default();
        let width = layout.item_width(Size::new(20.0, 800.0), EdgeInsets::all(20.0));
        assert_eq!(width, 0.0);
    }

    #[test]
    fn preheat_uses_full_available_height() {
        let layout = StackLayout::default();
        let size = layout.preheat_size(Size::new(400.0, 800.0), EdgeInsets::ZERO);
        assert_eq!(size, Size::new(368.0, 768.0));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let layout = StackLayout::default();
        let frames =
            layout.presented_frames(Size::new(400.0, 800.0), EdgeInsets::ZERO, &[]);
        assert!(frames.is_empty());
    }

    #[test]
    fn items_are_horizontally_centered() {
        let layout = StackLayout::default();
        let frames = layout.presented_frames(
            Size::new(401.0, 800.0),
            EdgeInsets::ZERO,
            &sizes(&[40.0]),
        );
        let frame = frames[0];
        // Center is the rounded container midpoint.
        let center = frame.x() + frame.width() / 2.0;
        assert!((center - 401.0 / 2.0).abs() <= 0.5);
    }

    proptest! {
        #[test]
        fn layout_preserves_order_and_spacing(
            heights in proptest::collection::vec(10.0f32..200.0, 1..8),
            container_w in 100.0f32..1600.0,
            container_h in 400.0f32..2000.0,
        ) {
            let layout = StackLayout::default();
            let input = sizes(&heights);
            let frames = layout.presented_frames(
                Size::new(container_w, container_h),
                EdgeInsets::ZERO,
                &input,
            );

            prop_assert_eq!(frames.len(), input.len());

            // Later (newer) items sit strictly below earlier ones, separated
            // by the earlier item's height plus the spacing constant.
            for i in 1..frames.len() {
                let above = frames[i - 1];
                let below = frames[i];
                prop_assert_eq!(
                    above.y(),
                    below.y() - layout.spacing - above.height()
                );
            }

            // Newest item anchors at the padded bottom edge.
            let last = frames[frames.len() - 1];
            let anchor = container_h - layout.padding.bottom;
            prop_assert!((last.bottom() - anchor).abs() < 1e-2);
        }

        #[test]
        fn computed_width_never_exceeds_available(
            container_w in 0.0f32..2000.0,
            inset in 0.0f32..100.0,
        ) {
            let layout = StackLayout::default();
            let width = layout.item_width(
                Size::new(container_w, 800.0),
                EdgeInsets::all(inset),
            );
            let available =
                (container_w - 2.0 * inset - layout.padding.horizontal()).max(0.0);
            prop_assert!(width >= 0.0);
            prop_assert!(width <= available.round().max(0.0) + 0.5);
        }
    }
}
