use framefit_protocol::{Size, Vec2};

/// Fixed chrome allowance around the content box, applied symmetrically to
/// both axes when fitting the frame into its container.
pub const FRAME_BORDER: f64 = 24.0;

/// Uniform shrink ratio that fits a `frame_width` x `frame_height` content
/// box (plus border chrome) into `container`.
///
/// Never magnifies: the result is capped at 1.0. Returns `None` when the
/// container has no positive area — the host has not laid it out yet, so the
/// caller keeps its previous scale and retries on the next layout event.
pub fn scale_to_fit(container: Size, frame_width: u32, frame_height: u32) -> Option<f64> {
    if !container.has_area() {
        return None;
    }
    let outer_w = f64::from(frame_width) + FRAME_BORDER;
    let outer_h = f64::from(frame_height) + FRAME_BORDER;
    Some((container.width / outer_w).min(container.height / outer_h).min(1.0))
}

/// A combined center-and-scale placement of the device frame.
///
/// `offset` is the top-left corner of the scaled outer frame relative to the
/// container origin. Computing both from the same inputs keeps centering and
/// scaling from ever visually decoupling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransform {
    pub scale: f64,
    pub offset: Vec2,
}

impl FrameTransform {
    /// Fit a frame of the given content dimensions into `container`.
    ///
    /// `None` mirrors [`scale_to_fit`]: an unlaid-out container is a no-op
    /// for the caller, not an error.
    pub fn fit(container: Size, frame_width: u32, frame_height: u32) -> Option<Self> {
        let scale = scale_to_fit(container, frame_width, frame_height)?;
        let outer = Self::outer_size(frame_width, frame_height, scale);
        Some(Self {
            scale,
            offset: Vec2::new(
                (container.width - outer.width) / 2.0,
                (container.height - outer.height) / 2.0,
            ),
        })
    }

    /// On-screen extents of the scaled outer frame (content plus border).
    pub fn outer_size(frame_width: u32, frame_height: u32, scale: f64) -> Size {
        Size::new(
            (f64::from(frame_width) + FRAME_BORDER) * scale,
            (f64::from(frame_height) + FRAME_BORDER) * scale,
        )
    }

    /// On-screen extents of this transform applied to the given content box.
    pub fn scaled_size(&self, frame_width: u32, frame_height: u32) -> Size {
        Self::outer_size(frame_width, frame_height, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_min_of_axis_ratios() {
        // 400x700 frame in an 800x600 container: height is the tight axis.
        let s = scale_to_fit(Size::new(800.0, 600.0), 400, 700);
        let expected = 600.0 / (700.0 + FRAME_BORDER);
        assert_eq!(s, Some(expected));
    }

    #[test]
    fn never_magnifies_past_true_size() {
        let s = scale_to_fit(Size::new(4000.0, 4000.0), 393, 852);
        assert_eq!(s, Some(1.0));
    }

    #[test]
    fn scale_is_positive_and_bounded() {
        for &(cw, ch) in &[(1.0, 1.0), (320.0, 240.0), (1920.0, 1080.0)] {
            for &(fw, fh) in &[(1u32, 1u32), (393, 852), (1366, 1024)] {
                let Some(s) = scale_to_fit(Size::new(cw, ch), fw, fh) else {
                    unreachable!("positive container must yield a scale");
                };
                assert!(s > 0.0 && s <= 1.0, "scale {s} out of range");
            }
        }
    }

    #[test]
    fn unlaid_out_container_is_a_no_op() {
        assert_eq!(scale_to_fit(Size::new(0.0, 600.0), 393, 852), None);
        assert_eq!(FrameTransform::fit(Size::new(0.0, 0.0), 393, 852), None);
    }

    #[test]
    fn border_applies_symmetrically() {
        // A square container and square frame must scale by the same ratio
        // on both axes.
        let container = Size::new(500.0, 500.0);
        let Some(s) = scale_to_fit(container, 1000, 1000) else {
            unreachable!("positive container must yield a scale");
        };
        assert_eq!(s, 500.0 / (1000.0 + FRAME_BORDER));
    }

    #[test]
    fn fit_centers_the_scaled_frame() {
        let container = Size::new(800.0, 600.0);
        let Some(t) = FrameTransform::fit(container, 400, 700) else {
            unreachable!("positive container must yield a transform");
        };
        let outer = t.scaled_size(400, 700);
        assert!((t.offset.x - (800.0 - outer.width) / 2.0).abs() < 1e-9);
        assert!((t.offset.y - (600.0 - outer.height) / 2.0).abs() < 1e-9);
        // The tight axis touches the container edges.
        assert!((outer.height - 600.0).abs() < 1e-9);
        assert!(t.offset.y.abs() < 1e-9);
    }
}
