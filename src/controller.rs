/// Parse a go-to field value. Anything non-numeric is treated as no input.
pub fn parse_page(raw: &str) -> Option<u16> {
    raw.trim().parse().ok()
}

/// Owns the 1-based page counter shown in the toolbar and translates
/// navigation intents into zero-based flip-surface indices.
///
/// The counter has two writers in practice (explicit navigation and the
/// surface's own page-change notification), so both paths funnel through
/// [`FlipController::reconcile`]; `goto` only validates and maps, it never
/// touches the counter itself.
#[derive(Debug, Clone, Copy)]
pub struct FlipController {
    current_page: u16,
    total_pages: u16,
}

impl FlipController {
    pub fn new(total_pages: u16) -> Self {
        Self {
            current_page: 1,
            total_pages,
        }
    }

    pub fn current_page(&self) -> u16 {
        self.current_page
    }

    pub fn total_pages(&self) -> u16 {
        self.total_pages
    }

    /// Map a 1-based target to the surface's zero-based index, or `None` when
    /// the target is out of range.
    pub fn goto(&self, target: u16) -> Option<u16> {
        if (1..=self.total_pages).contains(&target) {
            Some(target - 1)
        } else {
            None
        }
    }

    pub fn can_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Accept the surface's reported zero-based index as the new truth.
    /// Every counter mutation goes through here, whether the flip came from a
    /// toolbar action or from the user turning pages on the surface directly.
    pub fn reconcile(&mut self, raw_index: u16) {
        self.current_page = raw_index + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goto_maps_every_valid_target() {
        let mut controller = FlipController::new(10);
        for target in 1..=10 {
            let index = controller.goto(target).unwrap();
            assert_eq!(index, target - 1);
            controller.reconcile(index);
            assert_eq!(controller.current_page(), target);
        }
    }

    #[test]
    fn goto_rejects_out_of_range_targets() {
        let controller = FlipController::new(10);
        assert_eq!(controller.goto(0), None);
        assert_eq!(controller.goto(11), None);
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn non_numeric_input_never_reaches_the_surface() {
        assert_eq!(parse_page("abc"), None);
        assert_eq!(parse_page(""), None);
        assert_eq!(parse_page("12x"), None);
        assert_eq!(parse_page("-3"), None);
        assert_eq!(parse_page(" 7 "), Some(7));
    }

    #[test]
    fn boundary_affordances() {
        let mut controller = FlipController::new(3);
        assert!(!controller.can_prev());
        assert!(controller.can_next());
        controller.reconcile(2);
        assert!(controller.can_prev());
        assert!(!controller.can_next());
    }

    #[test]
    fn reconcile_is_authoritative() {
        let mut controller = FlipController::new(5);
        controller.reconcile(3);
        assert_eq!(controller.current_page(), 4);
        // A manual flip reported by the surface overrides whatever the
        // toolbar last requested.
        controller.reconcile(0);
        assert_eq!(controller.current_page(), 1);
    }
}
