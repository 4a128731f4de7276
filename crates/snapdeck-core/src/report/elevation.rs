/// Cosmetic "elevated" flag of the navigation bar, driven purely by the
/// container's scroll offset
#[derive(Debug, Clone)]
pub struct NavElevation {
    threshold: f64,
    elevated: bool,
}

impl Default for NavElevation {
    fn default() -> Self {
        Self::new(20.0)
    }
}

impl NavElevation {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            elevated: false,
        }
    }

    #[inline]
    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    /// Update from the current scroll offset; returns true when the flag flipped
    pub fn update(&mut self, scroll_offset: f64) -> bool {
        let elevated = scroll_offset > self.threshold;
        let changed = elevated != self.elevated;
        self.elevated = elevated;
        changed
    }
}
