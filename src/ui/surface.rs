use std::collections::BTreeSet;

/// The root visual container: a class list plus an inline font-size style.
///
/// The controllers only ever drive the UI through this seam, so the same
/// logic runs against a DOM body, a widget tree or the headless state below.
pub trait VisualSurface {
    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);

    /// Inline font-size style, applied immediately for visual feedback.
    fn set_font_size_px(&mut self, px: u32);
}

/// Surface state without a real UI behind it.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    classes: BTreeSet<String>,
    font_size_px: Option<u32>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Last applied inline font size, or `None` if never set.
    pub fn font_size_px(&self) -> Option<u32> {
        self.font_size_px
    }
}

impl VisualSurface for HeadlessSurface {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn set_font_size_px(&mut self, px: u32) {
        self.font_size_px = Some(px);
    }
}
