/// The top/bottom caption pair typed by the user

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionPair {
    pub top: String,
    pub bottom: String,
}

impl CaptionPair {
    #[cfg(test)]
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self { top: top.into(), bottom: bottom.into() }
    }

    /// Empty both fields (form reset)
    pub fn reset(&mut self) {
        self.top.clear();
        self.bottom.clear();
    }

    /// Texts in reading order: top, then bottom
    pub fn utterances(&self) -> [&str; 2] {
        [self.top.as_str(), self.bottom.as_str()]
    }
}
