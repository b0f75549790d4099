//! Navigation State Machine
//!
//! Three screens, explicit user-triggered transitions, and a single-level
//! back memory (not a stack). The machine runs for the lifetime of the
//! session; there is no terminal state.

/// The screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing screen offering the upload/chat choice
    Initial,
    /// File upload screen
    Upload,
    /// Chat screen
    Chat,
}

/// Screen selection with one remembered previous screen
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Screen,
    previous: Option<Screen>,
}

impl Navigator {
    /// Start on the landing screen
    pub fn new() -> Self {
        Self {
            current: Screen::Initial,
            previous: None,
        }
    }

    /// The screen currently shown
    pub fn current(&self) -> Screen {
        self.current
    }

    /// The document sidebar is shown on the upload and chat screens only
    pub fn sidebar_visible(&self) -> bool {
        matches!(self.current, Screen::Upload | Screen::Chat)
    }

    fn go(&mut self, next: Screen) {
        self.previous = Some(self.current);
        self.current = next;
    }

    /// User asked to upload a document
    pub fn request_upload(&mut self) {
        self.go(Screen::Upload);
    }

    /// User asked to chat. Chat only proceeds when at least one document
    /// exists; otherwise the user is redirected to the upload screen.
    pub fn request_chat(&mut self, has_documents: bool) {
        if has_documents {
            self.go(Screen::Chat);
        } else {
            self.go(Screen::Upload);
        }
    }

    /// An upload finished; move on to chatting
    pub fn upload_complete(&mut self) {
        self.go(Screen::Chat);
    }

    /// Return to the previously shown screen. Only one level is remembered,
    /// so a second `back` returns to where the first one started.
    pub fn back(&mut self) {
        if let Some(previous) = self.previous {
            self.previous = Some(self.current);
            self.current = previous;
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_initial_without_sidebar() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Initial);
        assert!(!nav.sidebar_visible());
    }

    #[test]
    fn request_upload_shows_upload_screen() {
        let mut nav = Navigator::new();
        nav.request_upload();
        assert_eq!(nav.current(), Screen::Upload);
        assert!(nav.sidebar_visible());
    }

    #[test]
    fn request_chat_without_documents_redirects_to_upload() {
        let mut nav = Navigator::new();
        nav.request_chat(false);
        assert_eq!(nav.current(), Screen::Upload);
    }

    #[test]
    fn request_chat_with_documents_shows_chat() {
        let mut nav = Navigator::new();
        nav.request_chat(true);
        assert_eq!(nav.current(), Screen::Chat);
        assert!(nav.sidebar_visible());
    }

    #[test]
    fn upload_complete_moves_to_chat() {
        let mut nav = Navigator::new();
        nav.request_upload();
        nav.upload_complete();
        assert_eq!(nav.current(), Screen::Chat);
    }

    #[test]
    fn back_returns_to_previous_screen() {
        let mut nav = Navigator::new();
        nav.request_upload();
        nav.upload_complete();
        nav.back();
        assert_eq!(nav.current(), Screen::Upload);
    }

    #[test]
    fn back_memory_is_single_level() {
        let mut nav = Navigator::new();
        nav.request_upload(); // Initial -> Upload
        nav.upload_complete(); // Upload -> Chat
        nav.back(); // Chat -> Upload
        nav.back(); // Upload -> Chat (not Initial: only one level remembered)
        assert_eq!(nav.current(), Screen::Chat);
    }

    #[test]
    fn back_on_fresh_navigator_is_a_noop() {
        let mut nav = Navigator::new();
        nav.back();
        assert_eq!(nav.current(), Screen::Initial);
    }
}
