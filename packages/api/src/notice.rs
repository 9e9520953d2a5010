//! User-visible notices (toasts) and the sink that receives them.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A transient message shown to the user after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, description)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, description)
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Anything that can show a [`Notice`] to the user.
pub trait Notify {
    fn notify(&mut self, notice: Notice);
}

impl Notify for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// The notices on screen, each under an id that stays put while others are
/// dismissed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeQueue {
    next_id: u64,
    entries: Vec<(u64, Notice)>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, notice));
        id
    }

    /// Remove the notice with `id`. Returns false when it is already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[(u64, Notice)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The id the next pushed notice will get.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Ids of notices pushed at or after `mark`, a value earlier read from
    /// [`NoticeQueue::next_id`].
    pub fn pushed_since(&self, mark: u64) -> Vec<u64> {
        self.entries
            .iter()
            .map(|(id, _)| *id)
            .filter(|id| *id >= mark)
            .collect()
    }
}

impl Notify for NoticeQueue {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

impl Notify for Signal<NoticeQueue> {
    fn notify(&mut self, notice: Notice) {
        self.write().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_targets_one_notice() {
        let mut queue = NoticeQueue::new();
        let first = queue.push(Notice::info("First", ""));
        let second = queue.push(Notice::error("Second", "boom"));
        let third = queue.push(Notice::success("Third", ""));

        assert!(queue.dismiss(second));
        assert!(!queue.dismiss(second));

        let titles: Vec<&str> = queue.entries().iter().map(|(_, n)| n.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Third"]);
        assert_eq!(queue.entries()[1].0, third);

        assert!(queue.dismiss(first));
        assert_eq!(queue.entries()[0].0, third);
    }

    #[test]
    fn test_pushed_since_only_reports_new_notices() {
        let mut queue = NoticeQueue::new();
        queue.notify(Notice::info("Old", ""));
        let mark = queue.next_id();

        assert!(queue.pushed_since(mark).is_empty());

        let fresh = queue.push(Notice::info("New", ""));
        assert_eq!(queue.pushed_since(mark), vec![fresh]);

        // Closing the old toast does not make anything look new.
        queue.dismiss(0);
        assert_eq!(queue.pushed_since(queue.next_id()), Vec::<u64>::new());
    }
}
