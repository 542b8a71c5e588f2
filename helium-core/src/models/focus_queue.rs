use std::collections::VecDeque;

use super::FrameId;

/// Frames ordered from most to least recently focused. Holds no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusQueue(VecDeque<FrameId>);

impl FocusQueue {
    /// Move `id` to the head, adding it if needed.
    pub fn promote(&mut self, id: FrameId) {
        self.remove(id);
        self.0.push_front(id);
    }

    /// Add `id` at the tail unless it is already queued.
    pub fn push_back(&mut self, id: FrameId) {
        if !self.contains(id) {
            self.0.push_back(id);
        }
    }

    pub fn remove(&mut self, id: FrameId) -> bool {
        let Some(index) = self.0.iter().position(|queued| *queued == id) else {
            return false;
        };
        self.0.remove(index);
        true
    }

    pub fn head(&self) -> Option<FrameId> {
        self.0.front().copied()
    }

    pub fn contains(&self, id: FrameId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrameId> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promote_moves_to_head_without_duplicating() {
        let mut queue = FocusQueue::default();
        queue.promote(FrameId(1));
        queue.promote(FrameId(2));
        queue.promote(FrameId(1));
        assert_eq!(queue.head(), Some(FrameId(1)));
        assert_eq!(queue.len(), 2);
        assert_eq!(
            queue.iter().copied().collect::<Vec<_>>(),
            vec![FrameId(1), FrameId(2)]
        );
    }

    #[test]
    fn push_back_is_ignored_for_queued_frames() {
        let mut queue = FocusQueue::default();
        queue.push_back(FrameId(1));
        queue.push_back(FrameId(2));
        queue.push_back(FrameId(1));
        assert_eq!(
            queue.iter().copied().collect::<Vec<_>>(),
            vec![FrameId(1), FrameId(2)]
        );
    }

    #[test]
    fn removing_head_exposes_next_most_recent() {
        let mut queue = FocusQueue::default();
        queue.promote(FrameId(1));
        queue.promote(FrameId(2));
        assert!(queue.remove(FrameId(2)));
        assert!(!queue.remove(FrameId(2)));
        assert_eq!(queue.head(), Some(FrameId(1)));
        queue.remove(FrameId(1));
        assert!(queue.is_empty());
        assert_eq!(queue.head(), None);
    }
}
