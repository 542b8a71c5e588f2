use serde::{Deserialize, Serialize};

use super::TagId;

/// Wrapper struct holding all the tags.
///
/// Tags are identified by an id assigned on creation. Ids start at 1 and increment by 1, so
/// the tags are always ordered by id without gaps. A frame is shown while the tag it carries
/// is visible.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Tags {
    normal: Vec<Tag>,
    current: TagId,
}

impl Tags {
    /// Create a new empty Taglist
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new tag with the provided label and append it to the list. The first tag
    /// becomes the current one.
    pub fn add_new(&mut self, label: &str) -> TagId {
        let next_id = self.normal.len() + 1; // tag id starts at 1
        let mut tag = Tag::new(next_id, label);
        if self.normal.is_empty() {
            tag.visible = true;
            self.current = next_id;
        }
        self.normal.push(tag);
        next_id
    }

    pub fn all(&self) -> &Vec<Tag> {
        &self.normal
    }

    /// Get a tag by its ID
    pub fn get(&self, id: TagId) -> Option<&Tag> {
        id.checked_sub(1).and_then(|index| self.normal.get(index))
    }

    fn get_mut(&mut self, id: TagId) -> Option<&mut Tag> {
        id.checked_sub(1).and_then(|index| self.normal.get_mut(index))
    }

    pub fn contains(&self, id: TagId) -> bool {
        self.get(id).is_some()
    }

    /// Unknown tags are never visible.
    pub fn is_visible(&self, id: TagId) -> bool {
        self.get(id).is_some_and(|tag| tag.visible)
    }

    /// The tag new windows are placed on.
    pub const fn current(&self) -> TagId {
        self.current
    }

    /// Make `id` the current and only visible tag. Returns false for an unknown tag.
    pub fn view(&mut self, id: TagId) -> bool {
        if !self.contains(id) {
            return false;
        }
        for tag in &mut self.normal {
            tag.visible = tag.id == id;
        }
        self.current = id;
        true
    }

    /// Flip the visibility of `id`. Returns the new visibility.
    pub fn toggle(&mut self, id: TagId) -> Option<bool> {
        let tag = self.get_mut(id)?;
        tag.visible = !tag.visible;
        Some(tag.visible)
    }
}

/// Representation of a tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub label: String,
    pub visible: bool,
}

impl Tag {
    #[must_use]
    pub fn new(id: TagId, label: &str) -> Self {
        Self {
            id,
            label: label.to_owned(),
            visible: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Tags {
        let mut tags = Tags::new();
        for label in ["web", "term", "mail"] {
            tags.add_new(label);
        }
        tags
    }

    #[test]
    fn ids_start_at_one_and_first_tag_is_shown() {
        let tags = tags();
        assert_eq!(tags.get(1).map(|t| t.label.as_str()), Some("web"));
        assert_eq!(tags.get(3).map(|t| t.label.as_str()), Some("mail"));
        assert!(tags.get(0).is_none());
        assert!(tags.is_visible(1));
        assert!(!tags.is_visible(2));
        assert_eq!(tags.current(), 1);
    }

    #[test]
    fn view_shows_only_one_tag() {
        let mut tags = tags();
        tags.toggle(3);
        assert!(tags.view(2));
        assert_eq!(
            tags.all().iter().filter(|t| t.visible).map(|t| t.id).collect::<Vec<_>>(),
            vec![2]
        );
        assert_eq!(tags.current(), 2);
        assert!(!tags.view(42));
        assert_eq!(tags.current(), 2);
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut tags = tags();
        assert_eq!(tags.toggle(2), Some(true));
        assert!(tags.is_visible(1) && tags.is_visible(2));
        assert_eq!(tags.toggle(2), Some(false));
        assert_eq!(tags.toggle(9), None);
        assert!(!tags.is_visible(9));
    }
}
