//! Topic tree traversal
//!
//! Topics form a forest per course through `parent_topic_id`. The tree is
//! small enough to load whole, so traversal is pure: the service fetches a
//! course's topics once and these functions walk the parent map in memory.
//! Every write that touches a parent link goes through
//! [`reparent_creates_cycle`] first, which is what keeps the walk finite for
//! everything stored.

use crate::contract::Topic;
use std::collections::{HashMap, HashSet};

/// Hard ceiling on topic nesting
pub const MAX_TOPIC_DEPTH: usize = 100;

/// Error type for topic tree traversal
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TopicTreeError {
    #[error("Topic not found in course: {0}")]
    TopicNotFound(i32),

    #[error("Circular reference detected at topic {0}")]
    CircularReference(i32),

    #[error("Topic tree depth exceeds maximum ({MAX_TOPIC_DEPTH} levels)")]
    TooDeep,
}

/// Parent map of a single course's topics
pub fn parent_map(topics: &[Topic]) -> HashMap<i32, Option<i32>> {
    topics
        .iter()
        .map(|t| (t.id, t.parent_topic_id))
        .collect()
}

/// Path from a topic up to its root, both inclusive
///
/// First element is the requested topic, last is the root of its subtree.
pub fn path_to_root(
    parents: &HashMap<i32, Option<i32>>,
    topic_id: i32,
) -> Result<Vec<i32>, TopicTreeError> {
    if !parents.contains_key(&topic_id) {
        return Err(TopicTreeError::TopicNotFound(topic_id));
    }

    let mut path = vec![topic_id];
    let mut current = topic_id;
    let mut visited = HashSet::new();
    visited.insert(current);

    while let Some(Some(parent_id)) = parents.get(&current) {
        if visited.contains(parent_id) {
            return Err(TopicTreeError::CircularReference(*parent_id));
        }
        if !parents.contains_key(parent_id) {
            // Parent outside the loaded course; stored data never does this
            return Err(TopicTreeError::TopicNotFound(*parent_id));
        }

        path.push(*parent_id);
        visited.insert(*parent_id);
        current = *parent_id;

        if path.len() > MAX_TOPIC_DEPTH {
            return Err(TopicTreeError::TooDeep);
        }
    }

    Ok(path)
}

/// Would pointing `topic_id` at `new_parent_id` close a loop?
///
/// True when the topic itself sits on the would-be parent's ancestor path,
/// including the degenerate self-parent case.
pub fn reparent_creates_cycle(
    parents: &HashMap<i32, Option<i32>>,
    topic_id: i32,
    new_parent_id: i32,
) -> Result<bool, TopicTreeError> {
    if topic_id == new_parent_id {
        return Ok(true);
    }

    let ancestors = path_to_root(parents, new_parent_id)?;
    Ok(ancestors.contains(&topic_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: i32, parent: Option<i32>) -> Topic {
        Topic {
            id,
            code: None,
            title: format!("Topic {}", id),
            course_id: 1,
            co_id: 1,
            parent_topic_id: parent,
        }
    }

    #[test]
    fn test_path_to_root_linear_chain() {
        let topics = vec![topic(1, None), topic(2, Some(1)), topic(3, Some(2))];
        let parents = parent_map(&topics);

        assert_eq!(path_to_root(&parents, 3), Ok(vec![3, 2, 1]));
        assert_eq!(path_to_root(&parents, 1), Ok(vec![1]));
    }

    #[test]
    fn test_path_to_root_unknown_topic() {
        let parents = parent_map(&[topic(1, None)]);
        assert_eq!(
            path_to_root(&parents, 99),
            Err(TopicTreeError::TopicNotFound(99))
        );
    }

    #[test]
    fn test_path_to_root_detects_existing_cycle() {
        // 1 -> 2 -> 1, as a corrupted store would have it
        let topics = vec![topic(1, Some(2)), topic(2, Some(1))];
        let parents = parent_map(&topics);

        assert!(matches!(
            path_to_root(&parents, 1),
            Err(TopicTreeError::CircularReference(_))
        ));
    }

    #[test]
    fn test_reparent_to_own_descendant_is_cycle() {
        let topics = vec![topic(1, None), topic(2, Some(1)), topic(3, Some(2))];
        let parents = parent_map(&topics);

        // Hanging the root under its grandchild closes a loop
        assert_eq!(reparent_creates_cycle(&parents, 1, 3), Ok(true));
        assert_eq!(reparent_creates_cycle(&parents, 2, 3), Ok(true));
    }

    #[test]
    fn test_reparent_to_sibling_is_fine() {
        let topics = vec![
            topic(1, None),
            topic(2, Some(1)),
            topic(3, Some(1)),
            topic(4, Some(2)),
        ];
        let parents = parent_map(&topics);

        assert_eq!(reparent_creates_cycle(&parents, 4, 3), Ok(false));
        assert_eq!(reparent_creates_cycle(&parents, 2, 3), Ok(false));
    }

    #[test]
    fn test_reparent_to_self_is_cycle() {
        let parents = parent_map(&[topic(1, None)]);
        assert_eq!(reparent_creates_cycle(&parents, 1, 1), Ok(true));
    }

    #[test]
    fn test_depth_limit() {
        let mut topics = vec![topic(0, None)];
        for id in 1..=(MAX_TOPIC_DEPTH as i32 + 5) {
            topics.push(topic(id, Some(id - 1)));
        }
        let parents = parent_map(&topics);

        assert_eq!(
            path_to_root(&parents, MAX_TOPIC_DEPTH as i32 + 5),
            Err(TopicTreeError::TooDeep)
        );
    }
}
