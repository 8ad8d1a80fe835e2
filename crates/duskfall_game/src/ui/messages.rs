use std::collections::VecDeque;

use bevy::prelude::*;

use crate::events::{InteractKind, InteractionMissedEvent};

const MESSAGE_TTL: f32 = 2.5;
const MAX_MESSAGES: usize = 5;

struct FeedEntry {
    text: String,
    color: Color,
    ttl: f32,
}

/// Transient advisory lines shown at the lower left, newest at the bottom.
#[derive(Resource, Default)]
pub struct MessageFeed {
    entries: VecDeque<FeedEntry>,
}

impl MessageFeed {
    pub fn push(&mut self, text: impl Into<String>, color: Color) {
        if self.entries.len() == MAX_MESSAGES {
            self.entries.pop_front();
        }
        self.entries.push_back(FeedEntry {
            text: text.into(),
            color,
            ttl: MESSAGE_TTL,
        });
    }
}

#[derive(Component)]
pub struct MessageFeedRoot;

pub fn spawn_message_feed(mut commands: Commands) {
    commands.spawn((
        MessageFeedRoot,
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(70.0),
            left: Val::Px(10.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(2.0),
            ..default()
        },
    ));
}

pub fn push_miss_messages(
    mut ev_missed: EventReader<InteractionMissedEvent>,
    mut feed: ResMut<MessageFeed>,
) {
    for event in ev_missed.read() {
        match event.action {
            InteractKind::Use => {
                feed.push("No usable item in reach", Color::srgb(0.3, 0.85, 0.9));
            }
            InteractKind::AlternateUse => {
                feed.push("Nothing responds to that", Color::srgb(0.9, 0.3, 0.3));
            }
            InteractKind::PickUp => {
                feed.push("Nothing here can be picked up", Color::srgb(0.3, 0.85, 0.5));
            }
        }
    }
}

pub fn update_message_feed(
    time: Res<Time>,
    mut feed: ResMut<MessageFeed>,
    mut commands: Commands,
    root_query: Query<Entity, With<MessageFeedRoot>>,
) {
    if feed.entries.is_empty() {
        return;
    }

    let dt = time.delta_secs();
    for entry in feed.entries.iter_mut() {
        entry.ttl -= dt;
    }
    feed.entries.retain(|entry| entry.ttl > 0.0);

    let Ok(root) = root_query.get_single() else {
        return;
    };
    commands.entity(root).despawn_descendants();
    commands.entity(root).with_children(|parent| {
        for entry in &feed.entries {
            parent.spawn((
                Text::new(entry.text.clone()),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(entry.color),
            ));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_keeps_only_the_newest_messages() {
        let mut feed = MessageFeed::default();
        for i in 0..7 {
            feed.push(format!("line {i}"), Color::WHITE);
        }
        assert_eq!(feed.entries.len(), MAX_MESSAGES);
        assert_eq!(feed.entries.front().unwrap().text, "line 2");
    }
}
