//! Integration tests for the protocol-adapter core.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use mpris_bridge::adapter::{
    ChannelEmitter, Notification, PLAYER_INTERFACE, ProtocolAdapter, PropValue, ROOT_INTERFACE,
};
use mpris_bridge::config::BridgeConfig;
use mpris_bridge::player::{PlayerCommands, PlayerError, PlayerEvent, PlayerState, TrackInfo};
use mpris_bridge::NotificationEmitter;

/// Records every delegated player command.
#[derive(Debug, Clone, Default)]
struct RecordingPlayer {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingPlayer {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), PlayerError> {
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl PlayerCommands for RecordingPlayer {
    fn play(&self) -> Result<(), PlayerError> {
        self.record("play".to_string())
    }

    fn pause(&self) -> Result<(), PlayerError> {
        self.record("pause".to_string())
    }

    fn play_pause(&self) -> Result<(), PlayerError> {
        self.record("play_pause".to_string())
    }

    fn stop(&self) -> Result<(), PlayerError> {
        self.record("stop".to_string())
    }

    fn next(&self) -> Result<(), PlayerError> {
        self.record("next".to_string())
    }

    fn previous(&self) -> Result<(), PlayerError> {
        self.record("previous".to_string())
    }

    fn set_position(&self, position_ms: i64) -> Result<(), PlayerError> {
        self.record(format!("set_position({position_ms})"))
    }
}

/// Collects emitted notifications for assertions.
#[derive(Debug, Clone, Default)]
struct RecordingEmitter {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingEmitter {
    fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl NotificationEmitter for RecordingEmitter {
    fn properties_changed(&self, interface: &str, changed: &HashMap<String, PropValue>) {
        self.notifications
            .lock()
            .unwrap()
            .push(Notification::PropertiesChanged {
                interface: interface.to_string(),
                changed: changed.clone(),
            });
    }

    fn seeked(&self, position_us: i64) {
        self.notifications
            .lock()
            .unwrap()
            .push(Notification::Seeked { position_us });
    }
}

fn bridge() -> (
    ProtocolAdapter<RecordingPlayer, RecordingEmitter>,
    RecordingPlayer,
    RecordingEmitter,
) {
    let player = RecordingPlayer::default();
    let emitter = RecordingEmitter::default();
    let adapter = ProtocolAdapter::new(&BridgeConfig::default(), player.clone(), emitter.clone());
    (adapter, player, emitter)
}

fn example_track() -> TrackInfo {
    TrackInfo {
        title: "X".to_string(),
        artists: "A, B".to_string(),
        album: "Y".to_string(),
        url: "u".to_string(),
        length_secs: 180,
        art_url: String::new(),
    }
}

mod event_translation {
    use super::*;

    #[test]
    fn position_event_emits_seeked_and_minimal_delta() {
        let (mut adapter, _, emitter) = bridge();

        adapter.handle_event(&PlayerEvent::PositionChanged(7_500));

        let notifications = emitter.notifications();
        assert_eq!(notifications.len(), 2);
        assert_eq!(
            notifications[0],
            Notification::Seeked {
                position_us: 7_500_000
            }
        );

        let Notification::PropertiesChanged { interface, changed } = &notifications[1] else {
            panic!("expected a properties-changed notification");
        };
        assert_eq!(interface, PLAYER_INTERFACE);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed.get("Position").unwrap().as_int(), Some(7_500_000));
    }

    #[test]
    fn playback_state_event_updates_status_only() {
        let (mut adapter, _, emitter) = bridge();

        adapter.handle_event(&PlayerEvent::StateChanged(PlayerState::Buffering));

        assert_eq!(
            adapter
                .get_property(PLAYER_INTERFACE, "PlaybackStatus")
                .unwrap()
                .as_str(),
            Some("Playing")
        );

        let notifications = emitter.notifications();
        assert_eq!(notifications.len(), 1);
        let Notification::PropertiesChanged { changed, .. } = &notifications[0] else {
            panic!("expected a properties-changed notification");
        };
        assert_eq!(changed.len(), 1);
        assert!(changed.contains_key("PlaybackStatus"));
    }

    #[test]
    fn media_change_scenario_end_to_end() {
        let (mut adapter, _, emitter) = bridge();

        adapter.handle_event(&PlayerEvent::MediaChanged(example_track()));

        let stored = adapter.get_property(PLAYER_INTERFACE, "Metadata").unwrap();
        let metadata = stored.as_metadata().unwrap();
        assert_eq!(metadata.title, "X");
        assert_eq!(metadata.artists, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(metadata.album, "Y");
        assert_eq!(metadata.url, "u");
        assert_eq!(metadata.length_us, 180_000_000);
        assert_eq!(metadata.art_url, "");

        let notifications = emitter.notifications();
        assert_eq!(notifications.len(), 1);
        let Notification::PropertiesChanged { interface, changed } = &notifications[0] else {
            panic!("expected a properties-changed notification");
        };
        assert_eq!(interface, PLAYER_INTERFACE);
        assert_eq!(changed.len(), 1);
        assert!(changed.contains_key("Metadata"));
    }
}

mod property_access {
    use super::*;

    #[test]
    fn get_all_returns_full_snapshots_per_interface() {
        let (adapter, _, _) = bridge();

        let player_props = adapter.get_all(PLAYER_INTERFACE).unwrap();
        assert_eq!(player_props.len(), 14);
        assert!(player_props.contains_key("PlaybackStatus"));
        assert!(player_props.contains_key("Metadata"));

        let root_props = adapter.get_all(ROOT_INTERFACE).unwrap();
        assert_eq!(root_props.len(), 5);
        assert!(root_props.contains_key("Identity"));
    }

    #[test]
    fn get_all_rejects_foreign_interfaces() {
        let (adapter, _, _) = bridge();
        assert!(adapter.get_all("org.freedesktop.anything.else").is_err());
    }

    #[test]
    fn repeated_reads_without_events_are_identical() {
        let (adapter, _, _) = bridge();

        let first = adapter.get_property(PLAYER_INTERFACE, "Metadata").unwrap();
        let second = adapter.get_property(PLAYER_INTERFACE, "Metadata").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn set_stores_player_properties_without_player_calls() {
        let (mut adapter, player, _) = bridge();

        adapter.set_property("LoopStatus", PropValue::Str("Track".to_string()));

        assert_eq!(
            adapter
                .get_property(PLAYER_INTERFACE, "LoopStatus")
                .unwrap()
                .as_str(),
            Some("Track")
        );
        assert!(player.calls().is_empty());
    }
}

mod remote_control {
    use super::*;

    #[test]
    fn transport_calls_reach_the_player() {
        let (adapter, player, _) = bridge();

        adapter.controls().play().unwrap();
        adapter.controls().play_pause().unwrap();
        adapter.controls().stop().unwrap();

        assert_eq!(player.calls(), vec!["play", "play_pause", "stop"]);
    }

    #[test]
    fn seek_and_set_position_convert_to_milliseconds() {
        let (adapter, player, _) = bridge();

        adapter.controls().seek(3_000_000).unwrap();
        adapter
            .controls()
            .set_position("/org/mpris/track/1", 90_000_000)
            .unwrap();

        assert_eq!(
            player.calls(),
            vec!["set_position(3000)", "set_position(90000)"]
        );
    }

    #[test]
    fn control_calls_never_mutate_the_mirror() {
        let (mut adapter, _, emitter) = bridge();

        adapter.controls().play().unwrap();
        adapter.controls().seek(5_000_000).unwrap();

        assert_eq!(
            adapter
                .get_property(PLAYER_INTERFACE, "Position")
                .unwrap()
                .as_int(),
            Some(0)
        );
        assert!(emitter.notifications().is_empty());

        // A later position event is what moves the mirror.
        adapter.handle_event(&PlayerEvent::PositionChanged(5_000));
        assert_eq!(
            adapter
                .get_property(PLAYER_INTERFACE, "Position")
                .unwrap()
                .as_int(),
            Some(5_000_000)
        );
    }
}

mod channel_emitter {
    use super::*;

    #[tokio::test]
    async fn notifications_arrive_in_emission_order() {
        let (emitter, mut notifications) = ChannelEmitter::new();
        let player = RecordingPlayer::default();
        let mut adapter = ProtocolAdapter::new(&BridgeConfig::default(), player, emitter);

        adapter.handle_event(&PlayerEvent::PositionChanged(250));
        adapter.handle_event(&PlayerEvent::StateChanged(PlayerState::Playing));

        assert_eq!(
            notifications.recv().await,
            Some(Notification::Seeked { position_us: 250_000 })
        );

        let Some(Notification::PropertiesChanged { changed, .. }) = notifications.recv().await
        else {
            panic!("expected the position delta");
        };
        assert_eq!(changed.get("Position").unwrap().as_int(), Some(250_000));

        let Some(Notification::PropertiesChanged { changed, .. }) = notifications.recv().await
        else {
            panic!("expected the playback-status delta");
        };
        assert_eq!(
            changed.get("PlaybackStatus").unwrap().as_str(),
            Some("Playing")
        );
    }
}
