use std::collections::HashMap;

use zbus::object_server::SignalEmitter;
use zbus::zvariant::{ObjectPath, Value};
use zbus::{fdo, interface};

use crate::adapter::{AdapterError, PLAYER_INTERFACE, PropValue};

use super::SharedAdapter;

/// `org.mpris.MediaPlayer2.Player` served at the player object path.
///
/// Methods delegate to the adapter's dispatch operations; property reads
/// and writes go through the adapter's Get/Set path so the mirror stays
/// the single source of protocol state.
pub struct PlayerInterface {
    adapter: SharedAdapter,
}

impl PlayerInterface {
    /// Wrap the shared adapter.
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    async fn read(&self, name: &str) -> fdo::Result<PropValue> {
        Ok(self
            .adapter
            .lock()
            .await
            .get_property(PLAYER_INTERFACE, name)?)
    }

    async fn read_str(&self, name: &str) -> fdo::Result<String> {
        Ok(self.read(name).await?.as_str().unwrap_or_default().to_string())
    }

    async fn read_bool(&self, name: &str) -> fdo::Result<bool> {
        Ok(self.read(name).await?.as_bool().unwrap_or_default())
    }

    async fn read_float(&self, name: &str) -> fdo::Result<f64> {
        Ok(self.read(name).await?.as_float().unwrap_or_default())
    }

    async fn write(&self, name: &str, value: PropValue) {
        self.adapter.lock().await.set_property(name, value);
    }
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerInterface {
    async fn play(&self) -> fdo::Result<()> {
        let adapter = self.adapter.lock().await;
        adapter.controls().play().map_err(AdapterError::from)?;
        Ok(())
    }

    async fn pause(&self) -> fdo::Result<()> {
        let adapter = self.adapter.lock().await;
        adapter.controls().pause().map_err(AdapterError::from)?;
        Ok(())
    }

    async fn play_pause(&self) -> fdo::Result<()> {
        let adapter = self.adapter.lock().await;
        adapter.controls().play_pause().map_err(AdapterError::from)?;
        Ok(())
    }

    async fn stop(&self) -> fdo::Result<()> {
        let adapter = self.adapter.lock().await;
        adapter.controls().stop().map_err(AdapterError::from)?;
        Ok(())
    }

    async fn next(&self) -> fdo::Result<()> {
        let adapter = self.adapter.lock().await;
        adapter.controls().next().map_err(AdapterError::from)?;
        Ok(())
    }

    async fn previous(&self) -> fdo::Result<()> {
        let adapter = self.adapter.lock().await;
        adapter.controls().previous().map_err(AdapterError::from)?;
        Ok(())
    }

    async fn seek(&self, offset: i64) -> fdo::Result<()> {
        let adapter = self.adapter.lock().await;
        adapter.controls().seek(offset).map_err(AdapterError::from)?;
        Ok(())
    }

    async fn set_position(&self, track_id: ObjectPath<'_>, position: i64) -> fdo::Result<()> {
        let adapter = self.adapter.lock().await;
        adapter
            .controls()
            .set_position(track_id.as_str(), position)
            .map_err(AdapterError::from)?;
        Ok(())
    }

    async fn open_uri(&self, uri: String) {
        self.adapter.lock().await.controls().open_uri(&uri);
    }

    /// Emitted whenever the playback position changes through the player's
    /// position feed.
    #[zbus(signal)]
    pub async fn seeked(emitter: &SignalEmitter<'_>, position: i64) -> zbus::Result<()>;

    #[zbus(property)]
    async fn playback_status(&self) -> fdo::Result<String> {
        self.read_str("PlaybackStatus").await
    }

    #[zbus(property)]
    async fn loop_status(&self) -> fdo::Result<String> {
        self.read_str("LoopStatus").await
    }

    #[zbus(property)]
    async fn set_loop_status(&self, status: String) {
        self.write("LoopStatus", PropValue::Str(status)).await;
    }

    #[zbus(property)]
    async fn rate(&self) -> fdo::Result<f64> {
        self.read_float("Rate").await
    }

    #[zbus(property)]
    async fn set_rate(&self, rate: f64) {
        self.write("Rate", PropValue::Float(rate)).await;
    }

    #[zbus(property)]
    async fn minimum_rate(&self) -> fdo::Result<f64> {
        self.read_float("MinimumRate").await
    }

    #[zbus(property)]
    async fn maximum_rate(&self) -> fdo::Result<f64> {
        self.read_float("MaximumRate").await
    }

    #[zbus(property)]
    async fn volume(&self) -> fdo::Result<f64> {
        self.read_float("Volume").await
    }

    #[zbus(property)]
    async fn set_volume(&self, volume: f64) {
        self.write("Volume", PropValue::Float(volume)).await;
    }

    #[zbus(property)]
    async fn position(&self) -> fdo::Result<i64> {
        Ok(self.read("Position").await?.as_int().unwrap_or_default())
    }

    #[zbus(property)]
    async fn metadata(&self) -> fdo::Result<HashMap<String, Value<'static>>> {
        let value = self.read("Metadata").await?;
        let Some(metadata) = value.as_metadata() else {
            return Ok(HashMap::new());
        };

        Ok(metadata
            .to_map()
            .iter()
            .map(|(key, value)| (key.clone(), Value::from(value)))
            .collect())
    }

    #[zbus(property)]
    async fn can_go_next(&self) -> fdo::Result<bool> {
        self.read_bool("CanGoNext").await
    }

    #[zbus(property)]
    async fn can_go_previous(&self) -> fdo::Result<bool> {
        self.read_bool("CanGoPrevious").await
    }

    #[zbus(property)]
    async fn can_play(&self) -> fdo::Result<bool> {
        self.read_bool("CanPlay").await
    }

    #[zbus(property)]
    async fn can_pause(&self) -> fdo::Result<bool> {
        self.read_bool("CanPause").await
    }

    #[zbus(property)]
    async fn can_seek(&self) -> fdo::Result<bool> {
        self.read_bool("CanSeek").await
    }

    #[zbus(property)]
    async fn can_control(&self) -> fdo::Result<bool> {
        self.read_bool("CanControl").await
    }
}
