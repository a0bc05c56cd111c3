use zbus::{fdo, interface};

use crate::adapter::ROOT_INTERFACE;

use super::SharedAdapter;

/// `org.mpris.MediaPlayer2` served at the player object path.
///
/// Everything here is read-only identity and capability data mirrored from
/// the property store's root namespace.
pub struct RootInterface {
    adapter: SharedAdapter,
}

impl RootInterface {
    /// Wrap the shared adapter.
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    async fn read_str(&self, name: &str) -> fdo::Result<String> {
        let value = self.adapter.lock().await.get_property(ROOT_INTERFACE, name)?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    async fn read_bool(&self, name: &str) -> fdo::Result<bool> {
        let value = self.adapter.lock().await.get_property(ROOT_INTERFACE, name)?;
        Ok(value.as_bool().unwrap_or_default())
    }
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootInterface {
    /// Accepted for protocol compatibility; the bridge owns no window.
    fn raise(&self) {}

    /// Accepted but does nothing; process lifecycle is owned externally.
    async fn quit(&self) {
        self.adapter.lock().await.controls().quit();
    }

    #[zbus(property)]
    async fn identity(&self) -> fdo::Result<String> {
        self.read_str("Identity").await
    }

    #[zbus(property)]
    async fn desktop_entry(&self) -> fdo::Result<String> {
        self.read_str("DesktopEntry").await
    }

    #[zbus(property)]
    async fn can_quit(&self) -> fdo::Result<bool> {
        self.read_bool("CanQuit").await
    }

    #[zbus(property)]
    async fn can_raise(&self) -> fdo::Result<bool> {
        self.read_bool("CanRaise").await
    }

    #[zbus(property)]
    async fn has_track_list(&self) -> fdo::Result<bool> {
        self.read_bool("HasTrackList").await
    }
}
