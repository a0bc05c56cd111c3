//! Session-bus transport: registers the well-known name, serves the two
//! MPRIS interfaces over the adapter, and turns channel notifications into
//! bus signals. Introspection and the generic property protocol
//! (`Get`/`Set`/`GetAll`) are served by zbus over the interface
//! implementations here.

/// Player-interface implementation
pub mod player;
/// Root-interface implementation
pub mod root;

use std::sync::Arc;

use futures::StreamExt;
use futures::stream::select;
use tokio::sync::Mutex;
use tokio::sync::broadcast::Receiver;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tracing::{debug, info, warn};
use zbus::object_server::InterfaceRef;
use zbus::{Connection, connection, fdo};

use crate::adapter::{
    AdapterError, ChannelEmitter, Notification, OBJECT_PATH, ProtocolAdapter,
};
use crate::config::BridgeConfig;
use crate::player::{PlayerCommands, PlayerEvent, PlayerEvents, PlayerState, TrackInfo};

pub use self::player::PlayerInterface;
pub use self::root::RootInterface;

/// Adapter variant the transport serves: boxed player, channel emitter.
pub type BusAdapter = ProtocolAdapter<Box<dyn PlayerCommands>, ChannelEmitter>;

/// The adapter behind the transport's serialization mutex.
///
/// Every bus call and every mirrored event takes this lock for its full
/// read-modify-emit span, which keeps notifications consistent with reads.
pub type SharedAdapter = Arc<Mutex<BusAdapter>>;

impl From<AdapterError> for fdo::Error {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::UnknownInterface(_) => Self::UnknownInterface(err.to_string()),
            AdapterError::UnknownProperty { .. } => Self::UnknownProperty(err.to_string()),
            AdapterError::Player(player) => Self::Failed(player.to_string()),
        }
    }
}

/// Construct the adapter, register it on the session bus, and start the
/// forwarding tasks for player events and change notifications.
///
/// Returns the live connection (dropping it tears the service down) and
/// the shared adapter for direct inspection by the host application.
///
/// # Errors
/// Returns error if the session bus is unreachable or the well-known name
/// cannot be acquired.
pub async fn start(
    config: &BridgeConfig,
    player: Box<dyn PlayerCommands>,
    events: &PlayerEvents,
) -> zbus::Result<(Connection, SharedAdapter)> {
    let (emitter, notifications) = ChannelEmitter::new();
    let adapter = Arc::new(Mutex::new(ProtocolAdapter::new(config, player, emitter)));

    let connection = serve(adapter.clone(), notifications, &config.bus_name()).await?;

    let event_adapter = adapter.clone();
    let position = events.subscribe_position();
    let media = events.subscribe_media();
    let state = events.subscribe_state();
    tokio::spawn(async move {
        forward_events(event_adapter, position, media, state).await;
    });

    Ok((connection, adapter))
}

/// Register both interfaces under the given well-known name and spawn the
/// notification-forwarding task.
///
/// # Errors
/// Returns error if the session bus is unreachable or the name is taken.
pub async fn serve(
    adapter: SharedAdapter,
    notifications: UnboundedReceiver<Notification>,
    bus_name: &str,
) -> zbus::Result<Connection> {
    let connection = connection::Builder::session()?
        .name(bus_name.to_string())?
        .serve_at(OBJECT_PATH, RootInterface::new(adapter.clone()))?
        .serve_at(OBJECT_PATH, PlayerInterface::new(adapter))?
        .build()
        .await?;

    info!(bus_name, "bridge registered on session bus");

    let signal_connection = connection.clone();
    tokio::spawn(async move {
        forward_notifications(signal_connection, notifications).await;
    });

    Ok(connection)
}

/// Drain the adapter's notification channel into bus signals.
async fn forward_notifications(
    connection: Connection,
    mut notifications: UnboundedReceiver<Notification>,
) {
    let iface_ref = match connection
        .object_server()
        .interface::<_, PlayerInterface>(OBJECT_PATH)
        .await
    {
        Ok(iface_ref) => iface_ref,
        Err(err) => {
            warn!(%err, "player interface not registered; notifications disabled");
            return;
        }
    };

    while let Some(notification) = notifications.recv().await {
        if let Err(err) = publish(&iface_ref, notification).await {
            warn!(%err, "failed to emit change signal");
        }
    }
}

async fn publish(
    iface_ref: &InterfaceRef<PlayerInterface>,
    notification: Notification,
) -> zbus::Result<()> {
    let emitter = iface_ref.signal_emitter();

    match notification {
        Notification::Seeked { position_us } => {
            PlayerInterface::seeked(emitter, position_us).await
        }
        Notification::PropertiesChanged { changed, .. } => {
            let iface = iface_ref.get().await;
            for name in changed.keys() {
                match name.as_str() {
                    "PlaybackStatus" => iface.playback_status_changed(emitter).await?,
                    "LoopStatus" => iface.loop_status_changed(emitter).await?,
                    "Rate" => iface.rate_changed(emitter).await?,
                    "Volume" => iface.volume_changed(emitter).await?,
                    "Position" => iface.position_changed(emitter).await?,
                    "Metadata" => iface.metadata_changed(emitter).await?,
                    other => debug!(property = other, "no change signal for property"),
                }
            }
            Ok(())
        }
    }
}

/// Mirror the three player feeds into the adapter until all of them close.
async fn forward_events(
    adapter: SharedAdapter,
    position: Receiver<i64>,
    media: Receiver<TrackInfo>,
    state: Receiver<PlayerState>,
) {
    let position =
        BroadcastStream::new(position).map(|result| result.map(PlayerEvent::PositionChanged));
    let media = BroadcastStream::new(media).map(|result| result.map(PlayerEvent::MediaChanged));
    let state = BroadcastStream::new(state).map(|result| result.map(PlayerEvent::StateChanged));

    let mut feeds = select(position, select(media, state));

    while let Some(result) = feeds.next().await {
        match result {
            Ok(event) => adapter.lock().await.handle_event(&event),
            Err(BroadcastStreamRecvError::Lagged(missed)) => {
                warn!(missed, "player feed lagged; events dropped");
            }
        }
    }

    debug!("player event feeds closed; mirror task exiting");
}
