use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use vcats_logging::{vcats_debug, vcats_info, vcats_trace};

use crate::api::{ApiSettings, CatApi, ReqwestCatApi};
use crate::{ApiError, CatId, EngineEvent};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to build api client: {0}")]
    Client(#[from] ApiError),
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
}

/// Receives engine completions. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, Clone, Copy)]
enum EngineCommand {
    LoadCats,
    Feed { cat_id: CatId },
    Delete { cat_id: CatId },
}

/// Runs API calls on a background tokio runtime.
///
/// Every command becomes an independent task; completions reach the sink in
/// whatever order the server answers. Dropping the handle stops the worker
/// and abandons requests still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let api = ReqwestCatApi::new(settings)?;
        Self::with_api(Arc::new(api), sink)
    }

    pub fn with_api(api: Arc<dyn CatApi>, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("vcats-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let api = api.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(api.as_ref(), command, sink.as_ref()).await;
                    });
                }
                vcats_info!("engine command channel closed");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn load_cats(&self) {
        self.submit(EngineCommand::LoadCats);
    }

    pub fn feed(&self, cat_id: CatId) {
        self.submit(EngineCommand::Feed { cat_id });
    }

    pub fn delete(&self, cat_id: CatId) {
        self.submit(EngineCommand::Delete { cat_id });
    }

    fn submit(&self, command: EngineCommand) {
        vcats_debug!("engine command {:?}", command);
        let _ = self.cmd_tx.send(command);
    }
}

async fn handle_command(api: &dyn CatApi, command: EngineCommand, sink: &dyn EventSink) {
    let event = match command {
        EngineCommand::LoadCats => EngineEvent::CatsLoaded(api.list_cats().await),
        EngineCommand::Feed { cat_id } => EngineEvent::FeedCompleted {
            cat_id,
            result: api.feed_cat(cat_id).await,
        },
        EngineCommand::Delete { cat_id } => EngineEvent::DeleteCompleted {
            cat_id,
            result: api.delete_cat(cat_id).await,
        },
    };
    vcats_trace!("engine event {:?}", event);
    sink.emit(event);
}
