use std::io::{self, Write};
use std::sync::mpsc;

use vcats_core::{Cat, Effect, Msg, Rejection};
use vcats_engine::{ApiError, CatRecord, EngineEvent, EngineHandle, EventSink, MutationReply};
use vcats_logging::{vcats_error, vcats_info};

use super::ui::render::format_alert;

/// Executes effects: requests go to the engine, alerts are written to `out`
/// right away, diagnostics go to the log only.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>, out: &mut dyn Write) -> io::Result<()> {
        for effect in effects {
            match effect {
                Effect::LoadCats => {
                    vcats_info!("Loading cat list");
                    self.engine.load_cats();
                }
                Effect::FeedCat { cat_id } => {
                    vcats_info!("FeedCat cat_id={}", cat_id);
                    self.engine.feed(cat_id);
                }
                Effect::DeleteCat { cat_id } => {
                    vcats_info!("DeleteCat cat_id={}", cat_id);
                    self.engine.delete(cat_id);
                }
                Effect::Alert(text) => {
                    writeln!(out, "{}", format_alert(&text))?;
                    out.flush()?;
                }
                Effect::Diagnostic(text) => {
                    vcats_error!("{}", text);
                }
            }
        }
        Ok(())
    }
}

/// Turns engine completions into core messages on the app's inbox.
pub struct MsgSink<T> {
    tx: mpsc::Sender<T>,
    wrap: fn(Msg) -> T,
}

impl<T> MsgSink<T> {
    pub fn new(tx: mpsc::Sender<T>, wrap: fn(Msg) -> T) -> Self {
        Self { tx, wrap }
    }
}

impl<T: Send> EventSink for MsgSink<T> {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send((self.wrap)(map_event(event)));
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CatsLoaded(result) => Msg::CatsLoaded(
            result
                .map(|records| records.into_iter().map(map_cat).collect())
                .map_err(|err| err.to_string()),
        ),
        EngineEvent::FeedCompleted { cat_id, result } => Msg::FeedDone {
            cat_id,
            result: map_reply(result),
        },
        EngineEvent::DeleteCompleted { cat_id, result } => Msg::DeleteDone {
            cat_id,
            result: map_reply(result),
        },
    }
}

fn map_cat(record: CatRecord) -> Cat {
    Cat {
        id: record.id,
        name: record.name,
        sex: record.sex,
        birthday: record.birthday,
        image_url: record.image_url,
        feed: record.feed,
        feed_count: record.feed_count,
    }
}

fn map_reply(result: Result<MutationReply, ApiError>) -> Result<String, Rejection> {
    match result {
        Ok(reply) => Ok(reply.message.unwrap_or_default()),
        Err(err) => {
            vcats_info!("Mutation rejected: {}", err);
            Err(Rejection { detail: err.detail })
        }
    }
}
