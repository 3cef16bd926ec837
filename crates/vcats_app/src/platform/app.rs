use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use vcats_core::{update, AppState, Effect, Msg};
use vcats_engine::EngineHandle;
use vcats_logging::{vcats_info, vcats_warn};

use super::config::{load_config, AppConfig};
use super::effects::{EffectRunner, MsgSink};
use super::ui::input::{parse_command, Command, HELP_TEXT};
use super::ui::render::render;

/// Everything the main loop reacts to.
enum Inbox {
    Dispatch(Msg),
    Help,
    Invalid(String),
    /// Stdin reached end of input.
    InputClosed,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, config_problem) = match load_config(&cwd) {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    vcats_logging::initialize(
        config.level_filter(),
        config.log_destination(),
        &config.log_file,
    );
    if let Some(err) = config_problem {
        vcats_warn!("Ignoring config file: {}", err);
    }
    vcats_info!("Starting against {}", config.base_url);

    let (inbox_tx, inbox_rx) = mpsc::channel::<Inbox>();
    let sink = Arc::new(MsgSink::new(inbox_tx.clone(), Inbox::Dispatch));
    let engine =
        EngineHandle::new(config.api_settings(), sink).context("starting request engine")?;

    spawn_input_reader(inbox_tx.clone());

    let mut session = Session::new(
        config.base_url.clone(),
        EffectRunner::new(engine),
        io::stdout(),
    );
    writeln!(session.out, "{HELP_TEXT}")?;
    session.dispatch(Msg::Mounted)?;

    let mut input_closed = false;
    for item in inbox_rx {
        match item {
            Inbox::Dispatch(msg) => session.dispatch(msg)?,
            Inbox::Help => writeln!(session.out, "{HELP_TEXT}")?,
            Inbox::Invalid(reason) => writeln!(session.out, "{reason}\n{HELP_TEXT}")?,
            Inbox::InputClosed => input_closed = true,
            Inbox::Quit => break,
        }
        // Piped input: stay until every issued request has answered.
        if input_closed && session.in_flight() == 0 {
            break;
        }
    }

    vcats_info!("Shutting down");
    Ok(())
}

/// Reads commands from stdin. End of input is reported as `InputClosed`.
fn spawn_input_reader(tx: mpsc::Sender<Inbox>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let item = match parse_command(&line) {
                None => continue,
                Some(Command::Dispatch(msg)) => Inbox::Dispatch(msg),
                Some(Command::Help) => Inbox::Help,
                Some(Command::Invalid(reason)) => Inbox::Invalid(reason),
                Some(Command::Quit) => Inbox::Quit,
            };
            if tx.send(item).is_err() {
                return;
            }
        }
        let _ = tx.send(Inbox::InputClosed);
    });
}

/// Owns the view state for the lifetime of the session.
pub(crate) struct Session<W: Write> {
    state: AppState,
    base_url: String,
    effects: EffectRunner,
    in_flight: usize,
    pub(crate) out: W,
}

impl<W: Write> Session<W> {
    pub(crate) fn new(base_url: String, effects: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            base_url,
            effects,
            in_flight: 0,
            out,
        }
    }

    /// Applies `msg`, runs its effects, then redraws if anything changed.
    ///
    /// Alerts are written before the redraw so the user sees the server's
    /// message ahead of the patched list.
    pub(crate) fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        if is_completion(&msg) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.in_flight += effects.iter().filter(|effect| is_request(effect)).count();
        let result = self.effects.run(effects, &mut self.out);
        let view = state.consume_dirty().then(|| state.view(&self.base_url));
        self.state = state;
        result?;

        if let Some(view) = view {
            write!(self.out, "\n{}", render(&view))?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Requests sent to the engine that have not completed yet.
    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }
}

fn is_request(effect: &Effect) -> bool {
    matches!(
        effect,
        Effect::LoadCats | Effect::FeedCat { .. } | Effect::DeleteCat { .. }
    )
}

fn is_completion(msg: &Msg) -> bool {
    matches!(
        msg,
        Msg::CatsLoaded(_) | Msg::FeedDone { .. } | Msg::DeleteDone { .. }
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use vcats_core::{Cat, Rejection, APP_TITLE};
    use vcats_engine::{
        ApiError, CatApi, CatId, CatRecord, ChannelEventSink, EngineEvent, MutationReply,
    };

    use super::*;
    use crate::platform::effects::map_event;

    struct IdleApi;

    #[async_trait::async_trait]
    impl CatApi for IdleApi {
        async fn list_cats(&self) -> Result<Vec<CatRecord>, ApiError> {
            Ok(Vec::new())
        }

        async fn feed_cat(&self, _cat_id: CatId) -> Result<MutationReply, ApiError> {
            Ok(MutationReply::default())
        }

        async fn delete_cat(&self, _cat_id: CatId) -> Result<MutationReply, ApiError> {
            Ok(MutationReply::default())
        }
    }

    fn session() -> (Session<Vec<u8>>, mpsc::Receiver<EngineEvent>) {
        let (tx, rx) = mpsc::channel();
        let engine = EngineHandle::with_api(Arc::new(IdleApi), Arc::new(ChannelEventSink::new(tx)))
            .expect("engine");
        let session = Session::new(
            "http://127.0.0.1:8000".to_string(),
            EffectRunner::new(engine),
            Vec::new(),
        );
        (session, rx)
    }

    fn take_output(session: &mut Session<Vec<u8>>) -> String {
        String::from_utf8(std::mem::take(&mut session.out)).unwrap()
    }

    fn cat(id: i64, name: &str) -> Cat {
        Cat {
            id,
            name: name.to_string(),
            sex: "Female".to_string(),
            birthday: "2023-03-26".to_string(),
            image_url: format!("/static/{}.jpg", name.to_lowercase()),
            feed: false,
            feed_count: Some(0),
        }
    }

    #[test]
    fn mount_loads_through_engine_and_renders() {
        let (mut session, rx) = session();

        session.dispatch(Msg::Mounted).unwrap();
        let event = rx.recv_timeout(Duration::from_secs(5)).expect("load event");
        session.dispatch(map_event(event)).unwrap();

        let output = take_output(&mut session);
        assert!(output.contains("(no cats)"));
    }

    #[test]
    fn mount_draws_empty_page_even_when_load_fails() {
        let (mut session, _rx) = session();

        session.dispatch(Msg::Mounted).unwrap();
        session
            .dispatch(Msg::CatsLoaded(Err("connection refused".to_string())))
            .unwrap();

        let output = take_output(&mut session);
        assert!(output.contains(APP_TITLE));
        assert!(output.contains("(no cats)"));
        assert!(!output.contains("[alert]"));
    }

    #[test]
    fn in_flight_tracks_requests_until_their_completions() {
        let (mut session, _rx) = session();

        session.dispatch(Msg::Mounted).unwrap();
        assert_eq!(session.in_flight(), 1);
        session
            .dispatch(Msg::CatsLoaded(Ok(vec![cat(1, "Xiaoguai"), cat(2, "Xiaobao")])))
            .unwrap();
        assert_eq!(session.in_flight(), 0);

        session.dispatch(Msg::FeedClicked { cat_id: 1 }).unwrap();
        session.dispatch(Msg::DeleteClicked { cat_id: 2 }).unwrap();
        session.dispatch(Msg::FeedClicked { cat_id: 9 }).unwrap();
        assert_eq!(session.in_flight(), 2);

        session
            .dispatch(Msg::DeleteDone {
                cat_id: 2,
                result: Err(Rejection::default()),
            })
            .unwrap();
        assert_eq!(session.in_flight(), 1);
        session
            .dispatch(Msg::FeedDone {
                cat_id: 1,
                result: Ok("fed once".to_string()),
            })
            .unwrap();
        assert_eq!(session.in_flight(), 0);
    }

    #[test]
    fn alert_is_printed_before_patched_list() {
        let (mut session, _rx) = session();
        session
            .dispatch(Msg::CatsLoaded(Ok(vec![cat(1, "Xiaoguai")])))
            .unwrap();
        take_output(&mut session);

        session
            .dispatch(Msg::FeedDone {
                cat_id: 1,
                result: Ok("fed once".to_string()),
            })
            .unwrap();

        let output = take_output(&mut session);
        let alert = output.find("[alert] fed once").expect("alert shown");
        let card = output.find("fed:      1 time").expect("card redrawn");
        assert!(alert < card);
        assert_eq!(session.state().cats()[0].feed_count, Some(1));
    }

    #[test]
    fn rejected_delete_alerts_without_redraw() {
        let (mut session, _rx) = session();
        session
            .dispatch(Msg::CatsLoaded(Ok(vec![cat(1, "Xiaoguai")])))
            .unwrap();
        take_output(&mut session);

        session
            .dispatch(Msg::DeleteDone {
                cat_id: 1,
                result: Err(Rejection::default()),
            })
            .unwrap();

        assert_eq!(take_output(&mut session), "[alert] Removal failed!\n");
        assert_eq!(session.state().cats().len(), 1);
    }
}
