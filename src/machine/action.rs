//! Forma "de cable" de los eventos: `{ "type": "answer", "payload": 2 }`.
//!
//! La usan los hosts que no hablan Rust (por ejemplo JS sobre wasm) o los
//! guiones de prueba. Un `type` desconocido significa que quien despacha y la
//! máquina no están sincronizados, así que `dispatch_action` aborta.

use super::*;
use serde::Deserialize;
use serde_json::Value;

const KNOWN_ACTIONS: [&str; 10] = [
    "load",
    "loadSucceeded",
    "loadFailed",
    "start",
    "answer",
    "advance",
    "finish",
    "advanceOrFinish",
    "restart",
    "tick",
];

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("no such action type available: `{0}`")]
    Unknown(String),
    #[error("malformed action: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
enum WireEvent {
    Load,
    LoadSucceeded(Vec<Question>),
    LoadFailed,
    Start,
    Answer(usize),
    Advance,
    Finish,
    AdvanceOrFinish,
    Restart,
    Tick,
}

impl From<WireEvent> for Event {
    fn from(wire: WireEvent) -> Self {
        match wire {
            WireEvent::Load => Event::Load,
            WireEvent::LoadSucceeded(questions) => Event::LoadSucceeded(questions),
            WireEvent::LoadFailed => Event::LoadFailed,
            WireEvent::Start => Event::Start,
            WireEvent::Answer(option) => Event::Answer(option),
            WireEvent::Advance => Event::Advance,
            WireEvent::Finish => Event::Finish,
            WireEvent::AdvanceOrFinish => Event::AdvanceOrFinish,
            WireEvent::Restart => Event::Restart,
            WireEvent::Tick => Event::Tick,
        }
    }
}

impl Event {
    pub fn parse_action(raw: &str) -> Result<Event, ActionError> {
        let action: RawAction = serde_json::from_str(raw)?;
        if !KNOWN_ACTIONS.contains(&action.kind.as_str()) {
            return Err(ActionError::Unknown(action.kind));
        }

        // Las variantes unitarias no llevan payload
        let wire = if action.payload.is_null() {
            serde_json::json!({ "type": action.kind })
        } else {
            serde_json::json!({ "type": action.kind, "payload": action.payload })
        };
        let event: WireEvent = serde_json::from_value(wire)?;
        Ok(event.into())
    }
}

impl QuizState {
    /// Despacha una acción en forma JSON.
    ///
    /// # Panics
    ///
    /// Si el `type` no corresponde a ningún evento conocido.
    pub fn dispatch_action(&mut self, raw: &str) -> Result<(), DispatchError> {
        let event = match Event::parse_action(raw) {
            Ok(event) => event,
            Err(ActionError::Unknown(kind)) => panic!("No such action type available: {kind}"),
            Err(err) => return Err(err.into()),
        };
        self.dispatch(event)?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unit_and_payload_actions() {
        assert_eq!(Event::parse_action(r#"{"type":"tick"}"#).unwrap(), Event::Tick);
        assert_eq!(
            Event::parse_action(r#"{"type":"answer","payload":2}"#).unwrap(),
            Event::Answer(2)
        );
        assert_eq!(
            Event::parse_action(r#"{"type":"advanceOrFinish"}"#).unwrap(),
            Event::AdvanceOrFinish
        );

        let loaded = Event::parse_action(
            r#"{"type":"loadSucceeded","payload":[{"text":"q","options":["a","b"],"correctOption":1,"points":5}]}"#,
        )
        .unwrap();
        match loaded {
            Event::LoadSucceeded(questions) => {
                assert_eq!(questions.len(), 1);
                assert_eq!(questions[0].points, 5);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn unknown_type_is_reported() {
        let err = Event::parse_action(r#"{"type":"skip"}"#).unwrap_err();
        assert!(matches!(err, ActionError::Unknown(kind) if kind == "skip"));
    }

    #[test]
    fn bad_payload_is_malformed() {
        let err = Event::parse_action(r#"{"type":"answer","payload":"two"}"#).unwrap_err();
        assert!(matches!(err, ActionError::Malformed(_)));
    }

    #[test]
    fn dispatch_action_drives_the_machine() {
        let mut state = QuizState::new();
        state.dispatch_action(r#"{"type":"load"}"#).unwrap();
        state
            .dispatch_action(
                r#"{"type":"loadSucceeded","payload":[{"question":"q","options":["a","b"],"correctOption":0,"points":7}]}"#,
            )
            .unwrap();
        state.dispatch_action(r#"{"type":"start"}"#).unwrap();
        state.dispatch_action(r#"{"type":"answer","payload":0}"#).unwrap();
        state.dispatch_action(r#"{"type":"finish"}"#).unwrap();
        assert_eq!(state.status(), Status::Finished);
        assert_eq!(state.highscore(), 7);

        let err = state.dispatch_action(r#"{"type":"start"}"#).unwrap_err();
        assert!(matches!(err, DispatchError::Transition(_)));
    }

    #[test]
    #[should_panic(expected = "No such action type available")]
    fn dispatch_action_panics_on_unknown_type() {
        let mut state = QuizState::new();
        let _ = state.dispatch_action(r#"{"type":"dataExploded"}"#);
    }
}
