//! Sentence interpreter: tokenizing, dispatch, event delivery.
use log::{debug, warn};
use thiserror::Error;

use crate::{
    checksum,
    config::Config,
    event::{Event, NmeaHandler},
    gsa, gsv, rmc,
    sentence::{self, SentenceKind},
};

/// A recoverable decoding problem, local to one field of one sentence.
/// Decode errors are reported in the [Outcome], never corrupt interpreter
/// state, and never suppress events that were already raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// Recognized tag, but the sentence stops before a required field.
    #[error("{kind}: sentence too short, missing field {index}")]
    MalformedSentence {
        /// Sentence grammar being decoded
        kind: SentenceKind,
        /// First required field index past the end of the sentence
        index: usize,
    },
    /// A non-empty field that does not parse as the expected quantity.
    #[error("{kind}: field {index} does not parse: {value:?}")]
    FieldParse {
        /// Sentence grammar being decoded
        kind: SentenceKind,
        /// Field index within the sentence
        index: usize,
        /// Verbatim field content
        value: String,
    },
}

/// Outcome of one [Interpreter::interpret] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The tag is in the recognized set. One event was raised per decodable
    /// field group; anything that did not decode is reported here.
    Recognized {
        /// Sentence grammar that was dispatched
        kind: SentenceKind,
        /// Problems encountered along the way, possibly several
        errors: Vec<DecodeError>,
    },
    /// Tag not in the recognized set (or empty input). A normal outcome,
    /// not an error: receivers emit many grammars this crate does not know.
    Unrecognized,
    /// Checksum enforcement is on and the trailer did not match. Nothing
    /// was decoded, no event was raised.
    BadChecksum {
        /// Checksum computed over the sentence body
        expected: String,
        /// Trailer found after the first `*`, possibly empty
        found: String,
    },
}

impl Outcome {
    /// True if the sentence tag was recognized, regardless of decode errors.
    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Recognized { .. })
    }
    /// True if the sentence was recognized and decoded without any error.
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Recognized { errors, .. } if errors.is_empty())
    }
}

/// Handle returned by [Interpreter::subscribe], to deregister later on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Stateless-per-call NMEA sentence interpreter. The only state carried
/// across calls is the subscriber registry; every `interpret` call stands
/// on its own. Registration and delivery both take `&mut self`, so
/// subscription changes can never race an in-progress delivery.
pub struct Interpreter {
    /// Latched configuration
    cfg: Config,
    /// Next subscription handle
    next_subscription: u64,
    /// Registered subscribers, in registration order
    subscribers: Vec<(Subscription, Box<dyn NmeaHandler>)>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Interpreter {
    /// Builds a new [Interpreter] with the given configuration and no
    /// subscribers.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            next_subscription: 0,
            subscribers: Vec::new(),
        }
    }
    /// Latched configuration.
    pub fn cfg(&self) -> &Config {
        &self.cfg
    }
    /// Registers a subscriber. Events reach subscribers in registration
    /// order; the returned handle deregisters it later.
    pub fn subscribe(&mut self, handler: Box<dyn NmeaHandler>) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((subscription, handler));
        subscription
    }
    /// Deregisters a subscriber. Returns false if the handle was not (or no
    /// longer) registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(id, _)| *id != subscription);
        self.subscribers.len() != before
    }
    /// Interprets one raw sentence, line terminators already stripped.
    /// Recognizes the tag, decodes the fields and raises one event per
    /// decoded field group, synchronously, before returning. Malformed or
    /// unparseable fields are reported in the [Outcome]; nothing here
    /// panics on receiver garbage.
    pub fn interpret(&mut self, sentence: &str) -> Outcome {
        if self.cfg.require_checksum {
            let expected = checksum::checksum(sentence);
            let found = sentence.split_once('*').map(|(_, cs)| cs).unwrap_or("");
            if found != expected {
                warn!("checksum mismatch: expected {}, found {:?}", expected, found);
                return Outcome::BadChecksum {
                    expected,
                    found: found.to_string(),
                };
            }
        }

        let fields = sentence::fields(sentence);
        let kind = match SentenceKind::from_tag(fields[0]) {
            Some(kind) => kind,
            None => {
                debug!("unrecognized sentence {:?}", sentence);
                return Outcome::Unrecognized;
            },
        };
        debug!("{} - {} fields", kind, fields.len());

        let mut errors = Vec::new();
        let Self {
            cfg, subscribers, ..
        } = self;
        let mut emit = |event: Event| {
            for (_, handler) in subscribers.iter_mut() {
                event.dispatch(handler.as_mut());
            }
        };
        match kind {
            SentenceKind::Rmc => rmc::decode(&fields, cfg, &mut emit, &mut errors),
            SentenceKind::Gsv => gsv::decode(&fields, &mut emit, &mut errors),
            SentenceKind::Gsa => gsa::decode(&fields, &mut emit, &mut errors),
        }

        for error in &errors {
            warn!("{}", error);
        }
        Outcome::Recognized { kind, errors }
    }
}
