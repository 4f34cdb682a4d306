#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod checksum;
mod config;
mod event;
mod interpreter;
mod sentence;

// sentence decoders
mod gsa;
mod gsv;
mod rmc;

// pub export
pub use config::Config;
pub use event::{Event, NmeaHandler, Position, SatelliteInView};
pub use interpreter::{DecodeError, Interpreter, Outcome, Subscription};
pub use sentence::SentenceKind;


// prelude
pub mod prelude {
    pub use crate::checksum::{checksum, is_valid};
    pub use crate::config::Config;
    pub use crate::event::{Event, NmeaHandler, Position, SatelliteInView};
    pub use crate::interpreter::{DecodeError, Interpreter, Outcome, Subscription};
    pub use crate::rmc::MPH_PER_KNOT;
    pub use crate::sentence::SentenceKind;
    // re-export
    pub use chrono::{DateTime, Local, Utc};
}
