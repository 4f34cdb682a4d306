//! Active satellites / dilution of precision decoder (`$GPGSA`).
use crate::{
    event::Event,
    interpreter::DecodeError,
    sentence::{check_len, parse_field, SentenceKind},
};

const KIND: SentenceKind = SentenceKind::Gsa;

const PDOP_FIELD: usize = 15;
const HDOP_FIELD: usize = 16;
const VDOP_FIELD: usize = 17;

/// The three DOP readings live at fixed absolute offsets past the active
/// satellite list. Each is independently optional and raises its own
/// event. Length is checked before every access: a truncated sentence is
/// reported, not a fault.
pub(crate) fn decode(
    fields: &[&str],
    emit: &mut dyn FnMut(Event),
    errors: &mut Vec<DecodeError>,
) {
    for (index, event) in [
        (PDOP_FIELD, Event::Pdop as fn(f64) -> Event),
        (HDOP_FIELD, Event::Hdop),
        (VDOP_FIELD, Event::Vdop),
    ] {
        if !check_len(fields, KIND, &[index], errors) {
            return;
        }
        if fields[index].is_empty() {
            continue;
        }
        if let Some(value) = parse_field::<f64>(KIND, index, fields[index], errors) {
            emit(event(value));
        }
    }
}
