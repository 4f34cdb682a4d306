//! Satellites-in-view decoder (`$GPGSV`).
use crate::{
    event::{Event, SatelliteInView},
    interpreter::DecodeError,
    sentence::{parse_field, SentenceKind},
};

const KIND: SentenceKind = SentenceKind::Gsv;

/// Satellite blocks per sentence.
const SLOTS: usize = 4;

/// Each slot owns four consecutive fields: PRN, elevation, azimuth, SNR.
/// That is the wire order; historical receiver APIs handed azimuth to
/// subscribers before elevation, so payloads here are named rather than
/// positional. A slot is decoded only when the sentence is long enough to
/// carry it and all four of its fields are non-empty; slots are
/// independent, and one bad slot never suppresses its neighbours.
pub(crate) fn decode(
    fields: &[&str],
    emit: &mut dyn FnMut(Event),
    errors: &mut Vec<DecodeError>,
) {
    for slot in 1..=SLOTS {
        let base = slot * 4;
        if fields.len() <= base + 3 {
            // sentence reports fewer than four satellites
            continue;
        }
        let block = &fields[base..=base + 3];
        if block.iter().any(|field| field.is_empty()) {
            continue;
        }
        let prn = parse_field::<u16>(KIND, base, block[0], errors);
        let elevation = parse_field::<u16>(KIND, base + 1, block[1], errors);
        let azimuth = parse_field::<u16>(KIND, base + 2, block[2], errors);
        let snr = parse_field::<u16>(KIND, base + 3, block[3], errors);
        if let (Some(prn), Some(elevation_deg), Some(azimuth_deg), Some(snr_db)) =
            (prn, elevation, azimuth, snr)
        {
            emit(Event::Satellite(SatelliteInView {
                prn,
                elevation_deg,
                azimuth_deg,
                snr_db,
            }));
        }
    }
}
