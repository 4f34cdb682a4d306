//! Navigation events and the subscriber seam.
use chrono::{DateTime, Local};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A geographic fix. Latitude and longitude are carried both as the
/// receiver-formatted strings (degree symbol, decimal minutes, hemisphere
/// letter, e.g. `48°07.038"N`) and as signed decimal degrees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Formatted latitude, e.g. `48°07.038"N`
    pub latitude: String,
    /// Formatted longitude, e.g. `011°31.000"E`
    pub longitude: String,
    /// Latitude in decimal degrees, south negative
    pub latitude_ddeg: f64,
    /// Longitude in decimal degrees, west negative
    pub longitude_ddeg: f64,
}

/// One satellite report from a satellites-in-view sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SatelliteInView {
    /// Pseudo random code identifying the satellite
    pub prn: u16,
    /// Elevation above the horizon [°]
    pub elevation_deg: u16,
    /// Azimuth from true north [°]
    pub azimuth_deg: u16,
    /// Signal to noise ratio [dB]
    pub snr_db: u16,
}

/// One decoded navigation fact. Every event maps to exactly one
/// [NmeaHandler] method.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Event {
    /// Complete latitude/longitude group decoded
    Position(Position),
    /// UTC time of day, merged with today's date, in the local time zone
    TimeChanged(DateTime<Local>),
    /// Speed over ground [mph]
    Speed(f64),
    /// Speed over ground exceeded [crate::Config::speed_limit_mph]
    SpeedLimitReached(f64),
    /// Bearing [°], 0..360, no wraparound correction
    Bearing(f64),
    /// Receiver reports an active fix
    FixObtained,
    /// Receiver reports fix void or warning
    FixLost,
    /// One populated satellites-in-view slot
    Satellite(SatelliteInView),
    /// Positional dilution of precision
    Pdop(f64),
    /// Horizontal dilution of precision
    Hdop(f64),
    /// Vertical dilution of precision
    Vdop(f64),
}

impl Event {
    /// Fans this event out to the matching handler method.
    pub fn dispatch(&self, handler: &mut dyn NmeaHandler) {
        match self {
            Self::Position(position) => handler.position_received(position),
            Self::TimeChanged(time) => handler.date_time_changed(*time),
            Self::Speed(mph) => handler.speed_received(*mph),
            Self::SpeedLimitReached(mph) => handler.speed_limit_reached(*mph),
            Self::Bearing(degrees) => handler.bearing_received(*degrees),
            Self::FixObtained => handler.fix_obtained(),
            Self::FixLost => handler.fix_lost(),
            Self::Satellite(satellite) => handler.satellite_received(satellite),
            Self::Pdop(value) => handler.pdop_received(*value),
            Self::Hdop(value) => handler.hdop_received(*value),
            Self::Vdop(value) => handler.vdop_received(*value),
        }
    }
}

/// Implement this trait to consume navigation events. Every method defaults
/// to a no-op, so a subscriber only spells out the categories it cares
/// about. Delivery is synchronous, on the interpreting thread, in wire
/// field order, before `interpret` returns.
pub trait NmeaHandler {
    /// Complete position group decoded from minimum navigation data.
    fn position_received(&mut self, _position: &Position) {}
    /// Satellite time of day, local time zone. The calendar date comes from
    /// this machine's clock, not from the satellite data: a sentence
    /// decoded around local midnight can land on the wrong day.
    fn date_time_changed(&mut self, _time: DateTime<Local>) {}
    /// Speed over ground [mph].
    fn speed_received(&mut self, _mph: f64) {}
    /// Speed over ground exceeded the configured limit [mph].
    fn speed_limit_reached(&mut self, _mph: f64) {}
    /// Bearing [°].
    fn bearing_received(&mut self, _degrees: f64) {}
    /// Fix status transitioned to active.
    fn fix_obtained(&mut self) {}
    /// Fix status transitioned to void/warning.
    fn fix_lost(&mut self) {}
    /// One satellite observation.
    fn satellite_received(&mut self, _satellite: &SatelliteInView) {}
    /// Positional dilution of precision.
    fn pdop_received(&mut self, _value: f64) {}
    /// Horizontal dilution of precision.
    fn hdop_received(&mut self, _value: f64) {}
    /// Vertical dilution of precision.
    fn vdop_received(&mut self, _value: f64) {}
}
