use crate::utils::error::Result;
use crate::utils::validation::validate_even_length;
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// 顯示用的時間格式，精確到分鐘
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// 一段航程：出發時間與抵達時間。
///
/// 抵達早於出發的航段仍是合法的值，由規則負責判斷。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    departure_time: NaiveDateTime,
    arrival_time: NaiveDateTime,
}

impl Segment {
    pub fn new(departure_time: NaiveDateTime, arrival_time: NaiveDateTime) -> Self {
        Self {
            departure_time,
            arrival_time,
        }
    }

    pub fn departure_time(&self) -> NaiveDateTime {
        self.departure_time
    }

    pub fn arrival_time(&self) -> NaiveDateTime {
        self.arrival_time
    }

    /// Signed flight time; negative when the arrival precedes the departure.
    pub fn duration(&self) -> Duration {
        self.arrival_time - self.departure_time
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}]",
            self.departure_time.format(TIMESTAMP_FORMAT),
            self.arrival_time.format(TIMESTAMP_FORMAT)
        )
    }
}

/// 一個行程，由依旅行順序排列的航段組成。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Flight {
    segments: Vec<Segment>,
}

impl Flight {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Builds a flight from a flat list of timestamps, pairing them
    /// consecutively as `(departure, arrival)`.
    ///
    /// Fails with [`FlightError::InvalidArgument`](crate::FlightError::InvalidArgument)
    /// when the number of timestamps is odd.
    pub fn from_timestamps(dates: &[NaiveDateTime]) -> Result<Self> {
        validate_even_length("dates", dates)?;

        let segments = dates
            .chunks_exact(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect();
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// 相鄰航段間地面停留時間的總和（抵達 i → 出發 i+1）。
    ///
    /// 不做歸零處理：重疊或亂序的航段會產生負值。
    /// 溢位時飽和於 `Duration::MAX` / `Duration::MIN`。
    pub fn ground_time(&self) -> Duration {
        self.segments
            .windows(2)
            .map(|pair| pair[1].departure_time - pair[0].arrival_time)
            .fold(Duration::zero(), |total, gap| {
                total.checked_add(&gap).unwrap_or(if gap > Duration::zero() {
                    Duration::MAX
                } else {
                    Duration::MIN
                })
            })
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl From<Vec<Segment>> for Flight {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FlightError;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_segment_display() {
        let segment = Segment::new(at(9, 5), at(11, 30));
        assert_eq!(segment.to_string(), "[2024-03-15T09:05|2024-03-15T11:30]");
    }

    #[test]
    fn test_flight_display_joins_segments() {
        let flight = Flight::new(vec![
            Segment::new(at(8, 0), at(10, 0)),
            Segment::new(at(11, 0), at(13, 0)),
        ]);
        assert_eq!(
            flight.to_string(),
            "[2024-03-15T08:00|2024-03-15T10:00] [2024-03-15T11:00|2024-03-15T13:00]"
        );
        assert_eq!(Flight::default().to_string(), "");
    }

    #[test]
    fn test_from_timestamps_pairs_dates() {
        let flight = Flight::from_timestamps(&[at(8, 0), at(10, 0), at(11, 0), at(13, 0)]).unwrap();

        assert_eq!(flight.len(), 2);
        assert_eq!(flight.segments()[1], Segment::new(at(11, 0), at(13, 0)));
    }

    #[test]
    fn test_from_timestamps_rejects_odd_length() {
        let result = Flight::from_timestamps(&[at(8, 0), at(10, 0), at(11, 0)]);
        assert!(matches!(result, Err(FlightError::InvalidArgument { .. })));
    }

    #[test]
    fn test_from_timestamps_empty() {
        let flight = Flight::from_timestamps(&[]).unwrap();
        assert!(flight.is_empty());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = Segment::new(at(8, 0), at(10, 0));
        let b = Segment::new(at(11, 0), at(13, 0));

        assert_eq!(Flight::new(vec![a, b]), Flight::new(vec![a, b]));
        assert_ne!(Flight::new(vec![a, b]), Flight::new(vec![b, a]));
    }

    #[test]
    fn test_ground_time_sums_signed_gaps() {
        let flight = Flight::new(vec![
            Segment::new(at(8, 0), at(10, 0)),
            Segment::new(at(11, 30), at(12, 0)),
            Segment::new(at(11, 0), at(13, 0)),
        ]);
        // 1h30m + (-1h) = 30m
        assert_eq!(flight.ground_time(), Duration::minutes(30));
    }

    #[test]
    fn test_ground_time_single_segment_is_zero() {
        let flight = Flight::new(vec![Segment::new(at(8, 0), at(10, 0))]);
        assert_eq!(flight.ground_time(), Duration::zero());
        assert_eq!(Flight::default().ground_time(), Duration::zero());
    }

    #[test]
    fn test_ground_time_saturates_on_overflow() {
        let forward = Flight::new(vec![
            Segment::new(NaiveDateTime::MAX, NaiveDateTime::MIN);
            700
        ]);
        assert_eq!(forward.ground_time(), Duration::MAX);

        let backward = Flight::new(vec![
            Segment::new(NaiveDateTime::MIN, NaiveDateTime::MAX);
            700
        ]);
        assert_eq!(backward.ground_time(), Duration::MIN);
    }

    #[test]
    fn test_from_segment_vec() {
        let segments = vec![Segment::new(at(8, 0), at(10, 0))];
        let flight: Flight = segments.clone().into();
        assert_eq!(flight, Flight::new(segments));
    }

    #[test]
    fn test_flight_json_shape() {
        let flight = Flight::new(vec![Segment::new(at(8, 0), at(10, 0))]);
        let json = serde_json::to_value(&flight).unwrap();

        assert_eq!(json["segments"][0]["departure_time"], "2024-03-15T08:00:00");
        assert_eq!(json["segments"][0]["arrival_time"], "2024-03-15T10:00:00");
    }

    #[test]
    fn test_segment_duration_negative_when_inverted() {
        let segment = Segment::new(at(10, 0), at(9, 0));
        assert_eq!(segment.duration(), Duration::hours(-1));
    }
}
