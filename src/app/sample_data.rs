use crate::domain::model::Flight;
use crate::utils::error::{FlightError, Result};
use chrono::{Duration, NaiveDateTime};

/// 建立示範用的航班資料
pub struct FlightBuilder;

impl FlightBuilder {
    /// 以 `base`（通常是「三天後」）為基準建立五種情境的航班。
    ///
    /// Fails with `InvalidArgument` when an offset from `base` leaves the
    /// representable date range.
    pub fn create_flights(base: NaiveDateTime) -> Result<Vec<Flight>> {
        let at = |offset: Duration| shift(base, offset);
        let hours = Duration::hours;

        Ok(vec![
            // 一般兩小時航班
            Self::create_flight(&[base, at(hours(2))?])?,
            // 一般轉機航班
            Self::create_flight(&[base, at(hours(2))?, at(hours(3))?, at(hours(5))?])?,
            // 出發時間在過去
            Self::create_flight(&[at(Duration::days(-3))?, base])?,
            // 抵達早於出發
            Self::create_flight(&[base, at(hours(-3))?])?,
            // 轉機超過兩小時
            Self::create_flight(&[base, at(hours(2))?, at(hours(5))?, at(hours(7))?])?,
        ])
    }

    pub fn create_flight(dates: &[NaiveDateTime]) -> Result<Flight> {
        Flight::from_timestamps(dates)
    }
}

/// `base + offset`, without panicking at the edges of the date range.
pub fn shift(base: NaiveDateTime, offset: Duration) -> Result<NaiveDateTime> {
    base.checked_add_signed(offset).ok_or_else(|| {
        FlightError::invalid_argument(format!(
            "{} shifted by {} is out of the supported date range",
            base, offset
        ))
    })
}
