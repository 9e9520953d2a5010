//! Meeting slots and booking for the public scheduling page.
//!
//! Slot dates arrive as `DD-MM-YYYY` and slot times as `"2:00 PM"` or `"14:00"`, both
//! in the visitor's local time. A booked meeting always lasts 30 minutes and is sent to
//! the backend as UTC ISO-8601 with milliseconds.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Backend;
use crate::error::ApiError;

const DATE_FORMAT: &str = "%d-%m-%Y";
const MEETING_MINUTES: i64 = 30;

/// Free slots on one day.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySlots {
    pub date: String,
    #[serde(default)]
    pub slots: Vec<String>,
}

impl DaySlots {
    pub fn day(&self) -> Option<NaiveDate> {
        parse_slot_date(&self.date).ok()
    }

    /// `Thursday, June 5, 2025`; the raw string if it does not parse.
    pub fn full_label(&self) -> String {
        self.day()
            .map(|d| d.format("%A, %B %-d, %Y").to_string())
            .unwrap_or_else(|| self.date.clone())
    }

    /// `THU`
    pub fn weekday_label(&self) -> String {
        self.day()
            .map(|d| d.format("%a").to_string().to_uppercase())
            .unwrap_or_default()
    }

    /// `5`
    pub fn day_number(&self) -> String {
        self.day()
            .map(|d| d.format("%-d").to_string())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MeetingRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
}

/// The calendar event the backend created.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ScheduledMeeting {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub start: serde_json::Value,
    #[serde(default)]
    pub end: serde_json::Value,
    #[serde(rename = "htmlLink", default)]
    pub html_link: String,
}

impl ScheduledMeeting {
    /// The event start as the backend reports it, either a bare string or a
    /// `{dateTime}` object.
    pub fn start_label(&self) -> String {
        event_time(&self.start)
    }

    pub fn end_label(&self) -> String {
        event_time(&self.end)
    }
}

fn event_time(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Object(map) => map
            .get("dateTime")
            .or_else(|| map.get("date"))
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}

pub fn parse_slot_date(date: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|e| ApiError::validation(format!("Invalid slot date {date}: {e}")))
}

/// Parse a 12-hour (`2:00 PM`) or 24-hour (`14:00`) slot time. A trailing range
/// (`2:00 PM - 2:30 PM`) is ignored.
pub fn parse_slot_time(slot: &str) -> Result<NaiveTime, ApiError> {
    let start = slot.split(" - ").next().unwrap_or(slot).trim();
    NaiveTime::parse_from_str(&start.to_uppercase(), "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(start, "%H:%M"))
        .map_err(|e| ApiError::validation(format!("Invalid time slot {slot}: {e}")))
}

/// Start and end of a meeting booked at `slot` on `date`, interpreted in `tz`.
pub fn meeting_window<Tz: TimeZone>(
    tz: &Tz,
    date: &str,
    slot: &str,
) -> Result<(DateTime<Tz>, DateTime<Tz>), ApiError> {
    let local = NaiveDateTime::new(parse_slot_date(date)?, parse_slot_time(slot)?);
    let start = tz
        .from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| ApiError::validation(format!("{slot} on {date} does not exist locally")))?;
    let end = start.clone() + Duration::minutes(MEETING_MINUTES);
    Ok((start, end))
}

fn iso_utc<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    at.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl MeetingRequest {
    pub fn new<Tz: TimeZone>(
        id: &str,
        title: &str,
        description: &str,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            start_time: iso_utc(start),
            end_time: iso_utc(end),
        }
    }
}

/// Fetch free slots for a booking link.
pub async fn load_slots<B: Backend>(backend: &B, id: &str) -> Result<Vec<DaySlots>, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::validation("ID is required"));
    }
    backend.free_slots(id).await
}

/// What the visitor filled in on the booking form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub date: String,
    pub slot: String,
    pub title: String,
    pub description: String,
}

/// Validate the form and book a 30-minute meeting in `tz`.
pub async fn book_meeting<B: Backend, Tz: TimeZone>(
    backend: &B,
    tz: &Tz,
    id: &str,
    form: &BookingForm,
) -> Result<ScheduledMeeting, ApiError> {
    if form.date.is_empty() || form.slot.is_empty() {
        return Err(ApiError::validation("Please select a date and time slot"));
    }
    if form.title.trim().is_empty() {
        return Err(ApiError::validation("Please enter a meeting title"));
    }
    let (start, end) = meeting_window(tz, &form.date, &form.slot)?;
    let request = MeetingRequest::new(id, &form.title, &form.description, &start, &end);
    tracing::info!("Booking {} to {}", request.start_time, request.end_time);
    backend.schedule_meeting(&request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBackend;
    use chrono::FixedOffset;

    fn june_fifth() -> DaySlots {
        DaySlots {
            date: "05-06-2025".to_string(),
            slots: vec!["10:00 AM".to_string(), "2:00 PM".to_string()],
        }
    }

    #[test]
    fn test_afternoon_slot_is_thirty_minutes() {
        let (start, end) = meeting_window(&Utc, "05-06-2025", "2:00 PM").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 6, 5, 14, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 6, 5, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_request_is_utc_with_millis() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let (start, end) = meeting_window(&tz, "05-06-2025", "2:00 PM").unwrap();
        let request = MeetingRequest::new("abc", " Intro ", "", &start, &end);
        assert_eq!(request.start_time, "2025-06-05T12:00:00.000Z");
        assert_eq!(request.end_time, "2025-06-05T12:30:00.000Z");
        assert_eq!(request.title, "Intro");
    }

    #[test]
    fn test_time_formats() {
        assert_eq!(parse_slot_time("12:00 AM").unwrap(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(parse_slot_time("12:30 pm").unwrap(), NaiveTime::from_hms_opt(12, 30, 0).unwrap());
        assert_eq!(parse_slot_time("09:15").unwrap(), NaiveTime::from_hms_opt(9, 15, 0).unwrap());
        assert_eq!(
            parse_slot_time("2:00 PM - 2:30 PM").unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap()
        );
        assert!(parse_slot_time("teatime").is_err());
        assert!(parse_slot_date("2025-06-05").is_err());
    }

    #[test]
    fn test_date_labels() {
        let day = june_fifth();
        assert_eq!(day.full_label(), "Thursday, June 5, 2025");
        assert_eq!(day.weekday_label(), "THU");
        assert_eq!(day.day_number(), "5");
    }

    #[test]
    fn test_event_time_shapes() {
        let meeting: ScheduledMeeting = serde_json::from_str(
            r#"{"id":"e1","summary":"Intro","start":{"dateTime":"2025-06-05T14:00:00+02:00"},"end":"2025-06-05T14:30:00+02:00","htmlLink":"https://cal/e1"}"#,
        )
        .unwrap();
        assert_eq!(meeting.start_label(), "2025-06-05T14:00:00+02:00");
        assert_eq!(meeting.end_label(), "2025-06-05T14:30:00+02:00");
        assert_eq!(meeting.html_link, "https://cal/e1");
    }

    #[tokio::test]
    async fn test_book_requires_title() {
        let backend = MockBackend::new();
        let form = BookingForm {
            date: "05-06-2025".into(),
            slot: "2:00 PM".into(),
            title: "  ".into(),
            description: String::new(),
        };
        let err = book_meeting(&backend, &Utc, "abc", &form).await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a meeting title");
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_book_sends_window_for_link_id() {
        let backend = MockBackend::new();
        backend.set_slots(vec![june_fifth()]);
        let slots = load_slots(&backend, "abc").await.unwrap();
        assert_eq!(slots[0].slots[1], "2:00 PM");

        let form = BookingForm {
            date: slots[0].date.clone(),
            slot: slots[0].slots[1].clone(),
            title: "Intro".into(),
            description: "Quick chat".into(),
        };
        let meeting = book_meeting(&backend, &Utc, "abc", &form).await.unwrap();

        let sent = backend.last_meeting().unwrap();
        assert_eq!(sent.id, "abc");
        assert_eq!(sent.start_time, "2025-06-05T14:00:00.000Z");
        assert_eq!(sent.end_time, "2025-06-05T14:30:00.000Z");
        assert_eq!(meeting.summary, "Intro");
    }
}
