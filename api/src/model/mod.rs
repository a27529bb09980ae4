pub mod event;
pub mod form;
pub mod registration;

mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Timelike, Utc};
    use serde::Serializer;

    /// Either whole seconds or exactly six fractional digits, with a
    /// `+00:00` offset.
    pub fn format(value: &DateTime<Utc>) -> String {
        let precision = if value.nanosecond() / 1_000 == 0 {
            SecondsFormat::Secs
        } else {
            SecondsFormat::Micros
        };
        value.to_rfc3339_opts(precision, false)
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.serialize_str(&format(v)),
                None => serializer.serialize_none(),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::TimeZone;

        #[test]
        fn fractional_seconds_only_when_present() {
            let whole = Utc.with_ymd_and_hms(2030, 5, 1, 18, 30, 0).unwrap();
            assert_eq!(format(&whole), "2030-05-01T18:30:00+00:00");

            let fractional = whole + chrono::Duration::microseconds(250_000);
            assert_eq!(format(&fractional), "2030-05-01T18:30:00.250000+00:00");

            let nanos = whole + chrono::Duration::nanoseconds(123_456_789);
            assert_eq!(format(&nanos), "2030-05-01T18:30:00.123456+00:00");

            let below_micro = whole + chrono::Duration::nanoseconds(999);
            assert_eq!(format(&below_micro), "2030-05-01T18:30:00+00:00");
        }
    }
}
