use jiff::{tz::TimeZone, Timestamp};

use crate::errors::HistogramaError;
use crate::takeout::ActivityRecord;

/// The history mixes in other products (YouTube Music mostly); only
/// records with this header are counted.
pub const SOURCE_HEADER: &str = "YouTube";

/// The export is UTC; hours are binned in this civil timezone.
pub const TARGET_TZ: &str = "Europe/Madrid";

/// Map the kept records to their local hour of day, in input order.
///
/// The comparison against [`SOURCE_HEADER`] is exact, case sensitive,
/// no trimming.  The `time` field must be an ISO-8601 instant with a
/// UTC offset, e.g. `2023-06-01T10:00:00.000Z`.  The conversion goes
/// through the IANA rules for [`TARGET_TZ`], so instants near a DST
/// transition land on the offset in effect at that instant.
pub fn local_hours(records: &[ActivityRecord]) -> Result<Vec<i8>, HistogramaError> {
    let tz = TimeZone::get(TARGET_TZ).map_err(|e| HistogramaError::UnknownTimezone {
        name: TARGET_TZ,
        source: e,
    })?;
    let mut hours = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.header != SOURCE_HEADER {
            continue;
        }
        let instant: Timestamp =
            record
                .time
                .parse()
                .map_err(|e| HistogramaError::MalformedTimestamp {
                    index,
                    value: record.time.clone(),
                    source: e,
                })?;
        hours.push(instant.to_zoned(tz.clone()).hour());
    }
    Ok(hours)
}
