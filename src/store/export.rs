use csv::Writer;

use crate::models::FeedbackRecord;
use crate::store::FeedbackStore;

pub const EXPORT_FILE_NAME: &str = "student_sentiment_feedback.csv";

/// Column order follows the fields of a feedback record. Timestamps are UTC.
pub const HEADER: [&str; 6] = ["Date (UTC)", "ID", "Course", "Feedback", "Sentiment", "Polarity"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the whole store as CSV, one row per record in submission order.
pub fn to_csv(store: &FeedbackStore) -> Result<Vec<u8>, csv::Error> {
    let mut writer = Writer::from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for record in store.all() {
        writer.write_record(row(record))?;
    }

    writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}

fn row(record: &FeedbackRecord) -> [String; 6] {
    [
        record.timestamp().format(TIMESTAMP_FORMAT).to_string(),
        record.student_id().to_string(),
        record.course().to_string(),
        record.feedback().to_string(),
        record.sentiment().to_string(),
        record.polarity().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, FeedbackForm, PolarityScore, SentimentLabel};
    use chrono::{TimeZone, Utc};

    fn render(store: &FeedbackStore) -> String {
        String::from_utf8(to_csv(store).unwrap()).unwrap()
    }

    #[test]
    fn empty_store_is_just_the_header() {
        assert_eq!(
            render(&FeedbackStore::new()),
            "Date (UTC),ID,Course,Feedback,Sentiment,Polarity\n"
        );
    }

    #[test]
    fn rows_are_quoted_when_needed() {
        let mut store = FeedbackStore::new();
        let submission = FeedbackForm::new(
            "S101",
            Course::MachineLearning,
            "Engaging labs, but the \"pace\" was fast",
        )
        .validate()
        .unwrap();
        let when = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        store.append(FeedbackRecord::new(
            submission,
            SentimentLabel::Positive,
            PolarityScore::new(0.4),
            when,
        ));

        let csv = render(&store);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "2024-03-05 14:07:09,S101,Machine Learning,\"Engaging labs, but the \"\"pace\"\" was fast\",Positive,0.400"
        );
    }

    #[test]
    fn multiline_feedback_reads_back_as_one_field() {
        let mut store = FeedbackStore::new();
        let submission = FeedbackForm::new("S7", Course::DatabaseSystems, "Joins were hard\nbut fair")
            .validate()
            .unwrap();
        store.append(FeedbackRecord::new(
            submission,
            SentimentLabel::Neutral,
            PolarityScore::NEUTRAL,
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        ));

        let bytes = to_csv(&store).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER.to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][3], "Joins were hard\nbut fair");
        assert_eq!(&rows[0][5], "0.000");
    }
}
