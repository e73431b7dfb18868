//! Discord-markdown renderings of analyses and aggregate views.
//!
//! Everything here is plain string building so the bot handlers stay thin
//! and the output can be checked without a gateway connection.

use crate::models::{Course, FeedbackRecord, SentimentLabel};
use crate::sentiment::{BatchAnalysis, SentimentCounts};
use crate::store::AggregateView;
use crate::youtube::VideoAnalysis;

/// Discord rejects message content longer than this.
pub const MESSAGE_LIMIT: usize = 2000;

const BAR_WIDTH: usize = 20;
const COMMENT_PREVIEW: usize = 10;
const RECORD_PREVIEW: usize = 15;
const SNIPPET_CHARS: usize = 80;

/// Percentage bars for every label, e.g. `Positive  ██████░░░░  3 (60.0%)`.
pub fn distribution_chart(counts: &SentimentCounts) -> String {
    let mut chart = String::from("```\n");
    for (label, count) in counts.iter() {
        let pct = counts.percentage(label);
        let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
        chart.push_str(&format!(
            "{:<9} {}{} {:>3} ({:.1}%)\n",
            label.as_str(),
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            count,
            pct
        ));
    }
    chart.push_str("```");
    chart
}

pub fn batch_report(video: &VideoAnalysis) -> String {
    let analysis = &video.analysis;
    let mut out = format!(
        "**YouTube Comment Sentiment** for `{}`\nFetched {} comments.\n\n",
        video.video_id,
        analysis.total()
    );

    out.push_str("**Sentiment Distribution**\n");
    out.push_str(&distribution_chart(analysis.counts()));
    out.push_str(&format!(
        "\n**Average Polarity (Overall Tone):** {:.3}\n",
        analysis.mean_polarity()
    ));

    if !analysis.is_empty() {
        out.push_str(&format!("\n**Comments** (first {})\n", COMMENT_PREVIEW.min(analysis.total())));
        out.push_str(&comment_lines(analysis));
    }

    truncate(&out, MESSAGE_LIMIT)
}

fn comment_lines(analysis: &BatchAnalysis) -> String {
    analysis
        .items()
        .iter()
        .take(COMMENT_PREVIEW)
        .map(|item| {
            format!(
                "{} `{:>6}` {}\n",
                item.label.emoji(),
                item.polarity.to_string(),
                snippet(&item.text)
            )
        })
        .collect()
}

pub fn submission_report(record: &FeedbackRecord) -> String {
    format!(
        "Feedback submitted and analyzed successfully!\n\
         **Student ID:** {}\n**Course:** {}\n**Sentiment:** {} {}\n\
         **Polarity Score** (Range: -1.0 to 1.0): {}",
        record.student_id(),
        record.course(),
        record.sentiment(),
        record.sentiment().emoji(),
        record.polarity()
    )
}

pub fn empty_dashboard() -> String {
    "No feedback data has been submitted yet in this session. \
     Use `/feedback` to enter some records."
        .to_string()
}

/// Overall statistics plus the course-by-sentiment table.
pub fn dashboard_report(view: &AggregateView) -> String {
    if view.total == 0 {
        return empty_dashboard();
    }

    let mut out = format!("Dashboard analyzing {} feedback records.\n\n", view.total);
    out.push_str("**Overall Statistics**\n");
    out.push_str(&format!("Total Records: {}\n", view.total));
    out.push_str(&format!("Avg. Polarity Score: {:.3}\n", view.mean_polarity));
    out.push_str(&format!(
        "Most Frequent Sentiment: {}\n\n",
        view.most_frequent.map(|l| l.as_str()).unwrap_or("N/A")
    ));

    out.push_str("**Sentiment Distribution Across Courses**\n```\n");
    out.push_str(&format!(
        "{:<18} {:>8} {:>8} {:>8}\n",
        "Course", "Positive", "Negative", "Neutral"
    ));
    for course in &view.courses {
        out.push_str(&format!(
            "{:<18} {:>8} {:>8} {:>8}\n",
            course.as_str(),
            view.by_course.get(*course, SentimentLabel::Positive),
            view.by_course.get(*course, SentimentLabel::Negative),
            view.by_course.get(*course, SentimentLabel::Neutral)
        ));
    }
    out.push_str("```");

    truncate(&out, MESSAGE_LIMIT)
}

/// The records and label counts for one course.
pub fn course_report(course: Course, records: &[&FeedbackRecord]) -> String {
    if records.is_empty() {
        return format!("No feedback recorded for {} in this session.", course);
    }

    let counts: SentimentCounts = records.iter().map(|r| r.sentiment()).collect();
    let mut out = format!("**Detailed Breakdown: {}**\n", course);
    for record in records.iter().take(RECORD_PREVIEW) {
        out.push_str(&format!(
            "`{}` {} {} ({}): {}\n",
            record.student_id(),
            record.sentiment().emoji(),
            record.sentiment(),
            record.polarity(),
            snippet(record.feedback())
        ));
    }
    if records.len() > RECORD_PREVIEW {
        out.push_str(&format!("...and {} more\n", records.len() - RECORD_PREVIEW));
    }

    out.push_str(&format!("\n**Sentiment Counts for {}**\n", course));
    out.push_str(&distribution_chart(&counts));

    truncate(&out, MESSAGE_LIMIT)
}

fn snippet(text: &str) -> String {
    let single_line = text.replace(['\n', '\r'], " ");
    truncate(&single_line, SNIPPET_CHARS)
}

/// Cuts at a char boundary and marks the cut with an ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}
