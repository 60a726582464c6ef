//! Conversion of expression records into the blocks shown on the page.
//!
//! Rendering is a pure function so it can be checked without a DOM. The
//! `ExpressionList` component turns the result into elements and rebuilds
//! the whole container on every refresh.

use calcq_common::ExpressionRecord;

/// Heading placed above the records.
pub const LIST_HEADER: &str = "Calculation history";

/// Shown when a record has no expression text.
pub const MISSING_EXPRESSION: &str = "N/A";

/// Shown when a record has no result yet.
pub const MISSING_RESULT: &str = "—";

/// Everything the list container displays after one refresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedList {
    pub header: String,
    /// One block per record, in service order
    pub blocks: Vec<RecordBlock>,
}

/// Display form of a single record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordBlock {
    /// CSS classes, including the status marker
    pub class: String,
    pub id: String,
    pub expression: String,
    pub status: String,
    pub result: String,
}

/// Classes for a record block. The status is embedded verbatim so pages can
/// style e.g. `.status-done` without the client knowing which statuses exist.
pub fn status_class(status: &str) -> String {
    format!("expression-item status-{status}")
}

/// Render the latest snapshot of records.
pub fn render_expressions(records: &[ExpressionRecord]) -> RenderedList {
    RenderedList {
        header: LIST_HEADER.to_string(),
        blocks: records.iter().map(render_record).collect(),
    }
}

fn render_record(record: &ExpressionRecord) -> RecordBlock {
    RecordBlock {
        class: status_class(&record.status),
        id: record.id.to_string(),
        expression: record
            .expression_text()
            .unwrap_or(MISSING_EXPRESSION)
            .to_string(),
        status: record.status.clone(),
        result: record
            .result_text()
            .unwrap_or_else(|| MISSING_RESULT.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcq_common::RecordId;
    use serde_json::json;

    fn record(
        id: &str,
        expression: Option<&str>,
        status: &str,
        result: Option<f64>,
    ) -> ExpressionRecord {
        ExpressionRecord {
            id: RecordId::new(id),
            expression: expression.map(str::to_string),
            status: status.to_string(),
            result: result.map(|r| json!(r)),
        }
    }

    #[test]
    fn test_one_header_and_one_block_per_record() {
        let records = vec![
            record("1", Some("1+1"), "done", Some(2.0)),
            record("2", Some("2*3"), "processing", None),
            record("3", None, "pending", None),
        ];

        let list = render_expressions(&records);

        assert_eq!(list.header, LIST_HEADER);
        assert_eq!(list.blocks.len(), 3);
        let ids: Vec<_> = list.blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_empty_collection_renders_only_header() {
        let list = render_expressions(&[]);

        assert_eq!(list.header, LIST_HEADER);
        assert!(list.blocks.is_empty());
    }

    #[test]
    fn test_service_order_is_kept() {
        let records = vec![
            record("z", None, "done", None),
            record("a", None, "done", None),
            record("m", None, "done", None),
        ];

        let ids: Vec<_> = render_expressions(&records)
            .blocks
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, ["z", "a", "m"]);
    }

    #[test]
    fn test_placeholders_for_missing_fields() {
        let list = render_expressions(&[record("9", None, "pending", None)]);
        let block = &list.blocks[0];

        assert_eq!(block.expression, MISSING_EXPRESSION);
        assert_eq!(block.result, MISSING_RESULT);
    }

    #[test]
    fn test_pending_record_with_zero_result_shows_placeholder() {
        let list = render_expressions(&[record("5", Some("3-3"), "pending", Some(0.0))]);

        assert_eq!(list.blocks[0].result, MISSING_RESULT);
    }

    #[test]
    fn test_present_fields_are_shown() {
        let list = render_expressions(&[record("4", Some("10/4"), "done", Some(2.5))]);
        let block = &list.blocks[0];

        assert_eq!(block.id, "4");
        assert_eq!(block.expression, "10/4");
        assert_eq!(block.status, "done");
        assert_eq!(block.result, "2.5");
    }

    #[test]
    fn test_status_marker_embeds_status_exactly() {
        for status in ["done", "error", "pending", "processing", "queued-for-retry"] {
            let list = render_expressions(&[record("x", None, status, None)]);
            assert_eq!(
                list.blocks[0].class,
                format!("expression-item status-{status}")
            );
        }
    }
}
