use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::datetime::parse_timestamp;

/// Style tag used to colour a run status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Success,
    Danger,
    Info,
    Warning,
}

impl StatusClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Success => "success",
            StatusClass::Danger => "danger",
            StatusClass::Info => "info",
            StatusClass::Warning => "warning",
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn get_css_class_for_status(status: Option<&str>) -> StatusClass {
    match status {
        Some("Succeeded") => StatusClass::Success,
        Some("Stopped") | Some("Failed") => StatusClass::Danger,
        Some("Created") => StatusClass::Info,
        _ => StatusClass::Warning,
    }
}

/// Appends `s` unless there is exactly one object.
pub fn pluralize(name: &str, num_objects: i64) -> String {
    if num_objects != 1 {
        return format!("{}s", name);
    }
    name.to_string()
}

/// Anything carrying the API's `updated_at` timestamp.
pub trait UpdatedAt {
    fn updated_at(&self) -> Option<&str>;
}

impl UpdatedAt for serde_json::Value {
    fn updated_at(&self) -> Option<&str> {
        self.get("updated_at").and_then(|value| value.as_str())
    }
}

/// Milliseconds from `a.updated_at` to `b.updated_at`, or `None` if either is missing or invalid.
pub fn updated_at_delta<A, B>(a: &A, b: &B) -> Option<i64>
where
    A: UpdatedAt + ?Sized,
    B: UpdatedAt + ?Sized,
{
    let date_a = parse_timestamp(a.updated_at()?).ok()?;
    let date_b = parse_timestamp(b.updated_at()?).ok()?;
    Some(date_b.signed_duration_since(date_a).num_milliseconds())
}

/// Comparator for `sort_by`: most recently updated first.
///
/// Records without a usable timestamp sort after all dated records and tie with each other.
pub fn sort_by_updated_at<T: UpdatedAt + ?Sized>(a: &T, b: &T) -> Ordering {
    let date_a = a.updated_at().and_then(|s| parse_timestamp(s).ok());
    let date_b = b.updated_at().and_then(|s| parse_timestamp(s).ok());
    match (date_a, date_b) {
        (Some(date_a), Some(date_b)) => date_b.cmp(&date_a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn css_classes() {
        assert_eq!(get_css_class_for_status(Some("Succeeded")).as_str(), "success");
        assert_eq!(get_css_class_for_status(Some("Stopped")), StatusClass::Danger);
        assert_eq!(get_css_class_for_status(Some("Failed")), StatusClass::Danger);
        assert_eq!(get_css_class_for_status(Some("Created")), StatusClass::Info);
        assert_eq!(get_css_class_for_status(Some("Running")), StatusClass::Warning);
        assert_eq!(get_css_class_for_status(Some("succeeded")), StatusClass::Warning);
        assert_eq!(get_css_class_for_status(None).to_string(), "warning");
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize("job", 1), "job");
        assert_eq!(pluralize("job", 0), "jobs");
        assert_eq!(pluralize("job", 5), "jobs");
        assert_eq!(pluralize("job", -1), "jobs");
    }

    #[test]
    fn delta_is_b_minus_a() {
        let a = json!({ "updated_at": "2024-03-01T12:00:00Z" });
        let b = json!({ "updated_at": "2024-03-01T12:00:02.500Z" });
        assert_eq!(updated_at_delta(&a, &b), Some(2500));
        assert_eq!(updated_at_delta(&b, &a), Some(-2500));
    }

    #[test]
    fn delta_without_timestamp() {
        let a = json!({ "updated_at": "2024-03-01T12:00:00Z" });
        let missing = json!({ "name": "x" });
        let invalid = json!({ "updated_at": "soon" });
        assert_eq!(updated_at_delta(&a, &missing), None);
        assert_eq!(updated_at_delta(&invalid, &a), None);
    }

    #[test]
    fn sorts_newest_first_with_undated_last() {
        let mut records = vec![
            json!({ "id": 1, "updated_at": "2024-03-01T12:00:00Z" }),
            json!({ "id": 2 }),
            json!({ "id": 3, "updated_at": "2024-03-03T12:00:00Z" }),
            json!({ "id": 4, "updated_at": "garbage" }),
            json!({ "id": 5, "updated_at": "2024-03-02T12:00:00Z" }),
        ];
        records.sort_by(sort_by_updated_at);
        let ids: Vec<_> = records.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![3, 5, 1, 2, 4]);
    }
}
