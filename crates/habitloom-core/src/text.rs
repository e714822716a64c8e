//! Small text helpers for human-readable report output.

/// Pick the singular or plural form of a unit for a count.
///
/// When no explicit plural is given, appends "s" to the singular. The count
/// is a float because streak values can be fractional under freeze
/// penalties; only an exact count of one selects the singular.
pub fn pluralize(count: f64, singular: &str, plural: Option<&str>) -> String {
    if count == 1.0 {
        singular.to_string()
    } else {
        match plural {
            Some(p) => p.to_string(),
            None => format!("{singular}s"),
        }
    }
}
