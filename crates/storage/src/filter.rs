//! Dynamic query construction for the list endpoints.
//!
//! Turns a structured filter into a `WHERE`/`ORDER BY` suffix on a base
//! SELECT, using positional `?` placeholders for every value so client input
//! never reaches the query text. Ordering columns are checked against a
//! per-domain allow-list; anything else falls back to the default order.

/// Applied whenever criteria are present but carry no usable ordering
/// directive.
const DEFAULT_ORDER_BY: &str = " ORDER BY advertised_start_time ASC";

/// Normalized filter input, shared by the race and event repositories.
#[derive(Debug, Clone, Default)]
pub struct Criteria<'a> {
    /// Column the grouping ids restrict on (`meeting_id` or `sport_id`).
    pub group_column: &'a str,
    /// Grouping ids to restrict to; empty means no restriction.
    pub group_ids: &'a [i64],
    /// Unset or `true` includes hidden records; `false` restricts to
    /// visible ones.
    pub show_hidden: Option<bool>,
    /// Raw `column [asc|desc]` directive from the client.
    pub order_by: Option<&'a str>,
}

/// Compiles `base` plus `criteria` into a final query and its positional
/// arguments, in bind order.
///
/// Absent criteria return `base` untouched. Pure and deterministic:
/// identical inputs always yield an identical query string and argument
/// list.
pub fn compile(
    base: &str,
    criteria: Option<&Criteria>,
    allowed_columns: &[&str],
) -> (String, Vec<i64>) {
    let Some(criteria) = criteria else {
        return (base.to_string(), Vec::new());
    };

    let mut query = base.to_string();
    let mut clauses: Vec<String> = Vec::new();
    let mut args: Vec<i64> = Vec::new();

    if !criteria.group_ids.is_empty() {
        let placeholders = vec!["?"; criteria.group_ids.len()].join(",");
        clauses.push(format!("{} IN ({})", criteria.group_column, placeholders));
        args.extend_from_slice(criteria.group_ids);
    }

    // show_hidden semantics: unset or true => include hidden; false => only visible
    if criteria.show_hidden == Some(false) {
        clauses.push("visible = 1".to_string());
    }

    if !clauses.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&clauses.join(" AND "));
    }

    match order_clause(criteria.order_by, allowed_columns) {
        Some(clause) => query.push_str(&clause),
        None => query.push_str(DEFAULT_ORDER_BY),
    }

    (query, args)
}

/// Parses an ordering directive into an `ORDER BY` clause. Unknown columns
/// are ignored rather than rejected, so a typo degrades to the default
/// order instead of failing the request.
fn order_clause(directive: Option<&str>, allowed_columns: &[&str]) -> Option<String> {
    let directive = directive?.trim().to_lowercase();
    let mut tokens = directive.split_whitespace();

    let column = tokens.next()?;
    if !allowed_columns.contains(&column) {
        return None;
    }

    let direction = match tokens.next() {
        Some("desc") => "DESC",
        _ => "ASC",
    };

    Some(format!(" ORDER BY {column} {direction}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str =
        "SELECT id, meeting_id, name, number, visible, advertised_start_time FROM races";

    const COLUMNS: &[&str] = &[
        "id",
        "meeting_id",
        "name",
        "number",
        "visible",
        "advertised_start_time",
    ];

    fn criteria<'a>(
        group_ids: &'a [i64],
        show_hidden: Option<bool>,
        order_by: Option<&'a str>,
    ) -> Criteria<'a> {
        Criteria {
            group_column: "meeting_id",
            group_ids,
            show_hidden,
            order_by,
        }
    }

    #[test]
    fn absent_criteria_leave_base_untouched() {
        let (query, args) = compile(BASE, None, COLUMNS);

        assert_eq!(query, BASE);
        assert!(args.is_empty());
    }

    #[test]
    fn empty_criteria_only_append_default_order() {
        let c = criteria(&[], None, None);
        let (query, args) = compile(BASE, Some(&c), COLUMNS);

        assert_eq!(
            query,
            format!("{BASE} ORDER BY advertised_start_time ASC")
        );
        assert!(args.is_empty());
    }

    #[test]
    fn show_hidden_true_behaves_like_unset() {
        let unset = criteria(&[], None, None);
        let shown = criteria(&[], Some(true), None);

        assert_eq!(
            compile(BASE, Some(&unset), COLUMNS),
            compile(BASE, Some(&shown), COLUMNS)
        );
    }

    #[test]
    fn grouping_ids_produce_one_placeholder_each() {
        let ids = [5, 1, 9];
        let c = criteria(&ids, None, None);
        let (query, args) = compile(BASE, Some(&c), COLUMNS);

        assert_eq!(
            query,
            format!("{BASE} WHERE meeting_id IN (?,?,?) ORDER BY advertised_start_time ASC")
        );
        assert_eq!(args, vec![5, 1, 9]);
    }

    #[test]
    fn show_hidden_false_appends_visibility_predicate() {
        let c = criteria(&[], Some(false), None);
        let (query, args) = compile(BASE, Some(&c), COLUMNS);

        assert_eq!(
            query,
            format!("{BASE} WHERE visible = 1 ORDER BY advertised_start_time ASC")
        );
        assert!(args.is_empty());
    }

    #[test]
    fn grouping_and_visibility_combine_with_and() {
        let ids = [1, 2];
        let c = criteria(&ids, Some(false), None);
        let (query, args) = compile(BASE, Some(&c), COLUMNS);

        assert_eq!(
            query,
            format!(
                "{BASE} WHERE meeting_id IN (?,?) AND visible = 1 \
                 ORDER BY advertised_start_time ASC"
            )
        );
        assert_eq!(args, vec![1, 2]);
    }

    #[test]
    fn explicit_ordering_replaces_default() {
        let c = criteria(&[], None, Some("name desc"));
        let (query, args) = compile(BASE, Some(&c), COLUMNS);

        assert_eq!(query, format!("{BASE} ORDER BY name DESC"));
        assert!(args.is_empty());
    }

    #[test]
    fn ordering_direction_defaults_to_asc() {
        let c = criteria(&[], None, Some("number"));
        let (query, _) = compile(BASE, Some(&c), COLUMNS);

        assert_eq!(query, format!("{BASE} ORDER BY number ASC"));
    }

    #[test]
    fn unknown_direction_token_defaults_to_asc() {
        let c = criteria(&[], None, Some("number sideways"));
        let (query, _) = compile(BASE, Some(&c), COLUMNS);

        assert_eq!(query, format!("{BASE} ORDER BY number ASC"));
    }

    #[test]
    fn ordering_directive_is_normalized() {
        let c = criteria(&[], None, Some("  NAME   DESC "));
        let (query, _) = compile(BASE, Some(&c), COLUMNS);

        assert_eq!(query, format!("{BASE} ORDER BY name DESC"));
    }

    #[test]
    fn unknown_column_falls_back_to_default_order() {
        let unknown = criteria(&[], None, Some("password; DROP TABLE races"));
        let none = criteria(&[], None, None);

        assert_eq!(
            compile(BASE, Some(&unknown), COLUMNS),
            compile(BASE, Some(&none), COLUMNS)
        );
    }

    #[test]
    fn empty_ordering_directive_falls_back_to_default_order() {
        let c = criteria(&[], None, Some("   "));
        let (query, _) = compile(BASE, Some(&c), COLUMNS);

        assert_eq!(
            query,
            format!("{BASE} ORDER BY advertised_start_time ASC")
        );
    }

    #[test]
    fn combined_filter_matches_expected_query_exactly() {
        let ids = [1, 2];
        let c = criteria(&ids, Some(false), None);
        let (query, args) = compile("SELECT * FROM races", Some(&c), COLUMNS);

        assert_eq!(
            query,
            "SELECT * FROM races WHERE meeting_id IN (?,?) AND visible = 1 \
             ORDER BY advertised_start_time ASC"
        );
        assert_eq!(args, vec![1, 2]);
    }
}
