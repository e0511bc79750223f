//! Flat LEFT JOIN rows to nested parent/child records.
//!
//! A one-to-many `LEFT JOIN` returns the parent columns once per matching
//! child, or a single row with null child columns when the parent has no
//! children. [`aggregate`] folds such a row sequence back into one record per
//! parent, each owning its children in input order.
//!
//! Rows are decoded into typed structs before they get here, so the
//! aggregator never looks up columns by name and never casts values. Each
//! join shape implements [`JoinRow`] to say which fields form the parent key,
//! the parent scalars and the child projection.

use std::hash::Hash;

use indexmap::IndexMap;

/// A parent record that owns an ordered collection of children.
pub trait HasChildren {
    type Child;

    /// The parent's child collection. Starts empty and is appended to in
    /// row order.
    fn children_mut(&mut self) -> &mut Vec<Self::Child>;
}

/// One row of a one-to-many `LEFT JOIN`, decoded into typed fields.
pub trait JoinRow {
    /// Identifies which parent the row belongs to. Never null.
    type Key: Hash + Eq;
    type Child;
    type Parent: HasChildren<Child = Self::Child>;

    fn parent_key(&self) -> Self::Key;

    /// Build the parent record, with an empty child collection, from this
    /// row's parent columns. Only called for the first row seen per key.
    fn to_parent(&self) -> Self::Parent;

    /// The child carried by this row, or `None` when the child-id column is
    /// null (the parent has no matching children).
    fn into_child(self) -> Option<Self::Child>;
}

/// Group joined rows by parent key.
///
/// - One parent per distinct key, in first-seen order.
/// - Parent scalars come from the first row for that key; later rows only
///   contribute children.
/// - Children keep the relative order of their rows.
/// - Rows without a child still produce their parent, so a childless parent
///   ends up with an empty collection.
pub fn aggregate<R, I>(rows: I) -> Vec<R::Parent>
where
    R: JoinRow,
    I: IntoIterator<Item = R>,
{
    let mut parents: IndexMap<R::Key, R::Parent> = IndexMap::new();

    for row in rows {
        let parent = parents
            .entry(row.parent_key())
            .or_insert_with(|| row.to_parent());
        if let Some(child) = row.into_child() {
            parent.children_mut().push(child);
        }
    }

    parents.into_values().collect()
}

/// Aggregate the rows of a single-parent lookup.
///
/// Returns `None` when there are no rows, i.e. the parent does not exist.
/// Callers decide whether that is a not-found failure.
pub fn aggregate_one<R, I>(rows: I) -> Option<R::Parent>
where
    R: JoinRow,
    I: IntoIterator<Item = R>,
{
    aggregate(rows).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DbId, Timestamp};
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Tip {
        id: DbId,
        title: String,
        category_id: DbId,
        last_updated: Option<Timestamp>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Category {
        id: DbId,
        name: String,
        tips: Vec<Tip>,
    }

    impl HasChildren for Category {
        type Child = Tip;

        fn children_mut(&mut self) -> &mut Vec<Tip> {
            &mut self.tips
        }
    }

    #[derive(Debug, Clone)]
    struct Row {
        category_id: DbId,
        category_name: String,
        tip_id: Option<DbId>,
        tip_title: Option<String>,
        tip_last_updated: Option<Timestamp>,
    }

    impl JoinRow for Row {
        type Key = DbId;
        type Child = Tip;
        type Parent = Category;

        fn parent_key(&self) -> DbId {
            self.category_id
        }

        fn to_parent(&self) -> Category {
            Category {
                id: self.category_id,
                name: self.category_name.clone(),
                tips: Vec::new(),
            }
        }

        fn into_child(self) -> Option<Tip> {
            let category_id = self.category_id;
            let title = self.tip_title;
            let last_updated = self.tip_last_updated;
            self.tip_id.map(|id| Tip {
                id,
                title: title.unwrap_or_default(),
                category_id,
                last_updated,
            })
        }
    }

    fn row(parent: DbId, name: &str, child: Option<(DbId, &str)>) -> Row {
        Row {
            category_id: parent,
            category_name: name.to_string(),
            tip_id: child.map(|(id, _)| id),
            tip_title: child.map(|(_, title)| title.to_string()),
            tip_last_updated: None,
        }
    }

    fn child_ids(category: &Category) -> Vec<DbId> {
        category.tips.iter().map(|t| t.id).collect()
    }

    #[test]
    fn one_parent_many_children() {
        let rows = vec![
            row(1, "Plastic", Some((10, "Rinse it"))),
            row(1, "Plastic", Some((11, "Flatten"))),
        ];

        let result = aggregate(rows);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
        assert_eq!(result[0].name, "Plastic");
        assert_eq!(child_ids(&result[0]), vec![10, 11]);
        assert_eq!(result[0].tips[0].title, "Rinse it");
        assert_eq!(result[0].tips[1].title, "Flatten");
        assert!(result[0].tips.iter().all(|t| t.category_id == 1));
    }

    #[test]
    fn parent_without_children_has_empty_collection() {
        let result = aggregate(vec![row(2, "Glass", None)]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
        assert_eq!(result[0].name, "Glass");
        assert!(result[0].tips.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let result = aggregate(Vec::<Row>::new());
        assert!(result.is_empty());
    }

    #[test]
    fn single_lookup_returns_parent_or_none() {
        let found = aggregate_one(vec![row(2, "Glass", None)]);
        assert_eq!(
            found,
            Some(Category {
                id: 2,
                name: "Glass".to_string(),
                tips: vec![],
            })
        );

        let missing = aggregate_one(Vec::<Row>::new());
        assert!(missing.is_none());
    }

    #[test]
    fn interleaved_parents_keep_first_seen_order() {
        let rows = vec![
            row(1, "Plastic", Some((10, "Rinse it"))),
            row(2, "Glass", Some((20, "Remove lids"))),
            row(1, "Plastic", Some((11, "Flatten"))),
        ];

        let result = aggregate(rows);

        let ids: Vec<DbId> = result.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(child_ids(&result[0]), vec![10, 11]);
        assert_eq!(child_ids(&result[1]), vec![20]);
    }

    #[test]
    fn children_follow_row_order_not_id_order() {
        let rows = vec![
            row(5, "Paper", Some((30, "c"))),
            row(5, "Paper", Some((12, "a"))),
            row(5, "Paper", Some((21, "b"))),
        ];

        let result = aggregate(rows);
        assert_eq!(child_ids(&result[0]), vec![30, 12, 21]);
    }

    #[test]
    fn distinct_parent_count_matches_distinct_keys() {
        let keys = [3, 1, 3, 2, 1, 4, 4, 4];
        let rows: Vec<Row> = keys
            .iter()
            .enumerate()
            .map(|(i, &k)| row(k, "p", Some((i as DbId, "t"))))
            .collect();

        let result = aggregate(rows);

        let ids: Vec<DbId> = result.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
        let total_children: usize = result.iter().map(|c| c.tips.len()).sum();
        assert_eq!(total_children, keys.len());
    }

    #[test]
    fn null_child_rows_never_produce_children() {
        let rows = vec![
            row(1, "Plastic", None),
            row(1, "Plastic", Some((10, "Rinse it"))),
            row(1, "Plastic", None),
        ];

        let result = aggregate(rows);

        assert_eq!(result.len(), 1);
        assert_eq!(child_ids(&result[0]), vec![10]);
    }

    #[test]
    fn first_row_binds_parent_scalars() {
        let rows = vec![
            row(1, "first", Some((10, "a"))),
            row(1, "second", Some((11, "b"))),
        ];

        let result = aggregate(rows);
        assert_eq!(result[0].name, "first");
    }

    #[test]
    fn reordering_identical_parent_rows_keeps_scalars() {
        let forward = vec![
            row(7, "Metal", Some((1, "a"))),
            row(7, "Metal", Some((2, "b"))),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = aggregate(forward);
        let b = aggregate(reversed);

        assert_eq!(a[0].id, b[0].id);
        assert_eq!(a[0].name, b[0].name);
        assert_eq!(child_ids(&a[0]), vec![1, 2]);
        assert_eq!(child_ids(&b[0]), vec![2, 1]);
    }

    #[test]
    fn child_timestamp_is_carried_or_left_empty() {
        let ts = chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        let mut with_ts = row(1, "Plastic", Some((10, "Rinse it")));
        with_ts.tip_last_updated = Some(ts);
        let without_ts = row(1, "Plastic", Some((11, "Flatten")));

        let result = aggregate(vec![with_ts, without_ts]);

        assert_eq!(result[0].tips[0].last_updated, Some(ts));
        assert_eq!(result[0].tips[1].last_updated, None);
    }
}
