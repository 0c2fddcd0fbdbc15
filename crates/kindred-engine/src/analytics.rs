//! Per-generation statistics over a computed layout

use crate::layout::{TreeLayout, TreeLayoutNode};
use chrono::NaiveDate;
use kindred_domain::PersonId;
use serde::{Deserialize, Serialize};

/// Statistics for one chart row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Generation level of the row
    pub generation: i32,

    /// Vertical position shared by the row
    pub y: f64,

    /// Number of people in the row
    pub member_count: usize,

    /// Member with the earliest parseable birth date
    pub oldest: Option<PersonId>,

    /// Member with the latest parseable birth date
    pub youngest: Option<PersonId>,
}

/// Statistics for every row, top row first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationAnalytics {
    /// One entry per row
    pub rows: Vec<GenerationSummary>,
}

impl GenerationAnalytics {
    /// Total people across all rows
    pub fn total_members(&self) -> usize {
        self.rows.iter().map(|row| row.member_count).sum()
    }

    /// Summary for a generation level
    pub fn generation(&self, generation: i32) -> Option<&GenerationSummary> {
        self.rows.iter().find(|row| row.generation == generation)
    }
}

/// Group the layout's nodes by row and summarize each row
///
/// Missing or unparseable birth dates are left out of the oldest/youngest
/// comparison. On equal dates the member placed further left wins.
pub fn generation_analytics(layout: &TreeLayout) -> GenerationAnalytics {
    let mut grouped: Vec<(f64, Vec<&TreeLayoutNode>)> = Vec::new();
    for node in &layout.nodes {
        match grouped.iter_mut().find(|(y, _)| *y == node.y) {
            Some((_, members)) => members.push(node),
            None => grouped.push((node.y, vec![node])),
        }
    }
    grouped.sort_by(|a, b| a.0.total_cmp(&b.0));

    let rows = grouped
        .into_iter()
        .map(|(y, members)| summarize(y, &members))
        .collect();

    GenerationAnalytics { rows }
}

fn summarize(y: f64, members: &[&TreeLayoutNode]) -> GenerationSummary {
    let mut members: Vec<&TreeLayoutNode> = members.to_vec();
    members.sort_by(|a, b| a.x.total_cmp(&b.x));

    let dated: Vec<(NaiveDate, &PersonId)> = members
        .iter()
        .filter_map(|node| node.person.parsed_birth_date().map(|date| (date, &node.person.id)))
        .collect();

    let mut oldest: Option<(NaiveDate, &PersonId)> = None;
    let mut youngest: Option<(NaiveDate, &PersonId)> = None;
    for &(date, id) in &dated {
        if oldest.is_none_or(|(best, _)| date < best) {
            oldest = Some((date, id));
        }
        if youngest.is_none_or(|(best, _)| date > best) {
            youngest = Some((date, id));
        }
    }

    GenerationSummary {
        generation: members.first().map(|node| node.generation).unwrap_or_default(),
        y,
        member_count: members.len(),
        oldest: oldest.map(|(_, id)| id.clone()),
        youngest: youngest.map(|(_, id)| id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_domain::Person;

    fn node(person: Person, generation: i32, x: f64, y: f64) -> TreeLayoutNode {
        TreeLayoutNode {
            person,
            generation,
            x,
            y,
        }
    }

    fn chart(nodes: Vec<TreeLayoutNode>) -> TreeLayout {
        TreeLayout {
            nodes,
            connections: Vec::new(),
            sibships: Vec::new(),
            width: 500.0,
            height: 500.0,
        }
    }

    #[test]
    fn test_rows_grouped_by_y() {
        let layout = chart(vec![
            node(Person::new("kid", "Amy", "Lee").with_birth_date("2010-04-01"), 0, 100.0, 300.0),
            node(Person::new("mum", "Mary", "Lee").with_birth_date("1980-01-01"), 1, 100.0, 100.0),
            node(Person::new("dad", "Frank", "Lee").with_birth_date("1978-06-30"), 1, 300.0, 100.0),
        ]);
        let analytics = generation_analytics(&layout);

        assert_eq!(analytics.rows.len(), 2);
        assert_eq!(analytics.total_members(), 3);

        let parents = &analytics.rows[0];
        assert_eq!(parents.generation, 1);
        assert_eq!(parents.member_count, 2);
        assert_eq!(parents.oldest, Some(PersonId::from("dad")));
        assert_eq!(parents.youngest, Some(PersonId::from("mum")));

        let kids = analytics.generation(0).unwrap();
        assert_eq!(kids.oldest, Some(PersonId::from("kid")));
        assert_eq!(kids.youngest, Some(PersonId::from("kid")));
    }

    #[test]
    fn test_undated_members_never_oldest() {
        let layout = chart(vec![
            node(Person::new("a", "Ann", "Lee"), 0, 100.0, 100.0),
            node(Person::new("b", "Bea", "Lee").with_birth_date("sometime in 1950"), 0, 200.0, 100.0),
            node(Person::new("c", "Cy", "Lee").with_birth_date("1990-02-03"), 0, 300.0, 100.0),
        ]);
        let row = &generation_analytics(&layout).rows[0];
        assert_eq!(row.member_count, 3);
        assert_eq!(row.oldest, Some(PersonId::from("c")));
        assert_eq!(row.youngest, Some(PersonId::from("c")));
    }

    #[test]
    fn test_row_without_dates() {
        let layout = chart(vec![node(Person::new("a", "Ann", "Lee"), 0, 100.0, 100.0)]);
        let row = &generation_analytics(&layout).rows[0];
        assert_eq!(row.oldest, None);
        assert_eq!(row.youngest, None);
    }

    #[test]
    fn test_equal_dates_prefer_leftmost() {
        let layout = chart(vec![
            node(Person::new("right", "Rae", "Lee").with_birth_date("1990-01-01"), 0, 300.0, 100.0),
            node(Person::new("left", "Lou", "Lee").with_birth_date("1990-01-01"), 0, 100.0, 100.0),
        ]);
        let row = &generation_analytics(&layout).rows[0];
        assert_eq!(row.oldest, Some(PersonId::from("left")));
        assert_eq!(row.youngest, Some(PersonId::from("left")));
    }

    #[test]
    fn test_empty_layout() {
        let analytics = generation_analytics(&chart(Vec::new()));
        assert!(analytics.rows.is_empty());
        assert_eq!(analytics.total_members(), 0);
    }
}
