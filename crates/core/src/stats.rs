//! Dashboard aggregation helpers.

use serde::Serialize;

/// Product count for one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: i64,
}

/// Merge registered product categories with per-label product counts.
///
/// Category labels on products are free text, so the two sets drift: a
/// registered category may have no products yet, and products may carry a
/// label that was never registered. Every registered category appears in
/// the result (zero when unused), in the order given; labels seen only on
/// products are appended as ad-hoc buckets in the order counted. Each
/// distinct label appears exactly once.
pub fn merge_category_counts(
    registered: &[String],
    counted: &[(String, i64)],
) -> Vec<CategoryCount> {
    let mut out: Vec<CategoryCount> = registered
        .iter()
        .map(|name| CategoryCount {
            name: name.clone(),
            count: counted
                .iter()
                .find(|(label, _)| label == name)
                .map(|(_, n)| *n)
                .unwrap_or(0),
        })
        .collect();

    for (label, count) in counted {
        if !registered.contains(label) {
            out.push(CategoryCount {
                name: label.clone(),
                count: *count,
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(counts: &[CategoryCount]) -> Vec<&str> {
        counts.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn registered_categories_appear_even_without_products() {
        let registered = vec!["Radar".to_string(), "Sonar".to_string()];
        let merged = merge_category_counts(&registered, &[]);
        assert_eq!(names(&merged), ["Radar", "Sonar"]);
        assert!(merged.iter().all(|c| c.count == 0));
    }

    #[test]
    fn unregistered_labels_become_ad_hoc_buckets() {
        let registered = vec!["Radar".to_string()];
        let counted = vec![("Radar".to_string(), 2), ("GPS".to_string(), 1)];
        let merged = merge_category_counts(&registered, &counted);
        assert_eq!(names(&merged), ["Radar", "GPS"]);
        assert_eq!(merged[0].count, 2);
        assert_eq!(merged[1].count, 1);
    }

    #[test]
    fn every_distinct_label_appears_exactly_once() {
        let registered = vec!["Radar".to_string(), "Sonar".to_string()];
        let counted = vec![
            ("Sonar".to_string(), 3),
            ("GPS".to_string(), 1),
            ("AIS".to_string(), 4),
        ];
        let merged = merge_category_counts(&registered, &counted);
        assert_eq!(names(&merged), ["Radar", "Sonar", "GPS", "AIS"]);
        let total: i64 = merged.iter().map(|c| c.count).sum();
        assert_eq!(total, 8);
    }
}
