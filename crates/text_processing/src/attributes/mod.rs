//! Attribute Aggregation
//!
//! Collapses the raw `(attribute, value)` rows the ERP returns per product
//! template into an ordered, deduplicated map for display.
//!
//! Ordering: labels from the preferred list come first, in list order; every
//! other label follows in lexicographic order.

mod map;

pub use map::AttributeMap;

use std::collections::HashMap;

use chat_bridge_core::AttributeValue;

/// Aggregate attribute pairs into an ordered map
///
/// Pairs with a missing or blank label or value are dropped. Repeated values
/// under a label keep their first occurrence.
///
/// # Example
/// ```
/// use chat_bridge_core::AttributeValue;
/// use chat_bridge_text_processing::aggregate;
///
/// let values = vec![
///     AttributeValue::new("Fabric", "Cotton"),
///     AttributeValue::new("Color", "Red"),
///     AttributeValue::new("Color", "Red"),
///     AttributeValue::new("Color", "Blue"),
/// ];
/// let map = aggregate(&values, &["Size", "Color"]);
///
/// assert_eq!(map.labels().collect::<Vec<_>>(), vec!["Color", "Fabric"]);
/// assert_eq!(map.get("Color").unwrap(), ["Red", "Blue"]);
/// ```
pub fn aggregate<S: AsRef<str>>(values: &[AttributeValue], preferred_order: &[S]) -> AttributeMap {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut dropped = 0usize;

    for pair in values {
        let (Some(label), Some(value)) = (pair.label(), pair.value()) else {
            dropped += 1;
            continue;
        };

        let slot = match index.get(label) {
            Some(&slot) => slot,
            None => {
                index.insert(label.to_string(), groups.len());
                groups.push((label.to_string(), Vec::new()));
                groups.len() - 1
            },
        };

        let group = &mut groups[slot].1;
        if !group.iter().any(|existing| existing == value) {
            group.push(value.to_string());
        }
    }

    if dropped > 0 {
        tracing::trace!(dropped, "Dropped incomplete attribute pairs");
    }

    let mut pending: Vec<Option<(String, Vec<String>)>> = groups.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(pending.len());

    for preferred in preferred_order {
        let preferred: &str = preferred.as_ref();
        if let Some(&slot) = index.get(preferred) {
            // take() leaves None behind, so repeated preferred labels emit once
            if let Some(entry) = pending[slot].take() {
                ordered.push(entry);
            }
        }
    }

    let mut rest: Vec<(String, Vec<String>)> = pending.into_iter().flatten().collect();
    rest.sort_by(|a, b| a.0.cmp(&b.0));
    ordered.extend(rest);

    AttributeMap::from_ordered(ordered)
}

/// Aggregator bound to a configured preferred label order
#[derive(Debug, Clone, Default)]
pub struct AttributeAggregator {
    preferred_order: Vec<String>,
}

impl AttributeAggregator {
    pub fn new(preferred_order: Vec<String>) -> Self {
        Self { preferred_order }
    }

    pub fn preferred_order(&self) -> &[String] {
        &self.preferred_order
    }

    pub fn aggregate(&self, values: &[AttributeValue]) -> AttributeMap {
        aggregate(values, self.preferred_order.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<AttributeValue> {
        raw.iter().map(|&(a, v)| AttributeValue::new(a, v)).collect()
    }

    #[test]
    fn test_dedup_within_label() {
        let map = aggregate::<&str>(
            &pairs(&[("Color", "Red"), ("Color", "Red"), ("Color", "Blue")]),
            &[],
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Color").unwrap(), ["Red", "Blue"]);
    }

    #[test]
    fn test_preferred_then_lexicographic() {
        let map = aggregate(
            &pairs(&[("Color", "Red"), ("Fabric", "Cotton")]),
            &["Size", "Color"],
        );
        assert_eq!(map.labels().collect::<Vec<_>>(), vec!["Color", "Fabric"]);
    }

    #[test]
    fn test_preferred_order_overrides_first_seen() {
        let map = aggregate(
            &pairs(&[
                ("Manga", "Larga"),
                ("Color", "Azul"),
                ("Talla", "S"),
                ("Cuello", "V"),
                ("Talla", "M"),
            ]),
            &["Talla", "Color"],
        );
        assert_eq!(
            map.labels().collect::<Vec<_>>(),
            vec!["Talla", "Color", "Cuello", "Manga"]
        );
        assert_eq!(map.get("Talla").unwrap(), ["S", "M"]);
    }

    #[test]
    fn test_repeated_preferred_label_emitted_once() {
        let map = aggregate(&pairs(&[("Color", "Red")]), &["Color", "Color"]);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_incomplete_pairs_dropped() {
        let values = vec![
            AttributeValue {
                attribute_name: None,
                value_name: Some("Red".into()),
            },
            AttributeValue {
                attribute_name: Some("Color".into()),
                value_name: None,
            },
            AttributeValue::new("", "Red"),
            AttributeValue::new("Color", "  "),
            AttributeValue::new("Color", "Green"),
        ];
        let map = aggregate::<&str>(&values, &[]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Color").unwrap(), ["Green"]);
    }

    #[test]
    fn test_empty_input() {
        let map = aggregate(&[], &["Size"]);
        assert!(map.is_empty());
        assert_eq!(serde_json::to_string(&map).unwrap(), "{}");
    }

    #[test]
    fn test_reaggregating_output_is_stable() {
        let preferred = ["Size", "Color"];
        let values = pairs(&[
            ("Fabric", "Wool"),
            ("Color", "Red"),
            ("Size", "L"),
            ("Color", "Red"),
            ("Brand", "Acme"),
            ("Size", "S"),
        ]);

        let first = aggregate(&values, &preferred);
        let second = aggregate(&first.to_values(), &preferred);
        assert_eq!(first, second);
        assert_eq!(aggregate(&values, &preferred), first);
    }

    #[test]
    fn test_serializes_in_display_order() {
        let map = aggregate(
            &pairs(&[("Fabric", "Cotton"), ("Brand", "Acme"), ("Color", "Red")]),
            &["Color"],
        );
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"Color":["Red"],"Brand":["Acme"],"Fabric":["Cotton"]}"#
        );
    }

    #[test]
    fn test_aggregator_uses_configured_order() {
        let aggregator = AttributeAggregator::new(vec!["Talla".into()]);
        let map = aggregator.aggregate(&pairs(&[("Color", "Azul"), ("Talla", "10")]));
        assert_eq!(map.labels().collect::<Vec<_>>(), vec!["Talla", "Color"]);
        assert_eq!(aggregator.preferred_order(), ["Talla"]);
    }
}
