//! Search and facet filtering for the government scheme browser.

use crate::model::Scheme;

pub const ALL: &str = "All";

#[derive(Clone, PartialEq, Debug)]
pub struct FilterState {
    pub search_term: String,
    pub selected_category: String,
    pub selected_type: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_category: ALL.to_string(),
            selected_type: ALL.to_string(),
        }
    }
}

impl FilterState {
    pub fn with_search(self, search_term: String) -> Self {
        Self {
            search_term,
            ..self
        }
    }

    pub fn with_category(self, selected_category: String) -> Self {
        Self {
            selected_category,
            ..self
        }
    }

    pub fn with_type(self, selected_type: String) -> Self {
        Self {
            selected_type,
            ..self
        }
    }

    pub fn matches(&self, scheme: &Scheme) -> bool {
        let term = self.search_term.to_lowercase();
        let matches_search = term.is_empty()
            || scheme.name.to_lowercase().contains(&term)
            || scheme.description.to_lowercase().contains(&term);

        matches_search
            && facet_matches(&self.selected_category, &scheme.category)
            && facet_matches(&self.selected_type, &scheme.kind)
    }
}

fn facet_matches(selected: &str, value: &str) -> bool {
    selected == ALL || selected == value
}

/// Schemes passing every filter, in their original order.
pub fn filter_schemes(schemes: &[Scheme], filter: &FilterState) -> Vec<Scheme> {
    schemes
        .iter()
        .filter(|scheme| filter.matches(scheme))
        .cloned()
        .collect()
}

/// Dropdown options: "All" then each distinct value in first-seen order.
pub fn facet_options<F>(schemes: &[Scheme], key: F) -> Vec<String>
where
    F: Fn(&Scheme) -> &str,
{
    let mut options = vec![ALL.to_string()];
    for scheme in schemes {
        let value = key(scheme);
        if !options.iter().skip(1).any(|seen| seen == value) {
            options.push(value.to_string());
        }
    }
    options
}

pub fn category_options(schemes: &[Scheme]) -> Vec<String> {
    facet_options(schemes, |s| s.category.as_str())
}

pub fn type_options(schemes: &[Scheme]) -> Vec<String> {
    facet_options(schemes, |s| s.kind.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use proptest::test_runner::Config;

    fn scheme(name: &str, description: &str, category: &str, kind: &str) -> Scheme {
        Scheme {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            kind: kind.to_string(),
            link: format!("https://example.org/{}", name.len()),
            icon: None,
        }
    }

    fn catalogue() -> Vec<Scheme> {
        vec![
            scheme("Pradhan Mantri MUDRA Yojana", "Collateral-free loans for grocery shops", "Finance", "Retail"),
            scheme("Stand-Up India Scheme", "Loans for women entrepreneurs", "Women-focused", "Retail"),
            scheme("PMFME", "Support for local food processing", "Food/Agri", "Food Retail"),
            scheme("NSIC Subsidy", "Marketing and credit support", "Finance", "Retail"),
            scheme("Digital MSME Scheme", "Cloud-based solutions", "Technology", "Retail Tech"),
        ]
    }

    #[test]
    fn default_filter_keeps_everything_in_order() {
        let all = catalogue();
        assert_eq!(filter_schemes(&all, &FilterState::default()), all);
    }

    #[test]
    fn search_is_case_insensitive_over_name_or_description() {
        let all = catalogue();
        let filter = FilterState::default().with_search("LOANS".to_string());
        let names: Vec<_> = filter_schemes(&all, &filter)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Pradhan Mantri MUDRA Yojana", "Stand-Up India Scheme"]);

        let by_name = FilterState::default().with_search("msme".to_string());
        assert_eq!(filter_schemes(&all, &by_name).len(), 1);
    }

    #[test]
    fn facets_combine_with_search() {
        let all = catalogue();
        let filter = FilterState::default()
            .with_category("Finance".to_string())
            .with_type("Retail".to_string())
            .with_search("credit".to_string());
        let hits = filter_schemes(&all, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "NSIC Subsidy");
    }

    #[test]
    fn stale_facet_yields_nothing() {
        let filter = FilterState::default().with_category("Operations".to_string());
        assert!(filter_schemes(&catalogue(), &filter).is_empty());
    }

    #[test]
    fn empty_source_yields_nothing() {
        assert!(filter_schemes(&[], &FilterState::default()).is_empty());
        assert_eq!(category_options(&[]), vec!["All".to_string()]);
    }

    #[test]
    fn options_start_with_all_and_dedupe_in_first_seen_order() {
        let all = catalogue();
        assert_eq!(
            category_options(&all),
            vec!["All", "Finance", "Women-focused", "Food/Agri", "Technology"]
        );
        assert_eq!(type_options(&all), vec!["All", "Retail", "Food Retail", "Retail Tech"]);
    }

    fn arb_scheme() -> impl Strategy<Value = Scheme> {
        (
            "[a-zA-Z ]{0,12}",
            "[a-zA-Z ]{0,20}",
            prop::sample::select(vec!["Finance", "Technology", "Marketing"]),
            prop::sample::select(vec!["Retail", "Retail Tech"]),
        )
            .prop_map(|(name, description, category, kind)| {
                scheme(&name, &description, category, kind)
            })
    }

    fn arb_filter() -> impl Strategy<Value = FilterState> {
        (
            "[a-zA-Z]{0,3}",
            prop::sample::select(vec!["All", "Finance", "Technology", "Operations"]),
            prop::sample::select(vec!["All", "Retail", "Retail Tech"]),
        )
            .prop_map(|(search_term, category, kind)| FilterState {
                search_term,
                selected_category: category.to_string(),
                selected_type: kind.to_string(),
            })
    }

    proptest! {
        #![proptest_config(Config::with_cases(128))]
        #[test]
        fn filtering_is_idempotent(
            schemes in prop::collection::vec(arb_scheme(), 0..24),
            filter in arb_filter(),
        ) {
            let once = filter_schemes(&schemes, &filter);
            let twice = filter_schemes(&once, &filter);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn filtered_result_is_an_ordered_subsequence(
            schemes in prop::collection::vec(arb_scheme(), 0..24),
            filter in arb_filter(),
        ) {
            let hits = filter_schemes(&schemes, &filter);
            let mut rest = schemes.iter();
            for hit in &hits {
                prop_assert!(rest.any(|s| s == hit));
            }
        }

        #[test]
        fn options_cover_every_value_once(
            schemes in prop::collection::vec(arb_scheme(), 0..24),
        ) {
            let options = category_options(&schemes);
            prop_assert_eq!(options[0].as_str(), ALL);
            for s in &schemes {
                prop_assert_eq!(options.iter().filter(|o| **o == s.category).count(), 1);
            }
        }
    }
}
