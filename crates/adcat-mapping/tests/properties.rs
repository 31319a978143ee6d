//! Property tests for the table laws.

use std::collections::{BTreeMap, BTreeSet};

use adcat_mapping::CategoryMapper;
use adcat_model::{ContentCategory, GENERIC_SOURCE_CODE, SourceCode, TaxonomyCategory};
use proptest::prelude::*;

fn pairs() -> impl Strategy<Value = Vec<(u32, SourceCode)>> {
    prop::collection::vec((1u32..=26, 0u32..40), 0..60)
}

fn resource(pairs: &[(u32, SourceCode)]) -> String {
    pairs
        .iter()
        .map(|(category, code)| format!("{category}|cat {category}|{code}|src {code}\n"))
        .collect()
}

type Forward = BTreeMap<ContentCategory, BTreeSet<SourceCode>>;

fn expected_forward(pairs: &[(u32, SourceCode)]) -> Forward {
    let mut forward = Forward::new();
    for (category, code) in pairs {
        let category = ContentCategory::from_code(*category).unwrap();
        forward.entry(category).or_default().insert(*code);
    }
    forward
}

proptest! {
    #[test]
    fn destination_lookup_matches_records(pairs in pairs()) {
        let mapper = CategoryMapper::<ContentCategory>::parse(&resource(&pairs));
        for code in 0..45 {
            let expected: BTreeSet<ContentCategory> = pairs
                .iter()
                .filter(|(_, c)| *c == code)
                .map(|(category, _)| ContentCategory::from_code(*category).unwrap())
                .collect();
            prop_assert_eq!(mapper.map_to_destination(code), &expected);
        }
    }

    #[test]
    fn source_lookup_follows_collapse_law(pairs in pairs()) {
        let mapper = CategoryMapper::<ContentCategory>::parse(&resource(&pairs));
        let forward = expected_forward(&pairs);
        for category in ContentCategory::all() {
            let raw = forward.get(category).cloned().unwrap_or_default();
            prop_assert_eq!(mapper.raw_sources(*category), &raw);

            let collapsed = mapper.map_to_source(*category);
            if raw.len() > 1 && raw.contains(&GENERIC_SOURCE_CODE) {
                prop_assert_eq!(collapsed, &BTreeSet::from([GENERIC_SOURCE_CODE]));
            } else {
                prop_assert_eq!(collapsed, &raw);
            }
        }
    }

    #[test]
    fn inverse_is_consistent_with_forward(pairs in pairs()) {
        let mapper = CategoryMapper::<ContentCategory>::parse(&resource(&pairs));
        for category in mapper.categories() {
            for code in mapper.raw_sources(category) {
                prop_assert!(mapper.map_to_destination(*code).contains(&category));
            }
        }
        if let Some(max) = mapper.max_source_code() {
            for code in 0..=max {
                for category in mapper.map_to_destination(code) {
                    prop_assert!(mapper.raw_sources(*category).contains(&code));
                }
            }
        }
    }

    #[test]
    fn sparse_codes_round_trip(
        pairs in prop::collection::vec((1u32..=26, any::<SourceCode>()), 0..30),
    ) {
        let mapper = CategoryMapper::<ContentCategory>::parse(&resource(&pairs));
        let forward = expected_forward(&pairs);
        for (category, code) in &pairs {
            let category = ContentCategory::from_code(*category).unwrap();
            prop_assert!(mapper.map_to_destination(*code).contains(&category));
            prop_assert_eq!(mapper.description_for_source(*code), format!("src {code}"));
        }
        for category in mapper.categories() {
            prop_assert_eq!(mapper.raw_sources(category), &forward[&category]);
        }
        let codes: BTreeSet<SourceCode> = pairs.iter().map(|(_, code)| *code).collect();
        prop_assert_eq!(mapper.source_codes().collect::<BTreeSet<_>>(), codes);
    }

    #[test]
    fn source_descriptions_beyond_range_are_empty(pairs in pairs(), extra in 0u32..1000) {
        let mapper = CategoryMapper::<ContentCategory>::parse(&resource(&pairs));
        let beyond = mapper.max_source_code().map_or(0, |max| max + 1) + extra;
        prop_assert_eq!(mapper.description_for_source(beyond), "");
    }

    #[test]
    fn batch_lookups_ignore_order(
        pairs in pairs(),
        codes in prop::collection::vec(0u32..45, 0..20).prop_shuffle(),
        categories in prop::sample::subsequence(ContentCategory::all().to_vec(), 0..26)
            .prop_shuffle(),
    ) {
        let mapper = CategoryMapper::<ContentCategory>::parse(&resource(&pairs));

        let mut reversed_codes = codes.clone();
        reversed_codes.reverse();
        let forward = mapper.map_many_to_destination(codes.iter().copied(), None);
        let backward = mapper.map_many_to_destination(reversed_codes, None);
        prop_assert_eq!(&forward, &backward);

        let union: BTreeSet<ContentCategory> = codes
            .iter()
            .flat_map(|code| mapper.map_to_destination(*code).iter().copied())
            .collect();
        prop_assert_eq!(&forward, &union);

        let mut reversed_categories = categories.clone();
        reversed_categories.reverse();
        let sources = mapper.map_many_to_source(categories.iter().copied(), None);
        prop_assert_eq!(&sources, &mapper.map_many_to_source(reversed_categories, None));

        let union: BTreeSet<SourceCode> = categories
            .iter()
            .flat_map(|category| mapper.map_to_source(*category).iter().copied())
            .collect();
        prop_assert_eq!(&sources, &union);
    }
}
