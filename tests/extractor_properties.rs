use proptest::prelude::*;
use strategy_explainer::config::constants::NOT_FOUND_SENTINEL;
use strategy_explainer::services::parameter_extractor::ParameterExtractor;

use crate::common::STRATEGY_SOURCE;

#[test]
fn test_strategy_source_parameters() {
    let parameters = ParameterExtractor::default().extract_parameters(STRATEGY_SOURCE);
    let rows: Vec<_> = parameters
        .iter()
        .map(|p| (p.name.as_str(), p.param_type.as_str(), p.default_value.as_str()))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("FastMA", "int", "10"),
            ("StopLoss", "int", NOT_FOUND_SENTINEL),
            ("RiskPercent", "double", "0.5 * 2"),
        ]
    );
}

fn declarations_with_defaults() -> impl Strategy<Value = Vec<(String, Option<u32>)>> {
    prop::collection::vec(("[a-z]{1,6}", prop::option::of(0u32..100_000)), 0..12).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (suffix, default))| (format!("Param{}x{}", i, suffix), default))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_n_declarations_m_defaults(entries in declarations_with_defaults()) {
        let mut source = String::from("public class Generated : Strategy\n{\n");
        for (name, _) in &entries {
            source.push_str(&format!("    public int {} {{ get; set; }}\n", name));
        }
        source.push_str("    void SetDefaults()\n    {\n");
        for (name, default) in &entries {
            if let Some(value) = default {
                source.push_str(&format!("        {} = {};\n", name, value));
            }
        }
        source.push_str("    }\n}\n");

        let parameters = ParameterExtractor::default().extract_parameters(&source);

        let with_default = entries.iter().filter(|(_, d)| d.is_some()).count();
        prop_assert_eq!(parameters.len(), entries.len());
        prop_assert_eq!(parameters.iter().filter(|p| p.default_value != NOT_FOUND_SENTINEL).count(), with_default);

        for (parameter, (name, default)) in parameters.iter().zip(&entries) {
            prop_assert_eq!(&parameter.name, name);
            prop_assert_eq!(&parameter.param_type, "int");
            match default {
                Some(value) => prop_assert_eq!(&parameter.default_value, &value.to_string()),
                None => prop_assert_eq!(parameter.default_value.as_str(), NOT_FOUND_SENTINEL),
            }
        }
    }

    #[test]
    fn prop_extraction_is_idempotent(source in "(public (int|double|bool) [A-Za-z]{1,5} \\{ get; set; \\}|[A-Za-z]{1,5} = [0-9]{1,3};|[ \n;{}=a-z]{0,10}){0,20}") {
        let extractor = ParameterExtractor::default();
        prop_assert_eq!(extractor.extract_parameters(&source), extractor.extract_parameters(&source));
    }
}
