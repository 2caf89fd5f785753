//! Property tests for alignment totality and idempotence.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

use income_model::FeatureSchema;
use income_transform::{AlignOptions, CategoryOrder, align};

const UPLOAD_COLUMNS: &[&str] = &[
    "age",
    "workclass",
    "fnlwgt",
    "education",
    "occupation",
    "hours-per-week",
    "income",
    "employee_id",
];

const FEATURE_POOL: &[&str] = &[
    "age",
    "hours-per-week",
    "capital-loss",
    "workclass_Others",
    "workclass_Private",
    "education_Bachelors",
    "education_HS-grad",
    "occupation_Sales",
    "occupation_Others",
    "gender_Male",
    "employee_id",
    "fnlwgt",
];

fn cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("?".to_string())),
        Just(Some("Private".to_string())),
        Just(Some("Bachelors".to_string())),
        Just(Some("Sales".to_string())),
        Just(Some("HS-grad".to_string())),
        (0u32..100).prop_map(|n| Some(n.to_string())),
        "[a-z ]{0,6}".prop_map(Some),
    ]
}

fn upload() -> impl Strategy<Value = DataFrame> {
    let columns = proptest::sample::subsequence(UPLOAD_COLUMNS.to_vec(), 0..=UPLOAD_COLUMNS.len());
    (columns, 0usize..12).prop_flat_map(|(names, rows)| {
        let cells = proptest::collection::vec(proptest::collection::vec(cell(), rows), names.len());
        cells.prop_map(move |cells| {
            let columns: Vec<Column> = names
                .iter()
                .zip(cells)
                .map(|(name, values)| Series::new((*name).into(), values).into_column())
                .collect();
            DataFrame::new(columns).unwrap()
        })
    })
}

fn schema() -> impl Strategy<Value = FeatureSchema> {
    proptest::sample::subsequence(FEATURE_POOL.to_vec(), 1..=FEATURE_POOL.len())
        .prop_shuffle()
        .prop_map(|names| FeatureSchema::new(names).unwrap())
}

fn order() -> impl Strategy<Value = CategoryOrder> {
    prop_oneof![Just(CategoryOrder::Lexicographic), Just(CategoryOrder::FirstSeen)]
}

proptest! {
    #[test]
    fn output_is_total(raw in upload(), schema in schema(), order in order()) {
        let options = AlignOptions::new().with_category_order(order);
        let aligned = align(&raw, &schema, &options).unwrap();

        let names: Vec<String> = aligned
            .get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        let expected: Vec<String> = schema.iter().map(ToString::to_string).collect();
        prop_assert_eq!(names, expected);
        prop_assert_eq!(aligned.height(), raw.height());

        for column in aligned.get_columns() {
            let values = column.f64().unwrap();
            prop_assert_eq!(values.null_count(), 0);
            prop_assert!(!values.into_iter().flatten().any(f64::is_nan));
        }
    }

    #[test]
    fn realignment_is_a_fixed_point(raw in upload(), schema in schema(), order in order()) {
        let options = AlignOptions::new().with_category_order(order);
        let once = align(&raw, &schema, &options).unwrap();
        let twice = align(&once, &schema, &options).unwrap();

        prop_assert!(once.equals(&twice));
    }
}
