use serde_json::json;

use super::*;

// -----------------------------------------------------------------------
// decode_attributes
// -----------------------------------------------------------------------

#[test]
fn decode_selects_payload_by_step_name() {
    let blob = json!({
        "stepsData": [
            {
                "name": "search_product",
                "data": {
                    "id": { "id": "sub-1", "value": "Phones" },
                    "inputSearchValue": { "value": "iPhone 15 Pro" }
                }
            },
            {
                "name": "product_detail",
                "data": {
                    "values": {
                        "brand": "Apple",
                        "price": "3999",
                        "images": [{ "src": "a/1.jpg" }, { "src": "a/2.jpg" }],
                        "ad_type": "fixed"
                    }
                }
            },
            {
                "name": "delivery_and_payment_methods",
                "data": {
                    "paymentMethods": {
                        "data": [{ "value": "Cash" }, { "value": "Online Payment" }]
                    }
                }
            },
            { "name": "location", "data": { "city": "Dubai" } }
        ]
    });

    let steps = decode_attributes(&blob).unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(
        steps[0].payload,
        StepPayload::SearchIdentity(SearchIdentity {
            subcategory_id: "sub-1".to_owned(),
            search_text: "iPhone 15 Pro".to_owned(),
        })
    );
    assert_eq!(
        steps[1].payload,
        StepPayload::ProductDetail(ProductDetail {
            brand: "Apple".to_owned(),
            price: "3999".to_owned(),
            images: vec!["a/1.jpg".to_owned(), "a/2.jpg".to_owned()],
            ad_type: "fixed".to_owned(),
        })
    );
    assert_eq!(
        steps[2].payload,
        StepPayload::DeliveryPayment(DeliveryPayment {
            payment_methods: vec!["Cash".to_owned(), "Online Payment".to_owned()],
        })
    );
    assert_eq!(steps[3].name, "location");
    assert_eq!(steps[3].payload, StepPayload::Unknown);
}

#[test]
fn decode_absent_fields_become_zero_values() {
    let blob = json!({
        "stepsData": [
            { "name": "search_product" },
            { "name": "product_detail", "data": { "values": {} } },
            { "name": "delivery_and_payment_methods", "data": {} }
        ]
    });

    let steps = decode_attributes(&blob).unwrap();
    assert_eq!(
        steps[0].payload,
        StepPayload::SearchIdentity(SearchIdentity::default())
    );
    assert_eq!(
        steps[1].payload,
        StepPayload::ProductDetail(ProductDetail::default())
    );
    assert_eq!(
        steps[2].payload,
        StepPayload::DeliveryPayment(DeliveryPayment::default())
    );
}

#[test]
fn decode_null_fields_become_zero_values() {
    let blob = json!({
        "stepsData": [
            {
                "name": "product_detail",
                "data": {
                    "values": { "brand": null, "price": null, "images": null, "ad_type": null }
                }
            },
            { "name": null, "data": null }
        ]
    });

    let steps = decode_attributes(&blob).unwrap();
    assert_eq!(
        steps[0].payload,
        StepPayload::ProductDetail(ProductDetail::default())
    );
    assert_eq!(steps[1].name, "");
    assert_eq!(steps[1].payload, StepPayload::Unknown);
}

#[test]
fn decode_null_document_has_no_steps() {
    assert!(decode_attributes(&serde_json::Value::Null).unwrap().is_empty());
}

#[test]
fn decode_document_without_steps_has_no_steps() {
    assert!(decode_attributes(&json!({})).unwrap().is_empty());
    assert!(decode_attributes(&json!({ "stepsData": null }))
        .unwrap()
        .is_empty());
}

#[test]
fn decode_rejects_non_object_document() {
    assert!(decode_attributes(&json!("{\"stepsData\": []}")).is_err());
    assert!(decode_attributes(&json!([1, 2, 3])).is_err());
}

#[test]
fn decode_rejects_wrong_field_type() {
    let blob = json!({
        "stepsData": [
            { "name": "product_detail", "data": { "values": { "price": 100 } } }
        ]
    });
    assert!(decode_attributes(&blob).is_err());
}

#[test]
fn decode_keeps_duplicate_steps_in_order() {
    let blob = json!({
        "stepsData": [
            { "name": "product_detail", "data": { "values": { "brand": "First" } } },
            { "name": "product_detail", "data": { "values": { "brand": "Second" } } }
        ]
    });

    let steps = decode_attributes(&blob).unwrap();
    let brands: Vec<&str> = steps
        .iter()
        .filter_map(|s| match &s.payload {
            StepPayload::ProductDetail(d) => Some(d.brand.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(brands, ["First", "Second"]);
}

// -----------------------------------------------------------------------
// AttributeSummary::fold
// -----------------------------------------------------------------------

fn search(subcategory_id: &str, text: &str) -> AttributeStep {
    AttributeStep {
        name: SEARCH_PRODUCT_STEP.to_owned(),
        payload: StepPayload::SearchIdentity(SearchIdentity {
            subcategory_id: subcategory_id.to_owned(),
            search_text: text.to_owned(),
        }),
    }
}

fn detail(brand: &str, price: &str, images: &[&str], ad_type: &str) -> AttributeStep {
    AttributeStep {
        name: PRODUCT_DETAIL_STEP.to_owned(),
        payload: StepPayload::ProductDetail(ProductDetail {
            brand: brand.to_owned(),
            price: price.to_owned(),
            images: images.iter().map(|s| (*s).to_owned()).collect(),
            ad_type: ad_type.to_owned(),
        }),
    }
}

fn payment(methods: &[&str]) -> AttributeStep {
    AttributeStep {
        name: DELIVERY_AND_PAYMENT_STEP.to_owned(),
        payload: StepPayload::DeliveryPayment(DeliveryPayment {
            payment_methods: methods.iter().map(|s| (*s).to_owned()).collect(),
        }),
    }
}

#[test]
fn fold_empty_steps_is_default() {
    assert_eq!(AttributeSummary::fold(&[]), AttributeSummary::default());
}

#[test]
fn fold_last_product_detail_wins() {
    let steps = [
        detail("Old", "10", &["old.jpg"], "auction"),
        detail("New", "20", &["new.jpg"], "fixed"),
    ];
    let summary = AttributeSummary::fold(&steps);
    assert_eq!(summary.brand, "New");
    assert_eq!(summary.price, "20");
    assert_eq!(summary.ad_type, "fixed");
    assert_eq!(summary.image_src, "new.jpg");
}

#[test]
fn fold_last_product_detail_wins_even_when_empty() {
    let steps = [
        detail("Old", "10", &[], "auction"),
        detail("", "", &[], ""),
    ];
    let summary = AttributeSummary::fold(&steps);
    assert_eq!(summary.brand, "");
    assert_eq!(summary.price, "");
    assert_eq!(summary.ad_type, "");
}

#[test]
fn fold_image_kept_from_last_step_that_declared_images() {
    let steps = [
        detail("A", "1", &["first.jpg", "second.jpg"], ""),
        detail("B", "2", &[], ""),
    ];
    let summary = AttributeSummary::fold(&steps);
    assert_eq!(summary.brand, "B");
    assert_eq!(summary.image_src, "first.jpg");
}

#[test]
fn fold_keeps_every_subcategory_and_last_search_text() {
    let steps = [search("sub-1", "first title"), search("sub-2", "second title")];
    let summary = AttributeSummary::fold(&steps);
    assert_eq!(summary.subcategory_ids, ["sub-1", "sub-2"]);
    assert_eq!(summary.search_text, "second title");
}

#[test]
fn fold_unions_payment_methods() {
    let steps = [payment(&["Cash"]), payment(&["Online Payment"])];
    let summary = AttributeSummary::fold(&steps);
    assert!(summary.payment_methods.contains("Cash"));
    assert!(summary.payment_methods.contains("Online Payment"));
    assert_eq!(summary.payment_methods.len(), 2);
}
