//! Decoding of the per-ad attribute document.
//!
//! The `attributes` column stores the listing wizard state as
//! `{"stepsData": [{"name": ..., "data": {...}}, ...]}`. Every step carries
//! the same loose `data` object; which parts are meaningful depends on the
//! step `name`. Decoding happens in two passes:
//!
//! 1. The wire document is read into permissive structs where any absent or
//!    `null` field becomes its zero value. Only a document of the wrong JSON
//!    shape (a string instead of an object, a number where text is expected)
//!    is an error.
//! 2. Each wire step is projected into an [`AttributeStep`] whose payload
//!    variant is selected by the step name.
//!
//! Steps are kept in document order, duplicates included.
//! [`AttributeSummary::fold`] then resolves duplicates with a
//! last-occurrence-wins policy per field.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};

pub const SEARCH_PRODUCT_STEP: &str = "search_product";
pub const DELIVERY_AND_PAYMENT_STEP: &str = "delivery_and_payment_methods";
pub const PRODUCT_DETAIL_STEP: &str = "product_detail";

// ---------------------------------------------------------------------------
// Decoded model
// ---------------------------------------------------------------------------

/// One named section of an ad's attribute document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeStep {
    pub name: String,
    pub payload: StepPayload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepPayload {
    SearchIdentity(SearchIdentity),
    DeliveryPayment(DeliveryPayment),
    ProductDetail(ProductDetail),
    /// A step this pipeline has no use for (e.g. `location`).
    Unknown,
}

/// Payload of a `search_product` step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIdentity {
    pub subcategory_id: String,
    /// Free text the seller typed into the product search box.
    pub search_text: String,
}

/// Payload of a `delivery_and_payment_methods` step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryPayment {
    /// Payment method labels in declaration order, e.g. `"Online Payment"`.
    pub payment_methods: Vec<String>,
}

/// Payload of a `product_detail` step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDetail {
    pub brand: String,
    /// Price as entered, without currency.
    pub price: String,
    /// Image paths relative to the draft's `web/` folder.
    pub images: Vec<String>,
    /// `"auction"`, `"fixed"`, or empty.
    pub ad_type: String,
}

/// Decodes an attribute document into its ordered steps.
///
/// A JSON `null` document decodes to no steps.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] when the document is not an
/// object of the expected shape. Callers treat this as a per-ad failure.
pub fn decode_attributes(
    blob: &serde_json::Value,
) -> Result<Vec<AttributeStep>, serde_json::Error> {
    let document = Option::<WireDocument>::deserialize(blob)?.unwrap_or_default();
    Ok(document
        .steps_data
        .into_iter()
        .map(into_step)
        .collect())
}

/// Selects the payload variant for a wire step by its name.
fn into_step(step: WireStep) -> AttributeStep {
    let data = step.data;
    let payload = match step.name.as_str() {
        SEARCH_PRODUCT_STEP => StepPayload::SearchIdentity(SearchIdentity {
            subcategory_id: data.id.id,
            search_text: data.input_search_value.value,
        }),
        DELIVERY_AND_PAYMENT_STEP => StepPayload::DeliveryPayment(DeliveryPayment {
            payment_methods: data
                .payment_methods
                .data
                .into_iter()
                .map(|method| method.value)
                .collect(),
        }),
        PRODUCT_DETAIL_STEP => StepPayload::ProductDetail(ProductDetail {
            brand: data.values.brand,
            price: data.values.price,
            images: data.values.images.into_iter().map(|img| img.src).collect(),
            ad_type: data.values.ad_type,
        }),
        _ => StepPayload::Unknown,
    };
    AttributeStep {
        name: step.name,
        payload,
    }
}

// ---------------------------------------------------------------------------
// Fold
// ---------------------------------------------------------------------------

/// Per-ad view of the step sequence with duplicate names resolved.
///
/// Merge policy, in document order:
/// - every `search_product` subcategory id is kept (membership is "any");
/// - `search_text` comes from the last `search_product` step;
/// - payment methods are the union over all `delivery_and_payment_methods`
///   steps (presence is "any");
/// - `brand`, `price`, `ad_type` come from the last `product_detail` step;
/// - `image_src` is the first image of the last `product_detail` step that
///   declared at least one image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSummary {
    pub subcategory_ids: Vec<String>,
    pub search_text: String,
    pub payment_methods: BTreeSet<String>,
    pub brand: String,
    pub price: String,
    pub ad_type: String,
    /// Empty when no image was declared.
    pub image_src: String,
}

impl AttributeSummary {
    #[must_use]
    pub fn fold(steps: &[AttributeStep]) -> Self {
        let mut summary = Self::default();
        for step in steps {
            match &step.payload {
                StepPayload::SearchIdentity(search) => {
                    summary.subcategory_ids.push(search.subcategory_id.clone());
                    summary.search_text.clone_from(&search.search_text);
                }
                StepPayload::DeliveryPayment(delivery) => {
                    summary
                        .payment_methods
                        .extend(delivery.payment_methods.iter().cloned());
                }
                StepPayload::ProductDetail(detail) => {
                    summary.brand.clone_from(&detail.brand);
                    summary.price.clone_from(&detail.price);
                    summary.ad_type.clone_from(&detail.ad_type);
                    if let Some(first) = detail.images.first() {
                        summary.image_src.clone_from(first);
                    }
                }
                StepPayload::Unknown => {}
            }
        }
        summary
    }
}

// ---------------------------------------------------------------------------
// Wire shape
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireDocument {
    #[serde(rename = "stepsData", deserialize_with = "null_as_default")]
    steps_data: Vec<WireStep>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireStep {
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    data: WireStepData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireStepData {
    #[serde(deserialize_with = "null_as_default")]
    id: WireId,
    #[serde(rename = "inputSearchValue", deserialize_with = "null_as_default")]
    input_search_value: WireValue,
    #[serde(deserialize_with = "null_as_default")]
    values: WireValues,
    #[serde(rename = "paymentMethods", deserialize_with = "null_as_default")]
    payment_methods: WirePaymentMethods,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireId {
    #[serde(deserialize_with = "null_as_default")]
    id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireValue {
    #[serde(deserialize_with = "null_as_default")]
    value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireValues {
    #[serde(deserialize_with = "null_as_default")]
    brand: String,
    #[serde(deserialize_with = "null_as_default")]
    price: String,
    #[serde(deserialize_with = "null_as_default")]
    images: Vec<WireImage>,
    #[serde(deserialize_with = "null_as_default")]
    ad_type: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireImage {
    #[serde(deserialize_with = "null_as_default")]
    src: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WirePaymentMethods {
    #[serde(deserialize_with = "null_as_default")]
    data: Vec<WireValue>,
}

/// Maps an explicit JSON `null` to the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "attributes_test.rs"]
mod tests;
