//! Best-effort field extraction across all listing elements of a page.
//!
//! One future per field per element is started, all of them are awaited to
//! completion, and only the successful values are kept, in request order.

use crate::field::Field;
use crate::types::RawFieldValue;
use farescrape_browser::{BrowserError, Element};
use futures::future::join_all;
use tracing::debug;

/// Outcome of one extraction future after it has run to completion.
#[derive(Debug)]
pub enum Settled<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> From<Result<T, E>> for Settled<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Settled::Ok(value),
            Err(error) => Settled::Err(error),
        }
    }
}

/// Extracts every field of every element, keeping only successful values.
///
/// Values are ordered element-major, field-minor, matching [`Field::ALL`].
/// A failed field is dropped, except days-later which falls back to `0`.
pub async fn extract_all<E: Element>(elements: &[E]) -> Vec<RawFieldValue> {
    if elements.is_empty() {
        return Vec::new();
    }

    let tasks = elements
        .iter()
        .flat_map(|element| Field::ALL.iter().map(move |&field| extract_field(element, field)));

    let settled = join_all(tasks).await;
    let total = settled.len();

    let values: Vec<RawFieldValue> = settled
        .into_iter()
        .enumerate()
        .filter_map(|(position, outcome)| match outcome {
            Settled::Ok(value) => Some(value),
            Settled::Err(error) => {
                debug!(position, %error, "dropping field that failed to resolve");
                None
            }
        })
        .collect();

    debug!(
        elements = elements.len(),
        requested = total,
        extracted = values.len(),
        "field extraction settled"
    );
    values
}

async fn extract_field<E: Element>(
    element: &E,
    field: Field,
) -> Settled<RawFieldValue, BrowserError> {
    let result = async {
        let node = element.find_element(field.selector()).await?;
        node.text().await
    }
    .await
    .map(RawFieldValue::Text);

    match (result, field.default_value()) {
        (Err(_), Some(default)) => Settled::Ok(RawFieldValue::Int(default)),
        (result, _) => result.into(),
    }
}
