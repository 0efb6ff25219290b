//! DynamoDB filter expression builders.
//!
//! Pure functions translating list filters into a `FilterExpression` plus its
//! placeholder maps. Attribute names always go through `#name` placeholders.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use bloom_core::content::{ContactFilter, EventFilter, GalleryFilter};

/// A filter expression with its attribute name and value placeholders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterExpression {
    pub expression: Option<String>,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

impl FilterExpression {
    fn push_eq(&mut self, attribute: &str, value: AttributeValue) {
        let name = format!("#{attribute}");
        let placeholder = format!(":{attribute}");
        let clause = format!("{name} = {placeholder}");

        self.expression = Some(match self.expression.take() {
            Some(existing) => format!("{existing} AND {clause}"),
            None => clause,
        });
        self.names.insert(name, attribute.to_string());
        self.values.insert(placeholder, value);
    }

    /// Attribute name placeholders, `None` when the filter is empty.
    pub fn names(&self) -> Option<HashMap<String, String>> {
        (!self.names.is_empty()).then(|| self.names.clone())
    }

    /// Attribute value placeholders, `None` when the filter is empty.
    pub fn values(&self) -> Option<HashMap<String, AttributeValue>> {
        (!self.values.is_empty()).then(|| self.values.clone())
    }
}

pub fn gallery_filter_expression(filter: &GalleryFilter) -> FilterExpression {
    let mut expression = FilterExpression::default();
    if let Some(category) = &filter.category {
        expression.push_eq("category", AttributeValue::S(category.clone()));
    }
    if filter.active_only {
        expression.push_eq("is_active", AttributeValue::Bool(true));
    }
    expression
}

pub fn event_filter_expression(filter: &EventFilter) -> FilterExpression {
    let mut expression = FilterExpression::default();
    if let Some(category) = &filter.category {
        expression.push_eq("category", AttributeValue::S(category.clone()));
    }
    if filter.featured_only {
        expression.push_eq("is_featured", AttributeValue::Bool(true));
    }
    if filter.active_only {
        expression.push_eq("is_active", AttributeValue::Bool(true));
    }
    expression
}

pub fn contact_filter_expression(filter: ContactFilter) -> FilterExpression {
    let mut expression = FilterExpression::default();
    if filter.unread_only {
        expression.push_eq("is_read", AttributeValue::Bool(false));
    }
    expression
}
