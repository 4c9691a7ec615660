use crate::entities::{customer_entity, transaction_entity};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[serde(alias = "custName")]
    #[schema(example = "John Doe")]
    pub name: String,
    #[serde(alias = "phoneNo")]
    #[schema(example = "1234567890")]
    pub phone: String,
    #[serde(default)]
    pub transactions: Option<Vec<NewTransactionRequest>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionRequest {
    #[schema(example = "2025-08-10")]
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 120.0)]
    pub amount: Decimal,
    #[schema(example = "Product B")]
    pub product: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub transactions: Vec<TransactionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: i64,
    pub product: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl From<transaction_entity::Model> for TransactionResponse {
    fn from(m: transaction_entity::Model) -> Self {
        Self {
            id: m.id,
            product: m.product,
            amount: m.amount,
            date: m.date,
        }
    }
}

impl CustomerResponse {
    pub fn new(
        customer: customer_entity::Model,
        transactions: Vec<transaction_entity::Model>,
    ) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            phone: customer.phone,
            transactions: transactions.into_iter().map(Into::into).collect(),
        }
    }
}
