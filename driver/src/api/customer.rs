use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use kernel::interface::query::CustomerQuery;
use kernel::interface::update::CustomerModifier;
use kernel::prelude::entity::{
    Address, BirthDate, CreatedAt, Customer, CustomerDocument, CustomerDraft, CustomerId,
    CustomerName, EmailAddress, PhoneNumber, UpdatedAt,
};
use kernel::KernelError;

use crate::api::RemoteApi;
use crate::error::{ConvertError, DriverError};

static DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Deserialize)]
struct CustomerRow {
    id: i64,
    name: String,
    document: String,
    email: String,
    phone: String,
    address: String,
    birth_date: String,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = DriverError;
    fn try_from(value: CustomerRow) -> Result<Self, Self::Error> {
        let birth_date = Date::parse(&value.birth_date, DATE_FORMAT)?;
        Ok(Customer::new(
            CustomerId::new(value.id),
            CustomerName::new(value.name),
            CustomerDocument::new(value.document),
            EmailAddress::new(value.email),
            PhoneNumber::new(value.phone),
            Address::new(value.address),
            BirthDate::new(birth_date),
            CreatedAt::new(value.created_at),
            UpdatedAt::new(value.updated_at),
        ))
    }
}

#[derive(Debug, Serialize)]
struct CustomerPayload {
    name: String,
    document: String,
    email: String,
    phone: String,
    address: String,
    birth_date: String,
}

impl TryFrom<&CustomerDraft> for CustomerPayload {
    type Error = DriverError;
    fn try_from(value: &CustomerDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name().as_ref().to_string(),
            document: value.document().as_ref().to_string(),
            email: value.email().as_ref().to_string(),
            phone: value.phone().as_ref().to_string(),
            address: value.address().as_ref().to_string(),
            birth_date: value.birth_date().as_ref().format(DATE_FORMAT)?,
        })
    }
}

#[async_trait::async_trait]
impl CustomerQuery for RemoteApi {
    async fn find_all(&self) -> error_stack::Result<Vec<Customer>, KernelError> {
        let rows: Vec<CustomerRow> = self
            .client()
            .get(self.url("api/customers/"))
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        rows.into_iter()
            .map(Customer::try_from)
            .collect::<Result<Vec<Customer>, DriverError>>()
            .convert_error()
    }

    async fn find_by_id(
        &self,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        let response = self
            .client()
            .get(self.url(&format!("api/customers/{}/", id.as_ref())))
            .send()
            .await
            .convert_error()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let row: CustomerRow = response
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        Ok(Some(Customer::try_from(row).convert_error()?))
    }
}

#[async_trait::async_trait]
impl CustomerModifier for RemoteApi {
    async fn create(&self, draft: &CustomerDraft) -> error_stack::Result<Customer, KernelError> {
        let payload = CustomerPayload::try_from(draft).convert_error()?;
        let row: CustomerRow = self
            .client()
            .post(self.url("api/customers/"))
            .json(&payload)
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        Customer::try_from(row).convert_error()
    }

    async fn update(
        &self,
        id: &CustomerId,
        draft: &CustomerDraft,
    ) -> error_stack::Result<Customer, KernelError> {
        let payload = CustomerPayload::try_from(draft).convert_error()?;
        let row: CustomerRow = self
            .client()
            .put(self.url(&format!("api/customers/{}/", id.as_ref())))
            .json(&payload)
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        Customer::try_from(row).convert_error()
    }

    async fn delete(&self, id: &CustomerId) -> error_stack::Result<(), KernelError> {
        self.client()
            .delete(self.url(&format!("api/customers/{}/", id.as_ref())))
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use kernel::prelude::entity::Customer;

    use super::CustomerRow;

    #[test]
    fn row_parses_plain_dates() {
        let row: CustomerRow = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Ada",
                "document": "123.456.789-00",
                "email": "ada@example.com",
                "phone": "+55 11 90000-0000",
                "address": "Rua A, 1",
                "birth_date": "1990-02-17",
                "created_at": "2024-01-01T09:00:00Z",
                "updated_at": "2024-01-02T09:00:00Z"
            }"#,
        )
        .unwrap();
        let customer = Customer::try_from(row).unwrap();
        assert_eq!(*customer.id().as_ref(), 7);
        assert_eq!(*customer.birth_date().as_ref(), date!(1990 - 02 - 17));
    }
}
