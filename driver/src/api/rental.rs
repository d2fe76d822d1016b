use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use kernel::interface::query::RentalQuery;
use kernel::interface::sweep::ExpirySweep;
use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{
    CreatedAt, CustomerId, CustomerName, CustomerRef, EndedAt, EquipmentId, EquipmentName,
    EquipmentRef, Rental, RentalClosure, RentalDraft, RentalId, RentalNotes, RentalStatus,
    StartedAt, TotalAmount, UpdatedAt,
};
use kernel::KernelError;

use crate::api::RemoteApi;
use crate::error::ConvertError;

#[derive(Debug, Deserialize)]
struct RefRow {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RentalRow {
    id: i64,
    customer: RefRow,
    equipment: RefRow,
    #[serde(with = "time::serde::rfc3339")]
    started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    ended_at: Option<OffsetDateTime>,
    total_amount: Option<f64>,
    status: RentalStatus,
    notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl From<RentalRow> for Rental {
    fn from(value: RentalRow) -> Self {
        Rental::new(
            RentalId::new(value.id),
            CustomerRef::new(
                CustomerId::new(value.customer.id),
                CustomerName::new(value.customer.name),
            ),
            EquipmentRef::new(
                EquipmentId::new(value.equipment.id),
                EquipmentName::new(value.equipment.name),
            ),
            StartedAt::new(value.started_at),
            value.ended_at.map(EndedAt::new),
            value.total_amount.map(TotalAmount::new),
            value.status,
            value.notes.map(RentalNotes::new),
            CreatedAt::new(value.created_at),
            UpdatedAt::new(value.updated_at),
        )
    }
}

#[derive(Debug, Serialize)]
struct RentalPayload {
    customer: i64,
    equipment: i64,
    #[serde(with = "time::serde::rfc3339")]
    started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    ended_at: Option<OffsetDateTime>,
    total_amount: Option<f64>,
    status: RentalStatus,
    notes: Option<String>,
}

impl From<&RentalDraft> for RentalPayload {
    fn from(value: &RentalDraft) -> Self {
        Self {
            customer: *value.customer_id().as_ref(),
            equipment: *value.equipment_id().as_ref(),
            started_at: *value.started_at().as_ref(),
            ended_at: value.ended_at().as_ref().map(|ended| *ended.as_ref()),
            total_amount: value.total_amount().as_ref().map(|total| *total.as_ref()),
            status: *value.status(),
            notes: value.notes().as_ref().map(|notes| notes.as_ref().clone()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ClosePayload {
    status: RentalStatus,
    auto_closed: bool,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    ended_at: Option<OffsetDateTime>,
}

impl From<&RentalClosure> for ClosePayload {
    fn from(value: &RentalClosure) -> Self {
        Self {
            status: RentalStatus::Closed,
            auto_closed: value.is_automatic(),
            ended_at: value.ended_at().map(|ended| *ended.as_ref()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SweepRow {
    closed_count: u32,
}

#[async_trait::async_trait]
impl RentalQuery for RemoteApi {
    async fn find_all(&self) -> error_stack::Result<Vec<Rental>, KernelError> {
        let rows: Vec<RentalRow> = self
            .client()
            .get(self.url("api/rentals/"))
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        Ok(rows.into_iter().map(Rental::from).collect())
    }

    async fn find_by_id(
        &self,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        let response = self
            .client()
            .get(self.url(&format!("api/rentals/{}/", id.as_ref())))
            .send()
            .await
            .convert_error()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let row: RentalRow = response
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        Ok(Some(Rental::from(row)))
    }
}

#[async_trait::async_trait]
impl RentalModifier for RemoteApi {
    async fn create(&self, draft: &RentalDraft) -> error_stack::Result<Rental, KernelError> {
        let row: RentalRow = self
            .client()
            .post(self.url("api/rentals/"))
            .json(&RentalPayload::from(draft))
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        Ok(Rental::from(row))
    }

    async fn update(
        &self,
        id: &RentalId,
        draft: &RentalDraft,
    ) -> error_stack::Result<Rental, KernelError> {
        let row: RentalRow = self
            .client()
            .put(self.url(&format!("api/rentals/{}/", id.as_ref())))
            .json(&RentalPayload::from(draft))
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        Ok(Rental::from(row))
    }

    async fn close(
        &self,
        id: &RentalId,
        closure: &RentalClosure,
    ) -> error_stack::Result<Rental, KernelError> {
        let row: RentalRow = self
            .client()
            .post(self.url(&format!("api/rentals/{}/close/", id.as_ref())))
            .json(&ClosePayload::from(closure))
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        Ok(Rental::from(row))
    }

    async fn delete(&self, id: &RentalId) -> error_stack::Result<(), KernelError> {
        self.client()
            .delete(self.url(&format!("api/rentals/{}/", id.as_ref())))
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?;
        Ok(())
    }
}

/// Batched strategy: the remote side scans with its own clock and
/// reports how many rentals it closed.
#[async_trait::async_trait]
impl ExpirySweep for RemoteApi {
    async fn sweep(&self, _now: OffsetDateTime) -> error_stack::Result<u32, KernelError> {
        let row: SweepRow = self
            .client()
            .post(self.url("api/rentals/check-expired/"))
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        debug!(closed = row.closed_count, "Remote expiry check answered");
        Ok(row.closed_count)
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};
    use time::macros::datetime;

    use kernel::interface::query::RentalQuery;
    use kernel::interface::update::RentalModifier;
    use kernel::prelude::entity::{
        CustomerDraft, EndedAt, EquipmentDraft, Rental, RentalClosure, RentalDraft, RentalStatus,
    };

    use super::{ClosePayload, RentalRow};

    #[test]
    fn row_resolves_nested_refs_and_nulls() {
        let row: RentalRow = serde_json::from_str(
            r#"{
                "id": 12,
                "customer": {"id": 7, "name": "Ada"},
                "equipment": {"id": 3, "name": "Scissor lift"},
                "started_at": "2024-01-01T10:00:00Z",
                "ended_at": null,
                "total_amount": null,
                "status": "in_progress",
                "notes": null,
                "created_at": "2024-01-01T09:00:00Z",
                "updated_at": "2024-01-01T09:00:00Z"
            }"#,
        )
        .unwrap();
        let rental = Rental::from(row);
        assert_eq!(*rental.id().as_ref(), 12);
        assert_eq!(rental.customer().name().as_ref(), "Ada");
        assert_eq!(*rental.equipment().id().as_ref(), 3);
        assert!(rental.ended_at().is_none());
        assert!(rental.total_amount().is_none());
        assert_eq!(*rental.status(), RentalStatus::InProgress);
    }

    #[test]
    fn row_keeps_scheduled_end_and_total() {
        let row: RentalRow = serde_json::from_str(
            r#"{
                "id": 12,
                "customer": {"id": 7, "name": "Ada"},
                "equipment": {"id": 3, "name": "Scissor lift"},
                "started_at": "2024-01-01T10:00:00Z",
                "ended_at": "2024-01-01T13:30:00Z",
                "total_amount": 35.0,
                "status": "open",
                "notes": "deliver on site",
                "created_at": "2024-01-01T09:00:00Z",
                "updated_at": "2024-01-01T09:00:00Z"
            }"#,
        )
        .unwrap();
        let rental = Rental::from(row);
        assert_eq!(
            rental.ended_at().clone(),
            Some(EndedAt::new(datetime!(2024-01-01 13:30 UTC)))
        );
        assert_eq!(rental.total_amount().as_ref().map(|t| *t.as_ref()), Some(35.0));
    }

    #[test]
    fn automatic_close_payload_never_carries_an_end_instant() {
        let payload = ClosePayload::from(&RentalClosure::automatic());
        let value = serde_json::to_value(payload).unwrap();
        assert_eq!(value["status"], json!("closed"));
        assert_eq!(value["auto_closed"], json!(true));
        assert!(value.get("ended_at").is_none());
    }

    #[test]
    fn manual_close_payload_forwards_the_chosen_instant() {
        let closure = RentalClosure::manual(Some(EndedAt::new(datetime!(2024-01-05 18:00 UTC))));
        let payload = ClosePayload::from(&closure);
        let value: Value = serde_json::to_value(payload).unwrap();
        assert_eq!(value["auto_closed"], json!(false));
        assert_eq!(value["ended_at"], json!("2024-01-05T18:00:00Z"));
    }

    #[test_with::env(RENTAL_API_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), kernel::KernelError> {
        use kernel::interface::update::{CustomerModifier, EquipmentModifier};
        use kernel::prelude::entity::{
            Address, BirthDate, CustomerDocument, CustomerName, DailyRate, EmailAddress,
            EquipmentName, EquipmentStatus, PhoneNumber, StartedAt,
        };
        use time::macros::date;

        use crate::api::RemoteApi;

        let api = RemoteApi::new()?;

        let customer = CustomerModifier::create(
            &api,
            &CustomerDraft::new(
                CustomerName::new("integration"),
                CustomerDocument::new("000.000.000-00"),
                EmailAddress::new("integration@example.com"),
                PhoneNumber::new("+55 11 90000-0000"),
                Address::new("Rua B, 2"),
                BirthDate::new(date!(1990 - 01 - 01)),
            ),
        )
        .await?;
        let equipment = EquipmentModifier::create(
            &api,
            &EquipmentDraft::new(
                EquipmentName::new("integration drill"),
                EquipmentStatus::Available,
                DailyRate::new(240.0),
            ),
        )
        .await?;

        let rental = RentalModifier::create(
            &api,
            &RentalDraft::new(
                customer.id().clone(),
                equipment.id().clone(),
                StartedAt::new(datetime!(2024-01-01 10:00 UTC)),
                Some(EndedAt::new(datetime!(2024-01-01 13:30 UTC))),
                None,
                RentalStatus::Open,
                None,
            ),
        )
        .await?;

        let found = RentalQuery::find_by_id(&api, rental.id()).await?;
        assert_eq!(
            found.as_ref().map(|found| found.id().clone()),
            Some(rental.id().clone())
        );

        let closed = RentalModifier::close(&api, rental.id(), &RentalClosure::manual(None)).await?;
        assert_eq!(*closed.status(), RentalStatus::Closed);

        RentalModifier::delete(&api, rental.id()).await?;
        EquipmentModifier::delete(&api, equipment.id()).await?;
        CustomerModifier::delete(&api, customer.id()).await?;
        Ok(())
    }
}
