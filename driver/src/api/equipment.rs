use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use kernel::interface::query::EquipmentQuery;
use kernel::interface::update::EquipmentModifier;
use kernel::prelude::entity::{
    DailyRate, Equipment, EquipmentDraft, EquipmentId, EquipmentName, EquipmentStatus,
};
use kernel::KernelError;

use crate::api::RemoteApi;
use crate::error::ConvertError;

#[derive(Debug, Deserialize)]
struct EquipmentRow {
    id: i64,
    name: String,
    status: EquipmentStatus,
    daily_rate: f64,
}

impl From<EquipmentRow> for Equipment {
    fn from(value: EquipmentRow) -> Self {
        Equipment::new(
            EquipmentId::new(value.id),
            EquipmentName::new(value.name),
            value.status,
            DailyRate::new(value.daily_rate),
        )
    }
}

#[derive(Debug, Serialize)]
struct EquipmentPayload {
    name: String,
    status: EquipmentStatus,
    daily_rate: f64,
}

impl From<&EquipmentDraft> for EquipmentPayload {
    fn from(value: &EquipmentDraft) -> Self {
        Self {
            name: value.name().as_ref().to_string(),
            status: *value.status(),
            daily_rate: *value.daily_rate().as_ref(),
        }
    }
}

#[async_trait::async_trait]
impl EquipmentQuery for RemoteApi {
    async fn find_all(&self) -> error_stack::Result<Vec<Equipment>, KernelError> {
        let rows: Vec<EquipmentRow> = self
            .client()
            .get(self.url("api/equipment/"))
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        Ok(rows.into_iter().map(Equipment::from).collect())
    }

    async fn find_by_id(
        &self,
        id: &EquipmentId,
    ) -> error_stack::Result<Option<Equipment>, KernelError> {
        let response = self
            .client()
            .get(self.url(&format!("api/equipment/{}/", id.as_ref())))
            .send()
            .await
            .convert_error()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let row: EquipmentRow = response
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        Ok(Some(Equipment::from(row)))
    }
}

#[async_trait::async_trait]
impl EquipmentModifier for RemoteApi {
    async fn create(&self, draft: &EquipmentDraft) -> error_stack::Result<Equipment, KernelError> {
        let row: EquipmentRow = self
            .client()
            .post(self.url("api/equipment/"))
            .json(&EquipmentPayload::from(draft))
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        Ok(Equipment::from(row))
    }

    async fn update(
        &self,
        id: &EquipmentId,
        draft: &EquipmentDraft,
    ) -> error_stack::Result<Equipment, KernelError> {
        let row: EquipmentRow = self
            .client()
            .put(self.url(&format!("api/equipment/{}/", id.as_ref())))
            .json(&EquipmentPayload::from(draft))
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        Ok(Equipment::from(row))
    }

    async fn delete(&self, id: &EquipmentId) -> error_stack::Result<(), KernelError> {
        self.client()
            .delete(self.url(&format!("api/equipment/{}/", id.as_ref())))
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
    use kernel::prelude::entity::{Equipment, EquipmentStatus};

    use super::EquipmentRow;

    #[test]
    fn row_carries_status_and_rate() {
        let row: EquipmentRow = serde_json::from_str(
            r#"{"id": 3, "name": "Scissor lift", "status": "maintenance", "daily_rate": 320.5}"#,
        )
        .unwrap();
        let equipment = Equipment::from(row);
        assert_eq!(*equipment.status(), EquipmentStatus::Maintenance);
        assert_eq!(*equipment.daily_rate().as_ref(), 320.5);
    }
}
