use std::ops::Deref;
use std::sync::Arc;

use driver::api::RemoteApi;
use kernel::interface::notify::DependOnExpiryObserver;
use kernel::interface::query::{
    DependOnCustomerQuery, DependOnDashboardQuery, DependOnEquipmentQuery, DependOnRentalQuery,
};
use kernel::interface::sweep::{DependOnExpirySweep, FallbackSweep, LocalSweep};
use kernel::interface::update::{
    DependOnCustomerModifier, DependOnEquipmentModifier, DependOnRentalModifier,
};
use kernel::KernelError;

use crate::observer::ChannelObserver;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new(observer: ChannelObserver) -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init(observer)?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

type ComposedSweep = FallbackSweep<RemoteApi, LocalSweep<RemoteApi, RemoteApi>>;

pub struct Handler {
    api: RemoteApi,
    sweep: ComposedSweep,
    observer: ChannelObserver,
}

impl Handler {
    pub fn init(observer: ChannelObserver) -> error_stack::Result<Self, KernelError> {
        let api = RemoteApi::new()?;
        let sweep = FallbackSweep::new(api.clone(), LocalSweep::new(api.clone(), api.clone()));

        Ok(Self {
            api,
            sweep,
            observer,
        })
    }
}

impl DependOnCustomerQuery for Handler {
    type CustomerQuery = RemoteApi;
    fn customer_query(&self) -> &RemoteApi {
        &self.api
    }
}

impl DependOnCustomerModifier for Handler {
    type CustomerModifier = RemoteApi;
    fn customer_modifier(&self) -> &RemoteApi {
        &self.api
    }
}

impl DependOnEquipmentQuery for Handler {
    type EquipmentQuery = RemoteApi;
    fn equipment_query(&self) -> &RemoteApi {
        &self.api
    }
}

impl DependOnEquipmentModifier for Handler {
    type EquipmentModifier = RemoteApi;
    fn equipment_modifier(&self) -> &RemoteApi {
        &self.api
    }
}

impl DependOnRentalQuery for Handler {
    type RentalQuery = RemoteApi;
    fn rental_query(&self) -> &RemoteApi {
        &self.api
    }
}

impl DependOnRentalModifier for Handler {
    type RentalModifier = RemoteApi;
    fn rental_modifier(&self) -> &RemoteApi {
        &self.api
    }
}

impl DependOnDashboardQuery for Handler {
    type DashboardQuery = RemoteApi;
    fn dashboard_query(&self) -> &RemoteApi {
        &self.api
    }
}

impl DependOnExpirySweep for Handler {
    type ExpirySweep = ComposedSweep;
    fn expiry_sweep(&self) -> &ComposedSweep {
        &self.sweep
    }
}

impl DependOnExpiryObserver for Handler {
    type ExpiryObserver = ChannelObserver;
    fn expiry_observer(&self) -> &ChannelObserver {
        &self.observer
    }
}
