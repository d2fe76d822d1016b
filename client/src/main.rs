use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use application::service::{
    GetCustomerService, GetDashboardService, GetEquipmentService, GetRentalService,
};
use application::viewmodel::SessionView;
use kernel::KernelError;

use crate::handler::AppModule;
use crate::observer::ChannelObserver;
use crate::scheduler::{sweep_interval, ExpiryScheduler};

mod handler;
mod observer;
mod scheduler;

#[tokio::main]
async fn main() -> error_stack::Result<(), KernelError> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "client.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG")
                    .unwrap_or_else(|_| "client=debug,application=debug,driver=debug".into()),
            )),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let (observer, mut closed_rentals) = ChannelObserver::new();
    let module = AppModule::new(observer)?;

    let mut view = SessionView::new();
    warm_up(&module, &mut view).await;

    let scheduler = ExpiryScheduler::spawn(module.clone(), sweep_interval());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            Some(closed) = closed_rentals.recv() => {
                info!(closed, "Rentals closed automatically, refreshing the session");
                refresh_after_sweep(&module, &mut view).await;
            }
        }
    }

    scheduler.stop();
    Ok(())
}

/// Initial cache load; any section may fail without aborting the shell,
/// the next refresh fills the gap.
async fn warm_up(module: &AppModule, view: &mut SessionView) {
    match module.get_customers().await {
        Ok(customers) => view.replace_customers(customers),
        Err(report) => warn!("Customer list unavailable at startup: {report:?}"),
    }
    match module.get_equipment_list().await {
        Ok(equipment) => view.replace_equipment(equipment),
        Err(report) => warn!("Equipment list unavailable at startup: {report:?}"),
    }
    match module.get_rentals().await {
        Ok(rentals) => view.replace_rentals(rentals),
        Err(report) => warn!("Rental list unavailable at startup: {report:?}"),
    }
    match module.get_dashboard_stats().await {
        Ok(stats) => view.set_stats(stats),
        Err(report) => warn!("Dashboard stats unavailable at startup: {report:?}"),
    }
    info!(
        customers = view.customers().len(),
        equipment = view.equipment().len(),
        rentals = view.rentals().len(),
        "Session caches warmed"
    );
}

/// One refresh per reconciler signal: rentals list plus dashboard card.
async fn refresh_after_sweep(module: &AppModule, view: &mut SessionView) {
    match module.get_rentals().await {
        Ok(rentals) => view.replace_rentals(rentals),
        Err(report) => warn!("Rental list refresh failed: {report:?}"),
    }
    match module.get_dashboard_stats().await {
        Ok(stats) => view.set_stats(stats),
        Err(report) => warn!("Dashboard refresh failed: {report:?}"),
    }
}
