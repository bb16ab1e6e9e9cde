//! Hotel Dashboard Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::{
    dashboard::records::{DashboardStats, HotelDashboard, RecentActivity},
    hotels::records::HotelUuid,
};

use crate::{dashboard::errors::into_status_error, extensions::*, state::State};

/// Dashboard Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DashboardResponse {
    pub hotel_name: String,
    pub stats: DashboardStatsResponse,

    /// Newest bookings first
    pub recent_activities: Vec<RecentActivityResponse>,
}

/// Dashboard Counters
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DashboardStatsResponse {
    /// Revenue of confirmed bookings, e.g. `480.00`
    pub total_revenue: String,
    pub total_bookings: usize,
    pub confirmed_bookings: usize,
    pub pending_actions: usize,
}

/// Recent Activity Entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecentActivityResponse {
    pub id: Uuid,
    pub description: String,

    /// `dd.MM.yyyy HH:mm` in UTC
    pub timestamp: String,
}

impl From<DashboardStats> for DashboardStatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_revenue: stats.total_revenue,
            total_bookings: stats.total_bookings,
            confirmed_bookings: stats.confirmed_bookings,
            pending_actions: stats.pending_actions,
        }
    }
}

impl From<RecentActivity> for RecentActivityResponse {
    fn from(activity: RecentActivity) -> Self {
        Self {
            id: activity.id.into_uuid(),
            description: activity.description,
            timestamp: activity.timestamp,
        }
    }
}

impl From<HotelDashboard> for DashboardResponse {
    fn from(dashboard: HotelDashboard) -> Self {
        Self {
            hotel_name: dashboard.hotel_name,
            stats: dashboard.stats.into(),
            recent_activities: dashboard
                .recent_activities
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Hotel Dashboard Handler
///
/// Returns booking counters, confirmed revenue and recent activity for a hotel.
#[endpoint(
    tags("dashboard"),
    summary = "Get Hotel Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Dashboard"),
        (status_code = StatusCode::FORBIDDEN, description = "Access to this hotel is not allowed"),
        (status_code = StatusCode::NOT_FOUND, description = "Hotel not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    hotel: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<DashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let hotel = HotelUuid::from_uuid(hotel.into_inner());

    depot.hotel_access_or_403(hotel)?;

    let dashboard = state
        .app
        .dashboard
        .hotel_dashboard(hotel)
        .await
        .map_err(into_status_error)?;

    Ok(Json(dashboard.into()))
}
