use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CreateEventDoc { pub author: String, pub reason: String }

#[derive(ToSchema)]
pub struct EventDoc {
    pub id: i32,
    pub author: String,
    pub reason: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct DayCountDoc { pub count: i64 }

#[derive(ToSchema)]
pub struct ClearResultDoc { pub message: String, pub deleted: u64 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::events::create_event,
        crate::routes::events::list_events,
        crate::routes::events::count_days_since_last,
        crate::routes::events::clear_events,
    ),
    components(
        schemas(
            HealthResponse,
            CreateEventDoc,
            EventDoc,
            DayCountDoc,
            ClearResultDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "events")
    )
)]
pub struct ApiDoc;
