#![allow(dead_code)]

use logistica_client::ApiClient;
use mockito::{Server, ServerGuard};
use serde_json::{json, Value};
use uuid::Uuid;

pub async fn server() -> ServerGuard {
    Server::new_async().await
}

/// A client pointed at the mock server, which stands in for `/api/v1`.
pub fn client(server: &ServerGuard) -> ApiClient {
    ApiClient::new(server.url())
}

pub fn profile_json(id: Uuid, module: &str) -> Value {
    json!({
        "id": id,
        "email": "operador@logistica.test",
        "module": module,
        "employee": null,
        "operator": null,
        "last_login_at": "2026-10-17T12:00:00Z"
    })
}

pub fn error_json(message: &str, code: &str) -> String {
    json!({ "message": message, "code": code }).to_string()
}

/// A page body shaped like the server's `Page<T>`.
pub fn page_json(rows: Vec<Value>, page: i64, limit: i64, total: i64) -> Value {
    let total_pages = (total + limit - 1) / limit;
    json!({
        "data": rows,
        "pagination": {
            "page": page,
            "limit": limit,
            "total": total,
            "total_pages": total_pages,
            "has_previous": page > 1,
            "has_next": page < total_pages
        }
    })
}

pub fn tariff_json(n: u32, route_id: Uuid) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "code": format!("TAR-{n:03}"),
        "route_id": route_id,
        "container_type": "40HC",
        "amount_cents": 250_000,
        "currency": "USD",
        "created_at": "2026-10-01T00:00:00Z",
        "updated_at": "2026-10-01T00:00:00Z"
    })
}

pub fn client_json(name: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "name": name,
        "tax_id": "20123456789",
        "email": null,
        "phone": null
    })
}

pub fn route_json(code: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "code": code,
        "origin": "Callao",
        "destination": "Shanghai",
        "transit_days": 32
    })
}

pub fn operation_json(code: &str, status: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "code": code,
        "vessel_id": Uuid::new_v4(),
        "status": status,
        "container_count": 40,
        "progress": 50,
        "origin_port": "Callao",
        "destination_port": "Manzanillo",
        "departed_at": null,
        "estimated_arrival": null,
        "created_at": "2026-10-01T00:00:00Z",
        "updated_at": "2026-10-01T00:00:00Z"
    })
}

pub fn incident_json(id: Uuid, operation_id: Uuid, code: &str) -> Value {
    json!({
        "id": id,
        "code": code,
        "operation_id": operation_id,
        "incident_type_id": Uuid::new_v4(),
        "incident_status_id": Uuid::new_v4(),
        "description": "Crane outage at berth 4",
        "severity": 3,
        "occurred_at": "2026-10-01T08:30:00Z"
    })
}

pub fn report_json(id: Uuid, operation_id: Uuid, incident_ids: &[Uuid]) -> Value {
    json!({
        "id": id,
        "code": "REP-20261018-0A1B2C",
        "operation_id": operation_id,
        "report_date": "2026-10-18",
        "detail": "",
        "created_at": "2026-10-18T09:00:00Z",
        "updated_at": "2026-10-18T09:00:00Z",
        "incident_ids": incident_ids
    })
}
