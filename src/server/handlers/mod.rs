pub mod routes;

pub async fn health() -> &'static str {
    "ok"
}
