#[cfg(test)]
use crate::features::itinerary::models::TripRequest;

#[cfg(test)]
use axum::Router;

/// A draft that passes every form rule
#[cfg(test)]
pub fn valid_trip_request() -> TripRequest {
    TripRequest {
        to: "Paris".to_string(),
        from: "London".to_string(),
        start_date: "2025-06-01".to_string(),
        end_date: "2025-06-07".to_string(),
        number_of_adults: Some(2),
        description: "Museums and long lunches".to_string(),
    }
}

/// Serve `router` on an ephemeral local port, returning its base URL
///
/// Routes are expected under `/api`, matching the default base URL layout.
#[cfg(test)]
pub async fn spawn_test_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test service");
    });
    format!("http://{}/api", addr)
}

/// Base URL of a local port with nothing listening on it
#[cfg(test)]
pub async fn closed_service_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");
    drop(listener);
    format!("http://{}/api", addr)
}
