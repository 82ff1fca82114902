use axum::{extract::ConnectInfo, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::net::SocketAddr;

#[derive(Debug, Serialize)]
pub struct WhoAmI {
    pub ip: String,
    pub timestamp: String,
}

/// Report the peer address of the connection and the current UTC time
///
/// The address is the one the server observed for the TCP connection,
/// proxy headers such as `X-Forwarded-For` are not consulted.
pub async fn whoami(ConnectInfo(peer): ConnectInfo<SocketAddr>) -> impl IntoResponse {
    let reply = WhoAmI {
        ip: peer.ip().to_string(),
        timestamp: format_utc(Utc::now()),
    };

    (StatusCode::OK, Json(reply))
}

pub async fn unknown_route() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found\n")
}

fn format_utc(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_utc() {
        let time = Utc.with_ymd_and_hms(2024, 3, 5, 14, 22, 9).unwrap();
        assert_eq!(format_utc(time), "2024-03-05 14:22:09 UTC");
    }

    #[test]
    fn test_format_utc_zero_padding() {
        let time = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_utc(time), "2026-01-02 03:04:05 UTC");
    }

    #[tokio::test]
    async fn test_whoami_reports_peer_ip() {
        let peer: SocketAddr = "203.0.113.7:49152".parse().unwrap();
        let response = whoami(ConnectInfo(peer)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["ip"], "203.0.113.7");
    }
}
