//! Request logger: one line per request with method, path, status and elapsed time.

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::{Local, NaiveDateTime};
use core_config::tracing::ACCESS_LOG_TARGET;
use std::fmt;
use std::time::{Duration, Instant};

/// A single access log record.
///
/// Renders as `2024/05/01 13:07:42 GET /users/1 status:Not Found duration:2ms 41μ`.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub timestamp: NaiveDateTime,
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    pub elapsed: Duration,
}

impl fmt::Display for AccessLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} status:{} duration:{}",
            self.timestamp.format("%Y/%m/%d %H:%M:%S"),
            self.method,
            self.path,
            self.status.canonical_reason().unwrap_or("Unknown"),
            format_duration(self.elapsed)
        )
    }
}

/// Seconds, milliseconds and microseconds, dropping leading zero components.
///
/// `41μ`, `2ms 41μ`, `1s 0ms 7μ`.
pub fn format_duration(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    let millis = elapsed.subsec_millis();
    let micros = elapsed.subsec_micros() % 1000;

    match (seconds, millis) {
        (0, 0) => format!("{micros}μ"),
        (0, _) => format!("{millis}ms {micros}μ"),
        _ => format!("{seconds}s {millis}ms {micros}μ"),
    }
}

/// Middleware timing the whole request and emitting an [`AccessLogEntry`] on the
/// `access_log` target.
pub async fn access_log(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let entry = AccessLogEntry {
        timestamp: Local::now().naive_local(),
        method,
        path,
        status: response.status(),
        elapsed: start.elapsed(),
    };
    tracing::info!(target: ACCESS_LOG_TARGET, "{entry}");

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, middleware, routing::get};
    use chrono::NaiveDate;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// Writer collecting formatted events for assertions
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_format_duration_micros_only() {
        assert_eq!(format_duration(Duration::from_micros(41)), "41μ");
        assert_eq!(format_duration(Duration::ZERO), "0μ");
    }

    #[test]
    fn test_format_duration_millis() {
        assert_eq!(format_duration(Duration::from_micros(2_041)), "2ms 41μ");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms 0μ");
    }

    #[test]
    fn test_format_duration_seconds_keep_inner_zeros() {
        assert_eq!(format_duration(Duration::from_micros(1_000_007)), "1s 0ms 7μ");
        assert_eq!(format_duration(Duration::from_micros(12_345_678)), "12s 345ms 678μ");
    }

    #[test]
    fn test_entry_display() {
        let entry = AccessLogEntry {
            timestamp: NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|d| d.and_hms_opt(9, 7, 2))
                .unwrap(),
            method: Method::GET,
            path: "/users/1".to_string(),
            status: StatusCode::NOT_FOUND,
            elapsed: Duration::from_micros(2_041),
        };

        assert_eq!(
            entry.to_string(),
            "2024/05/01 09:07:02 GET /users/1 status:Not Found duration:2ms 41μ"
        );
    }

    #[tokio::test]
    async fn test_middleware_passes_response_through() {
        let app = Router::new()
            .route("/users", get(|| async { StatusCode::CONFLICT }))
            .layer(middleware::from_fn(access_log));

        let response = app
            .oneshot(
                axum::http::Request::get("/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_middleware_logs_unmatched_route() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = Router::new()
            .route("/users", get(|| async { StatusCode::OK }))
            .fallback(|| async { StatusCode::NOT_FOUND })
            .layer(middleware::from_fn(access_log));

        let response = app
            .oneshot(axum::http::Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let output = captured.contents();
        assert!(output.contains(ACCESS_LOG_TARGET), "{output}");
        assert!(output.contains("GET /nope status:Not Found duration:"), "{output}");
    }
}
