//! Best-effort serialization of arbitrary values for log lines.

use serde::Serialize;

/// Serialize `value` to compact JSON for inclusion in a log message.
///
/// This never fails: a serialization error is forwarded to the log sink at
/// info level and the empty string is returned instead, so building a
/// diagnostic line can never raise a second error.
pub fn to_log_string<T>(value: &T) -> String
where
    T: Serialize + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::info!(
                error = %e,
                value_type = std::any::type_name::<T>(),
                "Failed to serialize value for logging"
            );
            String::new()
        }
    }
}
