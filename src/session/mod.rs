pub mod csrf;

use actix_session::Session;

use crate::errors::AppError;

const BOOKING_KEY: &str = "booking_key";

/// Key of this visitor's booking attempt in the `BookingStore`, created on first use.
pub fn booking_key(session: &Session) -> Result<String, AppError> {
    match session.get::<String>(BOOKING_KEY) {
        Ok(Some(key)) => Ok(key),
        Ok(None) => {
            let key = csrf::generate_token();
            session
                .insert(BOOKING_KEY, &key)
                .map_err(|e| AppError::Session(format!("Failed to store booking key: {e}")))?;
            Ok(key)
        }
        Err(e) => Err(AppError::Session(format!("Failed to read booking key: {e}"))),
    }
}
