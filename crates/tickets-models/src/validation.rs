//! Field rules shared by the request DTOs.

use validator::ValidationError;

/// PostgreSQL `TEXT` cannot store `\0`, so such input is refused up front.
pub fn no_nul_bytes(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_byte"));
    }
    Ok(())
}
