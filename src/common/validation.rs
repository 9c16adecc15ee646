// src/common/validation.rs

use validator::ValidationError;

// ---
// Validações customizadas compartilhadas pelos payloads
// ---

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

// O validator passa números (Copy) por valor para funções `custom`.
pub fn validate_not_negative_i32(val: i32) -> Result<(), ValidationError> {
    if val < 0 {
        let mut err = error("range", "value cannot be negative");
        err.add_param("min".into(), &0);
        return Err(err);
    }
    Ok(())
}

pub fn validate_not_negative_f64(val: f64) -> Result<(), ValidationError> {
    if val.is_sign_negative() && val != 0.0 {
        let mut err = error("range", "value cannot be negative");
        err.add_param("min".into(), &0.0);
        return Err(err);
    }
    Ok(())
}
