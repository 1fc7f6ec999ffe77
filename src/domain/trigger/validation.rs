use super::error::TriggerError;
use super::types::TriggerConfig;

fn validate_not_empty(value: &str, error_msg: &str) -> Result<(), TriggerError> {
    if value.trim().is_empty() {
        return Err(TriggerError::invalid_config(error_msg));
    }
    Ok(())
}

/// HTML ids may hold any character except ASCII whitespace.
pub fn validate_control_id(control_id: &str) -> Result<(), TriggerError> {
    validate_not_empty(control_id, "Control id cannot be empty or whitespace only")?;
    if control_id.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(TriggerError::invalid_config(
            "Control id cannot contain whitespace",
        ));
    }
    Ok(())
}

pub fn validate_endpoint(endpoint: &str) -> Result<(), TriggerError> {
    validate_not_empty(endpoint, "Endpoint cannot be empty or whitespace only")?;
    if endpoint.chars().any(char::is_whitespace) {
        return Err(TriggerError::invalid_config("Endpoint cannot contain whitespace"));
    }
    let relative = endpoint.starts_with('/') && !endpoint.starts_with("//");
    let absolute = endpoint.starts_with("http://") || endpoint.starts_with("https://");
    if !relative && !absolute {
        return Err(TriggerError::invalid_config(
            "Endpoint must be a path starting with '/' or an http(s) URL",
        ));
    }
    Ok(())
}

/// Custom event names such as `app:start` are accepted.
pub fn validate_event(event: &str) -> Result<(), TriggerError> {
    validate_not_empty(event, "Event name cannot be empty or whitespace only")?;
    if event.chars().any(char::is_whitespace) {
        return Err(TriggerError::invalid_config("Event name cannot contain whitespace"));
    }
    Ok(())
}

pub fn validate_config(config: &TriggerConfig) -> Result<(), TriggerError> {
    validate_control_id(&config.control_id)?;
    validate_endpoint(&config.endpoint)?;
    validate_event(&config.event)
}
