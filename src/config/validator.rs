//! Settings validation. Connection problems are left to the store; only values that can
//! never work are rejected here.

use crate::config::Settings;
use crate::error::ConfigError;

pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.max_body_bytes == 0 {
        return Err(ConfigError::Invalid {
            name: "MAX_BODY_BYTES",
            value: "0".into(),
        });
    }
    let names = [
        ("DB_NAME", &settings.mongo.database),
        ("TOYS_COLLECTION", &settings.mongo.toys_collection),
        ("REVIEWS_COLLECTION", &settings.mongo.reviews_collection),
    ];
    for (name, value) in names {
        // '$' and NUL are reserved in database and collection names.
        if value.contains('$') || value.contains('\0') {
            return Err(ConfigError::Invalid {
                name,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert!(validate(&Settings::default()).is_ok());
    }

    #[test]
    fn rejects_reserved_collection_name() {
        let mut s = Settings::default();
        s.mongo.toys_collection = "cars$".into();
        assert!(matches!(
            validate(&s),
            Err(ConfigError::Invalid { name: "TOYS_COLLECTION", .. })
        ));
    }

    #[test]
    fn rejects_zero_body_limit() {
        let s = Settings {
            max_body_bytes: 0,
            ..Settings::default()
        };
        assert!(validate(&s).is_err());
    }
}
